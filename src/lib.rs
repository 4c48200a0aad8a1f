//! # gini-cart
//!
//! A CART decision tree classifier scored by Gini impurity, for small
//! tables mixing categorical and numeric features.
//!
//! ```rust
//! use gini_cart::{Dataset, DecisionTreeClassifier, FeatureNames, Value};
//!
//! let data = Dataset::from_json(
//!     r#"[["ensolarado", 50, "sim"], ["ensolarado", 50, "nao"], ["chuvoso", 10, "sim"],
//!         ["chuvoso", 50, "nao"], ["ensolarado", 10, "sim"]]"#,
//! )
//! .unwrap();
//!
//! let mut model = DecisionTreeClassifier::default()
//!     .set_feature_names(FeatureNames::new(["tempo", "vento", "joga"]));
//! model.fit(&data).unwrap();
//!
//! let row = [Value::from("chuvoso"), Value::Int(10)];
//! assert_eq!(model.predict(&row).unwrap().to_string(), "{'sim': '100%'}");
//! ```

// Modules
pub mod classifier;
pub mod config;
pub mod data;
pub mod errors;
pub mod export;
pub mod impurity;
pub mod node;
pub mod prediction;
pub mod question;
pub mod splitter;
pub mod tree;

// Individual classes, and functions
pub use classifier::DecisionTreeClassifier;
pub use config::{TreeConfig, ValueOrder};
pub use data::{Dataset, FeatureNames, Row, Value};
pub use errors::CartError;
pub use impurity::{class_counts, gini, information_gain, ClassCounts};
pub use node::{classify, print_tree, Node};
pub use prediction::{format_prediction, Prediction};
pub use question::Question;
pub use splitter::{find_best_split, partition, GiniSplitter, Splitter};
pub use tree::{build_tree, Tree};
