//! Decision Tree Classifier
//!
//! Model facade bundling the configuration, the optional feature names
//! and the fitted tree.
use crate::config::{TreeConfig, ValueOrder};
use crate::data::{Dataset, FeatureNames, Value};
use crate::errors::CartError;
use crate::export;
use crate::impurity::ClassCounts;
use crate::prediction::Prediction;
use crate::splitter::GiniSplitter;
use crate::tree::Tree;
use log::info;

/// CART classifier using Gini impurity.
#[derive(Debug, Clone, Default)]
pub struct DecisionTreeClassifier {
    pub cfg: TreeConfig,
    pub feature_names: Option<FeatureNames>,
    tree: Option<Tree>,
}

impl DecisionTreeClassifier {
    pub fn new(cfg: TreeConfig) -> Self {
        DecisionTreeClassifier {
            cfg,
            feature_names: None,
            tree: None,
        }
    }

    /// Set the enumeration order of candidate split values.
    /// * `value_order` - Order in which distinct column values are tried.
    pub fn set_value_order(mut self, value_order: ValueOrder) -> Self {
        self.cfg.value_order = value_order;
        self
    }

    /// Set the names used when printing the tree.
    /// * `feature_names` - One name per column, the label column included.
    pub fn set_feature_names(mut self, feature_names: FeatureNames) -> Self {
        self.feature_names = Some(feature_names);
        self
    }

    /// Fit the tree on `data`, replacing any previous fit.
    pub fn fit(&mut self, data: &Dataset) -> Result<(), CartError> {
        if let Some(names) = &self.feature_names {
            names.check_arity(data.n_cols())?;
        }
        let splitter = GiniSplitter::new(self.cfg.value_order);
        let tree = Tree::fit(data, &splitter)?;
        info!(
            "Fitted tree on {} rows: {} leaves, depth {}.",
            data.len(),
            tree.n_leaves,
            tree.depth
        );
        self.tree = Some(tree);
        Ok(())
    }

    pub fn tree(&self) -> Result<&Tree, CartError> {
        self.tree.as_ref().ok_or(CartError::NotFitted)
    }

    pub fn is_fitted(&self) -> bool {
        self.tree.is_some()
    }

    /// Label counts of the leaf `row` ends up in.
    pub fn predict_counts(&self, row: &[Value]) -> Result<&ClassCounts, CartError> {
        self.tree()?.classify(row)
    }

    /// Label percentages for `row`.
    pub fn predict(&self, row: &[Value]) -> Result<Prediction, CartError> {
        self.tree()?.predict(row)
    }

    /// Most frequent label for `row`.
    pub fn predict_label(&self, row: &[Value]) -> Result<Value, CartError> {
        let counts = self.predict_counts(row)?;
        // Leaves are built from at least one row.
        counts.majority().cloned().ok_or(CartError::EmptyDataset)
    }

    /// Most frequent label for every row of `data`.
    pub fn predict_labels(&self, data: &Dataset) -> Result<Vec<Value>, CartError> {
        data.rows().iter().map(|row| self.predict_label(row)).collect()
    }

    pub fn print_tree(&self) -> Result<String, CartError> {
        Ok(self.tree()?.render(self.feature_names.as_ref()))
    }

    pub fn export_graphviz(&self) -> Result<String, CartError> {
        Ok(export::export_graphviz(self.tree()?, self.feature_names.as_ref()))
    }
}
