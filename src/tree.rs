use crate::data::{Dataset, FeatureNames, Value};
use crate::errors::CartError;
use crate::impurity::ClassCounts;
use crate::node::{print_tree, DecisionNode, Leaf, Node};
use crate::prediction::{format_prediction, Prediction};
use crate::splitter::{partition, Splitter};
use log::{debug, warn};
use std::fmt::{self, Display};

/// Grow a tree over `rows`, splitting until no question improves purity.
///
/// Both sides of every split are non-empty and strictly smaller than
/// `rows`, so the recursion always ends.
pub fn build_tree<T: Splitter>(rows: &[&[Value]], splitter: &T) -> Result<Node, CartError> {
    match splitter.best_split(rows)? {
        None => {
            let leaf = Leaf::new(rows);
            debug!("Leaf over {} rows: {}", rows.len(), leaf.predictions());
            if leaf.predictions().len() > 1 {
                warn!(
                    "No question separates the {} rows of leaf {}, it stays impure.",
                    rows.len(),
                    leaf.predictions()
                );
            }
            Ok(Node::Leaf(leaf))
        }
        Some(split) => {
            debug!("Splitting {} rows on {} with gain {}", rows.len(), split.question, split.gain);
            let (true_rows, false_rows) = partition(rows, &split.question);
            let true_branch = build_tree(&true_rows, splitter)?;
            let false_branch = build_tree(&false_rows, splitter)?;
            Ok(Node::Decision(DecisionNode {
                question: split.question,
                gain: split.gain,
                true_branch: Box::new(true_branch),
                false_branch: Box::new(false_branch),
            }))
        }
    }
}

/// A fitted classification tree.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree {
    pub root: Node,
    pub n_features: usize,
    pub depth: usize,
    pub n_leaves: usize,
}

impl Tree {
    pub fn fit<T: Splitter>(data: &Dataset, splitter: &T) -> Result<Self, CartError> {
        let root = build_tree(&data.row_refs(), splitter)?;
        Ok(Tree {
            depth: root.depth(),
            n_leaves: root.n_leaves(),
            n_features: data.n_features(),
            root,
        })
    }

    /// Check that `row` has one value per feature, a trailing label is
    /// allowed and ignored.
    fn check_row(&self, row: &[Value]) -> Result<(), CartError> {
        if row.len() != self.n_features && row.len() != self.n_features + 1 {
            return Err(CartError::RowLength(self.n_features, row.len()));
        }
        Ok(())
    }

    /// Label counts of the leaf `row` ends up in.
    pub fn classify(&self, row: &[Value]) -> Result<&ClassCounts, CartError> {
        self.check_row(row)?;
        Ok(self.root.classify(row))
    }

    /// Label percentages of the leaf `row` ends up in.
    pub fn predict(&self, row: &[Value]) -> Result<Prediction, CartError> {
        self.classify(row).map(format_prediction)
    }

    /// Most frequent label of the leaf `row` ends up in.
    pub fn predict_label(&self, row: &[Value]) -> Result<Option<&Value>, CartError> {
        Ok(self.classify(row)?.majority())
    }

    /// Text dump of the tree, using `names` for the feature columns.
    pub fn render(&self, names: Option<&FeatureNames>) -> String {
        print_tree(&self.root, names, "")
    }
}

impl Display for Tree {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.root.write_tree(f, None, "")
    }
}
