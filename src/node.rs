use crate::data::{FeatureNames, Value};
use crate::impurity::{class_counts, ClassCounts};
use crate::question::Question;
use std::fmt::{self, Display, Write};

/// Terminal node, holding the label counts of the rows that reached it.
#[derive(Debug, Clone, PartialEq)]
pub struct Leaf {
    predictions: ClassCounts,
}

impl Leaf {
    pub fn new(rows: &[&[Value]]) -> Self {
        Leaf {
            predictions: class_counts(rows),
        }
    }

    pub fn predictions(&self) -> &ClassCounts {
        &self.predictions
    }
}

/// Internal node, routing rows on a question.
#[derive(Debug, Clone, PartialEq)]
pub struct DecisionNode {
    pub question: Question,
    /// Information gain of the question when the tree was built.
    pub gain: f64,
    pub true_branch: Box<Node>,
    pub false_branch: Box<Node>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Leaf(Leaf),
    Decision(DecisionNode),
}

impl Node {
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Leaf(_))
    }

    /// Walk down to the leaf reached by `row` and return its counts.
    ///
    /// # Panics
    ///
    /// Panics if `row` is shorter than a column asked on its path.
    /// `Tree::classify` checks the row length first.
    pub fn classify(&self, row: &[Value]) -> &ClassCounts {
        let mut node = self;
        loop {
            match node {
                Node::Leaf(leaf) => return leaf.predictions(),
                Node::Decision(d) => {
                    node = if d.question.matches(row) {
                        &*d.true_branch
                    } else {
                        &*d.false_branch
                    };
                }
            }
        }
    }

    /// Label counts of every training row below this node.
    pub fn class_counts(&self) -> ClassCounts {
        match self {
            Node::Leaf(leaf) => leaf.predictions().clone(),
            Node::Decision(d) => {
                let mut counts = d.true_branch.class_counts();
                counts.merge(&d.false_branch.class_counts());
                counts
            }
        }
    }

    /// Length of the longest path to a leaf, a single leaf has depth 0.
    pub fn depth(&self) -> usize {
        match self {
            Node::Leaf(_) => 0,
            Node::Decision(d) => 1 + d.true_branch.depth().max(d.false_branch.depth()),
        }
    }

    pub fn n_leaves(&self) -> usize {
        match self {
            Node::Leaf(_) => 1,
            Node::Decision(d) => d.true_branch.n_leaves() + d.false_branch.n_leaves(),
        }
    }

    /// Write the text dump of this node and its children to `out`.
    pub fn write_tree<W: Write>(&self, out: &mut W, names: Option<&FeatureNames>, spacing: &str) -> fmt::Result {
        match self {
            Node::Leaf(leaf) => writeln!(out, "{}Predict {}", spacing, leaf.predictions()),
            Node::Decision(d) => {
                writeln!(out, "{}{}", spacing, d.question.describe(names))?;
                let child_spacing = format!("{}  ", spacing);
                writeln!(out, "{}--> True:", spacing)?;
                d.true_branch.write_tree(out, names, &child_spacing)?;
                writeln!(out, "{}--> False:", spacing)?;
                d.false_branch.write_tree(out, names, &child_spacing)
            }
        }
    }
}

/// Counts stored in the leaf reached by `row` from `node`.
///
/// # Panics
///
/// Panics if `row` is shorter than a column asked on its path.
pub fn classify<'a>(row: &[Value], node: &'a Node) -> &'a ClassCounts {
    node.classify(row)
}

/// Text dump of the tree below `node`, one line per node, children
/// indented by two more spaces than `spacing`.
pub fn print_tree(node: &Node, names: Option<&FeatureNames>, spacing: &str) -> String {
    TreeText { node, names, spacing }.to_string()
}

struct TreeText<'a> {
    node: &'a Node,
    names: Option<&'a FeatureNames>,
    spacing: &'a str,
}

impl Display for TreeText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        self.node.write_tree(f, self.names, self.spacing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error;

    fn leaf(labels: &[&str]) -> Node {
        let rows: Vec<Vec<Value>> = labels.iter().map(|l| vec![Value::from(*l)]).collect();
        let refs: Vec<&[Value]> = rows.iter().map(|r| r.as_slice()).collect();
        Node::Leaf(Leaf::new(&refs))
    }

    fn stump() -> Result<Node, Box<dyn Error>> {
        Ok(Node::Decision(DecisionNode {
            question: Question::new(1, Value::Int(50), 2)?,
            gain: 0.2,
            true_branch: Box::new(leaf(&["sim", "nao", "nao"])),
            false_branch: Box::new(leaf(&["sim", "sim"])),
        }))
    }

    #[test]
    fn test_classify() -> Result<(), Box<dyn Error>> {
        let node = stump()?;
        let high = [Value::from("chuvoso"), Value::Int(50)];
        let low = [Value::from("chuvoso"), Value::Int(10)];
        assert_eq!(classify(&high, &node).get(&Value::from("nao")), 2);
        assert_eq!(classify(&low, &node).get(&Value::from("sim")), 2);
        assert_eq!(classify(&low, &node).len(), 1);
        Ok(())
    }

    #[test]
    #[should_panic]
    fn test_classify_short_row_panics() {
        let node = stump().unwrap();
        classify(&[Value::from("chuvoso")], &node);
    }

    #[test]
    fn test_node_statistics() -> Result<(), Box<dyn Error>> {
        let node = stump()?;
        assert!(!node.is_leaf());
        assert_eq!(node.depth(), 1);
        assert_eq!(node.n_leaves(), 2);
        let counts = node.class_counts();
        assert_eq!(counts.to_string(), "{'sim': 3, 'nao': 2}");
        assert_eq!(leaf(&["sim"]).depth(), 0);
        Ok(())
    }

    #[test]
    fn test_print_tree() -> Result<(), Box<dyn Error>> {
        let node = stump()?;
        let names = FeatureNames::new(["tempo", "vento", "joga"]);
        let expected = "\
Is vento >= 50?
--> True:
  Predict {'sim': 1, 'nao': 2}
--> False:
  Predict {'sim': 2}
";
        assert_eq!(print_tree(&node, Some(&names), ""), expected);
        assert!(print_tree(&node, None, "  ").starts_with("  Is column 1 >= 50?\n"));

        let mut out = String::new();
        node.write_tree(&mut out, Some(&names), "")?;
        assert_eq!(out, expected);
        Ok(())
    }
}
