//! Export
//!
//! Graphviz DOT rendering of a fitted tree.
use crate::data::FeatureNames;
use crate::node::Node;
use crate::tree::Tree;
use std::fmt::{self, Display, Write};

fn escape(label: &str) -> String {
    label.replace('\\', "\\\\").replace('"', "\\\"")
}

fn node_label(node: &Node, names: Option<&FeatureNames>) -> String {
    let counts = node.class_counts();
    let mut lines = Vec::with_capacity(5);
    if let Node::Decision(d) = node {
        lines.push(d.question.describe(names));
    }
    if let Ok(impurity) = counts.gini() {
        lines.push(format!("gini = {:.3}", impurity));
    }
    lines.push(format!("samples = {}", counts.total()));
    lines.push(format!("value = {}", counts));
    if let Some(label) = counts.majority() {
        lines.push(format!("class = {}", label));
    }
    lines.iter().map(|l| escape(l)).collect::<Vec<_>>().join("\\n")
}

/// Pre-order walk, returns the id of `node`.
fn write_node<W: Write>(
    out: &mut W,
    node: &Node,
    names: Option<&FeatureNames>,
    next_id: &mut usize,
) -> Result<usize, fmt::Error> {
    let id = *next_id;
    *next_id += 1;
    writeln!(out, "{} [label=\"{}\"] ;", id, node_label(node, names))?;
    if let Node::Decision(d) = node {
        let true_id = write_node(out, &d.true_branch, names, next_id)?;
        let false_id = write_node(out, &d.false_branch, names, next_id)?;
        if id == 0 {
            writeln!(out, "{} -> {} [labeldistance=2.5, labelangle=45, headlabel=\"True\"] ;", id, true_id)?;
            writeln!(out, "{} -> {} [labeldistance=2.5, labelangle=-45, headlabel=\"False\"] ;", id, false_id)?;
        } else {
            writeln!(out, "{} -> {} ;", id, true_id)?;
            writeln!(out, "{} -> {} ;", id, false_id)?;
        }
    }
    Ok(id)
}

/// Write the Graphviz DOT source for `tree` to `out`.
///
/// Nodes are numbered in pre-order, the true branch of a node always
/// comes before its false branch.
pub fn write_graphviz<W: Write>(out: &mut W, tree: &Tree, names: Option<&FeatureNames>) -> fmt::Result {
    out.write_str("digraph Tree {\n")?;
    out.write_str("node [shape=box, style=\"rounded\", fontname=\"helvetica\"] ;\n")?;
    out.write_str("edge [fontname=\"helvetica\"] ;\n")?;
    let mut next_id = 0;
    write_node(out, &tree.root, names, &mut next_id)?;
    out.write_str("}\n")
}

struct Graphviz<'a> {
    tree: &'a Tree,
    names: Option<&'a FeatureNames>,
}

impl Display for Graphviz<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write_graphviz(f, self.tree, self.names)
    }
}

/// Graphviz DOT source for `tree`, see [`write_graphviz`].
pub fn export_graphviz(tree: &Tree, names: Option<&FeatureNames>) -> String {
    Graphviz { tree, names }.to_string()
}
