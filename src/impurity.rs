//! Impurity
//!
//! Class distribution statistics, Gini impurity and information gain.
use crate::data::Value;
use crate::errors::CartError;
use hashbrown::HashMap;
use std::fmt::{self, Display};

/// Occurrences of each label over a set of rows.
///
/// Labels are kept in the order they were first seen, so that sums over
/// the distribution are reproducible from one run to the next.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ClassCounts {
    counts: Vec<(Value, usize)>,
    positions: HashMap<Value, usize>,
}

impl ClassCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one more occurrence of `label`.
    pub fn add(&mut self, label: &Value) {
        self.add_n(label, 1);
    }

    fn add_n(&mut self, label: &Value, n: usize) {
        match self.positions.get(label) {
            Some(&i) => self.counts[i].1 += n,
            None => {
                self.positions.insert(label.clone(), self.counts.len());
                self.counts.push((label.clone(), n));
            }
        }
    }

    /// Fold the counts of `other` into these ones.
    pub fn merge(&mut self, other: &ClassCounts) {
        for (label, n) in other.iter() {
            self.add_n(label, n);
        }
    }

    pub fn get(&self, label: &Value) -> usize {
        self.positions.get(label).map_or(0, |&i| self.counts[i].1)
    }

    /// Total number of rows counted.
    pub fn total(&self) -> usize {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Number of distinct labels.
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, usize)> {
        self.counts.iter().map(|(label, n)| (label, *n))
    }

    /// Most frequent label, the first seen wins ties.
    pub fn majority(&self) -> Option<&Value> {
        let mut best: Option<(&Value, usize)> = None;
        for (label, n) in self.iter() {
            if best.map_or(true, |(_, b)| n > b) {
                best = Some((label, n));
            }
        }
        best.map(|(label, _)| label)
    }

    /// Gini impurity of the counted distribution.
    pub fn gini(&self) -> Result<f64, CartError> {
        let total = self.total();
        if total == 0 {
            return Err(CartError::EmptyDataset);
        }
        let total = total as f64;
        let mut impurity = 1.0;
        for (_, n) in self.iter() {
            let p = n as f64 / total;
            impurity -= p * p;
        }
        Ok(impurity)
    }
}

impl Display for ClassCounts {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(label, n)| format!("{}: {}", label.literal(), n))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

/// Count label occurrences, the label being the last value of each row.
pub fn class_counts(rows: &[&[Value]]) -> ClassCounts {
    let mut counts = ClassCounts::new();
    for label in rows.iter().filter_map(|row| row.last()) {
        counts.add(label);
    }
    counts
}

/// Gini impurity, `1 - sum(p_label^2)`.
///
/// Zero for a pure set of rows, `1 - 1/k` for `k` balanced labels.
/// An empty set of rows is an error.
pub fn gini(rows: &[&[Value]]) -> Result<f64, CartError> {
    class_counts(rows).gini()
}

/// Impurity of the parent minus the size weighted impurity of both sides.
/// Neither side may be empty.
pub fn information_gain(left: &[&[Value]], right: &[&[Value]], current_impurity: f64) -> Result<f64, CartError> {
    let p = left.len() as f64 / (left.len() + right.len()) as f64;
    Ok(current_impurity - p * gini(left)? - (1.0 - p) * gini(right)?)
}
