//! Prediction
//!
//! Turns leaf class counts into per-label percentages.
use crate::data::Value;
use crate::impurity::ClassCounts;
use std::fmt::{self, Display};

/// Percentage of each label in a leaf, formatted like `"66%"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    percentages: Vec<(Value, String)>,
}

impl Prediction {
    pub fn get(&self, label: &Value) -> Option<&str> {
        self.percentages
            .iter()
            .find(|(l, _)| l == label)
            .map(|(_, p)| p.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Value, &str)> {
        self.percentages.iter().map(|(l, p)| (l, p.as_str()))
    }

    pub fn len(&self) -> usize {
        self.percentages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.percentages.is_empty()
    }
}

impl Display for Prediction {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let entries: Vec<String> = self
            .iter()
            .map(|(label, p)| format!("{}: '{}'", label.literal(), p))
            .collect();
        write!(f, "{{{}}}", entries.join(", "))
    }
}

/// Share of each label in `counts`, truncated to a whole percent.
pub fn format_prediction(counts: &ClassCounts) -> Prediction {
    let total = counts.total();
    let percentages = counts
        .iter()
        .map(|(label, n)| {
            let pct = if total == 0 { 0 } else { n * 100 / total };
            (label.clone(), format!("{}%", pct))
        })
        .collect();
    Prediction { percentages }
}
