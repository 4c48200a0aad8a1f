//! Question
//!
//! A single split condition: one feature column compared against one value.
use crate::data::{FeatureNames, Value};
use crate::errors::CartError;
use std::fmt::{self, Display};

/// How a row value is compared against the stored value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    /// Numeric threshold, the row matches when its value is `>=`.
    AtLeast,
    /// Categorical value, the row matches when its value is `==`.
    Equals,
}

impl Comparison {
    /// Numbers are thresholds, anything else is a category.
    pub fn for_value(value: &Value) -> Self {
        if value.is_numeric() {
            Comparison::AtLeast
        } else {
            Comparison::Equals
        }
    }

    pub fn operator(&self) -> &'static str {
        match self {
            Comparison::AtLeast => ">=",
            Comparison::Equals => "==",
        }
    }
}

/// Split condition over a feature column.
///
/// The comparison is fixed when the question is built, from the type of
/// the stored value, and never changes afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Question {
    column: usize,
    value: Value,
    comparison: Comparison,
}

impl Question {
    /// Build a question for `column` of rows with `n_features` feature
    /// columns.
    pub fn new(column: usize, value: Value, n_features: usize) -> Result<Self, CartError> {
        if column >= n_features {
            return Err(CartError::UnknownColumn(column, n_features));
        }
        let comparison = Comparison::for_value(&value);
        Ok(Question {
            column,
            value,
            comparison,
        })
    }

    pub fn column(&self) -> usize {
        self.column
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn comparison(&self) -> Comparison {
        self.comparison
    }

    /// Whether `row` answers the question with yes.
    ///
    /// A threshold question never matches a categorical row value.
    /// Panics if `row` is too short to hold the question's column.
    pub fn matches(&self, row: &[Value]) -> bool {
        let v = &row[self.column];
        match self.comparison {
            Comparison::AtLeast => v.is_numeric() && !v.is_nan() && !self.value.is_nan() && *v >= self.value,
            Comparison::Equals => *v == self.value,
        }
    }

    /// Human readable form, e.g. `Is vento >= 50?`.
    ///
    /// Columns without a name fall back to `column <index>`.
    pub fn describe(&self, names: Option<&FeatureNames>) -> String {
        let name = match names.and_then(|n| n.get(self.column)) {
            Some(name) => name.to_string(),
            None => format!("column {}", self.column),
        };
        format!("Is {} {} {}?", name, self.comparison.operator(), self.value)
    }
}

impl Display for Question {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.describe(None))
    }
}
