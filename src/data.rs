//! Data
//!
//! Row values, the validated `Dataset` container, and the feature names
//! used when rendering questions.
use crate::errors::CartError;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt::{self, Display};
use std::hash::{Hash, Hasher};

/// A single cell of a row.
///
/// `Int` and `Float` are both numeric: they compare, hash and order by
/// their exact numeric value, so `Int(50)` and `Float(50.0)` are the same
/// value while `Int(2^53)` and `Int(2^53 + 1)` stay apart.
/// Everything else is categorical text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Integer value.
    Int(i64),
    /// Floating point value.
    Float(f64),
    /// Categorical value.
    Text(String),
}

/// A row of feature values followed by the label.
pub type Row = Vec<Value>;

/// Normalize a float so that equal values share one bit pattern.
#[inline]
fn canonical(v: f64) -> f64 {
    if v == 0.0 {
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

/// `2^63`, the first float above every `i64`.
const I64_UPPER: f64 = 9_223_372_036_854_775_808.0;

/// Exact ordering of an integer against a float, NaN sorting last.
fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= I64_UPPER {
        return Ordering::Less;
    }
    if f < -I64_UPPER {
        return Ordering::Greater;
    }
    let whole = f.trunc();
    match i.cmp(&(whole as i64)) {
        Ordering::Equal => 0.0_f64.total_cmp(&canonical(f - whole)),
        ord => ord,
    }
}

/// Whether `i` survives a round trip through `f64`.
fn exact_as_f64(i: i64) -> bool {
    (i as f64) as i128 == i128::from(i)
}

impl Value {
    /// Numeric view of the value, `None` for text.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(v) => Some(*v as f64),
            Value::Float(v) => Some(*v),
            Value::Text(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        !matches!(self, Value::Text(_))
    }

    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Float(v) if v.is_nan())
    }

    /// Parse a raw field, trying an integer, then a finite float, and
    /// falling back to text. Surrounding whitespace is dropped.
    pub fn parse(field: &str) -> Value {
        let trimmed = field.trim();
        if let Ok(v) = trimmed.parse::<i64>() {
            return Value::Int(v);
        }
        match trimmed.parse::<f64>() {
            Ok(v) if v.is_finite() => Value::Float(v),
            _ => Value::Text(trimmed.to_string()),
        }
    }

    /// Python-like literal, text is quoted.
    pub(crate) fn literal(&self) -> String {
        match self {
            Value::Text(s) => format!("'{}'", s),
            _ => self.to_string(),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Value::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
            // Only integers with an exact float twin can equal a `Float`.
            Value::Int(i) if !exact_as_f64(*i) => {
                2u8.hash(state);
                i.hash(state);
            }
            Value::Int(i) => {
                0u8.hash(state);
                canonical(*i as f64).to_bits().hash(state);
            }
            Value::Float(f) => {
                0u8.hash(state);
                canonical(*f).to_bits().hash(state);
            }
        }
    }
}

impl Ord for Value {
    /// Numbers sort before text, numbers by exact value, text
    /// lexicographically.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Int(a), Value::Int(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => canonical(*a).total_cmp(&canonical(*b)),
            (Value::Int(a), Value::Float(b)) => cmp_int_float(*a, *b),
            (Value::Float(a), Value::Int(b)) => cmp_int_float(*b, *a).reverse(),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Text(_), _) => Ordering::Greater,
            (_, Value::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) if v.is_finite() && v.fract() == 0.0 => write!(f, "{:.1}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

/// Check that a set of borrowed rows is usable for training, returning
/// the shared row arity.
pub fn check_rows(rows: &[&[Value]]) -> Result<usize, CartError> {
    let first = rows.first().ok_or(CartError::EmptyDataset)?;
    let arity = first.len();
    if arity == 0 {
        return Err(CartError::EmptyRow(0));
    }
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != arity) {
        return Err(CartError::RaggedRow(i, arity, row.len()));
    }
    Ok(arity)
}

/// An owned, validated set of rows.
///
/// Every row has the same number of values, the last one being the label.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Row>,
    n_cols: usize,
}

impl Dataset {
    /// Validate and wrap a set of rows.
    pub fn new(rows: Vec<Row>) -> Result<Self, CartError> {
        let n_cols = {
            let refs: Vec<&[Value]> = rows.iter().map(|r| r.as_slice()).collect();
            check_rows(&refs)?
        };
        Ok(Dataset { rows, n_cols })
    }

    /// Load rows from a json array of arrays, e.g.
    /// `[["ensolarado", 50, "sim"], ["chuvoso", 10, "nao"]]`.
    pub fn from_json(json_str: &str) -> Result<Self, CartError> {
        let rows: Vec<Row> =
            serde_json::from_str(json_str).map_err(|e| CartError::UnableToRead(e.to_string()))?;
        Self::new(rows)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Borrowed view of every row, the form the training functions take.
    pub fn row_refs(&self) -> Vec<&[Value]> {
        self.rows.iter().map(|r| r.as_slice()).collect()
    }

    /// Number of values per row, label included.
    pub fn n_cols(&self) -> usize {
        self.n_cols
    }

    pub fn n_features(&self) -> usize {
        self.n_cols - 1
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false, empty datasets are rejected on construction.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Names for every column of a row, the label column included.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureNames {
    names: Vec<String>,
}

impl FeatureNames {
    pub fn new<S: Into<String>>(names: impl IntoIterator<Item = S>) -> Self {
        FeatureNames {
            names: names.into_iter().map(Into::into).collect(),
        }
    }

    /// Build names that must line up with the columns of `dataset`.
    pub fn for_dataset<S: Into<String>>(
        names: impl IntoIterator<Item = S>,
        dataset: &Dataset,
    ) -> Result<Self, CartError> {
        let names = Self::new(names);
        names.check_arity(dataset.n_cols())?;
        Ok(names)
    }

    pub fn check_arity(&self, n_cols: usize) -> Result<(), CartError> {
        if self.names.len() != n_cols {
            return Err(CartError::HeaderMismatch(n_cols, self.names.len()));
        }
        Ok(())
    }

    pub fn get(&self, column: usize) -> Option<&str> {
        self.names.get(column).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
