//! Splitter
//!
//! Partitioning of rows by a question, and the greedy search for the
//! question with the highest information gain.
use crate::config::ValueOrder;
use crate::data::{check_rows, Value};
use crate::errors::CartError;
use crate::impurity::{gini, information_gain};
use crate::question::Question;
use hashbrown::HashSet;
use log::trace;

/// The best question found for a set of rows, along with its gain.
#[derive(Debug, Clone, PartialEq)]
pub struct SplitInfo {
    pub gain: f64,
    pub question: Question,
}

/// Split `rows` into the rows matching `question` and the rest.
///
/// Every row lands in exactly one side and both sides keep the original
/// row order.
///
/// # Panics
///
/// Panics if a row is too short to hold the question's column. Rows that
/// went through `check_rows` are long enough for any question built for
/// them.
pub fn partition<'a>(rows: &[&'a [Value]], question: &Question) -> (Vec<&'a [Value]>, Vec<&'a [Value]>) {
    rows.iter().copied().partition(|row| question.matches(row))
}

/// Distinct values of `column`, enumerated in `order`.
pub fn distinct_values(rows: &[&[Value]], column: usize, order: ValueOrder) -> Vec<Value> {
    let mut seen = HashSet::with_capacity(rows.len());
    let mut values: Vec<Value> = rows
        .iter()
        .map(|row| &row[column])
        .filter(|v| seen.insert(*v))
        .cloned()
        .collect();
    if order == ValueOrder::Sorted {
        values.sort();
    }
    values
}

/// Trait for finding the split of a set of rows.
pub trait Splitter {
    /// Enumeration order of candidate values within a column.
    fn get_value_order(&self) -> ValueOrder;

    /// Find the question with the highest information gain over every
    /// feature column and every value observed in that column.
    ///
    /// Candidates leaving one side empty are skipped. A candidate replaces
    /// the current best when its gain is `>=` the best so far, so ties go
    /// to the last candidate tried (columns ascending, then values in
    /// `get_value_order` order). Returns `None` when no candidate has a
    /// gain above zero.
    fn best_split(&self, rows: &[&[Value]]) -> Result<Option<SplitInfo>, CartError> {
        let n_features = check_rows(rows)? - 1;
        let current_impurity = gini(rows)?;

        let mut best_gain = 0.0;
        let mut best_question: Option<Question> = None;
        for column in 0..n_features {
            for value in distinct_values(rows, column, self.get_value_order()) {
                let question = Question::new(column, value, n_features)?;
                let (true_rows, false_rows) = partition(rows, &question);
                if true_rows.is_empty() || false_rows.is_empty() {
                    continue;
                }
                let gain = information_gain(&true_rows, &false_rows, current_impurity)?;
                trace!("Candidate {} has gain {}", question, gain);
                if gain > 0.0 && gain >= best_gain {
                    best_gain = gain;
                    best_question = Some(question);
                }
            }
        }

        Ok(best_question.map(|question| SplitInfo {
            gain: best_gain,
            question,
        }))
    }
}

/// Exact-split search scored by Gini impurity.
#[derive(Debug, Clone, Copy, Default)]
pub struct GiniSplitter {
    pub value_order: ValueOrder,
}

impl GiniSplitter {
    pub fn new(value_order: ValueOrder) -> Self {
        GiniSplitter { value_order }
    }
}

impl Splitter for GiniSplitter {
    fn get_value_order(&self) -> ValueOrder {
        self.value_order
    }
}

/// Best split of `rows`, trying values in first seen order.
pub fn find_best_split(rows: &[&[Value]]) -> Result<Option<SplitInfo>, CartError> {
    GiniSplitter::default().best_split(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Dataset;
    use crate::question::Comparison;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use std::error::Error;

    fn weather() -> Dataset {
        Dataset::from_json(
            r#"[["ensolarado", 50, "sim"], ["ensolarado", 50, "nao"], ["chuvoso", 10, "sim"],
                ["chuvoso", 50, "nao"], ["ensolarado", 10, "sim"]]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_partition_keeps_order() -> Result<(), Box<dyn Error>> {
        let data = weather();
        let rows = data.row_refs();
        let q = Question::new(1, Value::Int(50), 2)?;
        let (t, f) = partition(&rows, &q);
        assert_eq!(t, vec![rows[0], rows[1], rows[3]]);
        assert_eq!(f, vec![rows[2], rows[4]]);
        Ok(())
    }

    #[test]
    fn test_partition_is_complete() -> Result<(), Box<dyn Error>> {
        let mut rng = StdRng::seed_from_u64(0);
        let colors = ["red", "green", "blue"];
        let rows: Vec<Vec<Value>> = (0..200)
            .map(|_| {
                vec![
                    Value::from(colors[rng.gen_range(0..3)]),
                    Value::Int(rng.gen_range(0..10)),
                    Value::from(if rng.gen_bool(0.5) { "yes" } else { "no" }),
                ]
            })
            .collect();
        let refs: Vec<&[Value]> = rows.iter().map(|r| r.as_slice()).collect();
        for column in 0..2 {
            for value in distinct_values(&refs, column, ValueOrder::FirstSeen) {
                let q = Question::new(column, value, 2)?;
                let (t, f) = partition(&refs, &q);
                assert_eq!(t.len() + f.len(), refs.len());
                assert!(t.iter().all(|r| q.matches(r)));
                assert!(f.iter().all(|r| !q.matches(r)));
            }
        }
        Ok(())
    }

    #[test]
    fn test_distinct_values() {
        let data = weather();
        let rows = data.row_refs();
        assert_eq!(
            distinct_values(&rows, 0, ValueOrder::FirstSeen),
            vec![Value::from("ensolarado"), Value::from("chuvoso")]
        );
        assert_eq!(
            distinct_values(&rows, 0, ValueOrder::Sorted),
            vec![Value::from("chuvoso"), Value::from("ensolarado")]
        );
        assert_eq!(
            distinct_values(&rows, 1, ValueOrder::Sorted),
            vec![Value::Int(10), Value::Int(50)]
        );
    }

    #[test]
    fn test_find_best_split() -> Result<(), Box<dyn Error>> {
        let data = weather();
        let rows = data.row_refs();
        let split = find_best_split(&rows)?.expect("weather rows can be split");
        assert_eq!(split.question.column(), 1);
        assert_eq!(split.question.value(), &Value::Int(50));
        assert_eq!(split.question.comparison(), Comparison::AtLeast);
        assert!((split.gain - (0.48 - 0.6 * (4.0 / 9.0))).abs() < 1e-12);
        Ok(())
    }

    #[test]
    fn test_tie_goes_to_last_higher_or_equal_candidate() -> Result<(), Box<dyn Error>> {
        // The vento >= 50 side of the weather rows. Both tempo questions
        // make the same partition, the ensolarado one scores a few ulps
        // higher and wins in either enumeration order.
        let data = weather();
        let all = data.row_refs();
        let rows = [all[0], all[1], all[3]];
        for order in [ValueOrder::FirstSeen, ValueOrder::Sorted] {
            let split = GiniSplitter::new(order).best_split(&rows)?.expect("splittable");
            assert_eq!(split.question.column(), 0);
            assert_eq!(split.question.value(), &Value::from("ensolarado"));
            assert!((split.gain - 1.0 / 9.0).abs() < 1e-12);
        }

        // Exactly equal gains resolve to the last candidate tried.
        let data = Dataset::from_json(r#"[["a", "x"], ["b", "y"]]"#)?;
        let rows = data.row_refs();
        let first_seen = GiniSplitter::new(ValueOrder::FirstSeen).best_split(&rows)?.expect("splittable");
        assert_eq!(first_seen.question.value(), &Value::from("b"));
        let data = Dataset::from_json(r#"[["b", "y"], ["a", "x"]]"#)?;
        let rows = data.row_refs();
        let first_seen = GiniSplitter::new(ValueOrder::FirstSeen).best_split(&rows)?.expect("splittable");
        assert_eq!(first_seen.question.value(), &Value::from("a"));
        let sorted = GiniSplitter::new(ValueOrder::Sorted).best_split(&rows)?.expect("splittable");
        assert_eq!(sorted.question.value(), &Value::from("b"));
        Ok(())
    }

    #[test]
    fn test_no_split() -> Result<(), Box<dyn Error>> {
        // Pure rows.
        let data = Dataset::from_json(r#"[["a", 1, "sim"], ["b", 2, "sim"]]"#)?;
        assert_eq!(find_best_split(&data.row_refs())?, None);
        // Identical features with different labels, nothing separates them.
        let data = Dataset::from_json(r#"[["a", 1, "sim"], ["a", 1, "nao"]]"#)?;
        assert_eq!(find_best_split(&data.row_refs())?, None);
        // No feature columns at all.
        let data = Dataset::from_json(r#"[["sim"], ["nao"]]"#)?;
        assert_eq!(find_best_split(&data.row_refs())?, None);
        Ok(())
    }

    #[test]
    fn test_best_split_rejects_bad_rows() {
        assert_eq!(find_best_split(&[]), Err(CartError::EmptyDataset));
        let a = [Value::from("a"), Value::from("sim")];
        let b = [Value::from("nao")];
        assert_eq!(find_best_split(&[&a[..], &b[..]]), Err(CartError::RaggedRow(1, 2, 1)));
    }
}
