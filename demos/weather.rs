//! Play Tennis Weather
//! ===================
//! Builds a tree deciding whether to play ("joga") from the outlook
//! ("tempo") and the wind ("vento"), prints it, and classifies two held
//! out rows.
//!
//! ```bash
//! cargo run --example weather
//! ```

use gini_cart::{Dataset, DecisionTreeClassifier, FeatureNames, Value};
use std::error::Error;

/// Read a csv file with a header line into names and rows.
fn read_csv(path: &str) -> Result<(Vec<String>, Dataset), Box<dyn Error>> {
    let mut reader = csv::Reader::from_path(path)?;
    let header: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    let mut rows: Vec<Vec<Value>> = Vec::new();
    for record in reader.records() {
        rows.push(record?.iter().map(Value::parse).collect());
    }
    Ok((header, Dataset::new(rows)?))
}

fn main() -> Result<(), Box<dyn Error>> {
    let (header, training) = read_csv("resources/weather.csv")?;
    let (_, testing) = read_csv("resources/weather_test.csv")?;

    let mut model =
        DecisionTreeClassifier::default().set_feature_names(FeatureNames::for_dataset(header, &training)?);
    model.fit(&training)?;
    print!("{}", model.print_tree()?);

    for row in testing.rows() {
        let label = row.last().map(Value::to_string).unwrap_or_default();
        println!("Actual: {}. Predicted: {}", label, model.predict(row)?);
    }
    Ok(())
}
