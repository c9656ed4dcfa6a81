//! Formula results -> JSON conversion utilities

use super::{Evaluation, TableRow};

/// Convert a float result to a JSON number. NaN and infinities have no
/// JSON form and become `null`.
pub fn number_to_json(n: f32) -> serde_json::Value {
    // Go through the shortest f32 text so 1.15 stays 1.15 rather than
    // 1.149999976158142.
    let widened = n
        .to_string()
        .parse::<f64>()
        .unwrap_or_else(|_| f64::from(n));
    serde_json::Number::from_f64(widened)
        .map(serde_json::Value::Number)
        .unwrap_or(serde_json::Value::Null)
}

/// Convert a single evaluation to a JSON object
pub fn evaluation_to_json(evaluation: &Evaluation) -> serde_json::Value {
    serde_json::json!({
        "formula": evaluation.formula,
        "l": number_to_json(evaluation.l),
        "v": number_to_json(evaluation.v),
        "result": number_to_json(evaluation.result),
    })
}

/// Convert table rows to a JSON array of `{"l", "result"}` objects
pub fn table_to_json(rows: &[TableRow]) -> serde_json::Value {
    serde_json::Value::Array(
        rows.iter()
            .map(|row| {
                serde_json::json!({
                    "l": number_to_json(row.l),
                    "result": number_to_json(row.result),
                })
            })
            .collect(),
    )
}
