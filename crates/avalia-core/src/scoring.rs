//! Score averaging and classification thresholds.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Arithmetic mean of the numeric values in a ratings object, rounded to two
/// decimal places.
///
/// Non-numeric values are silently ignored; an empty object (or one with no
/// numeric values) averages to `0.0`. Payloads are stored and re-read as
/// loosely-typed JSON, so the entry point takes a JSON object rather than a
/// typed map.
pub fn average_score(ratings: &Map<String, Value>) -> f64 {
    let vals: Vec<f64> = ratings.values().filter_map(Value::as_f64).collect();
    if vals.is_empty() {
        return 0.0;
    }
    let mean = vals.iter().sum::<f64>() / vals.len() as f64;
    (mean * 100.0).round() / 100.0
}

/// The four-bucket label derived from an averaged score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Classification {
    /// No ratings yet (score exactly zero).
    NoData,
    /// 0 < score < 2
    Insatisfatorio,
    /// 2 ≤ score < 3
    Regular,
    /// 3 ≤ score < 4.25
    Bom,
    /// score ≥ 4.25
    Excelente,
}

impl Classification {
    /// The label shown to users and stored in payloads.
    pub fn label(&self) -> &'static str {
        match self {
            Classification::NoData => "—",
            Classification::Insatisfatorio => "Insatisfatório",
            Classification::Regular => "Regular",
            Classification::Bom => "Bom",
            Classification::Excelente => "Excelente",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Map an averaged score to its classification.
///
/// Buckets are half-open on the low end: exactly 2.00 is Regular, exactly
/// 3.00 is Bom, exactly 4.25 is Excelente.
pub fn classify(score: f64) -> Classification {
    if score == 0.0 {
        return Classification::NoData;
    }
    if score < 2.0 {
        return Classification::Insatisfatorio;
    }
    if score < 3.0 {
        return Classification::Regular;
    }
    if score < 4.25 {
        return Classification::Bom;
    }
    Classification::Excelente
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn ratings(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn average_of_empty_map_is_zero() {
        assert_eq!(average_score(&Map::new()), 0.0);
    }

    #[test]
    fn average_ignores_non_numeric_values() {
        let r = ratings(json!({"a": 4, "b": "n/a", "c": 2, "d": null}));
        assert_eq!(average_score(&r), 3.0);
    }

    #[test]
    fn average_of_only_non_numeric_is_zero() {
        let r = ratings(json!({"a": "x", "b": null}));
        assert_eq!(average_score(&r), 0.0);
    }

    #[test]
    fn average_rounds_to_two_decimals() {
        let r = ratings(json!({"a": 1, "b": 2, "c": 2}));
        // 5/3 = 1.666... -> 1.67
        assert_eq!(average_score(&r), 1.67);
    }

    #[test]
    fn average_of_ten_fives_is_five() {
        let r = ratings(json!({
            "a": 5, "b": 5, "c": 5, "d": 5, "e": 5,
            "f": 5, "g": 5, "h": 5, "i": 5, "j": 5
        }));
        assert_eq!(average_score(&r), 5.0);
        assert_eq!(classify(5.0), Classification::Excelente);
    }

    #[test]
    fn classify_boundaries() {
        assert_eq!(classify(0.0).label(), "—");
        assert_eq!(classify(1.99).label(), "Insatisfatório");
        assert_eq!(classify(2.0).label(), "Regular");
        assert_eq!(classify(2.99).label(), "Regular");
        assert_eq!(classify(3.0).label(), "Bom");
        assert_eq!(classify(4.24).label(), "Bom");
        assert_eq!(classify(4.25).label(), "Excelente");
        assert_eq!(classify(5.0).label(), "Excelente");
    }

    #[test]
    fn classify_just_above_zero_is_insatisfatorio() {
        assert_eq!(classify(0.01), Classification::Insatisfatorio);
        assert_eq!(classify(1.0), Classification::Insatisfatorio);
    }
}
