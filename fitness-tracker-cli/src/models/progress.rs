use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressEntry {
    #[serde(default)]
    pub id: Option<serde_json::Value>,
    pub date: String,
    pub weight: f64,
    #[serde(default)]
    pub body_measurements: String,
    #[serde(default)]
    pub notes: String,
}

/// The four inputs of the progress form
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressForm {
    pub date: String,
    pub weight: f64,
    pub body_measurements: String,
    pub notes: String,
}

/// One rendered line of the progress table
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressRow {
    pub date: String,
    pub weight: String,
    pub body_measurements: String,
    pub notes: String,
}

impl From<&ProgressEntry> for ProgressRow {
    fn from(entry: &ProgressEntry) -> Self {
        Self {
            date: entry.date.clone(),
            weight: format!("{} kg", entry.weight),
            body_measurements: entry.body_measurements.clone(),
            notes: entry.notes.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_formatting() {
        let entry: ProgressEntry = serde_json::from_value(serde_json::json!({
            "id": 1,
            "date": "2025-01-09",
            "weight": 70,
            "bodyMeasurements": "Chest: 100cm",
            "notes": "Feeling good!"
        }))
        .unwrap();

        let row = ProgressRow::from(&entry);
        assert_eq!(row.date, "2025-01-09");
        assert_eq!(row.weight, "70 kg");
        assert_eq!(row.body_measurements, "Chest: 100cm");
        assert_eq!(row.notes, "Feeling good!");

        let fractional = ProgressEntry {
            weight: 79.5,
            ..entry
        };
        assert_eq!(ProgressRow::from(&fractional).weight, "79.5 kg");
    }

    #[test]
    fn test_form_serializes_camel_case() {
        let form = ProgressForm {
            date: "2025-01-09".to_string(),
            weight: 70.0,
            body_measurements: "Chest: 100cm, Waist: 80cm".to_string(),
            notes: "Feeling good!".to_string(),
        };

        let json = serde_json::to_value(&form).unwrap();
        assert_eq!(json["bodyMeasurements"], "Chest: 100cm, Waist: 80cm");
        assert_eq!(json["weight"], 70.0);
    }
}
