use serde::Deserialize;

/// One prediction payload as returned by the external `/predict` endpoint.
/// When `error` is present the other fields are never read, so they all
/// default cleanly for an `{"error": ...}`-only body.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictionResponse {
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub risk_class: String,
    #[serde(default)]
    pub prediction: String,
    #[serde(default)]
    pub high_risk_probability: f64,
    #[serde(default)]
    pub low_risk_probability: f64,
    #[serde(default)]
    pub top_features: Vec<TopFeature>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopFeature {
    pub name: String,
    pub value: f64,
    pub importance: f64,
}

impl PredictionResponse {
    /// Anything other than exactly "high" counts as low risk.
    pub fn is_high_risk(&self) -> bool {
        self.risk_class == "high"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_full_payload() {
        let body = r#"{
            "risk_class": "high",
            "prediction": "High Risk",
            "high_risk_probability": 82.3,
            "low_risk_probability": 17.7,
            "top_features": [{"name": "BMI", "value": 31.42, "importance": 24.6}],
            "recommendations": ["See a doctor"]
        }"#;
        let data: PredictionResponse = serde_json::from_str(body).unwrap();

        assert!(data.error.is_none());
        assert!(data.is_high_risk());
        assert_eq!(data.prediction, "High Risk");
        assert_eq!(data.top_features.len(), 1);
        assert_eq!(data.top_features[0].name, "BMI");
        assert_eq!(data.recommendations, vec!["See a doctor"]);
    }

    #[test]
    fn parses_error_only_payload() {
        let data: PredictionResponse = serde_json::from_str(r#"{"error": "Model not loaded"}"#).unwrap();

        assert_eq!(data.error.as_deref(), Some("Model not loaded"));
        assert!(!data.is_high_risk());
        assert!(data.top_features.is_empty());
        assert!(data.recommendations.is_empty());
    }

    #[test]
    fn missing_risk_class_is_low_risk() {
        let data: PredictionResponse = serde_json::from_str(r#"{"prediction": "Low Risk"}"#).unwrap();

        assert!(!data.is_high_risk());
    }
}
