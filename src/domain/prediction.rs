//! Prediction rows returned by the classification endpoints.
//!
//! `/predict`, `/analyze-file` and `/scrape-and-predict` all report a binary
//! label and a score. The score arrives under either `authenticity_score` or
//! `confidence_score`, as a number or as a string like `"87.50%"`; both are
//! normalized into [`Score`].

use std::fmt;

use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

/// Binary prediction label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Label {
    Real,
    Fake,
}

impl Label {
    /// Wire form ("REAL" / "FAKE")
    pub fn as_str(&self) -> &'static str {
        match self {
            Label::Real => "REAL",
            Label::Fake => "FAKE",
        }
    }

    /// Presentational class ("real" / "fake")
    pub fn css_class(&self) -> &'static str {
        match self {
            Label::Real => "real",
            Label::Fake => "fake",
        }
    }
}

impl TryFrom<String> for Label {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_uppercase().as_str() {
            "REAL" => Ok(Label::Real),
            "FAKE" => Ok(Label::Fake),
            _ => Err(format!("unknown prediction label: {}", value)),
        }
    }
}

impl From<Label> for String {
    fn from(label: Label) -> Self {
        label.as_str().to_string()
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Authenticity score as a 0-100 percentage
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Score(f64);

impl Score {
    pub fn new(value: f64) -> Self {
        Self(value)
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Parse a textual score, tolerating a trailing `%`
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        let number = trimmed.strip_suffix('%').unwrap_or(trimmed).trim();
        number.parse::<f64>().ok().filter(|v| v.is_finite()).map(Self)
    }
}

/// Whole scores print without decimals, everything else with two.
impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{:.2}", self.0)
        }
    }
}

impl Serialize for Score {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.0)
    }
}

impl<'de> Deserialize<'de> for Score {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawScore {
            Number(f64),
            Text(String),
        }

        match RawScore::deserialize(deserializer)? {
            RawScore::Number(value) => Ok(Score(value)),
            RawScore::Text(text) => Score::parse(&text)
                .ok_or_else(|| de::Error::custom(format!("invalid score: {:?}", text))),
        }
    }
}

/// Response of `/predict`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewPrediction {
    pub prediction: Label,

    #[serde(rename = "authenticity_score", alias = "confidence_score")]
    pub score: Score,
}

/// One row of a batch (`review`) or scrape (`review_text`) response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewRow {
    #[serde(alias = "review_text")]
    pub review: String,

    pub prediction: Label,

    #[serde(rename = "authenticity_score", alias = "confidence_score")]
    pub score: Score,
}

impl ReviewRow {
    pub fn new(review: impl Into<String>, prediction: Label, score: f64) -> Self {
        Self {
            review: review.into(),
            prediction,
            score: Score::new(score),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_is_case_insensitive() {
        let label: Label = serde_json::from_str("\"real\"").unwrap();
        assert_eq!(label, Label::Real);
        let label: Label = serde_json::from_str("\"FAKE\"").unwrap();
        assert_eq!(label, Label::Fake);
        assert!(serde_json::from_str::<Label>("\"MAYBE\"").is_err());
    }

    #[test]
    fn test_score_accepts_both_field_names() {
        let a: ReviewPrediction =
            serde_json::from_str(r#"{"prediction":"REAL","authenticity_score":87}"#).unwrap();
        let b: ReviewPrediction =
            serde_json::from_str(r#"{"prediction":"REAL","confidence_score":"87.50%"}"#).unwrap();

        assert_eq!(a.score.value(), 87.0);
        assert_eq!(b.score.value(), 87.5);
    }

    #[test]
    fn test_score_display() {
        assert_eq!(Score::new(87.0).to_string(), "87");
        assert_eq!(Score::new(87.5).to_string(), "87.50");
        assert_eq!(Score::parse(" 64.1 % ").unwrap().to_string(), "64.10");
        assert!(Score::parse("n/a").is_none());
    }

    #[test]
    fn test_score_display_beyond_integer_range() {
        let text = Score::new(1e300).to_string();
        assert_eq!(text.len(), 301);
        assert!(text.starts_with("1000000000000000"));
        assert!(!text.contains('.'));

        assert_eq!(Score::new(-1e20).to_string(), "-100000000000000000000");
    }

    #[test]
    fn test_row_accepts_review_text() {
        let row: ReviewRow = serde_json::from_str(
            r#"{"review_text":"Great stay...","prediction":"FAKE","confidence_score":"64.10%"}"#,
        )
        .unwrap();

        assert_eq!(row.review, "Great stay...");
        assert_eq!(row.prediction, Label::Fake);
        assert_eq!(row.score.to_string(), "64.10");
    }
}
