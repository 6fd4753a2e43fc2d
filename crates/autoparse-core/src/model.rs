//! Records exchanged with the candidate API.
//!
//! The service is loose about field types (numeric ids, `null` names, skills as
//! either a list or a comma-separated string) and still carries a couple of
//! legacy field names. Deserialization absorbs that looseness here so the rest
//! of the dashboard only ever sees one shape.

use std::ops::Index;

use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::display::normalize_skills;

/// Status shown when neither `extractionStatus` nor `status` is set.
pub const DEFAULT_STATUS: &str = "Pending";

/// A candidate as returned by the list endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    #[serde(default, deserialize_with = "ident")]
    pub id: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub name: String,
    #[serde(default, deserialize_with = "nullable_string")]
    pub email: String,
    #[serde(default)]
    pub company: Option<String>,
    #[serde(default, rename = "extractionStatus")]
    pub extraction_status: Option<String>,
    /// Legacy status field, superseded by `extraction_status`.
    #[serde(default)]
    pub status: Option<String>,
    /// Fields the dashboard does not interpret.
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Candidate {
    /// Effective status: `extractionStatus`, then `status`, then `"Pending"`.
    ///
    /// Empty strings count as absent.
    pub fn display_status(&self) -> &str {
        first_present([
            self.extraction_status.as_deref(),
            self.status.as_deref(),
        ])
        .unwrap_or(DEFAULT_STATUS)
    }

    /// CSS-style class suffix derived from [`display_status`](Self::display_status).
    pub fn status_class(&self) -> String {
        crate::display::status_class(self.display_status())
    }
}

/// Skills arrive either as a list or as a single comma-separated string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    List(Vec<String>),
    Text(String),
}

impl Skills {
    /// Ordered skill list. Text is split on commas with blanks dropped; lists
    /// are returned as sent.
    pub fn normalized(&self) -> Vec<String> {
        match self {
            Skills::List(items) => items.clone(),
            Skills::Text(text) => normalize_skills(text),
        }
    }
}

/// Full candidate record from the detail endpoint.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CandidateDetails {
    #[serde(flatten)]
    pub candidate: Candidate,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub skills: Option<Skills>,
    #[serde(default, rename = "confidenceScores")]
    pub confidence_scores: Option<ConfidenceScores>,
    /// Legacy snake_case spelling of `confidenceScores`.
    #[serde(default, rename = "confidence_scores")]
    pub legacy_confidence_scores: Option<ConfidenceScores>,
    #[serde(default)]
    pub documents: Option<Vec<SubmittedDocument>>,
}

impl CandidateDetails {
    pub fn id(&self) -> &str {
        &self.candidate.id
    }

    pub fn display_status(&self) -> &str {
        self.candidate.display_status()
    }

    pub fn skills(&self) -> Vec<String> {
        self.skills.as_ref().map(Skills::normalized).unwrap_or_default()
    }

    /// Confidence scores: the first non-empty of `confidenceScores` and
    /// `confidence_scores`.
    pub fn confidence(&self) -> Option<&ConfidenceScores> {
        [&self.confidence_scores, &self.legacy_confidence_scores]
            .into_iter()
            .flatten()
            .find(|scores| !scores.is_empty())
    }

    pub fn documents(&self) -> &[SubmittedDocument] {
        self.documents.as_deref().unwrap_or(&[])
    }
}

/// An identity document already submitted for a candidate.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SubmittedDocument {
    #[serde(default, deserialize_with = "optional_ident")]
    pub id: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "nullable_string")]
    pub doc_type: String,
    #[serde(default, rename = "fileName")]
    pub file_name: Option<String>,
    #[serde(default)]
    pub file_url: Option<String>,
    /// ISO-8601 timestamp.
    #[serde(default, rename = "submittedAt")]
    pub submitted_at: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Per-field extraction confidence, in the order the service sent the fields.
///
/// Scores are numbers, but some records carry them as numeric strings.
/// Entries that are neither are dropped.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConfidenceScores(Vec<(String, f64)>);

impl ConfidenceScores {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: &str) -> Option<f64> {
        self.0.iter().find(|(name, _)| name == field).map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> {
        self.0.iter().map(|(name, score)| (name.as_str(), *score))
    }
}

impl FromIterator<(String, f64)> for ConfidenceScores {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Index<&str> for ConfidenceScores {
    type Output = f64;

    fn index(&self, field: &str) -> &f64 {
        self.0
            .iter()
            .find(|(name, _)| name == field)
            .map(|(_, score)| score)
            .unwrap_or_else(|| panic!("no confidence score for {field:?}"))
    }
}

impl<'de> Deserialize<'de> for ConfidenceScores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // serde_json's `preserve_order` keeps the map in document order.
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(field, value)| {
                let score = match &value {
                    Value::Number(n) => n.as_f64(),
                    Value::String(s) => s.trim().parse().ok(),
                    _ => None,
                }?;
                Some((field, score))
            })
            .collect())
    }
}

impl Serialize for ConfidenceScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (field, score) in &self.0 {
            map.serialize_entry(field, score)?;
        }
        map.end()
    }
}

/// `{ "message": "..." }` body of the document endpoints.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    #[serde(default, deserialize_with = "nullable_string")]
    pub message: String,
}

fn first_present<'a, const N: usize>(values: [Option<&'a str>; N]) -> Option<&'a str> {
    values.into_iter().flatten().find(|v| !v.is_empty())
}

fn ident<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(optional_ident(deserializer)?.unwrap_or_default())
}

fn optional_ident<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        other => Some(other.to_string()),
    })
}

fn nullable_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn candidate(value: Value) -> Candidate {
        serde_json::from_value(value).unwrap()
    }

    fn details(value: Value) -> CandidateDetails {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn extraction_status_wins_over_status() {
        let c = candidate(json!({"id": "1", "extractionStatus": "Completed", "status": "Queued"}));
        assert_eq!(c.display_status(), "Completed");
    }

    #[test]
    fn legacy_status_used_when_extraction_status_missing() {
        let c = candidate(json!({"id": "1", "status": "Queued"}));
        assert_eq!(c.display_status(), "Queued");
    }

    #[test]
    fn status_defaults_to_pending() {
        let c = candidate(json!({"id": "1"}));
        assert_eq!(c.display_status(), "Pending");
        let blank = candidate(json!({"id": "1", "extractionStatus": "", "status": null}));
        assert_eq!(blank.display_status(), "Pending");
    }

    #[test]
    fn numeric_ids_become_strings() {
        let c = candidate(json!({"id": 42, "name": "Asha", "email": "asha@example.com"}));
        assert_eq!(c.id, "42");
    }

    #[test]
    fn null_name_and_unknown_fields_are_tolerated() {
        let c = candidate(json!({"id": "7", "name": null, "resume_url": "https://x/y.pdf"}));
        assert_eq!(c.name, "");
        assert_eq!(c.extra.get("resume_url"), Some(&json!("https://x/y.pdf")));
    }

    #[test]
    fn details_flatten_candidate_fields() {
        let d = details(json!({
            "id": "9",
            "name": "Ravi",
            "email": "ravi@example.com",
            "company": "Acme",
            "phone": "+91 98765 43210",
            "designation": "Engineer"
        }));
        assert_eq!(d.id(), "9");
        assert_eq!(d.candidate.company.as_deref(), Some("Acme"));
        assert_eq!(d.phone.as_deref(), Some("+91 98765 43210"));
        assert!(!d.candidate.extra.contains_key("phone"));
    }

    #[test]
    fn skills_from_comma_separated_text() {
        let d = details(json!({"id": "1", "skills": "Go, Rust,  , C++"}));
        assert_eq!(d.skills(), vec!["Go", "Rust", "C++"]);
    }

    #[test]
    fn skills_from_list() {
        let d = details(json!({"id": "1", "skills": ["Python", "SQL"]}));
        assert_eq!(d.skills(), vec!["Python", "SQL"]);
        assert!(details(json!({"id": "1"})).skills().is_empty());
    }

    #[test]
    fn camel_case_confidence_preferred() {
        let d = details(json!({
            "id": "1",
            "confidenceScores": {"name": 0.9},
            "confidence_scores": {"name": 0.1}
        }));
        assert_eq!(d.confidence().unwrap()["name"], 0.9);
    }

    #[test]
    fn empty_confidence_falls_through_to_legacy() {
        let d = details(json!({
            "id": "1",
            "confidenceScores": {},
            "confidence_scores": {"email": "0.75", "phone": "n/a"}
        }));
        let scores = d.confidence().unwrap();
        assert_eq!(scores.len(), 1);
        assert_eq!(scores["email"], 0.75);
        assert!(details(json!({"id": "1"})).confidence().is_none());
    }

    #[test]
    fn confidence_keeps_service_field_order() {
        let d = details(json!({
            "id": "1",
            "confidenceScores": {"name": 0.9, "email": 0.8, "company": 0.7, "phone": 0.6}
        }));
        let fields: Vec<&str> = d.confidence().unwrap().iter().map(|(f, _)| f).collect();
        assert_eq!(fields, vec!["name", "email", "company", "phone"]);
        assert_eq!(d.confidence().unwrap().get("company"), Some(0.7));

        let back = serde_json::to_value(&d).unwrap();
        let keys: Vec<&String> = back["confidenceScores"].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["name", "email", "company", "phone"]);
    }

    #[test]
    fn null_confidence_is_absent() {
        let d = details(json!({"id": "1", "confidenceScores": null, "confidence_scores": {"name": 1}}));
        assert_eq!(d.confidence().unwrap().get("name"), Some(1.0));
    }

    #[test]
    fn documents_default_to_empty() {
        assert!(details(json!({"id": "1"})).documents().is_empty());
        let d = details(json!({
            "id": "1",
            "documents": [{"id": 3, "type": "PAN", "fileName": "pan.pdf", "submittedAt": "2024-05-01T10:00:00Z"}]
        }));
        let doc = &d.documents()[0];
        assert_eq!(doc.id.as_deref(), Some("3"));
        assert_eq!(doc.doc_type, "PAN");
        assert_eq!(doc.file_name.as_deref(), Some("pan.pdf"));
    }
}
