// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

/// Service-assigned identifier of an expression. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawId", into = "String")]
pub struct ExpressionId(String);

impl ExpressionId {
    /// Returns `None` for an empty or whitespace-only identifier.
    pub fn new(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.trim().is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExpressionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ExpressionId> for String {
    fn from(id: ExpressionId) -> Self {
        id.0
    }
}

/// Ids arrive as strings from some services and integers from others.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(serde_json::Number),
}

impl TryFrom<RawId> for ExpressionId {
    type Error = &'static str;

    fn try_from(raw: RawId) -> Result<Self, Self::Error> {
        let text = match raw {
            RawId::Text(s) => s,
            RawId::Number(n) => n.to_string(),
        };
        ExpressionId::new(text).ok_or("expression id must not be empty")
    }
}

/// Evaluation result as reported by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EvalValue {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for EvalValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalValue::Number(n) => write!(f, "{}", n),
            EvalValue::Text(s) => f.write_str(s),
        }
    }
}

/// The service's authoritative view of one submitted expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExpressionRecord {
    pub id: ExpressionId,

    /// Text exactly as submitted. Some list endpoints leave it out.
    #[serde(default)]
    pub expression: String,

    /// Lifecycle state. Opaque to the client.
    pub status: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<EvalValue>,

    /// Raw service timestamp, only ever formatted for display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// Records in the order the service returned them.
pub type ExpressionCollection = Vec<ExpressionRecord>;

/// Body of `POST /calculate`.
#[derive(Debug, Serialize)]
pub struct SubmitRequest<'a> {
    pub expression: &'a str,
}

/// Body of `GET /expressions`. An empty list may be encoded as `null`.
#[derive(Debug, Deserialize)]
pub struct CollectionEnvelope {
    #[serde(default)]
    pub expressions: Option<ExpressionCollection>,
}

impl CollectionEnvelope {
    pub fn into_collection(self) -> ExpressionCollection {
        self.expressions.unwrap_or_default()
    }
}

/// Body of `GET /expressions/{id}`.
#[derive(Debug, Deserialize)]
pub struct RecordEnvelope {
    pub expression: ExpressionRecord,
}
