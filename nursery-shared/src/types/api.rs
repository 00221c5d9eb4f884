use serde::{Deserialize, Serialize};
use validator::Validate;

/// Body of `POST /api/auth/login`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    pub password: String,
}

/// Body of `POST /api/enrollments`.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentRequest {
    #[validate(length(min = 1, message = "child name is required"))]
    pub child_name: String,
    pub birth_date: String,
    #[validate(length(min = 1, message = "parent name is required"))]
    pub parent_name: String,
    pub parent_phone: String,
    /// Sent as a string, the server parses it.
    pub nursery_id: String,
    pub start_date: String,
    pub notes: String,
}

/// Identifier as returned by the server, which may serialize ids as numbers
/// or as strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum EntityId {
    Number(i64),
    Text(String),
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityId::Number(n) => write!(f, "{n}"),
            EntityId::Text(s) => f.write_str(s),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrollmentSummary {
    pub id: EntityId,
    pub child_id: EntityId,
    pub parent_id: EntityId,
}

/// Response of `POST /api/enrollments`. A missing `success` counts as false.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EnrollmentResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub enrollment: Option<EnrollmentSummary>,
    /// Usually a string, but validation failures may send an object.
    #[serde(default)]
    pub message: Option<serde_json::Value>,
}
