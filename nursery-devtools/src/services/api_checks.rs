//! One-shot requests against a running web application.
//!
//! Each check sends a single fixed payload, waits for the whole body and turns
//! the reply into a report. Transport failures are returned to the caller,
//! which prints them with [`write_transport_failure`]; HTTP error statuses and
//! unparseable bodies are part of the report.

use std::io::Write;

use validator::Validate;

use nursery_shared::clients::api::{ApiReply, NurseryApiClient};
use nursery_shared::errors::{AppError, AppResult};
use nursery_shared::types::{EnrollmentRequest, EnrollmentResponse, EnrollmentSummary, LoginRequest};

fn pretty(value: &serde_json::Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// Pretty JSON when the body parses, the raw text otherwise.
fn display_body(reply: &ApiReply) -> String {
    reply.json().map(|v| pretty(&v)).unwrap_or_else(|| reply.body.clone())
}

// --- Login ---

#[derive(Debug, Clone, PartialEq)]
pub struct LoginAttemptReport {
    pub reply: ApiReply,
}

pub async fn try_login(
    client: &NurseryApiClient,
    request: &LoginRequest,
) -> AppResult<LoginAttemptReport> {
    request.validate()?;
    let reply = client.login(request).await?;
    tracing::info!(status = reply.status, email = %request.email, "login request answered");
    Ok(LoginAttemptReport { reply })
}

impl LoginAttemptReport {
    pub fn succeeded(&self) -> bool {
        self.reply.is_success()
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        if self.succeeded() {
            writeln!(out, "Login succeeded!")?;
            writeln!(out, "Response: {}", display_body(&self.reply))
        } else {
            writeln!(out, "Login failed:")?;
            writeln!(out, "Status: {}", self.reply.status)?;
            writeln!(out, "Data: {}", display_body(&self.reply))
        }
    }
}

// --- Enrollment ---

#[derive(Debug, Clone, PartialEq)]
pub enum EnrollmentOutcome {
    Created(EnrollmentSummary),
    /// `success` was false or absent. `message` is whatever the server sent.
    Rejected { message: Option<serde_json::Value> },
    /// Not JSON, or JSON without the expected shape.
    Unparseable,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EnrollmentAttemptReport {
    pub reply: ApiReply,
    pub outcome: EnrollmentOutcome,
}

pub async fn try_enrollment(
    client: &NurseryApiClient,
    request: &EnrollmentRequest,
) -> AppResult<EnrollmentAttemptReport> {
    request.validate()?;
    let reply = client.create_enrollment(request).await?;
    let report = EnrollmentAttemptReport::from_reply(reply);
    tracing::info!(status = report.reply.status, outcome = ?report.outcome, "enrollment request answered");
    Ok(report)
}

impl EnrollmentAttemptReport {
    pub fn from_reply(reply: ApiReply) -> Self {
        let outcome = match reply
            .json()
            .map(serde_json::from_value::<EnrollmentResponse>)
        {
            Some(Ok(EnrollmentResponse { success: true, enrollment: Some(summary), .. })) => {
                EnrollmentOutcome::Created(summary)
            }
            Some(Ok(EnrollmentResponse { success: false, message, .. })) => {
                EnrollmentOutcome::Rejected { message }
            }
            Some(Ok(_)) | Some(Err(_)) | None => EnrollmentOutcome::Unparseable,
        };
        Self { reply, outcome }
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Status Code: {}", self.reply.status)?;
        writeln!(out, "Response:")?;

        match &self.outcome {
            EnrollmentOutcome::Unparseable => writeln!(out, "{}", self.reply.body),
            EnrollmentOutcome::Created(summary) => {
                writeln!(out, "{}", display_body(&self.reply))?;
                writeln!(out)?;
                writeln!(out, "Enrollment created successfully!")?;
                writeln!(out, "   Enrollment ID: {}", summary.id)?;
                writeln!(out, "   Child ID: {}", summary.child_id)?;
                writeln!(out, "   Parent ID: {}", summary.parent_id)
            }
            EnrollmentOutcome::Rejected { message } => {
                writeln!(out, "{}", display_body(&self.reply))?;
                writeln!(out)?;
                match message {
                    Some(serde_json::Value::String(m)) => {
                        writeln!(out, "Error while creating the enrollment: {m}")
                    }
                    Some(other) => {
                        writeln!(out, "Error while creating the enrollment: {other}")
                    }
                    None => writeln!(out, "Error while creating the enrollment"),
                }
            }
        }
    }
}

/// Printed before the request goes out.
pub fn write_enrollment_request<W: Write>(
    out: &mut W,
    request: &EnrollmentRequest,
) -> AppResult<()> {
    writeln!(out, "Testing enrollment API...")?;
    writeln!(out)?;
    writeln!(out, "Sending enrollment data:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(request)?)?;
    writeln!(out)?;
    writeln!(out, "Waiting for response...")?;
    writeln!(out)?;
    Ok(())
}

/// Reports a failed request; transport failures get a hint about the server.
pub fn write_transport_failure<W: Write>(
    out: &mut W,
    base_url: &str,
    err: &AppError,
) -> std::io::Result<()> {
    writeln!(out, "Error: {err}")?;
    if err.is_transport() {
        writeln!(out)?;
        writeln!(out, "Hint: make sure the backend server is running at {base_url}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use nursery_shared::types::EntityId;

    fn reply(status: u16, body: &str) -> ApiReply {
        ApiReply { status, body: body.into() }
    }

    fn render_enrollment(report: &EnrollmentAttemptReport) -> String {
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn created_enrollment_prints_the_three_ids() {
        let report = EnrollmentAttemptReport::from_reply(reply(
            201,
            r#"{"success":true,"enrollment":{"id":7,"childId":3,"parentId":5}}"#,
        ));

        assert_eq!(
            report.outcome,
            EnrollmentOutcome::Created(EnrollmentSummary {
                id: EntityId::Number(7),
                child_id: EntityId::Number(3),
                parent_id: EntityId::Number(5),
            })
        );
        let text = render_enrollment(&report);
        assert!(text.contains("Status Code: 201"));
        assert!(text.contains("Enrollment ID: 7"));
        assert!(text.contains("Child ID: 3"));
        assert!(text.contains("Parent ID: 5"));
    }

    #[test]
    fn rejected_enrollment_prints_failure() {
        let report = EnrollmentAttemptReport::from_reply(reply(400, r#"{"success":false}"#));

        assert_eq!(report.outcome, EnrollmentOutcome::Rejected { message: None });
        let text = render_enrollment(&report);
        assert!(text.ends_with("Error while creating the enrollment\n"));
        assert!(!text.contains("Enrollment ID"));
    }

    #[test]
    fn rejection_message_is_shown() {
        let report = EnrollmentAttemptReport::from_reply(reply(
            409,
            r#"{"success":false,"message":"nursery is full"}"#,
        ));
        assert!(render_enrollment(&report).contains("Error while creating the enrollment: nursery is full"));
    }

    #[test]
    fn structured_rejection_message_is_still_a_rejection() {
        let report = EnrollmentAttemptReport::from_reply(reply(
            422,
            r#"{"success":false,"message":{"field":"childName"}}"#,
        ));

        assert_eq!(
            report.outcome,
            EnrollmentOutcome::Rejected { message: Some(serde_json::json!({ "field": "childName" })) }
        );
        let text = render_enrollment(&report);
        assert!(text.ends_with("Error while creating the enrollment: {\"field\":\"childName\"}\n"));
    }

    #[test]
    fn non_json_body_is_printed_raw() {
        let report = EnrollmentAttemptReport::from_reply(reply(502, "<html>Bad Gateway</html>"));

        assert_eq!(report.outcome, EnrollmentOutcome::Unparseable);
        assert!(render_enrollment(&report).ends_with("Response:\n<html>Bad Gateway</html>\n"));
    }

    #[test]
    fn success_without_details_is_printed_raw() {
        let report = EnrollmentAttemptReport::from_reply(reply(200, r#"{"success":true}"#));
        assert_eq!(report.outcome, EnrollmentOutcome::Unparseable);
    }

    #[test]
    fn login_failure_shows_status_and_data() {
        let report = LoginAttemptReport { reply: reply(401, r#"{"success":false,"message":"bad"}"#) };

        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(!report.succeeded());
        assert!(text.starts_with("Login failed:\nStatus: 401\n"));
        assert!(text.contains("\"message\": \"bad\""));
    }

    #[test]
    fn request_preamble_pretty_prints_payload() {
        let mut out = Vec::new();
        write_enrollment_request(&mut out, &crate::fixtures::enrollment_request()).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("\"childName\": \"Ahmed Ben Ali\""));
        assert!(text.ends_with("Waiting for response...\n\n"));
    }

    #[test]
    fn non_transport_failures_get_no_hint() {
        let mut out = Vec::new();
        let err = AppError::validation("email: invalid email format");
        write_transport_failure(&mut out, "http://localhost:3000", &err).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Error: validation error"));
        assert!(!text.contains("Hint"));
    }
}
