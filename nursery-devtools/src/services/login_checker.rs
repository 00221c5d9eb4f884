use std::io::Write;

use nursery_shared::errors::{AppResult, ErrorCode};
use nursery_shared::password::{hash_password, is_digest, verify_password};
use nursery_shared::types::UserRole;

use crate::store::AccountStore;

#[derive(Debug, Clone, PartialEq)]
pub enum LoginCheck {
    /// No user row has this email. A normal outcome, not an error.
    NotFound,
    Found {
        /// Email as stored on the row.
        email: String,
        role: String,
        stored_digest: String,
        matches: bool,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoginCheckReport {
    pub email: String,
    pub password: String,
    pub expected_digest: String,
    pub outcome: LoginCheck,
}

/// Compares the digest of `password` with the one stored for `email`.
/// Read-only.
pub fn check_login<S: AccountStore>(
    store: &mut S,
    email: &str,
    password: &str,
) -> AppResult<LoginCheckReport> {
    let expected_digest = hash_password(password);

    let login = store
        .find_login(email)
        .map_err(|e| e.with_code(ErrorCode::AccountLookupFailed, "user lookup failed"))?;

    let outcome = match login {
        Some(login) => {
            let matches = verify_password(password, &login.password_hash);
            tracing::debug!(email = %email, matches, "stored digest compared");
            LoginCheck::Found {
                email: login.email,
                role: login.user_type,
                stored_digest: login.password_hash,
                matches,
            }
        }
        None => {
            tracing::info!(email = %email, "no user with this email");
            LoginCheck::NotFound
        }
    };

    Ok(LoginCheckReport {
        email: email.to_string(),
        password: password.to_string(),
        expected_digest,
        outcome,
    })
}

impl LoginCheckReport {
    pub fn matches(&self) -> bool {
        matches!(self.outcome, LoginCheck::Found { matches: true, .. })
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        writeln!(out, "Checking login:")?;
        writeln!(out, "Email: {}", self.email)?;
        writeln!(out, "Password: {}", self.password)?;
        writeln!(out, "Expected hash: {}", self.expected_digest)?;
        writeln!(out)?;

        match &self.outcome {
            LoginCheck::NotFound => writeln!(out, "User not found"),
            LoginCheck::Found { email, role, stored_digest, matches } => {
                writeln!(out, "User found:")?;
                writeln!(out, "Email: {email}")?;
                writeln!(out, "Type: {role}")?;
                if role.parse::<UserRole>().is_err() {
                    writeln!(out, "Warning: unknown user type, expected parent or nursery")?;
                }
                writeln!(out, "Stored hash: {stored_digest}")?;
                if !is_digest(stored_digest) {
                    writeln!(out, "Warning: stored hash is not a 64-character hex digest")?;
                }
                writeln!(out)?;
                let verdict = if *matches { "MATCH" } else { "NO MATCH" };
                writeln!(out, "Comparison: {verdict}")
            }
        }
    }
}
