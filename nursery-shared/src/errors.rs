use serde::{Deserialize, Serialize};

/// Error codes following the pattern E{area}{sequence}
///
/// Ranges:
/// - E0xxx: Shared/infrastructure errors
/// - E1xxx: Account seeding and login check errors
/// - E2xxx: HTTP API check errors
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Shared (E0xxx)
    InternalError,
    ValidationError,
    ConfigInvalid,
    DatabaseUnavailable,
    DatabaseQueryFailed,
    ReportWriteFailed,

    // Accounts (E1xxx)
    AccountSeedFailed,
    NurserySeedFailed,
    AccountLookupFailed,

    // API checks (E2xxx)
    ServerUnreachable,
}

impl ErrorCode {
    pub fn code(&self) -> &'static str {
        match self {
            // Shared
            Self::InternalError => "E0001",
            Self::ValidationError => "E0002",
            Self::ConfigInvalid => "E0003",
            Self::DatabaseUnavailable => "E0004",
            Self::DatabaseQueryFailed => "E0005",
            Self::ReportWriteFailed => "E0006",

            // Accounts
            Self::AccountSeedFailed => "E1001",
            Self::NurserySeedFailed => "E1002",
            Self::AccountLookupFailed => "E1003",

            // API checks
            Self::ServerUnreachable => "E2001",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Known {
        code: ErrorCode,
        message: String,
    },

    #[error("internal error")]
    Internal(#[from] anyhow::Error),

    #[error("database error: {0}")]
    Database(#[from] diesel::result::Error),

    #[error("database pool error: {0}")]
    Pool(#[from] diesel::r2d2::PoolError),

    #[error("transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("report output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("validation error: {0}")]
    Validation(String),
}

impl AppError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::Known {
            code,
            message: message.into(),
        }
    }

    /// Re-files a lower-level failure under the code of the step that hit it,
    /// keeping its message.
    pub fn with_code(self, code: ErrorCode, context: &str) -> Self {
        Self::new(code, format!("{context}: {self}"))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Code used in structured log lines for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::Known { code, .. } => *code,
            AppError::Internal(_) | AppError::Json(_) => ErrorCode::InternalError,
            AppError::Database(_) => ErrorCode::DatabaseQueryFailed,
            AppError::Pool(_) => ErrorCode::DatabaseUnavailable,
            AppError::Transport(_) => ErrorCode::ServerUnreachable,
            AppError::Config(_) => ErrorCode::ConfigInvalid,
            AppError::Io(_) => ErrorCode::ReportWriteFailed,
            AppError::Validation(_) => ErrorCode::ValidationError,
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Transport(_))
            || matches!(self, AppError::Known { code: ErrorCode::ServerUnreachable, .. })
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
