pub mod types;
pub mod errors;
pub mod config;
pub mod password;
pub mod telemetry;
pub mod clients;

pub use types::*;
pub use errors::{AppError, ErrorCode, AppResult};
