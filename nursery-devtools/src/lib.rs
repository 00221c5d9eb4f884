//! Developer tools for the nursery enrollment application: demo account
//! seeding, a stored-credential check and one-shot requests against the HTTP API.

pub mod fixtures;
pub mod models;
pub mod schema;
pub mod services;
pub mod store;

#[cfg(test)]
mod test_utils;
