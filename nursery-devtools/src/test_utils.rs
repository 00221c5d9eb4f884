//! In-memory `AccountStore` for exercising the seeder and the login check.

use nursery_shared::errors::{AppError, AppResult, ErrorCode};

use crate::models::{NewNursery, NewUser, StoredLogin};
use crate::store::AccountStore;

#[derive(Debug, Clone, PartialEq)]
pub struct UserRow {
    pub id: i32,
    pub user: NewUser,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NurseryRow {
    pub id: i32,
    pub nursery: NewNursery,
}

#[derive(Debug, Clone, Default)]
struct Tables {
    users: Vec<UserRow>,
    nurseries: Vec<NurseryRow>,
    next_id: i32,
}

#[derive(Debug, Default)]
pub struct MemoryAccountStore {
    tables: Tables,
    /// If set, `insert_nursery` fails (exercises rollback).
    pub fail_nursery_insert: bool,
    /// If set, every read fails like a lost connection.
    pub fail_reads: bool,
    /// If set, upserting the user with this email fails.
    pub fail_upsert_for: Option<String>,
    /// If set, `find_login` ignores ASCII case, like a `citext` column.
    pub match_email_case_insensitively: bool,
}

impl MemoryAccountStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn users(&self) -> &[UserRow] {
        &self.tables.users
    }

    pub fn nurseries(&self) -> &[NurseryRow] {
        &self.tables.nurseries
    }

    pub fn insert_raw_user(&mut self, user: NewUser) -> i32 {
        let id = self.next_id();
        self.tables.users.push(UserRow { id, user });
        id
    }

    fn next_id(&mut self) -> i32 {
        self.tables.next_id += 1;
        self.tables.next_id
    }

    fn check_reads(&self) -> AppResult<()> {
        if self.fail_reads {
            return Err(AppError::new(ErrorCode::DatabaseUnavailable, "connection refused"));
        }
        Ok(())
    }
}

impl AccountStore for MemoryAccountStore {
    fn transaction<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        let snapshot = self.tables.clone();
        let result = f(self);
        if result.is_err() {
            self.tables = snapshot;
        }
        result
    }

    fn upsert_user(&mut self, user: &NewUser) -> AppResult<i32> {
        if self.fail_upsert_for.as_deref() == Some(user.email.as_str()) {
            return Err(AppError::from(diesel::result::Error::NotFound));
        }
        if let Some(row) = self.tables.users.iter_mut().find(|r| r.user.email == user.email) {
            row.user.password_hash = user.password_hash.clone();
            return Ok(row.id);
        }
        Ok(self.insert_raw_user(user.clone()))
    }

    fn find_nursery_by_owner(&mut self, owner_id: i32) -> AppResult<Option<i32>> {
        self.check_reads()?;
        Ok(self
            .tables
            .nurseries
            .iter()
            .find(|r| r.nursery.owner_id == owner_id)
            .map(|r| r.id))
    }

    fn insert_nursery(&mut self, nursery: &NewNursery) -> AppResult<i32> {
        if self.fail_nursery_insert {
            return Err(AppError::from(diesel::result::Error::RollbackTransaction));
        }
        let id = self.next_id();
        self.tables.nurseries.push(NurseryRow { id, nursery: nursery.clone() });
        Ok(id)
    }

    fn find_login(&mut self, email: &str) -> AppResult<Option<StoredLogin>> {
        self.check_reads()?;
        Ok(self
            .tables
            .users
            .iter()
            .find(|r| {
                if self.match_email_case_insensitively {
                    r.user.email.eq_ignore_ascii_case(email)
                } else {
                    r.user.email == email
                }
            })
            .map(|r| StoredLogin {
                email: r.user.email.clone(),
                password_hash: r.user.password_hash.clone(),
                user_type: r.user.user_type.clone(),
            }))
    }
}
