use diesel::pg::PgConnection;
use diesel::prelude::*;
use diesel::upsert::excluded;

use nursery_shared::errors::AppResult;

use crate::models::{NewNursery, NewUser, StoredLogin};
use crate::schema::{nurseries, users};

/// Account and nursery persistence used by the seeder and the login check.
///
/// Implemented for a live `PgConnection`; tests use an in-memory store.
pub trait AccountStore {
    /// Runs `f` atomically: either every write in it is kept or none is.
    fn transaction<T, F>(&mut self, f: F) -> AppResult<T>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> AppResult<T>;

    /// Inserts the user, or on an email conflict replaces only its password
    /// digest. Returns the row id either way.
    fn upsert_user(&mut self, user: &NewUser) -> AppResult<i32>;

    fn find_nursery_by_owner(&mut self, owner_id: i32) -> AppResult<Option<i32>>;

    fn insert_nursery(&mut self, nursery: &NewNursery) -> AppResult<i32>;

    /// First user row with this email, if any.
    fn find_login(&mut self, email: &str) -> AppResult<Option<StoredLogin>>;
}

impl AccountStore for PgConnection {
    fn transaction<T, F>(&mut self, f: F) -> AppResult<T>
    where
        F: FnOnce(&mut Self) -> AppResult<T>,
    {
        Connection::transaction(self, f)
    }

    fn upsert_user(&mut self, user: &NewUser) -> AppResult<i32> {
        let id = diesel::insert_into(users::table)
            .values(user)
            .on_conflict(users::email)
            .do_update()
            .set(users::password_hash.eq(excluded(users::password_hash)))
            .returning(users::id)
            .get_result(self)?;
        Ok(id)
    }

    fn find_nursery_by_owner(&mut self, owner_id: i32) -> AppResult<Option<i32>> {
        let id = nurseries::table
            .filter(nurseries::owner_id.eq(owner_id))
            .select(nurseries::id)
            .first(self)
            .optional()?;
        Ok(id)
    }

    fn insert_nursery(&mut self, nursery: &NewNursery) -> AppResult<i32> {
        let id = diesel::insert_into(nurseries::table)
            .values(nursery)
            .returning(nurseries::id)
            .get_result(self)?;
        Ok(id)
    }

    fn find_login(&mut self, email: &str) -> AppResult<Option<StoredLogin>> {
        let login = users::table
            .filter(users::email.eq(email))
            .select(StoredLogin::as_select())
            .first(self)
            .optional()?;
        Ok(login)
    }
}
