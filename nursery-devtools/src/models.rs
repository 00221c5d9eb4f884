use diesel::prelude::*;

use crate::schema::{nurseries, users};

// --- Users ---

/// The columns the login check reads back.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = users)]
pub struct StoredLogin {
    pub email: String,
    pub password_hash: String,
    pub user_type: String,
}

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = users)]
pub struct NewUser {
    pub email: String,
    pub password_hash: String,
    pub user_type: String,
    pub name: String,
    pub phone: String,
}

// --- Nurseries ---

#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = nurseries)]
pub struct NewNursery {
    pub owner_id: i32,
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub latitude: f64,
    pub longitude: f64,
    pub description: String,
    pub hours: String,
    pub phone: String,
    pub email: String,
    pub price_per_month: f64,
    pub available_spots: i32,
    pub total_spots: i32,
    pub staff_count: i32,
    pub age_range: String,
}
