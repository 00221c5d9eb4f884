//! Fixed demo data shared by the seeder, the login check and the API checks.

use validator::Validate;

use nursery_shared::types::{EnrollmentRequest, LoginRequest, UserRole};

pub const DEMO_PASSWORD: &str = "test123";
pub const PARENT_EMAIL: &str = "test@parent.com";
pub const NURSERY_OWNER_EMAIL: &str = "test@nursery.com";

#[derive(Debug, Clone, PartialEq, Validate)]
pub struct DemoAccount {
    #[validate(email(message = "invalid email format"))]
    pub email: String,
    pub password: String,
    pub role: UserRole,
    #[validate(length(min = 1))]
    pub name: String,
    pub phone: String,
}

/// The nursery attached to the demo owner account.
#[derive(Debug, Clone, PartialEq)]
pub struct DemoNursery {
    pub owner_email: String,
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

#[derive(Debug, Clone, PartialEq)]
pub struct DemoData {
    pub accounts: Vec<DemoAccount>,
    pub nursery: DemoNursery,
}

impl Default for DemoData {
    fn default() -> Self {
        Self {
            accounts: vec![demo_parent(), demo_nursery_owner()],
            nursery: demo_nursery(),
        }
    }
}

pub fn demo_parent() -> DemoAccount {
    DemoAccount {
        email: PARENT_EMAIL.into(),
        password: DEMO_PASSWORD.into(),
        role: UserRole::Parent,
        name: "Test Parent".into(),
        phone: "+216 20 111 222".into(),
    }
}

pub fn demo_nursery_owner() -> DemoAccount {
    DemoAccount {
        email: NURSERY_OWNER_EMAIL.into(),
        password: DEMO_PASSWORD.into(),
        role: UserRole::Nursery,
        name: "Test Nursery Owner".into(),
        phone: "+216 71 333 444".into(),
    }
}

pub fn demo_nursery() -> DemoNursery {
    DemoNursery {
        owner_email: NURSERY_OWNER_EMAIL.into(),
        name: "Test Nursery".into(),
        address: "789 Test Street".into(),
        city: "Tunis".into(),
        postal_code: "1000".into(),
        latitude: 36.8065,
        longitude: 10.1815,
        description: "A test nursery for development".into(),
        hours: "8:00 AM - 5:00 PM".into(),
        phone: "+216 71 333 444".into(),
        email: NURSERY_OWNER_EMAIL.into(),
        price_per_month: 400.00,
        available_spots: 15,
        total_spots: 15,
        staff_count: 5,
        age_range: "1 year - 5 years".into(),
    }
}

pub fn login_request() -> LoginRequest {
    LoginRequest {
        email: PARENT_EMAIL.into(),
        password: DEMO_PASSWORD.into(),
    }
}

pub fn enrollment_request() -> EnrollmentRequest {
    EnrollmentRequest {
        child_name: "Ahmed Ben Ali".into(),
        birth_date: "2020-05-15".into(),
        parent_name: "Mohamed Ben Ali".into(),
        parent_phone: "+216 98 765 432".into(),
        nursery_id: "1".into(),
        start_date: "2026-02-01".into(),
        notes: "L'enfant a des allergies aux arachides".into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn demo_accounts_are_valid_and_distinct() {
        let data = DemoData::default();
        assert_eq!(data.accounts.len(), 2);
        for account in &data.accounts {
            assert!(account.validate().is_ok(), "{} should validate", account.email);
        }
        assert_ne!(data.accounts[0].email, data.accounts[1].email);
    }

    #[test]
    fn nursery_belongs_to_the_owner_account() {
        let data = DemoData::default();
        let owner = data
            .accounts
            .iter()
            .find(|a| a.email == data.nursery.owner_email)
            .unwrap();
        assert_eq!(owner.role, UserRole::Nursery);
        assert!(data.nursery.available_spots <= data.nursery.total_spots);
    }

    #[test]
    fn api_payloads_are_valid() {
        assert!(login_request().validate().is_ok());
        assert!(enrollment_request().validate().is_ok());
    }
}
