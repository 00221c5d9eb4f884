use std::io::Write;

use validator::Validate;

use nursery_shared::errors::{AppError, AppResult, ErrorCode};
use nursery_shared::password::hash_password;
use nursery_shared::types::UserRole;

use crate::fixtures::{DemoAccount, DemoData, DemoNursery};
use crate::models::{NewNursery, NewUser};
use crate::store::AccountStore;

#[derive(Debug, Clone, PartialEq)]
pub struct SeededAccount {
    pub id: i32,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NurseryOutcome {
    Created { id: i32 },
    AlreadyPresent { id: i32 },
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeedReport {
    pub accounts: Vec<SeededAccount>,
    pub nursery: NurseryOutcome,
}

/// Ensures the demo accounts and the demo nursery exist.
///
/// Users are upserted by email (an existing row only gets its password digest
/// replaced) and the nursery is inserted only when its owner has none yet.
/// All statements share one transaction.
pub fn seed_demo_data<S: AccountStore>(store: &mut S, data: &DemoData) -> AppResult<SeedReport> {
    for account in &data.accounts {
        account.validate()?;
    }

    store.transaction(|store| {
        let mut accounts = Vec::with_capacity(data.accounts.len());
        for account in &data.accounts {
            let id = store.upsert_user(&new_user(account)).map_err(|e| {
                tracing::error!(email = %account.email, error = %e, "user upsert failed");
                e.with_code(ErrorCode::AccountSeedFailed, "user upsert failed")
            })?;
            tracing::debug!(email = %account.email, id, role = %account.role, "user upserted");
            accounts.push(SeededAccount {
                id,
                email: account.email.to_lowercase(),
                password: account.password.clone(),
                role: account.role,
            });
        }

        let owner = accounts
            .iter()
            .find(|a| {
                a.role == UserRole::Nursery
                    && a.email.eq_ignore_ascii_case(&data.nursery.owner_email)
            })
            .ok_or_else(|| {
                AppError::new(
                    ErrorCode::NurserySeedFailed,
                    format!("no nursery owner account for {}", data.nursery.owner_email),
                )
            })?;

        let existing = store
            .find_nursery_by_owner(owner.id)
            .map_err(|e| e.with_code(ErrorCode::NurserySeedFailed, "nursery lookup failed"))?;
        let nursery = match existing {
            Some(id) => {
                tracing::debug!(owner_id = owner.id, nursery_id = id, "nursery already present");
                NurseryOutcome::AlreadyPresent { id }
            }
            None => {
                let id = store
                    .insert_nursery(&new_nursery(owner.id, &data.nursery))
                    .map_err(|e| e.with_code(ErrorCode::NurserySeedFailed, "nursery insert failed"))?;
                tracing::info!(owner_id = owner.id, nursery_id = id, "nursery created");
                NurseryOutcome::Created { id }
            }
        };

        Ok(SeedReport { accounts, nursery })
    })
}

fn new_user(account: &DemoAccount) -> NewUser {
    NewUser {
        email: account.email.to_lowercase(),
        password_hash: hash_password(&account.password),
        user_type: account.role.to_string(),
        name: account.name.clone(),
        phone: account.phone.clone(),
    }
}

fn new_nursery(owner_id: i32, nursery: &DemoNursery) -> NewNursery {
    NewNursery {
        owner_id,
        name: nursery.name.clone(),
        address: nursery.address.clone(),
        city: nursery.city.clone(),
        postal_code: nursery.postal_code.clone(),
        latitude: nursery.latitude,
        longitude: nursery.longitude,
        description: nursery.description.clone(),
        hours: nursery.hours.clone(),
        phone: nursery.phone.clone(),
        email: nursery.email.clone(),
        price_per_month: nursery.price_per_month,
        available_spots: nursery.available_spots,
        total_spots: nursery.total_spots,
        staff_count: nursery.staff_count,
        age_range: nursery.age_range.clone(),
    }
}

impl SeedReport {
    pub fn write_to<W: Write>(&self, out: &mut W) -> std::io::Result<()> {
        for account in &self.accounts {
            let label = match account.role {
                UserRole::Parent => "Parent",
                UserRole::Nursery => "Nursery",
            };
            writeln!(out, "{label} test account ready:")?;
            writeln!(out, "   Email: {}", account.email)?;
            writeln!(out, "   Password: {}", account.password)?;
        }
        match self.nursery {
            NurseryOutcome::Created { id } => writeln!(out, "Test nursery created (id {id})")?,
            NurseryOutcome::AlreadyPresent { id } => {
                writeln!(out, "Test nursery already present (id {id})")?
            }
        }
        writeln!(out)?;
        writeln!(out, "Test accounts ready to use!")
    }
}
