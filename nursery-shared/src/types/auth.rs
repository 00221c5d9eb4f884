use serde::{Deserialize, Serialize};

/// Value of the `users.user_type` column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Parent,
    /// Owner of a nursery. Stored as `nursery`.
    Nursery,
}

impl UserRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Parent => "parent",
            UserRole::Nursery => "nursery",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for UserRole {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "parent" => Ok(UserRole::Parent),
            "nursery" => Ok(UserRole::Nursery),
            _ => Err(format!("unknown role: {s}")),
        }
    }
}
