//! Platform account models.

use locker_listing::ListRecord;
use serde::{Deserialize, Serialize};

use chrono::NaiveDate;

/// Account category on the platform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserCategory {
    Athlete,
    Brand,
    Admin,
}

impl UserCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserCategory::Athlete => "athlete",
            UserCategory::Brand => "brand",
            UserCategory::Admin => "admin",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "athlete" => Some(UserCategory::Athlete),
            "brand" => Some(UserCategory::Brand),
            "admin" => Some(UserCategory::Admin),
            _ => None,
        }
    }
}

impl Default for UserCategory {
    fn default() -> Self {
        UserCategory::Athlete
    }
}

/// Account status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(UserStatus::Active),
            "inactive" => Some(UserStatus::Inactive),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            UserStatus::Active => UserStatus::Inactive,
            UserStatus::Inactive => UserStatus::Active,
        }
    }
}

impl Default for UserStatus {
    fn default() -> Self {
        UserStatus::Active
    }
}

/// A platform account visible to the admin
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct User {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub category: UserCategory,
    pub status: UserStatus,
    pub join_date: NaiveDate,
    /// None until the account signs in for the first time
    pub last_login: Option<NaiveDate>,
}

impl ListRecord for User {
    type Category = UserCategory;

    fn id(&self) -> u64 {
        self.id
    }

    fn matches_query(&self, needle: &str) -> bool {
        locker_listing::contains_ci(&self.name, needle)
            || locker_listing::contains_ci(&self.email, needle)
    }

    fn category(&self) -> Self::Category {
        self.category
    }
}
