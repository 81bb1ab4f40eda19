//! Sponsorship contract models.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use locker_listing::ListRecord;
use serde::{Deserialize, Serialize};

/// Contract lifecycle status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContractStatus {
    Active,
    Pending,
    ExpiringSoon,
    Expired,
    Terminated,
}

impl ContractStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContractStatus::Active => "active",
            ContractStatus::Pending => "pending",
            ContractStatus::ExpiringSoon => "expiring_soon",
            ContractStatus::Expired => "expired",
            ContractStatus::Terminated => "terminated",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "active" => Some(ContractStatus::Active),
            "pending" => Some(ContractStatus::Pending),
            "expiring_soon" => Some(ContractStatus::ExpiringSoon),
            "expired" => Some(ContractStatus::Expired),
            "terminated" => Some(ContractStatus::Terminated),
            _ => None,
        }
    }
}

impl Default for ContractStatus {
    fn default() -> Self {
        ContractStatus::Pending
    }
}

/// Settlement currency
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Usd,
    Eur,
    Gbp,
}

impl Currency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "USD" => Some(Currency::Usd),
            "EUR" => Some(Currency::Eur),
            "GBP" => Some(Currency::Gbp),
            _ => None,
        }
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::Usd
    }
}

/// One side of a contract, denormalized for display
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ContractParty {
    pub id: u64,
    pub name: String,
    pub email: String,
}

/// A sponsorship agreement between an athlete and a brand
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Contract {
    pub id: u64,
    pub athlete: ContractParty,
    pub brand: ContractParty,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Whole units of `currency`
    pub amount: u64,
    pub currency: Currency,
    pub status: ContractStatus,
    pub terms: String,
    pub created_date: NaiveDate,
    /// Negative once the end date has passed
    pub days_until_expiry: i64,
}

impl Contract {
    pub fn recompute_expiry(&mut self, now: DateTime<Utc>) {
        self.days_until_expiry = days_until_expiry_from(self.end_date, now);
    }
}

/// Days from `now` until midnight UTC of `end_date`, rounded up.
///
/// Partial days count as a full day, so a contract ending tomorrow
/// reports 1 all day today. Same-day expiry reports 0.
pub fn days_until_expiry_from(end_date: NaiveDate, now: DateTime<Utc>) -> i64 {
    let end = end_date.and_time(NaiveTime::MIN).and_utc();
    let seconds = (end - now).num_seconds();
    seconds.div_euclid(86_400) + i64::from(seconds.rem_euclid(86_400) != 0)
}

impl ListRecord for Contract {
    type Category = ContractStatus;

    fn id(&self) -> u64 {
        self.id
    }

    fn matches_query(&self, needle: &str) -> bool {
        locker_listing::contains_ci(&self.athlete.name, needle)
            || locker_listing::contains_ci(&self.brand.name, needle)
    }

    fn category(&self) -> Self::Category {
        self.status
    }
}
