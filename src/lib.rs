//! LockerAI Admin - headless engine of the platform's admin dashboard.
//!
//! Models the brand-athlete platform's admin surfaces as plain state
//! machines over a mock backend: account management, sponsorship
//! contracts, conversation oversight, the audit trail, support email
//! and the sign-in flow. There is no UI here; a frontend drives the
//! services and renders whatever they expose.

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;

pub use config::config;
pub use error::{Error, Result};
pub use state::AppState;
