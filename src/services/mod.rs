//! Service layer for the admin engine.
//!
//! Contains the page logic behind each admin surface:
//! - Backend (`AdminBackend` trait + latency-simulating mock)
//! - Password (strength scoring and change validation)
//! - Users (account list with create/edit/delete/change-password modals)
//! - Contracts (contract list, stat cards, guarded terminate)
//! - Chat (conversation oversight + transcript viewer)
//! - ActivityLog (audit trail filters + severity counters)
//! - SupportEmail (composer, templates, delivery history)
//! - AuthFlow (sign-in and password reset stage machine)
//! - Dashboard (overview snapshot)

pub mod backend;
pub mod password;

mod activity_log;
mod auth_flow;
mod chat;
mod contracts;
mod dashboard;
mod support_email;
mod users;

pub use activity_log::{ActivityLogService, ActivityStats};
pub use auth_flow::{AuthFlowService, AuthStage, CODE_LENGTH};
pub use chat::{ChatModal, ChatService, ChatStats};
pub use contracts::{ContractForm, ContractModal, ContractService, ContractStats};
pub use dashboard::DashboardService;
pub use support_email::{EmailForm, SupportEmailService, TEMPLATES};
pub use users::{UserForm, UserModal, UserService};
