//! Contract management service.
//!
//! Backs the sponsorship contracts page: a filterable, paginated list
//! with stat cards, a read-only detail view, create and edit modals,
//! and a guarded terminate action. Stats always reflect the full set,
//! not the filtered view.

use std::sync::Arc;

use chrono::NaiveDate;
use locker_listing::ListState;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{self, Contract, ContractParty, ContractStatus, Currency};
use crate::services::backend::AdminBackend;

/// Draft of a contract as typed into the create and edit modals.
///
/// Party ids and the amount stay as raw text until submission,
/// mirroring the form fields they are typed into.
#[derive(Debug, Clone)]
pub struct ContractForm {
    pub athlete_id: String,
    pub brand_id: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub amount: String,
    pub currency: Currency,
    pub status: ContractStatus,
    pub terms: String,
}

impl Default for ContractForm {
    fn default() -> Self {
        Self {
            athlete_id: String::new(),
            brand_id: String::new(),
            start_date: None,
            end_date: None,
            amount: String::new(),
            currency: Currency::Usd,
            status: ContractStatus::Pending,
            terms: String::new(),
        }
    }
}

impl ContractForm {
    /// Prefill from an existing contract for the edit modal.
    pub fn from_contract(contract: &Contract) -> Self {
        Self {
            athlete_id: contract.athlete.id.to_string(),
            brand_id: contract.brand.id.to_string(),
            start_date: Some(contract.start_date),
            end_date: Some(contract.end_date),
            amount: contract.amount.to_string(),
            currency: contract.currency,
            status: contract.status,
            terms: contract.terms.clone(),
        }
    }
}

/// Which modal the page is showing, with its draft state.
#[derive(Debug, Clone, Default)]
pub enum ContractModal {
    #[default]
    Closed,
    Create(ContractForm),
    Edit {
        id: u64,
        form: ContractForm,
    },
    /// Read-only detail view.
    View {
        id: u64,
    },
    ConfirmTerminate {
        id: u64,
    },
}

/// Counters for the page's stat cards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContractStats {
    pub total: usize,
    pub active: usize,
    pub pending: usize,
    pub expiring_soon: usize,
    pub expired: usize,
}

pub struct ContractService {
    backend: Arc<dyn AdminBackend>,
    list: ListState<Contract>,
    modal: ContractModal,
    /// Next id to assign; never reused.
    next_id: u64,
}

impl ContractService {
    pub fn new(backend: Arc<dyn AdminBackend>, page_size: usize) -> Self {
        Self {
            backend,
            list: ListState::new(page_size),
            modal: ContractModal::Closed,
            next_id: 1,
        }
    }

    /// Fetch all contracts and replace the list.
    pub async fn load(&mut self) -> Result<()> {
        let contracts = self.backend.fetch_contracts().await?;
        self.next_id = contracts.iter().map(|c| c.id).max().unwrap_or(0) + 1;
        info!(count = contracts.len(), "contracts loaded");
        self.list.set_records(contracts);
        Ok(())
    }

    /// Re-fetch, keeping the current filters.
    pub async fn refresh(&mut self) -> Result<()> {
        self.load().await
    }

    pub fn list(&self) -> &ListState<Contract> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListState<Contract> {
        &mut self.list
    }

    pub fn modal(&self) -> &ContractModal {
        &self.modal
    }

    /// Counters over the full contract set, ignoring active filters.
    pub fn stats(&self) -> ContractStats {
        let records = self.list.records();
        let count = |status: ContractStatus| records.iter().filter(|c| c.status == status).count();
        ContractStats {
            total: records.len(),
            active: count(ContractStatus::Active),
            pending: count(ContractStatus::Pending),
            expiring_soon: count(ContractStatus::ExpiringSoon),
            expired: count(ContractStatus::Expired),
        }
    }

    // ---- modals ----

    pub fn open_create(&mut self) {
        self.modal = ContractModal::Create(ContractForm::default());
    }

    pub fn open_edit(&mut self, id: u64) -> Result<()> {
        let contract = self.require(id)?;
        self.modal = ContractModal::Edit {
            id,
            form: ContractForm::from_contract(contract),
        };
        Ok(())
    }

    pub fn open_view(&mut self, id: u64) -> Result<()> {
        self.require(id)?;
        self.modal = ContractModal::View { id };
        Ok(())
    }

    /// Only active contracts can be terminated.
    pub fn open_terminate(&mut self, id: u64) -> Result<()> {
        let contract = self.require(id)?;
        if contract.status != ContractStatus::Active {
            warn!(id, status = contract.status.as_str(), "terminate refused");
            return Err(Error::Validation(format!(
                "only active contracts can be terminated, contract {} is {}",
                id,
                contract.status.as_str()
            )));
        }
        self.modal = ContractModal::ConfirmTerminate { id };
        Ok(())
    }

    /// Close the open modal, discarding any draft.
    pub fn close_modal(&mut self) {
        self.modal = ContractModal::Closed;
    }

    /// The create or edit draft, if one of those modals is open.
    pub fn form_mut(&mut self) -> Option<&mut ContractForm> {
        match &mut self.modal {
            ContractModal::Create(form) | ContractModal::Edit { form, .. } => Some(form),
            _ => None,
        }
    }

    // ---- submissions ----

    /// Create the drafted contract. The platform resolves the typed
    /// party ids later; until then the parties carry placeholder
    /// names and addresses.
    pub fn submit_create(&mut self) -> Result<()> {
        let ContractModal::Create(form) = &self.modal else {
            return Err(Error::Validation("no create draft open".to_string()));
        };

        let now = models::now();
        let start_date = form.start_date.unwrap_or_else(models::today);
        let end_date = form.end_date.unwrap_or_else(models::today);
        let mut contract = Contract {
            id: self.next_id,
            athlete: ContractParty {
                id: form.athlete_id.parse().unwrap_or(0),
                name: "New Athlete".to_string(),
                email: "athlete@example.com".to_string(),
            },
            brand: ContractParty {
                id: form.brand_id.parse().unwrap_or(0),
                name: "New Brand".to_string(),
                email: "brand@example.com".to_string(),
            },
            start_date,
            end_date,
            amount: form.amount.parse().unwrap_or(0),
            currency: form.currency,
            status: form.status,
            terms: form.terms.clone(),
            created_date: models::today(),
            days_until_expiry: 0,
        };
        contract.recompute_expiry(now);

        self.next_id += 1;
        info!(id = contract.id, "contract created");
        self.list.insert(contract);
        self.modal = ContractModal::Closed;
        Ok(())
    }

    /// Apply the edit draft to its contract. Parties stay as they are;
    /// the expiry counter is recomputed from the new end date.
    pub fn submit_edit(&mut self) -> Result<()> {
        let ContractModal::Edit { id, form } = &self.modal else {
            return Err(Error::Validation("no edit draft open".to_string()));
        };
        let id = *id;
        let form = form.clone();
        let now = models::now();

        let updated = self.list.modify(id, |contract| {
            if let Some(start) = form.start_date {
                contract.start_date = start;
            }
            if let Some(end) = form.end_date {
                contract.end_date = end;
            }
            contract.amount = form.amount.parse().unwrap_or(contract.amount);
            contract.currency = form.currency;
            contract.status = form.status;
            contract.terms = form.terms.clone();
            contract.recompute_expiry(now);
        });
        if !updated {
            return Err(Error::NotFound(format!("contract {}", id)));
        }
        info!(id, "contract updated");
        self.modal = ContractModal::Closed;
        Ok(())
    }

    /// Mark the contract terminated. Every other field keeps its value.
    pub fn confirm_terminate(&mut self) -> Result<()> {
        let ContractModal::ConfirmTerminate { id } = &self.modal else {
            return Err(Error::Validation(
                "no terminate confirmation open".to_string(),
            ));
        };
        let id = *id;

        let updated = self.list.modify(id, |contract| {
            contract.status = ContractStatus::Terminated;
        });
        if !updated {
            return Err(Error::NotFound(format!("contract {}", id)));
        }
        info!(id, "contract terminated");
        self.modal = ContractModal::Closed;
        Ok(())
    }

    fn require(&self, id: u64) -> Result<&Contract> {
        self.list
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("contract {}", id)))
    }
}
