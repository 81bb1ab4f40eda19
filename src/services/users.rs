//! Account management service.
//!
//! Backs the user administration page: a searchable, paginated account
//! list plus the create, edit, delete and change-password modals. Only
//! one modal is open at a time; a failed submission leaves the modal
//! open with its draft intact so the operator can correct it.

use std::sync::Arc;

use locker_listing::ListState;
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models::{self, User, UserCategory, UserStatus};
use crate::services::backend::AdminBackend;
use crate::services::password::{self, PasswordForm};

/// Draft of an account as typed into the create and edit modals.
#[derive(Debug, Clone)]
pub struct UserForm {
    pub name: String,
    pub email: String,
    pub category: UserCategory,
    pub status: UserStatus,
    /// Only used on create; edits never touch the password.
    pub password: String,
}

impl Default for UserForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            category: UserCategory::Athlete,
            status: UserStatus::Active,
            password: String::new(),
        }
    }
}

impl UserForm {
    /// Prefill from an existing account for the edit modal.
    pub fn from_user(user: &User) -> Self {
        Self {
            name: user.name.clone(),
            email: user.email.clone(),
            category: user.category,
            status: user.status,
            password: String::new(),
        }
    }
}

/// Which modal the page is showing, with its draft state.
#[derive(Debug, Clone, Default)]
pub enum UserModal {
    #[default]
    Closed,
    Create(UserForm),
    Edit {
        id: u64,
        form: UserForm,
    },
    ConfirmDelete {
        id: u64,
    },
    ChangePassword {
        id: u64,
        form: PasswordForm,
    },
}

pub struct UserService {
    backend: Arc<dyn AdminBackend>,
    list: ListState<User>,
    modal: UserModal,
    /// Next id to assign; never reused after a delete.
    next_id: u64,
}

impl UserService {
    pub fn new(backend: Arc<dyn AdminBackend>, page_size: usize) -> Self {
        Self {
            backend,
            list: ListState::new(page_size),
            modal: UserModal::Closed,
            next_id: 1,
        }
    }

    /// Fetch all accounts and replace the list.
    pub async fn load(&mut self) -> Result<()> {
        let users = self.backend.fetch_users().await?;
        self.next_id = users.iter().map(|u| u.id).max().unwrap_or(0) + 1;
        info!(count = users.len(), "users loaded");
        self.list.set_records(users);
        Ok(())
    }

    /// Re-fetch, keeping the current filters.
    pub async fn refresh(&mut self) -> Result<()> {
        self.load().await
    }

    pub fn list(&self) -> &ListState<User> {
        &self.list
    }

    pub fn list_mut(&mut self) -> &mut ListState<User> {
        &mut self.list
    }

    pub fn modal(&self) -> &UserModal {
        &self.modal
    }

    // ---- modals ----

    pub fn open_create(&mut self) {
        self.modal = UserModal::Create(UserForm::default());
    }

    pub fn open_edit(&mut self, id: u64) -> Result<()> {
        let user = self.require(id)?;
        self.modal = UserModal::Edit {
            id,
            form: UserForm::from_user(user),
        };
        Ok(())
    }

    pub fn open_delete(&mut self, id: u64) -> Result<()> {
        self.require(id)?;
        self.modal = UserModal::ConfirmDelete { id };
        Ok(())
    }

    pub fn open_change_password(&mut self, id: u64) -> Result<()> {
        self.require(id)?;
        self.modal = UserModal::ChangePassword {
            id,
            form: PasswordForm::default(),
        };
        Ok(())
    }

    /// Close the open modal, discarding any draft.
    pub fn close_modal(&mut self) {
        self.modal = UserModal::Closed;
    }

    /// The create or edit draft, if one of those modals is open.
    pub fn form_mut(&mut self) -> Option<&mut UserForm> {
        match &mut self.modal {
            UserModal::Create(form) | UserModal::Edit { form, .. } => Some(form),
            _ => None,
        }
    }

    /// The change-password draft, if that modal is open.
    pub fn password_form_mut(&mut self) -> Option<&mut PasswordForm> {
        match &mut self.modal {
            UserModal::ChangePassword { form, .. } => Some(form),
            _ => None,
        }
    }

    // ---- submissions ----

    /// Create the drafted account. Join date is today and last login
    /// stays unset until the account first signs in.
    pub fn submit_create(&mut self) -> Result<()> {
        let UserModal::Create(form) = &self.modal else {
            return Err(Error::Validation("no create draft open".to_string()));
        };

        let user = User {
            id: self.next_id,
            name: form.name.clone(),
            email: form.email.clone(),
            category: form.category,
            status: form.status,
            join_date: models::today(),
            last_login: None,
        };
        self.next_id += 1;
        info!(id = user.id, "user created");
        self.list.insert(user);
        self.modal = UserModal::Closed;
        Ok(())
    }

    /// Apply the edit draft to its account.
    pub fn submit_edit(&mut self) -> Result<()> {
        let UserModal::Edit { id, form } = &self.modal else {
            return Err(Error::Validation("no edit draft open".to_string()));
        };
        let id = *id;
        let (name, email, category, status) = (
            form.name.clone(),
            form.email.clone(),
            form.category,
            form.status,
        );

        let updated = self.list.modify(id, |user| {
            user.name = name;
            user.email = email;
            user.category = category;
            user.status = status;
        });
        if !updated {
            return Err(Error::NotFound(format!("user {}", id)));
        }
        info!(id, "user updated");
        self.modal = UserModal::Closed;
        Ok(())
    }

    pub fn confirm_delete(&mut self) -> Result<()> {
        let UserModal::ConfirmDelete { id } = &self.modal else {
            return Err(Error::Validation("no delete confirmation open".to_string()));
        };
        let id = *id;

        if !self.list.remove(id) {
            return Err(Error::NotFound(format!("user {}", id)));
        }
        info!(id, "user deleted");
        self.modal = UserModal::Closed;
        Ok(())
    }

    /// Validate and apply the password change. The platform does not
    /// echo passwords back, so success only closes the modal.
    pub fn submit_password_change(&mut self) -> Result<()> {
        let UserModal::ChangePassword { id, form } = &self.modal else {
            return Err(Error::Validation("no password draft open".to_string()));
        };

        if let Err(err) = password::validate_change(&form.new_password, &form.confirm_password) {
            warn!(id = *id, %err, "password change rejected");
            return Err(err);
        }
        info!(id = *id, "password changed");
        self.modal = UserModal::Closed;
        Ok(())
    }

    fn require(&self, id: u64) -> Result<&User> {
        self.list
            .get(id)
            .ok_or_else(|| Error::NotFound(format!("user {}", id)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_form_prefills_from_account() {
        let user = User {
            id: 3,
            name: "Sarah Wilson".to_string(),
            email: "sarah@example.com".to_string(),
            category: UserCategory::Athlete,
            status: UserStatus::Inactive,
            join_date: models::today(),
            last_login: None,
        };

        let form = UserForm::from_user(&user);
        assert_eq!(form.name, "Sarah Wilson");
        assert_eq!(form.status, UserStatus::Inactive);
        assert!(form.password.is_empty());
    }
}
