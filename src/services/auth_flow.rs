//! Admin authentication flow service.
//!
//! Drives the four-step auth surface as a stage machine: sign-in,
//! reset request, code verification and password change. Each
//! mutation is only valid at its own stage; anything else is a
//! validation error. Verification codes are six digits entered one
//! slot at a time, and resending a code is rate limited by a
//! cooldown deadline.

use std::sync::Arc;

use chrono::{DateTime, Duration, Utc};
use tracing::{info, warn};

use crate::error::{Error, Result};
use crate::models;
use crate::services::backend::AdminBackend;
use crate::services::password::{self, PasswordForm};

/// Number of digit slots in a verification code.
pub const CODE_LENGTH: usize = 6;

/// Where the operator is in the authentication flow.
#[derive(Debug, Clone)]
pub enum AuthStage {
    SignIn {
        email: String,
        password: String,
    },
    ForgotPassword {
        email: String,
    },
    VerifyCode {
        email: String,
        digits: [Option<u8>; CODE_LENGTH],
        /// Next moment a resend is allowed.
        resend_available_at: DateTime<Utc>,
    },
    ChangePassword {
        email: String,
        form: PasswordForm,
    },
}

impl Default for AuthStage {
    fn default() -> Self {
        AuthStage::SignIn {
            email: String::new(),
            password: String::new(),
        }
    }
}

pub struct AuthFlowService {
    backend: Arc<dyn AdminBackend>,
    stage: AuthStage,
    resend_cooldown: Duration,
}

impl AuthFlowService {
    pub fn new(backend: Arc<dyn AdminBackend>, resend_cooldown_secs: i64) -> Self {
        Self {
            backend,
            stage: AuthStage::default(),
            resend_cooldown: Duration::seconds(resend_cooldown_secs),
        }
    }

    pub fn stage(&self) -> &AuthStage {
        &self.stage
    }

    /// Abandon the flow and return to a blank sign-in form.
    pub fn back_to_sign_in(&mut self) {
        self.stage = AuthStage::default();
    }

    // ---- sign in ----

    pub fn set_credentials(
        &mut self,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<()> {
        let AuthStage::SignIn {
            email: stored_email,
            password: stored_password,
        } = &mut self.stage
        else {
            return Err(Error::Validation("not at the sign-in step".to_string()));
        };
        *stored_email = email.into();
        *stored_password = password.into();
        Ok(())
    }

    /// Authenticate with the typed credentials. Success clears the
    /// form.
    pub async fn sign_in(&mut self) -> Result<()> {
        let AuthStage::SignIn { email, password } = &self.stage else {
            return Err(Error::Validation("not at the sign-in step".to_string()));
        };
        if email.is_empty() || password.is_empty() {
            return Err(Error::Validation(
                "email and password are required".to_string(),
            ));
        }
        let email = email.clone();
        let password = password.clone();

        self.backend.sign_in(&email, &password).await?;
        info!(email = %email, "admin signed in");
        self.stage = AuthStage::default();
        Ok(())
    }

    // ---- reset request ----

    /// Move to the reset-request step, carrying the typed email over.
    pub fn start_password_reset(&mut self) -> Result<()> {
        let AuthStage::SignIn { email, .. } = &self.stage else {
            return Err(Error::Validation("not at the sign-in step".to_string()));
        };
        self.stage = AuthStage::ForgotPassword {
            email: email.clone(),
        };
        Ok(())
    }

    pub fn set_reset_email(&mut self, email: impl Into<String>) -> Result<()> {
        let AuthStage::ForgotPassword {
            email: stored_email,
        } = &mut self.stage
        else {
            return Err(Error::Validation(
                "not at the reset-request step".to_string(),
            ));
        };
        *stored_email = email.into();
        Ok(())
    }

    /// Ask the platform to email a verification code, then move to the
    /// code entry step with a fresh resend deadline.
    pub async fn request_reset(&mut self) -> Result<()> {
        let AuthStage::ForgotPassword { email } = &self.stage else {
            return Err(Error::Validation(
                "not at the reset-request step".to_string(),
            ));
        };
        if email.is_empty() {
            return Err(Error::Validation("email is required".to_string()));
        }
        let email = email.clone();

        self.backend.request_reset_code(&email).await?;
        info!(email = %email, "verification code requested");
        self.stage = AuthStage::VerifyCode {
            email,
            digits: [None; CODE_LENGTH],
            resend_available_at: models::now() + self.resend_cooldown,
        };
        Ok(())
    }

    // ---- code entry ----

    pub fn set_digit(&mut self, slot: usize, digit: u8) -> Result<()> {
        if digit > 9 {
            return Err(Error::InvalidInput(format!("{} is not a digit", digit)));
        }
        let slots = self.digits_mut()?;
        let stored = slots
            .get_mut(slot)
            .ok_or_else(|| Error::InvalidInput(format!("digit slot {} out of range", slot)))?;
        *stored = Some(digit);
        Ok(())
    }

    pub fn clear_digit(&mut self, slot: usize) -> Result<()> {
        let slots = self.digits_mut()?;
        let stored = slots
            .get_mut(slot)
            .ok_or_else(|| Error::InvalidInput(format!("digit slot {} out of range", slot)))?;
        *stored = None;
        Ok(())
    }

    /// Whether every digit slot is filled.
    pub fn code_complete(&self) -> bool {
        match &self.stage {
            AuthStage::VerifyCode { digits, .. } => digits.iter().all(Option::is_some),
            _ => false,
        }
    }

    /// Check the entered code and move to the password change step.
    pub async fn verify_code(&mut self) -> Result<()> {
        let AuthStage::VerifyCode { email, digits, .. } = &self.stage else {
            return Err(Error::Validation(
                "not at the code entry step".to_string(),
            ));
        };
        if digits.iter().any(Option::is_none) {
            return Err(Error::Validation(format!(
                "enter all {} digits",
                CODE_LENGTH
            )));
        }
        let email = email.clone();
        let code: String = digits
            .iter()
            .filter_map(|d| d.map(|n| char::from(b'0' + n)))
            .collect();

        self.backend.verify_code(&email, &code).await?;
        info!(email = %email, "verification code accepted");
        self.stage = AuthStage::ChangePassword {
            email,
            form: PasswordForm::default(),
        };
        Ok(())
    }

    /// Request another code. Refused until the cooldown deadline has
    /// passed; entered digits are kept either way.
    pub async fn resend_code(&mut self) -> Result<()> {
        let AuthStage::VerifyCode {
            email,
            resend_available_at,
            ..
        } = &self.stage
        else {
            return Err(Error::Validation(
                "not at the code entry step".to_string(),
            ));
        };

        let now = models::now();
        if now < *resend_available_at {
            let wait = (*resend_available_at - now).num_seconds().max(1);
            warn!(wait, "resend refused during cooldown");
            return Err(Error::Validation(format!(
                "resend available in {}s",
                wait
            )));
        }
        let email = email.clone();

        self.backend.request_reset_code(&email).await?;
        info!(email = %email, "verification code resent");
        if let AuthStage::VerifyCode {
            resend_available_at,
            ..
        } = &mut self.stage
        {
            *resend_available_at = models::now() + self.resend_cooldown;
        }
        Ok(())
    }

    // ---- password change ----

    /// The new-password draft, if the flow is at that step.
    pub fn password_form_mut(&mut self) -> Option<&mut PasswordForm> {
        match &mut self.stage {
            AuthStage::ChangePassword { form, .. } => Some(form),
            _ => None,
        }
    }

    /// Validate and store the new password, then return to sign-in.
    pub async fn submit_new_password(&mut self) -> Result<()> {
        let AuthStage::ChangePassword { email, form } = &self.stage else {
            return Err(Error::Validation(
                "not at the password change step".to_string(),
            ));
        };

        if let Err(err) = password::validate_change(&form.new_password, &form.confirm_password) {
            warn!(%err, "new password rejected");
            return Err(err);
        }
        let email = email.clone();
        let new_password = form.new_password.clone();

        self.backend.update_password(&email, &new_password).await?;
        info!(email = %email, "password reset complete");
        self.stage = AuthStage::default();
        Ok(())
    }

    fn digits_mut(&mut self) -> Result<&mut [Option<u8>; CODE_LENGTH]> {
        match &mut self.stage {
            AuthStage::VerifyCode { digits, .. } => Ok(digits),
            _ => Err(Error::Validation(
                "not at the code entry step".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::backend::{LatencyProfile, MockBackend};

    fn service(cooldown_secs: i64) -> AuthFlowService {
        let backend = Arc::new(MockBackend::new(LatencyProfile::instant()));
        AuthFlowService::new(backend, cooldown_secs)
    }

    async fn at_code_entry(cooldown_secs: i64) -> AuthFlowService {
        let mut auth = service(cooldown_secs);
        auth.start_password_reset().unwrap();
        auth.set_reset_email("admin@lockerai.com").unwrap();
        auth.request_reset().await.unwrap();
        auth
    }

    #[tokio::test]
    async fn test_digit_slots_are_bounds_checked() {
        let mut auth = at_code_entry(60).await;
        assert!(matches!(
            auth.set_digit(6, 1),
            Err(Error::InvalidInput(_))
        ));
        assert!(matches!(
            auth.set_digit(0, 10),
            Err(Error::InvalidInput(_))
        ));
        auth.set_digit(0, 9).unwrap();
        auth.clear_digit(0).unwrap();
        assert!(!auth.code_complete());
    }

    #[tokio::test]
    async fn test_verify_needs_every_digit() {
        let mut auth = at_code_entry(60).await;
        for slot in 0..CODE_LENGTH - 1 {
            auth.set_digit(slot, 1).unwrap();
        }
        assert!(matches!(
            auth.verify_code().await,
            Err(Error::Validation(_))
        ));

        auth.set_digit(CODE_LENGTH - 1, 1).unwrap();
        assert!(auth.code_complete());
        auth.verify_code().await.unwrap();
        assert!(matches!(auth.stage(), AuthStage::ChangePassword { .. }));
    }

    #[tokio::test]
    async fn test_resend_waits_for_cooldown() {
        let mut auth = at_code_entry(60).await;
        let err = auth.resend_code().await.unwrap_err();
        assert!(err.to_string().contains("resend available"));

        let mut auth = at_code_entry(0).await;
        auth.set_digit(0, 3).unwrap();
        auth.resend_code().await.unwrap();
        // digits survive a resend
        assert!(matches!(
            auth.stage(),
            AuthStage::VerifyCode { digits, .. } if digits[0] == Some(3)
        ));
    }
}
