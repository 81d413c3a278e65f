//! Login view state machine
//!
//! `Idle -> Submitting -> LoggedIn` on a successful lookup, or
//! `Submitting -> Failed` with a message, after which the form is usable
//! again. Only one lookup can be pending at a time.

use super::Route;
use crate::api::PortalApi;
use crate::error::{PortalError, PortalResult};
use crate::models::CustomerRecord;
use crate::session::SessionStore;

pub const NOT_FOUND_MESSAGE: &str = "Phone number not found. Please try again.";
pub const LOGIN_FAILED_MESSAGE: &str = "An error occurred. Please try again.";

#[derive(Debug, Clone, PartialEq, Default)]
pub enum LoginState {
    #[default]
    Idle,
    Submitting,
    Failed(String),
    LoggedIn,
}

#[derive(Debug, Clone, Default)]
pub struct LoginFlow {
    phone: String,
    state: LoginState,
}

impl LoginFlow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn set_phone(&mut self, phone: impl Into<String>) {
        self.phone = phone.into();
    }

    pub fn state(&self) -> &LoginState {
        &self.state
    }

    pub fn is_submitting(&self) -> bool {
        self.state == LoginState::Submitting
    }

    pub fn error_message(&self) -> Option<&str> {
        match &self.state {
            LoginState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Start a lookup for the current phone number.
    ///
    /// Returns the phone to look up, or [`PortalError::Busy`] if a lookup is
    /// already pending. Any previous error message is cleared.
    pub fn begin_submit(&mut self) -> PortalResult<String> {
        if self.is_submitting() {
            return Err(PortalError::Busy);
        }
        self.state = LoginState::Submitting;
        Ok(self.phone.clone())
    }

    /// Apply the lookup result. On success the customer is saved and the
    /// dashboard route is returned.
    pub fn finish<S: SessionStore + ?Sized>(
        &mut self,
        outcome: PortalResult<CustomerRecord>,
        session: &S,
    ) -> Option<Route> {
        if !self.is_submitting() {
            tracing::debug!("Dropping lookup response for a login that is not pending");
            return None;
        }

        match outcome {
            Ok(customer) => match session.save(&customer) {
                Ok(()) => {
                    tracing::info!(customer_key = %customer.customer_key, "Customer logged in");
                    self.state = LoginState::LoggedIn;
                    Some(Route::Dashboard)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to store session");
                    self.state = LoginState::Failed(LOGIN_FAILED_MESSAGE.to_string());
                    None
                }
            },
            Err(PortalError::NotFound) => {
                tracing::info!("No customer for phone number");
                self.state = LoginState::Failed(NOT_FOUND_MESSAGE.to_string());
                None
            }
            Err(e) => {
                tracing::warn!(error = %e, "Customer lookup failed");
                self.state = LoginState::Failed(LOGIN_FAILED_MESSAGE.to_string());
                None
            }
        }
    }

    /// Run one full lookup against `api`
    pub async fn submit<A, S>(&mut self, api: &A, session: &S) -> PortalResult<Option<Route>>
    where
        A: PortalApi + ?Sized,
        S: SessionStore + ?Sized,
    {
        let phone = self.begin_submit()?;
        let outcome = api.find_customer_by_phone(&phone).await;
        Ok(self.finish(outcome, session))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::MemorySessionStore;
    use crate::views::testing::StubApi;

    #[tokio::test]
    async fn test_successful_login_saves_and_navigates() {
        let api = StubApi::new().customer("5551234567", CustomerRecord::new(42, "Sam"));
        let session = MemorySessionStore::new();
        let mut flow = LoginFlow::new();
        flow.set_phone("5551234567");

        let route = flow.submit(&api, &session).await.unwrap();

        assert_eq!(route, Some(Route::Dashboard));
        assert_eq!(flow.state(), &LoginState::LoggedIn);
        assert_eq!(session.load().unwrap(), Some(CustomerRecord::new(42, "Sam")));
        assert_eq!(api.lookups(), vec!["5551234567".to_string()]);
    }

    #[tokio::test]
    async fn test_not_found_leaves_session_untouched() {
        let api = StubApi::new();
        let previous = CustomerRecord::new(7, "Ana");
        let session = MemorySessionStore::with_customer(previous.clone());
        let mut flow = LoginFlow::new();
        flow.set_phone("0000000000");

        let route = flow.submit(&api, &session).await.unwrap();

        assert_eq!(route, None);
        assert_eq!(flow.error_message(), Some(NOT_FOUND_MESSAGE));
        assert_eq!(session.load().unwrap(), Some(previous));
    }

    #[tokio::test]
    async fn test_other_failure_is_generic() {
        let api = StubApi::new().lookup_error(PortalError::Api {
            status: 500,
            message: "db down".to_string(),
        });
        let session = MemorySessionStore::new();
        let mut flow = LoginFlow::new();

        flow.submit(&api, &session).await.unwrap();
        assert_eq!(flow.error_message(), Some(LOGIN_FAILED_MESSAGE));
        assert_eq!(session.load().unwrap(), None);
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let api = StubApi::new().customer("5551234567", CustomerRecord::new(42, "Sam"));
        let session = MemorySessionStore::new();
        let mut flow = LoginFlow::new();

        flow.set_phone("555");
        flow.submit(&api, &session).await.unwrap();
        assert_eq!(flow.error_message(), Some(NOT_FOUND_MESSAGE));

        flow.set_phone("5551234567");
        let route = flow.submit(&api, &session).await.unwrap();
        assert_eq!(route, Some(Route::Dashboard));
        assert_eq!(flow.error_message(), None);
    }

    #[test]
    fn test_duplicate_submission_rejected() {
        let mut flow = LoginFlow::new();
        flow.set_phone("5551234567");

        assert_eq!(flow.begin_submit().unwrap(), "5551234567");
        assert!(flow.is_submitting());
        assert_eq!(flow.begin_submit(), Err(PortalError::Busy));
    }

    #[test]
    fn test_response_without_pending_submit_is_ignored() {
        let session = MemorySessionStore::new();
        let mut flow = LoginFlow::new();

        let route = flow.finish(Ok(CustomerRecord::new(1, "Ana")), &session);
        assert_eq!(route, None);
        assert_eq!(session.load().unwrap(), None);
        assert_eq!(flow.state(), &LoginState::Idle);
    }
}
