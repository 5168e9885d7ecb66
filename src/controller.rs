//! Load, sign-up and unregister workflows behind the activities page.
//!
//! Nothing here touches the DOM or the console. Each workflow returns an
//! outcome; the components turn outcomes into rendered state and log lines.

use std::cell::RefCell;

use crate::api::ActivitiesApi;
use crate::error::{Error, ErrorKind, Result};
use crate::message::Notice;
use crate::model::{ActivityCatalog, ApiError, ApiMessage};

pub const SIGNUP_FALLBACK_DETAIL: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";

/// Hands out increasing tickets to catalog loads and admits a response only
/// if nothing newer has been applied yet.
#[derive(Debug, Default)]
pub struct RefreshGate {
    issued: u64,
    applied: u64,
}

impl RefreshGate {
    pub fn issue(&mut self) -> u64 {
        self.issued += 1;
        self.issued
    }

    pub fn admit(&mut self, ticket: u64) -> bool {
        if ticket > self.applied {
            self.applied = ticket;
            true
        } else {
            false
        }
    }
}

#[derive(Debug)]
pub enum Refresh {
    Loaded(ActivityCatalog),
    Failed(Error),
    /// A newer load already landed; this one is dropped.
    Stale,
}

#[derive(Debug)]
pub enum SignupOutcome {
    Registered { message: String },
    Rejected { detail: String },
    Failed(Error),
}

impl SignupOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, SignupOutcome::Registered { .. })
    }

    /// Only a registration clears the form; a failure keeps the input for retry.
    pub fn resets_form(&self) -> bool {
        self.succeeded()
    }

    pub fn notice(&self) -> Notice {
        match self {
            SignupOutcome::Registered { message } => Notice::success(message.clone()),
            SignupOutcome::Rejected { detail } => Notice::error(detail.clone()),
            SignupOutcome::Failed(_) => Notice::error(SIGNUP_FAILED),
        }
    }

    pub fn log_line(&self) -> Option<String> {
        match self {
            SignupOutcome::Failed(e) => Some(format!("Error signing up: {e}")),
            _ => None,
        }
    }
}

#[derive(Debug)]
pub enum UnregisterOutcome {
    Removed,
    Rejected { status: u16, detail: Option<String> },
    Failed(Error),
}

impl UnregisterOutcome {
    pub fn succeeded(&self) -> bool {
        matches!(self, UnregisterOutcome::Removed)
    }

    /// Unregister failures are only ever logged, never shown.
    pub fn log_line(&self) -> Option<String> {
        match self {
            UnregisterOutcome::Removed => None,
            UnregisterOutcome::Rejected { status, detail } => Some(format!(
                "Error unregistering: {}",
                detail.clone().unwrap_or_else(|| format!("HTTP {status}"))
            )),
            UnregisterOutcome::Failed(e) => Some(format!("Error unregistering participant: {e}")),
        }
    }
}

async fn load_catalog<A: ActivitiesApi>(api: &A) -> Result<ActivityCatalog> {
    let resp = api.fetch_catalog().await?;
    if !resp.ok() {
        return Err(ErrorKind::Status(resp.status).into());
    }
    Ok(serde_json::from_str(&resp.body)?)
}

pub struct ViewController<A> {
    api: A,
    gate: RefCell<RefreshGate>,
}

impl<A: ActivitiesApi> ViewController<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            gate: RefCell::new(RefreshGate::default()),
        }
    }

    pub fn api(&self) -> &A {
        &self.api
    }

    pub async fn refresh_view(&self) -> Refresh {
        let ticket = self.gate.borrow_mut().issue();
        let result = load_catalog(&self.api).await;
        if !self.gate.borrow_mut().admit(ticket) {
            return Refresh::Stale;
        }
        match result {
            Ok(catalog) => Refresh::Loaded(catalog),
            Err(e) => Refresh::Failed(e),
        }
    }

    pub async fn signup(&self, email: &str, activity: &str) -> SignupOutcome {
        let resp = match self.api.post_signup(activity, email).await {
            Ok(resp) => resp,
            Err(e) => return SignupOutcome::Failed(e),
        };

        if resp.ok() {
            return match serde_json::from_str::<ApiMessage>(&resp.body) {
                Ok(body) => SignupOutcome::Registered {
                    message: body
                        .message
                        .unwrap_or_else(|| format!("Signed up {email} for {activity}")),
                },
                Err(e) => SignupOutcome::Failed(e.into()),
            };
        }

        let detail = serde_json::from_str::<ApiError>(&resp.body)
            .ok()
            .and_then(|body| body.detail_text())
            .unwrap_or_else(|| SIGNUP_FALLBACK_DETAIL.to_string());
        SignupOutcome::Rejected { detail }
    }

    pub async fn unregister(&self, activity: &str, email: &str) -> UnregisterOutcome {
        let resp = match self.api.delete_signup(activity, email).await {
            Ok(resp) => resp,
            Err(e) => return UnregisterOutcome::Failed(e),
        };

        if resp.ok() {
            return UnregisterOutcome::Removed;
        }

        match serde_json::from_str::<ApiError>(&resp.body) {
            Ok(body) => UnregisterOutcome::Rejected {
                status: resp.status,
                detail: body.detail_text(),
            },
            Err(e) => UnregisterOutcome::Failed(e.into()),
        }
    }

    /// Signs up, reports the outcome, then reloads the catalog on success.
    /// `on_outcome` runs before the reload starts.
    pub async fn submit_signup<F>(&self, email: &str, activity: &str, on_outcome: F) -> Option<Refresh>
    where
        F: FnOnce(&SignupOutcome),
    {
        let outcome = self.signup(email, activity).await;
        on_outcome(&outcome);
        if outcome.succeeded() {
            Some(self.refresh_view().await)
        } else {
            None
        }
    }

    pub async fn remove_participant<F>(&self, activity: &str, email: &str, on_outcome: F) -> Option<Refresh>
    where
        F: FnOnce(&UnregisterOutcome),
    {
        let outcome = self.unregister(activity, email).await;
        on_outcome(&outcome);
        if outcome.succeeded() {
            Some(self.refresh_view().await)
        } else {
            None
        }
    }
}
