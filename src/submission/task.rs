use std::{sync::Arc, time::Duration};

use anyhow::{Context, Result};
use log::{info, warn};
use tokio::{task::JoinHandle, time};
use tokio_util::sync::CancellationToken;

use super::form::{CasualtyForm, ValidatedCasualty, ValidationError};
use crate::notify::{NotificationLevel, Notifier};

pub const DEFAULT_SUBMISSION_DELAY: Duration = Duration::from_millis(500);

pub const SUBMITTED_MESSAGE: &str = "تم تسجيل المصاب بنجاح وإرسال الإنذار";

#[derive(Debug, Clone, PartialEq)]
pub enum SubmissionOutcome {
    Completed(ValidatedCasualty),
    Cancelled,
}

/// An accepted submission waiting out its round-trip.
pub struct SubmissionHandle {
    token: CancellationToken,
    handle: JoinHandle<SubmissionOutcome>,
}

impl SubmissionHandle {
    pub fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    /// Stops the submission if the delay has not elapsed yet. Once the
    /// callback has run there is nothing left to cancel.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    pub async fn wait(self) -> Result<SubmissionOutcome> {
        self.handle
            .await
            .context("submission task failed to join")
    }
}

/// Validates `form` and, if it passes, schedules the simulated round-trip.
///
/// A validation failure sends exactly one error notification and returns the
/// error; nothing is scheduled and `on_complete` is dropped unused. On
/// success `on_complete` runs once after `delay`, followed by one success
/// notification. Must be called inside a tokio runtime.
pub fn submit<F>(
    form: &CasualtyForm,
    delay: Duration,
    notifier: Arc<dyn Notifier>,
    on_complete: F,
) -> Result<SubmissionHandle, ValidationError>
where
    F: FnOnce(ValidatedCasualty) + Send + 'static,
{
    let casualty = match form.validate() {
        Ok(casualty) => casualty,
        Err(err) => {
            warn!("Casualty form rejected: {err:?}");
            notifier.notify(&err.to_string(), NotificationLevel::Error);
            return Err(err);
        }
    };

    let token = CancellationToken::new();
    let task_token = token.clone();

    let handle = tokio::spawn(async move {
        tokio::select! {
            biased;
            _ = task_token.cancelled() => {
                info!("Casualty submission for {} cancelled", casualty.name);
                SubmissionOutcome::Cancelled
            }
            _ = time::sleep(delay) => {
                on_complete(casualty.clone());
                notifier.notify(SUBMITTED_MESSAGE, NotificationLevel::Success);
                info!("Casualty {} registered", casualty.name);
                SubmissionOutcome::Completed(casualty)
            }
        }
    });

    Ok(SubmissionHandle { token, handle })
}
