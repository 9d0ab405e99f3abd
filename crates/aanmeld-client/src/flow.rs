use std::time::Duration;

use async_trait::async_trait;
use chrono::NaiveDate;
use serde_json::Value;
use tracing::{debug, info, warn};

use crate::error::SubmitError;
use crate::state::FormState;

/// Generic banner shown when local validation fails.
pub const CHECK_FIELDS_MESSAGE: &str = "Controleer de verplichte velden en probeer opnieuw.";

/// Pause between a confirmed submission and the record reset, so the blank
/// form never flashes behind the confirmation.
const RESET_DELAY: Duration = Duration::from_millis(100);

/// Acknowledgment from the submission collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitAck {
    pub message: Option<String>,
}

/// The one collaborator that leaves the process. Awaiting it is the flow's
/// sole suspension point.
#[async_trait]
pub trait Submitter: Send + Sync {
    async fn submit(&self, payload: Value) -> Result<SubmitAck, SubmitError>;
}

/// Submission lifecycle as one tagged state. Every presentation concern
/// derives from the current variant: spinner iff `Submitting`, confirmation
/// iff `Success`, banner text from `Invalid`/`Failed`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,
    Validating,
    Invalid {
        message: String,
    },
    Submitting,
    Success,
    Failed {
        message: String,
    },
}

impl Phase {
    /// Banner derived from the phase; `None` means nothing to show.
    pub fn status(&self) -> Option<Status> {
        match self {
            Phase::Invalid { message } | Phase::Failed { message } => Some(Status {
                text: message.clone(),
            }),
            _ => None,
        }
    }
}

/// Presentation-level status banner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Status {
    pub text: String,
}

/// Result of one submit trigger.
#[derive(Debug, PartialEq, Eq)]
pub enum Outcome {
    /// A submission was already in flight; the trigger was ignored.
    Busy,
    /// Local validation failed; no network call was made.
    Invalid,
    Accepted(SubmitAck),
    Failed(SubmitError),
}

/// Orchestrates validate → submit → interpret for one form state.
pub struct SubmitFlow<S> {
    submitter: S,
    phase: Phase,
    in_flight: bool,
}

impl<S: Submitter> SubmitFlow<S> {
    pub fn new(submitter: S) -> Self {
        Self {
            submitter,
            phase: Phase::Idle,
            in_flight: false,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Returns the flow to rest once the presentation layer is done with the
    /// outcome (confirmation dismissed, banner closed). Ignored while a
    /// submission is still in flight.
    pub fn acknowledge(&mut self) {
        if !matches!(self.phase, Phase::Submitting) {
            self.phase = Phase::Idle;
        }
    }

    /// Runs one submit attempt end to end.
    ///
    /// A trigger while a submission is in flight is a no-op. The in-flight
    /// flag is cleared before any outcome is interpreted, so no failure shape
    /// can leave the form permanently disabled. On acceptance the record is
    /// reset after a short delay; on failure it is left untouched.
    pub async fn submit(&mut self, state: &mut FormState, today: NaiveDate) -> Outcome {
        if self.in_flight {
            warn!(form = %state.spec().id, "submit ignored: already in flight");
            return Outcome::Busy;
        }

        self.phase = Phase::Validating;
        let invalid_fields = state.validate_now(today).len();
        if invalid_fields > 0 {
            debug!(form = %state.spec().id, fields = invalid_fields, "validation failed");
            self.phase = Phase::Invalid {
                message: CHECK_FIELDS_MESSAGE.to_string(),
            };
            return Outcome::Invalid;
        }

        self.in_flight = true;
        self.phase = Phase::Submitting;
        // The guard owns the cleanup: dropping the submit future mid-await
        // (a caller racing it against a timeout, an aborted task) must not
        // leave the flow stuck in `Submitting` with the flag set.
        let guard = FlightGuard {
            in_flight: &mut self.in_flight,
            phase: &mut self.phase,
        };
        let result = self.submitter.submit(state.payload()).await;

        match result {
            Ok(ack) => {
                info!(form = %state.spec().id, "submission accepted");
                *guard.phase = Phase::Success;
                drop(guard);
                tokio::time::sleep(RESET_DELAY).await;
                state.reset();
                Outcome::Accepted(ack)
            }
            Err(err) => {
                warn!(form = %state.spec().id, error = %err, "submission failed");
                *guard.phase = Phase::Failed {
                    message: err.to_string(),
                };
                drop(guard);
                Outcome::Failed(err)
            }
        }
    }
}

/// Clears the in-flight flag on every exit path, including cancellation.
/// A phase still at `Submitting` when the guard drops means the await never
/// resolved; it falls back to `Idle` so the flow stays usable.
struct FlightGuard<'a> {
    in_flight: &'a mut bool,
    phase: &'a mut Phase,
}

impl Drop for FlightGuard<'_> {
    fn drop(&mut self) {
        *self.in_flight = false;
        if matches!(self.phase, Phase::Submitting) {
            *self.phase = Phase::Idle;
        }
    }
}
