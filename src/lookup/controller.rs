use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::config::{ApiErrorPolicy, LookupConfig};
use crate::lookup::client::{BreachClient, BreachSource};
use crate::lookup::error::LookupError;
use crate::lookup::state::{classify_response, WorkflowIntent, WorkflowReducer, WorkflowState};
use crate::mvi::Reducer;

/// Owns the lookup workflow state and drives lookups against a
/// [`BreachSource`].
///
/// Lookups run as tasks on the given runtime. State is only touched
/// through [`WorkflowReducer`], never across an await.
pub struct LookupController<S = BreachClient> {
    source: Arc<S>,
    state: Arc<Mutex<WorkflowState>>,
    policy: ApiErrorPolicy,
    runtime: Handle,
}

impl LookupController<BreachClient> {
    /// Build a controller backed by the HTTP client.
    pub fn from_config(config: &LookupConfig, runtime: Handle) -> Result<Self, LookupError> {
        let client = BreachClient::new(config)?;
        Ok(Self::new(client, config.api_errors, runtime))
    }
}

impl<S: BreachSource> LookupController<S> {
    pub fn new(source: S, policy: ApiErrorPolicy, runtime: Handle) -> Self {
        Self {
            source: Arc::new(source),
            state: Arc::new(Mutex::new(WorkflowState::default())),
            policy,
            runtime,
        }
    }

    /// Copy of the current workflow state.
    pub fn snapshot(&self) -> WorkflowState {
        self.state.lock().clone()
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock().is_loading
    }

    /// Start a lookup for `raw_email`.
    ///
    /// Returns `None` without touching state when the trimmed email is
    /// empty. Otherwise the lookup runs in the background; the returned
    /// handle resolves once its result has been applied (or discarded,
    /// if a newer submission superseded it).
    pub fn submit(&self, raw_email: &str) -> Option<JoinHandle<()>> {
        let email = raw_email.trim();
        if email.is_empty() {
            tracing::debug!("Ignoring empty email submission");
            return None;
        }

        let generation = {
            let mut state = self.state.lock();
            let generation = state.generation + 1;
            apply(
                &mut state,
                WorkflowIntent::Submitted {
                    generation,
                    email: email.to_string(),
                },
            );
            generation
        };

        tracing::debug!(
            generation,
            domain = email_domain(email),
            "Submitting breach lookup"
        );

        let email = email.to_string();
        let source = Arc::clone(&self.source);
        let state = Arc::clone(&self.state);
        let policy = self.policy;

        Some(self.runtime.spawn(async move {
            // Runs on every exit path, including a panic in the source.
            let settle = scopeguard::guard(state, move |state| {
                apply(&mut state.lock(), WorkflowIntent::Settled { generation });
            });

            let intent = match source.check_email(&email).await {
                Ok(response) => WorkflowIntent::Resolved {
                    generation,
                    outcome: classify_response(response, policy),
                },
                Err(err) => {
                    tracing::warn!(
                        generation,
                        kind = err.kind(),
                        error = %err,
                        "Breach lookup failed"
                    );
                    WorkflowIntent::Failed {
                        generation,
                        message: err.user_message().to_string(),
                    }
                }
            };

            apply(&mut settle.lock(), intent);
        }))
    }

    /// Submit and wait for the lookup to finish, returning the final state.
    ///
    /// Returns `None` for an empty email.
    pub async fn check(&self, raw_email: &str) -> Option<WorkflowState> {
        let handle = self.submit(raw_email)?;
        if let Err(err) = handle.await {
            tracing::error!(error = %err, "Lookup task did not complete");
        }
        Some(self.snapshot())
    }
}

/// Run one intent through the reducer, logging intents from superseded
/// submissions.
fn apply(state: &mut WorkflowState, intent: WorkflowIntent) {
    let is_submission = matches!(intent, WorkflowIntent::Submitted { .. });
    if !is_submission && !state.is_current(intent.generation()) {
        tracing::debug!(
            stale = intent.generation(),
            current = state.generation,
            "Discarding result of superseded lookup"
        );
    }
    *state = WorkflowReducer::reduce(std::mem::take(state), intent);
}

/// Domain part of an address, for logs that must not carry the address itself.
fn email_domain(email: &str) -> &str {
    email.rsplit_once('@').map_or("<none>", |(_, domain)| domain)
}
