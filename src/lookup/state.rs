//! Workflow state of the lookup controller.
//!
//! All transitions go through [`WorkflowReducer`]. Every intent after
//! `Submitted` carries the generation of the submission that produced it;
//! the reducer ignores intents from superseded submissions so that the
//! latest submission wins, whatever order responses arrive in.

use crate::breach::{BreachResponse, LookupOutcome};
use crate::config::ApiErrorPolicy;
use crate::mvi::{Intent, Reducer, UiState};

/// Everything the report renderer reads.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkflowState {
    /// Trimmed email of the latest submission.
    pub email_input: String,
    pub is_loading: bool,
    pub has_completed_one_query: bool,
    pub last_outcome: Option<LookupOutcome>,
    /// User-facing message of the latest failed lookup.
    pub transport_error: Option<String>,
    /// Generation of the latest submission, 0 before the first one.
    pub generation: u64,
}

impl UiState for WorkflowState {}

impl WorkflowState {
    /// True if an intent stamped with `generation` still applies.
    pub fn is_current(&self, generation: u64) -> bool {
        generation == self.generation
    }
}

/// Transitions of the lookup workflow.
#[derive(Debug, Clone)]
pub enum WorkflowIntent {
    /// A non-empty email was submitted and its request is about to be sent.
    Submitted { generation: u64, email: String },

    /// The service answered and the response was classified.
    Resolved {
        generation: u64,
        outcome: LookupOutcome,
    },

    /// The request failed or the response could not be parsed.
    Failed { generation: u64, message: String },

    /// The lookup task finished, whichever branch it took.
    Settled { generation: u64 },
}

impl Intent for WorkflowIntent {}

impl WorkflowIntent {
    pub fn generation(&self) -> u64 {
        match self {
            WorkflowIntent::Submitted { generation, .. }
            | WorkflowIntent::Resolved { generation, .. }
            | WorkflowIntent::Failed { generation, .. }
            | WorkflowIntent::Settled { generation } => *generation,
        }
    }
}

/// Reducer for workflow state transitions.
pub struct WorkflowReducer;

impl Reducer for WorkflowReducer {
    type State = WorkflowState;
    type Intent = WorkflowIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            WorkflowIntent::Submitted { generation, email } => {
                if generation <= state.generation {
                    return state;
                }
                WorkflowState {
                    email_input: email,
                    is_loading: true,
                    has_completed_one_query: false,
                    transport_error: None,
                    generation,
                    ..state
                }
            }

            WorkflowIntent::Resolved {
                generation,
                outcome,
            } if state.is_current(generation) => WorkflowState {
                last_outcome: Some(outcome),
                has_completed_one_query: true,
                ..state
            },

            WorkflowIntent::Failed {
                generation,
                message,
            } if state.is_current(generation) => WorkflowState {
                transport_error: Some(message),
                ..state
            },

            WorkflowIntent::Settled { generation } if state.is_current(generation) => {
                WorkflowState {
                    is_loading: false,
                    ..state
                }
            }

            // Stale generation
            _ => state,
        }
    }
}

/// Classify a well-formed response into an outcome.
pub fn classify_response(response: BreachResponse, policy: ApiErrorPolicy) -> LookupOutcome {
    if let Some(message) = response.error_message() {
        tracing::warn!(error = %message, policy = ?policy, "Lookup service reported an error");
        return match policy {
            ApiErrorPolicy::NoBreach => LookupOutcome::NoBreach,
            ApiErrorPolicy::Distinct => LookupOutcome::ApiError(message),
        };
    }

    LookupOutcome::from_breaches(response.into_breaches())
}
