//! Request dispatcher and its lifecycle state.

use crate::dispatch::outcome::{Outcome, UnchangedReason};
use crate::dispatch::request::{Operation, Request};
use crate::repo::SpellRepository;
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    AwaitingRequest,
    // Held only for the duration of `dispatch`; mirrors the documented cycle.
    Dispatching,
    Stopped,
}

/// Routes decoded requests to create/edit and tracks whether the service
/// should keep accepting requests.
#[derive(Debug)]
pub struct Dispatcher {
    state: ServiceState,
    schema: &'static [&'static str],
}

impl Dispatcher {
    pub fn new(schema: &'static [&'static str]) -> Self {
        Self {
            state: ServiceState::AwaitingRequest,
            schema,
        }
    }

    #[cfg(test)]
    pub fn state(&self) -> ServiceState {
        self.state
    }

    pub fn is_stopped(&self) -> bool {
        self.state == ServiceState::Stopped
    }

    /// Handle one request. After a stop request every later call is answered
    /// with [`Outcome::Stopped`] without touching the payload.
    pub fn dispatch(&mut self, request: Request) -> Outcome {
        if self.is_stopped() {
            debug!("request after stop ignored");
            return Outcome::Stopped;
        }
        self.state = ServiceState::Dispatching;

        let operation = request.operation();
        let target = request.target_index().map(str::to_string);
        let Request {
            records, fields, ..
        } = request;
        let mut repo = SpellRepository::new(records.unwrap_or_default(), self.schema);
        debug!(?operation, records = repo.records().len(), "dispatching");

        let outcome = match operation {
            Operation::Stop => {
                self.state = ServiceState::Stopped;
                info!("stop requested");
                return Outcome::Stopped;
            }
            Operation::Create => {
                let position = repo.create(&fields);
                Outcome::Created {
                    records: repo.into_records(),
                    position,
                }
            }
            Operation::Edit => match target.as_deref().and_then(|t| repo.edit(t, &fields)) {
                Some(position) => Outcome::Edited {
                    records: repo.into_records(),
                    position,
                },
                None => Outcome::Unchanged {
                    records: repo.into_records(),
                    reason: UnchangedReason::TargetNotFound,
                },
            },
            Operation::Unknown(code) => Outcome::Unchanged {
                records: repo.into_records(),
                reason: UnchangedReason::UnknownOperation(code),
            },
        };

        self.state = ServiceState::AwaitingRequest;
        outcome
    }
}
