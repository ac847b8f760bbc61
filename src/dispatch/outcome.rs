use serde_json::Value;
use tracing::info;

/// Why a request left the collection as it arrived.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnchangedReason {
    /// `option` coerced to something other than 0, 1 or 2 (including -1).
    UnknownOperation(i64),
    /// Edit target identifier missing or not present in the collection.
    TargetNotFound,
}

/// Result of dispatching one request.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Stopped,
    Created {
        records: Vec<Value>,
        position: usize,
    },
    Edited {
        records: Vec<Value>,
        position: usize,
    },
    Unchanged {
        records: Vec<Value>,
        reason: UnchangedReason,
    },
}

impl Outcome {
    /// The collection to reply with; `None` for the stop signal.
    pub fn records(&self) -> Option<&[Value]> {
        match self {
            Outcome::Stopped => None,
            Outcome::Created { records, .. }
            | Outcome::Edited { records, .. }
            | Outcome::Unchanged { records, .. } => Some(records),
        }
    }

    /// Emit one log event describing which branch fired.
    pub fn trace(&self) {
        match self {
            Outcome::Stopped => info!(outcome = self.label(), "service stopping"),
            Outcome::Created { records, position } | Outcome::Edited { records, position } => {
                let index = records
                    .get(*position)
                    .and_then(|r| r.get("index"))
                    .and_then(Value::as_str);
                info!(outcome = self.label(), position, index, "request handled");
            }
            Outcome::Unchanged { records, reason } => {
                info!(outcome = self.label(), ?reason, records = records.len(), "request handled")
            }
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Outcome::Stopped => "stopped",
            Outcome::Created { .. } => "created",
            Outcome::Edited { .. } => "edited",
            Outcome::Unchanged { .. } => "unchanged",
        }
    }
}
