//! Lookup results and their wire representation.

use crate::query::Query;
use serde::Serialize;
use serde_json::{Value, json};

/// The outcome of one item lookup.
#[derive(Clone, Debug)]
enum Outcome {
    /// Raw upstream search payload.
    Found(Value),
    /// Upstream error detail, or the low-level error message.
    Failed(Value),
}

/// A tagged outcome for one query.
///
/// Every query submitted in a batch produces exactly one result, and the
/// `barcode` tag always matches the originating query regardless of
/// completion order.
#[derive(Clone, Debug)]
pub struct LookupResult {
    barcode: Query,
    outcome: Outcome,
}

impl LookupResult {
    /// A successful lookup carrying the raw upstream payload.
    pub fn found(barcode: Query, payload: Value) -> Self {
        Self {
            barcode,
            outcome: Outcome::Found(payload),
        }
    }

    /// A failed lookup carrying the upstream error detail.
    pub fn failed(barcode: Query, error: Value) -> Self {
        Self {
            barcode,
            outcome: Outcome::Failed(error),
        }
    }

    /// The originating query.
    pub fn barcode(&self) -> &Query {
        &self.barcode
    }

    /// Whether the lookup succeeded upstream.
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, Outcome::Found(_))
    }

    /// Build the response body for this result.
    ///
    /// Success merges `{"barcode": q}` into the upstream payload object;
    /// non-object payloads are wrapped instead of merged. Failure yields
    /// `{"barcode": q, "error": detail}`.
    pub fn to_json(&self) -> Value {
        let barcode = self.barcode.as_str();
        match &self.outcome {
            Outcome::Found(Value::Object(payload)) => {
                let mut merged = payload.clone();
                merged.insert("barcode".to_string(), Value::String(barcode.to_string()));
                Value::Object(merged)
            }
            Outcome::Found(payload) => json!({ "payload": payload, "barcode": barcode }),
            Outcome::Failed(error) => json!({ "barcode": barcode, "error": error }),
        }
    }
}

impl Serialize for LookupResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.to_json().serialize(serializer)
    }
}
