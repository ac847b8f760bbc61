use crate::dispatch::{Outcome, Request};
use crate::error::ServiceError;
use serde_json::{Map, Value};

/// Decode a UTF-8 JSON request frame.
pub fn decode_request(frame: &[u8]) -> Result<Request, ServiceError> {
    let value: Value = serde_json::from_slice(frame).map_err(ServiceError::MalformedRequest)?;
    let map: Map<String, Value> = match value {
        Value::Object(map) => map,
        _ => return Err(ServiceError::RequestNotAnObject),
    };
    Ok(Request::from_map(map))
}

/// Encode the reply payload: the collection as a JSON array, or nothing for stop.
pub fn encode_reply(outcome: &Outcome) -> Result<Vec<u8>, ServiceError> {
    match outcome.records() {
        None => Ok(Vec::new()),
        Some(records) => serde_json::to_vec(records).map_err(ServiceError::Encode),
    }
}

/// Reply used when a request could not be decoded: an empty collection.
pub fn empty_collection() -> Vec<u8> {
    b"[]".to_vec()
}
