//! Dispatch layer: request decoding into operations, the service state machine,
//! and the explicit outcome of each request.

pub mod outcome;
pub mod request;
pub mod service;

pub use outcome::Outcome;
pub use request::Request;
pub use service::Dispatcher;
