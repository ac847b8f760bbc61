//! Request/reply transport: frame codec, newline framing, and the serve loop.
//!
//! One request is decoded, dispatched, encoded and answered before the next
//! frame is read. Connections are served one at a time.

pub mod codec;
pub mod line;

pub use codec::{decode_request, empty_collection, encode_reply};
pub use line::LineTransport;

use crate::dispatch::Dispatcher;
use crate::error::ServiceError;
use std::io::BufReader;
use std::net::{TcpListener, ToSocketAddrs};
use tracing::{debug, info, warn};

/// A strict request/reply channel carrying raw frames.
pub trait Transport {
    /// Next request frame, or `None` once the peer has closed the channel.
    fn recv(&mut self) -> Result<Option<Vec<u8>>, ServiceError>;

    fn send(&mut self, payload: &[u8]) -> Result<(), ServiceError>;
}

/// How a serve session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEnd {
    Stopped,
    Disconnected,
}

/// Answer requests from `transport` until a stop request or end of stream.
pub fn serve<T: Transport>(
    dispatcher: &mut Dispatcher,
    transport: &mut T,
) -> Result<SessionEnd, ServiceError> {
    while !dispatcher.is_stopped() {
        let Some(frame) = transport.recv()? else {
            return Ok(SessionEnd::Disconnected);
        };
        debug!(bytes = frame.len(), "received request");

        let reply = match decode_request(&frame) {
            Ok(request) => {
                let outcome = dispatcher.dispatch(request);
                outcome.trace();
                encode_reply(&outcome)?
            }
            Err(err) => {
                warn!(error = %err, "undecodable request, replying with empty collection");
                empty_collection()
            }
        };
        transport.send(&reply)?;
    }
    Ok(SessionEnd::Stopped)
}

/// Bind `addr` and serve connections sequentially until a stop request.
pub fn serve_tcp<A: ToSocketAddrs>(
    addr: A,
    dispatcher: &mut Dispatcher,
) -> Result<(), ServiceError> {
    let listener = TcpListener::bind(addr)?;
    let local = listener.local_addr()?;
    info!(addr = %local, "spell modifications service listening");

    for stream in listener.incoming() {
        let stream = match stream {
            Ok(s) => s,
            Err(err) => {
                warn!(error = %err, "accept failed");
                continue;
            }
        };
        let peer = stream
            .peer_addr()
            .map(|a| a.to_string())
            .unwrap_or_else(|_| "unknown".to_string());
        debug!(%peer, "client connected");

        let reader = BufReader::new(stream.try_clone()?);
        let mut transport = LineTransport::new(reader, stream);
        match serve(dispatcher, &mut transport) {
            Ok(SessionEnd::Stopped) => break,
            Ok(SessionEnd::Disconnected) => debug!(%peer, "client disconnected"),
            Err(err) => warn!(%peer, error = %err, "connection dropped"),
        }
    }

    info!("spell modifications service has ended");
    Ok(())
}
