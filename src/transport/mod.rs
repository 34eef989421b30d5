//! Transport module
//!
//! - `RpcTransport`: the `send(request) -> result` seam the facade talks to
//! - `JsonRpcTransport` / `Endpoint`: `jsonrpsee` HTTP and WebSocket clients
//! - `MockTransport`: recording stub (tests, `test-utils` feature)

pub mod traits;
pub mod jsonrpc;

#[cfg(any(test, feature = "test-utils"))]
pub mod mock;

pub use traits::{RpcRequest, RpcTransport};
pub use jsonrpc::{Endpoint, JsonRpcTransport};

#[cfg(any(test, feature = "test-utils"))]
pub use mock::MockTransport;
