pub mod client;
pub mod error;
pub mod http_client;
#[cfg(test)]
pub mod testing;

pub use client::{fetch, Backend, Endpoint};
pub use error::{BackendError, BackendResult};
