//! Quiz generation backend client.

mod backend;

pub use backend::{BackendClient, GenerateError};

#[cfg(test)]
pub(crate) use backend::test_server;
