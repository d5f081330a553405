//! guide-client library
//!
//! HTTP access to the search/identity backend, the chat assistant built on
//! it, and the remote strategy for the auth form.

pub(crate) mod assistant;
pub(crate) mod client;
pub(crate) mod remote_backend;

#[cfg(test)]
mod tests;

pub use assistant::{AskOutcome, Assistant, ChatMessage, Conversation, MSG_EMPTY_QUERY, Sender};
pub use client::{
    CliClientResult, Client, ClientError, NETWORK_ERROR_MESSAGE, SearchResponse, SigninResponse,
    SignupResponse,
};
pub use remote_backend::RemoteAuthBackend;
