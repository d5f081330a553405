pub(crate) mod client;
pub(crate) mod error;
pub(crate) mod wire;

pub use client::Client;
pub use error::{ClientError, NETWORK_ERROR_MESSAGE, Result as CliClientResult};
pub use wire::{SearchResponse, SigninResponse, SignupResponse};
