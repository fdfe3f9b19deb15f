mod dto;
mod error;
#[cfg(test)]
mod mock_server;
mod provider;
mod utils;

pub use error::Error;
pub use provider::OpenAIProvider;
