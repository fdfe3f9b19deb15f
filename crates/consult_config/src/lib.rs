mod app_config;
mod credentials;
mod error;

pub use app_config::*;
pub use credentials::*;
pub use error::*;
