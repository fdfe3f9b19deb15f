mod api_key;
mod completion;
mod context;
mod credential;
mod error;
mod expert;
mod model;
mod reply;
mod temperature;

pub use api_key::*;
pub use completion::*;
pub use context::*;
pub use credential::*;
pub use error::*;
pub use expert::*;
pub use model::*;
pub use reply::*;
pub use temperature::*;
