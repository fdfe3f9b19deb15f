use reqwest::StatusCode;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Upstream responded with {status}: {body}")]
    InvalidStatusCode { status: StatusCode, body: String },

    #[error("Upstream response contained no choices")]
    EmptyChoices,
}
