use crate::ApiKey;

/// Single accessor for the provider credential.
///
/// Looked up on every call so that a key added after startup is picked up by
/// the next submission. `None` is a valid answer: the request then goes out
/// unauthenticated and the upstream rejects it.
pub trait CredentialProvider: Send + Sync {
    fn api_key(&self) -> Option<ApiKey>;
}

impl CredentialProvider for Option<ApiKey> {
    fn api_key(&self) -> Option<ApiKey> {
        self.clone()
    }
}
