use derive_more::{Display, From};
use serde::{Deserialize, Serialize};

/// The model's answer, kept exactly as the provider returned it.
#[derive(Clone, Debug, Default, Display, From, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Reply(String);

impl Reply {
    pub fn new(content: impl Into<String>) -> Self {
        Self(content.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }
}
