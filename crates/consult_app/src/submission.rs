use consult_domain::{ExpertRole, Reply};
use serde::{Deserialize, Serialize};

/// Warning shown instead of calling the model when the text is blank.
pub const EMPTY_INPUT_WARNING: &str = "相談内容を入力してください。";

/// What the user sent from the form: a role and free text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    #[serde(default)]
    pub role: ExpertRole,
    #[serde(default)]
    pub text: String,
}

impl Submission {
    pub fn new(role: ExpertRole, text: impl Into<String>) -> Self {
        Self { role, text: text.into() }
    }

    /// Whitespace-only text counts as empty.
    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Result of handling one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// The text was blank; nothing was sent.
    EmptyInput,
    /// The model's reply, unmodified.
    Answered(Reply),
}

impl Outcome {
    pub fn warning(&self) -> Option<&'static str> {
        match self {
            Outcome::EmptyInput => Some(EMPTY_INPUT_WARNING),
            Outcome::Answered(_) => None,
        }
    }

    pub fn reply(&self) -> Option<&Reply> {
        match self {
            Outcome::EmptyInput => None,
            Outcome::Answered(reply) => Some(reply),
        }
    }
}
