use derive_setters::Setters;
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumString};

use crate::{ExpertRole, Temperature};

/// Author of a message in the exchange sent to the model.
#[derive(Clone, Copy, Debug, Deserialize, Serialize, PartialEq, Eq, Display, EnumString)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Role {
    System,
    User,
}

/// Represents a message being sent to the LLM provider
#[derive(Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct ContextMessage {
    pub role: Role,
    pub content: String,
}

impl ContextMessage {
    pub fn system(content: impl ToString) -> Self {
        Self { role: Role::System, content: content.to_string() }
    }

    pub fn user(content: impl ToString) -> Self {
        Self { role: Role::User, content: content.to_string() }
    }

    pub fn has_role(&self, role: Role) -> bool {
        self.role == role
    }
}

/// One consultation turn: the role instruction followed by the user's text.
/// Built fresh for every submission and never carried over to the next one.
#[derive(Clone, Debug, Deserialize, Serialize, Setters, Default, PartialEq)]
#[setters(into, strip_option)]
pub struct Context {
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub messages: Vec<ContextMessage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<Temperature>,
}

impl Context {
    /// Builds the two-message exchange `[system, user]` for `role`.
    pub fn turn(role: ExpertRole, text: impl ToString) -> Self {
        Self::default()
            .add_message(ContextMessage::system(role.instruction()))
            .add_message(ContextMessage::user(text))
    }

    pub fn add_message(mut self, message: ContextMessage) -> Self {
        self.messages.push(message);
        self
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}
