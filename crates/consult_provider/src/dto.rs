//! Wire types for the OpenAI chat-completions endpoint. Only the fields this
//! client sends or reads are modelled.

use consult_domain::{Context, ContextMessage, ModelId, Role};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Request {
    pub model: ModelId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    pub messages: Vec<Message>,
}

impl Request {
    pub fn new(model: &ModelId, context: Context) -> Self {
        Self {
            model: model.clone(),
            temperature: context.temperature.map(|t| t.value()),
            messages: context.messages.into_iter().map(Message::from).collect(),
        }
    }

    pub fn message_count(&self) -> usize {
        self.messages.len()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl From<ContextMessage> for Message {
    fn from(message: ContextMessage) -> Self {
        Self { role: message.role, content: message.content }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub choices: Vec<Choice>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Choice {
    pub message: ResponseMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ResponseMessage {
    #[serde(default)]
    pub content: Option<String>,
}
