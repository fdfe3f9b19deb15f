use mockito::{Matcher, Mock, Server, ServerGuard};
use serde_json::{Value, json};
use url::Url;

pub struct MockServer {
    server: ServerGuard,
}

impl MockServer {
    pub async fn new() -> Self {
        Self { server: Server::new_async().await }
    }

    pub fn url(&self) -> Url {
        Url::parse(&self.server.url()).unwrap()
    }

    /// Expects exactly one completion request carrying `body` and answers it
    /// with a single choice whose content is `reply`.
    pub async fn completion(&mut self, body: Value, reply: &str) -> Mock {
        self.server
            .mock("POST", "/chat/completions")
            .match_body(Matcher::Json(body))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(completion_body(reply).to_string())
            .expect(1)
            .create_async()
            .await
    }

    pub fn raw(&mut self) -> &mut ServerGuard {
        &mut self.server
    }
}

pub fn completion_body(reply: &str) -> Value {
    json!({
        "id": "chatcmpl-test",
        "object": "chat.completion",
        "model": "gpt-4o-mini",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": reply},
            "finish_reason": "stop"
        }]
    })
}
