use std::sync::Arc;

use consult_domain::{CompletionClient, Context, ModelId, Temperature};
use tracing::{debug, info};

use crate::{Outcome, Submission};

/// Turns a form submission into at most one model call.
pub struct ConsultService<C> {
    client: Arc<C>,
    model: ModelId,
    temperature: Temperature,
}

impl<C> Clone for ConsultService<C> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            model: self.model.clone(),
            temperature: self.temperature,
        }
    }
}

impl<C: CompletionClient> ConsultService<C> {
    pub fn new(client: Arc<C>, model: ModelId, temperature: Temperature) -> Self {
        Self { client, model, temperature }
    }

    pub fn model(&self) -> &ModelId {
        &self.model
    }

    /// Blank text short-circuits to [`Outcome::EmptyInput`] without touching
    /// the client. Otherwise the role instruction and the text, as entered,
    /// are sent once and the reply comes back unchanged. Client failures are
    /// returned as-is.
    pub async fn submit(&self, submission: Submission) -> anyhow::Result<Outcome> {
        if submission.is_blank() {
            debug!(role = %submission.role, "Blank submission, skipping completion");
            return Ok(Outcome::EmptyInput);
        }

        info!(role = %submission.role, model = %self.model, "Consulting expert");
        let context = Context::turn(submission.role, submission.text).temperature(self.temperature);
        let reply = self.client.complete(&self.model, context).await?;

        Ok(Outcome::Answered(reply))
    }
}
