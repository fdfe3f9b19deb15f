use anyhow::Result;
use colored::Colorize;
use consult_app::{ConsultService, Outcome, Submission};
use consult_domain::{CompletionClient, ExpertRole};
use consult_spinner::Spinner;

/// Runs one consultation from the terminal. The answer goes to stdout, the
/// blank-input warning to stderr.
pub async fn ask<C: CompletionClient>(
    service: &ConsultService<C>,
    role: ExpertRole,
    text: String,
) -> Result<()> {
    let submission = Submission::new(role, text);
    let mut spinner = Spinner::default();
    if !submission.is_blank() {
        spinner.start(None)?;
    }

    let outcome = service.submit(submission).await;
    spinner.stop(None)?;

    match outcome? {
        Outcome::EmptyInput => {
            eprintln!("{}", consult_app::EMPTY_INPUT_WARNING.yellow().bold());
        }
        Outcome::Answered(reply) => println!("{reply}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use consult_domain::{Context, ModelId, Reply, Temperature};
    use pretty_assertions::assert_eq;

    use super::*;

    #[derive(Default)]
    struct RecordingClient {
        calls: Mutex<Vec<Context>>,
    }

    impl RecordingClient {
        fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait::async_trait]
    impl CompletionClient for RecordingClient {
        async fn complete(&self, _: &ModelId, context: Context) -> anyhow::Result<Reply> {
            self.calls.lock().unwrap().push(context);
            Ok(Reply::new("X"))
        }
    }

    struct FailingClient;

    #[async_trait::async_trait]
    impl CompletionClient for FailingClient {
        async fn complete(&self, _: &ModelId, _: Context) -> anyhow::Result<Reply> {
            anyhow::bail!("401 Unauthorized")
        }
    }

    fn service<C: CompletionClient>(client: Arc<C>) -> ConsultService<C> {
        ConsultService::new(client, ModelId::new("gpt-4o-mini"), Temperature::new(0.3).unwrap())
    }

    #[tokio::test]
    async fn test_blank_text_warns_without_calling() {
        let client = Arc::new(RecordingClient::default());

        let actual = ask(&service(client.clone()), ExpertRole::Sales, "   ".to_string()).await;

        assert!(actual.is_ok());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_question_calls_client_once() {
        let client = Arc::new(RecordingClient::default());

        let actual = ask(
            &service(client.clone()),
            ExpertRole::Marketing,
            "SNS運用のコツは？".to_string(),
        )
        .await;

        assert!(actual.is_ok());
        assert_eq!(client.call_count(), 1);
        let calls = client.calls.lock().unwrap();
        assert_eq!(calls[0].messages[0].content, ExpertRole::Marketing.instruction());
        assert_eq!(calls[0].messages[1].content, "SNS運用のコツは？");
    }

    #[tokio::test]
    async fn test_client_failure_propagates() {
        let actual = ask(&service(Arc::new(FailingClient)), ExpertRole::Sales, "hello".to_string())
            .await
            .unwrap_err();

        assert_eq!(actual.to_string(), "401 Unauthorized");
    }
}
