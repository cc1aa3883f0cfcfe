// Copyright 2026 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[cfg(all(test, feature = "run-integration-tests"))]
mod publish {
    use pubsub_publish_task::envelope::Envelope;
    use pubsub_publish_task::publisher::PubsubConnector;
    use pubsub_publish_task::task::Task;

    // Requires GOOGLE_CLOUD_PROJECT, an existing topic in
    // PUBSUB_TASK_TEST_TOPIC, and a service account key file in
    // GOOGLE_APPLICATION_CREDENTIALS.
    fn request(topic: &str) -> anyhow::Result<String> {
        let request = serde_json::json!({
            "topic": topic,
            "attributes": {"integration-test": "true"},
            "message": "Hello, World!",
            "project": std::env::var("GOOGLE_CLOUD_PROJECT")?,
            "credential": std::env::var("GOOGLE_APPLICATION_CREDENTIALS")?,
        });
        Ok(request.to_string())
    }

    #[tokio::test]
    async fn publish_message() -> anyhow::Result<()> {
        let topic = std::env::var("PUBSUB_TASK_TEST_TOPIC")?;
        let input = request(&topic)?;
        let task = Task::new(PubsubConnector::new().with_tracing());

        let first = task.run(input.as_bytes()).await;
        let second = task.run(input.as_bytes()).await;
        match (&first, &second) {
            (Envelope::Success { id: a }, Envelope::Success { id: b }) => {
                assert_ne!(a, b, "each run publishes a new message");
            }
            _ => panic!("expected two successful publishes: {first:?} {second:?}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn publish_to_missing_topic() -> anyhow::Result<()> {
        let input = request("topic-that-does-not-exist")?;
        let task = Task::new(PubsubConnector::new());
        let envelope = task.run(input.as_bytes()).await;
        assert!(
            matches!(envelope, Envelope::Failure { .. }),
            "{envelope:?}"
        );
        assert_eq!(envelope.exit_code(), 1);
        Ok(())
    }
}
