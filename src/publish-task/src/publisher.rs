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

//! Publishes messages to a Pub/Sub topic.
//!
//! The task only depends on the [Connect] and [Publish] traits. The
//! [PubsubConnector] implements them with the Pub/Sub client library, tests
//! replace them with mocks.

use crate::args::Args;
use crate::{Error, Result};
use google_cloud_pubsub::client::Publisher;
use google_cloud_pubsub::model::Message;
use std::collections::HashMap;
use std::path::PathBuf;

/// The name of a Pub/Sub topic.
///
/// ```
/// # use pubsub_publish_task::publisher::TopicName;
/// let name = TopicName::new("my-project", "my-topic");
/// assert_eq!(name.to_string(), "projects/my-project/topics/my-topic");
///
/// // Full topic names are used as-is.
/// let name = TopicName::new("ignored", "projects/other-project/topics/my-topic");
/// assert_eq!(name.project(), "other-project");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TopicName {
    project: String,
    topic: String,
}

impl TopicName {
    pub fn new<P, T>(project: P, topic: T) -> Self
    where
        P: Into<String>,
        T: Into<String>,
    {
        let topic = topic.into();
        if let Some((project, topic)) = split_full_name(&topic) {
            return Self {
                project: project.to_string(),
                topic: topic.to_string(),
            };
        }
        Self {
            project: project.into(),
            topic,
        }
    }

    pub fn project(&self) -> &str {
        &self.project
    }

    pub fn topic(&self) -> &str {
        &self.topic
    }
}

impl std::fmt::Display for TopicName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "projects/{}/topics/{}", self.project, self.topic)
    }
}

fn split_full_name(name: &str) -> Option<(&str, &str)> {
    let (project, topic) = name.strip_prefix("projects/")?.split_once("/topics/")?;
    let valid = |s: &str| !s.is_empty() && !s.contains('/');
    (valid(project) && valid(topic)).then_some((project, topic))
}

/// Publishes messages to a single topic.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Publish: Send + Sync {
    /// Publishes one message and returns its server-assigned id.
    async fn publish(
        &self,
        message: String,
        attributes: HashMap<String, String>,
    ) -> Result<String>;
}

/// Creates a [Publish] implementation bound to a topic.
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait Connect: Send + Sync {
    /// Authenticates with the key file in `credential` and binds a publisher
    /// to `topic`.
    async fn connect(&self, topic: TopicName, credential: PathBuf) -> Result<Box<dyn Publish>>;
}

/// Connects to Pub/Sub using service account credentials.
///
/// ```no_run
/// # use pubsub_publish_task::publisher::{Connect, PubsubConnector, TopicName};
/// # async fn sample() -> pubsub_publish_task::Result<()> {
/// let connector = PubsubConnector::new().with_tracing();
/// let publisher = connector
///     .connect(TopicName::new("my-project", "my-topic"), "/path/to/cred.json".into())
///     .await?;
/// let id = publisher.publish("Hello, World!".to_string(), Default::default()).await?;
/// println!("published message with ID: {id}");
/// # Ok(()) }
/// ```
#[derive(Clone, Debug, Default)]
pub struct PubsubConnector {
    endpoint: Option<String>,
    tracing: bool,
}

impl PubsubConnector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the Pub/Sub endpoint.
    pub fn with_endpoint<V: Into<String>>(mut self, v: V) -> Self {
        self.endpoint = Some(v.into());
        self
    }

    /// Enables the client library tracing instrumentation.
    pub fn with_tracing(mut self) -> Self {
        self.tracing = true;
        self
    }
}

impl From<&Args> for PubsubConnector {
    fn from(args: &Args) -> Self {
        let connector = Self::new();
        let connector = match &args.endpoint {
            Some(endpoint) => connector.with_endpoint(endpoint),
            None => connector,
        };
        if args.with_tracing {
            connector.with_tracing()
        } else {
            connector
        }
    }
}

#[async_trait::async_trait]
impl Connect for PubsubConnector {
    async fn connect(&self, topic: TopicName, credential: PathBuf) -> Result<Box<dyn Publish>> {
        let credentials = crate::credentials::load(&credential).await?;
        // There is only one message, send it as soon as it is published.
        let mut builder = Publisher::builder(topic.to_string())
            .with_credentials(credentials)
            .set_message_count_threshold(1);
        if let Some(endpoint) = &self.endpoint {
            builder = builder.with_endpoint(endpoint);
        }
        if self.tracing {
            builder = builder.with_tracing();
        }
        let publisher = builder.build().await.map_err(Error::connect)?;
        tracing::debug!("created publisher for {topic}");
        Ok(Box::new(PubsubPublisher { inner: publisher }))
    }
}

/// A [Publish] implementation using the Pub/Sub client library.
#[derive(Debug)]
pub struct PubsubPublisher {
    inner: Publisher,
}

#[async_trait::async_trait]
impl Publish for PubsubPublisher {
    async fn publish(
        &self,
        message: String,
        attributes: HashMap<String, String>,
    ) -> Result<String> {
        let message = Message::new()
            .set_data(message)
            .set_attributes(attributes);
        self.inner
            .publish(message)
            .await
            .map_err(|e| Error::Publish(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use test_case::test_case;

    #[test]
    fn topic_name() {
        let name = TopicName::new("p", "t");
        assert_eq!(name.project(), "p");
        assert_eq!(name.topic(), "t");
        assert_eq!(name.to_string(), "projects/p/topics/t");
    }

    #[test]
    fn full_topic_name() {
        let name = TopicName::new("p", "projects/other/topics/t");
        assert_eq!(name.project(), "other");
        assert_eq!(name.topic(), "t");
        assert_eq!(name, TopicName::new("other", "t"));
    }

    #[test_case("projects//topics/t")]
    #[test_case("projects/p/topics/")]
    #[test_case("projects/p/topics/a/b")]
    #[test_case("projects/p/subscriptions/s")]
    #[test_case("p/topics/t")]
    fn not_a_full_topic_name(topic: &str) {
        let name = TopicName::new("p", topic);
        assert_eq!(name.project(), "p");
        assert_eq!(name.topic(), topic);
    }

    #[test]
    fn connector_from_args() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["publish"])?;
        let connector = PubsubConnector::from(&args);
        assert_eq!(connector.endpoint, None);
        assert!(!connector.tracing, "{connector:?}");

        let args = Args::try_parse_from([
            "publish",
            "--endpoint=https://private.googleapis.com",
            "--with-tracing",
        ])?;
        let connector = PubsubConnector::from(&args);
        assert_eq!(
            connector.endpoint.as_deref(),
            Some("https://private.googleapis.com")
        );
        assert!(connector.tracing, "{connector:?}");
        Ok(())
    }

    #[tokio::test]
    async fn connect_without_credentials() -> anyhow::Result<()> {
        let dir = tempfile::tempdir()?;
        let credential = dir.path().join("missing.json");
        let got = PubsubConnector::new()
            .connect(TopicName::new("p", "t"), credential)
            .await;
        assert!(matches!(got, Err(Error::Credentials { .. })), "{:?}", got.err());
        Ok(())
    }
}
