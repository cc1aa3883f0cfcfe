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

//! Runs the publish task from a request to an [Envelope].

use crate::Result;
use crate::envelope::Envelope;
use crate::publisher::{Connect, TopicName};
use crate::request::{DEFAULT_STDIN_TIMEOUT, read_request};
use std::time::Duration;
use tokio::io::AsyncRead;

/// Reads one request, publishes one message, and reports the outcome.
///
/// ```no_run
/// # use pubsub_publish_task::publisher::PubsubConnector;
/// # use pubsub_publish_task::task::Task;
/// # async fn sample() -> std::io::Result<()> {
/// let task = Task::new(PubsubConnector::new());
/// let envelope = task.run(tokio::io::stdin()).await;
/// envelope.write_to(std::io::stdout())?;
/// # Ok(()) }
/// ```
#[derive(Clone, Debug)]
pub struct Task<C> {
    connector: C,
    stdin_timeout: Duration,
}

impl<C> Task<C>
where
    C: Connect,
{
    pub fn new(connector: C) -> Self {
        Self {
            connector,
            stdin_timeout: DEFAULT_STDIN_TIMEOUT,
        }
    }

    /// Sets how long to wait for the request.
    pub fn with_stdin_timeout(mut self, v: Duration) -> Self {
        self.stdin_timeout = v;
        self
    }

    /// Runs the task, reading the request from `input`.
    ///
    /// Every error is reported as a failure [Envelope].
    pub async fn run<R>(&self, input: R) -> Envelope
    where
        R: AsyncRead + Unpin,
    {
        let result = self.publish(input).await;
        match &result {
            Ok(id) => tracing::debug!("published message {id}"),
            Err(e) if e.is_input() => tracing::warn!("invalid request: {e:?}"),
            Err(e) => tracing::warn!("publish failed: {e:?}"),
        }
        Envelope::from(result)
    }

    async fn publish<R>(&self, input: R) -> Result<String>
    where
        R: AsyncRead + Unpin,
    {
        let request = read_request(input, self.stdin_timeout).await?;
        let topic = TopicName::new(request.project, request.topic);
        let publisher = self.connector.connect(topic, request.credential).await?;
        publisher.publish(request.message, request.attributes).await
    }
}
