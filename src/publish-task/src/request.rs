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

//! Reads and validates the publish request.

use crate::{Error, Result};
use std::collections::HashMap;
use std::path::PathBuf;
use std::time::Duration;
use tokio::io::{AsyncRead, AsyncReadExt};

/// How long [read_request] waits for stdin unless configured otherwise.
pub const DEFAULT_STDIN_TIMEOUT: Duration = Duration::from_secs(3);

/// A validated request to publish a single message.
///
/// ```
/// # use pubsub_publish_task::request::Request;
/// let request = Request::from_slice(br#"{
///     "topic": "my-topic",
///     "message": "Hello, World!",
///     "project": "my-project",
///     "credential": "/path/to/cred.json"
/// }"#)?;
/// assert_eq!(request.topic, "my-topic");
/// assert!(request.attributes.is_empty());
/// # Ok::<(), pubsub_publish_task::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Request {
    /// The topic id, or the full topic name.
    pub topic: String,
    /// The message attributes, empty if the request has none.
    pub attributes: HashMap<String, String>,
    /// The message payload.
    pub message: String,
    /// The project hosting the topic.
    pub project: String,
    /// The path of a service account key file.
    pub credential: PathBuf,
}

// Presence is checked after decoding, so a missing key is reported by name.
#[derive(serde::Deserialize)]
struct RawRequest {
    topic: Option<String>,
    attributes: Option<HashMap<String, String>>,
    message: Option<String>,
    project: Option<String>,
    credential: Option<PathBuf>,
}

impl Request {
    /// Decodes and validates a request from raw JSON bytes.
    pub fn from_slice(bytes: &[u8]) -> Result<Self> {
        let value =
            serde_json::from_slice::<serde_json::Value>(bytes).map_err(Error::StdinParse)?;
        Self::from_value(value)
    }

    /// Validates a request from an already parsed JSON value.
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let raw =
            serde_json::from_value::<RawRequest>(value).map_err(Error::InvalidParameters)?;
        Ok(Self {
            topic: required("topic", raw.topic)?,
            message: required("message", raw.message)?,
            project: required("project", raw.project)?,
            credential: required("credential", raw.credential)?,
            attributes: raw.attributes.unwrap_or_default(),
        })
    }
}

fn required<T>(name: &'static str, value: Option<T>) -> Result<T> {
    value.ok_or(Error::MissingParameter(name))
}

/// Reads the whole of `reader` and decodes it as a [Request].
///
/// Fails with [Error::StdinTimeout] if `reader` does not reach EOF within
/// `timeout`.
pub async fn read_request<R>(mut reader: R, timeout: Duration) -> Result<Request>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::new();
    tokio::time::timeout(timeout, reader.read_to_end(&mut buffer))
        .await
        .map_err(|_| Error::StdinTimeout(timeout))?
        .map_err(Error::StdinRead)?;
    tracing::debug!("read {} bytes from stdin", buffer.len());
    Request::from_slice(&buffer)
}
