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

use std::io::Write;

/// The result of the publish task, as printed on stdout.
///
/// ```
/// # use pubsub_publish_task::envelope::Envelope;
/// let envelope = Envelope::success("42");
/// assert_eq!(envelope.to_json()?, r#"{"status":"success","id":"42"}"#);
/// assert_eq!(envelope.exit_code(), 0);
/// # Ok::<(), serde_json::Error>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Envelope {
    /// The message was published, `id` is the server-assigned message id.
    Success { id: String },
    /// The message was not published.
    Failure { error: String },
}

impl Envelope {
    pub fn success<V: Into<String>>(id: V) -> Self {
        Self::Success { id: id.into() }
    }

    pub fn failure<V: Into<String>>(error: V) -> Self {
        Self::Failure {
            error: error.into(),
        }
    }

    /// The process exit code for this result.
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::Success { .. } => 0,
            Self::Failure { .. } => 1,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }

    /// Writes the envelope as a single line of JSON.
    pub fn write_to<W: Write>(&self, mut writer: W) -> std::io::Result<()> {
        serde_json::to_writer(&mut writer, self)?;
        writeln!(writer)
    }
}

impl From<crate::Result<String>> for Envelope {
    fn from(value: crate::Result<String>) -> Self {
        match value {
            Ok(id) => Self::success(id),
            Err(e) => Self::failure(e.to_string()),
        }
    }
}
