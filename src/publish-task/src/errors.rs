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

//! Errors returned by the publish task.

use std::path::{Path, PathBuf};
use std::time::Duration;

type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// The error type for the publish task.
///
/// The `Display` text of each variant is what the task reports in the
/// `error` field of a failure envelope. The underlying cause, when there is
/// one, is available through [std::error::Error::source].
#[derive(thiserror::Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The request did not arrive on stdin before the deadline.
    #[error("Cannot read JSON from stdin")]
    StdinTimeout(Duration),

    /// Reading stdin failed.
    #[error("Cannot read JSON from stdin")]
    StdinRead(#[source] std::io::Error),

    /// The contents of stdin are not valid JSON.
    #[error("Cannot read JSON from stdin")]
    StdinParse(#[source] serde_json::Error),

    /// The request is valid JSON, but not an object with the expected types.
    #[error("Invalid parameters from stdin: {0}")]
    InvalidParameters(#[source] serde_json::Error),

    /// A required parameter is absent (or `null`) in the request.
    #[error("Missing parameter '{0}' from stdin")]
    MissingParameter(&'static str),

    /// The service account credentials could not be loaded.
    #[error("Cannot load service account credentials from {}: {source}", .path.display())]
    Credentials {
        path: PathBuf,
        #[source]
        source: BoxError,
    },

    /// The Pub/Sub client could not be created.
    #[error("Cannot create Pub/Sub publisher: {0}")]
    Connect(#[source] BoxError),

    /// The service rejected the message, or the publish RPC failed.
    #[error("{0}")]
    Publish(String),
}

impl Error {
    /// The request on stdin could not be read or is invalid.
    pub fn is_input(&self) -> bool {
        matches!(
            self,
            Error::StdinTimeout(_)
                | Error::StdinRead(_)
                | Error::StdinParse(_)
                | Error::InvalidParameters(_)
                | Error::MissingParameter(_)
        )
    }

    pub(crate) fn credentials<T>(path: &Path, source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error::Credentials {
            path: path.to_path_buf(),
            source: source.into(),
        }
    }

    pub(crate) fn connect<T>(source: T) -> Error
    where
        T: Into<BoxError>,
    {
        Error::Connect(source.into())
    }
}
