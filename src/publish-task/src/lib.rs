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

//! Publish a single message to [Pub/Sub] from a JSON request.
//!
//! The `publish` binary reads a request from stdin:
//!
//! ```json
//! {
//!   "topic": "my-topic",
//!   "attributes": { "env": "prod" },
//!   "message": "Hello, World!",
//!   "project": "my-project",
//!   "credential": "/path/to/service-account.json"
//! }
//! ```
//!
//! It authenticates with the service account key in `credential`, publishes
//! `message` to `projects/{project}/topics/{topic}`, and prints exactly one
//! line to stdout: `{"status":"success","id":"..."}` with exit code 0, or
//! `{"status":"failure","error":"..."}` with exit code 1.
//!
//! [Pub/Sub]: https://cloud.google.com/pubsub

pub mod args;
pub mod credentials;
pub mod envelope;
mod errors;
pub mod publisher;
pub mod request;
pub mod task;

pub use errors::Error;

/// The result type for the publish task.
pub type Result<T> = std::result::Result<T, Error>;
