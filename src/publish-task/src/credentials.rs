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

//! Service account credentials for Pub/Sub.

use crate::{Error, Result};
use google_cloud_auth::credentials::Credentials;
use google_cloud_auth::credentials::service_account::{AccessSpecifier, Builder};
use std::path::Path;

/// The OAuth scopes requested for the publish task.
pub const PUBSUB_SCOPES: [&str; 1] = ["https://www.googleapis.com/auth/pubsub"];

/// Loads service account credentials from a key file.
///
/// The credentials are restricted to [PUBSUB_SCOPES]. Access tokens are
/// fetched, cached and refreshed by the credentials themselves.
pub async fn load(path: &Path) -> Result<Credentials> {
    let contents = tokio::fs::read(path)
        .await
        .map_err(|e| Error::credentials(path, e))?;
    let key = serde_json::from_slice::<serde_json::Value>(&contents)
        .map_err(|e| Error::credentials(path, e))?;
    let credentials = Builder::new(key)
        .with_access_specifier(AccessSpecifier::from_scopes(PUBSUB_SCOPES))
        .build()
        .map_err(|e| Error::credentials(path, e))?;
    tracing::debug!("loaded service account credentials from {}", path.display());
    Ok(credentials)
}
