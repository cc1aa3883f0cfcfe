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

use anyhow::bail;
use clap::Parser;
use humantime::parse_duration;
use std::time::Duration;

const DESCRIPTION: &str = concat!(
    "Publishes a single message to a Cloud Pub/Sub topic.",
    " The request is a JSON object read from stdin, with the fields `topic`,",
    " `message`, `project`, `credential` (the path of a service account key file)",
    " and the optional `attributes`.",
    " The result is printed to stdout as a JSON object with a `status` field."
);

/// Configuration options for the publish task.
#[derive(Clone, Debug, Parser)]
#[command(version, about, long_about = DESCRIPTION)]
pub struct Args {
    /// How long to wait for the request on stdin.
    #[arg(
        long,
        env = "PUBSUB_TASK_STDIN_TIMEOUT",
        value_parser = parse_duration,
        default_value = "3s"
    )]
    pub stdin_timeout: Duration,

    /// Override the Pub/Sub endpoint.
    #[arg(long, env = "PUBSUB_TASK_ENDPOINT")]
    pub endpoint: Option<String>,

    /// Enable tracing in the Pub/Sub client library.
    #[arg(long, default_value_t = false)]
    pub with_tracing: bool,
}

impl Args {
    /// Validates the arguments after parsing.
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.stdin_timeout.is_zero() {
            bail!("invalid stdin-timeout, must be greater than zero")
        }
        if self.endpoint.as_ref().is_some_and(|e| e.is_empty()) {
            bail!("invalid endpoint, must not be empty")
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::DEFAULT_STDIN_TIMEOUT;
    use test_case::test_case;

    #[test]
    fn defaults() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["publish"])?;
        assert_eq!(args.stdin_timeout, DEFAULT_STDIN_TIMEOUT);
        assert!(!args.with_tracing, "{args:?}");
        let got = args.validate();
        assert!(got.is_ok(), "{got:?} {args:?}");
        Ok(())
    }

    #[test]
    fn stdin_timeout() -> anyhow::Result<()> {
        let args = Args::try_parse_from(["publish", "--stdin-timeout=250ms"])?;
        assert_eq!(args.stdin_timeout, Duration::from_millis(250));
        Ok(())
    }

    #[test_case(&["publish", "--stdin-timeout=0s"])]
    #[test_case(&["publish", "--endpoint="])]
    fn validate(input: &[&str]) -> anyhow::Result<()> {
        let args = Args::try_parse_from(input)?;
        let got = args.validate();
        assert!(got.is_err(), "{got:?} {args:?}");
        Ok(())
    }

    #[test]
    fn bad_duration() {
        let got = Args::try_parse_from(["publish", "--stdin-timeout=soon"]);
        assert!(got.is_err(), "{got:?}");
    }
}
