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

use anyhow::Result;
use clap::Parser;
use pubsub_publish_task::args::Args;
use pubsub_publish_task::publisher::PubsubConnector;
use pubsub_publish_task::task::Task;
use std::io::Write;
use std::process::ExitCode;

fn main() -> Result<ExitCode> {
    let args = Args::parse();
    args.validate()?;
    enable_tracing();
    tracing::debug!("Configuration: {args:?}");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;
    let task = Task::new(PubsubConnector::from(&args)).with_stdin_timeout(args.stdin_timeout);
    let envelope = runtime.block_on(task.run(tokio::io::stdin()));
    // After a timeout the stdin read is still blocked in the runtime's
    // blocking pool, do not wait for it.
    runtime.shutdown_background();

    let mut stdout = std::io::stdout().lock();
    envelope.write_to(&mut stdout)?;
    stdout.flush()?;
    Ok(ExitCode::from(envelope.exit_code()))
}

// Logs go to stderr, stdout only carries the result.
fn enable_tracing() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::filter::LevelFilter;
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::WARN.into())
        .from_env_lossy();
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();
}
