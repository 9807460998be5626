//! Execute one tool call read from stdin and print the JSON result.
//!
//! ```text
//! echo '{"name":"search_zocket_knowledge","arguments":{"query":"how to create campaigns"}}' \
//!   | VOICE_TOOLS_WEBHOOK_URL=https://hooks.slack.com/services/... \
//!     cargo run --example dispatch_call -- voice-tools.toml
//! ```

use std::io::Read;

use anyhow::Context;
use tracing_subscriber::EnvFilter;
use voice_agent_tools::prelude::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let mut config = match std::env::args().nth(1) {
        Some(path) => Config::load(&path).with_context(|| format!("loading {}", path))?,
        None => Config::default(),
    };
    config.apply_env();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.clone()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let dispatcher = Dispatcher::from_config(&config)?;
    for def in dispatcher.function_definitions() {
        tracing::debug!(tool = %def.name, "registered tool");
    }

    let mut raw = String::new();
    std::io::stdin().read_to_string(&mut raw).context("reading tool call from stdin")?;
    let call: ToolCall = serde_json::from_str(&raw).context("parsing tool call")?;

    println!("{}", dispatcher.dispatch_json(call).await);
    Ok(())
}
