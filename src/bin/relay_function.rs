//! Run the relay once as a function invocation
//!
//! Usage: relay-function < event.json
//!
//! Reads one `{ httpMethod, headers, body }` event from stdin and writes the
//! `{ statusCode, headers, body }` result to stdout. Logs go to stderr.

use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

use openrouter_relay::{
    function::{handle_event, FunctionEvent},
    Config, OpenRouterClient, RelayHandler, RelaySettings, Upstream,
};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "openrouter_relay=info".into()),
        )
        .with_writer(std::io::stderr)
        .json()
        .init();

    let config = Config::from_env()?;

    let mut input = Vec::new();
    tokio::io::stdin()
        .read_to_end(&mut input)
        .await
        .context("Failed to read event from stdin")?;
    let event: FunctionEvent =
        serde_json::from_slice(&input).context("Invalid function event JSON")?;

    let upstream: Arc<dyn Upstream> =
        Arc::new(OpenRouterClient::new(reqwest::Client::new(), &config));
    let handler = RelayHandler::new(RelaySettings::from(&config), upstream);

    let response = handle_event(&handler, event).await;

    let mut stdout = tokio::io::stdout();
    stdout
        .write_all(&serde_json::to_vec(&response)?)
        .await
        .context("Failed to write function response")?;
    stdout.write_all(b"\n").await?;
    stdout.flush().await?;

    Ok(())
}
