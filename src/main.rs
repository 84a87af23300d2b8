use anyhow::Result;
use clap::Parser;
use gemini_chat_relay::ai::GeminiChatClient;
use gemini_chat_relay::app::{self, AppState};
use gemini_chat_relay::models::Config;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Parser)]
#[command(name = "gemini-chat-relay")]
#[command(about = "Relay browser chat messages to the Gemini API")]
struct CliArgs {
    /// Address to bind.
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    host: String,

    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = 5000)]
    port: u16,

    /// Enable debug logging.
    #[arg(long)]
    debug: bool,
}

impl CliArgs {
    fn default_filter(&self) -> &'static str {
        if self.debug {
            "gemini_chat_relay=debug,tower_http=debug"
        } else {
            "gemini_chat_relay=info,tower_http=info"
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| args.default_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting gemini-chat-relay");

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };
    info!("Upstream endpoint: {}", config.api_url);

    let state = AppState::new(Arc::new(GeminiChatClient::new(&config)));

    let listener = tokio::net::TcpListener::bind((args.host.as_str(), args.port)).await?;
    if let Err(e) = app::serve(listener, state).await {
        error!("Server error: {}", e);
        std::process::exit(1);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::CliArgs;
    use clap::Parser;

    #[test]
    fn test_cli_defaults() {
        let args = CliArgs::try_parse_from(["gemini-chat-relay"]).unwrap();
        assert!(!args.debug);
        assert!(args.default_filter().contains("=info"));
    }

    #[test]
    fn test_cli_debug_flag() {
        let args =
            CliArgs::try_parse_from(["gemini-chat-relay", "--port", "8080", "--debug"]).unwrap();
        assert_eq!(args.port, 8080);
        assert!(args.default_filter().contains("=debug"));
    }

    #[test]
    fn test_cli_rejects_bad_port() {
        assert!(CliArgs::try_parse_from(["gemini-chat-relay", "--port", "not-a-port"]).is_err());
    }
}
