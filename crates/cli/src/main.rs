//! OrderPing CLI - preview order messages from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Preview the message and WhatsApp link for an order
//! op-cli preview --order-id "gid://shopify/Order/123"
//!
//! # Emit the prepared message as JSON for host integrations
//! op-cli preview --order-id "gid://shopify/Order/123" --json
//! ```
//!
//! # Commands
//!
//! - `preview` - Fetch an order and print its status message and send link

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "op-cli")]
#[command(author, version, about = "OrderPing CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Preview the status message and WhatsApp link for an order
    Preview {
        /// Shopify order ID (e.g., `gid://shopify/Order/123`)
        #[arg(short, long)]
        order_id: String,

        /// Print the prepared message as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Preview { order_id, json } => {
            commands::preview::run(&order_id, json).await?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preview_args_parse() {
        let cli = Cli::try_parse_from([
            "op-cli",
            "preview",
            "--order-id",
            "gid://shopify/Order/123",
            "--json",
        ])
        .expect("parses");

        let Commands::Preview { order_id, json } = cli.command;
        assert_eq!(order_id, "gid://shopify/Order/123");
        assert!(json);
    }

    #[test]
    fn test_preview_requires_order_id() {
        assert!(Cli::try_parse_from(["op-cli", "preview"]).is_err());
    }
}
