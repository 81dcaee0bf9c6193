//! Preview command: fetch an order and print its message and send link.
//!
//! # Environment Variables
//!
//! - `SHOPIFY_STORE` - Shopify store domain
//! - `SHOPIFY_ADMIN_TOKEN` - Admin API access token
//! - `SHOPIFY_API_VERSION` - API version (optional)
//! - `WHATSAPP_COUNTRY_CODE` - Default country code (optional)

use orderping_action::{ActionConfig, MessageAction, OrderClient, PreparedMessage};
use orderping_core::MessageBuilder;

/// Fetch the order and print the prepared message.
///
/// # Errors
///
/// Returns an error if configuration is missing, the fetch fails, or the
/// order does not exist.
pub async fn run(order_id: &str, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let config = ActionConfig::from_env()?;

    let builder = config
        .whatsapp_country_code
        .as_deref()
        .map_or_else(MessageBuilder::new, MessageBuilder::with_country_code);

    let action = MessageAction::new(OrderClient::new(&config), builder);
    let prepared = action.prepare(order_id).await?;

    if json {
        print_json(&prepared)?;
    } else {
        print_text(&prepared);
    }

    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_json(prepared: &PreparedMessage) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(prepared)?);
    Ok(())
}

#[allow(clippy::print_stdout)]
fn print_text(prepared: &PreparedMessage) {
    println!("Order {}", prepared.order_name);
    println!();
    println!("{}", prepared.text);
    println!();
    match &prepared.link {
        Some(link) => println!("Send via WhatsApp: {link}"),
        None => println!("No phone number found on this order; link not generated."),
    }
}
