//! Order-status message template.
//!
//! Produces the customer-facing text: a greeting with the order number, a
//! bulleted item list, a status line driven by the shipping/payment flags,
//! and (for shipped orders) a delivery-address confirmation block.

use tracing::warn;

use crate::order::{OrderRecord, ShippingAddress};

/// Line-item name prefix for internal prepaid/deposit items.
///
/// These are bookkeeping entries, not products the customer recognizes, so
/// they never appear in the message.
const PREPAID_ITEM_PREFIX: &str = "Prepaid";

/// Compose the order-status message for an order.
///
/// The text is always produced, even when line items or the shipping
/// address are missing; absent fields are simply omitted.
#[must_use]
pub fn compose_message(order: &OrderRecord) -> String {
    let mut lines: Vec<String> = Vec::new();

    lines.push(format!(
        "Hello! Here is an update on your order {}.",
        order.name
    ));

    if order.line_items.is_empty() {
        warn!(order = %order.name, "order has no line items, skipping itemization");
    }
    for item in &order.line_items {
        if item.name.starts_with(PREPAID_ITEM_PREFIX) {
            continue;
        }
        lines.push(format!("- {}", item.name));
    }

    lines.push(String::new());

    if order.requires_shipping {
        if order.fully_paid {
            lines.push("Your order is ready for delivery.".to_string());
        } else {
            lines.push(
                "Your order is ready for delivery. Please note the invoice sent to you is pending payment."
                    .to_string(),
            );
        }

        lines.push(String::new());
        lines.push("Please confirm your delivery address:".to_string());
        if let Some(address) = &order.shipping_address {
            lines.extend(address_lines(address));
        }
    } else {
        lines.push("Your order will be ready for collection within 2 weeks.".to_string());
    }

    lines.join("\n")
}

/// Render the non-empty shipping address fields, one per line: name,
/// company, address lines, then country and postal code joined by a space.
/// Absent fields produce no line at all.
fn address_lines(address: &ShippingAddress) -> Vec<String> {
    let mut lines: Vec<String> = [
        address.name.as_deref(),
        address.company.as_deref(),
        address.address1.as_deref(),
        address.address2.as_deref(),
    ]
    .into_iter()
    .flatten()
    .filter(|field| !field.trim().is_empty())
    .map(String::from)
    .collect();

    let region: Vec<&str> = [address.country.as_deref(), address.zip.as_deref()]
        .into_iter()
        .flatten()
        .filter(|field| !field.trim().is_empty())
        .collect();
    if !region.is_empty() {
        lines.push(region.join(" "));
    }

    lines
}
