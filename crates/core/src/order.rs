//! Order record types matching the Admin API order query.
//!
//! Field names deserialize directly from the GraphQL response JSON
//! (camelCase), so the fetch layer hands the `order` object straight to
//! these types without an intermediate conversion step.

use serde::Deserialize;

/// A single customer order as fetched from the commerce platform.
///
/// Everything the message template and phone resolution need, nothing more.
/// All sub-records are optional because Shopify returns `null` for orders
/// without a customer account or without the respective address.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderRecord {
    /// Order display name (e.g., `#1001`).
    pub name: String,
    /// Line items, name only.
    #[serde(default)]
    pub line_items: Vec<LineItem>,
    /// Whether any line item requires shipping.
    #[serde(default)]
    pub requires_shipping: bool,
    /// Whether the order is fully paid.
    #[serde(default)]
    pub fully_paid: bool,
    /// Customer contact record.
    pub customer: Option<Contact>,
    /// The address shown on the order page (customer default).
    pub display_address: Option<PhoneField>,
    /// Billing address.
    pub billing_address: Option<PhoneField>,
    /// Shipping address, with the fields the delivery block renders.
    pub shipping_address: Option<ShippingAddress>,
}

/// A line item; only the product name is queried.
#[derive(Debug, Clone, Deserialize)]
pub struct LineItem {
    /// Product name as shown to the customer.
    pub name: String,
}

impl LineItem {
    /// Convenience constructor, mainly for tests and fixtures.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Customer contact record (phone only).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Contact {
    /// Contact phone number, unnormalized.
    pub phone: Option<String>,
}

/// An address sub-record of which only the phone field is queried.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PhoneField {
    /// Address phone number, unnormalized.
    pub phone: Option<String>,
}

/// Shipping address with the fields rendered in the delivery block.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    /// Address phone number, unnormalized.
    pub phone: Option<String>,
    /// Recipient name.
    pub name: Option<String>,
    /// Company name.
    pub company: Option<String>,
    /// First address line.
    pub address1: Option<String>,
    /// Second address line.
    pub address2: Option<String>,
    /// Country name or code.
    pub country: Option<String>,
    /// Postal code.
    pub zip: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_record_deserializes_from_graphql_json() {
        let json = r##"{
            "name": "#1001",
            "lineItems": { "nodes": [] },
            "requiresShipping": true,
            "fullyPaid": false,
            "customer": { "phone": "+6591234567" },
            "displayAddress": null,
            "billingAddress": { "phone": null },
            "shippingAddress": {
                "phone": null,
                "name": "Jane Tan",
                "company": null,
                "address1": "1 Main St",
                "address2": null,
                "country": "SG",
                "zip": "123456"
            }
        }"##;

        // The fetch layer flattens lineItems.nodes before handing the value
        // over; simulate that here.
        let mut value: serde_json::Value = serde_json::from_str(json).expect("valid json");
        value["lineItems"] = value["lineItems"]["nodes"].take();

        let order: OrderRecord = serde_json::from_value(value).expect("deserializes");
        assert_eq!(order.name, "#1001");
        assert!(order.requires_shipping);
        assert!(!order.fully_paid);
        assert_eq!(
            order.customer.and_then(|c| c.phone).as_deref(),
            Some("+6591234567")
        );
        assert!(order.display_address.is_none());
        let shipping = order.shipping_address.expect("shipping address present");
        assert_eq!(shipping.name.as_deref(), Some("Jane Tan"));
        assert_eq!(shipping.company, None);
    }

    #[test]
    fn test_order_record_defaults_for_missing_fields() {
        let order: OrderRecord =
            serde_json::from_str(r##"{ "name": "#2002" }"##).expect("minimal");
        assert_eq!(order.name, "#2002");
        assert!(order.line_items.is_empty());
        assert!(!order.requires_shipping);
        assert!(!order.fully_paid);
    }
}
