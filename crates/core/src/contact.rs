//! Phone number resolution across an order's contact fields.
//!
//! An order carries up to four phone-bearing sub-records. Resolution walks
//! them in a fixed priority order and takes the first non-empty value. The
//! chain is data ([`PHONE_CHAIN`]), not nested conditionals, so the policy
//! is inspectable and testable on its own.

use tracing::{debug, warn};

use crate::order::OrderRecord;

/// Which of the order's sub-records supplied the phone number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhoneSource {
    /// Customer contact information.
    Customer,
    /// The order's display (primary) address.
    DisplayAddress,
    /// Billing address.
    BillingAddress,
    /// Shipping address.
    ShippingAddress,
}

impl PhoneSource {
    /// Human-readable label used in diagnostics.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Customer => "contact information",
            Self::DisplayAddress => "primary address",
            Self::BillingAddress => "billing address",
            Self::ShippingAddress => "shipping address",
        }
    }
}

type PhoneAccessor = fn(&OrderRecord) -> Option<&str>;

fn customer_phone(order: &OrderRecord) -> Option<&str> {
    order.customer.as_ref()?.phone.as_deref()
}

fn display_address_phone(order: &OrderRecord) -> Option<&str> {
    order.display_address.as_ref()?.phone.as_deref()
}

fn billing_address_phone(order: &OrderRecord) -> Option<&str> {
    order.billing_address.as_ref()?.phone.as_deref()
}

fn shipping_address_phone(order: &OrderRecord) -> Option<&str> {
    order.shipping_address.as_ref()?.phone.as_deref()
}

/// The resolution priority, first match wins.
const PHONE_CHAIN: &[(PhoneSource, PhoneAccessor)] = &[
    (PhoneSource::Customer, customer_phone),
    (PhoneSource::DisplayAddress, display_address_phone),
    (PhoneSource::BillingAddress, billing_address_phone),
    (PhoneSource::ShippingAddress, shipping_address_phone),
];

/// A phone number chosen from an order record, with its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedContact {
    /// The phone string exactly as stored on the order.
    pub raw: String,
    /// Which sub-record it came from.
    pub source: PhoneSource,
}

impl ResolvedContact {
    /// Normalized form: surrounding whitespace trimmed, one leading `+`
    /// stripped. No digit filtering beyond that - the result is not
    /// guaranteed to be a dialable number.
    #[must_use]
    pub fn normalized(&self) -> String {
        let trimmed = self.raw.trim();
        trimmed.strip_prefix('+').unwrap_or(trimmed).to_string()
    }

    /// Normalized form with a default country code prepended when the
    /// number does not already start with it. Only applied when the caller
    /// has a configured target country code.
    #[must_use]
    pub fn normalized_with_country_code(&self, code: &str) -> String {
        let normalized = self.normalized();
        if normalized.starts_with(code) {
            normalized
        } else {
            format!("{code}{normalized}")
        }
    }
}

/// Resolve the contact phone number for an order.
///
/// Walks [`PHONE_CHAIN`] and returns the first non-empty phone value.
/// Empty and whitespace-only strings count as absent. Returns `None` when
/// no source has a usable value.
#[must_use]
pub fn resolve_phone(order: &OrderRecord) -> Option<ResolvedContact> {
    for (source, accessor) in PHONE_CHAIN {
        if let Some(phone) = accessor(order)
            && !phone.trim().is_empty()
        {
            debug!(source = source.label(), "using phone number");
            return Some(ResolvedContact {
                raw: phone.to_string(),
                source: *source,
            });
        }
    }

    warn!(order = %order.name, "no phone number available on order");
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::order::{Contact, PhoneField, ShippingAddress};

    fn order_with(
        customer: Option<&str>,
        display: Option<&str>,
        billing: Option<&str>,
        shipping: Option<&str>,
    ) -> OrderRecord {
        OrderRecord {
            name: "#1001".to_string(),
            customer: customer.map(|p| Contact {
                phone: Some(p.to_string()),
            }),
            display_address: display.map(|p| PhoneField {
                phone: Some(p.to_string()),
            }),
            billing_address: billing.map(|p| PhoneField {
                phone: Some(p.to_string()),
            }),
            shipping_address: shipping.map(|p| ShippingAddress {
                phone: Some(p.to_string()),
                ..ShippingAddress::default()
            }),
            ..OrderRecord::default()
        }
    }

    #[test]
    fn test_customer_phone_wins_over_all_others() {
        let order = order_with(Some("+651111"), Some("+652222"), Some("+653333"), Some("+654444"));
        let resolved = resolve_phone(&order).expect("phone resolves");
        assert_eq!(resolved.raw, "+651111");
        assert_eq!(resolved.source, PhoneSource::Customer);
    }

    #[test]
    fn test_fallback_order_holds_at_each_step() {
        let order = order_with(None, Some("+652222"), Some("+653333"), Some("+654444"));
        assert_eq!(
            resolve_phone(&order).map(|r| r.source),
            Some(PhoneSource::DisplayAddress)
        );

        let order = order_with(None, None, Some("+653333"), Some("+654444"));
        assert_eq!(
            resolve_phone(&order).map(|r| r.source),
            Some(PhoneSource::BillingAddress)
        );
    }

    #[test]
    fn test_shipping_address_phone_used_when_only_source() {
        let order = order_with(None, None, None, Some("+654444"));
        let resolved = resolve_phone(&order).expect("phone resolves");
        assert_eq!(resolved.raw, "+654444");
        assert_eq!(resolved.source, PhoneSource::ShippingAddress);
    }

    #[test]
    fn test_empty_and_whitespace_values_are_skipped() {
        let order = order_with(Some(""), Some("   "), Some("+653333"), None);
        let resolved = resolve_phone(&order).expect("phone resolves");
        assert_eq!(resolved.source, PhoneSource::BillingAddress);
    }

    #[test]
    fn test_no_phone_anywhere_resolves_to_none() {
        let order = order_with(None, None, None, None);
        assert!(resolve_phone(&order).is_none());
    }

    #[test]
    fn test_normalization_trims_and_strips_plus() {
        let contact = ResolvedContact {
            raw: "  +6591234567  ".to_string(),
            source: PhoneSource::Customer,
        };
        assert_eq!(contact.normalized(), "6591234567");
    }

    #[test]
    fn test_normalization_leaves_number_without_plus_alone() {
        let contact = ResolvedContact {
            raw: "6591234567".to_string(),
            source: PhoneSource::Customer,
        };
        assert_eq!(contact.normalized(), "6591234567");
    }

    #[test]
    fn test_country_code_prepended_when_missing() {
        let contact = ResolvedContact {
            raw: "91234567".to_string(),
            source: PhoneSource::Customer,
        };
        assert_eq!(contact.normalized_with_country_code("65"), "6591234567");
    }

    #[test]
    fn test_country_code_not_doubled_when_present() {
        let contact = ResolvedContact {
            raw: "+6591234567".to_string(),
            source: PhoneSource::Customer,
        };
        assert_eq!(contact.normalized_with_country_code("65"), "6591234567");
    }
}
