//! One-call composition of message text and WhatsApp link for an order.

use crate::contact::{ResolvedContact, resolve_phone};
use crate::link::wa_send_link;
use crate::message::compose_message;
use crate::order::OrderRecord;

/// Composes the status message and deep link for fetched order records.
///
/// Pure and stateless apart from its configuration; one instance serves any
/// number of orders.
#[derive(Debug, Clone, Default)]
pub struct MessageBuilder {
    /// Country code (digits, no `+`) prepended to resolved numbers that do
    /// not already carry it. `None` disables the insertion step.
    default_country_code: Option<String>,
}

/// The output of [`MessageBuilder::build`].
#[derive(Debug, Clone)]
pub struct ComposedMessage {
    /// The status message text. Always produced - it has preview value even
    /// when no phone number was found.
    pub text: String,
    /// The WhatsApp send link. `None` when no phone number resolved: a link
    /// with an empty phone parameter is not actionable, so none is built.
    pub link: Option<String>,
    /// The resolved contact, when any of the order's phone fields was set.
    pub phone: Option<ResolvedContact>,
}

impl ComposedMessage {
    /// Whether a phone number was resolved for this order.
    #[must_use]
    pub const fn phone_found(&self) -> bool {
        self.phone.is_some()
    }
}

impl MessageBuilder {
    /// Create a builder without country-code insertion.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            default_country_code: None,
        }
    }

    /// Create a builder that prepends `code` to numbers missing it.
    #[must_use]
    pub fn with_country_code(code: impl Into<String>) -> Self {
        Self {
            default_country_code: Some(code.into()),
        }
    }

    /// Compose the message and link for an order record.
    #[must_use]
    pub fn build(&self, order: &OrderRecord) -> ComposedMessage {
        let text = compose_message(order);
        let phone = resolve_phone(order);

        let link = phone.as_ref().map(|contact| {
            let number = self.default_country_code.as_deref().map_or_else(
                || contact.normalized(),
                |code| contact.normalized_with_country_code(code),
            );
            wa_send_link(&number, &text)
        });

        ComposedMessage { text, link, phone }
    }
}
