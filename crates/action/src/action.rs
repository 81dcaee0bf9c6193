//! The fetch-then-compose pipeline behind an opened messaging action.

use std::sync::atomic::{AtomicU64, Ordering};

use serde::Serialize;
use tracing::{info, instrument};

use orderping_core::MessageBuilder;

use crate::error::ActionError;
use crate::shopify::OrderSource;

/// Everything the presentation layer needs to render an opened action.
#[derive(Debug, Clone, Serialize)]
pub struct PreparedMessage {
    /// Order display name (e.g., `#1001`).
    pub order_name: String,
    /// The composed status message text.
    pub text: String,
    /// The WhatsApp send link; `None` when no phone number was found, in
    /// which case the UI shows the message preview with a notice instead of
    /// a send button.
    pub link: Option<String>,
    /// Whether any of the order's phone fields resolved.
    pub phone_found: bool,
}

/// The messaging action: fetches an order and prepares its message.
///
/// Each opened action instance holds one of these. `prepare` may be called
/// again when the merchant re-opens or re-selects; a generation counter
/// ensures a slow earlier fetch can never overwrite a newer one.
pub struct MessageAction<S> {
    source: S,
    builder: MessageBuilder,
    generation: AtomicU64,
}

impl<S: std::fmt::Debug> std::fmt::Debug for MessageAction<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageAction")
            .field("source", &self.source)
            .field("builder", &self.builder)
            .field("generation", &self.generation.load(Ordering::SeqCst))
            .finish()
    }
}

impl<S: OrderSource> MessageAction<S> {
    /// Create an action over an order source and message builder.
    #[must_use]
    pub const fn new(source: S, builder: MessageBuilder) -> Self {
        Self {
            source,
            builder,
            generation: AtomicU64::new(0),
        }
    }

    /// Fetch the order and prepare its message and link.
    ///
    /// # Errors
    ///
    /// Propagates fetch errors ([`ActionError::Http`], `GraphQL`,
    /// `OrderNotFound`, ...) so the caller can render an "unable to load
    /// order" state. Returns [`ActionError::Superseded`] when a newer
    /// `prepare` call was started while this one was in flight.
    #[instrument(skip(self), fields(order_id = %order_id))]
    pub async fn prepare(&self, order_id: &str) -> Result<PreparedMessage, ActionError> {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;

        let order = self.source.fetch_order(order_id).await?;

        // A later prepare() advanced the counter while we were waiting.
        if self.generation.load(Ordering::SeqCst) != generation {
            return Err(ActionError::Superseded);
        }

        let composed = self.builder.build(&order);
        info!(
            order = %order.name,
            phone_found = composed.phone_found(),
            "message prepared"
        );

        Ok(PreparedMessage {
            order_name: order.name,
            phone_found: composed.phone_found(),
            link: composed.link,
            text: composed.text,
        })
    }
}
