//! Shopify Admin GraphQL client for the order query.
//!
//! The action needs exactly one query, so the document is a fixed string
//! and the response is deserialized with `serde` rather than generated
//! bindings. The envelope handling (HTTP status mapping, GraphQL errors,
//! null order) follows the Admin API contract.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::{debug, instrument};

use orderping_core::{Contact, LineItem, OrderRecord, PhoneField, ShippingAddress};

use crate::config::ActionConfig;
use crate::error::{ActionError, GraphQLError};

/// The order query: display name, line-item names, the two status flags,
/// and every phone-bearing sub-record the fallback chain inspects.
const ORDER_QUERY: &str = r"query Order($id: ID!) {
  order(id: $id) {
    name
    lineItems(first: 50) {
      nodes {
        name
      }
    }
    requiresShipping
    fullyPaid
    customer {
      phone
    }
    displayAddress {
      phone
    }
    billingAddress {
      phone
    }
    shippingAddress {
      phone
      name
      company
      address1
      address2
      country
      zip
    }
  }
}";

/// Source of order records, the seam between fetch and composition.
#[async_trait]
pub trait OrderSource: Send + Sync {
    /// Fetch the order record for an order id.
    ///
    /// # Errors
    ///
    /// Returns an error if the fetch fails or the order does not exist.
    async fn fetch_order(&self, id: &str) -> Result<OrderRecord, ActionError>;
}

/// Admin API client for fetching order records.
#[derive(Clone)]
pub struct OrderClient {
    client: reqwest::Client,
    endpoint: String,
    admin_token: SecretString,
}

impl std::fmt::Debug for OrderClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OrderClient")
            .field("endpoint", &self.endpoint)
            .field("admin_token", &"[REDACTED]")
            .finish_non_exhaustive()
    }
}

impl OrderClient {
    /// Create a client for the configured store and API version.
    #[must_use]
    pub fn new(config: &ActionConfig) -> Self {
        let endpoint = format!(
            "https://{}/admin/api/{}/graphql.json",
            config.store, config.api_version
        );
        Self::with_endpoint(endpoint, config.admin_token.clone())
    }

    /// Create a client pointing at an explicit endpoint (useful for tests).
    #[must_use]
    pub fn with_endpoint(endpoint: String, admin_token: SecretString) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint,
            admin_token,
        }
    }

    /// Execute the order query and return the parsed record.
    ///
    /// # Errors
    ///
    /// Returns `ActionError::Http` on transport failure, `Unauthorized` /
    /// `RateLimited` for the corresponding HTTP statuses, `GraphQL` when
    /// the envelope carries errors, and `OrderNotFound` when the order is
    /// null in the response.
    #[instrument(skip(self), fields(order_id = %id))]
    pub async fn get_order(&self, id: &str) -> Result<OrderRecord, ActionError> {
        let body = serde_json::json!({
            "query": ORDER_QUERY,
            "variables": { "id": id },
        });

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-Shopify-Access-Token", self.admin_token.expose_secret())
            .header("Content-Type", "application/json")
            .json(&body)
            .send()
            .await?;

        if let Some(err) = map_http_status(response.status(), response.headers().get("Retry-After"))
        {
            return Err(err);
        }

        let text = response.text().await?;
        debug!(bytes = text.len(), "order response received");

        parse_order_response(&text, id)
    }
}

#[async_trait]
impl OrderSource for OrderClient {
    async fn fetch_order(&self, id: &str) -> Result<OrderRecord, ActionError> {
        self.get_order(id).await
    }
}

// =============================================================================
// Response envelope
// =============================================================================

#[derive(Debug, Deserialize)]
struct GraphQLResponse {
    data: Option<OrderData>,
    errors: Option<Vec<GraphQLError>>,
}

#[derive(Debug, Deserialize)]
struct OrderData {
    order: Option<OrderPayload>,
}

/// The order object as shaped by the GraphQL query; `lineItems` arrives as
/// a connection and is flattened into the core record.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct OrderPayload {
    name: String,
    #[serde(default)]
    line_items: NodeConnection<LineItem>,
    #[serde(default)]
    requires_shipping: bool,
    #[serde(default)]
    fully_paid: bool,
    customer: Option<Contact>,
    display_address: Option<PhoneField>,
    billing_address: Option<PhoneField>,
    shipping_address: Option<ShippingAddress>,
}

#[derive(Debug, Deserialize)]
struct NodeConnection<T> {
    #[serde(default = "Vec::new")]
    nodes: Vec<T>,
}

impl<T> Default for NodeConnection<T> {
    fn default() -> Self {
        Self { nodes: Vec::new() }
    }
}

impl From<OrderPayload> for OrderRecord {
    fn from(payload: OrderPayload) -> Self {
        Self {
            name: payload.name,
            line_items: payload.line_items.nodes,
            requires_shipping: payload.requires_shipping,
            fully_paid: payload.fully_paid,
            customer: payload.customer,
            display_address: payload.display_address,
            billing_address: payload.billing_address,
            shipping_address: payload.shipping_address,
        }
    }
}

/// Map the HTTP statuses the Admin API uses for rejection: 429 carries a
/// `Retry-After` header (60 seconds assumed when absent or unparseable),
/// 401 means the token is invalid or expired. Any other status falls
/// through to envelope parsing.
fn map_http_status(
    status: reqwest::StatusCode,
    retry_after: Option<&reqwest::header::HeaderValue>,
) -> Option<ActionError> {
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        let seconds = retry_after
            .and_then(|v| v.to_str().ok())
            .and_then(|s| s.parse().ok())
            .unwrap_or(60);
        return Some(ActionError::RateLimited(seconds));
    }

    if status == reqwest::StatusCode::UNAUTHORIZED {
        return Some(ActionError::Unauthorized(
            "Invalid or expired access token".to_string(),
        ));
    }

    None
}

/// Parse a raw GraphQL response body into an order record.
fn parse_order_response(body: &str, id: &str) -> Result<OrderRecord, ActionError> {
    let envelope: GraphQLResponse = serde_json::from_str(body)?;

    if let Some(errors) = envelope.errors
        && !errors.is_empty()
    {
        return Err(ActionError::GraphQL(errors));
    }

    envelope
        .data
        .and_then(|data| data.order)
        .map(OrderRecord::from)
        .ok_or_else(|| ActionError::OrderNotFound(id.to_string()))
}
