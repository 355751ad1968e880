//! Order commands.
//!
//! Commands carry the raw request shape: product references (not
//! snapshots), optional dates for every order type, and the type itself.
//! The engine decides which fields are required and binds exactly one
//! date when it builds the [`Fulfillment`](super::Fulfillment).

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use super::{OrderType, ProductId};

/// A requested product reference: catalog id plus quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductSelection {
    /// The catalog product being ordered.
    pub product_id: ProductId,

    /// Requested quantity; the engine rejects zero.
    pub quantity: u32,
}

impl ProductSelection {
    /// Creates a new product selection.
    pub fn new(product_id: impl Into<ProductId>, quantity: u32) -> Self {
        Self {
            product_id: product_id.into(),
            quantity,
        }
    }
}

/// Command to create a new order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewOrderCommand {
    /// Client display name.
    pub client_name: String,

    /// Client phone number.
    pub client_phone_number: String,

    /// Client email address.
    pub client_email_address: String,

    /// Requested products, in order.
    pub products: Vec<ProductSelection>,

    /// The kind of order being placed.
    pub order_type: OrderType,

    /// Requested pick-up date, when `order_type` is pick-up.
    pub pick_up_date: Option<DateTime<Utc>>,

    /// Requested delivery date, when `order_type` is delivery.
    pub delivery_date: Option<DateTime<Utc>>,

    /// Delivery address, when `order_type` is delivery.
    pub delivery_address: Option<String>,

    /// Requested reservation date, when `order_type` is reservation.
    pub reservation_date: Option<DateTime<Utc>>,

    /// Free-text note, copied verbatim onto the order.
    pub note: Option<String>,
}

/// Command to update an existing order.
///
/// Contact details are deliberately absent: they are set once at creation
/// and never touched by updates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateOrderCommand {
    /// The order being updated; must match the target's id.
    pub order_id: OrderId,

    /// Replacement product list, in order.
    pub products: Vec<ProductSelection>,

    /// The (possibly changed) kind of order.
    pub order_type: OrderType,

    /// Requested pick-up date, when `order_type` is pick-up.
    pub pick_up_date: Option<DateTime<Utc>>,

    /// Requested delivery date, when `order_type` is delivery.
    pub delivery_date: Option<DateTime<Utc>>,

    /// Delivery address, when `order_type` is delivery.
    pub delivery_address: Option<String>,

    /// Requested reservation date, when `order_type` is reservation.
    pub reservation_date: Option<DateTime<Utc>>,

    /// Free-text note; always overwrites the stored note, even if empty.
    pub note: Option<String>,
}
