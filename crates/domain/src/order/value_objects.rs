//! Value objects for the order domain.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The kind of order being placed.
///
/// Serialized in the wire spelling (`PICK_UP`, `DELIVERY`, `RESERVATION`);
/// `Display` renders the lowercase business label used in error messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    /// Collected at the shop, Tuesday through Saturday.
    PickUp,

    /// Delivered to an address, Thursdays only.
    Delivery,

    /// Admin-only reservation, Tuesday through Saturday.
    Reservation,
}

impl OrderType {
    /// Returns the business label used inside error messages.
    pub fn label(&self) -> &'static str {
        match self {
            OrderType::PickUp => "pick-up",
            OrderType::Delivery => "delivery",
            OrderType::Reservation => "reservation",
        }
    }

    /// Returns true if only admin actors may place this order type.
    pub fn is_admin_only(&self) -> bool {
        matches!(self, OrderType::Reservation)
    }
}

impl std::fmt::Display for OrderType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Product identifier (catalog key).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Creates a new product ID from a string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the product ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for ProductId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for ProductId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ProductId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl AsRef<str> for ProductId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Money amount represented in cents to avoid floating point issues.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money {
    /// Amount in cents (e.g., 1000 = $10.00)
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns the dollar portion (whole number).
    pub fn dollars(&self) -> i64 {
        self.cents / 100
    }

    /// Returns the cents portion (remainder after dollars).
    pub fn cents_part(&self) -> i64 {
        self.cents.abs() % 100
    }

    /// Multiplies by a quantity.
    pub fn multiply(&self, quantity: u32) -> Money {
        Money {
            cents: self.cents * quantity as i64,
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.cents < 0 {
            write!(f, "-${}.{:02}", self.dollars().abs(), self.cents_part())
        } else {
            write!(f, "${}.{:02}", self.dollars(), self.cents_part())
        }
    }
}

impl std::ops::Add for Money {
    type Output = Money;

    fn add(self, rhs: Self) -> Self::Output {
        Money {
            cents: self.cents + rhs.cents,
        }
    }
}

impl std::ops::AddAssign for Money {
    fn add_assign(&mut self, rhs: Self) {
        self.cents += rhs.cents;
    }
}

/// Catalog availability of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    /// Orderable.
    Active,

    /// Retired from the catalog.
    Inactive,
}

impl ProductStatus {
    /// Returns true if the product can currently be ordered.
    pub fn is_active(&self) -> bool {
        matches!(self, ProductStatus::Active)
    }
}

/// A catalog product snapshot.
///
/// Orders copy the full product at placement time, so later catalog
/// changes never retroactively alter past orders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    /// Catalog identifier.
    pub id: ProductId,

    /// Human-readable product name.
    pub name: String,

    /// Free-text description.
    pub description: String,

    /// Price per unit in cents.
    pub price: Money,

    /// Availability at snapshot time.
    pub status: ProductStatus,
}

impl Product {
    /// Creates a new product snapshot.
    pub fn new(
        id: impl Into<ProductId>,
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        status: ProductStatus,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            price,
            status,
        }
    }
}

/// A line item in an order: a resolved product snapshot plus a quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderItem {
    /// The product as it existed when the order was placed or updated.
    pub product: Product,

    /// Quantity ordered, always at least 1.
    pub quantity: u32,
}

impl OrderItem {
    /// Creates a new order item.
    pub fn new(product: Product, quantity: u32) -> Self {
        Self { product, quantity }
    }

    /// Returns the total price for this item (quantity * unit price).
    pub fn total_price(&self) -> Money {
        self.product.price.multiply(self.quantity)
    }
}

/// How and when an order is fulfilled.
///
/// Exactly one date travels with the order, bound to its type; switching
/// the type on update replaces the whole value, which is what clears the
/// dates belonging to the other types.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fulfillment {
    /// Collected at the shop on the given day.
    PickUp { date: DateTime<Utc> },

    /// Delivered to the given address on the given Thursday.
    Delivery { date: DateTime<Utc>, address: String },

    /// Reserved for the given day.
    Reservation { date: DateTime<Utc> },
}

impl Fulfillment {
    /// Returns the order type this fulfillment belongs to.
    pub fn order_type(&self) -> OrderType {
        match self {
            Fulfillment::PickUp { .. } => OrderType::PickUp,
            Fulfillment::Delivery { .. } => OrderType::Delivery,
            Fulfillment::Reservation { .. } => OrderType::Reservation,
        }
    }

    /// Returns the single date bound to the order.
    pub fn date(&self) -> DateTime<Utc> {
        match self {
            Fulfillment::PickUp { date }
            | Fulfillment::Delivery { date, .. }
            | Fulfillment::Reservation { date } => *date,
        }
    }

    /// Returns the pick-up date, if this is a pick-up order.
    pub fn pick_up_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Fulfillment::PickUp { date } => Some(*date),
            _ => None,
        }
    }

    /// Returns the delivery date, if this is a delivery order.
    pub fn delivery_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Fulfillment::Delivery { date, .. } => Some(*date),
            _ => None,
        }
    }

    /// Returns the delivery address, if this is a delivery order.
    pub fn delivery_address(&self) -> Option<&str> {
        match self {
            Fulfillment::Delivery { address, .. } => Some(address),
            _ => None,
        }
    }

    /// Returns the reservation date, if this is a reservation order.
    pub fn reservation_date(&self) -> Option<DateTime<Utc>> {
        match self {
            Fulfillment::Reservation { date } => Some(*date),
            _ => None,
        }
    }
}
