//! Order aggregate and the scheduling/validation engine around it.

mod aggregate;
mod commands;
pub mod schedule;
mod value_objects;

pub use aggregate::{Order, OrderRecord};
pub use commands::{NewOrderCommand, ProductSelection, UpdateOrderCommand};
pub use value_objects::{
    Fulfillment, Money, OrderItem, OrderType, Product, ProductId, ProductStatus,
};

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while validating an order command.
///
/// The display strings are literal business messages surfaced to end
/// users and verified by tests; they are part of the contract.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum OrderError {
    /// Client name is empty.
    #[error("client name has to be defined")]
    ClientNameMissing,

    /// Client phone number is empty.
    #[error("client phone number has to be defined")]
    ClientPhoneNumberMissing,

    /// Client email address is empty.
    #[error("client email address has to be defined")]
    ClientEmailAddressMissing,

    /// Client email address does not look like an email address.
    #[error("invalid client email address {address}")]
    ClientEmailAddressInvalid { address: String },

    /// The product list is empty.
    #[error("an order must have at least one product")]
    NoProducts,

    /// A requested quantity is zero.
    #[error("quantity of product with id {product_id} has to be positive")]
    NonPositiveQuantity { product_id: ProductId },

    /// A product id does not resolve against the active catalog.
    #[error("product with id {product_id} not found")]
    ProductNotFound { product_id: ProductId },

    /// The date required by the order type was not supplied.
    #[error("{order_type} date has to be defined")]
    DateMissing { order_type: OrderType },

    /// The date falls on a past calendar day.
    #[error("{order_type} date {date} has to be in the future")]
    DateInPast {
        order_type: OrderType,
        date: NaiveDate,
    },

    /// The date falls on a Sunday or Monday.
    #[error("{order_type} date {date} has to be between a Tuesday and a Saturday")]
    DateOnClosedDay {
        order_type: OrderType,
        date: NaiveDate,
    },

    /// The date falls within a registered closing period.
    #[error("{order_type} date {date} has to be outside closing periods")]
    DateInClosingPeriod {
        order_type: OrderType,
        date: NaiveDate,
    },

    /// Delivery orders need an address.
    #[error("delivery address has to be defined")]
    DeliveryAddressMissing,

    /// Deliveries only happen on Thursdays.
    #[error("delivery date {date} has to be a Thursday")]
    DeliveryNotThursday { date: NaiveDate },

    /// The Tuesday 19:00 cutoff for this week's Thursday has passed.
    #[error("delivery date {date} has to be one of the next available Thursday")]
    DeliveryPastCutOff { date: NaiveDate },

    /// The pick-up lands on the placement weekday within the same week.
    #[error("pick-up date {date} cannot be same day as now")]
    PickUpSameWeekday { date: NaiveDate },

    /// The pick-up is earlier than the lead time allows.
    #[error("pick-up date {date} has to be at least {days} days after now")]
    PickUpTooSoon { date: NaiveDate, days: i64 },

    /// An update command was aimed at a different order.
    #[error("existing order id does not match command order id")]
    OrderIdMismatch,
}
