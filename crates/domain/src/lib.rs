//! Domain layer for the bakery order-management backend.
//!
//! This crate provides the order scheduling and validation engine:
//! - Order aggregate with create/update validation
//! - Scheduling rules (business days, cutoff hours, lead times)
//! - Closing periods during which no order may be fulfilled
//! - Clock abstraction anchoring all computations in the business time zone

pub mod clock;
pub mod closing_period;
pub mod dates;
pub mod error;
pub mod order;

pub use clock::{Clock, FixedClock, SystemClock};
pub use closing_period::{ClosingPeriod, ClosingPeriodError};
pub use error::{DomainError, UserError};
pub use order::{
    Fulfillment, Money, NewOrderCommand, Order, OrderError, OrderItem, OrderRecord, OrderType,
    Product, ProductId, ProductSelection, ProductStatus, UpdateOrderCommand,
};
