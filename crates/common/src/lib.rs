//! Shared types for the bakery order-management domain.

mod types;

pub use types::{ClosingPeriodId, OrderId};
