//! Domain error types.

use thiserror::Error;

use crate::closing_period::ClosingPeriodError;
use crate::order::{OrderError, OrderType};

/// Authorization failures.
///
/// Kept apart from [`OrderError`] so callers can map a privilege problem
/// to a different response than a plain validation failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserError {
    /// The order type is restricted to admin actors.
    #[error("only an admin can place a {order_type} order")]
    AdminRequired { order_type: OrderType },
}

/// Errors that can occur during domain operations.
///
/// Transparent over the underlying families: the literal messages carried
/// by [`OrderError`], [`UserError`] and [`ClosingPeriodError`] are part of
/// the contract and must surface unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    /// The order command is malformed or violates a business rule.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The actor lacks privilege for the requested operation.
    #[error(transparent)]
    User(#[from] UserError),

    /// The closing period definition is invalid.
    #[error(transparent)]
    ClosingPeriod(#[from] ClosingPeriodError),
}
