//! Order aggregate implementation.

use std::sync::LazyLock;

use chrono::{DateTime, Utc};
use common::OrderId;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::closing_period::ClosingPeriod;
use crate::error::{DomainError, UserError};

use super::{
    Fulfillment, Money, NewOrderCommand, OrderError, OrderItem, OrderType, Product,
    ProductSelection, UpdateOrderCommand, schedule,
};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Order aggregate root.
///
/// Owns the contact details, the resolved line items, the fulfillment
/// (type plus its single date) and the fulfilled marker. Produced and
/// mutated only through [`Order::create`] and [`Order::update_with`];
/// [`Order::restore`] rebuilds an already-validated persisted record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Assigned by the persistence collaborator, absent until stored.
    id: Option<OrderId>,

    client_name: String,
    client_phone_number: String,
    client_email_address: String,

    /// Resolved product snapshots, in command order, never empty.
    products: Vec<OrderItem>,

    /// The order type and its single bound date.
    fulfillment: Fulfillment,

    note: Option<String>,

    /// Fulfilled marker, toggled independently of validation.
    checked: bool,
}

/// Persisted order fields, used by [`Order::restore`].
///
/// An explicit field-by-field record: the data model's real shape stays
/// visible instead of hiding behind a reflective copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderRecord {
    pub id: OrderId,
    pub client_name: String,
    pub client_phone_number: String,
    pub client_email_address: String,
    pub products: Vec<OrderItem>,
    pub fulfillment: Fulfillment,
    pub note: Option<String>,
    pub checked: bool,
}

impl Order {
    /// Validates a creation command and builds a new order.
    ///
    /// Checks run in a fixed sequence and the first violated rule wins:
    /// contact details, products, type authorization, then the date block
    /// for the requested type. Non-admin callers are additionally held to
    /// the lead-time rules in [`schedule`].
    #[tracing::instrument(skip_all, fields(order_type = %command.order_type, is_admin))]
    pub fn create(
        command: &NewOrderCommand,
        active_products: &[Product],
        closing_periods: &[ClosingPeriod],
        is_admin: bool,
        clock: &dyn Clock,
    ) -> Result<Self, DomainError> {
        let now = clock.now();

        validate_contact_details(command)?;
        let products = resolve_products(&command.products, active_products)?;

        if command.order_type.is_admin_only() && !is_admin {
            return Err(UserError::AdminRequired {
                order_type: command.order_type,
            }
            .into());
        }

        let fulfillment = bind_fulfillment(
            command.order_type,
            command.pick_up_date,
            command.delivery_date,
            command.delivery_address.as_deref(),
            command.reservation_date,
            now,
            closing_periods,
            !is_admin,
        )?;

        tracing::debug!(products = products.len(), "order validated");

        Ok(Self {
            id: None,
            client_name: command.client_name.clone(),
            client_phone_number: command.client_phone_number.clone(),
            client_email_address: command.client_email_address.clone(),
            products,
            fulfillment,
            note: command.note.clone(),
            checked: false,
        })
    }

    /// Validates an update command and applies it to this order.
    ///
    /// Updates are staff-performed: reservations are implicitly
    /// authorized and the non-admin lead-time rules never re-apply.
    /// The whole command is validated before any field is written, so a
    /// failed update leaves the order untouched. Contact details are
    /// never changed; the note is always overwritten.
    #[tracing::instrument(skip_all, fields(order_id = %command.order_id))]
    pub fn update_with(
        &mut self,
        command: &UpdateOrderCommand,
        active_products: &[Product],
        closing_periods: &[ClosingPeriod],
        clock: &dyn Clock,
    ) -> Result<(), DomainError> {
        let now = clock.now();

        if self.id != Some(command.order_id) {
            return Err(OrderError::OrderIdMismatch.into());
        }

        let products = resolve_products(&command.products, active_products)?;
        let fulfillment = bind_fulfillment(
            command.order_type,
            command.pick_up_date,
            command.delivery_date,
            command.delivery_address.as_deref(),
            command.reservation_date,
            now,
            closing_periods,
            false,
        )?;

        self.products = products;
        self.fulfillment = fulfillment;
        self.note = command.note.clone();

        Ok(())
    }

    /// Rebuilds a persisted order without validation.
    pub fn restore(record: OrderRecord) -> Self {
        Self {
            id: Some(record.id),
            client_name: record.client_name,
            client_phone_number: record.client_phone_number,
            client_email_address: record.client_email_address,
            products: record.products,
            fulfillment: record.fulfillment,
            note: record.note,
            checked: record.checked,
        }
    }

    /// Marks the order as fulfilled.
    pub fn check(&mut self) {
        self.checked = true;
    }

    /// Clears the fulfilled marker.
    pub fn uncheck(&mut self) {
        self.checked = false;
    }
}

// Query methods
impl Order {
    /// Returns the assigned id, if persisted.
    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    /// Returns the client name.
    pub fn client_name(&self) -> &str {
        &self.client_name
    }

    /// Returns the client phone number.
    pub fn client_phone_number(&self) -> &str {
        &self.client_phone_number
    }

    /// Returns the client email address.
    pub fn client_email_address(&self) -> &str {
        &self.client_email_address
    }

    /// Returns the line items, in command order.
    pub fn products(&self) -> &[OrderItem] {
        &self.products
    }

    /// Returns the order type.
    pub fn order_type(&self) -> OrderType {
        self.fulfillment.order_type()
    }

    /// Returns the fulfillment (type plus bound date).
    pub fn fulfillment(&self) -> &Fulfillment {
        &self.fulfillment
    }

    /// Returns the pick-up date; `None` unless this is a pick-up order.
    pub fn pick_up_date(&self) -> Option<DateTime<Utc>> {
        self.fulfillment.pick_up_date()
    }

    /// Returns the delivery date; `None` unless this is a delivery order.
    pub fn delivery_date(&self) -> Option<DateTime<Utc>> {
        self.fulfillment.delivery_date()
    }

    /// Returns the delivery address; `None` unless this is a delivery order.
    pub fn delivery_address(&self) -> Option<&str> {
        self.fulfillment.delivery_address()
    }

    /// Returns the reservation date; `None` unless this is a reservation.
    pub fn reservation_date(&self) -> Option<DateTime<Utc>> {
        self.fulfillment.reservation_date()
    }

    /// Returns the note, if any.
    pub fn note(&self) -> Option<&str> {
        self.note.as_deref()
    }

    /// Returns the fulfilled marker.
    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Returns the total amount across all line items.
    pub fn total_amount(&self) -> Money {
        self.products
            .iter()
            .fold(Money::zero(), |total, item| total + item.total_price())
    }
}

fn validate_contact_details(command: &NewOrderCommand) -> Result<(), OrderError> {
    if command.client_name.is_empty() {
        return Err(OrderError::ClientNameMissing);
    }
    if command.client_phone_number.is_empty() {
        return Err(OrderError::ClientPhoneNumberMissing);
    }
    if command.client_email_address.is_empty() {
        return Err(OrderError::ClientEmailAddressMissing);
    }
    if !EMAIL_PATTERN.is_match(&command.client_email_address) {
        return Err(OrderError::ClientEmailAddressInvalid {
            address: command.client_email_address.clone(),
        });
    }
    Ok(())
}

/// Resolves product references into full snapshots.
///
/// Copying the product decouples the order from later catalog mutation.
fn resolve_products(
    selections: &[ProductSelection],
    active_products: &[Product],
) -> Result<Vec<OrderItem>, OrderError> {
    if selections.is_empty() {
        return Err(OrderError::NoProducts);
    }

    selections
        .iter()
        .map(|selection| {
            if selection.quantity == 0 {
                return Err(OrderError::NonPositiveQuantity {
                    product_id: selection.product_id.clone(),
                });
            }
            let product = active_products
                .iter()
                .find(|product| product.id == selection.product_id)
                .ok_or_else(|| OrderError::ProductNotFound {
                    product_id: selection.product_id.clone(),
                })?;
            Ok(OrderItem::new(product.clone(), selection.quantity))
        })
        .collect()
}

/// Validates the date block for the requested type and binds the single
/// date (plus address for deliveries) into a [`Fulfillment`]. Building a
/// fresh value is what clears the fields of the other two types.
#[allow(clippy::too_many_arguments)]
fn bind_fulfillment(
    order_type: OrderType,
    pick_up_date: Option<DateTime<Utc>>,
    delivery_date: Option<DateTime<Utc>>,
    delivery_address: Option<&str>,
    reservation_date: Option<DateTime<Utc>>,
    now: DateTime<Utc>,
    closing_periods: &[ClosingPeriod],
    apply_lead_time: bool,
) -> Result<Fulfillment, OrderError> {
    match order_type {
        OrderType::PickUp => {
            let date = pick_up_date.ok_or(OrderError::DateMissing { order_type })?;
            schedule::validate_pick_up(date, now, closing_periods, apply_lead_time)?;
            Ok(Fulfillment::PickUp { date })
        }
        OrderType::Delivery => {
            let date = delivery_date.ok_or(OrderError::DateMissing { order_type })?;
            let address = delivery_address
                .filter(|address| !address.is_empty())
                .ok_or(OrderError::DeliveryAddressMissing)?;
            schedule::validate_delivery(date, now, closing_periods, apply_lead_time)?;
            Ok(Fulfillment::Delivery {
                date,
                address: address.to_string(),
            })
        }
        OrderType::Reservation => {
            let date = reservation_date.ok_or(OrderError::DateMissing { order_type })?;
            schedule::validate_reservation(date, now, closing_periods)?;
            Ok(Fulfillment::Reservation { date })
        }
    }
}
