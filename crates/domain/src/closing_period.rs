//! Closing periods: date ranges during which no pick-up, delivery or
//! reservation may fall.

use chrono::{DateTime, NaiveDate, Utc};
use common::ClosingPeriodId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::clock::Clock;
use crate::dates;

/// Errors raised by the closing period factory.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ClosingPeriodError {
    /// Start date was not supplied.
    #[error("start date has to be defined")]
    StartDateMissing,

    /// Start date falls on a past calendar day.
    #[error("start date {date} has to be in the future")]
    StartDateInPast { date: NaiveDate },

    /// End date was not supplied.
    #[error("end date has to be defined")]
    EndDateMissing,

    /// End date falls on a past calendar day.
    #[error("end date {date} has to be in the future")]
    EndDateInPast { date: NaiveDate },

    /// End date precedes the start date.
    #[error("end date {end} has to be after start date {start}")]
    EndBeforeStart { start: NaiveDate, end: NaiveDate },
}

/// A validated, immutable date range during which the shop is closed.
///
/// Both bounds are inclusive and compared at full timestamp precision when
/// checking containment; the "in the future" checks at creation ignore the
/// time-of-day component, so a period starting today is accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosingPeriod {
    id: Option<ClosingPeriodId>,
    start_date: DateTime<Utc>,
    end_date: DateTime<Utc>,
}

impl ClosingPeriod {
    /// Validates and creates a new closing period.
    ///
    /// Pure construction: no side effects, the id stays unassigned until
    /// the persistence collaborator stores the period.
    pub fn create(
        start_date: Option<DateTime<Utc>>,
        end_date: Option<DateTime<Utc>>,
        clock: &dyn Clock,
    ) -> Result<Self, ClosingPeriodError> {
        let now = clock.now();

        let start_date = start_date.ok_or(ClosingPeriodError::StartDateMissing)?;
        if dates::is_past_day(start_date, now) {
            return Err(ClosingPeriodError::StartDateInPast {
                date: dates::business_date(start_date),
            });
        }

        let end_date = end_date.ok_or(ClosingPeriodError::EndDateMissing)?;
        if dates::is_past_day(end_date, now) {
            return Err(ClosingPeriodError::EndDateInPast {
                date: dates::business_date(end_date),
            });
        }
        if end_date < start_date {
            return Err(ClosingPeriodError::EndBeforeStart {
                start: dates::business_date(start_date),
                end: dates::business_date(end_date),
            });
        }

        Ok(Self {
            id: None,
            start_date,
            end_date,
        })
    }

    /// Rebuilds a persisted closing period without validation.
    pub fn restore(id: ClosingPeriodId, start_date: DateTime<Utc>, end_date: DateTime<Utc>) -> Self {
        Self {
            id: Some(id),
            start_date,
            end_date,
        }
    }

    /// Returns the assigned id, if persisted.
    pub fn id(&self) -> Option<ClosingPeriodId> {
        self.id
    }

    /// Returns the inclusive start of the period.
    pub fn start_date(&self) -> DateTime<Utc> {
        self.start_date
    }

    /// Returns the inclusive end of the period.
    pub fn end_date(&self) -> DateTime<Utc> {
        self.end_date
    }

    /// Returns true if the instant falls within the period, bounds included.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start_date <= instant && instant <= self.end_date
    }
}
