//! Scheduling rules for order dates.
//!
//! This is a small deterministic state machine keyed by the placement
//! weekday, the placement hour and the candidate weekday. The lead-time
//! table is enumerated data rather than nested conditionals so it can be
//! audited against the shop's actual practice.
//!
//! All decisions are taken on the business wall clock (see
//! [`crate::dates`]) against a single `now` reading.

use chrono::{DateTime, Datelike, Days, NaiveDate, Utc, Weekday};

use crate::closing_period::ClosingPeriod;
use crate::dates;

use super::{OrderError, OrderType};

/// Orders placed at or after this hour count as placed the next day.
pub const CUT_OFF_HOUR: u32 = 19;

/// Deliveries only happen on this weekday.
pub const DELIVERY_WEEKDAY: Weekday = Weekday::Thu;

/// Last weekday (at [`CUT_OFF_HOUR`]) to order a same-week delivery.
pub const DELIVERY_CUT_OFF_WEEKDAY: Weekday = Weekday::Tue;

/// One row of the pick-up lead-time table.
#[derive(Debug, Clone, Copy)]
struct PickUpLeadTime {
    /// Weekday the order is placed on (after the cutoff-hour shift).
    placed_on: Weekday,

    /// Earliest weekday the pick-up can be honored, projected forward to
    /// its next calendar occurrence.
    first_pick_up: Weekday,
}

/// Lead times by placement weekday, indexed by days-from-Sunday.
///
/// The Sunday and Monday rows are unreachable through the normal flow
/// (the shop is closed, so those placement days fail earlier checks) but
/// the table stays total; both give the staff until Thursday.
const PICK_UP_LEAD_TIMES: [PickUpLeadTime; 7] = [
    PickUpLeadTime {
        placed_on: Weekday::Sun,
        first_pick_up: Weekday::Thu,
    },
    PickUpLeadTime {
        placed_on: Weekday::Mon,
        first_pick_up: Weekday::Thu,
    },
    PickUpLeadTime {
        placed_on: Weekday::Tue,
        first_pick_up: Weekday::Sat,
    },
    PickUpLeadTime {
        placed_on: Weekday::Wed,
        first_pick_up: Weekday::Sat,
    },
    PickUpLeadTime {
        placed_on: Weekday::Thu,
        first_pick_up: Weekday::Tue,
    },
    PickUpLeadTime {
        placed_on: Weekday::Fri,
        first_pick_up: Weekday::Tue,
    },
    PickUpLeadTime {
        placed_on: Weekday::Sat,
        first_pick_up: Weekday::Tue,
    },
];

fn first_pick_up_weekday(placed_on: Weekday) -> Weekday {
    let row = PICK_UP_LEAD_TIMES[placed_on.num_days_from_sunday() as usize];
    debug_assert_eq!(row.placed_on, placed_on);
    row.first_pick_up
}

/// The calendar day an order counts as placed on.
///
/// At or after [`CUT_OFF_HOUR`] on the business wall clock, the order is
/// treated as placed the following calendar day.
pub fn effective_placement_date(now: DateTime<Utc>) -> NaiveDate {
    let today = dates::business_date(now);
    if dates::business_hour(now) >= CUT_OFF_HOUR {
        today + Days::new(1)
    } else {
        today
    }
}

/// First calendar day a non-admin pick-up placed at `now` can be honored.
pub fn first_available_pick_up_date(now: DateTime<Utc>) -> NaiveDate {
    let placed = effective_placement_date(now);
    let days = dates::days_until_weekday(placed.weekday(), first_pick_up_weekday(placed.weekday()));
    placed + Days::new(days as u64)
}

/// Returns true once the same-week delivery cutoff has passed.
///
/// Weekdays count from Sunday here: Wednesday through Saturday are past
/// the cutoff outright, Tuesday only from [`CUT_OFF_HOUR`] on, and Sunday
/// starts the next delivery week.
pub fn past_delivery_cut_off(now: DateTime<Utc>) -> bool {
    let weekday = dates::business_weekday(now).num_days_from_sunday();
    let cut_off = DELIVERY_CUT_OFF_WEEKDAY.num_days_from_sunday();
    weekday > cut_off || (weekday == cut_off && dates::business_hour(now) >= CUT_OFF_HOUR)
}

/// First Thursday a non-admin delivery placed at `now` can be honored.
pub fn first_available_delivery_date(now: DateTime<Utc>) -> NaiveDate {
    let today = dates::business_date(now);
    let gap = (i64::from(DELIVERY_WEEKDAY.num_days_from_monday())
        - i64::from(today.weekday().num_days_from_monday()))
    .rem_euclid(7);
    let candidate = today + Days::new(gap as u64);

    // A candidate earlier in the Sunday-to-Saturday week than "now" in
    // weekday terms already belongs to the next delivery week.
    let same_calendar_week = candidate.weekday().num_days_from_sunday()
        >= today.weekday().num_days_from_sunday();
    if same_calendar_week && past_delivery_cut_off(now) {
        candidate + Days::new(7)
    } else {
        candidate
    }
}

fn in_closing_period(date: DateTime<Utc>, closing_periods: &[ClosingPeriod]) -> bool {
    closing_periods.iter().any(|period| period.contains(date))
}

/// Validates a pick-up date.
///
/// `apply_lead_time` is true only for non-admin creations; admins and
/// staff-performed updates skip the same-week and lead-time rules.
pub fn validate_pick_up(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    closing_periods: &[ClosingPeriod],
    apply_lead_time: bool,
) -> Result<(), OrderError> {
    let day = dates::business_date(date);
    if dates::is_past_day(date, now) {
        return Err(OrderError::DateInPast {
            order_type: OrderType::PickUp,
            date: day,
        });
    }
    if !dates::is_open_day(day.weekday()) {
        return Err(OrderError::DateOnClosedDay {
            order_type: OrderType::PickUp,
            date: day,
        });
    }
    if in_closing_period(date, closing_periods) {
        return Err(OrderError::DateInClosingPeriod {
            order_type: OrderType::PickUp,
            date: day,
        });
    }

    if apply_lead_time {
        let placed = effective_placement_date(now);

        // No repeat of the placement weekday within the same week; the
        // same weekday seven or more days out is legal.
        if (day - placed).num_days() < 7 && day.weekday() == placed.weekday() {
            return Err(OrderError::PickUpSameWeekday { date: day });
        }

        let days =
            dates::days_until_weekday(placed.weekday(), first_pick_up_weekday(placed.weekday()));
        if day < placed + Days::new(days as u64) {
            return Err(OrderError::PickUpTooSoon { date: day, days });
        }
    }

    Ok(())
}

/// Validates a delivery date.
///
/// `apply_cut_off` is true only for non-admin creations.
pub fn validate_delivery(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    closing_periods: &[ClosingPeriod],
    apply_cut_off: bool,
) -> Result<(), OrderError> {
    let day = dates::business_date(date);
    if dates::is_past_day(date, now) {
        return Err(OrderError::DateInPast {
            order_type: OrderType::Delivery,
            date: day,
        });
    }
    if in_closing_period(date, closing_periods) {
        return Err(OrderError::DateInClosingPeriod {
            order_type: OrderType::Delivery,
            date: day,
        });
    }
    if day.weekday() != DELIVERY_WEEKDAY {
        return Err(OrderError::DeliveryNotThursday { date: day });
    }

    if apply_cut_off && day < first_available_delivery_date(now) {
        return Err(OrderError::DeliveryPastCutOff { date: day });
    }

    Ok(())
}

/// Validates a reservation date. Reservations carry no lead-time rule:
/// admins may reserve for the same day.
pub fn validate_reservation(
    date: DateTime<Utc>,
    now: DateTime<Utc>,
    closing_periods: &[ClosingPeriod],
) -> Result<(), OrderError> {
    let day = dates::business_date(date);
    if dates::is_past_day(date, now) {
        return Err(OrderError::DateInPast {
            order_type: OrderType::Reservation,
            date: day,
        });
    }
    if !dates::is_open_day(day.weekday()) {
        return Err(OrderError::DateOnClosedDay {
            order_type: OrderType::Reservation,
            date: day,
        });
    }
    if in_closing_period(date, closing_periods) {
        return Err(OrderError::DateInClosingPeriod {
            order_type: OrderType::Reservation,
            date: day,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use common::ClosingPeriodId;

    fn eastern(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        dates::BUSINESS_TZ
            .with_ymd_and_hms(y, m, d, h, 0, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Reference week: Monday 2026-06-01 .. Sunday 2026-06-07.

    #[test]
    fn lead_time_table_is_aligned_with_its_index() {
        for (index, row) in PICK_UP_LEAD_TIMES.iter().enumerate() {
            assert_eq!(row.placed_on.num_days_from_sunday() as usize, index);
        }
    }

    #[test]
    fn effective_placement_shifts_at_the_cutoff_hour() {
        assert_eq!(
            effective_placement_date(eastern(2026, 6, 2, 18)),
            day(2026, 6, 2)
        );
        assert_eq!(
            effective_placement_date(eastern(2026, 6, 2, 19)),
            day(2026, 6, 3)
        );
        assert_eq!(
            effective_placement_date(eastern(2026, 6, 2, 23)),
            day(2026, 6, 3)
        );
    }

    #[test]
    fn first_available_pick_up_follows_the_table() {
        // Monday placement: Thursday the same week.
        assert_eq!(
            first_available_pick_up_date(eastern(2026, 6, 1, 10)),
            day(2026, 6, 4)
        );
        // Tuesday placement: Saturday the same week.
        assert_eq!(
            first_available_pick_up_date(eastern(2026, 6, 2, 10)),
            day(2026, 6, 6)
        );
        // Thursday placement: Tuesday next week.
        assert_eq!(
            first_available_pick_up_date(eastern(2026, 6, 4, 10)),
            day(2026, 6, 9)
        );
    }

    #[test]
    fn first_available_pick_up_uses_the_shifted_placement_day() {
        // Tuesday at 19:00 counts as Wednesday; Wednesday maps to Saturday.
        assert_eq!(
            first_available_pick_up_date(eastern(2026, 6, 2, 19)),
            day(2026, 6, 6)
        );
        // Wednesday at 19:00 counts as Thursday; Thursday maps to next Tuesday.
        assert_eq!(
            first_available_pick_up_date(eastern(2026, 6, 3, 19)),
            day(2026, 6, 9)
        );
    }

    #[test]
    fn delivery_cut_off_is_tuesday_evening() {
        assert!(!past_delivery_cut_off(eastern(2026, 6, 1, 12))); // Monday
        assert!(!past_delivery_cut_off(eastern(2026, 6, 2, 18))); // Tuesday 18:00
        assert!(past_delivery_cut_off(eastern(2026, 6, 2, 19))); // Tuesday 19:00
        assert!(past_delivery_cut_off(eastern(2026, 6, 3, 8))); // Wednesday
        assert!(past_delivery_cut_off(eastern(2026, 6, 6, 8))); // Saturday
        assert!(!past_delivery_cut_off(eastern(2026, 6, 7, 8))); // Sunday
    }

    #[test]
    fn first_available_delivery_respects_the_cutoff() {
        // Monday: this week's Thursday is still available.
        assert_eq!(
            first_available_delivery_date(eastern(2026, 6, 1, 10)),
            day(2026, 6, 4)
        );
        // Tuesday 19:00: pushed to next week's Thursday.
        assert_eq!(
            first_available_delivery_date(eastern(2026, 6, 2, 19)),
            day(2026, 6, 11)
        );
        // Friday: next Thursday is in the next delivery week, no push.
        assert_eq!(
            first_available_delivery_date(eastern(2026, 6, 5, 10)),
            day(2026, 6, 11)
        );
        // Sunday: the new week has started.
        assert_eq!(
            first_available_delivery_date(eastern(2026, 6, 7, 10)),
            day(2026, 6, 11)
        );
    }

    #[test]
    fn pick_up_rejects_past_days() {
        let result = validate_pick_up(eastern(2026, 5, 30, 10), eastern(2026, 6, 2, 10), &[], true);
        assert_eq!(
            result,
            Err(OrderError::DateInPast {
                order_type: OrderType::PickUp,
                date: day(2026, 5, 30),
            })
        );
    }

    #[test]
    fn pick_up_rejects_sundays_and_mondays_even_without_lead_time() {
        for d in [7, 8] {
            let result =
                validate_pick_up(eastern(2026, 6, d, 10), eastern(2026, 6, 2, 10), &[], false);
            assert!(matches!(result, Err(OrderError::DateOnClosedDay { .. })));
        }
    }

    #[test]
    fn pick_up_rejects_closing_periods() {
        let period = ClosingPeriod::restore(
            ClosingPeriodId::new(),
            eastern(2026, 6, 5, 0),
            eastern(2026, 6, 6, 23),
        );
        let result = validate_pick_up(
            eastern(2026, 6, 6, 10),
            eastern(2026, 6, 2, 10),
            std::slice::from_ref(&period),
            false,
        );
        assert_eq!(
            result,
            Err(OrderError::DateInClosingPeriod {
                order_type: OrderType::PickUp,
                date: day(2026, 6, 6),
            })
        );
    }

    #[test]
    fn pick_up_rejects_the_placement_weekday_within_the_week() {
        // Placed Tuesday, asking for the same Tuesday.
        let result = validate_pick_up(eastern(2026, 6, 2, 16), eastern(2026, 6, 2, 10), &[], true);
        assert_eq!(
            result,
            Err(OrderError::PickUpSameWeekday {
                date: day(2026, 6, 2)
            })
        );
    }

    #[test]
    fn pick_up_allows_the_same_weekday_one_week_later() {
        // Placed Tuesday, asking for next Tuesday: seven days out, legal.
        let result = validate_pick_up(eastern(2026, 6, 9, 16), eastern(2026, 6, 2, 10), &[], true);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn pick_up_rejects_dates_before_the_lead_time() {
        // Placed Tuesday, asking for Friday: Saturday is the first slot.
        let result = validate_pick_up(eastern(2026, 6, 5, 16), eastern(2026, 6, 2, 10), &[], true);
        assert_eq!(
            result,
            Err(OrderError::PickUpTooSoon {
                date: day(2026, 6, 5),
                days: 4,
            })
        );
        assert_eq!(
            result.unwrap_err().to_string(),
            "pick-up date 2026-06-05 has to be at least 4 days after now"
        );
    }

    #[test]
    fn pick_up_lead_time_skipped_for_admins() {
        // Same Friday request passes once the lead-time rules are off.
        let result = validate_pick_up(eastern(2026, 6, 5, 16), eastern(2026, 6, 2, 10), &[], false);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn delivery_rejects_non_thursdays() {
        let result =
            validate_delivery(eastern(2026, 6, 5, 10), eastern(2026, 6, 1, 10), &[], true);
        assert_eq!(
            result,
            Err(OrderError::DeliveryNotThursday {
                date: day(2026, 6, 5)
            })
        );
    }

    #[test]
    fn delivery_rejects_same_week_thursday_after_the_cutoff() {
        let result =
            validate_delivery(eastern(2026, 6, 4, 10), eastern(2026, 6, 2, 19), &[], true);
        assert_eq!(
            result,
            Err(OrderError::DeliveryPastCutOff {
                date: day(2026, 6, 4)
            })
        );
    }

    #[test]
    fn delivery_allows_next_week_thursday_after_the_cutoff() {
        let result =
            validate_delivery(eastern(2026, 6, 11, 10), eastern(2026, 6, 2, 19), &[], true);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn delivery_cut_off_skipped_on_update() {
        let result =
            validate_delivery(eastern(2026, 6, 4, 10), eastern(2026, 6, 2, 19), &[], false);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn reservation_allows_same_day() {
        let result = validate_reservation(eastern(2026, 6, 2, 16), eastern(2026, 6, 2, 10), &[]);
        assert_eq!(result, Ok(()));
    }

    #[test]
    fn reservation_rejects_closed_days() {
        let result = validate_reservation(eastern(2026, 6, 8, 10), eastern(2026, 6, 2, 10), &[]);
        assert!(matches!(result, Err(OrderError::DateOnClosedDay { .. })));
    }
}
