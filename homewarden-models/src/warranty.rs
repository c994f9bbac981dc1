//! Warranty and maintenance state derivation.
//!
//! Pure functions over dates; the current time is always a parameter so the
//! clock stays in the caller's hands.

use chrono::{DateTime, Months, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{TaskStatus, WarrantyStatus};

/// Days-to-expiration threshold below which a warranty counts as expiring.
pub const EXPIRING_SOON_WINDOW_DAYS: i64 = 30;

/// Derived warranty view of an appliance.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WarrantyInfo {
    pub status: WarrantyStatus,
    pub days_remaining: i64,
    pub expiration_date: DateTime<Utc>,
}

/// Classify an appliance's warranty relative to `today`.
///
/// Expiration is `purchase_date` plus `duration_months` calendar months.
/// `days_remaining` is clamped to zero.
pub fn warranty_status(
    purchase_date: DateTime<Utc>,
    duration_months: u32,
    today: DateTime<Utc>,
) -> WarrantyInfo {
    let expiration_date = purchase_date
        .checked_add_months(Months::new(duration_months))
        .unwrap_or(DateTime::<Utc>::MAX_UTC);
    let days_remaining = (expiration_date - today).num_days();

    let status = if expiration_date < today {
        WarrantyStatus::Expired
    } else if days_remaining <= EXPIRING_SOON_WINDOW_DAYS {
        WarrantyStatus::ExpiringSoon
    } else {
        WarrantyStatus::Active
    };

    WarrantyInfo {
        status,
        days_remaining: days_remaining.max(0),
        expiration_date,
    }
}

/// Classify a maintenance task from its dates.
///
/// Persisted task status is client-authoritative; this derivation is for
/// callers that want the view implied by the dates alone.
pub fn maintenance_status(
    scheduled_date: DateTime<Utc>,
    completed_date: Option<DateTime<Utc>>,
    today: DateTime<Utc>,
) -> TaskStatus {
    if completed_date.is_some() {
        return TaskStatus::Completed;
    }
    if scheduled_date < today {
        TaskStatus::Overdue
    } else {
        TaskStatus::Upcoming
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn utc(y: i32, m: u32, d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
    }

    #[test]
    fn expired_when_today_is_past_expiration() {
        // 2022-10-15 + 24 months = 2024-10-15, long gone by 2025-01-01
        let info = warranty_status(utc(2022, 10, 15), 24, utc(2025, 1, 1));
        assert_eq!(info.status, WarrantyStatus::Expired);
        assert_eq!(info.days_remaining, 0);
        assert_eq!(info.expiration_date, utc(2024, 10, 15));
    }

    #[test]
    fn active_when_expiration_is_far_out() {
        let info = warranty_status(utc(2024, 6, 1), 24, utc(2024, 7, 1));
        assert_eq!(info.status, WarrantyStatus::Active);
        assert!(info.days_remaining > EXPIRING_SOON_WINDOW_DAYS);
    }

    #[test]
    fn expiring_soon_inside_the_window() {
        // expiration 2024-07-01, ten days out
        let info = warranty_status(utc(2024, 6, 1), 1, utc(2024, 6, 21));
        assert_eq!(info.status, WarrantyStatus::ExpiringSoon);
        assert_eq!(info.days_remaining, 10);
    }

    #[test]
    fn expiring_soon_at_exactly_thirty_days() {
        let info = warranty_status(utc(2024, 1, 1), 12, utc(2024, 12, 2));
        assert_eq!(info.days_remaining, EXPIRING_SOON_WINDOW_DAYS);
        assert_eq!(info.status, WarrantyStatus::ExpiringSoon);
    }

    #[test]
    fn expiring_soon_on_the_expiration_day() {
        let info = warranty_status(utc(2024, 1, 1), 6, utc(2024, 7, 1));
        assert_eq!(info.status, WarrantyStatus::ExpiringSoon);
        assert_eq!(info.days_remaining, 0);
    }

    #[test]
    fn days_remaining_never_negative() {
        let info = warranty_status(utc(2020, 1, 1), 1, utc(2024, 1, 1));
        assert_eq!(info.days_remaining, 0);
    }

    #[test]
    fn month_addition_clamps_to_end_of_month() {
        // Jan 31 + 1 month lands on Feb 29 in a leap year
        let info = warranty_status(utc(2024, 1, 31), 1, utc(2024, 1, 1));
        assert_eq!(info.expiration_date, utc(2024, 2, 29));
    }

    #[test]
    fn completed_date_wins_over_schedule() {
        let status = maintenance_status(utc(2024, 1, 1), Some(utc(2024, 2, 1)), utc(2024, 6, 1));
        assert_eq!(status, TaskStatus::Completed);
    }

    #[test]
    fn overdue_when_scheduled_in_the_past() {
        let status = maintenance_status(utc(2024, 1, 1), None, utc(2024, 6, 1));
        assert_eq!(status, TaskStatus::Overdue);
    }

    #[test]
    fn upcoming_when_scheduled_in_the_future() {
        let status = maintenance_status(utc(2024, 6, 1), None, utc(2024, 1, 1));
        assert_eq!(status, TaskStatus::Upcoming);
    }
}
