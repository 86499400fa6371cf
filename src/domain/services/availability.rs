use chrono::{Datelike, NaiveDate};
use serde::Serialize;

use crate::domain::models::package::{Package, PackageKey, TeenDuration, ALL_DAY_SLOTS};
use crate::domain::models::reservation::Reservation;
use crate::domain::services::pricing::is_holiday;

/// Candidate slots for a package. The teen package picks its set from the
/// chosen duration; without one there is nothing to offer yet.
pub fn candidate_slots(
    package: PackageKey,
    teen_duration: Option<TeenDuration>,
) -> &'static [&'static str] {
    if package == PackageKey::Teen {
        return match teen_duration {
            Some(duration) => duration.slots(),
            None => &[],
        };
    }
    Package::get(package).slots
}

/// Slots still bookable on `date`: the candidate set minus every slot held by
/// a confirmed reservation on that exact day. Dates are compared on the
/// canonical calendar-day form only.
pub fn available_slots(
    package: PackageKey,
    date: NaiveDate,
    reservations: &[Reservation],
    teen_duration: Option<TeenDuration>,
) -> Vec<String> {
    let taken: Vec<&str> = reservations
        .iter()
        .filter(|r| r.event_date == date && r.is_confirmed())
        .map(|r| r.time_slot.as_str())
        .collect();

    candidate_slots(package, teen_duration)
        .iter()
        .filter(|slot| !taken.contains(*slot))
        .map(|slot| slot.to_string())
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DayStatus {
    Free,
    Partial,
    Full,
    Past,
}

#[derive(Debug, Serialize)]
pub struct DayInfo {
    pub date: NaiveDate,
    pub status: DayStatus,
    pub holiday: bool,
    pub booked_count: usize,
}

/// Three-state calendar coloring plus the disabled past state. Only confirmed
/// reservations count toward fullness; the day is full once every physical
/// slot is held.
pub fn day_status(
    date: NaiveDate,
    today: NaiveDate,
    confirmed_count: usize,
    total_slots: usize,
) -> DayStatus {
    if date < today {
        return DayStatus::Past;
    }
    if confirmed_count >= total_slots {
        DayStatus::Full
    } else if confirmed_count > 0 {
        DayStatus::Partial
    } else {
        DayStatus::Free
    }
}

/// Day-by-day view of a calendar month.
pub fn month_days(
    year: i32,
    month: u32,
    today: NaiveDate,
    reservations: &[Reservation],
) -> Vec<DayInfo> {
    let mut days = Vec::new();
    let mut day = 1;
    while let Some(date) = NaiveDate::from_ymd_opt(year, month, day) {
        let confirmed = reservations
            .iter()
            .filter(|r| r.event_date == date && r.is_confirmed())
            .count();
        days.push(DayInfo {
            date,
            status: day_status(date, today, confirmed, ALL_DAY_SLOTS.len()),
            holiday: is_holiday(date),
            booked_count: confirmed,
        });
        day += 1;
    }
    days
}

#[derive(Debug, Serialize, PartialEq)]
pub struct MonthStats {
    pub count: usize,
    pub revenue: f64,
}

/// Count and revenue sum over reservations whose date falls in the given
/// calendar month.
pub fn month_stats(reservations: &[Reservation], year: i32, month: u32) -> MonthStats {
    let in_month: Vec<&Reservation> = reservations
        .iter()
        .filter(|r| r.event_date.year() == year && r.event_date.month() == month)
        .collect();
    MonthStats {
        count: in_month.len(),
        revenue: in_month.iter().map(|r| r.total_price).sum(),
    }
}
