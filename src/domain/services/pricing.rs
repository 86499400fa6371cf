use chrono::{Datelike, NaiveDate};

use crate::domain::models::package::{Package, PackageKey, TeenDuration, TEEN_SLOTS_4H};
use crate::domain::models::reservation::ExtraServices;

pub const DEPOSIT_AMOUNT: f64 = 40.0;
pub const HOLIDAY_SURCHARGE: f64 = 70.0;
pub const TABLE_RATE: f64 = 10.0;
pub const WAITER_HOURLY_RATE: f64 = 10.0;
pub const LED_KG_RATE: f64 = 0.8;

const KIDS_BASE: f64 = 120.0;
const TEEN_BASE_3H: f64 = 150.0;
const TEEN_BASE_4H: f64 = 180.0;
const ADULT_BASE: f64 = 200.0;
const EIGHTEEN_BASE: f64 = 250.0;

const GUEST_THRESHOLD: u32 = 50;

/// Guest composition as priced. Only the kids package distinguishes children
/// from adults.
#[derive(Debug, Clone, Copy)]
pub enum Guests {
    Kids { children: u32, adults: u32 },
    Standard(u32),
}

impl Guests {
    pub fn total(&self) -> u32 {
        match self {
            Guests::Kids { children, adults } => children + adults,
            Guests::Standard(count) => *count,
        }
    }
}

/// Whole surcharge blocks for the head count above the threshold. A partial
/// block counts as a full one.
fn surcharge_blocks(total: u32, threshold: u32, block: u32) -> u32 {
    if total <= threshold {
        return 0;
    }
    (total - threshold).div_ceil(block)
}

/// Package base price before holiday surcharge and extras. Premium is always
/// zero since its pricing happens over the phone.
pub fn base_price(package: PackageKey, guests: &Guests, slot: &str) -> f64 {
    let total = guests.total();
    match package {
        PackageKey::Kids => {
            KIDS_BASE + f64::from(surcharge_blocks(total, GUEST_THRESHOLD, 10)) * 30.0
        }
        PackageKey::Teen => {
            let base = if TEEN_SLOTS_4H.contains(&slot) {
                TEEN_BASE_4H
            } else {
                TEEN_BASE_3H
            };
            base + f64::from(surcharge_blocks(total, GUEST_THRESHOLD, 20)) * 50.0
        }
        PackageKey::Adult | PackageKey::Baby | PackageKey::Gender => {
            ADULT_BASE + f64::from(surcharge_blocks(total, GUEST_THRESHOLD, 20)) * 50.0
        }
        PackageKey::Eighteen => {
            EIGHTEEN_BASE + f64::from(surcharge_blocks(total, GUEST_THRESHOLD, 20)) * 50.0
        }
        PackageKey::Premium => 0.0,
    }
}

/// The recurring holiday calendar, matched on month and day only: New Year's
/// Eve, the two New Year days, Orthodox New Year and Labor Day.
pub fn is_holiday(date: NaiveDate) -> bool {
    matches!(
        (date.month(), date.day()),
        (12, 31) | (1, 1) | (1, 2) | (1, 13) | (1, 14) | (5, 1)
    )
}

pub fn extras_total(extras: &ExtraServices) -> f64 {
    f64::from(extras.tables) * TABLE_RATE
        + f64::from(extras.waiter_hours) * WAITER_HOURLY_RATE
        + extras.led_kg * LED_KG_RATE
}

/// Waiter hours mirror the nominal package duration. The teen package takes
/// them from the chosen duration, everything else from the leading hour count
/// of its duration descriptor.
pub fn waiter_hours(package: PackageKey, teen_duration: Option<TeenDuration>) -> u32 {
    match package {
        PackageKey::Premium => 0,
        PackageKey::Teen => teen_duration.map(|d| d.hours()).unwrap_or(3),
        _ => leading_hours(Package::get(package).duration),
    }
}

fn leading_hours(duration: &str) -> u32 {
    let digits: String = duration.chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
}

/// Deterministic grand total. Premium short-circuits to zero regardless of
/// any other selection.
pub fn total_price(
    package: PackageKey,
    guests: &Guests,
    slot: &str,
    date: Option<NaiveDate>,
    extras: &ExtraServices,
) -> f64 {
    if package == PackageKey::Premium {
        return 0.0;
    }
    let holiday = match date {
        Some(d) if is_holiday(d) => HOLIDAY_SURCHARGE,
        _ => 0.0,
    };
    base_price(package, guests, slot) + holiday + extras_total(extras)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn kids_base_below_threshold() {
        let guests = Guests::Kids { children: 20, adults: 25 };
        assert_eq!(base_price(PackageKey::Kids, &guests, "11:00–14:00"), 120.0);
    }

    #[test]
    fn kids_surcharge_rounds_partial_blocks_up() {
        // 51 guests is one guest over the threshold but a whole block.
        let guests = Guests::Kids { children: 30, adults: 21 };
        assert_eq!(base_price(PackageKey::Kids, &guests, "11:00–14:00"), 150.0);

        let guests = Guests::Kids { children: 40, adults: 31 };
        assert_eq!(base_price(PackageKey::Kids, &guests, "11:00–14:00"), 210.0);
    }

    #[test]
    fn teen_base_depends_on_slot_set() {
        let guests = Guests::Standard(30);
        assert_eq!(base_price(PackageKey::Teen, &guests, "20:00–23:00"), 150.0);
        assert_eq!(base_price(PackageKey::Teen, &guests, "20:00–00:00"), 180.0);
    }

    #[test]
    fn teen_surcharge_per_twenty_guest_block() {
        let guests = Guests::Standard(55);
        assert_eq!(base_price(PackageKey::Teen, &guests, "20:00–00:00"), 230.0);
        let guests = Guests::Standard(90);
        assert_eq!(base_price(PackageKey::Teen, &guests, "20:00–00:00"), 280.0);
    }

    #[test]
    fn standard_package_bases() {
        let guests = Guests::Standard(40);
        assert_eq!(base_price(PackageKey::Adult, &guests, "20:00–02:00"), 200.0);
        assert_eq!(base_price(PackageKey::Baby, &guests, "20:00–02:00"), 200.0);
        assert_eq!(base_price(PackageKey::Gender, &guests, "20:00–02:00"), 200.0);
        assert_eq!(base_price(PackageKey::Eighteen, &guests, "20:00–02:00"), 250.0);
    }

    #[test]
    fn premium_is_always_zero() {
        let guests = Guests::Standard(100);
        assert_eq!(base_price(PackageKey::Premium, &guests, "20:00–02:00"), 0.0);
        let extras = ExtraServices { tables: 10, ..Default::default() };
        assert_eq!(
            total_price(PackageKey::Premium, &guests, "20:00–02:00", Some(date(2026, 1, 1)), &extras),
            0.0
        );
    }

    #[test]
    fn holiday_set_is_year_independent() {
        assert!(is_holiday(date(2025, 12, 31)));
        assert!(is_holiday(date(1999, 1, 1)));
        assert!(is_holiday(date(2030, 1, 2)));
        assert!(is_holiday(date(2026, 1, 13)));
        assert!(is_holiday(date(2026, 1, 14)));
        assert!(is_holiday(date(2027, 5, 1)));
        assert!(!is_holiday(date(2026, 5, 2)));
        assert!(!is_holiday(date(2026, 7, 4)));
    }

    #[test]
    fn holiday_surcharge_is_additive() {
        let guests = Guests::Standard(30);
        let extras = ExtraServices::default();
        let on_holiday =
            total_price(PackageKey::Adult, &guests, "20:00–02:00", Some(date(2026, 5, 1)), &extras);
        let plain =
            total_price(PackageKey::Adult, &guests, "20:00–02:00", Some(date(2026, 5, 2)), &extras);
        assert_eq!(on_holiday - plain, HOLIDAY_SURCHARGE);
    }

    #[test]
    fn extras_are_additive_and_led_stays_fractional() {
        let extras = ExtraServices {
            tables: 2,
            waiter_hours: 3,
            led_kg: 2.5,
            ..Default::default()
        };
        assert_eq!(extras_total(&extras), 20.0 + 30.0 + 2.0);
    }

    #[test]
    fn worked_example_kids_with_extras() {
        // 60 guests: one 10-guest block over the threshold. Two tables and
        // ten kilograms of LED ice on top.
        let guests = Guests::Kids { children: 40, adults: 20 };
        let extras = ExtraServices { tables: 2, led_kg: 10.0, ..Default::default() };
        let total = total_price(PackageKey::Kids, &guests, "11:00–14:00", Some(date(2026, 9, 12)), &extras);
        assert_eq!(total, 150.0 + 20.0 + 8.0);
    }

    #[test]
    fn waiter_hours_follow_package_duration() {
        assert_eq!(waiter_hours(PackageKey::Kids, None), 3);
        assert_eq!(waiter_hours(PackageKey::Adult, None), 6);
        assert_eq!(waiter_hours(PackageKey::Eighteen, None), 6);
        assert_eq!(waiter_hours(PackageKey::Teen, Some(TeenDuration::ThreeHours)), 3);
        assert_eq!(waiter_hours(PackageKey::Teen, Some(TeenDuration::FourHours)), 4);
        assert_eq!(waiter_hours(PackageKey::Teen, None), 3);
        assert_eq!(waiter_hours(PackageKey::Premium, None), 0);
    }

    #[test]
    fn surcharge_blocks_edge_cases() {
        assert_eq!(surcharge_blocks(50, 50, 10), 0);
        assert_eq!(surcharge_blocks(51, 50, 10), 1);
        assert_eq!(surcharge_blocks(60, 50, 10), 1);
        assert_eq!(surcharge_blocks(61, 50, 10), 2);
        assert_eq!(surcharge_blocks(70, 50, 20), 1);
        assert_eq!(surcharge_blocks(71, 50, 20), 2);
    }
}
