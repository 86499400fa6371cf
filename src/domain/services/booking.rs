use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::models::package::{Package, PackageKey, SpaceType, TeenDuration};
use crate::domain::models::reservation::ExtraServices;
use crate::domain::services::availability::candidate_slots;
use crate::domain::services::pricing::{self, Guests};

pub const CLOSED_SPACE_CEILING: u32 = 70;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum BookingStep {
    SelectingSpace,
    SelectingGuests,
    SelectingDate,
    SelectingSlot,
    AwaitingContactInfo,
    AwaitingDepositPayment,
    Confirmed,
}

impl BookingStep {
    /// Anchor id the client scrolls to when a validation failure points here.
    pub fn anchor(&self) -> &'static str {
        match self {
            BookingStep::SelectingSpace => "space-step",
            BookingStep::SelectingGuests => "guests-step",
            BookingStep::SelectingDate => "date-step",
            BookingStep::SelectingSlot => "slot-step",
            BookingStep::AwaitingContactInfo => "form-step",
            BookingStep::AwaitingDepositPayment => "payment-step",
            BookingStep::Confirmed => "confirmation",
        }
    }
}

/// A validation failure is never terminal: it names the step to return to and
/// a user-facing message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DraftError {
    pub step: BookingStep,
    pub message: String,
}

impl DraftError {
    fn at(step: BookingStep, message: &str) -> DraftError {
        DraftError { step, message: message.to_string() }
    }
}

/// The in-progress booking, held as one explicit state container with
/// reducer-style transition functions. Everything the user has picked so far
/// lives here until it is persisted as a reservation.
#[derive(Debug, Clone, Serialize)]
pub struct BookingDraft {
    pub package: PackageKey,
    pub space: Option<SpaceType>,
    pub teen_duration: Option<TeenDuration>,
    pub guests: Option<DraftGuests>,
    pub date: Option<NaiveDate>,
    pub slot: Option<String>,
    pub extras: ExtraServices,
    pub waiter_enabled: bool,
    pub customer_name: String,
    pub customer_phone: String,
    pub customer_email: String,
    pub notes: Option<String>,
    pub step: BookingStep,
}

#[derive(Debug, Clone, Copy, Serialize)]
#[serde(untagged)]
pub enum DraftGuests {
    Kids { children: u32, adults: u32 },
    Standard { count: u32 },
}

impl BookingDraft {
    pub fn new(package: PackageKey) -> Self {
        Self {
            package,
            space: None,
            teen_duration: None,
            guests: None,
            date: None,
            slot: None,
            extras: ExtraServices::default(),
            waiter_enabled: false,
            customer_name: String::new(),
            customer_phone: String::new(),
            customer_email: String::new(),
            notes: None,
            step: BookingStep::SelectingSpace,
        }
    }

    pub fn select_space(&mut self, space: SpaceType) {
        self.space = Some(space);
        self.clamp_guests();
        self.step = BookingStep::SelectingGuests;
    }

    pub fn set_guests(&mut self, guests: DraftGuests) {
        self.guests = Some(guests);
        self.clamp_guests();
        self.step = BookingStep::SelectingDate;
    }

    pub fn select_teen_duration(&mut self, duration: TeenDuration) {
        self.teen_duration = Some(duration);
        // A previously picked slot may belong to the other slot set.
        self.slot = None;
        self.sync_waiter_hours();
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.date = Some(date);
        self.step = BookingStep::SelectingSlot;
    }

    pub fn select_slot(&mut self, slot: String) {
        self.slot = Some(slot);
        self.step = BookingStep::AwaitingContactInfo;
    }

    pub fn set_contact(&mut self, name: String, phone: String, email: String) {
        self.customer_name = name;
        self.customer_phone = phone;
        self.customer_email = email;
    }

    pub fn set_extras(&mut self, extras: ExtraServices, waiter_enabled: bool) {
        self.extras = extras;
        self.waiter_enabled = waiter_enabled;
        self.sync_waiter_hours();
    }

    /// Waiter hours mirror the package duration whenever the toggle is on;
    /// they are never taken from user input.
    fn sync_waiter_hours(&mut self) {
        self.extras.waiter_hours = if self.waiter_enabled {
            pricing::waiter_hours(self.package, self.teen_duration)
        } else {
            0
        };
    }

    /// In the closed space the total head count is capped; for the kids
    /// package adults are reduced first to fit.
    fn clamp_guests(&mut self) {
        if self.space != Some(SpaceType::Closed) {
            return;
        }
        match &mut self.guests {
            Some(DraftGuests::Kids { children, adults }) => {
                if *children + *adults > CLOSED_SPACE_CEILING {
                    *children = (*children).min(CLOSED_SPACE_CEILING);
                    *adults = CLOSED_SPACE_CEILING - *children;
                }
            }
            Some(DraftGuests::Standard { count }) => {
                *count = (*count).min(CLOSED_SPACE_CEILING);
            }
            None => {}
        }
    }

    pub fn guest_total(&self) -> u32 {
        match self.guests {
            Some(DraftGuests::Kids { children, adults }) => children + adults,
            Some(DraftGuests::Standard { count }) => count,
            None => 0,
        }
    }

    fn pricing_guests(&self) -> Guests {
        match self.guests {
            Some(DraftGuests::Kids { children, adults }) => Guests::Kids { children, adults },
            Some(DraftGuests::Standard { count }) => Guests::Standard(count),
            None => Guests::Standard(0),
        }
    }

    pub fn total_price(&self) -> f64 {
        pricing::total_price(
            self.package,
            &self.pricing_guests(),
            self.slot.as_deref().unwrap_or(""),
            self.date,
            &self.extras,
        )
    }

    /// Advance past the form. Checks run strictly in step order and the first
    /// miss wins; on success the draft is ready for the deposit payment and
    /// nothing has been persisted yet. Premium never reaches this point.
    /// `today` anchors the past-date rejection.
    pub fn submit(&mut self, today: NaiveDate) -> Result<(), DraftError> {
        if self.package == PackageKey::Premium {
            return Err(DraftError::at(
                BookingStep::SelectingSpace,
                "Premium celebrations are arranged over the phone.",
            ));
        }
        if self.space.is_none() {
            self.step = BookingStep::SelectingSpace;
            return Err(DraftError::at(
                BookingStep::SelectingSpace,
                "Please select a space type first (step 01).",
            ));
        }
        if self.date.is_none() {
            self.step = BookingStep::SelectingDate;
            return Err(DraftError::at(
                BookingStep::SelectingDate,
                "Please pick a date on the calendar (step 03).",
            ));
        }
        if let Some(date) = self.date
            && date < today
        {
            self.step = BookingStep::SelectingDate;
            return Err(DraftError::at(
                BookingStep::SelectingDate,
                "That date has already passed. Please pick another.",
            ));
        }
        match &self.slot {
            None => {
                self.step = BookingStep::SelectingSlot;
                return Err(DraftError::at(
                    BookingStep::SelectingSlot,
                    "Please choose one of the free time slots (step 04).",
                ));
            }
            Some(slot) => {
                let candidates = candidate_slots(self.package, self.teen_duration);
                if !candidates.contains(&slot.as_str()) {
                    self.step = BookingStep::SelectingSlot;
                    return Err(DraftError::at(
                        BookingStep::SelectingSlot,
                        "The chosen slot is not offered for this package.",
                    ));
                }
            }
        }
        if self.customer_name.trim().is_empty() || self.customer_phone.trim().is_empty() {
            self.step = BookingStep::AwaitingContactInfo;
            return Err(DraftError::at(
                BookingStep::AwaitingContactInfo,
                "Please fill in your contact details.",
            ));
        }
        self.step = BookingStep::AwaitingDepositPayment;
        Ok(())
    }

    /// The occupancy conflict path: the slot was taken between selection and
    /// payment. The draft returns to slot selection with the slot cleared.
    pub fn slot_conflict(&mut self) {
        self.slot = None;
        self.step = BookingStep::SelectingSlot;
    }

    /// Payment approved and the reservation persisted: clear every selection.
    pub fn reset(&mut self) {
        *self = BookingDraft::new(self.package);
    }

    pub fn guest_ceiling(&self) -> Option<u32> {
        self.space.map(|s| Package::get(self.package).max_guests(s))
    }
}
