//! Booking wizard state machine
//!
//! The multi-step booking flow (Date → Zone → Seat → Session → Content →
//! Review) as an explicit state machine with guarded transitions, instead
//! of a step counter with ad hoc branches. Edit mode enters directly at
//! Session with date/zone/seat fixed; `back` from Session in edit mode
//! returns to Date and leaves editing.

pub mod machine;

pub use machine::{BookingDraft, BookingWizard, WizardError, WizardMode, WizardStep};
