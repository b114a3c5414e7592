//! Wizard step machine

use std::collections::HashMap;

use chrono::NaiveDate;
use thiserror::Error;

/// Named wizard steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardStep {
    Date,
    Zone,
    Seat,
    Session,
    Content,
    Review,
    Done,
}

/// Creation vs edit flow
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardMode {
    New,
    /// Editing an existing booking set: seat is locked, only sessions and
    /// content may change
    Edit,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum WizardError {
    #[error("Step mismatch: this input belongs to an earlier or later step")]
    StepMismatch,

    #[error("Nothing selected")]
    EmptySelection,

    #[error("The seat cannot be changed while editing a booking")]
    SeatLocked,
}

/// Everything the coordinator needs, produced by a confirmed wizard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDraft {
    pub date: NaiveDate,
    pub zone_id: i64,
    pub section: String,
    pub seat_number: String,
    pub session_ids: Vec<i64>,
    pub study_content: HashMap<i64, String>,
    pub replacing_booking_ids: Vec<i64>,
}

/// The booking wizard: owns step sequencing only. Rule checks (window,
/// access) run in the orchestration layer between transitions; the wizard
/// just refuses inputs that don't belong to the current step.
#[derive(Debug, Clone)]
pub struct BookingWizard {
    step: WizardStep,
    mode: WizardMode,
    date: Option<NaiveDate>,
    zone_id: Option<i64>,
    section: Option<String>,
    seat_number: Option<String>,
    session_ids: Vec<i64>,
    study_content: HashMap<i64, String>,
    replacing_booking_ids: Vec<i64>,
}

impl BookingWizard {
    /// Start a fresh booking flow at the Date step
    pub fn new() -> Self {
        Self {
            step: WizardStep::Date,
            mode: WizardMode::New,
            date: None,
            zone_id: None,
            section: None,
            seat_number: None,
            session_ids: Vec::new(),
            study_content: HashMap::new(),
            replacing_booking_ids: Vec::new(),
        }
    }

    /// Start an edit flow: jumps straight to Session with the prior
    /// date/zone/seat fixed and the bookings to replace recorded
    pub fn edit(
        date: NaiveDate,
        zone_id: i64,
        section: impl Into<String>,
        seat_number: impl Into<String>,
        replacing_booking_ids: Vec<i64>,
    ) -> Self {
        Self {
            step: WizardStep::Session,
            mode: WizardMode::Edit,
            date: Some(date),
            zone_id: Some(zone_id),
            section: Some(section.into()),
            seat_number: Some(seat_number.into()),
            session_ids: Vec::new(),
            study_content: HashMap::new(),
            replacing_booking_ids,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn mode(&self) -> WizardMode {
        self.mode
    }

    pub fn select_date(&mut self, date: NaiveDate) -> Result<(), WizardError> {
        if self.step != WizardStep::Date {
            return Err(WizardError::StepMismatch);
        }
        self.date = Some(date);
        self.step = WizardStep::Zone;
        Ok(())
    }

    pub fn select_zone(&mut self, zone_id: i64) -> Result<(), WizardError> {
        if self.step != WizardStep::Zone {
            return Err(WizardError::StepMismatch);
        }
        self.zone_id = Some(zone_id);
        self.step = WizardStep::Seat;
        Ok(())
    }

    /// Confirm a seat. The caller runs the access-restriction check
    /// before this transition: denial keeps the wizard at Seat.
    pub fn select_seat(
        &mut self,
        section: impl Into<String>,
        seat_number: impl Into<String>,
    ) -> Result<(), WizardError> {
        if self.mode == WizardMode::Edit {
            return Err(WizardError::SeatLocked);
        }
        if self.step != WizardStep::Seat {
            return Err(WizardError::StepMismatch);
        }
        self.section = Some(section.into());
        self.seat_number = Some(seat_number.into());
        self.step = WizardStep::Session;
        Ok(())
    }

    pub fn select_sessions(&mut self, session_ids: Vec<i64>) -> Result<(), WizardError> {
        if self.step != WizardStep::Session {
            return Err(WizardError::StepMismatch);
        }
        if session_ids.is_empty() {
            return Err(WizardError::EmptySelection);
        }
        self.session_ids = session_ids;
        self.step = WizardStep::Content;
        Ok(())
    }

    pub fn set_content(&mut self, content: HashMap<i64, String>) -> Result<(), WizardError> {
        if self.step != WizardStep::Content {
            return Err(WizardError::StepMismatch);
        }
        self.study_content = content;
        self.step = WizardStep::Review;
        Ok(())
    }

    /// Confirm at Review, yielding the draft for the coordinator
    pub fn confirm(&mut self) -> Result<BookingDraft, WizardError> {
        if self.step != WizardStep::Review {
            return Err(WizardError::StepMismatch);
        }
        // All selections are present by construction of the transitions
        let draft = BookingDraft {
            date: self.date.ok_or(WizardError::StepMismatch)?,
            zone_id: self.zone_id.ok_or(WizardError::StepMismatch)?,
            section: self.section.clone().ok_or(WizardError::StepMismatch)?,
            seat_number: self.seat_number.clone().ok_or(WizardError::StepMismatch)?,
            session_ids: self.session_ids.clone(),
            study_content: self.study_content.clone(),
            replacing_booking_ids: self.replacing_booking_ids.clone(),
        };
        self.step = WizardStep::Done;
        Ok(draft)
    }

    /// Step backwards. In edit mode, `back` from Session abandons the
    /// edit: the wizard returns to Date as a fresh creation flow.
    pub fn back(&mut self) {
        if self.mode == WizardMode::Edit && self.step == WizardStep::Session {
            *self = Self::new();
            return;
        }
        self.step = match self.step {
            WizardStep::Date | WizardStep::Done => self.step,
            WizardStep::Zone => WizardStep::Date,
            WizardStep::Seat => WizardStep::Zone,
            WizardStep::Session => WizardStep::Seat,
            WizardStep::Content => WizardStep::Session,
            WizardStep::Review => WizardStep::Content,
        };
    }
}

impl Default for BookingWizard {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn content(session_id: i64, text: &str) -> HashMap<i64, String> {
        HashMap::from([(session_id, text.to_string())])
    }

    #[test]
    fn full_creation_flow() {
        let mut w = BookingWizard::new();
        assert_eq!(w.step(), WizardStep::Date);

        w.select_date(date(2024, 3, 4)).unwrap();
        w.select_zone(7).unwrap();
        w.select_seat("A", "A-12").unwrap();
        w.select_sessions(vec![1, 2]).unwrap();
        w.set_content(content(1, "math review")).unwrap();
        assert_eq!(w.step(), WizardStep::Review);

        let draft = w.confirm().unwrap();
        assert_eq!(w.step(), WizardStep::Done);
        assert_eq!(draft.date, date(2024, 3, 4));
        assert_eq!(draft.zone_id, 7);
        assert_eq!(draft.section, "A");
        assert_eq!(draft.session_ids, vec![1, 2]);
        assert!(draft.replacing_booking_ids.is_empty());
    }

    #[test]
    fn inputs_for_other_steps_are_rejected() {
        let mut w = BookingWizard::new();
        assert_eq!(w.select_zone(1), Err(WizardError::StepMismatch));
        assert_eq!(
            w.select_sessions(vec![1]),
            Err(WizardError::StepMismatch)
        );
        assert_eq!(w.confirm().unwrap_err(), WizardError::StepMismatch);

        w.select_date(date(2024, 3, 4)).unwrap();
        assert_eq!(
            w.select_date(date(2024, 3, 5)),
            Err(WizardError::StepMismatch)
        );
    }

    #[test]
    fn empty_session_selection_is_rejected() {
        let mut w = BookingWizard::new();
        w.select_date(date(2024, 3, 4)).unwrap();
        w.select_zone(7).unwrap();
        w.select_seat("A", "1").unwrap();
        assert_eq!(w.select_sessions(vec![]), Err(WizardError::EmptySelection));
        assert_eq!(w.step(), WizardStep::Session);
    }

    #[test]
    fn edit_mode_starts_at_session_with_seat_locked() {
        let mut w = BookingWizard::edit(date(2024, 3, 4), 7, "A", "A-12", vec![100, 101]);
        assert_eq!(w.step(), WizardStep::Session);
        assert_eq!(w.mode(), WizardMode::Edit);
        assert_eq!(w.select_seat("B", "1"), Err(WizardError::SeatLocked));

        w.select_sessions(vec![2]).unwrap();
        w.set_content(HashMap::new()).unwrap();
        let draft = w.confirm().unwrap();
        assert_eq!(draft.replacing_booking_ids, vec![100, 101]);
        assert_eq!(draft.section, "A");
    }

    #[test]
    fn back_from_session_in_edit_mode_returns_to_date() {
        let mut w = BookingWizard::edit(date(2024, 3, 4), 7, "A", "A-12", vec![100]);
        w.back();
        assert_eq!(w.step(), WizardStep::Date);
        assert_eq!(w.mode(), WizardMode::New);
        assert!(w.replacing_booking_ids.is_empty());
    }

    #[test]
    fn back_walks_the_creation_flow_in_reverse() {
        let mut w = BookingWizard::new();
        w.select_date(date(2024, 3, 4)).unwrap();
        w.select_zone(7).unwrap();
        w.select_seat("A", "1").unwrap();
        assert_eq!(w.step(), WizardStep::Session);

        w.back();
        assert_eq!(w.step(), WizardStep::Seat);
        w.back();
        assert_eq!(w.step(), WizardStep::Zone);
        w.back();
        assert_eq!(w.step(), WizardStep::Date);
        w.back();
        assert_eq!(w.step(), WizardStep::Date);
    }
}
