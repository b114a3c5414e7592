//! Seat resolution
//!
//! Maps a user-facing (section, seat number) selection onto a concrete
//! seat row. Seat numbers in admin data are raw labels and may embed the
//! section prefix ("A-12", "A12", "12"); both sides are normalized before
//! comparison.

use shared::models::{Seat, SeatType};

/// Normalize a seat number for comparison: uppercase, strip a leading
/// section prefix and separators, strip leading zeros.
///
/// "A-012", "a 12" and "12" all normalize to "12" for section "A".
pub fn normalize_seat_number(raw: &str, section: &str) -> String {
    let mut s = raw.trim().to_uppercase();
    let prefix = section.trim().to_uppercase();
    if !prefix.is_empty()
        && let Some(rest) = s.strip_prefix(&prefix)
    {
        s = rest.to_string();
    }
    let s = s.trim_start_matches(['-', ' ', '.']);
    let trimmed = s.trim_start_matches('0');
    if trimmed.is_empty() && !s.is_empty() {
        // All-zero label ("00") keeps one zero
        "0".to_string()
    } else {
        trimmed.to_string()
    }
}

/// Find the concrete seat for a (section, number) selection
///
/// Placeholder and inactive seats never match.
pub fn resolve_seat<'a>(seats: &'a [Seat], section: &str, seat_number: &str) -> Option<&'a Seat> {
    let wanted_section = section.trim().to_uppercase();
    let wanted_number = normalize_seat_number(seat_number, section);
    seats.iter().find(|seat| {
        seat.is_active
            && seat.seat_type == SeatType::Normal
            && seat.section.trim().to_uppercase() == wanted_section
            && normalize_seat_number(&seat.seat_number, &seat.section) == wanted_number
    })
}
