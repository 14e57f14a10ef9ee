//! Booking confirmation payload

use rand::Rng;
use serde::Serialize;

use crate::models::{Hotel, SearchParams};

/// Fixed prefix of every confirmation code.
pub const CODE_PREFIX: &str = "TH-";

/// Alphabet and length of the random part of a confirmation code.
const CODE_CHARSET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const CODE_LEN: usize = 9;

/// The payload encoded into the check-in QR code.
///
/// Generated once per booking attempt, when the flow enters the detail
/// screen, and kept for that attempt's lifetime: re-rendering the same detail
/// state shows the same confirmation code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingConfirmation {
    pub hotel: String,
    pub hotel_id: i64,
    pub check_in: Option<String>,
    pub check_out: Option<String>,
    pub guests: Option<String>,
    pub confirmation_code: String,
}

impl BookingConfirmation {
    /// Build the confirmation for one booking attempt, copying the search
    /// parameters when they were forwarded.
    pub fn generate(hotel: &Hotel, params: Option<&SearchParams>) -> Self {
        Self {
            hotel: hotel.name.clone(),
            hotel_id: hotel.id,
            check_in: params.map(|p| p.check_in.clone()),
            check_out: params.map(|p| p.check_out.clone()),
            guests: params.map(|p| p.guests.clone()),
            confirmation_code: confirmation_code(),
        }
    }

    /// Structured text rendered into the scannable check-in code.
    pub fn qr_payload(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

/// `TH-` plus nine uppercase alphanumerics from a non-cryptographic source.
fn confirmation_code() -> String {
    let mut rng = rand::thread_rng();
    let tail: String = (0..CODE_LEN)
        .map(|_| CODE_CHARSET[rng.gen_range(0..CODE_CHARSET.len())] as char)
        .collect();
    format!("{}{}", CODE_PREFIX, tail)
}
