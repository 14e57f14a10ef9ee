//! Detail / confirmation screen

use std::fmt::Write as _;

use crate::models::{BookingConfirmation, Hotel, SearchParams};
use crate::services::DisplaySettings;

/// Static notice shown above the check-in code; there is no actual lock.
pub const ROOM_LOCK_NOTICE: &str =
    "Tu habitación se mantendrá bloqueada por 15 minutos. ¡Reserva pronto!";

/// Cosmetic acknowledgement shown on confirmation; nothing is persisted.
pub const CONFIRMED_MESSAGE: &str =
    "¡Reserva confirmada! Recibirás un correo con los detalles.";

/// Fixed amenity list; every hotel advertises the same three.
pub const AMENITIES: [&str; 3] = ["WiFi gratuito", "Desayuno incluido", "Estacionamiento"];

pub fn render(
    hotel: &Hotel,
    params: &SearchParams,
    confirmation: &BookingConfirmation,
    settings: &DisplaySettings,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Detalles del hotel");
    let _ = writeln!(out);
    let _ = writeln!(out, "{}  ★ {}", hotel.name, hotel.rating);
    let _ = writeln!(out, "{}", hotel.location);
    let _ = writeln!(
        out,
        "{} por noche",
        settings.format_price(hotel.price_per_night)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Descripción");
    let _ = writeln!(out, "  {}", hotel.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "Servicios");
    for amenity in AMENITIES {
        let _ = writeln!(out, "  - {}", amenity);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", ROOM_LOCK_NOTICE);
    let _ = writeln!(out);
    let _ = writeln!(out, "Código QR para Check-in:");
    let _ = writeln!(out, "  {}", confirmation.qr_payload());
    let _ = writeln!(out, "  Presenta este código en la recepción del hotel");
    let _ = writeln!(out);
    let _ = writeln!(out, "Resumen de reserva");
    let _ = writeln!(out, "  Entrada:   {}", params.check_in);
    let _ = writeln!(out, "  Salida:    {}", params.check_out);
    let _ = writeln!(out, "  Huéspedes: {} persona(s)", params.guests);
    out
}
