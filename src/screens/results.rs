//! Results screen

use std::fmt::Write as _;

use crate::models::{Hotel, SearchParams};
use crate::services::DisplaySettings;

pub fn render(params: &SearchParams, hotels: &[Hotel], settings: &DisplaySettings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Hoteles disponibles");
    if !params.destination.is_empty() {
        let _ = writeln!(out, "{}", params.destination);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "Se encontraron {} hoteles", hotels.len());
    let _ = writeln!(out);

    for hotel in hotels {
        let badge = if hotel.popular { "  [Popular]" } else { "" };
        let _ = writeln!(out, "[{}] {}{}", hotel.id, hotel.name, badge);
        let _ = writeln!(out, "    ★ {}  ·  {}", hotel.rating, hotel.location);
        let _ = writeln!(
            out,
            "    {} por noche",
            settings.format_price(hotel.price_per_night)
        );
        let _ = writeln!(out, "    {}", hotel.description);
        let _ = writeln!(out);
    }
    out
}
