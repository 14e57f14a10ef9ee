//! Search screen

use std::fmt::Write as _;

use crate::services::DisplaySettings;

/// Quick-pick destinations offered under the form.
pub const POPULAR_DESTINATIONS: [&str; 4] = ["Barcelona", "Madrid", "Valencia", "Sevilla"];

pub fn render(settings: &DisplaySettings) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "TravelHub");
    let _ = writeln!(out, "Encuentra tu hotel ideal");
    let _ = writeln!(
        out,
        "[idioma: {} | moneda: {}]",
        settings.language(),
        settings.currency()
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Buscar hoteles");
    let _ = writeln!(out, "  Destino");
    let _ = writeln!(out, "  Fecha de entrada");
    let _ = writeln!(out, "  Fecha de salida");
    let _ = writeln!(out, "  Cantidad de personas (1-10, por defecto 2)");
    let _ = writeln!(out);
    let _ = writeln!(out, "Destinos populares:");
    for city in POPULAR_DESTINATIONS {
        let _ = writeln!(out, "  - {}", city);
    }
    out
}
