//! End-to-end flow tests

use rust_decimal::Decimal;
use serde_json::Value;

use travelhub::{
    models::{Currency, SearchParams},
    screens, Catalog, DisplaySettings, FlowController, Screen,
};

fn madrid_params() -> SearchParams {
    SearchParams::new("Madrid", "2025-06-01", "2025-06-05", "3")
}

#[test]
fn test_full_booking_flow() {
    let settings = DisplaySettings::default();
    let mut flow = FlowController::new(Catalog::new());

    // Search screen, all fields filled.
    assert!(flow.submit_search(madrid_params()));

    // Results shows the whole catalog regardless of the destination.
    let results = match flow.current() {
        Screen::Results { params } => {
            assert_eq!(params, &madrid_params());
            screens::results::render(params, flow.catalog().list_all(), &settings)
        }
        other => panic!("expected results, got {}", other.name()),
    };
    assert!(results.contains("Se encontraron 6 hoteles"));

    // Select hotel 1 and check the rendered detail.
    assert!(flow.select_hotel(1));
    let detail = match flow.current() {
        Screen::Detail {
            params,
            hotel_id,
            confirmation,
        } => {
            let hotel = flow.catalog().find_by_id(*hotel_id).unwrap();
            assert_eq!(hotel.name, "Hotel Mediterráneo");
            screens::detail::render(hotel, params, confirmation, &settings)
        }
        other => panic!("expected detail, got {}", other.name()),
    };

    // Price formatted per the active currency (default COP): 120 * 4400.
    assert!(detail.contains("$\u{a0}528.000 por noche"));
    assert!(detail.contains("Entrada:   2025-06-01"));
    assert!(detail.contains("Salida:    2025-06-05"));
    assert!(detail.contains("Huéspedes: 3 persona(s)"));

    // Confirmation is cosmetic and changes no state.
    assert!(flow.confirm());
    assert!(matches!(flow.current(), Screen::Detail { .. }));
}

#[test]
fn test_empty_fields_are_a_silent_no_op() {
    let mut flow = FlowController::new(Catalog::new());
    assert!(!flow.submit_search(SearchParams::default()));
    assert!(!flow.submit_search(SearchParams::new("", "2025-06-01", "2025-06-05", "2")));
    assert_eq!(flow.current(), &Screen::Search);
}

#[test]
fn test_unresolvable_hotel_redirects_to_results() {
    let mut flow = FlowController::new(Catalog::new());
    flow.submit_search(madrid_params());

    assert!(!flow.select_hotel(999));
    match flow.current() {
        // Still on results, parameters intact, no detail content rendered.
        Screen::Results { params } => assert_eq!(params, &madrid_params()),
        other => panic!("expected results, got {}", other.name()),
    }
}

#[test]
fn test_qr_payload_carries_booking_details() {
    let mut flow = FlowController::new(Catalog::new());
    flow.submit_search(madrid_params());
    flow.select_hotel(3);

    let payload = match flow.current() {
        Screen::Detail { confirmation, .. } => confirmation.qr_payload(),
        other => panic!("expected detail, got {}", other.name()),
    };
    let value: Value = serde_json::from_str(&payload).unwrap();

    assert_eq!(value["hotel"], "Beach Resort Vista");
    assert_eq!(value["hotelId"], 3);
    assert_eq!(value["checkIn"], "2025-06-01");
    assert_eq!(value["checkOut"], "2025-06-05");
    assert_eq!(value["guests"], "3");

    let code = value["confirmationCode"].as_str().unwrap();
    assert!(code.starts_with("TH-"));
    assert_eq!(code.len(), 12);
    assert!(code[3..]
        .chars()
        .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase()));
}

#[test]
fn test_currency_switch_mid_flow() {
    let mut settings = DisplaySettings::default();
    let mut flow = FlowController::new(Catalog::new());
    flow.submit_search(madrid_params());
    flow.select_hotel(3);

    let hotel = flow.catalog().find_by_id(3).unwrap();
    assert_eq!(hotel.price_per_night, Decimal::from(180));
    assert_eq!(settings.format_price(hotel.price_per_night), "$\u{a0}792.000");

    // Switching the currency reformats without touching the flow state.
    settings = settings.with_currency(Currency::Usd);
    assert_eq!(settings.format_price(hotel.price_per_night), "$198");
    assert!(matches!(flow.current(), Screen::Detail { .. }));
}

#[test]
fn test_back_returns_without_losing_parameters() {
    let mut flow = FlowController::new(Catalog::new());
    flow.submit_search(madrid_params());
    flow.select_hotel(6);

    assert!(flow.back());
    match flow.current() {
        Screen::Results { params } => assert_eq!(params, &madrid_params()),
        other => panic!("expected results, got {}", other.name()),
    }
    assert!(flow.back());
    assert_eq!(flow.current(), &Screen::Search);
}
