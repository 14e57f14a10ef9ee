//! Screen flow controller

use crate::catalog::Catalog;
use crate::models::{BookingConfirmation, SearchParams};

/// One screen of the booking flow, together with the state captured when it
/// was entered.
#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    Search,
    Results {
        params: SearchParams,
    },
    Detail {
        params: SearchParams,
        hotel_id: i64,
        confirmation: BookingConfirmation,
    },
}

impl Screen {
    pub fn name(&self) -> &'static str {
        match self {
            Screen::Search => "search",
            Screen::Results { .. } => "results",
            Screen::Detail { .. } => "detail",
        }
    }
}

/// Mediates screen-to-screen transitions and parameter forwarding.
///
/// The back stack plays the role of browser history: going back pops to the
/// previously pushed screen state, so forwarded parameters survive exactly as
/// pushed. All state is session-scoped and dies with the controller.
#[derive(Debug, Clone)]
pub struct FlowController {
    catalog: Catalog,
    current: Screen,
    back_stack: Vec<Screen>,
}

impl FlowController {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            current: Screen::Search,
            back_stack: Vec::new(),
        }
    }

    pub fn current(&self) -> &Screen {
        &self.current
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Search -> Results.
    ///
    /// Guarded: fires only when destination, check-in and check-out are all
    /// non-empty. A failed guard is a silent no-op with no user-visible
    /// message. On success the forwarded bundle equals the submitted values
    /// exactly.
    pub fn submit_search(&mut self, params: SearchParams) -> bool {
        if !matches!(self.current, Screen::Search) {
            tracing::debug!(screen = self.current.name(), "submit ignored off the search screen");
            return false;
        }
        if let Err(err) = params.ensure_submittable() {
            tracing::debug!(%err, "search submit refused");
            return false;
        }

        tracing::info!(destination = %params.destination, "search submitted");
        self.push(Screen::Results { params });
        true
    }

    /// Results -> Detail.
    ///
    /// Looks the hotel up in the catalog and generates the booking
    /// confirmation for this attempt on the way in. An id that does not
    /// resolve stays on the results listing with nothing surfaced to the
    /// user; this is the only error path in the system.
    pub fn select_hotel(&mut self, hotel_id: i64) -> bool {
        let params = match &self.current {
            Screen::Results { params } => params.clone(),
            _ => {
                tracing::debug!(screen = self.current.name(), "selection ignored off the results screen");
                return false;
            }
        };

        match self.catalog.get(hotel_id) {
            Ok(hotel) => {
                let confirmation = BookingConfirmation::generate(hotel, Some(&params));
                self.push(Screen::Detail {
                    params,
                    hotel_id,
                    confirmation,
                });
                true
            }
            Err(err) => {
                tracing::debug!(%err, "hotel lookup failed, staying on results");
                false
            }
        }
    }

    /// Detail -> terminal confirmation.
    ///
    /// Cosmetic acknowledgement only: nothing is persisted and no transition
    /// happens, so the answer is simply whether there is a booking attempt to
    /// acknowledge.
    pub fn confirm(&self) -> bool {
        match self.current {
            Screen::Detail { .. } => {
                tracing::info!("reservation confirmed (cosmetic)");
                true
            }
            _ => false,
        }
    }

    /// Pop to the previous screen. No-op on the search screen.
    pub fn back(&mut self) -> bool {
        match self.back_stack.pop() {
            Some(previous) => {
                self.current = previous;
                tracing::debug!(screen = self.current.name(), "went back");
                true
            }
            None => false,
        }
    }

    fn push(&mut self, next: Screen) {
        let previous = std::mem::replace(&mut self.current, next);
        self.back_stack.push(previous);
        tracing::debug!(screen = self.current.name(), "entered screen");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn controller() -> FlowController {
        FlowController::new(Catalog::new())
    }

    fn madrid() -> SearchParams {
        SearchParams::new("Madrid", "2025-06-01", "2025-06-05", "3")
    }

    #[test]
    fn test_starts_on_search() {
        assert_eq!(controller().current(), &Screen::Search);
    }

    #[test]
    fn test_submit_with_empty_field_never_transitions() {
        let mut flow = controller();
        for params in [
            SearchParams::new("", "2025-06-01", "2025-06-05", "2"),
            SearchParams::new("Madrid", "", "2025-06-05", "2"),
            SearchParams::new("Madrid", "2025-06-01", "", "2"),
        ] {
            assert!(!flow.submit_search(params));
            assert_eq!(flow.current(), &Screen::Search);
        }
    }

    #[test]
    fn test_submit_forwards_exact_bundle() {
        let mut flow = controller();
        assert!(flow.submit_search(madrid()));
        match flow.current() {
            Screen::Results { params } => assert_eq!(params, &madrid()),
            other => panic!("expected results, got {}", other.name()),
        }
    }

    #[test]
    fn test_untouched_guests_defaults_to_two() {
        let mut flow = controller();
        let params = SearchParams {
            destination: "Madrid".to_string(),
            check_in: "2025-06-01".to_string(),
            check_out: "2025-06-05".to_string(),
            ..SearchParams::default()
        };
        assert!(flow.submit_search(params));
        match flow.current() {
            Screen::Results { params } => assert_eq!(params.guests, "2"),
            other => panic!("expected results, got {}", other.name()),
        }
    }

    #[test]
    fn test_select_resolves_hotel_three() {
        let mut flow = controller();
        flow.submit_search(madrid());
        assert!(flow.select_hotel(3));

        match flow.current() {
            Screen::Detail { hotel_id, .. } => {
                let hotel = flow.catalog().find_by_id(*hotel_id).unwrap();
                assert_eq!(hotel.name, "Beach Resort Vista");
                assert_eq!(hotel.price_per_night, Decimal::from(180));
            }
            other => panic!("expected detail, got {}", other.name()),
        }
    }

    #[test]
    fn test_absent_id_stays_on_results() {
        let mut flow = controller();
        flow.submit_search(madrid());
        assert!(!flow.select_hotel(999));
        assert!(matches!(flow.current(), Screen::Results { .. }));
    }

    #[test]
    fn test_confirmation_stable_for_one_attempt() {
        let mut flow = controller();
        flow.submit_search(madrid());
        flow.select_hotel(1);

        let first = match flow.current() {
            Screen::Detail { confirmation, .. } => confirmation.clone(),
            other => panic!("expected detail, got {}", other.name()),
        };
        // Re-reading the same detail state yields the same code.
        match flow.current() {
            Screen::Detail { confirmation, .. } => {
                assert_eq!(confirmation.confirmation_code, first.confirmation_code)
            }
            other => panic!("expected detail, got {}", other.name()),
        }
        assert_eq!(first.check_in.as_deref(), Some("2025-06-01"));
        assert_eq!(first.guests.as_deref(), Some("3"));
    }

    #[test]
    fn test_distinct_attempts_get_distinct_codes() {
        let mut flow = controller();
        flow.submit_search(madrid());
        flow.select_hotel(1);
        let first = match flow.current() {
            Screen::Detail { confirmation, .. } => confirmation.confirmation_code.clone(),
            other => panic!("expected detail, got {}", other.name()),
        };

        flow.back();
        flow.select_hotel(1);
        let second = match flow.current() {
            Screen::Detail { confirmation, .. } => confirmation.confirmation_code.clone(),
            other => panic!("expected detail, got {}", other.name()),
        };
        // 36^9 possibilities; a collision here means the generator is broken.
        assert_ne!(first, second);
    }

    #[test]
    fn test_back_pops_without_parameter_loss() {
        let mut flow = controller();
        flow.submit_search(madrid());
        flow.select_hotel(2);

        assert!(flow.back());
        match flow.current() {
            Screen::Results { params } => assert_eq!(params, &madrid()),
            other => panic!("expected results, got {}", other.name()),
        }

        assert!(flow.back());
        assert_eq!(flow.current(), &Screen::Search);
        assert!(!flow.back());
    }

    #[test]
    fn test_confirm_only_acknowledges_on_detail() {
        let mut flow = controller();
        assert!(!flow.confirm());
        flow.submit_search(madrid());
        assert!(!flow.confirm());
        flow.select_hotel(1);
        assert!(flow.confirm());
        // No transition: still on the detail screen.
        assert!(matches!(flow.current(), Screen::Detail { .. }));
    }

    #[test]
    fn test_select_ignored_off_results() {
        let mut flow = controller();
        assert!(!flow.select_hotel(1));
        assert_eq!(flow.current(), &Screen::Search);
    }
}
