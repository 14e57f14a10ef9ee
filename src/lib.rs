//! TravelHub hotel search/booking demo
//!
//! A search form, a results listing, and a detail/confirmation screen with a
//! generated check-in payload, backed by an in-memory static hotel catalog.
//! There is no server, no persistence and no real booking logic: confirming a
//! reservation is a cosmetic acknowledgement.

pub mod catalog;
pub mod config;
pub mod error;
pub mod flow;
pub mod models;
pub mod screens;
pub mod services;

pub use catalog::Catalog;
pub use config::AppConfig;
pub use error::{AppError, AppResult};
pub use flow::{FlowController, Screen};
pub use services::DisplaySettings;
