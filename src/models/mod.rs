//! Data models for TravelHub

pub mod booking;
pub mod enums;
pub mod hotel;
pub mod search;

// Re-export commonly used types
pub use booking::BookingConfirmation;
pub use enums::{Currency, Language};
pub use hotel::Hotel;
pub use search::SearchParams;
