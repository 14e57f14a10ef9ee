//! Business logic services

pub mod pricing;
pub mod settings;

pub use settings::DisplaySettings;
