//! Terminal renderings of the three screens
//!
//! Presentation only. Screens read the current flow state and the catalog,
//! format prices through the display settings, and return the text the
//! session prints; the interactive loop in the binary owns the actual I/O and
//! triggers the flow transitions.

pub mod detail;
pub mod results;
pub mod search;
