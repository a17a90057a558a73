//! Ranked ("best match") search.

pub mod best_match;

pub use best_match::best_match;
