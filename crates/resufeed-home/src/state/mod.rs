//! View state for the landing page.

pub mod home_state;

pub use home_state::*;
