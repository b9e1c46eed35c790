//! Application state module

mod app_state;
mod field;
mod form;
mod lead;
mod submission;

pub use app_state::*;
pub use field::*;
pub use form::*;
pub use lead::*;
pub use submission::*;
