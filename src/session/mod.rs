//! Form session
//!
//! Holds the values a console user has entered into the registration form.

pub mod state;

pub use state::FormSession;
