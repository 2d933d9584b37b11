//! Request handlers.
//!
//! Every declared route is currently served by [`placeholder`].

pub mod placeholder;
