//! Domain primitives shared by the Mercato API crates.
//!
//! Everything in here is pure logic with no HTTP or runtime dependencies:
//! the declarative route table, the request contracts its routes accept,
//! and the domain error type.

pub mod error;
pub mod requests;
pub mod routing;
pub mod types;
