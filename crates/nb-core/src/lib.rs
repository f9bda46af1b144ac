//! notice-board/crates/nb-core/src/lib.rs
//!
//! The central domain logic and interface definitions for the notice board.

pub mod error;
pub mod filter;
pub mod models;
pub mod seed;
pub mod traits;

// Re-exporting for easier access in other crates
pub use error::*;
pub use filter::filter_notices;
pub use models::*;
pub use traits::*;
