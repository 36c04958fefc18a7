//! # optional-box
//!
//! An immutable container for zero or one value, with combinators that
//! remove presence checks from call sites.
//!
//! The distinguishing feature is the "other branch" hook: combinators that can
//! drop a present value ([`OptionalBox::filter_or_else`],
//! [`OptionalBox::map_partial_or_else`]) accept a callback that runs exactly
//! when that happens, and never otherwise.
//!
//! ## Quick Example
//!
//! ```rust
//! use optional_box::OptionalBox;
//!
//! fn parse_port(raw: Option<&str>, rejected: &mut Vec<String>) -> u16 {
//!     OptionalBox::new(raw)
//!         .filter_or_else(|s| !s.is_empty(), |s| rejected.push(format!("empty: {:?}", s)))
//!         .map_partial_or_else(|s| s.parse::<u16>().ok(), |s| rejected.push(s.to_string()))
//!         .get_or(8080)
//! }
//!
//! let mut rejected = Vec::new();
//! assert_eq!(parse_port(Some("443"), &mut rejected), 443);
//! assert_eq!(parse_port(None, &mut rejected), 8080);
//! assert_eq!(parse_port(Some("http"), &mut rejected), 8080);
//! assert_eq!(rejected, vec!["http".to_string()]);
//! ```
//!
//! ## Features
//!
//! - `serde`: `Serialize`/`Deserialize` with the same shape as `Option<T>`
//! - `tracing`: the [`trace`] module, for recording box state as events
//! - `proptest`: an `Arbitrary` implementation for property tests

#![warn(missing_docs)]
#![warn(missing_debug_implementations)]

pub mod error;
pub mod optional_box;
#[cfg(feature = "serde")]
mod serde_impl;
pub mod testing;
#[cfg(feature = "tracing")]
pub mod trace;

// Re-exports
pub use error::AbsentError;
pub use optional_box::OptionalBox;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::AbsentError;
    pub use crate::optional_box::OptionalBox;
    #[cfg(feature = "tracing")]
    pub use crate::trace::OptionalBoxTracingExt;
}
