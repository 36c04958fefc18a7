//! Tracing support for boxes.
//!
//! Provides [`OptionalBoxTracingExt::trace_state`], a tap that records whether
//! a box is present at some point in a pipeline. Feature-gated behind
//! `#[cfg(feature = "tracing")]`; the combinators themselves never log.

use crate::OptionalBox;

/// Extension trait for recording box state as tracing events.
///
/// This trait is only available when the `tracing` feature is enabled.
pub trait OptionalBoxTracingExt: Sized {
    /// Emit a `DEBUG` event with `label` and a `present` flag, then return
    /// the box unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    /// use optional_box::trace::OptionalBoxTracingExt;
    ///
    /// let port = OptionalBox::of("8080")
    ///     .map_partial(|s| s.parse::<u16>().ok())
    ///     .trace_state("parse_port");
    ///
    /// assert_eq!(port, OptionalBox::of(8080));
    /// ```
    fn trace_state(self, label: &'static str) -> Self;
}

impl<T> OptionalBoxTracingExt for OptionalBox<T> {
    fn trace_state(self, label: &'static str) -> Self {
        tracing::debug!(label, present = self.is_present(), "optional box state");
        self
    }
}
