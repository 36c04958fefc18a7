//! Testing utilities for code built on `OptionalBox`
//!
//! Assertion macros that print the offending box on failure, and (behind the
//! `proptest` feature) an `Arbitrary` implementation for property tests.
//!
//! # Examples
//!
//! ```rust
//! use optional_box::{assert_absent, assert_present, assert_present_eq, OptionalBox};
//!
//! assert_present!(OptionalBox::of(42));
//! assert_present_eq!(OptionalBox::of(42), 42);
//! assert_absent!(OptionalBox::of(42).filter(|x| *x < 0));
//! ```

/// Assert that a box holds a value.
///
/// # Example
///
/// ```rust
/// use optional_box::{OptionalBox, assert_present};
///
/// assert_present!(OptionalBox::of("x"));
/// ```
#[macro_export]
macro_rules! assert_present {
    ($boxed:expr) => {
        match $boxed {
            $crate::OptionalBox::Present(_) => {}
            $crate::OptionalBox::Absent => {
                panic!("Expected Present, got Absent");
            }
        }
    };
}

/// Assert that a box holds nothing.
///
/// # Example
///
/// ```rust
/// use optional_box::{OptionalBox, assert_absent};
///
/// assert_absent!(OptionalBox::<i32>::absent());
/// ```
#[macro_export]
macro_rules! assert_absent {
    ($boxed:expr) => {
        match $boxed {
            $crate::OptionalBox::Absent => {}
            $crate::OptionalBox::Present(v) => {
                panic!("Expected Absent, got Present: {:?}", v);
            }
        }
    };
}

/// Assert that a box holds a specific value.
///
/// # Example
///
/// ```rust
/// use optional_box::{OptionalBox, assert_present_eq};
///
/// assert_present_eq!(OptionalBox::of(2).map(|x| x + 1), 3);
/// ```
#[macro_export]
macro_rules! assert_present_eq {
    ($boxed:expr, $expected:expr) => {
        match $boxed {
            $crate::OptionalBox::Present(v) => {
                assert_eq!(v, $expected);
            }
            $crate::OptionalBox::Absent => {
                panic!("Expected Present({:?}), got Absent", $expected);
            }
        }
    };
}

#[cfg(feature = "proptest")]
use crate::OptionalBox;
#[cfg(feature = "proptest")]
use proptest::prelude::*;

#[cfg(feature = "proptest")]
impl<T> Arbitrary for OptionalBox<T>
where
    T: Arbitrary + 'static,
{
    type Parameters = T::Parameters;
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(args: Self::Parameters) -> Self::Strategy {
        proptest::option::of(any_with::<T>(args))
            .prop_map(OptionalBox::new)
            .boxed()
    }
}
