//! A zero-or-one value container with side-effect-aware combinators.
//!
//! `OptionalBox<T>` holds either a value (`Present`) or nothing (`Absent`).
//! The state is fixed at construction; every combinator hands back a box
//! instead of changing one in place.
//!
//! # The "other branch" callbacks
//!
//! Two combinators can report the moment a present value is lost:
//!
//! - [`OptionalBox::filter_or_else`] calls its `on_rejected` callback when the
//!   predicate turns a present box into an absent one.
//! - [`OptionalBox::map_partial_or_else`] calls its `on_map_to_empty` callback
//!   when the mapper produces nothing for a present value.
//!
//! Neither callback runs for a box that was already absent, and neither runs
//! when the value survives. Predicates and mappers are never called on an
//! absent box.
//!
//! # Examples
//!
//! ```rust
//! use optional_box::OptionalBox;
//! use std::cell::Cell;
//!
//! let rejected = Cell::new(0);
//!
//! let port = OptionalBox::of("80a")
//!     .filter_or_else(|s| s.chars().all(|c| c.is_ascii_digit()), |_| {
//!         rejected.set(rejected.get() + 1)
//!     })
//!     .map_partial(|s| s.parse::<u16>().ok());
//!
//! assert!(port.is_absent());
//! assert_eq!(rejected.get(), 1);
//! ```

use std::fmt;

use crate::error::AbsentError;

/// A value that is either `Present(T)` or `Absent`.
///
/// Unlike a nullable reference, absence is a variant of its own: a present
/// box can hold any value of `T`, including "zero-like" ones such as `0`,
/// `""` or `None`.
///
/// Combinators consume the box and return a box. Callbacks are `FnOnce`, so
/// each is invoked at most once per call, synchronously, on the caller's thread.
///
/// # Example
///
/// ```rust
/// use optional_box::OptionalBox;
///
/// let doubled = OptionalBox::of(20_071_226).map(|x| x * 2);
/// assert_eq!(doubled, OptionalBox::of(40_142_452));
///
/// let nothing: OptionalBox<i32> = OptionalBox::absent();
/// assert_eq!(nothing.map(|x| x * 2), OptionalBox::absent());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OptionalBox<T> {
    /// A stored value
    Present(T),
    /// No value
    Absent,
}

impl<T> OptionalBox<T> {
    // ========== Constructors ==========

    /// Wrap a value that may be missing.
    ///
    /// `None` produces an absent box; `Some(v)` a present one.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert!(OptionalBox::new(Some(1)).is_present());
    /// assert!(OptionalBox::<i32>::new(None).is_absent());
    /// ```
    #[inline]
    pub fn new(value: Option<T>) -> Self {
        match value {
            Some(v) => OptionalBox::Present(v),
            None => OptionalBox::Absent,
        }
    }

    /// Wrap a value that is known to be there.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let b = OptionalBox::of("value");
    /// assert_eq!(b.get(), Some(&"value"));
    /// ```
    #[inline]
    pub fn of(value: T) -> Self {
        OptionalBox::Present(value)
    }

    /// An empty box.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let b: OptionalBox<String> = OptionalBox::absent();
    /// assert!(b.is_absent());
    /// ```
    #[inline]
    pub fn absent() -> Self {
        OptionalBox::Absent
    }

    // ========== Predicates ==========

    /// Returns `true` if the box holds a value.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert!(OptionalBox::of(0).is_present());
    /// assert!(!OptionalBox::<i32>::absent().is_present());
    /// ```
    #[inline]
    pub fn is_present(&self) -> bool {
        matches!(self, OptionalBox::Present(_))
    }

    /// Returns `true` if the box holds nothing.
    #[inline]
    pub fn is_absent(&self) -> bool {
        !self.is_present()
    }

    // ========== Extractors ==========

    /// Borrow the stored value, if any.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert_eq!(OptionalBox::of(7).get(), Some(&7));
    /// assert_eq!(OptionalBox::<i32>::absent().get(), None);
    /// ```
    #[inline]
    pub fn get(&self) -> Option<&T> {
        match self {
            OptionalBox::Present(v) => Some(v),
            OptionalBox::Absent => None,
        }
    }

    /// Take the stored value out verbatim, absence included.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert_eq!(OptionalBox::of(7).into_inner(), Some(7));
    /// assert_eq!(OptionalBox::<i32>::absent().into_inner(), None);
    /// ```
    #[inline]
    pub fn into_inner(self) -> Option<T> {
        match self {
            OptionalBox::Present(v) => Some(v),
            OptionalBox::Absent => None,
        }
    }

    /// Returns the stored value, or `fallback` if the box is absent.
    ///
    /// `fallback` is evaluated by the caller before the call. Use
    /// [`get_or_compute`](Self::get_or_compute) to defer that work.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert_eq!(OptionalBox::of(1).get_or(0), 1);
    /// assert_eq!(OptionalBox::absent().get_or(0), 0);
    /// ```
    #[inline]
    pub fn get_or(self, fallback: T) -> T {
        match self {
            OptionalBox::Present(v) => v,
            OptionalBox::Absent => fallback,
        }
    }

    /// Returns the stored value, or the result of `supplier` if the box is absent.
    ///
    /// `supplier` only runs on the absent path, exactly once.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let name: OptionalBox<String> = OptionalBox::absent();
    /// assert_eq!(name.get_or_compute(|| "anonymous".to_string()), "anonymous");
    ///
    /// let name = OptionalBox::of("alice".to_string());
    /// assert_eq!(name.get_or_compute(|| unreachable!()), "alice");
    /// ```
    #[inline]
    pub fn get_or_compute<F>(self, supplier: F) -> T
    where
        F: FnOnce() -> T,
    {
        match self {
            OptionalBox::Present(v) => v,
            OptionalBox::Absent => supplier(),
        }
    }

    /// Returns the stored value, or an [`AbsentError`] if there is none.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert_eq!(OptionalBox::of(3).require(), Ok(3));
    /// assert!(OptionalBox::<i32>::absent().require().is_err());
    /// ```
    #[inline]
    pub fn require(self) -> Result<T, AbsentError> {
        self.into_inner().ok_or_else(AbsentError::new)
    }

    /// Like [`require`](Self::require), attaching `message` to the error.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let err = OptionalBox::<u16>::absent().require_with("port").unwrap_err();
    /// assert_eq!(err.to_string(), "value was absent: port");
    /// ```
    pub fn require_with(self, message: impl Into<String>) -> Result<T, AbsentError> {
        match self {
            OptionalBox::Present(v) => Ok(v),
            OptionalBox::Absent => Err(AbsentError::with_message(message)),
        }
    }

    /// Borrowing view of the box.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let b = OptionalBox::of("hello".to_string());
    /// let len = b.as_ref().map(|s| s.len());
    /// assert_eq!(len, OptionalBox::of(5));
    /// assert!(b.is_present());
    /// ```
    #[inline]
    pub fn as_ref(&self) -> OptionalBox<&T> {
        match self {
            OptionalBox::Present(v) => OptionalBox::Present(v),
            OptionalBox::Absent => OptionalBox::Absent,
        }
    }

    // ========== Filtering ==========

    /// Keep the value only if it satisfies `predicate`.
    ///
    /// An absent box stays absent and `predicate` is not called.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert_eq!(OptionalBox::of(4).filter(|x| x % 2 == 0), OptionalBox::of(4));
    /// assert_eq!(OptionalBox::of(3).filter(|x| x % 2 == 0), OptionalBox::absent());
    /// ```
    #[inline]
    pub fn filter<P>(self, predicate: P) -> Self
    where
        P: FnOnce(&T) -> bool,
    {
        self.filter_or_else(predicate, drop)
    }

    /// Keep the value only if it satisfies `predicate`, handing a rejected
    /// value to `on_rejected`.
    ///
    /// `on_rejected` runs exactly when a present box becomes absent: after the
    /// absent result is built, before it is returned. It never runs when the
    /// value passes, nor when the box was absent to begin with (in which case
    /// `predicate` is not called either).
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let mut rejected = Vec::new();
    /// let kept = OptionalBox::of("value").filter_or_else(|_| false, |v| rejected.push(v));
    ///
    /// assert!(kept.is_absent());
    /// assert_eq!(rejected, vec!["value"]);
    /// ```
    pub fn filter_or_else<P, R>(self, predicate: P, on_rejected: R) -> Self
    where
        P: FnOnce(&T) -> bool,
        R: FnOnce(T),
    {
        match self {
            OptionalBox::Present(value) => {
                if predicate(&value) {
                    return OptionalBox::Present(value);
                }
                let result = OptionalBox::Absent;
                on_rejected(value);
                result
            }
            OptionalBox::Absent => OptionalBox::Absent,
        }
    }

    // ========== Transformations ==========

    /// Transform the value with a mapper that always produces one.
    ///
    /// Presence is preserved: a present box maps to a present box, an absent
    /// box is re-typed to an absent `OptionalBox<Y>` without calling `mapper`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert_eq!(OptionalBox::of(21).map(|x| x * 2), OptionalBox::of(42));
    /// assert_eq!(OptionalBox::<i32>::absent().map(|x| x * 2), OptionalBox::absent());
    /// ```
    #[inline]
    pub fn map<Y, F>(self, mapper: F) -> OptionalBox<Y>
    where
        F: FnOnce(T) -> Y,
    {
        match self {
            OptionalBox::Present(v) => OptionalBox::Present(mapper(v)),
            OptionalBox::Absent => OptionalBox::Absent,
        }
    }

    /// Transform the value with a mapper that may produce nothing.
    ///
    /// A `None` from `mapper` yields an absent box.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let parsed = OptionalBox::of("42").map_partial(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, OptionalBox::of(42));
    ///
    /// let parsed = OptionalBox::of("x").map_partial(|s| s.parse::<i32>().ok());
    /// assert_eq!(parsed, OptionalBox::absent());
    /// ```
    #[inline]
    pub fn map_partial<Y, F>(self, mapper: F) -> OptionalBox<Y>
    where
        F: FnOnce(&T) -> Option<Y>,
    {
        self.map_partial_or_else(mapper, drop)
    }

    /// Transform the value with a mapper that may produce nothing, handing the
    /// original value to `on_map_to_empty` when it does.
    ///
    /// `on_map_to_empty` runs exactly when a present box maps to an absent one,
    /// after the result is computed and before it is returned. An absent box
    /// calls neither `mapper` nor `on_map_to_empty`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let mut unparsable = None;
    /// let port = OptionalBox::of("http")
    ///     .map_partial_or_else(|s| s.parse::<u16>().ok(), |s| unparsable = Some(s));
    ///
    /// assert!(port.is_absent());
    /// assert_eq!(unparsable, Some("http"));
    /// ```
    pub fn map_partial_or_else<Y, F, R>(self, mapper: F, on_map_to_empty: R) -> OptionalBox<Y>
    where
        F: FnOnce(&T) -> Option<Y>,
        R: FnOnce(T),
    {
        match self {
            OptionalBox::Present(value) => match mapper(&value) {
                Some(mapped) => OptionalBox::Present(mapped),
                None => {
                    let result = OptionalBox::Absent;
                    on_map_to_empty(value);
                    result
                }
            },
            OptionalBox::Absent => OptionalBox::Absent,
        }
    }

    /// Chain a computation that itself returns a box.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// fn half(x: i32) -> OptionalBox<i32> {
    ///     if x % 2 == 0 { OptionalBox::of(x / 2) } else { OptionalBox::absent() }
    /// }
    ///
    /// assert_eq!(OptionalBox::of(8).and_then(half).and_then(half), OptionalBox::of(2));
    /// assert_eq!(OptionalBox::of(6).and_then(half).and_then(half), OptionalBox::absent());
    /// ```
    #[inline]
    pub fn and_then<Y, F>(self, f: F) -> OptionalBox<Y>
    where
        F: FnOnce(T) -> OptionalBox<Y>,
    {
        match self {
            OptionalBox::Present(v) => f(v),
            OptionalBox::Absent => OptionalBox::Absent,
        }
    }

    /// Returns `self` if present, otherwise `other`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert_eq!(OptionalBox::of(1).or(OptionalBox::of(2)), OptionalBox::of(1));
    /// assert_eq!(OptionalBox::absent().or(OptionalBox::of(2)), OptionalBox::of(2));
    /// ```
    #[inline]
    pub fn or(self, other: Self) -> Self {
        match self {
            OptionalBox::Present(_) => self,
            OptionalBox::Absent => other,
        }
    }

    /// Returns `self` if present, otherwise the box produced by `f`.
    #[inline]
    pub fn or_else<F>(self, f: F) -> Self
    where
        F: FnOnce() -> Self,
    {
        match self {
            OptionalBox::Present(_) => self,
            OptionalBox::Absent => f(),
        }
    }

    // ========== Side Effects ==========

    /// Run `consumer` on the value, if present, and return the box unchanged.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let mut seen = Vec::new();
    /// let b = OptionalBox::of(5).for_each(|v| seen.push(*v));
    ///
    /// assert_eq!(b, OptionalBox::of(5));
    /// assert_eq!(seen, vec![5]);
    /// ```
    #[inline]
    pub fn for_each<F>(self, consumer: F) -> Self
    where
        F: FnOnce(&T),
    {
        if let OptionalBox::Present(v) = &self {
            consumer(v);
        }
        self
    }

    // ========== Fallible Callbacks ==========

    /// Like [`filter`](Self::filter), with a predicate that can fail.
    ///
    /// The predicate's error is returned untouched.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let checked = OptionalBox::of("17").try_filter(|s| s.parse::<i32>().map(|n| n > 10));
    /// assert_eq!(checked, Ok(OptionalBox::of("17")));
    ///
    /// let checked = OptionalBox::of("x").try_filter(|s| s.parse::<i32>().map(|n| n > 10));
    /// assert!(checked.is_err());
    /// ```
    pub fn try_filter<P, E>(self, predicate: P) -> Result<Self, E>
    where
        P: FnOnce(&T) -> Result<bool, E>,
    {
        match self {
            OptionalBox::Present(value) => {
                if predicate(&value)? {
                    Ok(OptionalBox::Present(value))
                } else {
                    Ok(OptionalBox::Absent)
                }
            }
            OptionalBox::Absent => Ok(OptionalBox::Absent),
        }
    }

    /// Like [`map`](Self::map), with a mapper that can fail.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let n = OptionalBox::of("42").try_map(|s| s.parse::<i32>());
    /// assert_eq!(n, Ok(OptionalBox::of(42)));
    ///
    /// let n = OptionalBox::<&str>::absent().try_map(|s| s.parse::<i32>());
    /// assert_eq!(n, Ok(OptionalBox::absent()));
    /// ```
    pub fn try_map<Y, E, F>(self, mapper: F) -> Result<OptionalBox<Y>, E>
    where
        F: FnOnce(T) -> Result<Y, E>,
    {
        match self {
            OptionalBox::Present(v) => mapper(v).map(OptionalBox::Present),
            OptionalBox::Absent => Ok(OptionalBox::Absent),
        }
    }

    /// Like [`get_or_compute`](Self::get_or_compute), with a supplier that can fail.
    pub fn try_get_or_compute<E, F>(self, supplier: F) -> Result<T, E>
    where
        F: FnOnce() -> Result<T, E>,
    {
        match self {
            OptionalBox::Present(v) => Ok(v),
            OptionalBox::Absent => supplier(),
        }
    }

    // ========== Iteration ==========

    /// Iterate over the value: zero items when absent, one when present.
    ///
    /// The box is only borrowed, so this can be called any number of times.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// let b = OptionalBox::of(3);
    /// assert_eq!(b.iter().collect::<Vec<_>>(), vec![&3]);
    /// assert_eq!(b.iter().count(), 1);
    ///
    /// let empty: OptionalBox<i32> = OptionalBox::absent();
    /// assert_eq!(empty.iter().next(), None);
    /// ```
    #[inline]
    pub fn iter(&self) -> std::option::IntoIter<&T> {
        self.get().into_iter()
    }
}

impl<T> OptionalBox<OptionalBox<T>> {
    /// Flatten a nested box.
    ///
    /// # Example
    ///
    /// ```rust
    /// use optional_box::OptionalBox;
    ///
    /// assert_eq!(OptionalBox::of(OptionalBox::of(1)).flatten(), OptionalBox::of(1));
    /// assert_eq!(OptionalBox::of(OptionalBox::<i32>::absent()).flatten(), OptionalBox::absent());
    /// ```
    #[inline]
    pub fn flatten(self) -> OptionalBox<T> {
        self.and_then(|inner| inner)
    }
}

// ========== Trait Implementations ==========

impl<T> Default for OptionalBox<T> {
    /// Returns `OptionalBox::Absent`.
    fn default() -> Self {
        OptionalBox::Absent
    }
}

impl<T> From<Option<T>> for OptionalBox<T> {
    fn from(value: Option<T>) -> Self {
        OptionalBox::new(value)
    }
}

impl<T> From<OptionalBox<T>> for Option<T> {
    fn from(b: OptionalBox<T>) -> Self {
        b.into_inner()
    }
}

impl<T: fmt::Display> fmt::Display for OptionalBox<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OptionalBox::Present(v) => write!(f, "OptionalBox[{}]", v),
            OptionalBox::Absent => f.write_str("OptionalBox.absent"),
        }
    }
}

impl<T> IntoIterator for OptionalBox<T> {
    type Item = T;
    type IntoIter = std::option::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.into_inner().into_iter()
    }
}

impl<'a, T> IntoIterator for &'a OptionalBox<T> {
    type Item = &'a T;
    type IntoIter = std::option::IntoIter<&'a T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #[test]
        fn prop_present_roundtrip(x: i64) {
            let b = OptionalBox::of(x);
            prop_assert!(b.is_present());
            prop_assert_eq!(b.into_inner(), Some(x));
        }

        #[test]
        fn prop_get_or(x: Option<i32>, fallback: i32) {
            prop_assert_eq!(OptionalBox::new(x).get_or(fallback), x.unwrap_or(fallback));
        }

        #[test]
        fn prop_filter_matches_predicate(x: i32, threshold: i32) {
            let b = OptionalBox::of(x).filter(|v| *v > threshold);
            if x > threshold {
                prop_assert_eq!(b, OptionalBox::of(x));
            } else {
                prop_assert_eq!(b, OptionalBox::absent());
            }
        }

        #[test]
        fn prop_functor_identity(x: Option<i32>) {
            let b = OptionalBox::new(x);
            prop_assert_eq!(b.map(|v| v), b);
        }

        #[test]
        fn prop_functor_composition(x: Option<i32>) {
            let f = |v: i32| v.wrapping_add(1);
            let g = |v: i32| v.wrapping_mul(2);

            let b = OptionalBox::new(x);
            prop_assert_eq!(b.map(f).map(g), b.map(|v| g(f(v))));
        }

        #[test]
        fn prop_for_each_is_identity(x: Option<i32>) {
            let b = OptionalBox::new(x);
            prop_assert_eq!(b.for_each(|_| {}), b);
        }

        #[test]
        fn prop_iter_matches_option(x: Option<i32>) {
            let b = OptionalBox::new(x);
            prop_assert_eq!(b.iter().copied().collect::<Vec<_>>(), x.into_iter().collect::<Vec<_>>());
        }
    }
}
