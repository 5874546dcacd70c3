//! Closed numeric intervals with clamp-on-write semantics.
//!
//! The physlab models accept arbitrary numeric input from sliders and
//! scripts and store the nearest supported value instead of failing.
//! [`Bounds`] expresses one such supported interval and performs the
//! clamping.
//!
//! The interval is generic over any `PartialOrd + Copy` type, so it works
//! equally for primitives (`f64`, `u32`) and for unit-safe quantities from
//! [`uom`].
//!
//! [`uom`]: https://docs.rs/uom/

/// A closed interval `[min, max]` that clamps values into itself.
///
/// Construct with [`Bounds::new`], which expects `min <= max`.
///
/// # Examples
///
/// ```
/// use physlab_core::Bounds;
///
/// let volts = Bounds::new(1.0, 50.0);
/// assert_eq!(volts.clamp(120.0), 50.0);
/// assert_eq!(volts.clamp(0.0), 1.0);
/// assert_eq!(volts.clamp(12.0), 12.0);
/// assert!(volts.contains(12.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds<T> {
    min: T,
    max: T,
}

impl<T: PartialOrd + Copy> Bounds<T> {
    /// Creates a closed interval from `min` to `max`.
    ///
    /// Callers must supply `min <= max`. If the endpoints are inverted,
    /// [`clamp`](Self::clamp) still terminates and returns `min` for every
    /// input, but the interval is meaningless.
    pub fn new(min: T, max: T) -> Self {
        Self { min, max }
    }

    /// Returns the lower endpoint.
    pub fn min(&self) -> T {
        self.min
    }

    /// Returns the upper endpoint.
    pub fn max(&self) -> T {
        self.max
    }

    /// Returns `value` moved to the nearest point of the interval.
    ///
    /// A value that compares neither below `min` nor above `max` is
    /// returned unchanged; for float types this means `NaN` passes
    /// through rather than being coerced to an endpoint.
    pub fn clamp(&self, value: T) -> T {
        if value < self.min {
            self.min
        } else if value > self.max {
            self.max
        } else {
            value
        }
    }

    /// Returns `true` if `value` lies within the interval, endpoints
    /// included.
    pub fn contains(&self, value: T) -> bool {
        value >= self.min && value <= self.max
    }
}
