//! Seeded pseudo-random stream (xorshift32).
//!
//! The stream trades unpredictability for reproducibility: two streams built
//! from the same seed yield identical values. Seed 0 is a fixed point of
//! xorshift32 and produces 0 forever; that is left as is.

/// 2^32 as a float, the divisor mapping a `u32` state into `[0, 1)`.
const STATE_RANGE: f64 = 4_294_967_296.0;

/// Deterministic xorshift32 stream of values in `[0, 1)`.
///
/// # Example
///
/// ```
/// use alphabet_affirmations::SeededStream;
///
/// let mut first = SeededStream::new(42);
/// let mut second = SeededStream::new(42);
/// let value = first.next_value();
///
/// assert!((0.0..1.0).contains(&value));
/// assert_eq!(value, second.next_value());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeededStream {
    state: u32,
}

impl SeededStream {
    /// Creates a stream whose initial state is `seed`.
    #[must_use]
    pub const fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Advances the state and returns it.
    ///
    /// The right shift is logical on `u32`, so seeds above `i32::MAX` never
    /// sign-extend.
    pub const fn next_u32(&mut self) -> u32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Advances the state and returns it scaled into `[0, 1)`.
    #[expect(
        clippy::float_arithmetic,
        reason = "the stream contract is a float in [0, 1)"
    )]
    pub fn next_value(&mut self) -> f64 {
        f64::from(self.next_u32()) / STATE_RANGE
    }

    /// Draws an index in `0..len`, or `None` when `len` is zero.
    ///
    /// Equal to `floor(next_value() * len)`, computed in integers and
    /// clamped to `len - 1`. The stream advances even when `len` is zero.
    pub fn next_index(&mut self, len: usize) -> Option<usize> {
        let state = self.next_u32();
        let last = len.checked_sub(1)?;
        let scaled = (u128::from(state) * len as u128) >> 32;
        Some(usize::try_from(scaled).map_or(last, |index| index.min(last)))
    }
}

impl Iterator for SeededStream {
    type Item = f64;

    fn next(&mut self) -> Option<Self::Item> {
        Some(self.next_value())
    }
}
