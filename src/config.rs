/// Default number of significant decimal digits carried by every number.
pub const DEFAULT_DIGITS: u64 = 1000;

/// Digits kept beyond the displayed precision so that chains of rounded
/// operations still render correctly.
pub const GUARD_DIGITS: u64 = 10;

/// `1000 · log2(10)`, rounded up.
const BITS_PER_THOUSAND_DIGITS: u64 = 3322;

/// Numeric precision of an evaluation session.
///
/// Every `RealNumber` carries the precision it was created with; results of
/// arithmetic inherit the precision of their left operand.
///
/// # Example
/// ```
/// use numq::config::{DEFAULT_DIGITS, Precision};
///
/// let precision = Precision::default();
/// assert_eq!(precision.digits(), DEFAULT_DIGITS);
/// assert_eq!(Precision::new(30).working_digits(), 40);
/// assert_eq!(Precision::new(30).bits(), 133);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Precision {
    digits: u64,
}

impl Precision {
    /// Creates a precision of `digits` significant digits (at least one).
    #[must_use]
    pub const fn new(digits: u64) -> Self {
        Self { digits: if digits == 0 { 1 } else { digits } }
    }

    /// Number of significant digits shown when a value is rendered.
    #[must_use]
    pub const fn digits(self) -> u64 {
        self.digits
    }

    /// Number of significant digits values are stored with.
    #[must_use]
    pub const fn working_digits(self) -> u64 {
        self.digits + GUARD_DIGITS
    }

    /// Mantissa width in bits holding the working digits.
    #[must_use]
    pub const fn bits(self) -> usize {
        (self.working_digits() * BITS_PER_THOUSAND_DIGITS).div_ceil(1000) as usize
    }
}

impl Default for Precision {
    fn default() -> Self {
        Self::new(DEFAULT_DIGITS)
    }
}
