use astro_float::{BigFloat, WORD_BIT_SIZE};
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::{ToPrimitive, Zero};

/// `log10(2) · 10^6`, rounded down.
const LOG10_2_MICROS: i64 = 301_029;

/// Digits produced beyond the requested ones before rounding.
const SPARE_DIGITS: i64 = 3;

/// Largest binary exponent of a value `to_i64` will look at.
const I64_BITS: i32 = 64;

fn signed(value: u64) -> i64 {
    i64::try_from(value).unwrap_or(i64::MAX)
}

fn pow10(exponent: i64) -> BigUint {
    BigUint::from(10u8).pow(u32::try_from(exponent).unwrap_or(u32::MAX))
}

/// Multiplies by `2^shift`, truncating when `shift` is negative.
fn scale_by_power_of_two(magnitude: BigUint, shift: i64) -> BigUint {
    if shift >= 0 {
        magnitude << shift.unsigned_abs()
    } else {
        magnitude >> shift.unsigned_abs()
    }
}

/// Splits a finite value into its sign, its mantissa as an integer and the
/// power of two scaling it: `value = ±mantissa · 2^shift`.
fn binary_parts(value: &BigFloat) -> Option<(bool, BigUint, i64)> {
    let (words, _, sign, exponent, _) = value.as_raw_parts()?;
    let bytes: Vec<u8> = words.iter().flat_map(|word| word.to_le_bytes()).collect();
    let width = signed((words.len() * WORD_BIT_SIZE) as u64);
    Some((sign.is_negative(), BigUint::from_bytes_le(&bytes), i64::from(exponent) - width))
}

/// A finite value rounded to a number of significant decimal digits.
///
/// The value is `±significand · 10^exponent`; `significand` carries no
/// leading or trailing zeros unless it is `"0"`.
#[derive(Debug, PartialEq, Eq)]
struct DecimalDigits {
    negative:    bool,
    significand: String,
    exponent:    i64,
}

impl DecimalDigits {
    fn zero() -> Self {
        Self { negative:    false,
               significand: "0".to_string(),
               exponent:    0, }
    }

    /// Rounds half away from zero.
    fn of(value: &BigFloat, digits: u64) -> Option<Self> {
        let (negative, magnitude, shift) = binary_parts(value)?;
        if magnitude.is_zero() {
            return Some(Self::zero());
        }

        let leading = (signed(magnitude.bits()) + shift) * LOG10_2_MICROS / 1_000_000;
        let scale = signed(digits) + SPARE_DIGITS - leading;
        let numerator = scale_by_power_of_two(magnitude * pow10(scale.max(0)), shift.max(0));
        let denominator = pow10((-scale).max(0)) << (-shift).max(0).unsigned_abs();
        let scaled = numerator / denominator;

        let excess = signed(scaled.to_str_radix(10).len() as u64) - signed(digits);
        let (kept, exponent) = if excess > 0 {
            let unit = pow10(excess);
            let (quotient, remainder) = scaled.div_rem(&unit);
            let quotient = if remainder * 2u8 >= unit { quotient + 1u8 } else { quotient };
            (quotient, excess - scale)
        } else {
            (scaled, -scale)
        };
        if kept.is_zero() {
            return Some(Self::zero());
        }

        let text = kept.to_str_radix(10);
        let significand = text.trim_end_matches('0');
        Some(Self { negative,
                    significand: significand.to_string(),
                    exponent: exponent + signed((text.len() - significand.len()) as u64) })
    }

    fn render(&self, digits: u64) -> String {
        if self.significand == "0" {
            return "0".to_string();
        }
        let sign = if self.negative { "-" } else { "" };
        let length = signed(self.significand.len() as u64);
        let magnitude = self.exponent + length - 1;

        if magnitude < -5 || magnitude >= signed(digits) {
            let (lead, tail) = self.significand.split_at(1);
            let fraction = if tail.is_empty() { String::new() } else { format!(".{tail}") };
            let exponent_sign = if magnitude < 0 { '-' } else { '+' };
            return format!("{sign}{lead}{fraction}e{exponent_sign}{}", magnitude.unsigned_abs());
        }
        if self.exponent >= 0 {
            let zeros = "0".repeat(self.exponent.unsigned_abs() as usize);
            return format!("{sign}{}{zeros}", self.significand);
        }
        if magnitude >= 0 {
            let (integer, fraction) =
                self.significand.split_at((magnitude + 1).unsigned_abs() as usize);
            return format!("{sign}{integer}.{fraction}");
        }
        let zeros = "0".repeat((-magnitude - 1).unsigned_abs() as usize);
        format!("{sign}0.{zeros}{}", self.significand)
    }
}

/// Renders a value with at most `digits` significant digits.
///
/// Trailing zeros are dropped. Positional notation is used while the leading
/// digit's power of ten lies in `-5..digits`, scientific notation with a
/// signed exponent otherwise. Non-finite values render as `inf`, `-inf` and
/// `nan`.
///
/// # Example
/// ```
/// use astro_float::{BigFloat, RoundingMode};
/// use numq::util::num::render;
///
/// let eighth = BigFloat::from_i64(1, 128).div(&BigFloat::from_i64(8, 128),
///                                             128,
///                                             RoundingMode::ToEven);
/// assert_eq!(render(&eighth, 10), "0.125");
/// assert_eq!(render(&BigFloat::from_i64(-12345, 128), 3), "-1.23e+4");
/// assert_eq!(render(&astro_float::INF_NEG, 3), "-inf");
/// ```
#[must_use]
pub fn render(value: &BigFloat, digits: u64) -> String {
    if value.is_inf() {
        return if value.is_inf_neg() { "-inf" } else { "inf" }.to_string();
    }
    match DecimalDigits::of(value, digits) {
        Some(decimal) => decimal.render(digits),
        None => "nan".to_string(),
    }
}

/// The value as an `i64`, if it is an integer in range.
#[must_use]
pub fn to_i64(value: &BigFloat) -> Option<i64> {
    if !value.is_int() || value.exponent().is_some_and(|exponent| exponent > I64_BITS) {
        return None;
    }
    let (negative, magnitude, shift) = binary_parts(value)?;
    let integer = scale_by_power_of_two(magnitude, shift).to_i64()?;
    Some(if negative { -integer } else { integer })
}

#[cfg(test)]
mod tests {
    use astro_float::{NAN, RoundingMode};

    use super::*;

    const BITS: usize = 256;

    fn ratio(numerator: i64, denominator: i64) -> BigFloat {
        BigFloat::from_i64(numerator, BITS).div(&BigFloat::from_i64(denominator, BITS),
                                                 BITS,
                                                 RoundingMode::ToEven)
    }

    #[test]
    fn positional_and_scientific() {
        assert_eq!(render(&ratio(1, 3), 10), "0.3333333333");
        assert_eq!(render(&ratio(2, 3), 10), "0.6666666667");
        assert_eq!(render(&ratio(-5, 4), 10), "-1.25");
        assert_eq!(render(&ratio(1200, 1), 10), "1200");
        assert_eq!(render(&ratio(3, 200_000), 10), "0.000015");
        assert_eq!(render(&ratio(3, 20_000_000), 10), "1.5e-7");
        assert_eq!(render(&ratio(20, 1), 1), "2e+1");
    }

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(render(&ratio(125, 1), 2), "1.3e+2");
        assert_eq!(render(&ratio(-125, 1000), 2), "-0.13");
        assert_eq!(render(&ratio(999_999, 1), 3), "1e+6");
    }

    #[test]
    fn zero_and_special_values() {
        assert_eq!(render(&BigFloat::new(BITS), 5), "0");
        assert_eq!(render(&-&BigFloat::new(BITS), 5), "0");
        assert_eq!(render(&NAN, 5), "nan");
        assert_eq!(render(&astro_float::INF_POS, 5), "inf");
    }

    #[test]
    fn integers() {
        assert_eq!(to_i64(&ratio(-42, 1)), Some(-42));
        assert_eq!(to_i64(&ratio(5, 2)), None);
        assert_eq!(to_i64(&BigFloat::new(BITS)), Some(0));
        assert_eq!(to_i64(&ratio(1, 1).powi(80, BITS, RoundingMode::ToEven)), Some(1));
        assert_eq!(to_i64(&ratio(2, 1).powi(80, BITS, RoundingMode::ToEven)), None);
    }
}
