use crate::interpreter::value::real::RealNumber;

/// Converts an angle in degrees to radians.
///
/// # Example
/// ```
/// use numq::{config::Precision, interpreter::value::real::RealNumber, util::angle::to_radians};
///
/// let precision = Precision::new(20);
/// let half_turn = to_radians(&RealNumber::from_i64(180, precision));
/// assert_eq!(half_turn.to_string(), RealNumber::pi(precision).to_string());
/// ```
#[must_use]
pub fn to_radians(degrees: &RealNumber) -> RealNumber {
    let precision = degrees.precision();
    &(degrees * &RealNumber::pi(precision)) / &RealNumber::from_i64(180, precision)
}

/// Converts an angle in radians to degrees.
#[must_use]
pub fn to_degrees(radians: &RealNumber) -> RealNumber {
    let precision = radians.precision();
    &(radians * &RealNumber::from_i64(180, precision)) / &RealNumber::pi(precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Precision;

    #[test]
    fn quarter_turn() {
        let precision = Precision::new(30);
        let right_angle = RealNumber::from_i64(90, precision);
        let radians = to_radians(&right_angle);
        assert_eq!(radians.sin().to_string(), "1");
        assert_eq!(to_degrees(&radians).to_string(), "90");
    }
}
