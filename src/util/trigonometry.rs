/// Generates the reciprocal functions for a number type with the usual
/// trigonometric and hyperbolic methods and `recip`.
macro_rules! reciprocal_functions {
    ($number:ty) => {
        #[must_use]
        pub fn cot(x: &$number) -> $number {
            x.tan().recip()
        }

        #[must_use]
        pub fn sec(x: &$number) -> $number {
            x.cos().recip()
        }

        #[must_use]
        pub fn csc(x: &$number) -> $number {
            x.sin().recip()
        }

        #[must_use]
        pub fn acot(x: &$number) -> $number {
            x.recip().atan()
        }

        #[must_use]
        pub fn asec(x: &$number) -> $number {
            x.recip().acos()
        }

        #[must_use]
        pub fn acsc(x: &$number) -> $number {
            x.recip().asin()
        }

        #[must_use]
        pub fn coth(x: &$number) -> $number {
            x.tanh().recip()
        }

        #[must_use]
        pub fn sech(x: &$number) -> $number {
            x.cosh().recip()
        }

        #[must_use]
        pub fn csch(x: &$number) -> $number {
            x.sinh().recip()
        }

        #[must_use]
        pub fn acoth(x: &$number) -> $number {
            x.recip().atanh()
        }

        #[must_use]
        pub fn asech(x: &$number) -> $number {
            x.recip().acosh()
        }

        #[must_use]
        pub fn acsch(x: &$number) -> $number {
            x.recip().asinh()
        }
    };
}

/// Functions over reals, in radians.
///
/// # Example
/// ```
/// use numq::{config::Precision, interpreter::value::real::RealNumber, util::trigonometry::real};
///
/// let precision = Precision::new(20);
/// assert_eq!(real::sec(&RealNumber::zero(precision)).to_string(), "1");
/// assert!(real::acsc(&RealNumber::from_i64(1, precision).recip().recip()).is_finite());
/// assert_eq!(real::csch(&RealNumber::zero(precision)).to_string(), "inf");
/// ```
pub mod real {
    use crate::interpreter::value::real::RealNumber;

    reciprocal_functions!(RealNumber);
}

/// Functions over complex numbers, on principal branches.
pub mod complex {
    use crate::interpreter::value::complex::ComplexNumber;

    reciprocal_functions!(ComplexNumber);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        config::Precision,
        interpreter::value::{complex::ComplexNumber, real::RealNumber},
    };

    #[test]
    fn real_reciprocals() {
        let precision = Precision::new(30);
        let quarter_turn = &RealNumber::pi(precision) / &RealNumber::from_i64(4, precision);
        assert_eq!(real::cot(&quarter_turn).to_string(), "1");
        assert_eq!(real::acot(&RealNumber::one(precision)).to_string(),
                   quarter_turn.to_string());
        assert!(real::asec(&RealNumber::from_i64(0, precision)).is_nan());
    }

    #[test]
    fn complex_reciprocals() {
        let precision = Precision::new(30);
        let z = ComplexNumber::parse("1+1i", precision).unwrap();
        assert_eq!(complex::sec(&z), z.cos().recip());
        assert_eq!(complex::acoth(&z), z.recip().atanh());
    }
}
