/// Implements the arithmetic operator traits for a number type, both by
/// reference and by value, forwarding to its named methods.
macro_rules! arithmetic_operators {
    ($type:ident; $($trait:ident, $method:ident => $implementation:ident;)*) => {
        $(
            impl std::ops::$trait<&$type> for &$type {
                type Output = $type;

                fn $method(self, rhs: &$type) -> Self::Output {
                    self.$implementation(rhs)
                }
            }

            impl std::ops::$trait for $type {
                type Output = Self;

                fn $method(self, rhs: Self) -> Self::Output {
                    self.$implementation(&rhs)
                }
            }
        )*
    };
}

/// Complex number support.
///
/// Defines `ComplexNumber`, a pair of `RealNumber` parts, with the principal
/// branches of the complex elementary functions.
pub mod complex;
/// Arbitrary-precision real numbers.
///
/// `RealNumber` wraps a binary floating point value at the working precision
/// and gives `inf`, `-inf` and `nan` for results outside a function's domain.
pub mod real;

pub mod core;
pub(crate) mod gamma;
