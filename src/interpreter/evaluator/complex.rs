use crate::{
    ast::Domain,
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{complex::ComplexNumber, core::Value},
    },
    util::{angle::to_degrees, trigonometry::complex as trig},
};

/// Generates single-operand handlers that cannot fail. Angles are radians
/// throughout, except for `argument`.
macro_rules! complex_handlers {
    ($($name:ident($z:ident) => $body:expr;)*) => {
        $(
            pub fn $name($z: &ComplexNumber) -> EvalResult<Value> {
                Ok(Value::from($body))
            }
        )*
    };
}

complex_handlers! {
    modulus(z) => z.abs();
    argument(z) => to_degrees(&z.arg());
    sine(z) => z.sin();
    cosine(z) => z.cos();
    tangent(z) => z.tan();
    cotangent(z) => trig::cot(z);
    secant(z) => trig::sec(z);
    cosecant(z) => trig::csc(z);
    inverse_sine(z) => z.asin();
    inverse_cosine(z) => z.acos();
    inverse_tangent(z) => z.atan();
    inverse_cotangent(z) => trig::acot(z);
    inverse_secant(z) => trig::asec(z);
    inverse_cosecant(z) => trig::acsc(z);
    hyp_sine(z) => z.sinh();
    hyp_cosine(z) => z.cosh();
    hyp_tangent(z) => z.tanh();
    hyp_cotangent(z) => trig::coth(z);
    hyp_secant(z) => trig::sech(z);
    hyp_cosecant(z) => trig::csch(z);
    inverse_hyp_sine(z) => z.asinh();
    inverse_hyp_cosine(z) => z.acosh();
    inverse_hyp_tangent(z) => z.atanh();
    inverse_hyp_cotangent(z) => trig::acoth(z);
    inverse_hyp_secant(z) => trig::asech(z);
    inverse_hyp_cosecant(z) => trig::acsch(z);
    power_e(z) => z.exp();
    conjugate(z) => z.conj();
}

pub fn natural_logarithm(z: &ComplexNumber) -> EvalResult<Value> {
    if z.is_zero() {
        return Err(RuntimeError::LogarithmOfZero { domain: Domain::Complex });
    }
    Ok(Value::from(z.ln()))
}

pub fn add(a: &ComplexNumber, b: &ComplexNumber) -> EvalResult<ComplexNumber> {
    Ok(a + b)
}

pub fn subtract(a: &ComplexNumber, b: &ComplexNumber) -> EvalResult<ComplexNumber> {
    Ok(a - b)
}

pub fn multiply(a: &ComplexNumber, b: &ComplexNumber) -> EvalResult<ComplexNumber> {
    Ok(a * b)
}

pub fn divide(a: &ComplexNumber, b: &ComplexNumber) -> EvalResult<ComplexNumber> {
    if b.is_zero() {
        return Err(RuntimeError::DivisionByZero { domain: Domain::Complex });
    }
    Ok(a / b)
}

pub fn power(a: &ComplexNumber, b: &ComplexNumber) -> EvalResult<ComplexNumber> {
    Ok(a.pow(b))
}

/// `a^(1/index)` on the principal branch.
pub fn root(a: &ComplexNumber, index: &ComplexNumber) -> EvalResult<ComplexNumber> {
    if index.is_zero() {
        return Err(RuntimeError::ZerothRoot { domain: Domain::Complex });
    }
    Ok(a.pow(&index.recip()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Precision;

    fn complex(text: &str) -> ComplexNumber {
        ComplexNumber::parse(text, Precision::new(30)).unwrap()
    }

    #[test]
    fn real_valued_answers() {
        assert_eq!(modulus(&complex("3+4i")).unwrap().to_string(), "5");
        assert_eq!(argument(&complex("1+1i")).unwrap().to_string(), "45");
        assert_eq!(argument(&complex("-1+0i")).unwrap().domain(), Domain::Real);
    }

    #[test]
    fn complex_valued_answers() {
        assert_eq!(conjugate(&complex("3+4i")).unwrap().to_string(), "3-4i");
        assert_eq!(power(&complex("1+1i"), &complex("2+0i")).unwrap().to_string(), "2i");
        assert_eq!(divide(&complex("1+1i"), &complex("1-1i")).unwrap().to_string(), "1i");
    }

    #[test]
    fn domain_errors() {
        let zero = complex("0i");
        assert!(matches!(divide(&complex("1+1i"), &zero),
                         Err(RuntimeError::DivisionByZero { domain: Domain::Complex })));
        assert!(matches!(root(&complex("1+1i"), &zero),
                         Err(RuntimeError::ZerothRoot { domain: Domain::Complex })));
        assert!(matches!(natural_logarithm(&zero),
                         Err(RuntimeError::LogarithmOfZero { domain: Domain::Complex })));
    }
}
