use std::sync::LazyLock;

use regex::Regex;

use crate::ast::{Arity, Domain};

/// A real literal: `-12`, `3.5`, `1e+10`, `2.5E-3.5`.
const REAL: &str = r"-?[0-9]+(?:\.[0-9]+)?(?:[Ee][+-][0-9]+(?:\.[0-9]+)?)?";
/// The unsigned magnitude of an imaginary part.
const IMAGINARY: &str = r"[0-9]+(?:\.[0-9]+)?(?:[Ee][+-][0-9]+(?:\.[0-9]+)?)?";
/// An opcode or variable name; never starts with a digit.
const NAME: &str = r"[A-Za-z_][A-Za-z0-9_]*";
/// Any run of word characters.
const WORD: &str = r"[A-Za-z0-9_]+";

/// A complex literal: an optional real part followed by a signed imaginary
/// part, or a lone imaginary part.
fn complex() -> String {
    format!("(?:{REAL}[+-]{IMAGINARY}|[-+]?{IMAGINARY})i")
}

/// Compiles a whole-line pattern.
fn line(pattern: &str) -> Regex {
    Regex::new(&format!("^{pattern}$")).expect("grammar patterns are valid")
}

/// A bare real literal.
pub static REAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| line(REAL));

/// A bare complex literal.
pub static COMPLEX_LITERAL: LazyLock<Regex> = LazyLock::new(|| line(&complex()));

/// `OPCODE x` over reals. Captures the opcode and the operand.
pub static REAL_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| line(&format!(r"({NAME})\s({REAL})")));

/// `OPCODE x,y` over reals. Captures the opcode and both operands.
pub static REAL_DOUBLE: LazyLock<Regex> =
    LazyLock::new(|| line(&format!(r"({NAME})\s({REAL}),\s*({REAL})")));

/// `OPCODE z` over complex numbers.
pub static COMPLEX_SINGLE: LazyLock<Regex> =
    LazyLock::new(|| line(&format!(r"({NAME})\s({})", complex())));

/// `OPCODE z,w` over complex numbers.
pub static COMPLEX_DOUBLE: LazyLock<Regex> = LazyLock::new(|| {
    let complex = complex();
    line(&format!(r"({NAME})\s({complex}),\s*({complex})"))
});

/// The query pattern for a domain and arity.
#[must_use]
pub fn query(domain: Domain, arity: Arity) -> &'static Regex {
    match (domain, arity) {
        (Domain::Real, Arity::Single) => &REAL_SINGLE,
        (Domain::Real, Arity::Double) => &REAL_DOUBLE,
        (Domain::Complex, Arity::Single) => &COMPLEX_SINGLE,
        (Domain::Complex, Arity::Double) => &COMPLEX_DOUBLE,
    }
}

/// `get NAME`. Captures the name.
pub static GET: LazyLock<Regex> = LazyLock::new(|| line(&format!(r"get\s({NAME})")));

/// `get NAME = VALUE`, the form a `get` query takes once its variable is
/// substituted. Its evaluation echoes the line.
pub static GET_ECHO: LazyLock<Regex> = LazyLock::new(|| {
    line(&format!(r"get\s({NAME})\s*=\s*({REAL}|{})", complex()))
});

/// The shapes a `set` line may take, in the order they are tried.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SetForm {
    /// `set x = 5`
    RealLiteral,
    /// `set z = 1+2i`
    ComplexLiteral,
    /// `set x = SQRT 16`
    RealSingle,
    /// `set z = CONJUGATE 1+2i`
    ComplexSingle,
    /// `set x = ADD 1,2`
    RealDouble,
    /// `set z = ADD 1+2i,3i`
    ComplexDouble,
    /// `set x = FLOOR y`
    VariableSingle,
    /// `set x = ADD y,z`
    VariableDouble,
}

impl SetForm {
    /// Whether the right-hand side is stored as written rather than
    /// evaluated.
    #[must_use]
    pub const fn is_literal(self) -> bool {
        matches!(self, Self::RealLiteral | Self::ComplexLiteral)
    }
}

/// The `set` forms with their patterns, in priority order. Capture 1 is the
/// variable name, capture 2 the right-hand side.
pub static SET_FORMS: LazyLock<Vec<(SetForm, Regex)>> = LazyLock::new(|| {
    let complex = complex();
    let assignment = |rhs: String| line(&format!(r"set\s({NAME})\s*=\s*({rhs})"));
    vec![(SetForm::RealLiteral, assignment(REAL.to_string())),
         (SetForm::ComplexLiteral, assignment(complex.clone())),
         (SetForm::RealSingle, assignment(format!(r"{WORD}\s{REAL}"))),
         (SetForm::ComplexSingle, assignment(format!(r"{WORD}\s{complex}"))),
         (SetForm::RealDouble, assignment(format!(r"{WORD}\s{REAL},{REAL}"))),
         (SetForm::ComplexDouble, assignment(format!(r"{WORD}\s{complex},{complex}"))),
         (SetForm::VariableSingle, assignment(format!(r"{WORD}\s{WORD}"))),
         (SetForm::VariableDouble, assignment(format!(r"{WORD}\s{WORD},{WORD}"))),]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literals() {
        for real in ["5", "-0.25", "1e+10", "2.5E-3.5"] {
            assert!(REAL_LITERAL.is_match(real), "{real}");
        }
        for not_real in [".5", "5.", "1e10", "+5", "5i"] {
            assert!(!REAL_LITERAL.is_match(not_real), "{not_real}");
        }
        for complex in ["3i", "-2i", "+7i", "1+2i", "-1.5e+2-3e-1i", "12i"] {
            assert!(COMPLEX_LITERAL.is_match(complex), "{complex}");
        }
        for not_complex in ["1 + 2i", "i", "1+2", "12+i"] {
            assert!(!COMPLEX_LITERAL.is_match(not_complex), "{not_complex}");
        }
    }

    #[test]
    fn query_shapes() {
        assert!(REAL_SINGLE.is_match("SINE 30"));
        assert!(REAL_DOUBLE.is_match("ADD 2, 3"));
        assert!(!REAL_DOUBLE.is_match("ADD 2 ,3"));
        assert!(!REAL_SINGLE.is_match("9ADD 2"));
        assert!(COMPLEX_DOUBLE.is_match("MULTIPLY 1+2i,3-1i"));
        assert!(!COMPLEX_DOUBLE.is_match("ADD 1+2i,3"));
        assert!(GET_ECHO.is_match("get x = -2.5"));
        assert!(GET_ECHO.is_match("get z = 1-1i"));
        assert!(!GET.is_match("get 1x"));
    }

    #[test]
    fn set_forms_in_priority_order() {
        let form = |line: &str| {
            SET_FORMS.iter()
                     .find(|(_, pattern)| pattern.is_match(line))
                     .map(|(form, _)| *form)
        };
        assert_eq!(form("set x = 5"), Some(SetForm::RealLiteral));
        assert_eq!(form("set x=1+1i"), Some(SetForm::ComplexLiteral));
        assert_eq!(form("set x = ROOT 16,2"), Some(SetForm::RealDouble));
        assert_eq!(form("set x = ROOT 16, 2"), None);
        assert_eq!(form("set x = FLOOR y"), Some(SetForm::VariableSingle));
        assert_eq!(form("set x = ADD y,2"), Some(SetForm::VariableDouble));
        assert_eq!(form("set 2x = 5"), None);
    }
}
