use std::fmt::Display;

use log::debug;

use crate::{
    ast::{Operands, ParsedQuery},
    interpreter::{
        evaluator::{complex, core::EvalResult, real},
        value::{complex::ComplexNumber, core::Value, real::RealNumber},
    },
};

type RealSingleFn = fn(&RealNumber) -> EvalResult<RealNumber>;
type RealDoubleFn = fn(&RealNumber, &RealNumber) -> EvalResult<RealNumber>;
type ComplexSingleFn = fn(&ComplexNumber) -> EvalResult<Value>;
type ComplexDoubleFn = fn(&ComplexNumber, &ComplexNumber) -> EvalResult<ComplexNumber>;

/// An opcode and the function that evaluates it.
struct OpcodeDef<F> {
    name:    &'static str,
    handler: F,
}

/// Defines a static opcode table and the list of its opcode names.
macro_rules! opcode_table {
    (
        $table:ident, $names:ident: $handler:ty {
            $($name:literal => $func:path),* $(,)?
        }
    ) => {
        static $table: &[OpcodeDef<$handler>] = &[
            $(
                OpcodeDef { name: $name, handler: $func },
            )*
        ];
        pub const $names: &[&str] = &[
            $($name,)*
        ];
    };
}

opcode_table! {
    REAL_SINGLE, REAL_SINGLE_OPCODES: RealSingleFn {
        "FACTORIAL"             => real::factorial,
        "ABSOLUTE"              => real::absolute,
        "FLOOR"                 => real::floor,
        "CEILING"               => real::ceiling,
        "SINE"                  => real::sine,
        "COSINE"                => real::cosine,
        "TANGENT"               => real::tangent,
        "COTANGENT"             => real::cotangent,
        "COSECANT"              => real::cosecant,
        "SECANT"                => real::secant,
        "INVERSE_SINE"          => real::inverse_sine,
        "INVERSE_COSINE"        => real::inverse_cosine,
        "INVERSE_TANGENT"       => real::inverse_tangent,
        "INVERSE_COTANGENT"     => real::inverse_cotangent,
        "INVERSE_COSECANT"      => real::inverse_cosecant,
        "INVERSE_SECANT"        => real::inverse_secant,
        "HYP_SINE"              => real::hyp_sine,
        "HYP_COSINE"            => real::hyp_cosine,
        "HYP_TANGENT"           => real::hyp_tangent,
        "HYP_COTANGENT"         => real::hyp_cotangent,
        "HYP_COSECANT"          => real::hyp_cosecant,
        "HYP_SECANT"            => real::hyp_secant,
        "INVERSE_HYP_SINE"      => real::inverse_hyp_sine,
        "INVERSE_HYP_COSINE"    => real::inverse_hyp_cosine,
        "INVERSE_HYP_TANGENT"   => real::inverse_hyp_tangent,
        "INVERSE_HYP_COTANGENT" => real::inverse_hyp_cotangent,
        "INVERSE_HYP_COSECANT"  => real::inverse_hyp_cosecant,
        "INVERSE_HYP_SECANT"    => real::inverse_hyp_secant,
        "NATURAL_LOGARITHM"     => real::natural_logarithm,
        "BINARY_LOGARITHM"      => real::binary_logarithm,
        "COMMON_LOGARITHM"      => real::common_logarithm,
    }
}

opcode_table! {
    REAL_DOUBLE, REAL_DOUBLE_OPCODES: RealDoubleFn {
        "ADD"         => real::add,
        "SUBTRACT"    => real::subtract,
        "MULTIPLY"    => real::multiply,
        "DIVIDE"      => real::divide,
        "POWER"       => real::power,
        "ROOT"        => real::root,
        "LOGARITHM"   => real::logarithm,
        "PERMUTATION" => real::permutation,
        "COMBINATION" => real::combination,
        "MOD"         => real::modulo,
    }
}

opcode_table! {
    COMPLEX_SINGLE, COMPLEX_SINGLE_OPCODES: ComplexSingleFn {
        "MODULUS"               => complex::modulus,
        "ARGUMENT"              => complex::argument,
        "SINE"                  => complex::sine,
        "COSINE"                => complex::cosine,
        "TANGENT"               => complex::tangent,
        "COTANGENT"             => complex::cotangent,
        "SECANT"                => complex::secant,
        "COSECANT"              => complex::cosecant,
        "INVERSE_SINE"          => complex::inverse_sine,
        "INVERSE_COSINE"        => complex::inverse_cosine,
        "INVERSE_TANGENT"       => complex::inverse_tangent,
        "INVERSE_COTANGENT"     => complex::inverse_cotangent,
        "INVERSE_SECANT"        => complex::inverse_secant,
        "INVERSE_COSECANT"      => complex::inverse_cosecant,
        "HYP_SINE"              => complex::hyp_sine,
        "HYP_COSINE"            => complex::hyp_cosine,
        "HYP_TANGENT"           => complex::hyp_tangent,
        "HYP_COTANGENT"         => complex::hyp_cotangent,
        "HYP_SECANT"            => complex::hyp_secant,
        "HYP_COSECANT"          => complex::hyp_cosecant,
        "INVERSE_HYP_SINE"      => complex::inverse_hyp_sine,
        "INVERSE_HYP_COSINE"    => complex::inverse_hyp_cosine,
        "INVERSE_HYP_TANGENT"   => complex::inverse_hyp_tangent,
        "INVERSE_HYP_COTANGENT" => complex::inverse_hyp_cotangent,
        "INVERSE_HYP_SECANT"    => complex::inverse_hyp_secant,
        "INVERSE_HYP_COSECANT"  => complex::inverse_hyp_cosecant,
        "NATURAL_LOGARITHM"     => complex::natural_logarithm,
        "POWER_E"               => complex::power_e,
        "CONJUGATE"             => complex::conjugate,
    }
}

opcode_table! {
    COMPLEX_DOUBLE, COMPLEX_DOUBLE_OPCODES: ComplexDoubleFn {
        "ADD"      => complex::add,
        "SUBTRACT" => complex::subtract,
        "MULTIPLY" => complex::multiply,
        "DIVIDE"   => complex::divide,
        "POWER"    => complex::power,
        "ROOT"     => complex::root,
    }
}

fn lookup<F: Copy>(table: &[OpcodeDef<F>], opcode: &str) -> Option<F> {
    table.iter()
         .find(|def| def.name == opcode)
         .map(|def| def.handler)
}

fn single_answer(opcode: &str, operand: &impl Display, result: &impl Display) -> String {
    format!("{opcode} {operand} = {result}\n")
}

fn double_answer(opcode: &str,
                 first: &impl Display,
                 second: &impl Display,
                 result: &impl Display)
                 -> String {
    format!("{opcode} {first},{second} = {result}\n")
}

/// Evaluates a query through the tables of its domain.
///
/// The single-operand table is searched before the double-operand one. A
/// single-operand handler answers with one operand, a double-operand handler
/// with two, whatever shape the query was written in.
///
/// Returns `None` when neither table knows the opcode.
///
/// # Example
/// ```
/// use numq::{
///     config::Precision,
///     interpreter::{evaluator::{core::Engine, dispatch::apply}, variables::VariableTable},
/// };
///
/// let engine = Engine::new(Precision::new(20));
/// let variables = VariableTable::new();
/// let query = |line| engine.prepare(line, &variables).unwrap();
///
/// assert_eq!(apply(&query("ADD 5")).unwrap().unwrap(), "ADD 5,0 = 5\n");
/// assert_eq!(apply(&query("ABSOLUTE -2,7")).unwrap().unwrap(), "ABSOLUTE -2 = 2\n");
/// assert!(apply(&query("FOO 1")).is_none());
/// ```
#[must_use]
pub fn apply(query: &ParsedQuery) -> Option<EvalResult<String>> {
    let opcode = query.opcode.as_str();
    match &query.operands {
        Operands::Real(first, second) => {
            if let Some(handler) = lookup(REAL_SINGLE, opcode) {
                debug!("{opcode}: real single-operand handler");
                return Some(handler(first).map(|result| single_answer(opcode, first, &result)));
            }
            lookup(REAL_DOUBLE, opcode).map(|handler| {
                debug!("{opcode}: real double-operand handler");
                handler(first, second).map(|result| double_answer(opcode, first, second, &result))
            })
        },
        Operands::Complex(first, second) => {
            if let Some(handler) = lookup(COMPLEX_SINGLE, opcode) {
                debug!("{opcode}: complex single-operand handler");
                return Some(handler(first).map(|result| single_answer(opcode, first, &result)));
            }
            lookup(COMPLEX_DOUBLE, opcode).map(|handler| {
                debug!("{opcode}: complex double-operand handler");
                handler(first, second).map(|result| double_answer(opcode, first, second, &result))
            })
        },
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn no_opcode_is_both_single_and_double() {
        for (single, double) in [(REAL_SINGLE_OPCODES, REAL_DOUBLE_OPCODES),
                                 (COMPLEX_SINGLE_OPCODES, COMPLEX_DOUBLE_OPCODES)]
        {
            let single: HashSet<&str> = single.iter().copied().collect();
            assert!(double.iter().all(|name| !single.contains(name)));
        }
    }

    #[test]
    fn opcode_names_are_unique() {
        for names in [REAL_SINGLE_OPCODES,
                      REAL_DOUBLE_OPCODES,
                      COMPLEX_SINGLE_OPCODES,
                      COMPLEX_DOUBLE_OPCODES]
        {
            let distinct: HashSet<&str> = names.iter().copied().collect();
            assert_eq!(distinct.len(), names.len());
        }
    }
}
