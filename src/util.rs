/// Decimal views of binary floating point values: canonical rendering and
/// integer extraction.
pub mod num;
/// Conversions between degrees and radians.
pub mod angle;
/// Reciprocal trigonometric and hyperbolic functions, with their inverses,
/// for real and complex numbers.
pub mod trigonometry;
/// Factorials, permutations and combinations through the gamma function.
pub mod combinatorics;
