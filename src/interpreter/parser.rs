/// Builds queries from classified lines.
///
/// Extracts the opcode and operand text through the capture groups of the
/// line's shape and turns the operands into numbers at the session precision.
/// Nothing is computed here.
pub mod core;
