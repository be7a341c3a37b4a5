/// The engine and its per-batch accumulator.
///
/// Ties classification, parsing and evaluation together and collects the
/// answers and faults of one batch.
pub mod core;

/// Opcode lookup tables.
///
/// Four static tables, one per domain and arity, mapping opcode names to
/// their handlers. Single-operand tables are searched first.
pub mod dispatch;

/// Handlers for real queries.
///
/// Trigonometric opcodes take and inverse trigonometric opcodes return
/// degrees.
pub mod real;

/// Handlers for complex queries.
pub mod complex;
