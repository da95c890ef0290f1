// ============================================================================
// Numeric Module
// Exact decimal arithmetic for dose calculations
// ============================================================================
//
// This module provides:
// - ExactDecimal: i128 mantissa + runtime scale, no binary floats
// - bcmath: string-in/string-out primitives (add, multiply, divide, floor,
//   ceiling, round, is_negative)
// - NumericError: Error types for arithmetic operations
//
// Design principles:
// - No floating-point operations
// - Every lossy step truncates toward zero at an explicit precision
// - Rounding is half-away-from-zero and built from truncating steps
// - All arithmetic returns Result (no panics)

pub mod bcmath;
mod errors;
mod exact_decimal;

pub use errors::{NumericError, NumericResult};
pub use exact_decimal::ExactDecimal;

/// Maximum number of fractional digits a parsed value or requested
/// precision may carry.
pub const MAX_SCALE: u32 = 18;
