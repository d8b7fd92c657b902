// Limits applied by the operator validity guards
pub const MAX_EXPONENT_MAGNITUDE: i64 = 10;
pub const DEFAULT_OPERATORS: &str = "+-*/";
