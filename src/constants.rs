/// Minimum length of a transaction description, in characters
pub const MIN_DESCRIPTION_CHARS: usize = 3;

/// Largest absolute amount a transaction may carry, in cents
/// Matches a decimal(10,2) column: 99,999,999.99
pub const MAX_AMOUNT_CENTS: i64 = 9_999_999_999;

/// Number of decimal places amounts are stored with
pub const AMOUNT_SCALE: u32 = 2;

/// Longest accepted session token lifetime (one year)
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 86_400;

/// Upper bound on the number of pooled SQLite connections
pub const MAX_DB_CONNECTIONS: u32 = 10;

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a missing or blank name
pub const ERR_NAME_REQUIRED: &str = "Name is required";

/// Error message for a malformed email address
pub const ERR_INVALID_EMAIL: &str = "Email must be a valid email address";

/// Error message for a missing password
pub const ERR_PASSWORD_REQUIRED: &str = "Password is required";

/// Error message for a description that is too short
pub const ERR_DESCRIPTION_TOO_SHORT: &str = "Description must be at least 3 characters long";

/// Error message for an amount outside the storable range
pub const ERR_AMOUNT_OUT_OF_RANGE: &str = "Amount must be between -99999999.99 and 99999999.99";

/// Generic message returned for every internal failure
pub const ERR_INTERNAL: &str = "Internal server error";
