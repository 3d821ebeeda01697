//! Application-wide constants
//!
//! Centralized location for magic values to improve maintainability.

// =============================================================================
// Credential Hashing
// =============================================================================

/// Default bcrypt work factor for secure mode
pub const DEFAULT_BCRYPT_COST: u32 = 12;

/// Lowest work factor bcrypt accepts
pub const MIN_BCRYPT_COST: u32 = 4;

/// Highest work factor bcrypt accepts
pub const MAX_BCRYPT_COST: u32 = 31;

/// Highest embedded cost `verify` will re-derive unless the hasher's own
/// cost is higher
pub const MAX_VERIFY_BCRYPT_COST: u32 = 16;

/// Secure mode is on unless configured otherwise
pub const DEFAULT_SECURE_MODE: bool = true;

/// Length of a hex-encoded SHA-1 digest (160 bits)
pub const LEGACY_DIGEST_HEX_LENGTH: usize = 40;

/// Length of a bcrypt salt in its radix-64 encoding
pub const BCRYPT_SALT_LENGTH: usize = 22;

/// Length of a bcrypt digest in its radix-64 encoding
pub const BCRYPT_DIGEST_LENGTH: usize = 31;

/// bcrypt version tags accepted on verification
pub const BCRYPT_VERSIONS: &[&str] = &["2a", "2b", "2x", "2y"];

// =============================================================================
// Server Configuration
// =============================================================================

/// Default server host address
pub const DEFAULT_SERVER_HOST: &str = "0.0.0.0";

/// Default server port
pub const DEFAULT_SERVER_PORT: u16 = 8080;
