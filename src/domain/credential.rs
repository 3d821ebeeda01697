//! Credential hashing policy.
//!
//! Two storage schemes live side by side:
//! - secure: bcrypt with a per-hash random salt and a fixed work factor
//! - insecure: a single unsalted SHA-1 digest, hex encoded
//!
//! The insecure scheme exists to demonstrate why fast unsalted digests are
//! unfit for password storage. Verification never needs to be told which
//! scheme produced a credential; it decodes the stored string first.

use std::fmt;

use sha1::{Digest, Sha1};

use crate::config::{
    BCRYPT_DIGEST_LENGTH, BCRYPT_SALT_LENGTH, BCRYPT_VERSIONS, DEFAULT_BCRYPT_COST,
    LEGACY_DIGEST_HEX_LENGTH, MAX_BCRYPT_COST, MAX_VERIFY_BCRYPT_COST, MIN_BCRYPT_COST,
};
use crate::errors::{AppError, AppResult};

/// Hashing mode applied to new credentials.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HashMode {
    /// Adaptive, salted bcrypt
    #[default]
    Secure,
    /// Unsalted SHA-1 (deliberately weak)
    Insecure,
}

impl HashMode {
    pub fn is_secure(self) -> bool {
        matches!(self, HashMode::Secure)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            HashMode::Secure => "secure",
            HashMode::Insecure => "insecure",
        }
    }
}

impl From<bool> for HashMode {
    fn from(secure: bool) -> Self {
        if secure {
            HashMode::Secure
        } else {
            HashMode::Insecure
        }
    }
}

impl From<HashMode> for bool {
    fn from(mode: HashMode) -> Self {
        mode.is_secure()
    }
}

impl fmt::Display for HashMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Decoded shape of a stored credential.
///
/// Borrowed from the stored string; classification never allocates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CredentialFormat<'a> {
    /// Modular crypt format: `$<version>$<cost>$<salt><digest>`
    Adaptive {
        version: &'a str,
        cost: u32,
        salt: &'a str,
        digest: &'a str,
    },
    /// 40 lowercase hex characters
    LegacyDigest { hex: &'a str },
    Malformed,
}

impl<'a> CredentialFormat<'a> {
    /// Classify a stored credential string.
    pub fn parse(stored: &'a str) -> Self {
        if let Some(adaptive) = parse_bcrypt(stored) {
            return adaptive;
        }

        if is_legacy_digest(stored) {
            return CredentialFormat::LegacyDigest { hex: stored };
        }

        CredentialFormat::Malformed
    }

    /// Mode that would have produced this credential, if recognized.
    pub fn mode(&self) -> Option<HashMode> {
        match self {
            CredentialFormat::Adaptive { .. } => Some(HashMode::Secure),
            CredentialFormat::LegacyDigest { .. } => Some(HashMode::Insecure),
            CredentialFormat::Malformed => None,
        }
    }
}

impl fmt::Display for CredentialFormat<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CredentialFormat::Adaptive {
                version,
                cost,
                salt,
                ..
            } => write!(f, "bcrypt ${}$ cost {} salt {}", version, cost, salt),
            CredentialFormat::LegacyDigest { .. } => f.write_str("unsalted SHA-1"),
            CredentialFormat::Malformed => f.write_str("unrecognized"),
        }
    }
}

fn parse_bcrypt(stored: &str) -> Option<CredentialFormat<'_>> {
    let mut parts = stored.strip_prefix('$')?.splitn(3, '$');
    let version = parts.next()?;
    let cost = parts.next()?;
    let payload = parts.next()?;

    if !BCRYPT_VERSIONS.contains(&version) {
        return None;
    }

    if cost.len() != 2 || !cost.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let cost: u32 = cost.parse().ok()?;
    if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
        return None;
    }

    if payload.len() != BCRYPT_SALT_LENGTH + BCRYPT_DIGEST_LENGTH
        || !payload.bytes().all(is_bcrypt_radix64)
    {
        return None;
    }
    let (salt, digest) = payload.split_at(BCRYPT_SALT_LENGTH);

    Some(CredentialFormat::Adaptive {
        version,
        cost,
        salt,
        digest,
    })
}

/// bcrypt uses its own radix-64 alphabet: `./A-Za-z0-9`
fn is_bcrypt_radix64(b: u8) -> bool {
    b == b'.' || b == b'/' || b.is_ascii_alphanumeric()
}

fn is_legacy_digest(stored: &str) -> bool {
    stored.len() == LEGACY_DIGEST_HEX_LENGTH
        && stored
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}

/// Produces and checks stored credentials.
///
/// Holds only the bcrypt work factor; the mode is chosen per call by
/// whoever owns it.
#[derive(Debug, Clone, Copy)]
pub struct CredentialHasher {
    cost: u32,
}

impl Default for CredentialHasher {
    fn default() -> Self {
        Self {
            cost: DEFAULT_BCRYPT_COST,
        }
    }
}

impl CredentialHasher {
    /// Create a hasher with the given bcrypt work factor.
    ///
    /// # Errors
    /// Returns a configuration error if the cost is outside what bcrypt accepts.
    pub fn new(cost: u32) -> AppResult<Self> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(AppError::config(format!(
                "bcrypt cost must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, cost
            )));
        }

        Ok(Self { cost })
    }

    /// Work factor used for secure hashes.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext under the given mode.
    ///
    /// Secure output is non-deterministic (fresh salt each call). Insecure
    /// output is deterministic.
    ///
    /// # Errors
    /// Only if the bcrypt primitive itself fails (e.g. no OS randomness).
    pub fn hash(&self, plaintext: &str, mode: HashMode) -> AppResult<String> {
        match mode {
            HashMode::Secure => bcrypt::hash(plaintext, self.cost)
                .map_err(|e| AppError::internal(format!("Password hash failed: {}", e))),
            HashMode::Insecure => Ok(legacy_digest(plaintext)),
        }
    }

    /// Check a plaintext against a stored credential of either scheme.
    ///
    /// Malformed credentials simply fail to match, as do bcrypt credentials
    /// embedding a cost above `max(self.cost(), MAX_VERIFY_BCRYPT_COST)`.
    pub fn verify(&self, plaintext: &str, stored: &str) -> bool {
        match CredentialFormat::parse(stored) {
            CredentialFormat::Adaptive { cost, .. } if cost > self.max_verify_cost() => {
                tracing::warn!(cost, "Refusing to verify bcrypt credential above cost limit");
                false
            }
            // bcrypt re-derives with the embedded cost and salt and compares
            // in constant time
            CredentialFormat::Adaptive { .. } => {
                bcrypt::verify(plaintext, stored).unwrap_or(false)
            }
            CredentialFormat::LegacyDigest { hex } => legacy_digest(plaintext) == hex,
            CredentialFormat::Malformed => false,
        }
    }

    fn max_verify_cost(&self) -> u32 {
        self.cost.max(MAX_VERIFY_BCRYPT_COST)
    }
}

fn legacy_digest(plaintext: &str) -> String {
    hex::encode(Sha1::digest(plaintext.as_bytes()))
}
