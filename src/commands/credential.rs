//! Hash and verify commands - offline access to the credential hasher.

use crate::cli::args::{HashArgs, VerifyArgs};
use crate::config::Config;
use crate::domain::{CredentialFormat, CredentialHasher, HashMode};
use crate::errors::{AppError, AppResult};

/// Print the stored credential for a password
pub fn hash(args: HashArgs, config: &Config) -> AppResult<()> {
    let hasher = CredentialHasher::new(config.bcrypt_cost)?;
    let mode = HashMode::from(!args.insecure);

    println!("{}", hasher.hash(&args.password, mode)?);
    Ok(())
}

/// Check a password against a stored credential.
///
/// A mismatch is reported as `AppError::InvalidCredentials` so the process
/// exits non-zero.
pub fn verify(args: VerifyArgs) -> AppResult<()> {
    let format = CredentialFormat::parse(&args.stored);
    tracing::debug!("Stored credential format: {}", format);

    if matches!(format, CredentialFormat::Malformed) {
        tracing::warn!("Stored credential is neither bcrypt nor SHA-1 hex");
    }

    // Verification reads the cost from the credential, up to a fixed limit
    if CredentialHasher::default().verify(&args.password, &args.stored) {
        println!("match");
        Ok(())
    } else {
        println!("no match");
        Err(AppError::InvalidCredentials)
    }
}
