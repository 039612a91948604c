//! Shared helpers for working with `figment::Jail` in tests.
//!
//! The jail gives each test a scratch working directory and restores the
//! environment afterwards, so configuration documents and prefixed
//! variables never leak between tests.

use anyhow::{Result, anyhow};

/// Executes `f` inside a [`figment::Jail`] with a cleared environment,
/// returning the closure's output.
///
/// # Errors
///
/// Returns an error if the jail initialisation fails or the closure returns a
/// [`figment::error::Error`].
pub fn with_jail<F, T>(f: F) -> Result<T>
where
    F: FnOnce(&mut figment::Jail) -> figment::error::Result<T>,
{
    let mut output = None;
    figment::Jail::try_with(|j| {
        j.clear_env();
        output = Some(f(j)?);
        Ok(())
    })
    .map_err(|err| anyhow!(err.to_string()))?;
    output.ok_or_else(|| anyhow!("jail closure did not return a value"))
}

/// Converts any error implementing [`ToString`] into a [`figment::Error`].
///
/// Lets jail closures propagate crate errors with `?`.
#[expect(
    clippy::needless_pass_by_value,
    reason = "callers often own the error and passing by value avoids extra clones"
)]
pub fn figment_error<E: ToString>(err: E) -> figment::Error {
    figment::Error::from(err.to_string())
}
