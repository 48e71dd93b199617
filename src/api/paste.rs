//! Purpose: Model the optional knobs of a paste-creation request.
//! Exports: `PasteOptions`, visibility constants, `EXPIRATION_CHOICES`.
//! Role: Carries caller intent to `PasteClient::create_paste`; all
//! membership checks run locally before any request is sent.
//! Invariants: Unset fields are omitted from the request (except the
//! name, which the service expects as an empty string).

use crate::core::error::Error;
use crate::core::sentinel;
use crate::core::syntax;

/// Anyone can view the paste; it appears in public listings.
pub const VISIBILITY_PUBLIC: u8 = 0;
/// Reachable only through the direct link.
pub const VISIBILITY_UNLISTED: u8 = 1;
/// Requires the owning account to view.
pub const VISIBILITY_PRIVATE: u8 = 2;

/// Duration tokens the service accepts for `expiration`.
pub const EXPIRATION_CHOICES: &[&str] = &["N", "10M", "1H", "1D", "1W", "2W", "1M", "6M", "1Y"];

#[derive(Clone, Debug, Default)]
pub struct PasteOptions {
    pub name: Option<String>,
    pub format: Option<String>,
    pub visibility: Option<u8>,
    pub expiration: Option<String>,
}

impl PasteOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Syntax-highlighting identifier; must be a member of
    /// [`crate::core::syntax::FORMATS`].
    pub fn with_format(mut self, format: impl Into<String>) -> Self {
        self.format = Some(format.into());
        self
    }

    pub fn with_visibility(mut self, visibility: u8) -> Self {
        self.visibility = Some(visibility);
        self
    }

    /// Expiration token; must be a member of [`EXPIRATION_CHOICES`].
    pub fn with_expiration(mut self, expiration: impl Into<String>) -> Self {
        self.expiration = Some(expiration.into());
        self
    }

    /// Check every supplied value against its enumerated set. Runs
    /// before the request is assembled, so a bad value never costs a
    /// round trip.
    pub(crate) fn validate(&self) -> Result<(), Error> {
        if let Some(expiration) = &self.expiration {
            if !EXPIRATION_CHOICES.contains(&expiration.as_str()) {
                return Err(sentinel::validation_error("invalid_expire_date"));
            }
        }
        if let Some(visibility) = self.visibility {
            if visibility > VISIBILITY_PRIVATE {
                return Err(sentinel::validation_error("invalid_paste_private"));
            }
        }
        if let Some(format) = &self.format {
            if !syntax::is_known_format(format) {
                return Err(sentinel::validation_error("invalid_paste_format"));
            }
        }
        Ok(())
    }
}
