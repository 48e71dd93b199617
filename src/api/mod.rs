//! Purpose: Define the stable public API boundary for the client.
//! Exports: Client, options, parsed-value, and error types.
//! Role: Public, additive-only surface; callers never reach into core.
//! Invariants: This module is the only public path to client operations.

mod client;
mod paste;

pub use crate::core::error::{Error, ErrorKind};
pub use crate::core::sentinel::{API_ERRORS, Sentinel};
pub use crate::core::syntax::{FORMATS, is_known_format};
pub use crate::core::xml::{XmlValue, parse_document, wrap_root};
pub use client::{ApiResult, DEFAULT_BASE_URL, DEFAULT_RESULTS_LIMIT, PasteClient};
pub use paste::{
    EXPIRATION_CHOICES, PasteOptions, VISIBILITY_PRIVATE, VISIBILITY_PUBLIC, VISIBILITY_UNLISTED,
};
