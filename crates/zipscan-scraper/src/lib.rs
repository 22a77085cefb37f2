//! Postal-code metadata lookups against the zip-codes.com directory.
//!
//! Each lookup is a short pipeline: fetch the listing page (and, for county
//! searches, every following page), pull fields out of the markup with text
//! patterns, then assemble the matches into [`zipscan_core::records`] rows.

pub mod assemble;
pub mod client;
pub mod error;
pub mod extract;
pub mod pagination;
pub mod patterns;

pub use client::ZipCodesClient;
pub use error::ScraperError;
pub use extract::{extract_fields, ExtractedFields, FieldPattern, RegexField};
