//! Binary-safe `multipart/form-data` parsing for single-file uploads.
//!
//! The parser works on raw bytes and never decodes the payload as text, so
//! image data that is not valid UTF-8 comes through byte-for-byte.

pub mod boundary;
pub mod filename;
pub mod parser;

pub use boundary::boundary;
pub use filename::base_name;
pub use parser::{extract_file, parse_first_file, FilePart, MultipartError};
