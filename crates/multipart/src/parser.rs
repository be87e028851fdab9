use crate::boundary::boundary;
use crate::filename::base_name;

const HEADER_END: &[u8] = b"\r\n\r\n";
const FILENAME_PARAM: &str = "filename=\"";
/// Length of the CRLF that precedes every delimiter.
const LINE_BREAK_LEN: usize = 2;

/// Multipart extraction errors.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MultipartError {
    #[error("No boundary in Content-Type")]
    MissingBoundary,
    #[error("No file part found")]
    NoFilePart,
}

/// A file part borrowed from the request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilePart<'a> {
    /// Sanitized base name taken from the `filename="..."` attribute.
    pub filename: String,
    pub data: &'a [u8],
}

/// Resolve the boundary from `content_type` and return the first file part.
pub fn extract_file<'a>(
    content_type: &str,
    body: &'a [u8],
) -> Result<FilePart<'a>, MultipartError> {
    let boundary = boundary(content_type).ok_or(MultipartError::MissingBoundary)?;
    parse_first_file(body, boundary).ok_or(MultipartError::NoFilePart)
}

/// Return the first part that carries a `filename` attribute.
///
/// Parts without a filename (plain form fields) are skipped. Later file parts
/// are ignored: one upload request stores one file.
pub fn parse_first_file<'a>(body: &'a [u8], boundary: &str) -> Option<FilePart<'a>> {
    let delimiter = format!("--{boundary}");

    for part in Segments::new(body, delimiter.as_bytes()) {
        // Preamble, or the closing `--` after the last delimiter.
        if part.is_empty() || part.starts_with(b"--") {
            continue;
        }
        let Some(header_end) = find(part, HEADER_END, 0) else {
            continue;
        };
        let headers = String::from_utf8_lossy(&part[..header_end]);
        let Some(raw) = filename_param(&headers) else {
            continue;
        };
        let Some(filename) = base_name(raw) else {
            tracing::debug!(raw, "skipping part with unusable filename");
            continue;
        };

        let data_start = header_end + HEADER_END.len();
        let data_end = part.len().saturating_sub(LINE_BREAK_LEN).max(data_start);
        return Some(FilePart {
            filename: filename.to_string(),
            data: &part[data_start..data_end],
        });
    }
    None
}

fn filename_param(headers: &str) -> Option<&str> {
    let mut rest = headers;
    while let Some(idx) = rest.find(FILENAME_PARAM) {
        let value = &rest[idx + FILENAME_PARAM.len()..];
        let end = value.find('"')?;
        if end > 0 {
            return Some(&value[..end]);
        }
        rest = &value[end + 1..];
    }
    None
}

fn find(haystack: &[u8], needle: &[u8], from: usize) -> Option<usize> {
    haystack
        .get(from..)?
        .windows(needle.len())
        .position(|w| w == needle)
        .map(|i| i + from)
}

/// Byte slices between successive occurrences of a delimiter.
///
/// `body` and `delimiter` have separate lifetimes so yielded slices outlive
/// a delimiter built on the stack.
struct Segments<'a, 'd> {
    body: &'a [u8],
    delimiter: &'d [u8],
    pos: Option<usize>,
}

impl<'a, 'd> Segments<'a, 'd> {
    fn new(body: &'a [u8], delimiter: &'d [u8]) -> Self {
        Self {
            body,
            delimiter,
            pos: Some(0),
        }
    }
}

impl<'a> Iterator for Segments<'a, '_> {
    type Item = &'a [u8];

    fn next(&mut self) -> Option<Self::Item> {
        let start = self.pos?;
        match find(self.body, self.delimiter, start) {
            Some(idx) => {
                self.pos = Some(idx + self.delimiter.len());
                Some(&self.body[start..idx])
            }
            None => {
                self.pos = None;
                Some(&self.body[start..])
            }
        }
    }
}
