//! Table script loading

use std::io::ErrorKind;
use std::path::Path;

use anyhow::Result;
use encoding_rs::{Encoding, WINDOWS_1252};

use crate::error::SprocGenError;

/// Read a table script as a string.
///
/// A byte order mark selects the encoding (SSMS saves scripts as UTF-16 when
/// "Unicode" is chosen). Without one, UTF-8 is tried first and Windows-1252
/// is the fallback.
pub fn read_table_script(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => SprocGenError::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => SprocGenError::FileReadError {
            path: path.to_path_buf(),
            source: e,
        },
    })?;

    decode_script(&bytes).ok_or_else(|| {
        SprocGenError::InvalidEncoding {
            path: path.to_path_buf(),
        }
        .into()
    })
}

/// Decode raw script bytes, returning `None` when they are not valid text.
pub fn decode_script(bytes: &[u8]) -> Option<String> {
    if let Some((encoding, bom_len)) = Encoding::for_bom(bytes) {
        let (decoded, had_errors) = encoding.decode_without_bom_handling(&bytes[bom_len..]);
        return (!had_errors).then(|| decoded.into_owned());
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => Some(s.to_string()),
        Err(_) => {
            let (decoded, _, had_errors) = WINDOWS_1252.decode(bytes);
            (!had_errors).then(|| decoded.into_owned())
        }
    }
}
