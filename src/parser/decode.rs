// Byte-to-text decoding for GEDCOM input

use crate::config::ParseMode;
use crate::error::{Error, Result};

const BOM: char = '\u{feff}';

/// Decode raw file contents as UTF-8.
///
/// In tolerant mode invalid sequences are dropped, not replaced. In strict mode
/// the first invalid sequence is reported with its byte offset. A leading BOM
/// is removed in both modes.
pub fn decode(bytes: &[u8], mode: ParseMode) -> Result<String> {
    let text = match mode {
        ParseMode::Strict => std::str::from_utf8(bytes)
            .map_err(|e| Error::decode(e.valid_up_to()))?
            .to_string(),
        ParseMode::Tolerant => {
            let mut text = String::with_capacity(bytes.len());
            let mut skipped = 0usize;
            for chunk in bytes.utf8_chunks() {
                text.push_str(chunk.valid());
                skipped += chunk.invalid().len();
            }
            if skipped > 0 {
                log::warn!("skipped {} undecodable bytes", skipped);
            }
            text
        }
    };

    Ok(match text.strip_prefix(BOM) {
        Some(rest) => rest.to_string(),
        None => text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_utf8_passes_through() {
        let text = decode("0 @I1@ INDI\n1 NAME Jörg /Müller/".as_bytes(), ParseMode::Strict).unwrap();
        assert_eq!(text, "0 @I1@ INDI\n1 NAME Jörg /Müller/");
    }

    #[test]
    fn test_tolerant_skips_invalid_bytes() {
        let bytes = b"1 NAME An\xffna /A/";
        let text = decode(bytes, ParseMode::Tolerant).unwrap();
        assert_eq!(text, "1 NAME Anna /A/");
    }

    #[test]
    fn test_strict_reports_offset() {
        let bytes = b"0 HEAD\n\xc3";
        let err = decode(bytes, ParseMode::Strict).unwrap_err();
        assert!(matches!(err, Error::Decode { offset: 7 }));
    }

    #[test]
    fn test_bom_is_stripped() {
        let bytes = b"\xef\xbb\xbf0 HEAD";
        assert_eq!(decode(bytes, ParseMode::Tolerant).unwrap(), "0 HEAD");
        assert_eq!(decode(bytes, ParseMode::Strict).unwrap(), "0 HEAD");
    }
}
