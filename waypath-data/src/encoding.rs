//! Text encodings tried when decoding layer files.
//!
//! Layer exports from desktop GIS tools are not always UTF-8; Arabic
//! attribute tables are often written in Windows-1256. Providers try a list
//! of encodings in order and keep the first one that both decodes and
//! parses.

use encoding_rs::WINDOWS_1256;
use thiserror::Error;

/// A supported text encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextEncoding {
    /// Strict UTF-8; a leading byte-order mark is ignored.
    Utf8,
    /// Windows-1256 (cp1256), the Arabic Windows code page.
    Windows1256,
    /// ISO-8859-1, where every byte maps to the code point of equal value.
    Latin1,
}

/// Default attempt order: UTF-8, then Windows-1256, then Latin-1.
pub const DEFAULT_ENCODINGS: [TextEncoding; 3] = [
    TextEncoding::Utf8,
    TextEncoding::Windows1256,
    TextEncoding::Latin1,
];

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Bytes were not valid in the requested encoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {encoding} at byte {offset}")]
pub struct DecodeError {
    /// Encoding that rejected the input.
    pub encoding: TextEncoding,
    /// Offset of the first invalid byte.
    pub offset: usize,
}

impl TextEncoding {
    /// Canonical label of the encoding.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Utf8 => "utf-8",
            Self::Windows1256 => "windows-1256",
            Self::Latin1 => "latin1",
        }
    }

    /// Decode `bytes` into a string.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError`] when `bytes` is not valid in the encoding.
    /// Latin-1 decoding cannot fail.
    ///
    /// # Examples
    /// ```
    /// use waypath_data::TextEncoding;
    ///
    /// assert_eq!(TextEncoding::Latin1.decode(b"caf\xE9").unwrap(), "café");
    /// assert!(TextEncoding::Utf8.decode(b"caf\xE9").is_err());
    /// ```
    pub fn decode(self, bytes: &[u8]) -> Result<String, DecodeError> {
        match self {
            Self::Utf8 => {
                let body = bytes.strip_prefix(UTF8_BOM).unwrap_or(bytes);
                std::str::from_utf8(body)
                    .map(str::to_owned)
                    .map_err(|err| DecodeError {
                        encoding: self,
                        offset: err.valid_up_to(),
                    })
            }
            Self::Windows1256 => WINDOWS_1256
                .decode_without_bom_handling_and_without_replacement(bytes)
                .map(std::borrow::Cow::into_owned)
                .ok_or_else(|| DecodeError {
                    encoding: self,
                    offset: first_unmapped_byte(bytes),
                }),
            Self::Latin1 => Ok(bytes.iter().copied().map(char::from).collect()),
        }
    }
}

/// Single-byte code page, so each byte can be checked on its own.
fn first_unmapped_byte(bytes: &[u8]) -> usize {
    bytes
        .iter()
        .position(|byte| {
            WINDOWS_1256
                .decode_without_bom_handling_and_without_replacement(std::slice::from_ref(byte))
                .is_none()
        })
        .unwrap_or(bytes.len())
}

impl std::fmt::Display for TextEncoding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

impl std::str::FromStr for TextEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Self::Utf8),
            "windows-1256" | "cp1256" => Ok(Self::Windows1256),
            "latin1" | "latin-1" | "iso-8859-1" => Ok(Self::Latin1),
            _ => Err(format!("unsupported text encoding '{s}'")),
        }
    }
}
