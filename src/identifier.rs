//! The 128-bit identifier value and its canonical text form.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ParseIdentifierError;

/// Length of the canonical hyphenated form.
pub const CANONICAL_LEN: usize = 36;

/// Version nibble written into byte 6.
pub const VERSION_RANDOM: u8 = 4;

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Byte ranges of the five hyphen-separated groups.
const GROUPS: [(usize, usize); 5] = [(0, 4), (4, 6), (6, 8), (8, 10), (10, 16)];

/// Offsets of the hyphens in the canonical form.
const HYPHENS: [usize; 4] = [8, 13, 18, 23];

/// A 16-byte identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Identifier([u8; 16]);

impl Identifier {
    /// Wraps bytes as-is. No version or variant bits are touched.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// Builds a version-4 identifier from 16 random bytes.
    #[must_use]
    pub fn from_random_bytes(mut bytes: [u8; 16]) -> Self {
        bytes[6] = (bytes[6] & 0x0f) | 0x40;
        bytes[8] = (bytes[8] & 0x3f) | 0x80;
        Self(bytes)
    }

    /// The raw bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// High nibble of byte 6.
    #[must_use]
    pub const fn version(&self) -> u8 {
        self.0[6] >> 4
    }

    /// Whether the two top bits of byte 8 are `10`.
    #[must_use]
    pub const fn is_rfc4122_variant(&self) -> bool {
        self.0[8] & 0xc0 == 0x80
    }

    /// Renders the canonical lowercase 8-4-4-4-12 form.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::with_capacity(CANONICAL_LEN);
        for (n, &(start, end)) in GROUPS.iter().enumerate() {
            if n > 0 {
                out.push('-');
            }
            for &byte in &self.0[start..end] {
                out.push(char::from(HEX_DIGITS[usize::from(byte >> 4)]));
                out.push(char::from(HEX_DIGITS[usize::from(byte & 0x0f)]));
            }
        }
        out
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for Identifier {
    type Err = ParseIdentifierError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let input = s.as_bytes();
        if input.len() != CANONICAL_LEN {
            return Err(ParseIdentifierError::Length(input.len()));
        }
        for &index in &HYPHENS {
            if input[index] != b'-' {
                return Err(ParseIdentifierError::Hyphen(index));
            }
        }

        let mut bytes = [0u8; 16];
        let mut nibbles = input.iter().enumerate().filter(|(index, _)| !HYPHENS.contains(index));
        for byte in &mut bytes {
            let mut value = 0u8;
            for _ in 0..2 {
                // Length and hyphen checks leave exactly 32 digits.
                let Some((index, &ch)) = nibbles.next() else {
                    return Err(ParseIdentifierError::Length(input.len()));
                };
                let digit = char::from(ch).to_digit(16).ok_or_else(|| {
                    // Non-hex bytes are found at a char boundary, so this
                    // decodes the full (possibly multi-byte) character.
                    let ch = s
                        .get(index..)
                        .and_then(|rest| rest.chars().next())
                        .unwrap_or(char::REPLACEMENT_CHARACTER);
                    ParseIdentifierError::Digit { ch, index }
                })?;
                value = (value << 4) | digit as u8;
            }
            *byte = value;
        }
        Ok(Self(bytes))
    }
}

impl From<Identifier> for uuid::Uuid {
    fn from(id: Identifier) -> Self {
        uuid::Uuid::from_bytes(id.0)
    }
}

impl Serialize for Identifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.render())
    }
}

impl<'de> Deserialize<'de> for Identifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIXED: [u8; 16] = [
        0x12, 0x34, 0x56, 0x78, 0x9a, 0xbc, 0x4d, 0xef, 0x8a, 0xbc, 0xde, 0xf0, 0x12, 0x34, 0x56,
        0x78,
    ];

    #[test]
    fn renders_fixed_bytes_exactly() {
        let id = Identifier::from_bytes(FIXED);
        assert_eq!(id.render(), "12345678-9abc-4def-8abc-def012345678");
    }

    #[test]
    fn rendering_is_deterministic() {
        let id = Identifier::from_bytes(FIXED);
        assert_eq!(id.render(), id.render());
        assert_eq!(id.to_string(), id.render());
    }

    #[test]
    fn fix_up_leaves_already_tagged_bytes_alone() {
        assert_eq!(Identifier::from_random_bytes(FIXED), Identifier::from_bytes(FIXED));
    }

    #[test]
    fn fix_up_sets_version_and_variant_on_all_ones() {
        let id = Identifier::from_random_bytes([0xff; 16]);
        assert_eq!(id.as_bytes()[6], 0x4f);
        assert_eq!(id.as_bytes()[8], 0xbf);
        assert_eq!(id.render(), "ffffffff-ffff-4fff-bfff-ffffffffffff");
    }

    #[test]
    fn fix_up_sets_version_and_variant_on_all_zeros() {
        let id = Identifier::from_random_bytes([0x00; 16]);
        assert_eq!(id.version(), VERSION_RANDOM);
        assert!(id.is_rfc4122_variant());
        assert_eq!(id.render(), "00000000-0000-4000-8000-000000000000");
    }

    #[test]
    fn untagged_bytes_report_their_own_fields() {
        let id = Identifier::from_bytes([0u8; 16]);
        assert_eq!(id.version(), 0);
        assert!(!id.is_rfc4122_variant());
    }

    #[test]
    fn parses_canonical_form_in_either_case() {
        let lower: Identifier = "12345678-9abc-4def-8abc-def012345678".parse().unwrap();
        let upper: Identifier = "12345678-9ABC-4DEF-8ABC-DEF012345678".parse().unwrap();
        assert_eq!(lower, Identifier::from_bytes(FIXED));
        assert_eq!(upper, lower);
    }

    #[test]
    fn rejects_wrong_length() {
        let err = "12345678-9abc-4def-8abc".parse::<Identifier>().unwrap_err();
        assert_eq!(err, ParseIdentifierError::Length(23));
    }

    #[test]
    fn rejects_misplaced_hyphen() {
        let err = "123456789-abc-4def-8abc-def012345678".parse::<Identifier>().unwrap_err();
        assert_eq!(err, ParseIdentifierError::Hyphen(8));
    }

    #[test]
    fn rejects_non_hex_digit() {
        let err = "1234567g-9abc-4def-8abc-def012345678".parse::<Identifier>().unwrap_err();
        assert_eq!(err, ParseIdentifierError::Digit { ch: 'g', index: 7 });
    }

    #[test]
    fn length_is_reported_in_bytes() {
        // 36 characters, 37 bytes.
        let input = "1234567\u{e9}-9abc-4def-8abc-def012345678";
        assert_eq!(input.chars().count(), 36);
        let err = input.parse::<Identifier>().unwrap_err();
        assert_eq!(err, ParseIdentifierError::Length(37));
    }

    #[test]
    fn non_ascii_digit_is_reported_as_decoded_char() {
        let input = "123456\u{e9}-9abc-4def-8abc-def012345678";
        assert_eq!(input.len(), 36);
        let err = input.parse::<Identifier>().unwrap_err();
        assert_eq!(err, ParseIdentifierError::Digit { ch: '\u{e9}', index: 6 });
        assert_eq!(err.to_string(), "invalid hex digit '\u{e9}' at position 6");
    }

    #[test]
    fn converts_into_uuid_crate_type() {
        let id = Identifier::from_random_bytes([0x5a; 16]);
        let uuid: uuid::Uuid = id.into();
        assert_eq!(uuid.get_version_num(), 4);
        assert_eq!(uuid.get_variant(), uuid::Variant::RFC4122);
        assert_eq!(uuid.to_string(), id.render());
    }

    #[test]
    fn serializes_as_canonical_string() {
        let id = Identifier::from_bytes(FIXED);
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, "\"12345678-9abc-4def-8abc-def012345678\"");
        let back: Identifier = serde_json::from_str(&json).unwrap();
        assert_eq!(back, id);
    }
}
