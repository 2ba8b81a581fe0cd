// Current-format (new-style) packet length encoding (RFC 4880, Section 4.2.2).
//
// Four representations, three of which carry a concrete body length:
//
//   OneOctet   1 byte    values 0..=191, the byte is the value
//   TwoOctet   2 bytes   values 192..=8383, offset encoding
//   FiveOctet  5 bytes   0xFF marker + 32-bit big-endian value
//   Partial    1 byte    0xE0 | log2(chunk), chunk an exact power of two
//
// Best fit always picks the narrowest concrete representation. Partial is
// only ever emitted on request; it frames one chunk of a streamed body,
// not the body's total length.

use std::io::Write;

use crate::error::{Error, Result};

/// Largest value a one-octet length can carry.
pub const ONE_OCTET_MAX: u32 = 191;

/// Smallest value a two-octet length can carry.
pub const TWO_OCTET_MIN: u32 = 192;

/// Largest value a two-octet length can carry.
pub const TWO_OCTET_MAX: u32 = 8383;

/// First octet of a five-octet length.
pub const FIVE_OCTET_MARKER: u8 = 0xFF;

/// High bits of a partial-length octet; the low five bits hold the exponent.
pub const PARTIAL_PREFIX: u8 = 0xE0;

/// Largest exponent a partial length can carry.
pub const PARTIAL_MAX_EXPONENT: u32 = 30;

// ---------------------------------------------------------------------------
// Representation
// ---------------------------------------------------------------------------

/// Current-format length representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NewLengthType {
    OneOctet,
    TwoOctet,
    FiveOctet,
    Partial,
}

impl NewLengthType {
    pub fn name(self) -> &'static str {
        match self {
            NewLengthType::OneOctet => "one-octet length",
            NewLengthType::TwoOctet => "two-octet length",
            NewLengthType::FiveOctet => "five-octet length",
            NewLengthType::Partial => "partial length",
        }
    }

    /// Check that `length` is representable by this representation.
    pub fn check(self, length: u32) -> Result<()> {
        match self {
            NewLengthType::OneOctet if length > ONE_OCTET_MAX => {
                Err(Error::LengthOutOfRange {
                    length,
                    length_type: self.name(),
                })
            }
            NewLengthType::TwoOctet if !(TWO_OCTET_MIN..=TWO_OCTET_MAX).contains(&length) => {
                Err(Error::LengthOutOfRange {
                    length,
                    length_type: self.name(),
                })
            }
            NewLengthType::Partial => partial_exponent(length).map(|_| ()),
            _ => Ok(()),
        }
    }
}

/// Exponent of a partial-length chunk, or `InvalidPartialLength`.
fn partial_exponent(length: u32) -> Result<u8> {
    if length == 0 || !length.is_power_of_two() {
        return Err(Error::InvalidPartialLength(length));
    }
    let exp = length.trailing_zeros();
    if exp > PARTIAL_MAX_EXPONENT {
        return Err(Error::InvalidPartialLength(length));
    }
    Ok(exp as u8)
}

// ---------------------------------------------------------------------------
// Length encoder
// ---------------------------------------------------------------------------

/// A current-format body length, optionally pinned to a representation.
///
/// With no pinned representation the narrowest fit is resolved when
/// `encode` runs. A pinned representation is validated at construction and
/// again at encode time, since `set_length` can move the value out of
/// range after construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPacketLength {
    pub length: u32,
    pub length_type: Option<NewLengthType>,
}

impl NewPacketLength {
    /// A length encoded with the best-fit representation.
    pub fn new(length: u32) -> Self {
        Self {
            length,
            length_type: None,
        }
    }

    /// A length pinned to an explicit representation.
    pub fn with_type(length: u32, length_type: NewLengthType) -> Result<Self> {
        length_type.check(length)?;
        Ok(Self {
            length,
            length_type: Some(length_type),
        })
    }

    /// The narrowest concrete representation that holds `length`.
    ///
    /// Partial is never chosen automatically.
    pub fn best_length_type(length: u32) -> NewLengthType {
        if length <= ONE_OCTET_MAX {
            NewLengthType::OneOctet
        } else if length <= TWO_OCTET_MAX {
            NewLengthType::TwoOctet
        } else {
            NewLengthType::FiveOctet
        }
    }

    /// Replace the raw length value, keeping the pinned representation.
    pub fn set_length(&mut self, length: u32) {
        self.length = length;
    }

    /// The representation `encode` will use for the current value.
    pub fn resolved_type(&self) -> NewLengthType {
        self.length_type
            .unwrap_or_else(|| Self::best_length_type(self.length))
    }

    /// Number of bytes `encode` will emit.
    pub fn encoded_len(&self) -> usize {
        match self.resolved_type() {
            NewLengthType::OneOctet | NewLengthType::Partial => 1,
            NewLengthType::TwoOctet => 2,
            NewLengthType::FiveOctet => 5,
        }
    }

    /// Emit the length encoding. All range checks run before the first byte
    /// is written.
    pub fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        let length = self.length;
        let length_type = self.resolved_type();
        length_type.check(length)?;

        match length_type {
            NewLengthType::OneOctet => {
                w.write_all(&[length as u8])?;
            }
            NewLengthType::TwoOctet => {
                let v = length - TWO_OCTET_MIN;
                w.write_all(&[(v >> 8) as u8 + TWO_OCTET_MIN as u8, (v & 0xFF) as u8])?;
            }
            NewLengthType::FiveOctet => {
                let mut buf = [FIVE_OCTET_MARKER; 5];
                buf[1..].copy_from_slice(&length.to_be_bytes());
                w.write_all(&buf)?;
            }
            NewLengthType::Partial => {
                // check() already proved this is a valid power of two.
                let exp = length.trailing_zeros() as u8;
                w.write_all(&[PARTIAL_PREFIX | exp])?;
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
