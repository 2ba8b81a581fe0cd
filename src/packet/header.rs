// Packet header encoding, both framing generations (RFC 4880, Section 4.2).
//
// Current (new) format:  [0xC0 | type]  [length encoding]
//   type is a 6-bit field; the length follows the rules in `length`.
//
// Legacy (old) format:   [0x80 | (type << 2) | code]  [length bytes]
//   type is a 4-bit field; code selects the length width:
//     0 = one octet, 1 = two octets, 2 = four octets, 3 = indeterminate
//   big-endian, and indeterminate emits no length bytes at all.
//
// The two layouts are mutually incompatible; `PacketHeader` is the closed
// choice between them.

use std::io::Write;

use log::trace;

use crate::error::{Error, Result};

use super::length::{NewLengthType, NewPacketLength};
use super::types::{MAX_NEW_TYPE, MAX_OLD_TYPE, PacketType};

/// High bit set on every packet header octet.
pub const HEADER_BIT: u8 = 0x80;

/// Bit 6, set on current-format header octets.
pub const NEW_FORMAT_BIT: u8 = 0x40;

// ---------------------------------------------------------------------------
// Current-format tag octet
// ---------------------------------------------------------------------------

/// The single-octet current-format tag: `0xC0 | type`.
///
/// This is the one place the 6-bit type width is enforced for the current
/// format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPacketTag {
    pub packet_type: PacketType,
}

impl NewPacketTag {
    pub fn new(packet_type: PacketType) -> Self {
        Self { packet_type }
    }

    pub fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        let code = self.packet_type.code();
        if code > MAX_NEW_TYPE {
            return Err(Error::InvalidPacketType {
                code,
                max: MAX_NEW_TYPE,
            });
        }
        w.write_all(&[HEADER_BIT | NEW_FORMAT_BIT | code])?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Current-format header
// ---------------------------------------------------------------------------

/// Current-format header: tag octet followed by the length encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NewPacketHeader {
    pub tag: NewPacketTag,
    pub length: NewPacketLength,
}

impl NewPacketHeader {
    /// Header with best-fit length representation.
    pub fn new(packet_type: PacketType, length: u32) -> Self {
        Self {
            tag: NewPacketTag::new(packet_type),
            length: NewPacketLength::new(length),
        }
    }

    /// Header with an explicitly pinned length representation.
    pub fn with_length_type(
        packet_type: PacketType,
        length: u32,
        length_type: NewLengthType,
    ) -> Result<Self> {
        Ok(Self {
            tag: NewPacketTag::new(packet_type),
            length: NewPacketLength::with_type(length, length_type)?,
        })
    }

    /// Header from pre-built parts.
    pub fn from_parts(tag: NewPacketTag, length: NewPacketLength) -> Self {
        Self { tag, length }
    }

    pub fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        // Validate the length before the tag octet goes out, so a bad
        // header emits nothing at all.
        self.length.resolved_type().check(self.length.length)?;
        self.tag.encode(w)?;
        self.length.encode(w)
    }
}

// ---------------------------------------------------------------------------
// Legacy-format header
// ---------------------------------------------------------------------------

/// Legacy length representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OldLengthType {
    OneOctet,
    TwoOctet,
    FourOctet,
    Indeterminate,
}

impl OldLengthType {
    /// The 2-bit length-type code in the header octet.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            OldLengthType::OneOctet => 0,
            OldLengthType::TwoOctet => 1,
            OldLengthType::FourOctet => 2,
            OldLengthType::Indeterminate => 3,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            OldLengthType::OneOctet => "legacy one-octet length",
            OldLengthType::TwoOctet => "legacy two-octet length",
            OldLengthType::FourOctet => "legacy four-octet length",
            OldLengthType::Indeterminate => "indeterminate length",
        }
    }

    /// Check that `length` fits this width. Widths reject values above
    /// their ceiling; TwoOctet also rejects values below its natural floor
    /// (FourOctet has none, so any value may be padded to four octets).
    fn check(self, length: u32) -> Result<()> {
        let ok = match self {
            OldLengthType::OneOctet => length <= 0xFF,
            OldLengthType::TwoOctet => (0x100..=0xFFFF).contains(&length),
            OldLengthType::FourOctet => true,
            OldLengthType::Indeterminate => return Err(Error::InconsistentLength),
        };
        if ok {
            Ok(())
        } else {
            Err(Error::LengthOutOfRange {
                length,
                length_type: self.name(),
            })
        }
    }
}

/// Legacy-format header: packed header octet, then the length bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OldPacketHeader {
    pub packet_type: PacketType,
    /// Concrete body length; `None` only for indeterminate headers.
    pub length: Option<u32>,
    pub length_type: OldLengthType,
}

impl OldPacketHeader {
    /// Header with best-fit length width.
    pub fn new(packet_type: PacketType, length: u32) -> Result<Self> {
        Self::with_length_type(packet_type, length, Self::best_length_type(length))
    }

    /// Header with an explicitly pinned length width.
    ///
    /// `Indeterminate` is rejected here: it contradicts the concrete
    /// `length` argument. Use [`OldPacketHeader::indeterminate`] instead.
    pub fn with_length_type(
        packet_type: PacketType,
        length: u32,
        length_type: OldLengthType,
    ) -> Result<Self> {
        check_old_type(packet_type)?;
        length_type.check(length)?;
        Ok(Self {
            packet_type,
            length: Some(length),
            length_type,
        })
    }

    /// Header for a body that runs to the end of the enclosing stream.
    pub fn indeterminate(packet_type: PacketType) -> Result<Self> {
        check_old_type(packet_type)?;
        Ok(Self {
            packet_type,
            length: None,
            length_type: OldLengthType::Indeterminate,
        })
    }

    /// The narrowest width that holds `length`.
    ///
    /// Indeterminate is never chosen automatically.
    pub fn best_length_type(length: u32) -> OldLengthType {
        if length <= 0xFF {
            OldLengthType::OneOctet
        } else if length <= 0xFFFF {
            OldLengthType::TwoOctet
        } else {
            OldLengthType::FourOctet
        }
    }

    /// Replace the length value, keeping the pinned width. Validity is
    /// re-checked at encode time.
    pub fn set_length(&mut self, length: u32) {
        self.length = Some(length);
    }

    /// Emit the header. All checks run before the first byte is written.
    pub fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        check_old_type(self.packet_type)?;

        match (self.length_type, self.length) {
            (OldLengthType::Indeterminate, None) => {
                w.write_all(&[self.header_octet()])?;
            }
            (OldLengthType::Indeterminate, Some(_)) => {
                // A concrete length was forced onto an indeterminate header.
                return Err(Error::InconsistentLength);
            }
            (_, None) => return Err(Error::InconsistentLength),
            (length_type, Some(length)) => {
                length_type.check(length)?;
                let be = length.to_be_bytes();
                w.write_all(&[self.header_octet()])?;
                match length_type {
                    OldLengthType::OneOctet => w.write_all(&be[3..])?,
                    OldLengthType::TwoOctet => w.write_all(&be[2..])?,
                    OldLengthType::FourOctet => w.write_all(&be)?,
                    OldLengthType::Indeterminate => unreachable!(),
                }
            }
        }
        Ok(())
    }

    fn header_octet(&self) -> u8 {
        HEADER_BIT | (self.packet_type.code() << 2) | self.length_type.code()
    }
}

fn check_old_type(packet_type: PacketType) -> Result<()> {
    let code = packet_type.code();
    if code > MAX_OLD_TYPE {
        return Err(Error::InvalidPacketType {
            code,
            max: MAX_OLD_TYPE,
        });
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Header choice
// ---------------------------------------------------------------------------

/// A packet header in either framing generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PacketHeader {
    Old(OldPacketHeader),
    New(NewPacketHeader),
}

impl PacketHeader {
    /// Default header for `(packet_type, length)`: current format,
    /// best-fit length.
    pub fn best_fit(packet_type: PacketType, length: u32) -> Self {
        trace!(
            "best-fit header: type={} length={}",
            packet_type.code(),
            length
        );
        PacketHeader::New(NewPacketHeader::new(packet_type, length))
    }

    pub fn packet_type(&self) -> PacketType {
        match self {
            PacketHeader::Old(h) => h.packet_type,
            PacketHeader::New(h) => h.tag.packet_type,
        }
    }

    pub fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        match self {
            PacketHeader::Old(h) => h.encode(w),
            PacketHeader::New(h) => h.encode(w),
        }
    }
}

impl From<OldPacketHeader> for PacketHeader {
    fn from(h: OldPacketHeader) -> Self {
        PacketHeader::Old(h)
    }
}

impl From<NewPacketHeader> for PacketHeader {
    fn from(h: NewPacketHeader) -> Self {
        PacketHeader::New(h)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
