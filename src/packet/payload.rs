// Concrete packet payloads: Marker, Literal Data, User ID.
//
// A payload knows its packet type, its body length, and how to write the
// body. Serialization resolves a header first: the payload's own pre-set
// header if one was attached (pinning a representation for interop), else
// a best-fit current-format header synthesized from (type, body length).
//
// Framing contract: the declared body length must equal the number of body
// bytes written. Both derive from the same fields here, and the payload is
// validated before the first header byte goes out, so a failed encode
// leaves the sink untouched.

use std::io::Write;

use log::trace;

use crate::error::{Error, Result};

use super::header::PacketHeader;
use super::types::PacketType;

/// The marker packet body, always exactly these three bytes ("PGP").
pub const MARKER_BODY: [u8; 3] = [0x50, 0x47, 0x50];

/// Capacity of the literal-data filename field (one-octet length prefix).
pub const MAX_FILENAME_LEN: usize = 255;

fn resolve_header(
    header: Option<&PacketHeader>,
    packet_type: PacketType,
    body_length: u32,
) -> PacketHeader {
    match header {
        Some(h) => *h,
        None => PacketHeader::best_fit(packet_type, body_length),
    }
}

/// Narrow a body length to the 32-bit space the length encodings cover.
fn body_len_u32(field: &'static str, len: usize) -> Result<u32> {
    u32::try_from(len).map_err(|_| Error::FieldTooLong {
        field,
        len,
        max: u32::MAX as usize,
    })
}

// ---------------------------------------------------------------------------
// Marker packet
// ---------------------------------------------------------------------------

/// Marker packet (tag 10). The body is the fixed string "PGP".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MarkerPacket {
    pub header: Option<PacketHeader>,
}

impl MarkerPacket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn packet_type(&self) -> PacketType {
        PacketType::Marker
    }

    pub fn body_length(&self) -> u32 {
        MARKER_BODY.len() as u32
    }

    pub fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        resolve_header(self.header.as_ref(), self.packet_type(), self.body_length())
            .encode(w)?;
        w.write_all(&MARKER_BODY)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Literal data packet
// ---------------------------------------------------------------------------

/// Format octet of a literal data packet (RFC 4880, Section 5.9).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataFormat {
    /// Binary data, `b'b'`.
    #[default]
    Binary,
    /// Text with native line endings, `b't'`.
    Text,
    /// UTF-8 text, `b'u'`.
    Utf8,
}

impl DataFormat {
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            DataFormat::Binary => b'b',
            DataFormat::Text => b't',
            DataFormat::Utf8 => b'u',
        }
    }
}

/// Literal data packet (tag 11).
///
/// Body layout: format octet, one-octet filename length, filename bytes,
/// four-octet big-endian modification time, then the data.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiteralDataPacket {
    pub header: Option<PacketHeader>,
    pub format: DataFormat,
    pub filename: Vec<u8>,
    /// Modification time, seconds since the epoch; 0 means unknown.
    pub timestamp: u32,
    pub data: Vec<u8>,
}

impl LiteralDataPacket {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn packet_type(&self) -> PacketType {
        PacketType::LiteralData
    }

    /// Body length: fmt(1) + fnlen(1) + filename + ts(4) + data.
    pub fn body_length(&self) -> Result<u32> {
        let len = self.filename.len() as u64 + self.data.len() as u64 + 6;
        u32::try_from(len).map_err(|_| Error::FieldTooLong {
            field: "literal data body",
            len: len as usize,
            max: u32::MAX as usize,
        })
    }

    /// Check sub-field capacities. The filename length must fit its
    /// one-octet prefix; this is only meaningful at serialization time,
    /// which is why setting a long filename is not itself an error.
    fn validate(&self) -> Result<()> {
        if self.filename.len() > MAX_FILENAME_LEN {
            return Err(Error::FieldTooLong {
                field: "filename",
                len: self.filename.len(),
                max: MAX_FILENAME_LEN,
            });
        }
        Ok(())
    }

    pub fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        self.validate()?;
        let body_length = self.body_length()?;
        resolve_header(self.header.as_ref(), self.packet_type(), body_length).encode(w)?;
        w.write_all(&[self.format.code(), self.filename.len() as u8])?;
        w.write_all(&self.filename)?;
        w.write_all(&self.timestamp.to_be_bytes())?;
        w.write_all(&self.data)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// User ID packet
// ---------------------------------------------------------------------------

/// User ID packet (tag 13). The body is the raw bytes of the identity
/// string, conventionally "Name <email>"; no internal structure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserIdPacket {
    pub header: Option<PacketHeader>,
    pub content: String,
}

impl UserIdPacket {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            header: None,
            content: content.into(),
        }
    }

    pub fn packet_type(&self) -> PacketType {
        PacketType::UserId
    }

    pub fn body_length(&self) -> Result<u32> {
        body_len_u32("user ID", self.content.len())
    }

    pub fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        let body_length = self.body_length()?;
        resolve_header(self.header.as_ref(), self.packet_type(), body_length).encode(w)?;
        w.write_all(self.content.as_bytes())?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Packet choice
// ---------------------------------------------------------------------------

/// A packet of any supported kind, dispatched by exhaustive match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Packet {
    Marker(MarkerPacket),
    LiteralData(LiteralDataPacket),
    UserId(UserIdPacket),
}

impl Packet {
    pub fn packet_type(&self) -> PacketType {
        match self {
            Packet::Marker(p) => p.packet_type(),
            Packet::LiteralData(p) => p.packet_type(),
            Packet::UserId(p) => p.packet_type(),
        }
    }

    pub fn body_length(&self) -> Result<u32> {
        match self {
            Packet::Marker(p) => Ok(p.body_length()),
            Packet::LiteralData(p) => p.body_length(),
            Packet::UserId(p) => p.body_length(),
        }
    }

    /// Serialize header then body into `w`.
    pub fn encode<W: Write>(&self, w: &mut W) -> Result<()> {
        trace!("encoding packet: type={}", self.packet_type().code());
        match self {
            Packet::Marker(p) => p.encode(w),
            Packet::LiteralData(p) => p.encode(w),
            Packet::UserId(p) => p.encode(w),
        }
    }

    /// Serialize into a fresh buffer.
    pub fn to_vec(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        self.encode(&mut out)?;
        Ok(out)
    }
}

impl From<MarkerPacket> for Packet {
    fn from(p: MarkerPacket) -> Self {
        Packet::Marker(p)
    }
}

impl From<LiteralDataPacket> for Packet {
    fn from(p: LiteralDataPacket) -> Self {
        Packet::LiteralData(p)
    }
}

impl From<UserIdPacket> for Packet {
    fn from(p: UserIdPacket) -> Self {
        Packet::UserId(p)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
