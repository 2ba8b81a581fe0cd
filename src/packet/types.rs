// OpenPGP packet type registry (RFC 4880, Section 4.3).
//
// Packet type codes are a 6-bit space (0-63). The legacy header format can
// only address codes 0-15; codes 16 and above require the current format.

/// Highest code addressable by the current (new) header format.
pub const MAX_NEW_TYPE: u8 = 0x3F;

/// Highest code addressable by the legacy (old) header format.
pub const MAX_OLD_TYPE: u8 = 0x0F;

/// A packet's semantic kind, mapped to its numeric tag.
///
/// The named variants cover the RFC 4880 registry; `Private` carries its
/// code verbatim and is how the private/experimental range (60-63) and
/// deliberately out-of-range codes (for negative tests) are expressed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PacketType {
    Reserved,
    PublicKeyEncryptedSessionKey,
    Signature,
    SymmetricKeyEncryptedSessionKey,
    OnePassSignature,
    SecretKey,
    PublicKey,
    SecretSubkey,
    CompressedData,
    SymmetricallyEncryptedData,
    Marker,
    LiteralData,
    Trust,
    UserId,
    PublicSubkey,
    UserAttribute,
    SymEncryptedIntegrityProtectedData,
    ModificationDetectionCode,
    Private(u8),
}

impl PacketType {
    /// The numeric tag for this packet type.
    #[inline]
    pub fn code(self) -> u8 {
        match self {
            PacketType::Reserved => 0,
            PacketType::PublicKeyEncryptedSessionKey => 1,
            PacketType::Signature => 2,
            PacketType::SymmetricKeyEncryptedSessionKey => 3,
            PacketType::OnePassSignature => 4,
            PacketType::SecretKey => 5,
            PacketType::PublicKey => 6,
            PacketType::SecretSubkey => 7,
            PacketType::CompressedData => 8,
            PacketType::SymmetricallyEncryptedData => 9,
            PacketType::Marker => 10,
            PacketType::LiteralData => 11,
            PacketType::Trust => 12,
            PacketType::UserId => 13,
            PacketType::PublicSubkey => 14,
            PacketType::UserAttribute => 17,
            PacketType::SymEncryptedIntegrityProtectedData => 18,
            PacketType::ModificationDetectionCode => 19,
            PacketType::Private(code) => code,
        }
    }

    /// Map a numeric tag back to its registry entry.
    ///
    /// Unassigned and private/experimental codes come back as `Private`.
    pub fn from_code(code: u8) -> PacketType {
        match code {
            0 => PacketType::Reserved,
            1 => PacketType::PublicKeyEncryptedSessionKey,
            2 => PacketType::Signature,
            3 => PacketType::SymmetricKeyEncryptedSessionKey,
            4 => PacketType::OnePassSignature,
            5 => PacketType::SecretKey,
            6 => PacketType::PublicKey,
            7 => PacketType::SecretSubkey,
            8 => PacketType::CompressedData,
            9 => PacketType::SymmetricallyEncryptedData,
            10 => PacketType::Marker,
            11 => PacketType::LiteralData,
            12 => PacketType::Trust,
            13 => PacketType::UserId,
            14 => PacketType::PublicSubkey,
            17 => PacketType::UserAttribute,
            18 => PacketType::SymEncryptedIntegrityProtectedData,
            19 => PacketType::ModificationDetectionCode,
            other => PacketType::Private(other),
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
