// Error taxonomy for packet encoding.
//
// Every variant except `Io` is a contract violation: it is detected before
// any byte of the affected construct reaches the sink, so a failed encode
// never leaves a truncated header or body behind.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Packet type code exceeds the addressable width of the chosen header
    /// format (6 bits for the current format, 4 bits for the legacy one).
    #[error("packet type {code} exceeds the {max}-value limit of this header format")]
    InvalidPacketType { code: u8, max: u8 },

    /// A forced length representation cannot hold the value, either above
    /// its ceiling or below its natural floor.
    #[error("length {length} is not representable as {length_type}")]
    LengthOutOfRange {
        length: u32,
        length_type: &'static str,
    },

    /// A partial length must be an exact power of two, 2^0 through 2^30.
    #[error("invalid partial length {0} (must be 2^e with e <= 30)")]
    InvalidPartialLength(u32),

    /// An indeterminate length was paired with a concrete length value, or
    /// a concrete width was requested without one.
    #[error("indeterminate length conflicts with an explicit length")]
    InconsistentLength,

    /// A sub-field exceeds the capacity of its fixed-width length prefix.
    #[error("{field} is {len} bytes, maximum is {max}")]
    FieldTooLong {
        field: &'static str,
        len: usize,
        max: usize,
    },

    /// The output sink failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
