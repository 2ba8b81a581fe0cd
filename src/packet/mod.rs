// OpenPGP packet framing (RFC 4880, Section 4).
//
// This module produces the exact byte sequence a conformant reader
// re-parses: a header (type + length prefix) followed by the body.
//
// # Modules
//
// - `types`   — Packet type registry (6-bit tag codes)
// - `length`  — Current-format length encoding (one/two/five-octet, partial)
// - `header`  — Both header generations and the choice between them
// - `payload` — Concrete packets: Marker, Literal Data, User ID

pub mod header;
pub mod length;
pub mod payload;
pub mod types;

// Re-export key types for convenience.
pub use header::{NewPacketHeader, NewPacketTag, OldLengthType, OldPacketHeader, PacketHeader};
pub use length::{NewLengthType, NewPacketLength};
pub use payload::{DataFormat, LiteralDataPacket, MarkerPacket, Packet, UserIdPacket};
pub use types::PacketType;
