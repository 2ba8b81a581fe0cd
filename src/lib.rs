//! Oxipgp: OpenPGP (RFC 4880) packet framing and serialization.
//!
//! The crate provides:
//! - The packet type registry (`packet::types`)
//! - Current- and legacy-format header encoders (`packet::header`,
//!   `packet::length`)
//! - Concrete payloads: Marker, Literal Data, User ID (`packet::payload`)
//!
//! Encoding is the only direction: each packet is a pure computation from
//! in-memory values to a byte sequence appended to a caller-supplied
//! `std::io::Write` sink.
//!
//! # Quick Start
//!
//! ```
//! use oxipgp::packet::{MarkerPacket, Packet, UserIdPacket};
//!
//! let mut out = Vec::new();
//! Packet::from(MarkerPacket::new()).encode(&mut out).unwrap();
//! assert_eq!(out, [0xCA, 0x03, 0x50, 0x47, 0x50]);
//!
//! let user_id = UserIdPacket::new("Jane Doe <jane@example.org>");
//! Packet::from(user_id).encode(&mut out).unwrap();
//! ```

pub mod error;
pub mod packet;

pub use error::{Error, Result};
