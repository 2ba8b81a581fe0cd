// Byte-exact serialization vectors, including the worked examples from
// RFC 4880 Section 4.2.3.

use oxipgp::packet::{
    DataFormat, LiteralDataPacket, MarkerPacket, NewLengthType, NewPacketHeader, NewPacketLength,
    NewPacketTag, OldLengthType, OldPacketHeader, Packet, PacketType, UserIdPacket,
};

fn encode_length(length: NewPacketLength) -> Vec<u8> {
    let mut out = Vec::new();
    length.encode(&mut out).unwrap();
    out
}

#[test]
fn new_tag_marker() {
    let mut out = Vec::new();
    NewPacketTag::new(PacketType::Marker).encode(&mut out).unwrap();
    assert_eq!(out, [0xCA]);
}

#[test]
fn new_length_vectors() {
    assert_eq!(encode_length(NewPacketLength::new(3)), [0x03]);
    assert_eq!(encode_length(NewPacketLength::new(100)), [0x64]);
    assert_eq!(encode_length(NewPacketLength::new(1723)), [0xC5, 0xFB]);
    assert_eq!(
        encode_length(NewPacketLength::new(100_000)),
        [0xFF, 0x00, 0x01, 0x86, 0xA0]
    );
}

#[test]
fn partial_length_vectors() {
    let partial = |len| {
        let mut out = Vec::new();
        NewPacketLength::with_type(len, NewLengthType::Partial)
            .unwrap()
            .encode(&mut out)
            .unwrap();
        out
    };
    assert_eq!(partial(1), [0xE0]);
    assert_eq!(partial(2), [0xE1]);
    assert_eq!(partial(32768), [0xEF]);
    assert_eq!(partial(65536), [0xF0]);
}

#[test]
fn forced_two_octet_vector() {
    let length = NewPacketLength::with_type(1693, NewLengthType::TwoOctet).unwrap();
    assert_eq!(encode_length(length), [0xC5, 0xDD]);
}

#[test]
fn new_header_vectors() {
    let mut out = Vec::new();
    NewPacketHeader::new(PacketType::Marker, 3)
        .encode(&mut out)
        .unwrap();
    assert_eq!(out, [0xCA, 0x03]);
}

#[test]
fn old_header_vectors() {
    let encode = |header: OldPacketHeader| {
        let mut out = Vec::new();
        header.encode(&mut out).unwrap();
        out
    };
    assert_eq!(
        encode(OldPacketHeader::new(PacketType::Marker, 3).unwrap()),
        [0xA8, 0x03]
    );
    assert_eq!(
        encode(OldPacketHeader::new(PacketType::Marker, 100).unwrap()),
        [0xA8, 0x64]
    );
    assert_eq!(
        encode(OldPacketHeader::new(PacketType::Marker, 1723).unwrap()),
        [0xA9, 0x06, 0xBB]
    );
    assert_eq!(
        encode(OldPacketHeader::new(PacketType::Marker, 100_000).unwrap()),
        [0xAA, 0x00, 0x01, 0x86, 0xA0]
    );
}

#[test]
fn marker_packet_default_header() {
    let bytes = Packet::from(MarkerPacket::new()).to_vec().unwrap();
    assert_eq!(bytes, *b"\xCA\x03PGP");
}

#[test]
fn marker_packet_forced_legacy_header() {
    let mut marker = MarkerPacket::new();
    marker.header = Some(
        OldPacketHeader::with_length_type(PacketType::Marker, 3, OldLengthType::OneOctet)
            .unwrap()
            .into(),
    );
    let bytes = Packet::from(marker).to_vec().unwrap();
    assert_eq!(bytes, *b"\xA8\x03PGP");
}

#[test]
fn literal_data_packet_default() {
    let bytes = Packet::from(LiteralDataPacket::new()).to_vec().unwrap();
    assert_eq!(bytes, *b"\xCB\x06b\x00\x00\x00\x00\x00");
}

#[test]
fn literal_data_packet_with_filename() {
    let mut literal = LiteralDataPacket::new();
    literal.filename = b"test_test_hello.world".to_vec();
    let bytes = Packet::from(literal).to_vec().unwrap();
    assert_eq!(
        bytes,
        *b"\xCB\x1Bb\x15test_test_hello.world\x00\x00\x00\x00"
    );
}

#[test]
fn literal_data_packet_full_fields() {
    let literal = LiteralDataPacket {
        header: None,
        format: DataFormat::Utf8,
        filename: b"note.txt".to_vec(),
        timestamp: 1,
        data: b"hello".to_vec(),
    };
    let bytes = Packet::from(literal).to_vec().unwrap();
    assert_eq!(bytes, *b"\xCB\x13u\x08note.txt\x00\x00\x00\x01hello");
}

#[test]
fn user_id_packet_empty() {
    let bytes = Packet::from(UserIdPacket::default()).to_vec().unwrap();
    assert_eq!(bytes, [0xCD, 0x00]);
}

#[test]
fn user_id_packet_with_content() {
    let user_id = UserIdPacket::new("John Doe john.doe@example.com");
    let bytes = Packet::from(user_id).to_vec().unwrap();
    assert_eq!(bytes, *b"\xCD\x1DJohn Doe john.doe@example.com");
}

#[test]
fn multiple_packets_concatenate_cleanly() {
    // Packets frame themselves; a stream is just their concatenation.
    let mut out = Vec::new();
    Packet::from(MarkerPacket::new()).encode(&mut out).unwrap();
    Packet::from(UserIdPacket::new("a@b")).encode(&mut out).unwrap();
    assert_eq!(out, *b"\xCA\x03PGP\xCD\x03a@b");
}

#[test]
fn indeterminate_header_emits_single_octet() {
    let header = OldPacketHeader::indeterminate(PacketType::LiteralData).unwrap();
    let mut out = Vec::new();
    header.encode(&mut out).unwrap();
    assert_eq!(out, [0xAF]);
}
