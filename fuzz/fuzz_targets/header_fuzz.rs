#![no_main]
use libfuzzer_sys::fuzz_target;
use oxipgp::packet::{
    NewLengthType, NewPacketHeader, NewPacketLength, OldLengthType, OldPacketHeader, PacketType,
};

fuzz_target!(|data: &[u8]| {
    // Header construction and encoding must never panic, only return
    // errors, for any (type, length, representation) combination.
    if data.len() < 6 {
        return;
    }

    let packet_type = PacketType::Private(data[0]);
    let length = u32::from_be_bytes([data[1], data[2], data[3], data[4]]);
    let selector = data[5];

    let mut out = Vec::new();

    let _ = NewPacketHeader::new(packet_type, length).encode(&mut out);

    let new_type = match selector % 4 {
        0 => NewLengthType::OneOctet,
        1 => NewLengthType::TwoOctet,
        2 => NewLengthType::FiveOctet,
        _ => NewLengthType::Partial,
    };
    if let Ok(len) = NewPacketLength::with_type(length, new_type) {
        let _ = len.encode(&mut out);
    }

    let old_type = match selector % 3 {
        0 => OldLengthType::OneOctet,
        1 => OldLengthType::TwoOctet,
        _ => OldLengthType::FourOctet,
    };
    if let Ok(header) = OldPacketHeader::with_length_type(packet_type, length, old_type) {
        let _ = header.encode(&mut out);
    }
    if let Ok(header) = OldPacketHeader::indeterminate(packet_type) {
        let _ = header.encode(&mut out);
    }
});
