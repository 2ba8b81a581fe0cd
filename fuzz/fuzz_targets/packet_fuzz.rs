#![no_main]
use libfuzzer_sys::fuzz_target;
use oxipgp::packet::{DataFormat, LiteralDataPacket, Packet, UserIdPacket};

fuzz_target!(|data: &[u8]| {
    // Packet encoding must never panic, and a successful encode must
    // uphold the framing contract: declared body length == emitted body.
    if data.len() < 6 {
        return;
    }

    let split = 6 + (data[0] as usize) % (data.len() - 5);
    let (head, tail) = data.split_at(split.min(data.len()));

    let literal = LiteralDataPacket {
        format: if head[1] & 1 == 0 {
            DataFormat::Binary
        } else {
            DataFormat::Text
        },
        filename: head[2..].to_vec(),
        timestamp: u32::from_be_bytes([head[1], head[2], head[3], head[4]]),
        data: tail.to_vec(),
        ..Default::default()
    };
    let packet = Packet::from(literal);
    if let Ok(bytes) = packet.to_vec() {
        let body_length = packet.body_length().unwrap() as usize;
        assert!(bytes.len() > body_length);
        assert_eq!(&bytes[bytes.len() - tail.len()..], tail);
    }

    let user_id = UserIdPacket::new(String::from_utf8_lossy(tail));
    let _ = Packet::from(user_id).to_vec();
});
