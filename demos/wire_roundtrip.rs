//! Encode a message into a ring, move it over an in-memory channel, and
//! decode it on the far side through a ring smaller than the message.
//!
//! Run: cargo run --example wire_roundtrip --features std

use zoab::{Chan, ChanState, MAX_SEG_LEN, MemChan, Ring, ZoabRx, ZoabTx};

fn main() {
    // Sender: a struct message with one data field and one scalar field
    let mut tx: Ring<64> = Ring::new();
    tx.tx_start().expect("marker fits");
    tx.tx_struct(2).expect("head fits");
    tx.tx_data(b"power level", false).expect("data fits");
    tx.tx_u32(9001).expect("scalar fits");

    let mut capture = MemChan::new(&[]);
    capture.drain(&mut tx);
    let wire = capture.into_captured();

    print!("wire ({} bytes):", wire.len());
    for byte in &wire {
        print!(" {byte:02X}");
    }
    println!();

    // Receiver: a 16-byte ring forces a refill mid-message
    let mut src = MemChan::new(&wire);
    let mut rx: Ring<16> = Ring::new();
    src.fill(&mut rx);

    if !rx.rx_start() {
        panic!("no start marker on the wire");
    }
    println!("marker found");

    let fields = decode(&mut src, &mut rx, |ring| ring.rx_struct());
    println!("struct with {fields} fields");

    let mut buf = [0u8; MAX_SEG_LEN];
    let head = decode(&mut src, &mut rx, |ring| ring.rx_seg(&mut buf));
    let text = std::str::from_utf8(&buf[..head.len]).expect("utf-8 payload");
    println!("field 1: {text:?}");

    let level = decode(&mut src, &mut rx, |ring| ring.rx_u32());
    println!("field 2: {level}");

    assert_eq!(src.fill(&mut rx), ChanState::Eof);
    println!("wire drained");
}

/// Run one decode step, refilling the ring whenever the token comes up
/// short.
fn decode<T, F>(src: &mut MemChan<'_>, ring: &mut Ring<16>, mut step: F) -> T
where
    F: FnMut(&mut Ring<16>) -> zoab::Result<T>,
{
    loop {
        match step(ring) {
            Ok(value) => return value,
            Err(err) => {
                println!("  token short by {}; refilling", err.deficit());
                src.fill(ring);
            }
        }
    }
}
