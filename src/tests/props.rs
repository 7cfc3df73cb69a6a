extern crate std;

use std::vec::Vec;

use quickcheck::QuickCheck;

use crate::{MAX_SEG_LEN, Ring, ZoabRx, ZoabTx, tx::scalar_width};

/// Property: any `u32` survives a trip through the ring, and the encoding
/// always uses the fewest payload bytes that hold the value.
#[test]
fn scalar_roundtrip_quickcheck() {
    fn prop(v: u32) -> bool {
        let mut ring: Ring<8> = Ring::new();
        ring.tx_u32(v).unwrap();
        if ring.len() != 1 + scalar_width(v) {
            return false;
        }
        ring.rx_u32() == Ok(v) && ring.is_empty()
    }

    QuickCheck::new().tests(1_000).quickcheck(prop as fn(u32) -> bool);
}

/// Property: data of any length chains into `ceil(len / 99)` segments (one
/// for empty data), every non-final segment is a full joined chunk, the final
/// segment carries the caller's join flag, and reassembly restores the bytes.
#[test]
fn segmentation_roundtrip_quickcheck() {
    fn prop(data: Vec<u8>, join: bool) -> bool {
        let mut payload = data.repeat(8);
        payload.truncate(900);

        let mut ring: Ring<2048> = Ring::new();
        ring.tx_data(&payload, join).unwrap();

        let expected_segs = if payload.is_empty() {
            1
        } else {
            payload.len().div_ceil(MAX_SEG_LEN)
        };

        let mut buf = [0u8; MAX_SEG_LEN];
        let mut out = Vec::new();
        let mut segs = 0;
        loop {
            let head = ring.rx_seg(&mut buf).unwrap();
            segs += 1;
            out.extend_from_slice(&buf[..head.len]);
            if segs == expected_segs {
                // The caller's join flag rides the final segment
                if head.join != join {
                    return false;
                }
                break;
            }
            // Chain segments are full and joined
            if !head.join || head.len != MAX_SEG_LEN {
                return false;
            }
        }

        out == payload && ring.is_empty()
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Vec<u8>, bool) -> bool);
}

/// Property: a receiver scanning arbitrary marker-free noise always locks on
/// to the message behind it.
#[test]
fn resync_through_noise_quickcheck() {
    fn prop(noise: Vec<u8>, v: u32) -> bool {
        // Strip the marker's lead byte from the noise so the message behind
        // it holds the only marker in the ring
        let mut bytes: Vec<u8> = noise
            .iter()
            .map(|&b| if b == 0x80 { 0x7F } else { b })
            .collect();
        bytes.truncate(200);

        let mut ring: Ring<256> = Ring::new();
        ring.extend(&bytes);
        ring.tx_start().unwrap();
        ring.tx_u32(v).unwrap();

        ring.rx_start() && ring.rx_u32() == Ok(v) && ring.is_empty()
    }

    QuickCheck::new()
        .tests(500)
        .quickcheck(prop as fn(Vec<u8>, u32) -> bool);
}
