extern crate std;

mod props;



use crate::{MAX_SEG_LEN, Ring, ZoabRx, ZoabTx};

#[test]
fn struct_message_through_one_ring() {
    let mut ring: Ring<64> = Ring::new();

    // { name: "power", value: 9001 }
    ring.tx_start().unwrap();
    ring.tx_struct(2).unwrap();
    ring.tx_data(b"power", false).unwrap();
    ring.tx_u32(9001).unwrap();

    assert!(ring.rx_start());
    assert_eq!(ring.rx_struct().unwrap(), 2);

    let mut buf = [0u8; MAX_SEG_LEN];
    let head = ring.rx_seg(&mut buf).unwrap();
    assert!(!head.join);
    assert_eq!(&buf[..head.len], b"power");

    assert_eq!(ring.rx_u32().unwrap(), 9001);
    assert!(ring.is_empty());
}

#[test]
fn nested_message_with_u32_array() {
    let mut ring: Ring<64> = Ring::new();

    ring.tx_enum_start(3).unwrap();
    ring.tx_u32s(&[0, 0xF3, 0xFE_DCAB]).unwrap();

    assert!(ring.rx_start());
    assert_eq!(ring.rx_enum().unwrap(), 3);

    let arr = ring.rx_arr().unwrap();
    assert_eq!(arr.count, 3);
    assert_eq!(ring.rx_u32().unwrap(), 0);
    assert_eq!(ring.rx_u32().unwrap(), 0xF3);
    assert_eq!(ring.rx_u32().unwrap(), 0xFE_DCAB);
    assert!(ring.is_empty());
}
