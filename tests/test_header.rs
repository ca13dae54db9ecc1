//! Container header: wire layout, roundtrip, rejection paths.

use quasar::constants::flags;
use quasar::container::{decode_header, encode_header, FileType, HeaderError, QuasarHeader};
use quasar::transform::Roi;

#[test]
fn encode_decode_roundtrip() {
    let mut header = QuasarHeader::test_header();
    header.set_rois(&[Roi::new(10, 20, 5), Roi::new(100, 200, 30)]).unwrap();

    let wire = encode_header(&header).unwrap();
    let decoded = decode_header(&wire).unwrap();

    assert_eq!(decoded, header);
    assert_eq!(decoded.rois(), &[Roi::new(10, 20, 5), Roi::new(100, 200, 30)]);
    assert_eq!(decoded.file_type_enum(), Some(FileType::Raster));
}

#[test]
fn wire_layout_matches_documented_offsets() {
    let mut header = QuasarHeader::test_header();
    header.original_size = 0x0102_0304_0506_0708;
    header.width = 0xABCD;
    header.height = 0x1234;
    header.target_id = 0xDEAD_BEEF;
    header.set_rois(&[Roi::new(0x1111, 0x2222, 0x3333)]).unwrap();

    let wire = encode_header(&header).unwrap();
    assert_eq!(wire.len(), QuasarHeader::LEN);

    assert_eq!(&wire[0..4], b"QSR2");
    assert_eq!(wire[4], 2); // raster
    assert_eq!(&wire[5..13], &0x0102_0304_0506_0708u64.to_le_bytes());
    assert_eq!(wire[13], flags::SYMBOL_CODED | flags::RASTER_TRANSFORM);
    assert_eq!(&wire[14..26], &[0xA5; 12]);
    assert_eq!(&wire[26..30], &1000.0f32.to_le_bytes());
    assert_eq!(&wire[30..32], &0xABCDu16.to_le_bytes());
    assert_eq!(&wire[32..34], &0x1234u16.to_le_bytes());
    assert_eq!(&wire[46..50], &0xDEAD_BEEFu32.to_le_bytes());
    assert_eq!(wire[50], 1);
    assert_eq!(&wire[51..53], &0x1111u16.to_le_bytes());
    assert_eq!(&wire[53..55], &0x2222u16.to_le_bytes());
    assert_eq!(&wire[55..57], &0x3333u16.to_le_bytes());
}

#[test]
fn truncated_header_is_rejected() {
    let wire = encode_header(&QuasarHeader::test_header()).unwrap();
    assert!(matches!(
        decode_header(&wire[..QuasarHeader::LEN - 1]),
        Err(HeaderError::BufferTooShort { .. })
    ));
}

#[test]
fn invalid_magic_is_rejected() {
    let mut wire = encode_header(&QuasarHeader::test_header()).unwrap();
    wire[0..4].copy_from_slice(b"BAD!");

    match decode_header(&wire) {
        Err(HeaderError::InvalidMagic { have, .. }) => assert_eq!(&have, b"BAD!"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn unknown_file_type_is_rejected() {
    let mut wire = encode_header(&QuasarHeader::test_header()).unwrap();
    wire[4] = 9;
    assert!(matches!(decode_header(&wire), Err(HeaderError::UnknownFileType { raw: 9 })));
}

#[test]
fn excess_roi_count_is_rejected() {
    let mut wire = encode_header(&QuasarHeader::test_header()).unwrap();
    wire[50] = 9;
    assert!(matches!(decode_header(&wire), Err(HeaderError::TooManyRois { have: 9, max: 8 })));
}

#[test]
fn unknown_flag_bits_are_ignored() {
    let mut wire = encode_header(&QuasarHeader::test_header()).unwrap();
    wire[13] |= 0b0100_0000;

    let decoded = decode_header(&wire).unwrap();
    assert!(decoded.is_symbol_coded());
    assert!(decoded.is_raster_transformed());
    assert_eq!(decoded.compression_flags & 0b0100_0000, 0b0100_0000);
}

#[test]
fn raster_flag_without_symbol_coding_is_rejected() {
    let mut wire = encode_header(&QuasarHeader::test_header()).unwrap();
    wire[13] = flags::RASTER_TRANSFORM;
    assert!(matches!(decode_header(&wire), Err(HeaderError::InconsistentFlags { .. })));
}

#[test]
fn set_rois_rejects_more_than_eight() {
    let mut header = QuasarHeader::default();
    let rois = vec![Roi::new(1, 1, 1); 9];
    assert!(matches!(header.set_rois(&rois), Err(HeaderError::TooManyRois { have: 9, max: 8 })));
}
