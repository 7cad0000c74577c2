use super::buffer::Buffer;
use super::datetime::{Date, DateTime};
use super::error::CodecError;
use super::fixed::{
    DateCodec, DateTimeCodec, Enum8Codec, Enum16Codec, FixedWidthCodec, Float32Codec,
    Int64Codec, UInt16Codec, UInt64Codec,
};
use super::portable::PortablePath;
use super::reader::Reader;
use super::value::{Enum8, Enum16};
use crate::logging::init_for_tests;

#[test]
fn uint16_layout_is_exact() {
    init_for_tests();
    let mut buffer = Buffer::new();
    UInt16Codec::encode(&[1, 2, 770], &mut buffer);
    assert_eq!(buffer.as_slice(), &[0x01, 0x00, 0x02, 0x00, 0x02, 0x03]);

    let mut reader = Reader::new(buffer.as_slice());
    let decoded = UInt16Codec::decode(&mut reader, 3).unwrap();
    assert_eq!(decoded, vec![1, 2, 770]);
    assert_eq!(reader.offset(), 6);
}

#[test]
fn enum16_layout_matches_raw_codes() {
    let mut buffer = Buffer::new();
    Enum16Codec::encode(&[Enum16(1), Enum16(-1), Enum16(i16::MIN)], &mut buffer);
    assert_eq!(buffer.as_slice(), &[0x01, 0x00, 0xFF, 0xFF, 0x00, 0x80]);
}

#[test]
fn zero_rows_never_touch_the_reader() {
    let data: [u8; 0] = [];
    let mut reader = Reader::new(&data);

    assert!(UInt64Codec::decode(&mut reader, 0).unwrap().is_empty());
    assert!(Enum8Codec::decode(&mut reader, 0).unwrap().is_empty());
    assert_eq!(reader.offset(), 0);
}

#[test]
fn zero_rows_after_exhaustion_keep_offset() {
    let data = [0x05, 0x00];
    let mut reader = Reader::new(&data);
    assert_eq!(UInt16Codec::decode(&mut reader, 1).unwrap(), vec![5]);
    assert!(reader.is_exhausted());

    assert!(DateCodec::decode(&mut reader, 0).unwrap().is_empty());
    assert_eq!(reader.offset(), 2);
}

#[test]
fn empty_encode_leaves_buffer_alone() {
    let mut buffer = Buffer::new();
    buffer.append(&[1, 2, 3]);

    Int64Codec::encode(&[], &mut buffer);
    FixedWidthCodec::<f64, PortablePath>::encode(&[], &mut buffer);

    assert_eq!(buffer.as_slice(), &[1, 2, 3]);
}

#[test]
fn short_read_produces_no_values() {
    let data = [0u8; 7];
    let mut reader = Reader::new(&data);

    let err = UInt64Codec::decode(&mut reader, 1).unwrap_err();
    assert_eq!(
        err,
        CodecError::short_read("decode UInt64 column: read raw", 8, 7)
    );

    let mut out = vec![42u64];
    let err = UInt64Codec::decode_append(&mut reader, 1, &mut out).unwrap_err();
    assert!(err.is_short_read());
    assert_eq!(out, vec![42]);
}

#[test]
fn short_read_on_partially_consumed_frame() {
    let data = [1u8, 0, 2, 0, 3];
    let mut reader = Reader::new(&data);
    UInt16Codec::decode(&mut reader, 2).unwrap();

    let err = UInt16Codec::decode(&mut reader, 1).unwrap_err();
    match err {
        CodecError::ShortRead {
            requested,
            remaining,
            ..
        } => {
            assert_eq!(requested, 2);
            assert_eq!(remaining, 1);
        }
    }
}

#[test]
fn overflowing_row_count_is_a_short_read() {
    let data = [0u8; 16];
    let mut reader = Reader::new(&data);

    let err = UInt64Codec::decode(&mut reader, usize::MAX).unwrap_err();
    match err {
        CodecError::ShortRead {
            requested,
            remaining,
            ..
        } => {
            assert_eq!(requested, usize::MAX);
            assert_eq!(remaining, 16);
        }
    }
}

#[test]
fn encode_grows_by_rows_times_width_and_keeps_prefix() {
    let mut buffer = Buffer::new();
    buffer.append(&[0xAB]);

    DateTimeCodec::encode(&[DateTime(1), DateTime(u32::MAX)], &mut buffer);
    assert_eq!(buffer.len(), 1 + 2 * 4);
    assert_eq!(buffer.as_slice()[0], 0xAB);

    Enum8Codec::encode(&[Enum8(-128)], &mut buffer);
    assert_eq!(buffer.len(), 1 + 2 * 4 + 1);
    assert_eq!(buffer.as_slice()[9], 0x80);
}

#[test]
fn decode_consumes_exactly_rows_times_width() {
    let data = [1u8, 0, 2, 0, 0xFF, 0xEE];
    let mut reader = Reader::new(&data);

    let dates = DateCodec::decode(&mut reader, 2).unwrap();
    assert_eq!(dates, vec![Date(1), Date(2)]);
    assert_eq!(reader.offset(), 4);
    assert_eq!(reader.read_raw(2).unwrap(), &[0xFF, 0xEE]);
}

#[test]
fn float_bit_patterns_survive() {
    let values = [f32::NAN, -0.0, f32::INFINITY, f32::from_bits(1)];
    let mut buffer = Buffer::new();
    Float32Codec::encode(&values, &mut buffer);

    let mut reader = Reader::new(buffer.as_slice());
    let decoded = Float32Codec::decode(&mut reader, values.len()).unwrap();
    let bits: Vec<u32> = decoded.iter().map(|f| f.to_bits()).collect();
    let expected: Vec<u32> = values.iter().map(|f| f.to_bits()).collect();
    assert_eq!(bits, expected);
}
