use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

use super::buffer::Buffer;
use super::datetime::{Date, Date32, DateTime, DateTime64};
use super::fixed::FixedWidthCodec;
use super::path::{SelectedPath, WirePath, selected_path_name};
use super::portable::PortablePath;
use super::reader::Reader;
use super::value::{Enum8, Enum16, FixedWidth};

/// Random values of `T`, built from random bytes so every bit pattern
/// (NaN payloads included) can show up.
fn random_values<T: FixedWidth>(rng: &mut StdRng, rows: usize) -> Vec<T> {
    let mut raw = vec![0u8; rows * T::WIDTH];
    rng.fill_bytes(&mut raw);
    let mut out = Vec::new();
    PortablePath::decode_into(&raw, &mut out);
    out
}

/// Values whose bytes are all-zero, all-one, sign bit only, and the
/// highest non-sign pattern.
fn boundary_values<T: FixedWidth>() -> Vec<T> {
    let w = T::WIDTH;
    let mut patterns = vec![vec![0u8; w], vec![0xFF; w]];
    let mut sign = vec![0u8; w];
    sign[w - 1] = 0x80;
    patterns.push(sign);
    let mut max = vec![0xFF; w];
    max[w - 1] = 0x7F;
    patterns.push(max);
    patterns.iter().map(|p| T::from_le_chunk(p)).collect()
}

fn encode_with<T: FixedWidth, P: WirePath>(values: &[T]) -> Vec<u8> {
    let mut buffer = Buffer::new();
    FixedWidthCodec::<T, P>::encode(values, &mut buffer);
    buffer.into_vec()
}

fn assert_roundtrip<T: FixedWidth, P: WirePath>(values: &[T]) {
    let bytes = encode_with::<T, P>(values);
    assert_eq!(bytes.len(), values.len() * T::WIDTH, "{}", T::TYPE_NAME);

    let mut reader = Reader::new(&bytes);
    let decoded = FixedWidthCodec::<T, P>::decode(&mut reader, values.len()).unwrap();
    assert_eq!(decoded.len(), values.len());
    assert!(reader.is_exhausted());
    // Compare through the wire form so NaN payloads count as equal.
    assert_eq!(encode_with::<T, PortablePath>(&decoded), bytes, "{}", T::TYPE_NAME);
}

fn check_kind<T: FixedWidth>(rng: &mut StdRng) {
    for rows in [1usize, 2, 3, 17, 256] {
        let values = random_values::<T>(rng, rows);
        assert_roundtrip::<T, PortablePath>(&values);
        assert_roundtrip::<T, SelectedPath>(&values);
        assert_eq!(
            encode_with::<T, SelectedPath>(&values),
            encode_with::<T, PortablePath>(&values)
        );
    }
    let edges = boundary_values::<T>();
    assert_roundtrip::<T, PortablePath>(&edges);
    assert_roundtrip::<T, SelectedPath>(&edges);
}

macro_rules! check_all_kinds {
    ($check:ident, $rng:expr) => {
        $check::<u8>($rng);
        $check::<i8>($rng);
        $check::<u16>($rng);
        $check::<i16>($rng);
        $check::<u32>($rng);
        $check::<i32>($rng);
        $check::<u64>($rng);
        $check::<i64>($rng);
        $check::<f32>($rng);
        $check::<f64>($rng);
        $check::<Enum8>($rng);
        $check::<Enum16>($rng);
        $check::<Date>($rng);
        $check::<Date32>($rng);
        $check::<DateTime>($rng);
        $check::<DateTime64>($rng);
    };
}

#[test]
fn every_kind_roundtrips_on_both_paths() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    check_all_kinds!(check_kind, &mut rng);
}

#[test]
fn boundary_patterns_have_expected_values() {
    assert_eq!(boundary_values::<i16>(), vec![0, -1, i16::MIN, i16::MAX]);
    assert_eq!(boundary_values::<u32>(), vec![0, u32::MAX, 1 << 31, u32::MAX >> 1]);
}

fn encode_into_appends_after_prefix<P: WirePath>() {
    let mut buffer = Buffer::with_capacity(64);
    buffer.append(&[0xAB, 0xCD]);

    P::encode_into(&[1u16, 2, 770], &mut buffer);
    assert_eq!(
        buffer.as_slice(),
        &[0xAB, 0xCD, 0x01, 0x00, 0x02, 0x00, 0x02, 0x03]
    );

    P::encode_into(&[-1i32], &mut buffer);
    assert_eq!(buffer.len(), 2 + 6 + 4);
    assert_eq!(&buffer.as_slice()[8..], &[0xFF; 4]);
}

#[test]
fn portable_encode_appends_after_prefix() {
    encode_into_appends_after_prefix::<PortablePath>();
}

#[test]
fn selected_path_is_reported() {
    let name = selected_path_name();
    assert!(name == "native" || name == "portable");
    #[cfg(feature = "portable")]
    assert_eq!(name, "portable");
}

#[cfg(target_endian = "little")]
mod native {
    use super::*;
    use crate::codec::native::NativePath;

    fn check_native<T: FixedWidth>(rng: &mut StdRng) {
        for rows in [1usize, 5, 64] {
            let values = random_values::<T>(rng, rows);
            assert_roundtrip::<T, NativePath>(&values);
            assert_eq!(
                encode_with::<T, NativePath>(&values),
                encode_with::<T, PortablePath>(&values),
                "{}",
                T::TYPE_NAME
            );

            let bytes = encode_with::<T, PortablePath>(&values);
            let mut native_out = Vec::new();
            NativePath::decode_into(&bytes, &mut native_out);
            assert_eq!(encode_with::<T, PortablePath>(&native_out), bytes);
        }
        let edges = boundary_values::<T>();
        assert_eq!(
            encode_with::<T, NativePath>(&edges),
            encode_with::<T, PortablePath>(&edges)
        );
    }

    #[test]
    fn native_matches_portable_for_every_kind() {
        let mut rng = StdRng::seed_from_u64(42);
        check_all_kinds!(check_native, &mut rng);
    }

    #[test]
    fn native_decode_handles_unaligned_windows() {
        let mut data = vec![0xAAu8];
        data.extend_from_slice(&0x0102_0304_0506_0708u64.to_le_bytes());
        data.extend_from_slice(&u64::MAX.to_le_bytes());

        let mut reader = Reader::new(&data);
        reader.read_raw(1).unwrap();
        let values = FixedWidthCodec::<u64, NativePath>::decode(&mut reader, 2).unwrap();
        assert_eq!(values, vec![0x0102_0304_0506_0708, u64::MAX]);
    }

    #[test]
    fn native_encode_appends_after_prefix() {
        encode_into_appends_after_prefix::<NativePath>();
    }

    #[test]
    fn native_decode_appends_after_existing_values() {
        let bytes = encode_with::<i32, PortablePath>(&[-5, 6]);
        let mut out = vec![1i32, 2, 3];
        NativePath::decode_into(&bytes, &mut out);
        assert_eq!(out, vec![1, 2, 3, -5, 6]);
    }
}
