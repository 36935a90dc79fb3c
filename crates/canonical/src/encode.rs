//! Canonical byte emission.

use alloc::vec::Vec;

#[cfg(feature = "std")]
use std::io::Read;
#[cfg(feature = "std")]
use std::time::{SystemTime, UNIX_EPOCH};

use traits::ByteOrder;

use crate::{CanonicalError, CanonicalOptions, TextEncoding, Value};

/// Canonicalize a single scalar value.
pub fn encode_value(value: &Value<'_>, opts: &CanonicalOptions) -> Result<Vec<u8>, CanonicalError> {
  let mut out = Vec::new();
  write_value(&mut out, value, opts)?;
  Ok(out)
}

/// Canonicalize an ordered sequence of scalar values.
///
/// The result is the concatenation of each element's canonical bytes in
/// iteration order; reordering the input reorders (and thus changes) the
/// output.
pub fn encode_sequence<'a, I>(values: I, opts: &CanonicalOptions) -> Result<Vec<u8>, CanonicalError>
where
  I: IntoIterator<Item = &'a Value<'a>>,
{
  let mut out = Vec::new();
  for value in values {
    write_value(&mut out, value, opts)?;
  }
  Ok(out)
}

/// Encode text under `encoding`, independent of any numeric byte order.
#[must_use]
pub fn encode_str(s: &str, encoding: TextEncoding) -> Vec<u8> {
  match encoding {
    TextEncoding::Utf8 => s.as_bytes().to_vec(),
    TextEncoding::Utf16Le => {
      let mut out = Vec::with_capacity(s.len() * 2);
      for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_le_bytes());
      }
      out
    }
    TextEncoding::Utf16Be => {
      let mut out = Vec::with_capacity(s.len() * 2);
      for unit in s.encode_utf16() {
        out.extend_from_slice(&unit.to_be_bytes());
      }
      out
    }
  }
}

/// Drain a binary stream's remaining content into a byte sequence.
///
/// Reading starts at the stream's current position; the caller positions the
/// stream at the point it wants hashed to begin.
#[cfg(feature = "std")]
pub fn encode_reader<R: Read>(reader: &mut R) -> Result<Vec<u8>, CanonicalError> {
  let mut out = Vec::new();
  reader.read_to_end(&mut out)?;
  Ok(out)
}

fn write_value(out: &mut Vec<u8>, value: &Value<'_>, opts: &CanonicalOptions) -> Result<(), CanonicalError> {
  match *value {
    Value::Absent => {}
    Value::Bool(v) => out.push(u8::from(v)),
    Value::U8(v) => out.push(v),
    Value::I8(v) => out.push(v as u8),
    Value::U16(v) => write_int(out, &v.to_be_bytes(), opts.byte_order),
    Value::I16(v) => write_int(out, &v.to_be_bytes(), opts.byte_order),
    Value::U32(v) => write_int(out, &v.to_be_bytes(), opts.byte_order),
    Value::I32(v) => write_int(out, &v.to_be_bytes(), opts.byte_order),
    Value::U64(v) => write_int(out, &v.to_be_bytes(), opts.byte_order),
    Value::I64(v) | Value::Enum(v) => write_int(out, &v.to_be_bytes(), opts.byte_order),
    Value::F32(v) => write_int(out, &v.to_bits().to_be_bytes(), opts.byte_order),
    Value::F64(v) => write_int(out, &v.to_bits().to_be_bytes(), opts.byte_order),
    Value::Char(c) => {
      let mut buf = [0_u8; 4];
      let s: &str = c.encode_utf8(&mut buf);
      out.extend_from_slice(&encode_str(s, opts.encoding));
    }
    Value::Str(s) => out.extend_from_slice(&encode_str(s, opts.encoding)),
    Value::Bytes(b) => out.extend_from_slice(b),
    #[cfg(feature = "std")]
    Value::Timestamp(t) => write_int(out, &instant_ticks(t)?.to_be_bytes(), opts.byte_order),
  }
  Ok(())
}

/// Emit big-endian `bytes` at the requested byte order.
fn write_int(out: &mut Vec<u8>, bytes: &[u8], order: ByteOrder) {
  match order {
    ByteOrder::BigEndian => out.extend_from_slice(bytes),
    ByteOrder::LittleEndian => out.extend(bytes.iter().rev()),
  }
}

/// Signed count of 100 ns ticks between the Unix epoch and `t`.
#[cfg(feature = "std")]
fn instant_ticks(t: SystemTime) -> Result<i64, CanonicalError> {
  match t.duration_since(UNIX_EPOCH) {
    Ok(after) => i64::try_from(after.as_nanos() / 100).map_err(|_| CanonicalError::InstantOutOfRange),
    Err(before) => {
      let ticks = i64::try_from(before.duration().as_nanos() / 100).map_err(|_| CanonicalError::InstantOutOfRange)?;
      ticks.checked_neg().ok_or(CanonicalError::InstantOutOfRange)
    }
  }
}

#[cfg(test)]
mod tests {
  use std::time::Duration;

  use super::*;

  fn big() -> CanonicalOptions {
    CanonicalOptions::default()
  }

  fn little() -> CanonicalOptions {
    CanonicalOptions {
      byte_order: ByteOrder::LittleEndian,
      ..CanonicalOptions::default()
    }
  }

  #[test]
  fn integer_layouts_honor_byte_order() {
    let v = Value::from(0x0102_0304_u32);
    assert_eq!(encode_value(&v, &big()).unwrap(), [1, 2, 3, 4]);
    assert_eq!(encode_value(&v, &little()).unwrap(), [4, 3, 2, 1]);

    let v = Value::from(-2_i16); // 0xFFFE
    assert_eq!(encode_value(&v, &big()).unwrap(), [0xff, 0xfe]);
    assert_eq!(encode_value(&v, &little()).unwrap(), [0xfe, 0xff]);
  }

  #[test]
  fn single_byte_kinds_ignore_byte_order() {
    for opts in [big(), little()] {
      assert_eq!(encode_value(&Value::from(true), &opts).unwrap(), [0x01]);
      assert_eq!(encode_value(&Value::from(false), &opts).unwrap(), [0x00]);
      assert_eq!(encode_value(&Value::from(0x7f_u8), &opts).unwrap(), [0x7f]);
      assert_eq!(encode_value(&Value::Absent, &opts).unwrap(), Vec::<u8>::new());
    }
  }

  #[test]
  fn floats_emit_ieee_bit_patterns() {
    let v = Value::from(1.0_f64); // 0x3FF0000000000000
    assert_eq!(
      encode_value(&v, &big()).unwrap(),
      [0x3f, 0xf0, 0, 0, 0, 0, 0, 0]
    );
    assert_eq!(
      encode_value(&v, &little()).unwrap(),
      [0, 0, 0, 0, 0, 0, 0xf0, 0x3f]
    );
  }

  #[test]
  fn enum_discriminant_uses_i64_layout() {
    assert_eq!(
      encode_value(&Value::Enum(3), &big()).unwrap(),
      encode_value(&Value::from(3_i64), &big()).unwrap()
    );
  }

  #[test]
  fn strings_ignore_numeric_byte_order() {
    let v = Value::from("hello");
    assert_eq!(encode_value(&v, &big()).unwrap(), b"hello");
    assert_eq!(encode_value(&v, &little()).unwrap(), b"hello");
  }

  #[test]
  fn utf16_encodings_carry_their_own_unit_order() {
    let opts_le = CanonicalOptions {
      encoding: TextEncoding::Utf16Le,
      ..CanonicalOptions::default()
    };
    let opts_be = CanonicalOptions {
      encoding: TextEncoding::Utf16Be,
      ..CanonicalOptions::default()
    };
    assert_eq!(encode_value(&Value::from("AB"), &opts_le).unwrap(), [0x41, 0, 0x42, 0]);
    assert_eq!(encode_value(&Value::from("AB"), &opts_be).unwrap(), [0, 0x41, 0, 0x42]);
    // Astral plane forces a surrogate pair.
    assert_eq!(
      encode_value(&Value::from('\u{1F600}'), &opts_be).unwrap(),
      [0xd8, 0x3d, 0xde, 0x00]
    );
  }

  #[test]
  fn char_follows_text_encoding() {
    assert_eq!(encode_value(&Value::from('Z'), &big()).unwrap(), b"Z");
    assert_eq!(encode_value(&Value::from('é'), &big()).unwrap(), "é".as_bytes());
  }

  #[test]
  fn sequence_is_concatenation_in_iteration_order() {
    let forward = [Value::from(1_u8), Value::from(2_u8), Value::from(3_u8)];
    let reverse = [Value::from(3_u8), Value::from(2_u8), Value::from(1_u8)];
    let a = encode_sequence(forward.iter(), &big()).unwrap();
    let b = encode_sequence(reverse.iter(), &big()).unwrap();
    assert_eq!(a, [1, 2, 3]);
    assert_eq!(b, [3, 2, 1]);
    assert_ne!(a, b);
  }

  #[test]
  fn mixed_sequence_concatenates_individual_layouts() {
    let values = [Value::from(1_i32), Value::from("A"), Value::from(true)];
    let bytes = encode_sequence(values.iter(), &big()).unwrap();
    assert_eq!(bytes, [0, 0, 0, 1, 0x41, 0x01]);
  }

  #[test]
  fn timestamp_ticks_since_epoch() {
    let t = UNIX_EPOCH + Duration::from_secs(1);
    let bytes = encode_value(&Value::from(t), &big()).unwrap();
    // One second = 10_000_000 ticks of 100 ns.
    assert_eq!(bytes, 10_000_000_i64.to_be_bytes());

    let t = UNIX_EPOCH - Duration::from_secs(1);
    let bytes = encode_value(&Value::from(t), &big()).unwrap();
    assert_eq!(bytes, (-10_000_000_i64).to_be_bytes());
  }

  #[test]
  fn reader_is_drained_from_current_position() {
    let mut cursor = std::io::Cursor::new(vec![11_u8, 22, 33, 44, 55]);
    cursor.set_position(2);
    let bytes = encode_reader(&mut cursor).unwrap();
    assert_eq!(bytes, [33, 44, 55]);
  }
}
