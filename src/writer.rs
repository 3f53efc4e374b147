/* src/writer.rs */

use alloc::vec::Vec;

use crate::Error;

/// Append-only byte buffer with checked length prefixes.
pub(crate) struct Writer {
	buf: Vec<u8>,
}

impl Writer {
	pub(crate) fn with_capacity(capacity: usize) -> Self {
		Self {
			buf: Vec::with_capacity(capacity),
		}
	}

	pub(crate) fn put_u8(&mut self, val: u8) {
		self.buf.push(val);
	}

	pub(crate) fn put_u16(&mut self, val: u16) {
		self.buf.extend_from_slice(&val.to_be_bytes());
	}

	pub(crate) fn put_bytes(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	/// Write `bytes` behind a 2-byte length, refusing anything that would not fit.
	pub(crate) fn put_u16_prefixed(&mut self, bytes: &[u8], field: &'static str) -> Result<(), Error> {
		let len = u16::try_from(bytes.len()).map_err(|_| Error::FieldTooLong {
			field,
			len: bytes.len(),
			max: usize::from(u16::MAX),
		})?;
		self.put_u16(len);
		self.put_bytes(bytes);
		Ok(())
	}

	pub(crate) fn finish(self) -> Vec<u8> {
		self.buf
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::vec;

	#[test]
	fn prefixed_layout() {
		let mut w = Writer::with_capacity(8);
		w.put_u8(0);
		w.put_u16(0x0102);
		w.put_u16_prefixed(&[0xaa, 0xbb], "enc").unwrap();
		assert_eq!(w.finish(), vec![0x00, 0x01, 0x02, 0x00, 0x02, 0xaa, 0xbb]);
	}

	#[test]
	fn max_length_fits() {
		let mut w = Writer::with_capacity(0);
		let body = vec![0u8; 65_535];
		w.put_u16_prefixed(&body, "payload").unwrap();
		let out = w.finish();
		assert_eq!(&out[..2], &[0xff, 0xff]);
		assert_eq!(out.len(), 65_537);
	}

	#[test]
	fn oversized_is_rejected() {
		let mut w = Writer::with_capacity(0);
		let body = vec![0u8; 65_536];
		assert_eq!(
			w.put_u16_prefixed(&body, "payload").unwrap_err(),
			Error::FieldTooLong {
				field: "payload",
				len: 65_536,
				max: 65_535,
			}
		);
		assert!(w.finish().is_empty());
	}
}
