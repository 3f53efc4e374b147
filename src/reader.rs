/* src/reader.rs */

use crate::Error;

/// Sequential byte reader with bounds checking.
///
/// Every failed read is reported through `malformed`, so one reader type
/// serves each wire structure with its own error kind.
pub(crate) struct Reader<'a> {
	data: &'a [u8],
	pos: usize,
	malformed: fn(&'static str) -> Error,
}

impl<'a> Reader<'a> {
	pub(crate) fn new(data: &'a [u8], malformed: fn(&'static str) -> Error) -> Self {
		Self {
			data,
			pos: 0,
			malformed,
		}
	}

	/// Reader over `data` that reports failures with the same error kind.
	pub(crate) fn sub(&self, data: &'a [u8]) -> Self {
		Self::new(data, self.malformed)
	}

	pub(crate) fn remaining(&self) -> usize {
		self.data.len() - self.pos
	}

	pub(crate) fn is_empty(&self) -> bool {
		self.remaining() == 0
	}

	/// Unread bytes, without advancing.
	pub(crate) fn rest(&self) -> &'a [u8] {
		&self.data[self.pos..]
	}

	pub(crate) fn fail(&self, field: &'static str) -> Error {
		(self.malformed)(field)
	}

	pub(crate) fn read_u8(&mut self, field: &'static str) -> Result<u8, Error> {
		if self.remaining() < 1 {
			return Err(self.fail(field));
		}
		let val = self.data[self.pos];
		self.pos += 1;
		Ok(val)
	}

	pub(crate) fn read_u16(&mut self, field: &'static str) -> Result<u16, Error> {
		if self.remaining() < 2 {
			return Err(self.fail(field));
		}
		let val = u16::from_be_bytes([self.data[self.pos], self.data[self.pos + 1]]);
		self.pos += 2;
		Ok(val)
	}

	pub(crate) fn read_bytes(&mut self, n: usize, field: &'static str) -> Result<&'a [u8], Error> {
		if self.remaining() < n {
			return Err(self.fail(field));
		}
		let slice = &self.data[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	pub(crate) fn read_u8_prefixed(&mut self, field: &'static str) -> Result<&'a [u8], Error> {
		let len = self.read_u8(field)? as usize;
		self.read_bytes(len, field)
	}

	pub(crate) fn read_u16_prefixed(&mut self, field: &'static str) -> Result<&'a [u8], Error> {
		let len = self.read_u16(field)? as usize;
		self.read_bytes(len, field)
	}

	/// Read bytes up to the next zero byte and step past it.
	pub(crate) fn read_until_nul(&mut self, field: &'static str) -> Result<&'a [u8], Error> {
		let len = self
			.rest()
			.iter()
			.position(|&b| b == 0)
			.ok_or_else(|| self.fail(field))?;
		let bytes = self.read_bytes(len, field)?;
		self.pos += 1;
		Ok(bytes)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn reader(data: &[u8]) -> Reader<'_> {
		Reader::new(data, Error::malformed_config_list)
	}

	#[test]
	fn reads_big_endian() {
		let mut r = reader(&[0xfe, 0x0d, 0x07]);
		assert_eq!(r.read_u16("version").unwrap(), 0xfe0d);
		assert_eq!(r.read_u8("id").unwrap(), 0x07);
		assert!(r.is_empty());
	}

	#[test]
	fn short_read_reports_field() {
		let mut r = reader(&[0x01]);
		assert_eq!(
			r.read_u16("kem id").unwrap_err(),
			Error::MalformedEchConfigList { field: "kem id" }
		);
	}

	#[test]
	fn failed_read_does_not_advance() {
		let mut r = reader(&[0x00, 0x05, 0xaa]);
		assert!(r.read_u16_prefixed("public key").is_err());
		// the length prefix was consumed, the body was not
		assert_eq!(r.rest(), &[0xaa]);
	}

	#[test]
	fn length_prefixed() {
		let mut r = reader(&[0x02, 0xaa, 0xbb, 0x00, 0x01, 0xcc]);
		assert_eq!(r.read_u8_prefixed("name").unwrap(), &[0xaa, 0xbb]);
		assert_eq!(r.read_u16_prefixed("key").unwrap(), &[0xcc]);
		assert!(r.is_empty());
	}

	#[test]
	fn nul_terminated() {
		let mut r = Reader::new(b"abc\0rest", Error::malformed_record);
		assert_eq!(r.read_until_nul("target name").unwrap(), b"abc");
		assert_eq!(r.rest(), b"rest");

		let mut r = Reader::new(b"abc", Error::malformed_record);
		assert_eq!(
			r.read_until_nul("target name").unwrap_err(),
			Error::MalformedRecord {
				field: "target name"
			}
		);
	}

	#[test]
	fn sub_reader_keeps_error_kind() {
		let r = Reader::new(&[], Error::malformed_outer);
		let mut inner = r.sub(&[0x01]);
		assert_eq!(
			inner.read_u16("kdf id").unwrap_err(),
			Error::MalformedOuterExtension { field: "kdf id" }
		);
	}
}
