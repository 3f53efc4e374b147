/* src/outer.rs */

use alloc::vec::Vec;

use crate::Error;
use crate::config::EchCipherSuite;
use crate::reader::Reader;
use crate::writer::Writer;

/// TLS extension type of `encrypted_client_hello`.
pub const EXTENSION_ENCRYPTED_CLIENT_HELLO: u16 = 0xfe0d;

/// `ECHClientHelloType` value of an outer extension.
const OUTER: u8 = 0;

/// Body of an outer `encrypted_client_hello` extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OuterExtension<'a> {
	/// Config id of the ECHConfig used for encryption.
	pub config_id: u8,
	/// HPKE suite used for encryption.
	pub cipher_suite: EchCipherSuite,
	/// HPKE encapsulated key.
	pub enc: &'a [u8],
	/// Encrypted inner ClientHello.
	pub payload: &'a [u8],
}

impl<'a> OuterExtension<'a> {
	/// Parse an outer extension body.
	///
	/// # Errors
	///
	/// Returns [`Error::MalformedOuterExtension`] when the type byte is not
	/// the outer variant, a field is truncated, or bytes remain after the
	/// payload.
	pub fn parse(data: &'a [u8]) -> Result<Self, Error> {
		let mut r = Reader::new(data, Error::malformed_outer);
		if r.read_u8("client hello type")? != OUTER {
			return Err(r.fail("client hello type"));
		}
		let kdf_id = r.read_u16("kdf id")?;
		let aead_id = r.read_u16("aead id")?;
		let config_id = r.read_u8("config id")?;
		let enc = r.read_u16_prefixed("enc")?;
		let payload = r.read_u16_prefixed("payload")?;
		if !r.is_empty() {
			return Err(r.fail("trailing bytes"));
		}
		Ok(Self {
			config_id,
			cipher_suite: EchCipherSuite::new(kdf_id, aead_id),
			enc,
			payload,
		})
	}

	/// Serialize the extension body.
	///
	/// # Errors
	///
	/// Returns [`Error::FieldTooLong`] when `enc` or `payload` exceeds 65535
	/// bytes.
	pub fn encode(&self) -> Result<Vec<u8>, Error> {
		encode_outer_extension(
			self.config_id,
			self.cipher_suite.kdf_id,
			self.cipher_suite.aead_id,
			self.enc,
			self.payload,
		)
	}
}

/// Build the body of an outer `encrypted_client_hello` extension.
///
/// Layout: type byte `0`, KDF id, AEAD id, config id, then `encoded_key`
/// and `payload` each behind a 2-byte length.
///
/// # Errors
///
/// Returns [`Error::FieldTooLong`] when `encoded_key` or `payload` exceeds
/// 65535 bytes. Nothing is truncated.
///
/// ```
/// let ext = ech_config::encode_outer_extension(7, 0x0001, 0x0001, &[1, 2, 3], &[9; 5]).unwrap();
/// assert_eq!(ext.len(), 18);
/// assert_eq!(ext[0], 0);
/// ```
pub fn encode_outer_extension(
	config_id: u8,
	kdf_id: u16,
	aead_id: u16,
	encoded_key: &[u8],
	payload: &[u8],
) -> Result<Vec<u8>, Error> {
	let mut w = Writer::with_capacity(10 + encoded_key.len() + payload.len());
	w.put_u8(OUTER);
	w.put_u16(kdf_id);
	w.put_u16(aead_id);
	w.put_u8(config_id);
	w.put_u16_prefixed(encoded_key, "encapsulated key")?;
	w.put_u16_prefixed(payload, "payload")?;
	Ok(w.finish())
}
