/* src/config.rs */

use alloc::vec::Vec;

use crate::Error;
use crate::log::{trace, warn};
use crate::reader::Reader;
use crate::writer::Writer;

/// ECHConfig version this crate understands (draft-ietf-tls-esni-18 onward).
pub const ECH_VERSION: u16 = 0xfe0d;

/// HPKE symmetric cipher suite offered by a config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EchCipherSuite {
	/// HPKE KDF identifier.
	pub kdf_id: u16,
	/// HPKE AEAD identifier.
	pub aead_id: u16,
}

impl EchCipherSuite {
	/// Pair a KDF and an AEAD identifier.
	#[must_use]
	pub const fn new(kdf_id: u16, aead_id: u16) -> Self {
		Self { kdf_id, aead_id }
	}
}

/// An ECHConfig extension, preserved opaquely.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EchExtension<'a> {
	/// Extension type.
	pub ext_type: u16,
	/// Raw extension data.
	pub data: &'a [u8],
}

impl EchExtension<'_> {
	/// Whether a client must understand this extension to use the config.
	///
	/// Mandatory extension types have the high bit set.
	#[must_use]
	pub fn is_mandatory(&self) -> bool {
		self.ext_type & 0x8000 != 0
	}
}

/// A decoded ECHConfig of the supported version, borrowing from the list
/// it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EchConfig<'a> {
	/// The exact bytes of this entry, version and length header included.
	pub raw: &'a [u8],
	/// Config version; always [`ECH_VERSION`].
	pub version: u16,
	/// Identifier the server uses to pick its decryption key.
	pub config_id: u8,
	/// HPKE KEM identifier.
	pub kem_id: u16,
	/// HPKE public key.
	pub public_key: &'a [u8],
	/// Symmetric cipher suites, in server preference order.
	pub cipher_suites: Vec<EchCipherSuite>,
	/// Largest inner server name the server expects, used for padding.
	pub maximum_name_length: u8,
	/// Name placed in the outer ClientHello SNI.
	pub public_name: &'a [u8],
	/// Config extensions, in wire order.
	pub extensions: Vec<EchExtension<'a>>,
}

impl<'a> EchConfig<'a> {
	/// Public name as text, if it is valid UTF-8.
	#[must_use]
	pub fn public_name_str(&self) -> Option<&'a str> {
		core::str::from_utf8(self.public_name).ok()
	}

	/// Whether any extension is marked mandatory.
	#[must_use]
	pub fn has_mandatory_extension(&self) -> bool {
		self.extensions.iter().any(EchExtension::is_mandatory)
	}

	/// Whether the config offers the given cipher suite.
	#[must_use]
	pub fn supports(&self, suite: EchCipherSuite) -> bool {
		self.cipher_suites.contains(&suite)
	}
}

/// Parse a length-prefixed ECHConfigList, such as the value of the `ech`
/// SvcParam.
///
/// Entries whose version is not [`ECH_VERSION`] are skipped after their
/// length has been checked, so the result may be empty.
///
/// Each entry's fields are read only within the entry's declared length,
/// and bytes left over after an entry's extensions are rejected rather
/// than read as the start of the next entry.
///
/// # Errors
///
/// Returns [`Error::MalformedEchConfigList`] when the list length prefix
/// does not match the remaining data exactly, or when any length field at
/// any depth overruns its enclosing region.
///
/// ```
/// let list = [0x00, 0x04, 0xab, 0xcd, 0x00, 0x00];
/// let configs = ech_config::parse_ech_config_list(&list).unwrap();
/// assert!(configs.is_empty());
/// ```
pub fn parse_ech_config_list(data: &[u8]) -> Result<Vec<EchConfig<'_>>, Error> {
	let mut r = Reader::new(data, Error::malformed_config_list);
	let length = r.read_u16("list length")? as usize;
	if length != r.remaining() {
		return Err(r.fail("list length"));
	}

	let mut configs = Vec::new();
	while !r.is_empty() {
		let raw = r.rest();
		let version = r.read_u16("config version")?;
		let entry_len = r.read_u16("config length")? as usize;
		let contents = r.read_bytes(entry_len, "config contents")?;
		let raw = &raw[..entry_len + 4];

		if version != ECH_VERSION {
			warn!("skipping ECHConfig with unsupported version {version:#06x}");
			continue;
		}

		let config = parse_contents(r.sub(contents), raw, version)?;
		trace!(
			"ECHConfig id {} kem {:#06x} with {} cipher suites",
			config.config_id,
			config.kem_id,
			config.cipher_suites.len()
		);
		configs.push(config);
	}
	Ok(configs)
}

fn parse_contents<'a>(
	mut r: Reader<'a>,
	raw: &'a [u8],
	version: u16,
) -> Result<EchConfig<'a>, Error> {
	let config_id = r.read_u8("config id")?;
	let kem_id = r.read_u16("kem id")?;
	let public_key = r.read_u16_prefixed("public key")?;
	let cipher_suites = parse_cipher_suites(&mut r)?;
	let maximum_name_length = r.read_u8("maximum name length")?;
	let public_name = r.read_u8_prefixed("public name")?;
	let extensions = parse_extensions(&mut r)?;
	if !r.is_empty() {
		return Err(r.fail("config trailing bytes"));
	}

	Ok(EchConfig {
		raw,
		version,
		config_id,
		kem_id,
		public_key,
		cipher_suites,
		maximum_name_length,
		public_name,
		extensions,
	})
}

fn parse_cipher_suites(r: &mut Reader<'_>) -> Result<Vec<EchCipherSuite>, Error> {
	let data = r.read_u16_prefixed("cipher suites")?;
	let mut inner = r.sub(data);
	let mut suites = Vec::with_capacity(data.len() / 4);
	while !inner.is_empty() {
		let kdf_id = inner.read_u16("cipher suite kdf id")?;
		let aead_id = inner.read_u16("cipher suite aead id")?;
		suites.push(EchCipherSuite { kdf_id, aead_id });
	}
	Ok(suites)
}

fn parse_extensions<'a>(r: &mut Reader<'a>) -> Result<Vec<EchExtension<'a>>, Error> {
	let data = r.read_u16_prefixed("extensions")?;
	let mut inner = r.sub(data);
	let mut extensions = Vec::new();
	while !inner.is_empty() {
		let ext_type = inner.read_u16("extension type")?;
		let data = inner.read_u16_prefixed("extension data")?;
		extensions.push(EchExtension { ext_type, data });
	}
	Ok(extensions)
}

/// Serialize configs back into a length-prefixed ECHConfigList.
///
/// Each entry is written from its [`EchConfig::raw`] bytes, so a list
/// filtered down from a decoded one reproduces the server's encoding.
///
/// # Errors
///
/// Returns [`Error::FieldTooLong`] when the combined entries exceed 65535
/// bytes.
pub fn encode_ech_config_list(configs: &[EchConfig<'_>]) -> Result<Vec<u8>, Error> {
	let body: Vec<u8> = configs.iter().flat_map(|c| c.raw.iter().copied()).collect();
	let mut w = Writer::with_capacity(2 + body.len());
	w.put_u16_prefixed(&body, "ECHConfigList")?;
	Ok(w.finish())
}
