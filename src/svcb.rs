/* src/svcb.rs */

use alloc::vec::Vec;

use crate::Error;
use crate::log::trace;
use crate::reader::Reader;
use crate::writer::Writer;

/// SvcParamKey `mandatory`.
pub const SVC_PARAM_MANDATORY: u16 = 0;
/// SvcParamKey `alpn`.
pub const SVC_PARAM_ALPN: u16 = 1;
/// SvcParamKey `no-default-alpn`.
pub const SVC_PARAM_NO_DEFAULT_ALPN: u16 = 2;
/// SvcParamKey `port`.
pub const SVC_PARAM_PORT: u16 = 3;
/// SvcParamKey `ipv4hint`.
pub const SVC_PARAM_IPV4_HINT: u16 = 4;
/// SvcParamKey `ech`, whose value is an ECHConfigList.
pub const SVC_PARAM_ECH: u16 = 5;
/// SvcParamKey `ipv6hint`.
pub const SVC_PARAM_IPV6_HINT: u16 = 6;

/// A single `(key, value)` service parameter. The value is kept opaque.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceParam<'a> {
	/// SvcParamKey number.
	pub key: u16,
	/// Raw value bytes.
	pub value: &'a [u8],
}

/// Decoded RDATA of a DNS HTTPS (or SVCB) resource record, borrowing from
/// the input buffer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpsRecord<'a> {
	/// SvcPriority; `0` marks alias mode.
	pub priority: u16,
	/// Target name bytes, without the terminating zero byte. Empty for the
	/// root name.
	pub target_name: &'a [u8],
	/// Service parameters in wire order. Duplicates are kept.
	pub params: Vec<ServiceParam<'a>>,
}

impl<'a> HttpsRecord<'a> {
	/// Target name as text, if it is valid UTF-8.
	#[must_use]
	pub fn target_name_str(&self) -> Option<&'a str> {
		core::str::from_utf8(self.target_name).ok()
	}

	/// Value of the parameter with the given key.
	///
	/// When the key occurs more than once the last occurrence wins.
	#[must_use]
	pub fn param(&self, key: u16) -> Option<&'a [u8]> {
		self.params.iter().rev().find(|p| p.key == key).map(|p| p.value)
	}

	/// Value of the `ech` parameter: a length-prefixed ECHConfigList.
	#[must_use]
	pub fn ech_config_list(&self) -> Option<&'a [u8]> {
		self.param(SVC_PARAM_ECH)
	}

	/// Serialize back to RDATA.
	///
	/// The target name is written as a zero-terminated run, the same form
	/// [`parse_https_record`] reads.
	///
	/// # Errors
	///
	/// Returns [`Error::FieldTooLong`] when a parameter value exceeds 65535
	/// bytes.
	pub fn encode(&self) -> Result<Vec<u8>, Error> {
		let params_len: usize = self.params.iter().map(|p| 4 + p.value.len()).sum();
		let mut w = Writer::with_capacity(2 + self.target_name.len() + 1 + params_len);
		w.put_u16(self.priority);
		w.put_bytes(self.target_name);
		w.put_u8(0);
		for p in &self.params {
			w.put_u16(p.key);
			w.put_u16_prefixed(p.value, "service parameter value")?;
		}
		Ok(w.finish())
	}
}

/// Parse the RDATA of a DNS HTTPS resource record.
///
/// The target name is read as a single run of bytes terminated by a zero
/// byte. That matches the wire encoding for the root name and for a single
/// label; multi-label names are not split into labels.
///
/// # Errors
///
/// Returns [`Error::MalformedRecord`] when the data is shorter than three
/// bytes, the target name has no terminating zero byte, or a parameter
/// length runs past the end of the data.
///
/// ```
/// let record = ech_config::parse_https_record(&[0x00, 0x01, 0x00]).unwrap();
/// assert_eq!(record.priority, 1);
/// assert!(record.target_name.is_empty());
/// assert!(record.params.is_empty());
/// ```
pub fn parse_https_record(data: &[u8]) -> Result<HttpsRecord<'_>, Error> {
	if data.len() < 3 {
		return Err(Error::malformed_record("record length"));
	}
	let mut r = Reader::new(data, Error::malformed_record);
	let priority = r.read_u16("priority")?;
	let target_name = r.read_until_nul("target name")?;

	let mut params = Vec::new();
	while r.remaining() >= 4 {
		let key = r.read_u16("service parameter key")?;
		let value = r.read_u16_prefixed("service parameter value")?;
		trace!("service parameter {key} ({} bytes)", value.len());
		params.push(ServiceParam { key, value });
	}

	Ok(HttpsRecord {
		priority,
		target_name,
		params,
	})
}

/// Parse HTTPS record RDATA and return its `ech` parameter, if present.
///
/// # Errors
///
/// Returns [`Error::MalformedRecord`] under the same conditions as
/// [`parse_https_record`].
pub fn ech_config_list_from_rdata(data: &[u8]) -> Result<Option<&[u8]>, Error> {
	Ok(parse_https_record(data)?.ech_config_list())
}
