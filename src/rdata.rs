/* src/rdata.rs */

use alloc::string::String;
use alloc::vec::Vec;

use crate::Error;

/// Decode RDATA given in the RFC 3597 generic text form `\# <len> <hex>`.
///
/// This is how DNS-over-HTTPS JSON answers present record types the
/// resolver does not render natively, HTTPS records included. The hex may
/// be split into several whitespace-separated groups.
///
/// # Errors
///
/// Returns [`Error::MalformedRdata`] when the `\#` marker is missing, the
/// length is not a decimal integer, the hex is invalid, or the decoded
/// length differs from the declared one.
///
/// ```
/// let rdata = ech_config::decode_generic_rdata(r"\# 3 000100").unwrap();
/// assert_eq!(rdata, [0x00, 0x01, 0x00]);
/// ```
pub fn decode_generic_rdata(text: &str) -> Result<Vec<u8>, Error> {
	let mut parts = text.split_ascii_whitespace();
	if parts.next() != Some("\\#") {
		return Err(Error::MalformedRdata {
			reason: "missing \\# marker",
		});
	}
	let declared: usize = parts
		.next()
		.and_then(|len| len.parse().ok())
		.ok_or(Error::MalformedRdata {
			reason: "invalid length",
		})?;

	let digits: String = parts.collect();
	let bytes = hex::decode(digits).map_err(|_| Error::MalformedRdata {
		reason: "invalid hex",
	})?;
	if bytes.len() != declared {
		return Err(Error::MalformedRdata {
			reason: "length mismatch",
		});
	}
	Ok(bytes)
}
