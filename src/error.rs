/* src/error.rs */

/// Errors produced while decoding or encoding ECH wire structures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// HTTPS/SVCB RDATA is truncated or has an inconsistent parameter length.
	#[error("malformed HTTPS record: {field}")]
	MalformedRecord {
		/// Name of the field that could not be decoded.
		field: &'static str,
	},

	/// The ECHConfigList length prefix is wrong, or a nested length field
	/// overruns its enclosing region.
	#[error("malformed ECHConfigList: {field}")]
	MalformedEchConfigList {
		/// Name of the field that could not be decoded.
		field: &'static str,
	},

	/// An outer `encrypted_client_hello` extension payload could not be decoded.
	#[error("malformed outer ECH extension: {field}")]
	MalformedOuterExtension {
		/// Name of the field that could not be decoded.
		field: &'static str,
	},

	/// Generic RDATA text (RFC 3597) is not of the form `\# <len> <hex>`.
	#[error("malformed generic RDATA: {reason}")]
	MalformedRdata {
		/// Description of the problem.
		reason: &'static str,
	},

	/// A value does not fit the fixed-width length prefix it is encoded with.
	#[error("{field} is {len} bytes, exceeding the maximum of {max}")]
	FieldTooLong {
		/// Name of the oversized field.
		field: &'static str,
		/// Actual length in bytes.
		len: usize,
		/// Largest length the prefix can represent.
		max: usize,
	},

	/// No configuration in the list is usable under the selection policy.
	#[error("no compatible ECH configuration")]
	NoCompatibleConfig,
}

impl Error {
	pub(crate) fn malformed_record(field: &'static str) -> Self {
		Self::MalformedRecord { field }
	}

	pub(crate) fn malformed_config_list(field: &'static str) -> Self {
		Self::MalformedEchConfigList { field }
	}

	pub(crate) fn malformed_outer(field: &'static str) -> Self {
		Self::MalformedOuterExtension { field }
	}
}
