/* src/rejection.rs */

use alloc::vec::Vec;

use crate::Error;
use crate::config::{EchConfig, parse_ech_config_list};

/// An ECHConfigList with no entries.
const EMPTY_CONFIG_LIST: [u8; 2] = [0x00, 0x00];

/// A server declined ECH during the handshake.
///
/// Produced by the TLS layer, not by this crate. A rejection without retry
/// configs is an authenticated signal from the server: the client should
/// stop attempting ECH with this configuration rather than treat the
/// failure as transient.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("server rejected ECH")]
pub struct EchRejection {
	/// ECHConfigList the server offered for a retry, if any.
	pub retry_config_list: Option<Vec<u8>>,
}

impl EchRejection {
	/// Wrap the retry list reported by the TLS layer.
	#[must_use]
	pub fn new(retry_config_list: Option<Vec<u8>>) -> Self {
		Self { retry_config_list }
	}

	/// Whether the server offered configs to retry with.
	///
	/// An absent list, empty bytes, or the zero-length ECHConfigList
	/// `00 00` all mean no.
	#[must_use]
	pub fn can_retry(&self) -> bool {
		self.retry_config_list
			.as_deref()
			.is_some_and(|l| !l.is_empty() && l != EMPTY_CONFIG_LIST)
	}

	/// Decode the retry list.
	///
	/// Returns an empty list when the server offered none.
	///
	/// # Errors
	///
	/// Returns [`Error::MalformedEchConfigList`] when the retry list is
	/// malformed.
	pub fn retry_configs(&self) -> Result<Vec<EchConfig<'_>>, Error> {
		match self.retry_config_list.as_deref() {
			Some(list) if !list.is_empty() => parse_ech_config_list(list),
			_ => Ok(Vec::new()),
		}
	}
}
