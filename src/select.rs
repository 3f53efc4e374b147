/* src/select.rs */

use alloc::vec;
use alloc::vec::Vec;

use crate::Error;
use crate::config::{EchCipherSuite, EchConfig};
use crate::dns_name::is_valid_dns_name;
use crate::log::{debug, warn};
use crate::outer::encode_outer_extension;

/// HPKE KEM `DHKEM(P-256, HKDF-SHA256)`.
pub const KEM_P256_HKDF_SHA256: u16 = 0x0010;
/// HPKE KEM `DHKEM(X25519, HKDF-SHA256)`.
pub const KEM_X25519_HKDF_SHA256: u16 = 0x0020;
/// HPKE KDF `HKDF-SHA256`.
pub const KDF_HKDF_SHA256: u16 = 0x0001;
/// HPKE KDF `HKDF-SHA384`.
pub const KDF_HKDF_SHA384: u16 = 0x0002;
/// HPKE AEAD `AES-128-GCM`.
pub const AEAD_AES_128_GCM: u16 = 0x0001;
/// HPKE AEAD `AES-256-GCM`.
pub const AEAD_AES_256_GCM: u16 = 0x0002;
/// HPKE AEAD `ChaCha20Poly1305`.
pub const AEAD_CHACHA20_POLY1305: u16 = 0x0003;

/// Which configs a client is able and willing to use.
///
/// The default accepts the X25519 KEM with HKDF-SHA256 and any of the
/// three standard AEADs, and requires a plausible public name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionPolicy {
	/// Acceptable HPKE KEM identifiers.
	pub kems: Vec<u16>,
	/// Acceptable symmetric suites.
	pub cipher_suites: Vec<EchCipherSuite>,
	/// Skip configs whose public name fails [`is_valid_dns_name`].
	pub require_valid_public_name: bool,
}

impl Default for SelectionPolicy {
	fn default() -> Self {
		Self {
			kems: vec![KEM_X25519_HKDF_SHA256],
			cipher_suites: vec![
				EchCipherSuite::new(KDF_HKDF_SHA256, AEAD_AES_128_GCM),
				EchCipherSuite::new(KDF_HKDF_SHA256, AEAD_AES_256_GCM),
				EchCipherSuite::new(KDF_HKDF_SHA256, AEAD_CHACHA20_POLY1305),
			],
			require_valid_public_name: true,
		}
	}
}

impl SelectionPolicy {
	/// Replace the acceptable KEMs.
	#[must_use]
	pub fn with_kems(mut self, kems: Vec<u16>) -> Self {
		self.kems = kems;
		self
	}

	/// Replace the acceptable cipher suites.
	#[must_use]
	pub fn with_cipher_suites(mut self, cipher_suites: Vec<EchCipherSuite>) -> Self {
		self.cipher_suites = cipher_suites;
		self
	}

	/// Toggle the public name check.
	#[must_use]
	pub fn with_valid_public_name(mut self, required: bool) -> Self {
		self.require_valid_public_name = required;
		self
	}
}

/// A config chosen by [`select_config`] together with the suite to use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedConfig<'c, 'a> {
	/// The chosen config.
	pub config: &'c EchConfig<'a>,
	/// First suite of the config that the policy accepts.
	pub cipher_suite: EchCipherSuite,
}

impl SelectedConfig<'_, '_> {
	/// Build the outer extension payload for this config and suite.
	///
	/// # Errors
	///
	/// Returns [`Error::FieldTooLong`] when `enc` or `payload` exceeds 65535
	/// bytes.
	pub fn outer_extension(&self, enc: &[u8], payload: &[u8]) -> Result<Vec<u8>, Error> {
		encode_outer_extension(
			self.config.config_id,
			self.cipher_suite.kdf_id,
			self.cipher_suite.aead_id,
			enc,
			payload,
		)
	}
}

/// Pick the first config usable under `policy`.
///
/// Configs are tried in list order. A config is usable when its public
/// name is plausible (unless the policy waives that), it carries no
/// mandatory extension, its KEM is accepted, and one of its suites is
/// accepted. The config's own suite order decides among accepted suites.
///
/// # Errors
///
/// Returns [`Error::NoCompatibleConfig`] when no config is usable.
pub fn select_config<'c, 'a>(
	configs: &'c [EchConfig<'a>],
	policy: &SelectionPolicy,
) -> Result<SelectedConfig<'c, 'a>, Error> {
	for config in configs {
		if policy.require_valid_public_name
			&& !config.public_name_str().is_some_and(is_valid_dns_name)
		{
			warn!(
				"ECHConfig id {} has an invalid public name",
				config.config_id
			);
			continue;
		}
		if config.has_mandatory_extension() {
			warn!(
				"ECHConfig id {} has an unsupported mandatory extension",
				config.config_id
			);
			continue;
		}
		if !policy.kems.contains(&config.kem_id) {
			warn!(
				"ECHConfig id {} uses unsupported KEM {:#06x}",
				config.config_id, config.kem_id
			);
			continue;
		}
		let Some(&cipher_suite) = config
			.cipher_suites
			.iter()
			.find(|suite| policy.cipher_suites.contains(suite))
		else {
			warn!(
				"ECHConfig id {} offers no supported cipher suite",
				config.config_id
			);
			continue;
		};
		debug!(
			"selected ECHConfig id {} suite {cipher_suite:?}",
			config.config_id
		);
		return Ok(SelectedConfig {
			config,
			cipher_suite,
		});
	}
	Err(Error::NoCompatibleConfig)
}
