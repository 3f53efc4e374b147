/* src/lib.rs */

//! Zero-copy decoder for Encrypted Client Hello (ECH) configurations.
//!
//! ECH configurations are published in the `ech` parameter of DNS HTTPS
//! records. This crate covers the byte-level work between a DNS answer and
//! a TLS stack:
//!
//! - [`decode_generic_rdata`] turns the `\# <len> <hex>` text of a
//!   DNS-over-HTTPS answer into RDATA bytes.
//! - [`parse_https_record`] splits RDATA into priority, target name and
//!   service parameters.
//! - [`parse_ech_config_list`] decodes the ECHConfigList found in the
//!   `ech` parameter, skipping entries of unknown versions.
//! - [`select_config`] picks a usable config under a [`SelectionPolicy`],
//!   consulting [`is_valid_dns_name`] for the public name.
//! - [`encode_outer_extension`] lays out the outer ClientHello
//!   `encrypted_client_hello` extension body.
//!
//! DNS queries, HPKE and the TLS handshake are left to the caller.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

// Diagnostics go through `log` when the `logging` feature is on.
#[cfg(feature = "logging")]
#[allow(clippy::single_component_path_imports)]
use log;

// `warn` is also a builtin attribute, so the no-op macros are defined under
// prefixed names and re-exported under the `log` names.
#[cfg(not(feature = "logging"))]
mod log {
	macro_rules! log_trace ( ($($tt:tt)*) => {{}} );
	macro_rules! log_debug ( ($($tt:tt)*) => {{}} );
	macro_rules! log_warn  ( ($($tt:tt)*) => {{}} );
	pub(crate) use {log_debug as debug, log_trace as trace, log_warn as warn};

}

mod config;
mod dns_name;
mod error;
mod outer;
mod rdata;
mod reader;
mod rejection;
mod select;
mod svcb;
mod writer;

pub use crate::config::{
	ECH_VERSION, EchCipherSuite, EchConfig, EchExtension, encode_ech_config_list,
	parse_ech_config_list,
};
pub use crate::dns_name::is_valid_dns_name;
pub use crate::error::Error;
pub use crate::outer::{EXTENSION_ENCRYPTED_CLIENT_HELLO, OuterExtension, encode_outer_extension};
pub use crate::rdata::decode_generic_rdata;
pub use crate::rejection::EchRejection;
pub use crate::select::{
	AEAD_AES_128_GCM, AEAD_AES_256_GCM, AEAD_CHACHA20_POLY1305, KDF_HKDF_SHA256, KDF_HKDF_SHA384,
	KEM_P256_HKDF_SHA256, KEM_X25519_HKDF_SHA256, SelectedConfig, SelectionPolicy, select_config,
};
pub use crate::svcb::{
	HttpsRecord, SVC_PARAM_ALPN, SVC_PARAM_ECH, SVC_PARAM_IPV4_HINT, SVC_PARAM_IPV6_HINT,
	SVC_PARAM_MANDATORY, SVC_PARAM_NO_DEFAULT_ALPN, SVC_PARAM_PORT, ServiceParam,
	ech_config_list_from_rdata, parse_https_record,
};
