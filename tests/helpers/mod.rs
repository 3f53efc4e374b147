/* tests/helpers/mod.rs */
#![allow(dead_code)]

/// Public key used by every generated config.
pub(crate) const PUBLIC_KEY: [u8; 32] = [0x5a; 32];

/// Parameters for one generated ECHConfig entry.
pub(crate) struct ConfigFields<'a> {
	pub(crate) version: u16,
	pub(crate) config_id: u8,
	pub(crate) kem_id: u16,
	pub(crate) suites: &'a [(u16, u16)],
	pub(crate) public_name: &'a [u8],
	pub(crate) extensions: &'a [(u16, &'a [u8])],
}

impl Default for ConfigFields<'_> {
	fn default() -> Self {
		Self {
			version: 0xfe0d,
			config_id: 1,
			kem_id: 0x0020, // X25519
			suites: &[(0x0001, 0x0001)], // HKDF-SHA256 + AES-128-GCM
			public_name: b"public.example",
			extensions: &[],
		}
	}
}

/// Encode one ECHConfig entry, version and length header included.
pub(crate) fn config(fields: &ConfigFields<'_>) -> Vec<u8> {
	let mut contents = Vec::new();
	contents.push(fields.config_id);
	push_u16(&mut contents, fields.kem_id);
	push_u16(&mut contents, PUBLIC_KEY.len() as u16);
	contents.extend_from_slice(&PUBLIC_KEY);
	push_u16(&mut contents, (fields.suites.len() * 4) as u16);
	for &(kdf, aead) in fields.suites {
		push_u16(&mut contents, kdf);
		push_u16(&mut contents, aead);
	}
	contents.push(0); // maximum name length
	contents.push(fields.public_name.len() as u8);
	contents.extend_from_slice(fields.public_name);
	let ext_len: usize = fields.extensions.iter().map(|(_, d)| 4 + d.len()).sum();
	push_u16(&mut contents, ext_len as u16);
	for &(ext_type, data) in fields.extensions {
		push_u16(&mut contents, ext_type);
		push_u16(&mut contents, data.len() as u16);
		contents.extend_from_slice(data);
	}

	let mut entry = Vec::new();
	push_u16(&mut entry, fields.version);
	push_u16(&mut entry, contents.len() as u16);
	entry.extend_from_slice(&contents);
	entry
}

/// Entry of an arbitrary version with opaque contents.
pub(crate) fn opaque_entry(version: u16, contents: &[u8]) -> Vec<u8> {
	let mut entry = Vec::new();
	push_u16(&mut entry, version);
	push_u16(&mut entry, contents.len() as u16);
	entry.extend_from_slice(contents);
	entry
}

/// Wrap entries in an ECHConfigList length prefix.
pub(crate) fn list(entries: &[&[u8]]) -> Vec<u8> {
	let body: Vec<u8> = entries.concat();
	let mut out = Vec::new();
	push_u16(&mut out, body.len() as u16);
	out.extend_from_slice(&body);
	out
}

/// Build HTTPS record RDATA with a zero-terminated target name.
pub(crate) fn rdata(priority: u16, target: &[u8], params: &[(u16, &[u8])]) -> Vec<u8> {
	let mut out = Vec::new();
	push_u16(&mut out, priority);
	out.extend_from_slice(target);
	out.push(0x00);
	for &(key, value) in params {
		push_u16(&mut out, key);
		push_u16(&mut out, value.len() as u16);
		out.extend_from_slice(value);
	}
	out
}

pub(crate) fn push_u16(buf: &mut Vec<u8>, val: u16) {
	buf.push((val >> 8) as u8);
	buf.push(val as u8);
}
