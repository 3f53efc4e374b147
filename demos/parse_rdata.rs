/* demos/parse_rdata.rs */
#![allow(missing_docs)]

use ech_config::{
	SelectionPolicy, decode_generic_rdata, parse_ech_config_list, parse_https_record, select_config,
};

fn main() {
	let text = build_sample_answer();
	println!("DoH answer data: {text}");

	let rdata = match decode_generic_rdata(&text) {
		Ok(rdata) => rdata,
		Err(e) => {
			eprintln!("RDATA error: {e}");
			return;
		}
	};

	let record = match parse_https_record(&rdata) {
		Ok(record) => record,
		Err(e) => {
			eprintln!("Record error: {e}");
			return;
		}
	};
	println!("Priority: {}", record.priority);
	println!("Target: {:?}", record.target_name_str().unwrap_or("<binary>"));
	for p in &record.params {
		println!("Param {}: {} bytes", p.key, p.value.len());
	}

	let Some(list) = record.ech_config_list() else {
		println!("No ech parameter");
		return;
	};
	let configs = match parse_ech_config_list(list) {
		Ok(configs) => configs,
		Err(e) => {
			eprintln!("ECHConfigList error: {e}");
			return;
		}
	};
	for c in &configs {
		println!(
			"Config id {}: kem {:#06x}, public name {:?}, suites {:?}",
			c.config_id,
			c.kem_id,
			c.public_name_str().unwrap_or("<binary>"),
			c.cipher_suites
				.iter()
				.map(|s| format!("{:#06x}/{:#06x}", s.kdf_id, s.aead_id))
				.collect::<Vec<_>>()
		);
	}

	match select_config(&configs, &SelectionPolicy::default()) {
		Ok(selected) => {
			println!(
				"Selected config id {} with {:?}",
				selected.config.config_id, selected.cipher_suite
			);
			match selected.outer_extension(&[0u8; 32], &[0u8; 64]) {
				Ok(ext) => println!("Outer extension: {} bytes", ext.len()),
				Err(e) => eprintln!("Encode error: {e}"),
			}
		}
		Err(e) => eprintln!("Selection error: {e}"),
	}
}

/// An HTTPS answer as a DoH JSON resolver renders it: `\# <len> <hex>`.
fn build_sample_answer() -> String {
	let mut contents = Vec::new();
	contents.push(0x2a); // config id
	push_u16(&mut contents, 0x0020); // X25519
	push_u16(&mut contents, 32);
	contents.extend_from_slice(&[0x5a; 32]);
	push_u16(&mut contents, 4);
	push_u16(&mut contents, 0x0001); // HKDF-SHA256
	push_u16(&mut contents, 0x0001); // AES-128-GCM
	contents.push(0); // maximum name length
	let name = b"cloudflare-ech.com";
	contents.push(name.len() as u8);
	contents.extend_from_slice(name);
	push_u16(&mut contents, 0); // extensions

	let mut list = Vec::new();
	push_u16(&mut list, (contents.len() + 4) as u16);
	push_u16(&mut list, 0xfe0d);
	push_u16(&mut list, contents.len() as u16);
	list.extend_from_slice(&contents);

	let mut rdata = Vec::new();
	push_u16(&mut rdata, 1); // priority
	rdata.push(0x00); // root target
	push_u16(&mut rdata, 1); // alpn
	push_u16(&mut rdata, 6);
	rdata.extend_from_slice(b"\x02h3\x02h2");
	push_u16(&mut rdata, 5); // ech
	push_u16(&mut rdata, list.len() as u16);
	rdata.extend_from_slice(&list);

	let hex = hex::encode(&rdata);
	let groups: Vec<&str> = hex
		.as_bytes()
		.chunks(16)
		.filter_map(|c| core::str::from_utf8(c).ok())
		.collect();
	format!("\\# {} {}", rdata.len(), groups.join(" "))
}

fn push_u16(buf: &mut Vec<u8>, val: u16) {
	buf.push((val >> 8) as u8);
	buf.push(val as u8);
}
