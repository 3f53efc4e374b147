/* src/dns_name.rs */

/// Rudimentary plausibility check for a DNS name.
///
/// Used to vet an ECHConfig public name before selecting the config. The
/// name must be at most 253 characters with at least two dot-separated
/// labels, and each label must be non-empty ASCII alphanumerics or hyphens,
/// not starting or ending with a hyphen. Resolution remains the authority
/// on whether the name really exists.
///
/// ```
/// assert!(ech_config::is_valid_dns_name("cloudflare-ech.com"));
/// assert!(!ech_config::is_valid_dns_name("localhost"));
/// assert!(!ech_config::is_valid_dns_name("-bad.example"));
/// ```
#[must_use]
pub fn is_valid_dns_name(name: &str) -> bool {
	if name.len() > 253 {
		return false;
	}
	let mut labels = 0usize;
	for label in name.split('.') {
		if !is_valid_label(label.as_bytes()) {
			return false;
		}
		labels += 1;
	}
	labels > 1
}

fn is_valid_label(label: &[u8]) -> bool {
	let (Some(&first), Some(&last)) = (label.first(), label.last()) else {
		return false;
	};
	first != b'-'
		&& last != b'-'
		&& label
			.iter()
			.all(|&b| b.is_ascii_alphanumeric() || b == b'-')
}

#[cfg(test)]
mod tests {
	use super::*;
	use alloc::string::String;

	#[test]
	fn accepts_ordinary_names() {
		assert!(is_valid_dns_name("good-name.example"));
		assert!(is_valid_dns_name("crypto.cloudflare.com"));
		assert!(is_valid_dns_name("a.b"));
		assert!(is_valid_dns_name("Mixed-Case.Example"));
		assert!(is_valid_dns_name("123.456"));
	}

	#[test]
	fn rejects_single_label() {
		assert!(!is_valid_dns_name("nodot"));
		assert!(!is_valid_dns_name(""));
	}

	#[test]
	fn rejects_empty_labels() {
		assert!(!is_valid_dns_name("example.com."));
		assert!(!is_valid_dns_name(".example.com"));
		assert!(!is_valid_dns_name("example..com"));
	}

	#[test]
	fn rejects_edge_hyphens() {
		assert!(!is_valid_dns_name("-bad.example"));
		assert!(!is_valid_dns_name("bad-.example"));
		assert!(!is_valid_dns_name("ok.-"));
		assert!(is_valid_dns_name("x--y.example"));
	}

	#[test]
	fn rejects_other_characters() {
		assert!(!is_valid_dns_name("under_score.example"));
		assert!(!is_valid_dns_name("sp ace.example"));
		assert!(!is_valid_dns_name("bücher.example"));
	}

	#[test]
	fn length_limit() {
		// 63 + 1 + 63 + 1 + 63 + 1 + 61 = 253
		let mut name = String::new();
		for len in [63, 63, 63, 61] {
			if !name.is_empty() {
				name.push('.');
			}
			name.extend(core::iter::repeat_n('a', len));
		}
		assert_eq!(name.len(), 253);
		assert!(is_valid_dns_name(&name));
		name.push('a');
		assert!(!is_valid_dns_name(&name));
	}
}
