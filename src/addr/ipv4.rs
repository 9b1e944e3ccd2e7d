use crate::addr::{AddressFamily, Family};
use crate::error::AddrError;

/// IPv4 address family marker.
///
/// Addresses of this family are 32 bits wide (e.g., 192.168.1.1).
pub struct Ipv4;

impl Family for Ipv4 {
	type Octets = [u8; 4];

	const WIDTH: usize = 4;

	#[inline]
	fn kind() -> AddressFamily {
		AddressFamily::Ipv4
	}

	fn parse(text: &str) -> Result<[u8; 4], AddrError> {
		parse_octets(text).ok_or_else(|| AddrError::invalid_format(AddressFamily::Ipv4, text))
	}

	fn format(octets: &[u8; 4]) -> String {
		format!("{}.{}.{}.{}", octets[0], octets[1], octets[2], octets[3])
	}
}

/// Parses exactly four dotted-decimal octets.
///
/// Each octet is 1-3 ASCII digits, value 0-255, without a leading zero.
pub(crate) fn parse_octets(text: &str) -> Option<[u8; 4]> {
	let mut parts = text.split('.');
	let mut octets = [0u8; 4];
	for octet in &mut octets {
		let part = parts.next()?;
		if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
			return None;
		}
		// "01" is ambiguous with octal
		if part.len() > 1 && part.starts_with('0') {
			return None;
		}
		let value: u16 = part.parse().ok()?;
		*octet = u8::try_from(value).ok()?;
	}
	if parts.next().is_some() {
		return None;
	}
	Some(octets)
}
