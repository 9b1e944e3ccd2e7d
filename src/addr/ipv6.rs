use crate::addr::{AddressFamily, Family};
use crate::addr::ipv4::parse_octets;
use crate::error::AddrError;

/// IPv6 address family marker.
///
/// Addresses of this family are 128 bits wide (e.g., ::1).
pub struct Ipv6;

impl Family for Ipv6 {
	type Octets = [u8; 16];

	const WIDTH: usize = 16;

	#[inline]
	fn kind() -> AddressFamily {
		AddressFamily::Ipv6
	}

	fn parse(text: &str) -> Result<[u8; 16], AddrError> {
		parse_groups(text).ok_or_else(|| AddrError::invalid_format(AddressFamily::Ipv6, text))
	}

	/// Canonical text form (RFC 5952).
	fn format(octets: &[u8; 16]) -> String {
		format_compressed(octets)
	}
}

/// Parses colon-hex text into 16 bytes.
///
/// At most one `::`, standing for at least one zero group. The last group
/// pair may be written as a dotted IPv4 address.
fn parse_groups(text: &str) -> Option<[u8; 16]> {
	if text.is_empty() {
		return None;
	}

	let (head, tail) = match text.find("::") {
		Some(pos) => {
			let tail = &text[pos + 2..];
			if tail.contains("::") {
				return None;
			}
			(&text[..pos], Some(tail))
		}
		None => (text, None),
	};

	let head_groups = parse_run(head, tail.is_none())?;
	let mut groups = [0u16; 8];
	match tail {
		Some(tail) => {
			let tail_groups = parse_run(tail, true)?;
			if head_groups.len() + tail_groups.len() > 7 {
				return None;
			}
			groups[..head_groups.len()].copy_from_slice(&head_groups);
			groups[8 - tail_groups.len()..].copy_from_slice(&tail_groups);
		}
		None => {
			if head_groups.len() != 8 {
				return None;
			}
			groups.copy_from_slice(&head_groups);
		}
	}

	let mut octets = [0u8; 16];
	for (chunk, group) in octets.chunks_exact_mut(2).zip(groups) {
		chunk.copy_from_slice(&group.to_be_bytes());
	}
	Some(octets)
}

/// Parses a `:`-separated run of groups. An empty run is valid (either side of `::`).
fn parse_run(run: &str, allow_ipv4_tail: bool) -> Option<Vec<u16>> {
	let mut groups = Vec::with_capacity(8);
	if run.is_empty() {
		return Some(groups);
	}

	let mut pieces = run.split(':').peekable();
	while let Some(piece) = pieces.next() {
		let last = pieces.peek().is_none();
		if last && allow_ipv4_tail && piece.contains('.') {
			let v4 = parse_octets(piece)?;
			groups.push(u16::from_be_bytes([v4[0], v4[1]]));
			groups.push(u16::from_be_bytes([v4[2], v4[3]]));
			break;
		}
		if piece.is_empty() || piece.len() > 4 || !piece.bytes().all(|b| b.is_ascii_hexdigit()) {
			return None;
		}
		groups.push(u16::from_str_radix(piece, 16).ok()?);
		if groups.len() > 8 {
			return None;
		}
	}
	Some(groups)
}

fn to_groups(octets: &[u8; 16]) -> [u16; 8] {
	let mut groups = [0u16; 8];
	for (group, chunk) in groups.iter_mut().zip(octets.chunks_exact(2)) {
		*group = u16::from_be_bytes([chunk[0], chunk[1]]);
	}
	groups
}

/// Returns `(start, len)` of the longest run of zero groups, first one on ties.
/// Runs shorter than two groups are not reported.
fn longest_zero_run(groups: &[u16; 8]) -> Option<(usize, usize)> {
	let mut best: Option<(usize, usize)> = None;
	let mut start = 0;
	let mut len = 0;
	for (i, &group) in groups.iter().enumerate() {
		if group == 0 {
			if len == 0 {
				start = i;
			}
			len += 1;
			if len >= 2 && best.is_none_or(|(_, best_len)| len > best_len) {
				best = Some((start, len));
			}
		} else {
			len = 0;
		}
	}
	best
}

/// Formats 16 bytes per RFC 5952.
///
/// IPv4-mapped addresses (`::ffff:0:0/96`) keep a dotted IPv4 tail.
pub(crate) fn format_compressed(octets: &[u8; 16]) -> String {
	if octets[..10].iter().all(|&b| b == 0) && octets[10] == 0xff && octets[11] == 0xff {
		return format!("::ffff:{}.{}.{}.{}", octets[12], octets[13], octets[14], octets[15]);
	}

	let groups = to_groups(octets);
	let mut out = String::with_capacity(39);
	match longest_zero_run(&groups) {
		Some((start, len)) => {
			push_groups(&mut out, &groups[..start]);
			out.push_str("::");
			push_groups(&mut out, &groups[start + len..]);
		}
		None => push_groups(&mut out, &groups),
	}
	out
}

fn push_groups(out: &mut String, groups: &[u16]) {
	for (i, group) in groups.iter().enumerate() {
		if i > 0 {
			out.push(':');
		}
		out.push_str(&format!("{:x}", group));
	}
}

/// Formats all eight groups, four digits each, without `::`.
pub(crate) fn format_expanded(octets: &[u8; 16]) -> String {
	to_groups(octets)
		.iter()
		.map(|group| format!("{:04x}", group))
		.collect::<Vec<_>>()
		.join(":")
}
