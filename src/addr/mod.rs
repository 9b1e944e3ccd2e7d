//! Address families and their presentation grammars.
//!
//! This module defines the two address families supported:
//! - `Ipv4` — dotted decimal, 4 bytes
//! - `Ipv6` — colon hexadecimal, 16 bytes

mod ipv4;
mod ipv6;
pub use self::ipv4::Ipv4;
pub use self::ipv6::Ipv6;
pub(crate) use self::ipv6::format_expanded;

use crate::error::AddrError;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// Trait for address family markers.
///
/// Each type implementing this trait fixes the binary width and the
/// textual grammar at compile time.
pub trait Family {
	/// Fixed-size octet array in network byte order.
	type Octets: AsRef<[u8]> + Copy;

	/// Width of `Octets` in bytes.
	const WIDTH: usize;

	/// Returns the runtime family for this marker.
	fn kind() -> AddressFamily;

	/// Returns the libc constant for this address family.
	#[inline]
	fn raw() -> libc::c_int {
		Self::kind().raw()
	}

	/// Parses presentation text into octets.
	fn parse(text: &str) -> Result<Self::Octets, AddrError>;

	/// Formats octets in canonical presentation form.
	fn format(octets: &Self::Octets) -> String;
}

/// Runtime address family selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AddressFamily {
	Ipv4,
	Ipv6,
}

impl AddressFamily {
	/// Maps a libc `AF_*` constant to a family.
	pub fn from_raw(af: libc::c_int) -> Result<Self, AddrError> {
		match af {
			libc::AF_INET => Ok(AddressFamily::Ipv4),
			libc::AF_INET6 => Ok(AddressFamily::Ipv6),
			_ => {
				tracing::debug!(af, "unknown address family");
				Err(AddrError::UnsupportedFamily { af })
			}
		}
	}

	/// Returns the libc constant for this address family.
	#[inline]
	pub fn raw(self) -> libc::c_int {
		match self {
			AddressFamily::Ipv4 => libc::AF_INET,
			AddressFamily::Ipv6 => libc::AF_INET6,
		}
	}

	/// Binary width in bytes (4 or 16).
	#[inline]
	pub fn width(self) -> usize {
		match self {
			AddressFamily::Ipv4 => Ipv4::WIDTH,
			AddressFamily::Ipv6 => Ipv6::WIDTH,
		}
	}
}

impl TryFrom<libc::c_int> for AddressFamily {
	type Error = AddrError;

	fn try_from(af: libc::c_int) -> Result<Self, Self::Error> {
		Self::from_raw(af)
	}
}

impl std::fmt::Display for AddressFamily {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			AddressFamily::Ipv4 => f.write_str("IPv4"),
			AddressFamily::Ipv6 => f.write_str("IPv6"),
		}
	}
}

/// A binary address, exactly as wide as its family requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PackedAddr {
	V4([u8; 4]),
	V6([u8; 16]),
}

impl PackedAddr {
	/// Copies `bytes` into a packed address after checking the width.
	pub fn from_slice(bytes: &[u8], family: AddressFamily) -> Result<Self, AddrError> {
		match family {
			AddressFamily::Ipv4 => <[u8; 4]>::try_from(bytes)
				.map(PackedAddr::V4)
				.map_err(|_| AddrError::invalid_length(family, bytes.len())),
			AddressFamily::Ipv6 => <[u8; 16]>::try_from(bytes)
				.map(PackedAddr::V6)
				.map_err(|_| AddrError::invalid_length(family, bytes.len())),
		}
	}

	pub fn family(&self) -> AddressFamily {
		match self {
			PackedAddr::V4(_) => AddressFamily::Ipv4,
			PackedAddr::V6(_) => AddressFamily::Ipv6,
		}
	}

	/// Returns the bytes in network byte order.
	pub fn as_bytes(&self) -> &[u8] {
		match self {
			PackedAddr::V4(octets) => octets,
			PackedAddr::V6(octets) => octets,
		}
	}

	pub fn to_vec(&self) -> Vec<u8> {
		self.as_bytes().to_vec()
	}
}

impl AsRef<[u8]> for PackedAddr {
	fn as_ref(&self) -> &[u8] {
		self.as_bytes()
	}
}

impl From<PackedAddr> for Vec<u8> {
	fn from(addr: PackedAddr) -> Self {
		addr.to_vec()
	}
}

impl From<PackedAddr> for IpAddr {
	fn from(addr: PackedAddr) -> Self {
		match addr {
			PackedAddr::V4(octets) => IpAddr::V4(Ipv4Addr::from(octets)),
			PackedAddr::V6(octets) => IpAddr::V6(Ipv6Addr::from(octets)),
		}
	}
}

impl From<IpAddr> for PackedAddr {
	fn from(addr: IpAddr) -> Self {
		match addr {
			IpAddr::V4(v4) => PackedAddr::V4(v4.octets()),
			IpAddr::V6(v6) => PackedAddr::V6(v6.octets()),
		}
	}
}
