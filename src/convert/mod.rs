//! Textual <-> binary conversion entry points.

#[cfg(unix)]
mod native;

use crate::addr::{self, AddressFamily, Family, Ipv4, Ipv6, PackedAddr};
use crate::error::AddrError;

/// True where the platform `inet_pton` / `inet_ntop` can be called.
pub const NATIVE_AVAILABLE: bool = cfg!(unix);

/// Which implementation performs the conversion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Backend {
	/// The platform C library, through `libc`.
	Native,
	/// The crate's own grammar.
	Portable,
}

impl Default for Backend {
	fn default() -> Self {
		if NATIVE_AVAILABLE { Backend::Native } else { Backend::Portable }
	}
}

/// How IPv6 addresses are written.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Ipv6Style {
	/// Canonical form, `2001:db8::1`.
	#[default]
	Compressed,
	/// All eight groups, `2001:0db8:0000:0000:0000:0000:0000:0001`.
	/// Always produced by the portable formatter.
	Expanded,
}

/// Converter configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertConfig {
	pub backend: Backend,
	pub ipv6_style: Ipv6Style,
}

impl ConvertConfig {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn backend(mut self, backend: Backend) -> Self {
		self.backend = backend;
		self
	}

	pub fn ipv6_style(mut self, style: Ipv6Style) -> Self {
		self.ipv6_style = style;
		self
	}
}

/// Stateless address converter.
///
/// ```
/// use inet_util::{AddressFamily, Backend, ConvertConfig, Converter};
///
/// let conv = Converter::new(ConvertConfig::new().backend(Backend::Portable));
/// let packed = conv.parse("10.0.0.1", AddressFamily::Ipv4)?;
/// assert_eq!(packed.as_bytes(), &[10, 0, 0, 1]);
/// assert_eq!(conv.format(packed.as_bytes(), AddressFamily::Ipv4)?, "10.0.0.1");
/// # Ok::<(), inet_util::AddrError>(())
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Converter {
	config: ConvertConfig,
}

impl Converter {
	/// Creates a converter.
	///
	/// `Backend::Native` falls back to `Backend::Portable` where the
	/// platform has no native routine.
	pub fn new(mut config: ConvertConfig) -> Self {
		if config.backend == Backend::Native && !NATIVE_AVAILABLE {
			tracing::warn!("native inet_pton/inet_ntop unavailable, using portable backend");
			config.backend = Backend::Portable;
		}
		Self { config }
	}

	pub fn config(&self) -> &ConvertConfig {
		&self.config
	}

	/// Returns the backend actually in use.
	pub fn backend(&self) -> Backend {
		self.config.backend
	}

	/// Parses presentation text into its binary form.
	pub fn parse(&self, text: &str, family: AddressFamily) -> Result<PackedAddr, AddrError> {
		tracing::trace!(backend = ?self.config.backend, %family, "parse");
		match self.config.backend {
			#[cfg(unix)]
			Backend::Native => native::pton(family, text),
			_ => match family {
				AddressFamily::Ipv4 => Ipv4::parse(text).map(PackedAddr::V4),
				AddressFamily::Ipv6 => Ipv6::parse(text).map(PackedAddr::V6),
			},
		}
	}

	/// Formats a binary address, which must be exactly `family.width()` bytes.
	///
	/// IPv6 text is RFC 5952 whatever the backend.
	pub fn format(&self, binary: &[u8], family: AddressFamily) -> Result<String, AddrError> {
		let packed = PackedAddr::from_slice(binary, family)?;
		tracing::trace!(backend = ?self.config.backend, %family, "format");

		match (&packed, self.config.backend) {
			// Platforms disagree on IPv4-compatible IPv6 text, so IPv6 is
			// always written by the built-in formatter.
			(PackedAddr::V6(octets), _) => Ok(match self.config.ipv6_style {
				Ipv6Style::Compressed => Ipv6::format(octets),
				Ipv6Style::Expanded => addr::format_expanded(octets),
			}),
			#[cfg(unix)]
			(PackedAddr::V4(_), Backend::Native) => native::ntop(&packed),
			(PackedAddr::V4(octets), _) => Ok(Ipv4::format(octets)),
		}
	}

	/// [`parse`](Self::parse) with a libc `AF_*` family.
	pub fn inet_pton(&self, af: libc::c_int, text: &str) -> Result<PackedAddr, AddrError> {
		self.parse(text, AddressFamily::from_raw(af)?)
	}

	/// [`format`](Self::format) with a libc `AF_*` family.
	pub fn inet_ntop(&self, af: libc::c_int, packed: &[u8]) -> Result<String, AddrError> {
		self.format(packed, AddressFamily::from_raw(af)?)
	}
}

/// Parses `text` as an address of `family` with the default converter.
pub fn parse_address(text: &str, family: AddressFamily) -> Result<PackedAddr, AddrError> {
	Converter::default().parse(text, family)
}

/// Formats `binary` as an address of `family` with the default converter.
pub fn format_address(binary: &[u8], family: AddressFamily) -> Result<String, AddrError> {
	Converter::default().format(binary, family)
}

/// Converts an IP address from text to packed binary form.
///
/// `af` is `libc::AF_INET` or `libc::AF_INET6`.
pub fn inet_pton(af: libc::c_int, text: &str) -> Result<PackedAddr, AddrError> {
	Converter::default().inet_pton(af, text)
}

/// Converts a packed IP address of the given family to text.
pub fn inet_ntop(af: libc::c_int, packed: &[u8]) -> Result<String, AddrError> {
	Converter::default().inet_ntop(af, packed)
}
