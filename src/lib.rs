//! `inet_pton` / `inet_ntop`: conversion between presentation-format IP
//! addresses and their packed network-byte-order form.

mod addr;
mod convert;
mod error;

pub use self::error::AddrError;
pub use self::addr::{AddressFamily, Family, Ipv4, Ipv6, PackedAddr};
pub use self::convert::{Backend, ConvertConfig, Converter, Ipv6Style, NATIVE_AVAILABLE,
						parse_address, format_address, inet_pton, inet_ntop};
