use inet_util::{AddrError, AddressFamily, Backend, ConvertConfig, Converter, Family, Ipv4, Ipv6,
				Ipv6Style, PackedAddr, format_address, inet_ntop, inet_pton, parse_address};
use std::net::{IpAddr, Ipv6Addr};

fn converters() -> Vec<Converter> {
	let mut all = vec![
		Converter::new(ConvertConfig::new().backend(Backend::Portable)),
		Converter::new(ConvertConfig::new().ipv6_style(Ipv6Style::Expanded)),
	];
	if inet_util::NATIVE_AVAILABLE {
		all.push(Converter::new(ConvertConfig::new().backend(Backend::Native)));
	}
	all
}

#[test]
fn parse_ipv4() {
	let packed = parse_address("192.168.0.1", AddressFamily::Ipv4).unwrap();
	assert_eq!(packed.as_bytes(), &[192, 168, 0, 1]);
	assert_eq!(packed.family(), AddressFamily::Ipv4);
}

#[test]
fn parse_ipv6_loopback() {
	let packed = parse_address("::1", AddressFamily::Ipv6).unwrap();
	let mut expected = [0u8; 16];
	expected[15] = 1;
	assert_eq!(packed.as_bytes(), &expected);
}

#[test]
fn format_ipv4() {
	assert_eq!(format_address(&[127, 0, 0, 1], AddressFamily::Ipv4).unwrap(), "127.0.0.1");
}

#[test]
fn out_of_range_octet_is_invalid_format() {
	for conv in converters() {
		let err = conv.parse("999.1.1.1", AddressFamily::Ipv4).unwrap_err();
		assert!(matches!(err, AddrError::InvalidAddressFormat { .. }), "{conv:?}");
	}
}

#[test]
fn short_binary_is_invalid_length() {
	let err = format_address(&[1, 2, 3], AddressFamily::Ipv4).unwrap_err();
	assert_eq!(err, AddrError::InvalidLength { family: AddressFamily::Ipv4, expected: 4, actual: 3 });

	let err = format_address(&[0; 17], AddressFamily::Ipv6).unwrap_err();
	assert!(matches!(err, AddrError::InvalidLength { expected: 16, actual: 17, .. }));
}

#[test]
fn ipv4_round_trip() {
	let samples: [[u8; 4]; 6] = [
		[0, 0, 0, 0],
		[1, 2, 3, 4],
		[10, 0, 0, 255],
		[100, 64, 0, 1],
		[224, 0, 0, 251],
		[255, 255, 255, 255],
	];
	for conv in converters() {
		for bytes in samples {
			let text = conv.format(&bytes, AddressFamily::Ipv4).unwrap();
			assert_eq!(conv.parse(&text, AddressFamily::Ipv4).unwrap().as_bytes(), &bytes, "{text}");
		}
	}
}

#[test]
fn ipv6_round_trip() {
	let samples = [
		"::", "::1", "fe80::1", "2001:db8::ff00:42:8329", "::ffff:10.1.2.3",
		"ff02::1:ff00:1", "1:0:0:1:0:0:0:1", "ffff:ffff:ffff:ffff:ffff:ffff:ffff:ffff",
	];
	for conv in converters() {
		for sample in samples {
			let bytes = sample.parse::<Ipv6Addr>().unwrap().octets();
			let text = conv.format(&bytes, AddressFamily::Ipv6).unwrap();
			assert_eq!(conv.parse(&text, AddressFamily::Ipv6).unwrap().as_bytes(), &bytes, "{text}");
		}
	}
}

#[test]
fn canonical_ipv6_text() {
	let bytes = "2001:0db8:0:0:0:0:2:1".parse::<Ipv6Addr>().unwrap().octets();
	assert_eq!(format_address(&bytes, AddressFamily::Ipv6).unwrap(), "2001:db8::2:1");
}

#[test]
fn integer_families() {
	let packed = inet_pton(libc::AF_INET6, "fe80::abcd").unwrap();
	assert_eq!(inet_ntop(libc::AF_INET6, packed.as_bytes()).unwrap(), "fe80::abcd");

	assert_eq!(inet_pton(-1, "::1"), Err(AddrError::UnsupportedFamily { af: -1 }));
	let err = inet_ntop(libc::AF_UNIX, &[0; 4]).unwrap_err();
	assert_eq!(err.to_string(), format!("unknown address family {}", libc::AF_UNIX));
}

#[test]
fn typed_families() {
	assert_eq!(Ipv4::WIDTH, 4);
	assert_eq!(Ipv6::WIDTH, 16);
	assert_eq!(Ipv4::parse("8.8.4.4"), Ok([8, 8, 4, 4]));
	assert_eq!(Ipv6::format(&Ipv6::parse("2001:DB8::1").unwrap()), "2001:db8::1");
}

#[test]
fn packed_converts_to_std() {
	let packed = parse_address("172.16.0.9", AddressFamily::Ipv4).unwrap();
	assert_eq!(IpAddr::from(packed), "172.16.0.9".parse::<IpAddr>().unwrap());
	assert_eq!(PackedAddr::from(IpAddr::from(packed)), packed);
}

#[test]
fn io_error_conversion() {
	let io: std::io::Error = parse_address("nope", AddressFamily::Ipv6).unwrap_err().into();
	assert_eq!(io.kind(), std::io::ErrorKind::InvalidInput);
	assert!(io.to_string().contains("illegal IPv6 address string"));
}

#[test]
fn converter_is_shareable_across_threads() {
	let conv = Converter::new(ConvertConfig::new().backend(Backend::Portable));
	let handles: Vec<_> = (0..4u8)
		.map(|i| {
			std::thread::spawn(move || {
				let text = format!("10.0.{i}.1");
				conv.parse(&text, AddressFamily::Ipv4).unwrap()
			})
		})
		.collect();
	for (i, handle) in handles.into_iter().enumerate() {
		assert_eq!(handle.join().unwrap(), PackedAddr::V4([10, 0, i as u8, 1]));
	}
}
