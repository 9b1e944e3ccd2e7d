use std::ffi::{CStr, CString};
use crate::addr::{AddressFamily, PackedAddr};
use crate::error::{AddrError, errno};

/// Longest presentation form the platform writes, including the NUL.
/// Same as `INET6_ADDRSTRLEN`.
const ADDRSTRLEN: usize = 46;

// Not bound by the libc crate.
unsafe extern "C" {
	fn inet_pton(af: libc::c_int, src: *const libc::c_char, dst: *mut libc::c_void) -> libc::c_int;
	fn inet_ntop(
		af: libc::c_int,
		src: *const libc::c_void,
		dst: *mut libc::c_char,
		size: libc::socklen_t,
	) -> *const libc::c_char;
}

/// Parses `text` with the platform `inet_pton`.
pub(crate) fn pton(family: AddressFamily, text: &str) -> Result<PackedAddr, AddrError> {
	// An interior NUL would silently truncate the C string.
	let c_text = CString::new(text).map_err(|_| AddrError::invalid_format(family, text))?;
	let mut buf = [0u8; 16];

	let rc = unsafe {
		inet_pton(family.raw(), c_text.as_ptr(), buf.as_mut_ptr().cast::<libc::c_void>())
	};

	match rc {
		1 => PackedAddr::from_slice(&buf[..family.width()], family),
		0 => Err(AddrError::invalid_format(family, text)),
		_ => Err(os_error("inet_pton", family, errno())),
	}
}

/// Formats `addr` with the platform `inet_ntop`.
pub(crate) fn ntop(addr: &PackedAddr) -> Result<String, AddrError> {
	let family = addr.family();
	let mut buf = [0 as libc::c_char; ADDRSTRLEN];

	let ptr = unsafe {
		inet_ntop(
			family.raw(),
			addr.as_bytes().as_ptr().cast::<libc::c_void>(),
			buf.as_mut_ptr(),
			ADDRSTRLEN as libc::socklen_t,
		)
	};
	if ptr.is_null() {
		return Err(os_error("inet_ntop", family, errno()));
	}

	// inet_ntop NUL-terminates on success
	let text = unsafe { CStr::from_ptr(buf.as_ptr()) };
	Ok(text.to_string_lossy().into_owned())
}

fn os_error(call: &'static str, family: AddressFamily, errno: i32) -> AddrError {
	if errno == libc::EAFNOSUPPORT {
		AddrError::UnsupportedFamily { af: family.raw() }
	} else {
		tracing::debug!(call, errno, "platform conversion failed");
		AddrError::Os { call, errno }
	}
}
