use crate::addr::AddressFamily;

/// Address conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AddrError {
    #[error("illegal {family} address string: {input:?}")]
    InvalidAddressFormat { family: AddressFamily, input: String },

    #[error("invalid length of packed {family} address: expected {expected} bytes, got {actual}")]
    InvalidLength { family: AddressFamily, expected: usize, actual: usize },

    #[error("unknown address family {af}")]
    UnsupportedFamily { af: libc::c_int },

    #[error("{call}() failed: {}", errno_to_str(*.errno))]
    Os { call: &'static str, errno: i32 },
}

impl AddrError {
    pub(crate) fn invalid_format(family: AddressFamily, input: &str) -> Self {
        tracing::debug!(%family, input, "rejected address text");
        AddrError::InvalidAddressFormat { family, input: input.to_owned() }
    }

    pub(crate) fn invalid_length(family: AddressFamily, actual: usize) -> Self {
        let expected = family.width();
        tracing::debug!(%family, expected, actual, "rejected packed address");
        AddrError::InvalidLength { family, expected, actual }
    }

    /// Returns the errno closest to this error.
    pub fn errno(&self) -> i32 {
        match self {
            AddrError::InvalidAddressFormat { .. } => libc::EINVAL,
            AddrError::InvalidLength { .. } => libc::EINVAL,
            AddrError::UnsupportedFamily { .. } => libc::EAFNOSUPPORT,
            AddrError::Os { errno, .. } => *errno,
        }
    }
}

/// Returns current errno value.
#[cfg(unix)]
#[inline]
pub(crate) fn errno() -> i32 {
    std::io::Error::last_os_error().raw_os_error().unwrap_or(0)
}

/// Converts errno to human-readable string.
fn errno_to_str(errno: i32) -> String {
    match errno {
        libc::EAFNOSUPPORT => "address family not supported".into(),
        libc::EINVAL => "invalid argument".into(),
        libc::ENOMEM => "out of memory".into(),
        libc::ENOSPC => "no space left".into(),
        _ => format!("errno {}", errno),
    }
}

/// Maps errno to std::io::ErrorKind.
fn errno_to_kind(errno: i32) -> std::io::ErrorKind {
    match errno {
        libc::EAFNOSUPPORT => std::io::ErrorKind::Unsupported,
        libc::EINVAL => std::io::ErrorKind::InvalidInput,
        libc::ENOMEM => std::io::ErrorKind::OutOfMemory,
        libc::ENOSPC => std::io::ErrorKind::StorageFull,
        _ => std::io::ErrorKind::Other,
    }
}

impl From<AddrError> for std::io::Error {
    fn from(err: AddrError) -> Self {
        std::io::Error::new(errno_to_kind(err.errno()), err)
    }
}
