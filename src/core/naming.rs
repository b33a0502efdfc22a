use std::ffi::{OsStr, OsString};

pub const VECTOR_SUFFIX: &str = ".svg";
pub const RASTER_SUFFIX: &str = ".png";

/// Case-sensitive suffix match: `logo.svg` yes, `logo.SVG` no.
///
/// Names need not be valid UTF-8; on unix the match runs on raw bytes.
pub fn is_candidate(file_name: &OsStr) -> bool {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::OsStrExt;
        file_name.as_bytes().ends_with(VECTOR_SUFFIX.as_bytes())
    }
    #[cfg(not(unix))]
    {
        file_name
            .to_str()
            .map_or(false, |name| name.ends_with(VECTOR_SUFFIX))
    }
}

/// Replace the first `.svg` in the name with `.png`.
///
/// Only the first occurrence is rewritten, so `chart.svg.svg` becomes
/// `chart.png.svg` and `a.svg.bak.svg` becomes `a.png.bak.svg`.
pub fn output_name(file_name: &OsStr) -> OsString {
    #[cfg(unix)]
    {
        use std::os::unix::ffi::{OsStrExt, OsStringExt};

        let bytes = file_name.as_bytes();
        let needle = VECTOR_SUFFIX.as_bytes();
        match bytes.windows(needle.len()).position(|w| w == needle) {
            Some(at) => {
                let mut out = Vec::with_capacity(bytes.len());
                out.extend_from_slice(&bytes[..at]);
                out.extend_from_slice(RASTER_SUFFIX.as_bytes());
                out.extend_from_slice(&bytes[at + needle.len()..]);
                OsString::from_vec(out)
            }
            None => file_name.to_os_string(),
        }
    }
    #[cfg(not(unix))]
    {
        match file_name.to_str() {
            Some(name) => OsString::from(name.replacen(VECTOR_SUFFIX, RASTER_SUFFIX, 1)),
            None => file_name.to_os_string(),
        }
    }
}
