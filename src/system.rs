//! System-dependent functions, or anything that this library is unable to
//! do without help from the OS.

use std::ffi::CStr;
use std::path::Path;


/// Returns the system’s current time, as a tuple of seconds elapsed since
/// the Unix epoch, and the millisecond of the second.
pub(crate) fn sys_time() -> (i64, i16) {
    let mut tv = libc::timespec { tv_sec: 0, tv_nsec: 0 };
    let _ = unsafe { libc::clock_gettime(libc::CLOCK_REALTIME, &mut tv) };
    (tv.tv_sec as i64, (tv.tv_nsec / 1_000_000) as i16)
}

/// Asks the C library which offset from UTC, in seconds, the system’s
/// current zone database applies at the given Unix timestamp, along with
/// the abbreviation in effect at that point (“GMT”, “PDT”, …).
pub(crate) fn local_offset_at(timestamp: i64) -> (i32, String) {
    let t = timestamp as libc::time_t;
    let mut tm: libc::tm = unsafe { std::mem::zeroed() };

    let result = unsafe { libc::localtime_r(&t, &mut tm) };
    if result.is_null() {
        return (0, String::from("UTC"));
    }

    let abbreviation = if tm.tm_zone.is_null() {
        String::new()
    }
    else {
        unsafe { CStr::from_ptr(tm.tm_zone) }.to_string_lossy().into_owned()
    };

    (tm.tm_gmtoff as i32, abbreviation)
}

/// Attempts to determine the system’s current time zone name. There’s no
/// guaranteed way to do this, so this function returns `None` if no
/// zone name could be found.
pub(crate) fn sys_timezone() -> Option<String> {
    let link = std::fs::read_link("/etc/localtime").ok()?;
    zone_name_from(&link).filter(|name| !name.is_empty())
}

/// Given a path, returns the zoneinfo time zone name at the end of that
/// path, if one can be detected. Name components are the trailing path
/// components that begin with a capital letter, so a link target of
/// `/usr/share/zoneinfo/Europe/London` yields `Europe/London`.
fn zone_name_from(path: &Path) -> Option<String> {
    let mut components = Vec::new();

    for component in path.iter().rev() {
        let text = component.to_str()?;
        if !text.chars().next().map_or(false, char::is_uppercase) {
            break;
        }
        components.push(text);
    }

    if components.is_empty() {
        return None;
    }

    components.reverse();
    Some(components.join("/"))
}
