//! Path helpers for user-supplied input locations.
//!
//! - `normalize`: unify separators and fold `.`/`..` lexically (no I/O).
//! - `resolve_absolute`: anchor a path at the working directory and require
//!   that it exists.
use crate::error::{Error, Result};
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};
#[cfg(not(any(unix, windows)))]
use std::path::MAIN_SEPARATOR;

/// Rewrite both `/` and `\` to the platform separator, then fold `.` and
/// `..` segments. Does not touch the filesystem and keeps non-UTF-8 names
/// intact.
pub fn normalize(path: impl AsRef<OsStr>) -> PathBuf {
    clean(Path::new(&native_separators(path.as_ref())))
}

#[cfg(unix)]
fn native_separators(path: &OsStr) -> OsString {
    use std::os::unix::ffi::{OsStrExt, OsStringExt};
    let bytes = path
        .as_bytes()
        .iter()
        .map(|&b| if b == b'\\' { b'/' } else { b })
        .collect();
    OsString::from_vec(bytes)
}

#[cfg(windows)]
fn native_separators(path: &OsStr) -> OsString {
    use std::os::windows::ffi::{OsStrExt, OsStringExt};
    let units: Vec<u16> = path
        .encode_wide()
        .map(|u| if u == u16::from(b'/') { u16::from(b'\\') } else { u })
        .collect();
    OsString::from_wide(&units)
}

#[cfg(not(any(unix, windows)))]
fn native_separators(path: &OsStr) -> OsString {
    path.to_string_lossy()
        .chars()
        .map(|c| if c == '/' || c == '\\' { MAIN_SEPARATOR } else { c })
        .collect::<String>()
        .into()
}

/// Lexical cleanup of an already native path.
fn clean(path: &Path) -> PathBuf {
    let mut out: Vec<Component<'_>> = Vec::new();
    for comp in path.components() {
        match comp {
            Component::CurDir => {}
            Component::ParentDir => match out.last() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // `..` at the root stays at the root
                Some(Component::RootDir) | Some(Component::Prefix(_)) => {}
                _ => out.push(comp),
            },
            other => out.push(other),
        }
    }
    if out.is_empty() {
        return PathBuf::from(".");
    }
    out.iter().map(|c| c.as_os_str()).collect()
}

/// Absolute form of `path`, resolved against the current working directory
/// when relative. Fails with [`Error::FileNotFound`] if nothing exists there.
pub fn resolve_absolute(path: &Path) -> Result<PathBuf> {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        let cwd = env::current_dir()
            .map_err(|e| format!("Failed to read current directory: {e}"))?;
        clean(&cwd.join(path))
    };
    if !absolute.exists() {
        return Err(Error::FileNotFound(absolute));
    }
    Ok(absolute)
}
