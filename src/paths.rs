//! Path and URI canonicalization for path-like CLI arguments.
//!
//! Remote URIs (`<scheme>://...`) pass through untouched. Everything else is
//! treated as a local path: `~` is expanded, the path is made absolute and
//! `.`/`..` segments are folded lexically, so the path does not have to exist.

use std::borrow::Cow;
use std::ffi::{OsStr, OsString};
use std::path::{Component, Path, PathBuf};
use std::sync::LazyLock;

#[cfg(not(windows))]
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use regex::Regex;
use tracing::debug;
use url::Url;

use crate::error::{Result, ToolsError};

/// Longest URL accepted by [`is_http_like`].
pub const MAX_URL_LENGTH: usize = 2083;

/// Bytes left as-is in a `file://` path: alphanumerics and `/-._~`.
#[cfg(not(windows))]
const FILE_URI_PATH: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

static URI_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\w+://").expect("URI pattern is valid"));

/// A value that can be viewed as a path string.
///
/// Implemented for the string and path types of the standard library. Values
/// that are not valid UTF-8 return `None` and are rejected by the resolvers.
pub trait PathLike {
    fn as_path_str(&self) -> Option<Cow<'_, str>>;
}

impl PathLike for str {
    fn as_path_str(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }
}

impl PathLike for String {
    fn as_path_str(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }
}

impl PathLike for Path {
    fn as_path_str(&self) -> Option<Cow<'_, str>> {
        self.to_str().map(Cow::Borrowed)
    }
}

impl PathLike for PathBuf {
    fn as_path_str(&self) -> Option<Cow<'_, str>> {
        self.as_path().as_path_str()
    }
}

impl PathLike for OsStr {
    fn as_path_str(&self) -> Option<Cow<'_, str>> {
        self.to_str().map(Cow::Borrowed)
    }
}

impl PathLike for OsString {
    fn as_path_str(&self) -> Option<Cow<'_, str>> {
        self.as_os_str().as_path_str()
    }
}

impl<T: PathLike + ?Sized> PathLike for &T {
    fn as_path_str(&self) -> Option<Cow<'_, str>> {
        (**self).as_path_str()
    }
}

fn path_str<P: PathLike + ?Sized>(input: &P) -> Result<Cow<'_, str>> {
    input
        .as_path_str()
        .ok_or_else(|| ToolsError::InvalidPath("path is not valid UTF-8".to_string()))
}

/// Expand a leading `~` to the home directory. `~user` forms are left alone.
fn expand_user(raw: &str) -> Cow<'_, str> {
    let rest = match raw.strip_prefix('~') {
        Some(rest) if rest.is_empty() || rest.starts_with(std::path::is_separator) => rest,
        _ => return Cow::Borrowed(raw),
    };

    match dirs::home_dir() {
        Some(home) => Cow::Owned(format!("{}{}", home.display(), rest)),
        None => Cow::Borrowed(raw),
    }
}

/// Fold `.` and `..` without consulting the filesystem.
fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => normalized.push(prefix.as_os_str()),
            Component::RootDir => normalized.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(segment) => normalized.push(segment),
        }
    }
    normalized
}

/// Resolve a path-like value to an absolute, user-expanded path string.
pub fn stringify_path<P: PathLike + ?Sized>(input: &P) -> Result<String> {
    let raw = path_str(input)?;
    let expanded = expand_user(&raw);

    let candidate = Path::new(expanded.as_ref());
    let absolute = if candidate.is_absolute() {
        candidate.to_path_buf()
    } else {
        std::env::current_dir()
            .map_err(|e| ToolsError::io(".", e))?
            .join(candidate)
    };

    let resolved = normalize_lexically(&absolute);
    let resolved = resolved
        .to_str()
        .map(str::to_string)
        .ok_or_else(|| ToolsError::InvalidPath(resolved.display().to_string()))?;

    debug!("Resolved path {:?} to {}", raw, resolved);
    Ok(resolved)
}

/// Whether `value` is a well-formed http(s) URL with a host. Never fails.
pub fn is_http_like(value: &str) -> bool {
    if value.len() > MAX_URL_LENGTH {
        return false;
    }
    match Url::parse(value) {
        Ok(url) => {
            matches!(url.scheme(), "http" | "https")
                && url.host_str().is_some_and(|host| !host.is_empty())
        }
        Err(_) => false,
    }
}

/// Whether `value` starts with a `<scheme>://` prefix.
pub fn has_uri_scheme(value: &str) -> bool {
    URI_PATTERN.is_match(value)
}

/// Return `input` as a URI.
///
/// Values that already carry a scheme are returned unchanged. Local paths go
/// through [`stringify_path`] and become percent-encoded `file://` URIs.
pub fn to_uri<P: PathLike + ?Sized>(input: &P) -> Result<String> {
    let raw = path_str(input)?;
    if has_uri_scheme(&raw) {
        return Ok(raw.into_owned());
    }

    let local_path = stringify_path(&*raw)?;
    file_uri(&local_path)
}

#[cfg(not(windows))]
fn file_uri(local_path: &str) -> Result<String> {
    Ok(format!(
        "file://{}",
        utf8_percent_encode(local_path, FILE_URI_PATH)
    ))
}

#[cfg(windows)]
fn file_uri(local_path: &str) -> Result<String> {
    let uri = Url::from_file_path(local_path)
        .map_err(|_| ToolsError::InvalidPath(local_path.to_string()))?;
    Ok(uri.to_string())
}
