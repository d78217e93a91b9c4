/// Path utilities for assembling rendered mounts
///
/// All functions are **pure**: given same input, always produce same output with no side effects.

use std::borrow::Cow;

pub mod chain;
pub use chain::MountChain;

/// Checks whether a rendered path is already in canonical form
///
/// # Rules
///
/// - Must not contain `//`
/// - Must not end with `/` (except root `/`)
///
/// A leading `/` is not required: mounts without one render relative paths.
///
/// # Examples
///
/// ```
/// use rhtmx_mount::path::is_canonical;
///
/// assert!(is_canonical("/"));
/// assert!(is_canonical("/foo/bar"));
/// assert!(is_canonical("foo/bar"));
/// assert!(is_canonical(""));
///
/// assert!(!is_canonical("/foo/"));
/// assert!(!is_canonical("/foo//bar"));
/// ```
pub fn is_canonical(path: &str) -> bool {
    if path.contains("//") {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Collapses separator runs and strips a single trailing separator
///
/// Returns `Cow::Borrowed` when the input is already canonical.
///
/// A lone `/` is kept as the root path rather than stripped to an empty
/// string.
///
/// # Examples
///
/// ```
/// use rhtmx_mount::path::collapse_separators;
/// use std::borrow::Cow;
///
/// assert!(matches!(collapse_separators("/foo/bar"), Cow::Borrowed("/foo/bar")));
///
/// assert_eq!(collapse_separators("/foo//bar/"), "/foo/bar");
/// assert_eq!(collapse_separators("//"), "/");
/// assert_eq!(collapse_separators("foo///bar"), "foo/bar");
/// ```
pub fn collapse_separators(path: &str) -> Cow<'_, str> {
    if is_canonical(path) {
        return Cow::Borrowed(path);
    }

    let mut collapsed = String::with_capacity(path.len());
    for ch in path.chars() {
        if ch == '/' && collapsed.ends_with('/') {
            continue;
        }
        collapsed.push(ch);
    }

    if collapsed.len() > 1 && collapsed.ends_with('/') {
        collapsed.pop();
    }

    Cow::Owned(collapsed)
}

/// Appends `fragment` to `base` as a path join
///
/// A `/` is inserted at the boundary when both sides are non-empty and
/// neither supplies one. Used between mounts of a chain; fragments within a
/// single mount are concatenated as-is.
///
/// ```
/// use rhtmx_mount::path::push_joined;
///
/// let mut path = String::from("/root");
/// push_joined(&mut path, "baz/7");
/// assert_eq!(path, "/root/baz/7");
///
/// let mut path = String::from("/root/");
/// push_joined(&mut path, "/baz");
/// assert_eq!(path, "/root//baz");
/// ```
pub fn push_joined(base: &mut String, fragment: &str) {
    if !base.is_empty()
        && !fragment.is_empty()
        && !base.ends_with('/')
        && !fragment.starts_with('/')
    {
        base.push('/');
    }
    base.push_str(fragment);
}

/// Ensures the path ends with exactly one `/`
///
/// ```
/// use rhtmx_mount::path::with_trailing_slash;
///
/// assert_eq!(with_trailing_slash("/foo"), "/foo/");
/// assert_eq!(with_trailing_slash("/"), "/");
/// ```
pub fn with_trailing_slash(path: &str) -> Cow<'_, str> {
    if path.ends_with('/') {
        Cow::Borrowed(path)
    } else {
        Cow::Owned(format!("{}/", path))
    }
}
