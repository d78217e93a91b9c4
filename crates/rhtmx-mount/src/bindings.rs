//! Variable bindings and the caller-over-defaults lookup used while rendering

use std::collections::HashMap;

/// Mapping from variable name to value
pub type Bindings = HashMap<String, String>;

/// Read-only view of caller bindings layered over a mount's defaults
///
/// Caller values win. Neither map is modified; the scope lives for a single
/// render of a single mount.
#[derive(Debug, Clone, Copy)]
pub struct BindingScope<'a> {
    caller: &'a Bindings,
    defaults: &'a Bindings,
}

impl<'a> BindingScope<'a> {
    pub fn new(caller: &'a Bindings, defaults: &'a Bindings) -> Self {
        Self { caller, defaults }
    }

    /// Resolves `name` from the caller first, then the defaults
    pub fn get(&self, name: &str) -> Option<&'a str> {
        self.caller
            .get(name)
            .or_else(|| self.defaults.get(name))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }
}

/// Builds a [`Bindings`] map from `(name, value)` pairs
///
/// ```
/// use rhtmx_mount::bindings_from;
///
/// let bindings = bindings_from([("bar", "sue")]);
/// assert_eq!(bindings.get("bar").map(String::as_str), Some("sue"));
/// ```
pub fn bindings_from<K, V, I>(pairs: I) -> Bindings
where
    I: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    pairs
        .into_iter()
        .map(|(k, v)| (k.into(), v.into()))
        .collect()
}
