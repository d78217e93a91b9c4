//! Compiled URL mounts: construction, variable queries, rendering and
//! parent composition

use std::fmt;
use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, trace, warn};

use crate::bindings::{bindings_from, BindingScope, Bindings};
use crate::config::{MountConfig, UnusedDefaults};
use crate::error::{MountError, Result};
use crate::path::{collapse_separators, push_joined, with_trailing_slash, MountChain};
use crate::route::{collect_variables, parse_segments, Segment, VariableSets};

/// A compiled mount pattern with its default bindings
///
/// Immutable once built. The segment tree and the variable sets are computed
/// at construction, so a mount can be rendered from many threads at once.
///
/// # Examples
///
/// ```
/// use rhtmx_mount::{bindings_from, UrlMount};
///
/// let mount = UrlMount::new("/foo/:bar(/:baz)", bindings_from([("bar", "barr")])).unwrap();
///
/// assert_eq!(mount.render(&bindings_from([("baz", "gary")])).unwrap(), "/foo/barr/gary");
/// assert_eq!(mount.render_params(&[("bar", "sue")]).unwrap(), "/foo/sue");
/// ```
#[derive(Debug, Clone)]
pub struct UrlMount {
    raw_path: String,
    defaults: Bindings,
    segments: Vec<Segment>,
    variables: VariableSets,
    parent: Option<Arc<UrlMount>>,
    trailing_slash: bool,
}

/// Required and optional variable names of a mount
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Variables<'a> {
    pub required: &'a [String],
    pub optional: &'a [String],
}

impl UrlMount {
    /// Compiles a pattern with no defaults
    pub fn parse(raw_path: impl Into<String>) -> Result<Self> {
        Self::new(raw_path, Bindings::new())
    }

    /// Compiles a pattern with default bindings
    ///
    /// Defaults naming variables the pattern never declares are ignored.
    pub fn new(raw_path: impl Into<String>, defaults: Bindings) -> Result<Self> {
        Self::with_config(raw_path, defaults, &MountConfig::default())
    }

    /// Compiles a pattern with default bindings under explicit options
    ///
    /// ```
    /// use rhtmx_mount::{bindings_from, MountConfig, MountError, UnusedDefaults, UrlMount};
    ///
    /// let config = MountConfig {
    ///     unused_defaults: UnusedDefaults::Reject,
    ///     ..MountConfig::default()
    /// };
    ///
    /// let err = UrlMount::with_config("/foo", bindings_from([("bar", "x")]), &config).unwrap_err();
    /// assert_eq!(err, MountError::UnusedDefaults(vec!["bar".to_string()]));
    /// ```
    pub fn with_config(
        raw_path: impl Into<String>,
        defaults: Bindings,
        config: &MountConfig,
    ) -> Result<Self> {
        let raw_path = raw_path.into();
        let segments = parse_segments(&raw_path)?;
        let variables = collect_variables(&segments);

        let mut unused: Vec<String> = defaults
            .keys()
            .filter(|name| !variables.required.contains(*name) && !variables.optional.contains(*name))
            .cloned()
            .collect();
        unused.sort();

        if !unused.is_empty() {
            match config.unused_defaults {
                UnusedDefaults::Reject => return Err(MountError::UnusedDefaults(unused)),
                UnusedDefaults::Ignore => {
                    warn!(raw_path = %raw_path, unused = ?unused, "ignoring defaults for undeclared variables");
                }
            }
        }

        debug!(
            raw_path = %raw_path,
            segments = segments.len(),
            required = variables.required.len(),
            optional = variables.optional.len(),
            "compiled url mount"
        );

        Ok(Self {
            raw_path,
            defaults,
            segments,
            variables,
            parent: None,
            trailing_slash: config.trailing_slash,
        })
    }

    // ========================================================================
    // Accessors
    // ========================================================================

    pub fn raw_path(&self) -> &str {
        &self.raw_path
    }

    pub fn defaults(&self) -> &Bindings {
        &self.defaults
    }

    /// Top-level segments of this mount (parents not included)
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Variables declared outside every conditional group, in order of appearance
    pub fn required_variables(&self) -> &[String] {
        &self.variables.required
    }

    /// Variables declared inside at least one conditional group
    pub fn optional_variables(&self) -> &[String] {
        &self.variables.optional
    }

    pub fn variables(&self) -> Variables<'_> {
        Variables {
            required: &self.variables.required,
            optional: &self.variables.optional,
        }
    }

    // ========================================================================
    // Composition
    // ========================================================================

    /// Prefixes this mount's output with `parent`'s rendered output
    ///
    /// The parent is shared, not consumed: keep a clone of the `Arc` to go on
    /// rendering it on its own.
    pub fn attach_parent(&mut self, parent: impl Into<Arc<UrlMount>>) {
        self.parent = Some(parent.into());
    }

    /// Builder form of [`attach_parent`](Self::attach_parent)
    pub fn with_parent(mut self, parent: impl Into<Arc<UrlMount>>) -> Self {
        self.attach_parent(parent);
        self
    }

    pub fn parent(&self) -> Option<&UrlMount> {
        self.parent.as_deref()
    }

    /// This mount followed by each mount it is attached under
    pub fn ancestors(&self) -> MountChain<'_> {
        MountChain::new(self)
    }

    // ========================================================================
    // Rendering
    // ========================================================================

    /// Renders the full path, parents first
    ///
    /// Every mount in the chain reads the same caller bindings layered over
    /// its own defaults. `bindings` is only borrowed, never modified.
    ///
    /// # Errors
    ///
    /// `MountError::MissingRequiredVariables` listing every required variable
    /// in the chain left without a binding or default.
    pub fn render(&self, bindings: &Bindings) -> Result<String> {
        let mut chain: Vec<&UrlMount> = self.ancestors().collect();
        chain.reverse();

        let mut joined = String::new();
        let mut missing: Vec<String> = Vec::new();

        for mount in chain {
            match mount.render_fragment(bindings) {
                Ok(fragment) => push_joined(&mut joined, &fragment),
                Err(names) => {
                    for name in names {
                        if !missing.contains(&name) {
                            missing.push(name);
                        }
                    }
                }
            }
        }

        if !missing.is_empty() {
            debug!(raw_path = %self.raw_path, missing = ?missing, "url mount missing required variables");
            return Err(MountError::MissingRequiredVariables(missing));
        }

        let path = self.finish_path(&joined);
        trace!(raw_path = %self.raw_path, path = %path, "rendered url mount");
        Ok(path)
    }

    /// Renders from `(name, value)` pairs
    pub fn render_params(&self, params: &[(&str, &str)]) -> Result<String> {
        self.render(&bindings_from(params.iter().copied()))
    }

    /// Renders this mount alone, ignoring any parent
    pub fn render_own(&self, bindings: &Bindings) -> Result<String> {
        self.render_fragment(bindings)
            .map(|fragment| self.finish_path(&fragment))
            .map_err(MountError::MissingRequiredVariables)
    }

    /// Raw concatenated segment output, or the missing required names
    fn render_fragment(&self, bindings: &Bindings) -> std::result::Result<String, Vec<String>> {
        let scope = BindingScope::new(bindings, &self.defaults);

        let missing: Vec<String> = self
            .variables
            .required
            .iter()
            .filter(|name| !scope.contains(name))
            .cloned()
            .collect();

        if !missing.is_empty() {
            return Err(missing);
        }

        Ok(self
            .segments
            .iter()
            .filter_map(|segment| segment.render(&scope))
            .collect())
    }

    fn finish_path(&self, joined: &str) -> String {
        let collapsed = collapse_separators(joined);
        if self.trailing_slash {
            with_trailing_slash(&collapsed).into_owned()
        } else {
            collapsed.into_owned()
        }
    }
}

impl fmt::Display for UrlMount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw_path)
    }
}
