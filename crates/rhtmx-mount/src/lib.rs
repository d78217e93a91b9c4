//! # RHTMX Mount
//!
//! URL generation from mount templates:
//! - Static segments (`/about`)
//! - Variables (`/users/:id`)
//! - Optional groups, nestable (`/posts(/:year(/:month))`)
//! - Per-mount default bindings
//! - Mounts attached under other mounts (`/admin` + `/users/:id`)
//!
//! ## Rendering Rules
//!
//! - Variables outside every `( ... )` group are **required**; rendering
//!   fails with [`MountError::MissingRequiredVariables`] when one has no
//!   binding and no default.
//! - Variables inside a group are **optional**. A group renders only when
//!   all of its own variables resolve; otherwise it and everything nested in
//!   it are left out.
//! - Caller bindings override defaults. The caller's map is never modified.
//! - Separator runs collapse to one `/` and a trailing `/` is dropped.
//!
//! ## Example
//!
//! ```
//! use rhtmx_mount::{bindings_from, UrlMount};
//!
//! let mount = UrlMount::parse("/foo(/:bar(/:baz))").unwrap();
//!
//! assert_eq!(mount.render_params(&[]).unwrap(), "/foo");
//! assert_eq!(mount.render_params(&[("baz", "sue")]).unwrap(), "/foo");
//! assert_eq!(mount.render_params(&[("bar", "gary")]).unwrap(), "/foo/gary");
//!
//! let root = UrlMount::new("/root/:bar", bindings_from([("bar", "bar")])).unwrap();
//! let child = UrlMount::parse("/baz/barry").unwrap().with_parent(root);
//! assert_eq!(child.render_params(&[("bar", "different")]).unwrap(), "/root/different/baz/barry");
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

mod bindings;
mod config;
mod error;
mod mount;
pub mod path;
pub mod route;

pub use bindings::{bindings_from, BindingScope, Bindings};
pub use config::{MountConfig, UnusedDefaults};
pub use error::{MountError, ParseError, Result};
pub use mount::{UrlMount, Variables};
pub use path::{collapse_separators, MountChain};
pub use route::{Segment, VariableSets};
