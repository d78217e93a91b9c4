use crate::mount::UrlMount;

/// Lazy iterator over a mount and the mounts it is attached to
///
/// For a mount `c` attached to `b` attached to `a`, yields: `c` → `b` → `a`
///
/// Borrows only; no allocation. Terminates because parents are shared
/// immutably and cannot be re-attached into a cycle.
///
/// # Examples
///
/// ```
/// use rhtmx_mount::UrlMount;
///
/// let root = UrlMount::parse("/root").unwrap();
/// let child = UrlMount::parse("/child").unwrap().with_parent(root);
///
/// let raws: Vec<&str> = child.ancestors().map(|m| m.raw_path()).collect();
/// assert_eq!(raws, vec!["/child", "/root"]);
/// ```
#[derive(Debug, Clone)]
pub struct MountChain<'a> {
    current: Option<&'a UrlMount>,
}

impl<'a> MountChain<'a> {
    pub fn new(mount: &'a UrlMount) -> Self {
        Self {
            current: Some(mount),
        }
    }
}

impl<'a> Iterator for MountChain<'a> {
    type Item = &'a UrlMount;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;
        self.current = current.parent();
        Some(current)
    }
}
