/// Segment tree for compiled mount patterns
///
/// A pattern compiles to an ordered list of [`Segment`]s. Rendering and
/// variable collection are **pure** walks over the tree: same input → same
/// output, the tree is never modified.

use std::fmt;

use crate::bindings::BindingScope;

/// One syntactic unit of a mount pattern
///
/// # Examples
///
/// ```
/// use rhtmx_mount::route::segment::Segment;
///
/// let group = Segment::Conditional(vec![
///     Segment::Delimiter,
///     Segment::Variable("bar".to_string()),
/// ]);
/// assert_eq!(group.to_string(), "(/:bar)");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Path separator `/`
    Delimiter,
    /// Literal text
    Static(String),
    /// Named placeholder `:name`
    Variable(String),
    /// Optional group `( ... )`, rendered only when all of its immediate
    /// variables resolve
    Conditional(Vec<Segment>),
}

impl Segment {
    /// Renders this segment against a binding scope
    ///
    /// Returns `None` for an unresolved variable or a conditional group that
    /// cannot render. Absence is never an error at this level.
    ///
    /// Nested groups are evaluated independently: an absent inner group
    /// contributes nothing but does not make its parent absent. An absent
    /// group suppresses everything below it.
    pub fn render(&self, scope: &BindingScope<'_>) -> Option<String> {
        match self {
            Segment::Delimiter => Some("/".to_string()),
            Segment::Static(text) => Some(text.clone()),
            Segment::Variable(name) => scope.get(name).map(str::to_string),
            Segment::Conditional(children) => {
                if !immediate_variables(children).all(|name| scope.contains(name)) {
                    return None;
                }

                Some(
                    children
                        .iter()
                        .filter_map(|child| child.render(scope))
                        .collect(),
                )
            }
        }
    }
}

/// Variable names declared directly in `segments`, not inside nested groups
fn immediate_variables(segments: &[Segment]) -> impl Iterator<Item = &str> {
    segments.iter().filter_map(|segment| match segment {
        Segment::Variable(name) => Some(name.as_str()),
        _ => None,
    })
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Delimiter => f.write_str("/"),
            Segment::Static(text) => f.write_str(text),
            Segment::Variable(name) => write!(f, ":{}", name),
            Segment::Conditional(children) => {
                f.write_str("(")?;
                for child in children {
                    write!(f, "{}", child)?;
                }
                f.write_str(")")
            }
        }
    }
}

/// Required and optional variable names of a segment tree
///
/// Both lists keep first-discovery order and are disjoint: a name that is
/// required anywhere is never listed as optional.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VariableSets {
    pub required: Vec<String>,
    pub optional: Vec<String>,
}

/// Classifies every variable in the tree (pure function)
///
/// A variable reached without entering any conditional group is required;
/// one reached inside at least one group is optional, whatever the depth.
///
/// # Examples
///
/// ```
/// use rhtmx_mount::route::parser::parse_segments;
/// use rhtmx_mount::route::segment::collect_variables;
///
/// let segments = parse_segments("/foo/:bar(/:baz(/:barry))").unwrap();
/// let sets = collect_variables(&segments);
/// assert_eq!(sets.required, vec!["bar"]);
/// assert_eq!(sets.optional, vec!["baz", "barry"]);
/// ```
pub fn collect_variables(segments: &[Segment]) -> VariableSets {
    let mut required = Vec::new();
    let mut optional = Vec::new();
    walk(segments, false, &mut required, &mut optional);

    optional.retain(|name| !required.contains(name));

    VariableSets { required, optional }
}

fn walk(
    segments: &[Segment],
    nested: bool,
    required: &mut Vec<String>,
    optional: &mut Vec<String>,
) {
    for segment in segments {
        match segment {
            Segment::Variable(name) => {
                let target = if nested { &mut *optional } else { &mut *required };
                if !target.contains(name) {
                    target.push(name.clone());
                }
            }
            Segment::Conditional(children) => walk(children, true, required, optional),
            Segment::Delimiter | Segment::Static(_) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bindings::{bindings_from, Bindings};

    fn var(name: &str) -> Segment {
        Segment::Variable(name.to_string())
    }

    fn render(segment: &Segment, caller: &Bindings) -> Option<String> {
        let defaults = Bindings::new();
        segment.render(&BindingScope::new(caller, &defaults))
    }

    #[test]
    fn test_render_plain_segments() {
        let empty = Bindings::new();
        assert_eq!(render(&Segment::Delimiter, &empty), Some("/".to_string()));
        assert_eq!(
            render(&Segment::Static("foo".to_string()), &empty),
            Some("foo".to_string())
        );
        assert_eq!(render(&var("bar"), &empty), None);
        assert_eq!(
            render(&var("bar"), &bindings_from([("bar", "x")])),
            Some("x".to_string())
        );
    }

    #[test]
    fn test_empty_conditional_renders_empty() {
        let group = Segment::Conditional(vec![]);
        assert_eq!(render(&group, &Bindings::new()), Some(String::new()));
    }

    #[test]
    fn test_conditional_absent_when_immediate_variable_missing() {
        let group = Segment::Conditional(vec![Segment::Delimiter, var("bar")]);
        assert_eq!(render(&group, &Bindings::new()), None);
    }

    #[test]
    fn test_nested_absent_group_does_not_hide_parent() {
        let group = Segment::Conditional(vec![
            Segment::Delimiter,
            var("bar"),
            Segment::Conditional(vec![Segment::Delimiter, var("baz")]),
        ]);
        assert_eq!(
            render(&group, &bindings_from([("bar", "gary")])),
            Some("/gary".to_string())
        );
        assert_eq!(render(&group, &bindings_from([("baz", "sue")])), None);
    }

    #[test]
    fn test_display_round_trip() {
        let segments = vec![
            Segment::Delimiter,
            Segment::Static("foo".to_string()),
            Segment::Conditional(vec![
                Segment::Delimiter,
                var("bar"),
                Segment::Conditional(vec![Segment::Delimiter, var("baz")]),
            ]),
        ];
        let text: String = segments.iter().map(ToString::to_string).collect();
        assert_eq!(text, "/foo(/:bar(/:baz))");
    }

    #[test]
    fn test_collect_variables_disjoint() {
        let segments = vec![
            Segment::Delimiter,
            var("a"),
            Segment::Conditional(vec![Segment::Delimiter, var("a"), var("b"), var("b")]),
        ];
        let sets = collect_variables(&segments);
        assert_eq!(sets.required, vec!["a"]);
        assert_eq!(sets.optional, vec!["b"]);
    }
}
