/// Stack-based parser for mount patterns
///
/// Single left-to-right pass over the token stream. Open groups live on an
/// explicit stack; closing a group appends it, fully built, to whatever
/// context is now on top (or to the root).

use super::segment::Segment;
use super::token::{tokenize, TokenKind};
use crate::error::ParseError;

/// An open conditional group being filled
struct OpenGroup {
    position: usize,
    children: Vec<Segment>,
}

/// Parse accumulator: the root sequence plus the stack of open groups
#[derive(Default)]
struct ParseState {
    root: Vec<Segment>,
    stack: Vec<OpenGroup>,
}

impl ParseState {
    /// The sequence new segments are appended to
    fn current(&mut self) -> &mut Vec<Segment> {
        match self.stack.last_mut() {
            Some(group) => &mut group.children,
            None => &mut self.root,
        }
    }

    fn push(&mut self, segment: Segment) {
        self.current().push(segment);
    }

    fn open(&mut self, position: usize) {
        self.stack.push(OpenGroup {
            position,
            children: Vec::new(),
        });
    }

    fn close(&mut self, position: usize) -> Result<(), ParseError> {
        let group = self
            .stack
            .pop()
            .ok_or(ParseError::UnbalancedClose { position })?;
        self.push(Segment::Conditional(group.children));
        Ok(())
    }

    /// Fails if any group is still open, reporting the innermost one
    fn finish(self) -> Result<Vec<Segment>, ParseError> {
        match self.stack.last() {
            Some(group) => Err(ParseError::UnclosedGroup {
                position: group.position,
            }),
            None => Ok(self.root),
        }
    }
}

/// Parses a raw pattern into its segment tree
///
/// Adjacent delimiters are kept as adjacent [`Segment::Delimiter`]s; they
/// are collapsed when the rendered path is assembled.
///
/// # Examples
///
/// ```
/// use rhtmx_mount::route::parser::parse_segments;
/// use rhtmx_mount::route::segment::Segment;
///
/// let segments = parse_segments("/foo(/:bar)").unwrap();
/// assert_eq!(
///     segments,
///     vec![
///         Segment::Delimiter,
///         Segment::Static("foo".to_string()),
///         Segment::Conditional(vec![
///             Segment::Delimiter,
///             Segment::Variable("bar".to_string()),
///         ]),
///     ]
/// );
///
/// assert!(parse_segments("/foo(/:bar").is_err());
/// assert!(parse_segments("/foo)").is_err());
/// ```
pub fn parse_segments(raw: &str) -> Result<Vec<Segment>, ParseError> {
    let mut state = ParseState::default();

    for token in tokenize(raw)? {
        match token.kind {
            TokenKind::Slash => state.push(Segment::Delimiter),
            TokenKind::Open => state.open(token.position),
            TokenKind::Close => state.close(token.position)?,
            TokenKind::Variable(name) => state.push(Segment::Variable(name.to_string())),
            TokenKind::Static(text) => state.push(Segment::Static(text.to_string())),
        }
    }

    state.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn var(name: &str) -> Segment {
        Segment::Variable(name.to_string())
    }

    fn text(value: &str) -> Segment {
        Segment::Static(value.to_string())
    }

    #[test]
    fn test_parse_static() {
        assert_eq!(
            parse_segments("/foo/bar").unwrap(),
            vec![Segment::Delimiter, text("foo"), Segment::Delimiter, text("bar")]
        );
    }

    #[test]
    fn test_parse_variables() {
        assert_eq!(
            parse_segments("/foo/:bar").unwrap(),
            vec![Segment::Delimiter, text("foo"), Segment::Delimiter, var("bar")]
        );
    }

    #[test]
    fn test_parse_nested_groups() {
        assert_eq!(
            parse_segments("/foo(/:bar(/:baz))").unwrap(),
            vec![
                Segment::Delimiter,
                text("foo"),
                Segment::Conditional(vec![
                    Segment::Delimiter,
                    var("bar"),
                    Segment::Conditional(vec![Segment::Delimiter, var("baz")]),
                ]),
            ]
        );
    }

    #[test]
    fn test_parse_sibling_groups() {
        let segments = parse_segments("/a(/:b)(/:c)").unwrap();
        assert_eq!(segments.len(), 4);
        assert_eq!(segments[2], Segment::Conditional(vec![Segment::Delimiter, var("b")]));
        assert_eq!(segments[3], Segment::Conditional(vec![Segment::Delimiter, var("c")]));
    }

    #[test]
    fn test_parse_keeps_adjacent_delimiters() {
        assert_eq!(
            parse_segments("//foo").unwrap(),
            vec![Segment::Delimiter, Segment::Delimiter, text("foo")]
        );
    }

    #[test]
    fn test_parse_empty_group() {
        assert_eq!(
            parse_segments("/foo()").unwrap(),
            vec![Segment::Delimiter, text("foo"), Segment::Conditional(vec![])]
        );
    }

    #[test]
    fn test_parse_empty_pattern() {
        assert!(parse_segments("").unwrap().is_empty());
    }

    #[test]
    fn test_unbalanced_close() {
        assert_eq!(
            parse_segments("/foo)/bar"),
            Err(ParseError::UnbalancedClose { position: 4 })
        );
    }

    #[test]
    fn test_unclosed_group_reports_innermost() {
        assert_eq!(
            parse_segments("/a(/b(/c"),
            Err(ParseError::UnclosedGroup { position: 5 })
        );
    }

    #[test]
    fn test_empty_variable_name() {
        assert_eq!(
            parse_segments("/a(/:)"),
            Err(ParseError::EmptyVariableName { position: 4 })
        );
    }
}
