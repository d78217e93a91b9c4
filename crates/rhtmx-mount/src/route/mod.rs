/// Route module for mount patterns
///
/// Turns raw pattern strings into segment trees and renders them:
/// - `token` splits the raw string on `/`, `(` and `)`
/// - `parser` builds the segment tree with an explicit group stack
/// - `segment` holds the tree and its pure render/collect walks

pub mod parser;
pub mod segment;
pub mod token;

// Re-export commonly used types
pub use parser::parse_segments;
pub use segment::{collect_variables, Segment, VariableSets};
