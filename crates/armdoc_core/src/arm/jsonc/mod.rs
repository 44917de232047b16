//! JSON-with-comments node tree.
//!
//! The parser keeps what plain JSON parsing throws away: the 1-based line and column where each
//! value starts and ends, and the `//` and `/* */` comments written around it. Decoders consume
//! the resulting [`Node`] tree through its accessors and [`Node::decode`].

mod cursor;
mod node;
mod parser;

pub use node::{Content, Kind, Node, Position, Property, Range};
pub use parser::{ParseOptions, parse, parse_path, parse_with_options};
