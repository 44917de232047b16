mod decode;
mod error;
pub mod jsonc;
mod metadata;
mod resource;
mod template;
mod value;

/// Generic node-to-shape decoding trait.
pub use decode::Decode;
/// Error and result aliases.
pub use error::{ArmError, Result};
/// Node tree types consumed by the decoders.
pub use jsonc::{Kind, Node, ParseOptions, Position, Range};
/// Source line range and attached comments of a decoded node.
pub use metadata::Metadata;
/// Fixed-field template records.
pub use resource::{Parameter, Resource};
/// Root template aggregate and entry points.
pub use template::{Function, Template, decode_template};
/// Metadata-stamped value types.
pub use value::{MapValue, SliceValue, Type, Value};
