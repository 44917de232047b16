/// Template decode command.
pub mod decode;
/// Raw node tree dump command.
pub mod nodes;
/// Resource listing command.
pub mod resources;
/// Shared rendering helpers.
pub(crate) mod util;
