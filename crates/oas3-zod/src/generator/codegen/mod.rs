mod module;
mod render;

pub(crate) use module::{CodeMetadata, ModuleEmitter};
