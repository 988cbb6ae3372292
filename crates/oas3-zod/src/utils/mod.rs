pub mod refs;
pub mod spec;
pub mod text;

pub(crate) use refs::{resolve_component_ref, resolve_ref_name};
