//! Output renderers.
pub mod elm;
