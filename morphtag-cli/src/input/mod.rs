//! Input handling module

pub mod glob_resolver;
pub mod tag_reader;

pub use glob_resolver::resolve_patterns;
pub use tag_reader::TagReader;
