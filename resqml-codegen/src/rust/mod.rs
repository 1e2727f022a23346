//! Rust code generation modules.

pub mod enums;

pub use enums::{EnumGenerator, to_pascal_case};
