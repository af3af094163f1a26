pub mod config;
pub mod error;
pub mod extract;
pub mod icons;
pub mod layout;
pub mod parse;
pub mod render;
pub mod validate;
pub mod wasm;
