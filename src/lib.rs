pub mod convert;
pub mod error;
pub mod input;
pub mod settings;
pub mod timezone;
pub mod transfer;

#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use error::{ConfigError, ConvertError};
