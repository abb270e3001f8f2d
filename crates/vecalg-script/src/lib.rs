//! Marshalling of [`vecalg`] vectors to and from host configuration documents.
//!
//! Documents are TOML files. After loading one into a [`ScriptState`], values are located by
//! pushing names onto a lookup stack and then read with [`ScriptState::read`]. Vectors are stored
//! as lists of numbers and are copied in and out by index.

use log::LevelFilter;

mod state;
mod value;

pub use state::ScriptState;
pub use value::{FromValue, Value};

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = LevelFilter::Debug;
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate and `vecalg_script` log at *debug* level. The `RUST_LOG` environment variable
/// can override this.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
