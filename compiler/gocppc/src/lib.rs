//! gocppc - Go to C++ translator driver
//!
//! Ties the parser collaborator and the translation engine together:
//! - [`convert_source`]: in-memory conversion
//! - [`convert_file`]: read a `.go` file and write the C++ text
//! - [`render_error`]: terminal rendering of a failure
//!
//! The `gocpp` binary is a thin command-line wrapper over this crate.

mod convert;
pub mod emitter;
mod error;

use std::sync::Once;

pub use convert::{convert_file, convert_source, ConvertOptions, ConvertOutput, ConvertedFunction};
pub use error::{render_error, ConvertError};

/// Tracing initialization guard (ensures init only happens once).
static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Call this once at startup. Safe to call multiple times.
/// Enable with `RUST_LOG=gocppc=debug` or `RUST_LOG=gocpp_translate=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true).with_writer(std::io::stderr))
                .with(filter)
                .init();
        }
    });
}
