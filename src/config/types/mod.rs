//! Configuration utility types.
//!
//! | Module   | Purpose                                      |
//! |----------|----------------------------------------------|
//! | `error`  | Configuration error types                    |
//! | `field`  | Field paths used in diagnostics              |
//! | `handle` | Load-once global configuration handle        |

mod error;
mod field;
pub mod handle;

pub use error::{ConfigDiagnostic, ConfigDiagnostics, ConfigError};
pub use field::FieldPath;
pub use handle::{ConfigHandle, get, is_loaded, load};
