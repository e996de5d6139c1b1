pub mod config;
pub mod policy;

mod macros;

#[doc(hidden)]
pub use tracing;
