//! Feature-selecting smoke probe.
//!
//! Selects one of two behavioral variants (Modern or Fallback) from a fixed
//! priority chain of build-time and startup inputs, prints four diagnostic
//! lines to stdout, and exits with a status code encoding which variant ran.
//! A test runner asserts on the stdout text and the exit code to verify its
//! compile-and-execute plumbing end to end.

#[cfg(all(feature = "force-modern", feature = "force-fallback"))]
compile_error!("features `force-modern` and `force-fallback` are mutually exclusive");

pub mod arith;
pub mod config;
pub mod feature;
pub mod report;

pub use arith::{Arith, NativeArith};
pub use config::BuildInfo;
pub use feature::{select, SelectionFlags, Variant, STD_VERSION_THRESHOLD};
pub use report::write_report;
