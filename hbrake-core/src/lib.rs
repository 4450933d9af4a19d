//! Core library for validating encode configurations and driving HandBrakeCLI.
//!
//! This crate turns a nested JSON configuration into a HandBrakeCLI argument
//! list in three stages: schema validation, section-by-section command
//! compilation, and supervised execution with frame-based progress reporting.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use hbrake_core::{CommandCompiler, SchemaValidator};
//! use hbrake_core::external::{run_encode, FfprobeFrameProber};
//! use hbrake_core::progress::ProgressBarSink;
//! use std::path::Path;
//!
//! let validator = SchemaValidator::bundled().unwrap();
//! let config = validator.validated_from_file(Path::new("encode.json")).unwrap();
//!
//! let compiler = CommandCompiler::new("HandBrakeCLI");
//! let command = compiler.compile(&config).unwrap();
//! println!("{command}");
//!
//! let source = Path::new(config.source().unwrap()).to_path_buf();
//! run_encode(
//!     command,
//!     &source,
//!     &FfprobeFrameProber,
//!     &ProgressBarSink::new(),
//! )
//! .unwrap();
//! ```

pub mod command;
pub mod config;
pub mod error;
pub mod external;
pub mod progress;
pub mod schema;

// Re-exports for public API
pub use command::{CommandCompiler, CompiledCommand, OptionValue, Section};
pub use config::EncodeConfig;
pub use error::{CoreError, CoreResult};
pub use external::{
    FfprobeFrameProber, FrameProber, check_dependency, handbrake_binary_name, run_encode,
};
pub use progress::{NullProgressSink, ProgressBarSink, ProgressSink};
pub use schema::SchemaValidator;
