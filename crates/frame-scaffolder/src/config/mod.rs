//! Run configuration and generated configuration files

pub mod environment;
pub mod generator;

pub use environment::{absolutize, RunEnvironment};
pub use generator::{generate, write_files, GeneratedFile};
