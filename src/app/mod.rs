// Application layer: what the binary does with a parsed command line.

#[cfg(feature = "cli")]
pub mod runner;
