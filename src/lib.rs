//! Portfolio catalog binary support: bootstrap (config, tracing, wiring)
//! and the command-line front-end.

pub mod bootstrap;
pub mod cli;
