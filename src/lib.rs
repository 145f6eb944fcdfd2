pub mod cheatsheet;
pub mod cli;
pub mod error;
pub mod logging;
