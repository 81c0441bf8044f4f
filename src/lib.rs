pub mod cli;
pub mod config;
pub mod migrate;
pub mod rewrite;
pub mod runner;
pub mod scan;
