pub mod base;
pub mod build;
pub mod catalog;
pub mod check;
pub mod commands;
pub mod completions;
pub mod logging;
pub mod report;
pub mod run;
pub mod utils;
