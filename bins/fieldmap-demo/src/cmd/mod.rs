pub mod config;
pub mod error;
pub mod run;
pub mod student;
