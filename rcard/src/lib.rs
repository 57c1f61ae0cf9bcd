// src/lib.rs
pub mod cli;
pub mod core;
pub mod models;

pub use cli::{Args, run};
pub use models::ResumeData;
