// src/core.rs
pub mod layout;
pub mod render;
pub mod theme;
