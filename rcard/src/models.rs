// src/models.rs
pub mod resume;

pub use resume::{Achievement, Education, Job, Project, ResumeData, SkillGroup};
