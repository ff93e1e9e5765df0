pub mod animation;
pub mod contact;
pub mod content;
pub mod navigation;
pub mod view_model;

pub use crate::domain::model::{ContactDraft, ContactField, Project, Skill, SkillCategory};
pub use crate::domain::ports::{Alerts, ContactChannel, Document, IntersectionSource};
pub use crate::utils::error::Result;
