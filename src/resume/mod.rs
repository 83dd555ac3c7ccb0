//! Resume core engine.
//!
//! Pure layers over one canonical type:
//! - [`model`]: the always-valid [`model::ResumeDocument`] and its
//!   invariant-preserving mutation helpers
//! - [`normalize`]: total coercion of untrusted stored/imported data into
//!   the canonical document
//! - [`predicates`]: visibility/completeness/text-feature derivations
//! - [`ats`]: the deterministic readiness score with explainable
//!   suggestions
//!
//! Nothing in this module performs I/O; persistence lives in
//! [`crate::storage`].

pub mod ats;
pub mod model;
pub mod normalize;
pub mod predicates;

pub use ats::{AtsResult, score, top_improvements};
pub use model::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, SkillCategories,
    SkillCategory, Template,
};
pub use normalize::normalize;
