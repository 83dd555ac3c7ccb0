//! cvkit sample - load the bundled demo resume

use clap::Args;

use crate::app::AppContext;
use crate::error::Result;
use crate::resume::model::{
    EducationEntry, ExperienceEntry, PersonalInfo, ProjectEntry, ResumeDocument, SkillCategories,
};

#[derive(Args, Debug)]
pub struct SampleArgs {}

pub fn run(ctx: &mut AppContext, _args: &SampleArgs) -> Result<()> {
    ctx.store.save_document(&sample_document())?;
    if ctx.robot_mode {
        println!("{}", serde_json::json!({ "ok": true }));
    } else if !ctx.quiet {
        println!("Sample resume loaded.");
    }
    Ok(())
}

/// Demo content used to showcase the preview and the scorer.
#[must_use]
pub fn sample_document() -> ResumeDocument {
    ResumeDocument {
        personal: PersonalInfo {
            name: "Alex Carter".into(),
            email: "alex.carter@email.com".into(),
            phone: "+1 (555) 100-2000".into(),
            location: "Austin, TX".into(),
        },
        summary: "Product-focused software engineer with experience building full-stack \
                  applications, improving developer workflows, and shipping user-facing \
                  features with measurable outcomes across frontend and backend systems. \
                  Strong in React, TypeScript, Node.js, and API design with a focus on \
                  reliable delivery and clean architecture."
            .into(),
        education: vec![EducationEntry {
            school: "State University".into(),
            degree: "B.S. Computer Science".into(),
            year: "2024".into(),
        }],
        experience: vec![ExperienceEntry {
            company: "Nexa Labs".into(),
            role: "Software Engineer".into(),
            duration: "2024 - Present".into(),
            highlights: "Improved page load speed by 32% across core workflows.\n\
                         Reduced incident count by 18% using release guardrails."
                .into(),
        }],
        projects: vec![ProjectEntry {
            title: "Portfolio Platform".into(),
            description: "Built modular web experience for client showcases and content \
                          operations."
                .into(),
            tech_stack: vec!["React".into(), "TypeScript".into()],
            live_url: "https://example.com".into(),
            github_url: "https://github.com/example/portfolio".into(),
            highlights: "Improved engagement by 24%".into(),
        }],
        skills_by_category: SkillCategories {
            technical: vec!["React".into(), "TypeScript".into(), "Node.js".into()],
            soft: vec!["Problem Solving".into()],
            tools: vec!["Git".into()],
        },
        skills: String::new(),
        github: "https://github.com/example".into(),
        linkedin: "https://linkedin.com/in/example".into(),
    }
}
