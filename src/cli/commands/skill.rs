//! cvkit skill - categorized skill list editing

use clap::{Args, Subcommand};
use colored::Colorize;

use crate::app::AppContext;
use crate::error::Result;
use crate::resume::model::SkillCategory;
use crate::resume::predicates::all_skills;

#[derive(Args, Debug)]
pub struct SkillArgs {
    #[command(subcommand)]
    pub action: SkillAction,
}

#[derive(Subcommand, Debug)]
pub enum SkillAction {
    /// Add a skill to a category (duplicates ignored case-insensitively)
    Add {
        skill: String,

        /// Category: technical, soft, tools
        #[arg(long, short, default_value = "technical")]
        category: String,
    },

    /// Remove a skill from a category (exact match)
    Remove {
        skill: String,

        /// Category: technical, soft, tools
        #[arg(long, short, default_value = "technical")]
        category: String,
    },

    /// List skills per category plus the combined view
    List,
}

pub fn run(ctx: &mut AppContext, args: &SkillArgs) -> Result<()> {
    match &args.action {
        SkillAction::Add { skill, category } => {
            let category: SkillCategory = category.parse()?;
            let mut doc = ctx.store.load_document();
            let added = doc.add_skill(category, skill);
            ctx.store.save_document(&doc)?;

            if ctx.robot_mode {
                println!(
                    "{}",
                    serde_json::json!({ "ok": true, "added": added, "category": category.as_str() })
                );
            } else if !ctx.quiet {
                if added {
                    println!("Added {} to {}.", skill.trim(), category.label());
                } else {
                    println!("{} is already listed (or blank).", skill.trim());
                }
            }
        }
        SkillAction::Remove { skill, category } => {
            let category: SkillCategory = category.parse()?;
            let mut doc = ctx.store.load_document();
            doc.remove_skill(category, skill);
            ctx.store.save_document(&doc)?;

            if ctx.robot_mode {
                println!(
                    "{}",
                    serde_json::json!({ "ok": true, "category": category.as_str() })
                );
            } else if !ctx.quiet {
                println!("Removed {} from {}.", skill, category.label());
            }
        }
        SkillAction::List => {
            let doc = ctx.store.load_document();
            if ctx.robot_mode {
                println!(
                    "{}",
                    serde_json::json!({
                        "technical": doc.skills_by_category.technical,
                        "soft": doc.skills_by_category.soft,
                        "tools": doc.skills_by_category.tools,
                        "all": all_skills(&doc),
                    })
                );
                return Ok(());
            }
            for category in SkillCategory::ALL {
                let list = doc.skills_by_category.get(category);
                println!(
                    "{} ({})",
                    category.label().bold(),
                    list.len()
                );
                if !list.is_empty() {
                    println!("  {}", list.join(", "));
                }
            }
            let combined = all_skills(&doc);
            println!("{} ({})", "All".bold(), combined.len());
            if !combined.is_empty() {
                println!("  {}", combined.join(", "));
            }
        }
    }
    Ok(())
}
