//! crates/portfolio_core/src/prompt.rs
//!
//! Renders the system instructions sent with every chat request: a first-person
//! persona, the whole portfolio as structured text, and fixed answering rules.

use crate::context::PortfolioContext;
use crate::domain::{Education, Experience, Profile, Project, Skill};

const FALLBACK_PERSONA: &str = "the portfolio owner";

/// Builds the system instructions for one chat request.
///
/// The persona is the profile's name when a profile exists. Every collection is
/// embedded verbatim, in store order, with no size budgeting.
pub fn build_instructions(context: &PortfolioContext) -> String {
    let persona = context
        .profile
        .as_ref()
        .map(|p| p.name.trim())
        .filter(|name| !name.is_empty())
        .unwrap_or(FALLBACK_PERSONA);

    // Filled in a single pass; substituted values are never re-scanned.
    let context = render_context(context);
    format!(
        r#"You are {persona}. Answer the user's questions in the first person ("I", "my", "me").
Here is your professional background:

{context}

Guidelines:
- Be professional yet approachable.
- Answer in the FIRST PERSON as {persona}.
- Use Markdown for clear formatting:
  * Use bold text for emphasis.
  * Use bullet points for lists.
  * Use headings (###) for sections.
  * Ensure clear spacing between paragraphs.
- Use only the provided context. If asked something not in the context, politely say you don't have that information."#
    )
}

fn render_context(context: &PortfolioContext) -> String {
    let sections = [
        ("Profile", render_profile(context.profile.as_ref())),
        ("Skills", render_list(&context.skills, render_skill)),
        ("Projects", render_list(&context.projects, render_project)),
        ("Experience", render_list(&context.experience, render_experience)),
        ("Education", render_list(&context.education, render_education)),
    ];

    sections
        .iter()
        .map(|(title, body)| format!("{}:\n{}", title, body))
        .collect::<Vec<_>>()
        .join("\n\n")
}

fn render_list<T>(items: &[T], render: fn(&T) -> String) -> String {
    if items.is_empty() {
        return "  (none)".to_string();
    }
    items.iter().map(render).collect::<Vec<_>>().join("\n")
}

fn render_profile(profile: Option<&Profile>) -> String {
    let Some(p) = profile else {
        return "  (none)".to_string();
    };

    let mut out = format!(
        "  Name: {}\n  Title: {}\n  Bio: {}\n  Email: {}\n  Phone: {}\n  Location: {}",
        p.name, p.title, p.bio, p.email, p.phone, p.location
    );
    for (platform, url) in &p.social_links {
        out.push_str(&format!("\n  {}: {}", platform, url));
    }
    out
}

fn render_skill(skill: &Skill) -> String {
    format!("  - {}: {}", skill.category, skill.items.join(", "))
}

fn render_project(project: &Project) -> String {
    let mut out = format!(
        "  - {}\n    Description: {}\n    Tech stack: {}",
        project.title,
        project.description,
        project.tech_stack.join(", ")
    );
    if let Some(link) = &project.link {
        out.push_str(&format!("\n    Live: {}", link));
    }
    if let Some(source) = &project.github_link {
        out.push_str(&format!("\n    Source: {}", source));
    }
    out
}

fn render_experience(entry: &Experience) -> String {
    format!(
        "  - {} at {} ({})\n    {}",
        entry.title, entry.company, entry.duration, entry.description
    )
}

fn render_education(entry: &Education) -> String {
    let mut out = format!("  - {}, {} ({})", entry.degree, entry.school, entry.year);
    if let Some(gpa) = &entry.gpa {
        out.push_str(&format!(", {}", gpa));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn sample_context() -> PortfolioContext {
        PortfolioContext {
            profile: Some(Profile {
                id: 1,
                name: "Ada Lovelace".to_string(),
                title: "Analyst".to_string(),
                bio: "Writes notes on engines.".to_string(),
                email: "ada@example.com".to_string(),
                phone: "+44 0000".to_string(),
                location: "London".to_string(),
                social_links: BTreeMap::from([(
                    "github".to_string(),
                    "https://github.com/ada".to_string(),
                )]),
            }),
            skills: vec![Skill {
                id: 1,
                category: "Mathematics".to_string(),
                items: vec!["Analysis".to_string(), "Algorithms".to_string()],
            }],
            projects: vec![Project {
                id: 1,
                title: "Note G".to_string(),
                description: "Bernoulli numbers on the Analytical Engine.".to_string(),
                tech_stack: vec!["Punched cards".to_string()],
                link: None,
                github_link: Some("https://github.com/ada/note-g".to_string()),
            }],
            experience: vec![Experience {
                id: 1,
                title: "Translator".to_string(),
                company: "Taylor's Scientific Memoirs".to_string(),
                duration: "1842 - 1843".to_string(),
                description: "Translated and annotated Menabrea's paper.".to_string(),
            }],
            education: vec![Education {
                id: 1,
                degree: "Private tutoring".to_string(),
                school: "Home".to_string(),
                year: "1830s".to_string(),
                gpa: None,
            }],
        }
    }

    #[test]
    fn persona_uses_the_profile_name() {
        let instructions = build_instructions(&sample_context());
        assert!(instructions.starts_with("You are Ada Lovelace."));
        assert!(instructions.contains("Answer in the FIRST PERSON as Ada Lovelace."));
    }

    #[test]
    fn persona_falls_back_without_a_profile() {
        let instructions = build_instructions(&PortfolioContext::default());
        assert!(instructions.starts_with("You are the portfolio owner."));
        assert!(instructions.contains("Profile:\n  (none)"));
        assert!(instructions.contains("Education:\n  (none)"));
    }

    #[test]
    fn every_collection_is_embedded() {
        let instructions = build_instructions(&sample_context());
        assert!(instructions.contains("  github: https://github.com/ada"));
        assert!(instructions.contains("  - Mathematics: Analysis, Algorithms"));
        assert!(instructions.contains("    Source: https://github.com/ada/note-g"));
        assert!(!instructions.contains("Live:"));
        assert!(instructions.contains("  - Translator at Taylor's Scientific Memoirs (1842 - 1843)"));
        assert!(instructions.contains("  - Private tutoring, Home (1830s)"));
    }

    #[test]
    fn sections_follow_a_fixed_order() {
        let instructions = build_instructions(&sample_context());
        let order = ["Profile:", "Skills:", "Projects:", "Experience:", "Education:", "Guidelines:"];
        let positions: Vec<usize> = order
            .iter()
            .map(|heading| instructions.find(heading).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn placeholders_inside_stored_text_are_left_alone() {
        let mut context = sample_context();
        context.skills[0].items = vec!["{persona}".to_string()];
        let instructions = build_instructions(&context);
        assert!(instructions.contains("  - Mathematics: {persona}"));
    }

    #[test]
    fn placeholders_inside_the_profile_name_are_left_alone() {
        for name in ["{context}", "{persona}"] {
            let mut context = sample_context();
            if let Some(profile) = context.profile.as_mut() {
                profile.name = name.to_string();
            }
            let instructions = build_instructions(&context);

            assert_eq!(instructions.matches("Skills:").count(), 1, "{name}");
            assert!(instructions.starts_with(&format!("You are {name}.")), "{name}");
            assert!(instructions.contains(&format!("  Name: {name}\n")), "{name}");
        }
    }
}
