//! Text renderings of the experience and project collections.

use super::{Experience, Project};

/// Width of the detail box rule, in box-drawing characters
const DETAIL_RULE: usize = 45;
/// Rule after a company name
const COMPANY_RULE: usize = 25;
/// Closing rule of an experience card
const CARD_RULE: usize = 37;

const TECH_SEPARATOR: &str = " • ";

fn rule(n: usize) -> String {
    "─".repeat(n)
}

fn experience_card(e: &Experience) -> String {
    let mut out = Vec::with_capacity(e.highlights.len() + 5);
    out.push(format!("┌─ {} {}", e.company, rule(COMPANY_RULE)));
    out.push(format!("│  {}", e.role));
    out.push(format!("│  {} | {}", e.period, e.location));
    out.push("│".to_string());
    out.extend(e.highlights.iter().map(|h| format!("│  ▸ {}", h)));
    out.push(format!("└{}", rule(CARD_RULE)));
    out.join("\n")
}

/// Render every experience record, in table order, as boxed cards
pub fn render_experience(records: &[Experience]) -> String {
    records
        .iter()
        .map(experience_card)
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the project list: one name/full-name row plus a tech row each
pub fn render_projects(projects: &[Project]) -> String {
    projects
        .iter()
        .map(|p| {
            format!(
                "  ▸ {:<20} — {}\n    {}",
                p.name,
                p.full_name,
                p.tech.join(TECH_SEPARATOR)
            )
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Render the detail box for a single project
pub fn render_project_detail(p: &Project) -> String {
    let bar = rule(DETAIL_RULE);
    format!(
        "┌{bar}┐\n│  {}\n├{bar}┤\n│  {}\n│\n│  Tech: {}\n└{bar}┘",
        p.full_name,
        p.description,
        p.tech.join(TECH_SEPARATOR),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::ContentStore;

    #[test]
    fn test_experience_card_shape() {
        let store = ContentStore::builtin();
        let text = render_experience(&store.experience[..1]);
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(lines[0], "┌─ Josh Talks ─────────────────────────");
        assert_eq!(lines[1], "│  Software Developer");
        assert_eq!(lines[2], "│  Nov 2024 – Present | Gurugram");
        assert_eq!(lines[3], "│");
        assert!(lines[4].starts_with("│  ▸ Built and maintained"));
        assert_eq!(lines.last().unwrap(), &"└─────────────────────────────────────");
        assert_eq!(lines.len(), 4 + 4 + 1);
    }

    #[test]
    fn test_experience_keeps_table_order() {
        let store = ContentStore::builtin();
        let text = render_experience(store.experience);
        let josh = text.find("Josh Talks").unwrap();
        let lawyer = text.find("LawyerDesk").unwrap();
        let canan = text.find("Canan Technologies").unwrap();
        let newton = text.find("Newton School").unwrap();
        assert!(josh < lawyer && lawyer < canan && canan < newton);
        assert_eq!(text.matches("\n\n").count(), store.experience.len() - 1);
    }

    #[test]
    fn test_projects_padding() {
        let store = ContentStore::builtin();
        let text = render_projects(store.projects);
        let first = text.lines().next().unwrap();
        assert_eq!(first, "  ▸ PIS                  — Payroll Information System");
        assert!(text.contains("    React.js • TypeScript • Redux • Node.js • PostgreSQL • Docker"));
    }

    #[test]
    fn test_project_detail_box() {
        let store = ContentStore::builtin();
        let text = render_project_detail(&store.projects[4]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 7);
        assert_eq!(lines[1], "│  Point of Sale System");
        assert_eq!(lines[5], "│  Tech: React.js • Node.js • Express • MongoDB • Material UI");
        assert_eq!(lines[0].chars().filter(|c| *c == '─').count(), 45);
    }
}
