//! Document renderer: a self-contained HTML page for a portfolio.
//!
//! Section order is fixed: header, About Me, Experience, Projects, Skills,
//! Education, Certifications. A section with no entries is left out entirely,
//! and every empty optional field drops its own fragment. All record text is
//! escaped; theme tokens go into the inline stylesheet as-is.

use std::fmt::Write;

use crate::models::{non_blank, present, PortfolioRecord, ThemeId};
use crate::theme::ThemeTokens;

const STYLESHEET: &str = r#"
    * { margin: 0; padding: 0; box-sizing: border-box; }
    body {
      font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;
      line-height: 1.6;
      color: #333;
      background: {background};
    }
    .container { max-width: 1200px; margin: 0 auto; padding: 2rem; }
    header {
      text-align: center;
      padding: 3rem 0;
      background: {header_background};
      color: {header_text};
      margin-bottom: 3rem;
    }
    h1 { font-size: 2.5rem; margin-bottom: 0.5rem; }
    .title { font-size: 1.5rem; opacity: 0.9; margin-bottom: 1rem; }
    .contact-info {
      display: flex;
      gap: 1.5rem;
      justify-content: center;
      flex-wrap: wrap;
      margin-top: 1.5rem;
    }
    .contact-info a { color: {link_color}; text-decoration: none; }
    section { margin-bottom: 3rem; }
    h2 {
      font-size: 2rem;
      margin-bottom: 1.5rem;
      color: {heading_color};
      border-bottom: 3px solid {accent_color};
      padding-bottom: 0.5rem;
    }
    .bio { font-size: 1.1rem; line-height: 1.8; color: #555; }
    .experience-item, .education-item, .project-item {
      margin-bottom: 2rem;
      padding: 1.5rem;
      background: white;
      border-radius: 8px;
      box-shadow: 0 2px 4px rgba(0,0,0,0.1);
    }
    .item-header {
      display: flex;
      justify-content: space-between;
      align-items: flex-start;
      margin-bottom: 0.5rem;
    }
    .item-title { font-size: 1.3rem; font-weight: 600; color: {heading_color}; }
    .item-subtitle { color: #666; margin-bottom: 0.5rem; }
    .item-date { color: #888; font-size: 0.9rem; }
    .skills-grid {
      display: grid;
      grid-template-columns: repeat(auto-fill, minmax(150px, 1fr));
      gap: 1rem;
    }
    .skill-item {
      background: {skill_background};
      padding: 0.75rem 1rem;
      border-radius: 6px;
      text-align: center;
      font-weight: 500;
      color: {skill_text};
    }
    .project-links { margin-top: 1rem; display: flex; gap: 1rem; }
    .project-link {
      padding: 0.5rem 1rem;
      background: {accent_color};
      color: white;
      text-decoration: none;
      border-radius: 6px;
      font-size: 0.9rem;
    }
    @media print {
      .container { padding: 0; }
      section { page-break-inside: avoid; }
    }
"#;

/// Renders the record as a standalone HTML document. Deterministic.
pub fn render(record: &PortfolioRecord, theme: ThemeId) -> String {
    let info = &record.personal_info;
    let mut out = String::with_capacity(16 * 1024);

    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    out.push_str("  <meta charset=\"UTF-8\">\n");
    out.push_str(
        "  <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n",
    );
    let _ = writeln!(
        out,
        "  <title>{} - Portfolio</title>",
        escape_html(&info.full_name)
    );
    let _ = writeln!(out, "  <style>{}  </style>", stylesheet(theme.tokens()));
    out.push_str("</head>\n<body>\n  <div class=\"container\">\n");

    render_header(&mut out, record);

    if let Some(bio) = non_blank(&info.bio) {
        let body = format!("<p class=\"bio\">{}</p>\n", escape_html(bio));
        push_section(&mut out, "About Me", &body);
    }
    if !record.experience.is_empty() {
        push_section(&mut out, "Experience", &experience_items(record));
    }
    if !record.projects.is_empty() {
        push_section(&mut out, "Projects", &project_items(record));
    }
    if !record.skills.is_empty() {
        push_section(&mut out, "Skills", &skill_grid(record));
    }
    if !record.education.is_empty() {
        push_section(&mut out, "Education", &education_items(record));
    }
    if !record.certifications.is_empty() {
        push_section(&mut out, "Certifications", &certification_items(record));
    }

    out.push_str("  </div>\n</body>\n</html>\n");
    out
}

/// HTML-escapes text for element content and double-quoted attributes.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn stylesheet(tokens: &ThemeTokens) -> String {
    STYLESHEET
        .replace("{background}", tokens.background)
        .replace("{header_background}", tokens.header_background)
        .replace("{header_text}", tokens.header_text)
        .replace("{heading_color}", tokens.heading_color)
        .replace("{accent_color}", tokens.accent_color)
        .replace("{link_color}", tokens.link_color)
        .replace("{skill_background}", tokens.skill_background)
        .replace("{skill_text}", tokens.skill_text)
}

fn render_header(out: &mut String, record: &PortfolioRecord) {
    let info = &record.personal_info;
    out.push_str("    <header>\n");
    let _ = writeln!(out, "      <h1>{}</h1>", escape_html(&info.full_name));
    let _ = writeln!(out, "      <div class=\"title\">{}</div>", escape_html(&info.title));
    out.push_str("      <div class=\"contact-info\">\n");

    for (icon, value) in [
        ("\u{2709}\u{fe0f}", &info.email),
        ("\u{1f4f1}", &info.phone),
        ("\u{1f4cd}", &info.location),
    ] {
        if let Some(value) = non_blank(value) {
            let _ = writeln!(out, "        <span>{icon} {}</span>", escape_html(value));
        }
    }
    for (label, url) in [
        ("\u{1f310} Website", &info.website),
        ("\u{1f4bc} LinkedIn", &info.linkedin),
        ("\u{1f4bb} GitHub", &info.github),
        ("\u{1f426} Twitter", &info.twitter),
    ] {
        if let Some(url) = non_blank(url) {
            let _ = writeln!(
                out,
                "        <a href=\"{}\" target=\"_blank\">{label}</a>",
                escape_html(url)
            );
        }
    }

    out.push_str("      </div>\n    </header>\n");
}

fn push_section(out: &mut String, heading: &str, body: &str) {
    let _ = write!(
        out,
        "    <section>\n      <h2>{heading}</h2>\n{body}    </section>\n"
    );
}

fn experience_items(record: &PortfolioRecord) -> String {
    let mut out = String::new();
    for exp in &record.experience {
        let mut subtitle = escape_html(&exp.company);
        if let Some(location) = non_blank(&exp.location) {
            let _ = write!(subtitle, " \u{2022} {}", escape_html(location));
        }
        let end = match non_blank(&exp.end_date) {
            Some(end) if !exp.current => escape_html(end),
            _ => "Present".to_string(),
        };

        out.push_str("      <div class=\"experience-item\">\n        <div class=\"item-header\">\n          <div>\n");
        let _ = writeln!(
            out,
            "            <div class=\"item-title\">{}</div>",
            escape_html(&exp.position)
        );
        let _ = writeln!(out, "            <div class=\"item-subtitle\">{subtitle}</div>");
        out.push_str("          </div>\n");
        let _ = writeln!(
            out,
            "          <div class=\"item-date\">{} - {end}</div>",
            escape_html(&exp.start_date)
        );
        out.push_str("        </div>\n");
        if let Some(description) = non_blank(&exp.description) {
            let _ = writeln!(out, "        <p>{}</p>", escape_html(description));
        }
        out.push_str("      </div>\n");
    }
    out
}

fn project_items(record: &PortfolioRecord) -> String {
    let mut out = String::new();
    for project in &record.projects {
        out.push_str("      <div class=\"project-item\">\n");
        let _ = writeln!(
            out,
            "        <div class=\"item-title\">{}</div>",
            escape_html(&project.name)
        );
        if let Some(description) = non_blank(&project.description) {
            let _ = writeln!(out, "        <p>{}</p>", escape_html(description));
        }
        if let Some(technologies) = non_blank(&project.technologies) {
            let _ = writeln!(
                out,
                "        <p><strong>Technologies:</strong> {}</p>",
                escape_html(technologies)
            );
        }

        let links: Vec<String> = [
            (present(&project.live_url), "Live Demo"),
            (present(&project.github_url), "GitHub"),
        ]
        .into_iter()
        .filter_map(|(url, label)| {
            url.map(|url| {
                format!(
                    "          <a href=\"{}\" target=\"_blank\" class=\"project-link\">{label}</a>\n",
                    escape_html(url)
                )
            })
        })
        .collect();
        if !links.is_empty() {
            out.push_str("        <div class=\"project-links\">\n");
            links.iter().for_each(|link| out.push_str(link));
            out.push_str("        </div>\n");
        }
        out.push_str("      </div>\n");
    }
    out
}

fn skill_grid(record: &PortfolioRecord) -> String {
    let mut out = String::from("      <div class=\"skills-grid\">\n");
    for skill in &record.skills {
        let _ = writeln!(
            out,
            "        <div class=\"skill-item\">{}</div>",
            escape_html(&skill.name)
        );
    }
    out.push_str("      </div>\n");
    out
}

fn education_items(record: &PortfolioRecord) -> String {
    let mut out = String::new();
    for edu in &record.education {
        let mut subtitle = escape_html(&edu.institution);
        if let Some(location) = non_blank(&edu.location) {
            let _ = write!(subtitle, " \u{2022} {}", escape_html(location));
        }

        out.push_str("      <div class=\"education-item\">\n        <div class=\"item-header\">\n          <div>\n");
        let _ = writeln!(
            out,
            "            <div class=\"item-title\">{}</div>",
            escape_html(&edu.degree)
        );
        let _ = writeln!(out, "            <div class=\"item-subtitle\">{subtitle}</div>");
        if let Some(gpa) = present(&edu.gpa) {
            let _ = writeln!(
                out,
                "            <div class=\"item-subtitle\">GPA: {}</div>",
                escape_html(gpa)
            );
        }
        out.push_str("          </div>\n");
        if let Some(year) = non_blank(&edu.year) {
            let _ = writeln!(out, "          <div class=\"item-date\">{}</div>", escape_html(year));
        }
        out.push_str("        </div>\n      </div>\n");
    }
    out
}

fn certification_items(record: &PortfolioRecord) -> String {
    let mut out = String::new();
    for cert in &record.certifications {
        out.push_str("      <div class=\"education-item\">\n");
        let _ = writeln!(
            out,
            "        <div class=\"item-title\">{}</div>",
            escape_html(&cert.name)
        );
        let subtitle = [non_blank(&cert.issuer), non_blank(&cert.year)]
            .into_iter()
            .flatten()
            .map(escape_html)
            .collect::<Vec<_>>()
            .join(" \u{2022} ");
        if !subtitle.is_empty() {
            let _ = writeln!(out, "        <div class=\"item-subtitle\">{subtitle}</div>");
        }
        if let Some(url) = present(&cert.credential_url) {
            let _ = writeln!(
                out,
                "        <a href=\"{}\" target=\"_blank\" class=\"project-link\">View Credential</a>",
                escape_html(url)
            );
        }
        out.push_str("      </div>\n");
    }
    out
}

#[cfg(test)]
mod tests {
    use regex::Regex;

    use super::*;
    use crate::models::{
        CertificationEntry, EducationEntry, ExperienceEntry, ProjectEntry, Skill,
    };
    use crate::portfolio::synthesizer::{MockSynthesizer, PortfolioSynthesizer, StageTiming};

    fn required_only() -> PortfolioRecord {
        let mut record = PortfolioRecord::default();
        record.personal_info.full_name = "Ada Lovelace".to_string();
        record.personal_info.title = "Analyst".to_string();
        record.personal_info.email = "ada@example.com".to_string();
        record
    }

    fn headings(html: &str) -> Vec<String> {
        let re = Regex::new(r"<h2>(.*?)</h2>").unwrap();
        re.captures_iter(html).map(|c| c[1].to_string()).collect()
    }

    #[test]
    fn test_required_fields_only_renders_header() {
        let html = render(&required_only(), ThemeId::Minimal);
        assert!(html.contains("<h1>Ada Lovelace</h1>"));
        assert!(html.contains("\u{2709}\u{fe0f} ada@example.com"));
        assert!(!html.contains("<section>"));
        assert!(headings(&html).is_empty());
        assert!(!html.contains("\u{1f4f1}"));
    }

    #[tokio::test]
    async fn test_full_record_has_sections_in_fixed_order() {
        let record = MockSynthesizer::new(StageTiming::instant())
            .synthesize("I'm a data scientist", None)
            .await
            .unwrap();
        let html = render(&record, record.theme);
        assert_eq!(
            headings(&html),
            vec![
                "About Me",
                "Experience",
                "Projects",
                "Skills",
                "Education",
                "Certifications"
            ]
        );
    }

    #[test]
    fn test_empty_sections_are_omitted() {
        let mut record = required_only();
        record.skills.push(Skill {
            name: "Rust".to_string(),
            ..Default::default()
        });
        record.certifications.push(CertificationEntry {
            name: "CKA".to_string(),
            ..Default::default()
        });
        let html = render(&record, ThemeId::Minimal);
        assert_eq!(headings(&html), vec!["Skills", "Certifications"]);
        // Neither issuer nor year: no subtitle line.
        assert!(!html.contains("\u{2022}"));
    }

    #[test]
    fn test_record_text_is_escaped() {
        let mut record = required_only();
        record.personal_info.full_name = "<script>alert('x')</script>".to_string();
        record.personal_info.bio = "Tom & \"Jerry\"".to_string();
        let html = render(&record, ThemeId::Minimal);
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;alert(&#39;x&#39;)&lt;/script&gt;"));
        assert!(html.contains("Tom &amp; &quot;Jerry&quot;"));
    }

    #[test]
    fn test_theme_tokens_are_embedded() {
        let html = render(&required_only(), ThemeId::Creative);
        assert!(html.contains("background: #fef3c7;"));
        assert!(html.contains("linear-gradient(135deg, #f59e0b 0%, #ef4444 100%)"));
        assert!(!html.contains("{accent_color}"));
    }

    #[test]
    fn test_experience_dates_and_current_position() {
        let mut record = required_only();
        record.experience = vec![
            ExperienceEntry {
                position: "Lead".to_string(),
                company: "Acme".to_string(),
                start_date: "2021-03".to_string(),
                current: true,
                ..Default::default()
            },
            ExperienceEntry {
                position: "Engineer".to_string(),
                company: "Initech".to_string(),
                location: "Austin, TX".to_string(),
                start_date: "2018-01".to_string(),
                end_date: "2021-02".to_string(),
                ..Default::default()
            },
        ];
        let html = render(&record, ThemeId::Minimal);
        assert!(html.contains("2021-03 - Present"));
        assert!(html.contains("2018-01 - 2021-02"));
        assert!(html.contains("Initech \u{2022} Austin, TX"));
        assert!(!html.contains("Acme \u{2022}"));
    }

    #[test]
    fn test_project_links_only_when_present() {
        let mut record = required_only();
        record.projects = vec![
            ProjectEntry {
                name: "Plain".to_string(),
                ..Default::default()
            },
            ProjectEntry {
                name: "Linked".to_string(),
                github_url: Some("https://github.com/ada/engine".to_string()),
                live_url: Some("  ".to_string()),
                ..Default::default()
            },
        ];
        let html = render(&record, ThemeId::Minimal);
        assert_eq!(html.matches("class=\"project-links\"").count(), 1);
        assert!(html.contains("href=\"https://github.com/ada/engine\""));
        assert!(!html.contains("Live Demo"));
    }

    #[test]
    fn test_education_gpa_and_certification_subtitle() {
        let mut record = required_only();
        record.education.push(EducationEntry {
            degree: "BSc Mathematics".to_string(),
            institution: "University of London".to_string(),
            year: "1835".to_string(),
            gpa: Some("4.0".to_string()),
            ..Default::default()
        });
        record.certifications.push(CertificationEntry {
            name: "Analytical Engines".to_string(),
            issuer: "Royal Society".to_string(),
            year: "1843".to_string(),
            credential_url: Some("https://example.com/cred".to_string()),
        });
        let html = render(&record, ThemeId::Minimal);
        assert!(html.contains("GPA: 4.0"));
        assert!(html.contains("Royal Society \u{2022} 1843"));
        assert!(html.contains("View Credential"));
    }

    #[test]
    fn test_render_is_deterministic() {
        let record = required_only();
        assert_eq!(
            render(&record, ThemeId::Modern),
            render(&record, ThemeId::Modern)
        );
    }
}
