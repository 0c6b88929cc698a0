//! Component-template renderer: a standalone React module for a portfolio.
//!
//! The record and the theme tokens are inlined as JSON literals; the scaffold
//! repeats the document renderer's section order and omission rules with
//! runtime conditionals. The output is never executed here.

use crate::models::{PortfolioRecord, ThemeId};

const TEMPLATE: &str = r#"import React from 'react';

const portfolioData = {portfolio_json};

const theme = {theme_json};

const card = {
  background: 'white',
  padding: '1.5rem',
  borderRadius: '8px',
  boxShadow: '0 2px 4px rgba(0,0,0,0.1)',
  marginBottom: '1.5rem',
};

const heading = {
  fontSize: '2rem',
  marginBottom: '1.5rem',
  color: theme.headingColor,
  borderBottom: `3px solid ${theme.accentColor}`,
  paddingBottom: '0.5rem',
};

const Portfolio = () => {
  const { personalInfo } = portfolioData;
  const experience = portfolioData.experience || [];
  const projects = portfolioData.projects || [];
  const skills = portfolioData.skills || [];
  const education = portfolioData.education || [];
  const certifications = portfolioData.certifications || [];

  return (
    <div style={{ minHeight: '100vh', background: theme.background }}>
      {/* Header */}
      <header
        style={{
          background: theme.headerBackground,
          color: theme.headerText,
          padding: '4rem 1rem',
          textAlign: 'center',
        }}
      >
        <h1 style={{ fontSize: '3rem', fontWeight: 700, marginBottom: '0.5rem' }}>
          {personalInfo.fullName}
        </h1>
        <p style={{ fontSize: '1.5rem', marginBottom: '1.5rem' }}>{personalInfo.title}</p>
        <div style={{ display: 'flex', flexWrap: 'wrap', justifyContent: 'center', gap: '1.5rem' }}>
          {personalInfo.email && <span>✉️ {personalInfo.email}</span>}
          {personalInfo.phone && <span>📱 {personalInfo.phone}</span>}
          {personalInfo.location && <span>📍 {personalInfo.location}</span>}
          {personalInfo.website && (
            <a href={personalInfo.website} target="_blank" rel="noopener noreferrer" style={{ color: theme.linkColor }}>
              🌐 Website
            </a>
          )}
          {personalInfo.linkedin && (
            <a href={personalInfo.linkedin} target="_blank" rel="noopener noreferrer" style={{ color: theme.linkColor }}>
              💼 LinkedIn
            </a>
          )}
          {personalInfo.github && (
            <a href={personalInfo.github} target="_blank" rel="noopener noreferrer" style={{ color: theme.linkColor }}>
              💻 GitHub
            </a>
          )}
          {personalInfo.twitter && (
            <a href={personalInfo.twitter} target="_blank" rel="noopener noreferrer" style={{ color: theme.linkColor }}>
              🐦 Twitter
            </a>
          )}
        </div>
      </header>

      <div style={{ maxWidth: '1200px', margin: '0 auto', padding: '3rem 1rem' }}>
        {/* About Me */}
        {personalInfo.bio && (
          <section style={{ marginBottom: '3rem' }}>
            <h2 style={heading}>About Me</h2>
            <p style={{ fontSize: '1.1rem', lineHeight: 1.8, color: '#555' }}>{personalInfo.bio}</p>
          </section>
        )}

        {/* Experience */}
        {experience.length > 0 && (
          <section style={{ marginBottom: '3rem' }}>
            <h2 style={heading}>Experience</h2>
            {experience.map((exp, index) => (
              <div key={index} style={card}>
                <div style={{ display: 'flex', justifyContent: 'space-between' }}>
                  <div>
                    <h3 style={{ color: theme.headingColor }}>{exp.position}</h3>
                    <p style={{ color: '#666' }}>
                      {exp.company}
                      {exp.location && ` • ${exp.location}`}
                    </p>
                  </div>
                  <span style={{ color: '#888' }}>
                    {exp.startDate} - {exp.current || !exp.endDate ? 'Present' : exp.endDate}
                  </span>
                </div>
                {exp.description && <p>{exp.description}</p>}
              </div>
            ))}
          </section>
        )}

        {/* Projects */}
        {projects.length > 0 && (
          <section style={{ marginBottom: '3rem' }}>
            <h2 style={heading}>Projects</h2>
            {projects.map((project, index) => (
              <div key={index} style={card}>
                <h3 style={{ color: theme.headingColor }}>{project.name}</h3>
                {project.description && <p>{project.description}</p>}
                {project.technologies && (
                  <p>
                    <strong>Technologies:</strong> {project.technologies}
                  </p>
                )}
                {(project.liveUrl || project.githubUrl) && (
                  <div style={{ display: 'flex', gap: '1rem', marginTop: '1rem' }}>
                    {project.liveUrl && (
                      <a href={project.liveUrl} target="_blank" rel="noopener noreferrer" style={{ color: theme.linkColor }}>
                        Live Demo →
                      </a>
                    )}
                    {project.githubUrl && (
                      <a href={project.githubUrl} target="_blank" rel="noopener noreferrer" style={{ color: theme.linkColor }}>
                        GitHub →
                      </a>
                    )}
                  </div>
                )}
              </div>
            ))}
          </section>
        )}

        {/* Skills */}
        {skills.length > 0 && (
          <section style={{ marginBottom: '3rem' }}>
            <h2 style={heading}>Skills</h2>
            <div style={{ display: 'flex', flexWrap: 'wrap', gap: '0.75rem' }}>
              {skills.map((skill, index) => (
                <span
                  key={index}
                  style={{
                    background: theme.skillBackground,
                    color: theme.skillText,
                    padding: '0.5rem 1rem',
                    borderRadius: '9999px',
                    fontWeight: 500,
                  }}
                >
                  {skill.name}
                </span>
              ))}
            </div>
          </section>
        )}

        {/* Education */}
        {education.length > 0 && (
          <section style={{ marginBottom: '3rem' }}>
            <h2 style={heading}>Education</h2>
            {education.map((edu, index) => (
              <div key={index} style={card}>
                <div style={{ display: 'flex', justifyContent: 'space-between' }}>
                  <div>
                    <h3 style={{ color: theme.headingColor }}>{edu.degree}</h3>
                    <p style={{ color: '#666' }}>
                      {edu.institution}
                      {edu.location && ` • ${edu.location}`}
                    </p>
                    {edu.gpa && <p style={{ color: '#666' }}>GPA: {edu.gpa}</p>}
                  </div>
                  {edu.year && <span style={{ color: '#888' }}>{edu.year}</span>}
                </div>
              </div>
            ))}
          </section>
        )}

        {/* Certifications */}
        {certifications.length > 0 && (
          <section style={{ marginBottom: '3rem' }}>
            <h2 style={heading}>Certifications</h2>
            {certifications.map((cert, index) => (
              <div key={index} style={card}>
                <h3 style={{ color: theme.headingColor }}>{cert.name}</h3>
                {(cert.issuer || cert.year) && (
                  <p style={{ color: '#666' }}>
                    {[cert.issuer, cert.year].filter(Boolean).join(' • ')}
                  </p>
                )}
                {cert.credentialUrl && (
                  <a href={cert.credentialUrl} target="_blank" rel="noopener noreferrer" style={{ color: theme.linkColor }}>
                    View Credential →
                  </a>
                )}
              </div>
            ))}
          </section>
        )}
      </div>
    </div>
  );
};

export default Portfolio;
"#;

/// Renders the record as a React component module.
pub fn render(record: &PortfolioRecord, theme: ThemeId) -> Result<String, serde_json::Error> {
    let theme_json = serde_json::to_string_pretty(theme.tokens())?;
    let portfolio_json = serde_json::to_string_pretty(record)?;

    // Theme first: record text may itself contain the placeholder tokens.
    Ok(TEMPLATE
        .replace("{theme_json}", &theme_json)
        .replace("{portfolio_json}", &portfolio_json))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ProjectEntry, Skill};

    fn sample() -> PortfolioRecord {
        let mut record = PortfolioRecord::default();
        record.personal_info.full_name = "Linus Example".to_string();
        record.personal_info.title = "Kernel Hacker".to_string();
        record.personal_info.email = "linus@example.com".to_string();
        record.projects.push(ProjectEntry {
            name: "{theme_json} & <b>friends</b>".to_string(),
            technologies: "C, Make".to_string(),
            ..Default::default()
        });
        record.skills.push(Skill {
            name: "C".to_string(),
            ..Default::default()
        });
        record
    }

    fn embedded_record(source: &str) -> PortfolioRecord {
        let start = source.find("const portfolioData = ").unwrap() + "const portfolioData = ".len();
        let end = source.find(";\n\nconst theme = ").unwrap();
        serde_json::from_str(&source[start..end]).unwrap()
    }

    #[test]
    fn test_record_is_embedded_verbatim() {
        let record = sample();
        let source = render(&record, ThemeId::Minimal).unwrap();
        assert_eq!(embedded_record(&source), record);
        assert!(source.contains("\"fullName\": \"Linus Example\""));
    }

    #[test]
    fn test_placeholder_text_in_record_is_not_substituted() {
        let source = render(&sample(), ThemeId::Minimal).unwrap();
        assert!(source.contains("\"name\": \"{theme_json} & <b>friends</b>\""));
        assert!(!source.contains("const theme = {theme_json}"));
    }

    #[test]
    fn test_theme_tokens_are_embedded() {
        let source = render(&sample(), ThemeId::Modern).unwrap();
        assert!(source.contains("\"skillText\": \"#6d28d9\""));
        assert!(source.contains("\"headerBackground\": \"linear-gradient(135deg, #667eea 0%, #764ba2 100%)\""));
    }

    #[test]
    fn test_scaffold_keeps_section_order() {
        let source = render(&sample(), ThemeId::Minimal).unwrap();
        let positions: Vec<usize> = [
            "About Me</h2>",
            "Experience</h2>",
            "Projects</h2>",
            "Skills</h2>",
            "Education</h2>",
            "Certifications</h2>",
        ]
        .iter()
        .map(|h| source.find(h).unwrap())
        .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
        assert!(source.trim_end().ends_with("export default Portfolio;"));
    }
}
