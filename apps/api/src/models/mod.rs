pub mod portfolio;

pub use portfolio::{
    non_blank, present, CertificationEntry, EducationEntry, ExperienceEntry, PersonalInfo,
    PortfolioRecord, ProjectEntry, Skill, SkillCategory, SkillLevel, ThemeId,
};
