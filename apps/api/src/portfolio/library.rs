//! Content library: static per-profession fact tables used to fill a synthesized portfolio.
//!
//! Data, not logic. Every `Profession` has exactly one table and the lookup is
//! total; unknown labels resolve to the `Professional` table.

use serde::Serialize;

use crate::models::SkillCategory::{self, SoftSkills, Technical, Tools};

// ────────────────────────────────────────────────────────────────────────────
// Profession
// ────────────────────────────────────────────────────────────────────────────

/// The closed set of profession categories the classifier can emit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Profession {
    #[serde(rename = "Software Engineer")]
    SoftwareEngineer,
    #[serde(rename = "Data Scientist")]
    DataScientist,
    #[serde(rename = "UI/UX Designer")]
    UiUxDesigner,
    #[default]
    Professional,
}

impl Profession {
    pub fn label(&self) -> &'static str {
        match self {
            Profession::SoftwareEngineer => "Software Engineer",
            Profession::DataScientist => "Data Scientist",
            Profession::UiUxDesigner => "UI/UX Designer",
            Profession::Professional => "Professional",
        }
    }

    pub fn from_label(label: &str) -> Self {
        match label {
            "Software Engineer" => Profession::SoftwareEngineer,
            "Data Scientist" => Profession::DataScientist,
            "UI/UX Designer" => Profession::UiUxDesigner,
            _ => Profession::Professional,
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Table shapes
// ────────────────────────────────────────────────────────────────────────────

pub struct ExperienceTemplate {
    pub position: &'static str,
    pub company: &'static str,
    pub location: &'static str,
    pub start_date: &'static str,
    pub end_date: &'static str,
    pub current: bool,
    pub description: &'static str,
}

pub struct ProjectTemplate {
    pub name: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    /// Showcase link; empty when the sample project has none.
    pub link: &'static str,
}

pub struct ContentProfile {
    pub profession: Profession,
    pub skills: &'static [(&'static str, SkillCategory)],
    pub experience: &'static [ExperienceTemplate],
    pub projects: &'static [ProjectTemplate],
    /// Contains a `{years}` placeholder.
    pub bio_template: &'static str,
    pub field_of_study: &'static str,
    pub certification_name: &'static str,
    pub certification_issuer: &'static str,
}

impl ContentProfile {
    pub fn bio(&self, years: &str) -> String {
        self.bio_template.replace("{years}", years)
    }
}

/// Returns the content table for a profession.
pub fn lookup(profession: Profession) -> &'static ContentProfile {
    match profession {
        Profession::SoftwareEngineer => &SOFTWARE_ENGINEER,
        Profession::DataScientist => &DATA_SCIENTIST,
        Profession::UiUxDesigner => &UI_UX_DESIGNER,
        Profession::Professional => &PROFESSIONAL,
    }
}

/// Label-keyed lookup; anything unrecognized gets the Professional table.
pub fn lookup_label(label: &str) -> &'static ContentProfile {
    lookup(Profession::from_label(label))
}

// ────────────────────────────────────────────────────────────────────────────
// Tables
// ────────────────────────────────────────────────────────────────────────────

static SOFTWARE_ENGINEER: ContentProfile = ContentProfile {
    profession: Profession::SoftwareEngineer,
    skills: &[
        ("JavaScript", Technical),
        ("React", Technical),
        ("Node.js", Technical),
        ("Python", Technical),
        ("TypeScript", Technical),
        ("Docker", Tools),
        ("AWS", Tools),
        ("Git", Tools),
        ("MongoDB", Technical),
        ("REST APIs", Technical),
        ("GraphQL", Technical),
        ("CI/CD", Tools),
    ],
    experience: &[
        ExperienceTemplate {
            position: "Senior Software Engineer",
            company: "Tech Innovations Inc.",
            location: "San Francisco, CA",
            start_date: "2021-03",
            end_date: "",
            current: true,
            description: "Led development of scalable microservices architecture serving 1M+ users. \
                Implemented CI/CD pipelines reducing deployment time by 60%. \
                Mentored junior developers and conducted code reviews.",
        },
        ExperienceTemplate {
            position: "Software Engineer",
            company: "Digital Solutions Ltd.",
            location: "Remote",
            start_date: "2019-01",
            end_date: "2021-02",
            current: false,
            description: "Developed full-stack web applications using React and Node.js. \
                Collaborated with cross-functional teams to deliver features on time. \
                Optimized database queries and improved application performance.",
        },
    ],
    projects: &[
        ProjectTemplate {
            name: "E-Commerce Platform",
            description: "Built a full-featured e-commerce platform with payment integration, \
                inventory management, and admin dashboard. \
                Implemented responsive design and optimized for performance.",
            technologies: &["React", "Node.js", "MongoDB", "Stripe", "AWS S3"],
            link: "https://github.com/yourusername/ecommerce",
        },
        ProjectTemplate {
            name: "Real-Time Analytics Dashboard",
            description: "Created a real-time analytics dashboard for monitoring application metrics \
                and user behavior. Implemented WebSocket connections for live data updates \
                and interactive visualizations.",
            technologies: &["React", "D3.js", "WebSocket", "Redis", "Express"],
            link: "https://github.com/yourusername/analytics",
        },
        ProjectTemplate {
            name: "AI-Powered Chatbot",
            description: "Developed an intelligent chatbot using natural language processing to \
                provide customer support. Integrated with company knowledge base and ticketing system.",
            technologies: &["Python", "TensorFlow", "Flask", "React", "Docker"],
            link: "https://github.com/yourusername/chatbot",
        },
    ],
    bio_template: "Passionate Software Engineer with {years} years of experience building scalable \
        web applications. Expert in modern JavaScript frameworks and cloud technologies. \
        Dedicated to writing clean, maintainable code and delivering exceptional user experiences. \
        Proven track record of leading successful projects and mentoring junior developers.",
    field_of_study: "Computer Science",
    certification_name: "AWS Certified Solutions Architect",
    certification_issuer: "Amazon Web Services",
};

static DATA_SCIENTIST: ContentProfile = ContentProfile {
    profession: Profession::DataScientist,
    skills: &[
        ("Python", Technical),
        ("R", Technical),
        ("SQL", Technical),
        ("Machine Learning", Technical),
        ("TensorFlow", Tools),
        ("Pandas", Tools),
        ("NumPy", Tools),
        ("Tableau", Tools),
        ("Power BI", Tools),
        ("Statistics", Technical),
        ("Data Visualization", Technical),
        ("Big Data", Technical),
    ],
    experience: &[
        ExperienceTemplate {
            position: "Senior Data Scientist",
            company: "Analytics Pro",
            location: "New York, NY",
            start_date: "2020-06",
            end_date: "",
            current: true,
            description: "Lead data science initiatives and develop predictive models. \
                Built machine learning pipelines processing millions of records daily. \
                Presented insights to C-level executives.",
        },
        ExperienceTemplate {
            position: "Data Analyst",
            company: "Business Intelligence Corp",
            location: "Boston, MA",
            start_date: "2018-03",
            end_date: "2020-05",
            current: false,
            description: "Analyzed business data to identify trends and opportunities. \
                Created dashboards and reports for stakeholders. \
                Performed A/B testing and statistical analysis.",
        },
    ],
    projects: &[
        ProjectTemplate {
            name: "Customer Churn Prediction",
            description: "Built machine learning model to predict customer churn with 90% accuracy. \
                Implemented feature engineering and hyperparameter tuning to optimize model performance.",
            technologies: &["Python", "Scikit-learn", "XGBoost", "Pandas", "Jupyter"],
            link: "https://github.com/yourusername/churn-prediction",
        },
        ProjectTemplate {
            name: "Sales Forecasting System",
            description: "Developed time series forecasting model for sales prediction. \
                Integrated with business intelligence tools for automated reporting and visualization.",
            technologies: &["Python", "Prophet", "LSTM", "Tableau", "SQL"],
            link: "https://github.com/yourusername/sales-forecast",
        },
        ProjectTemplate {
            name: "Sentiment Analysis Tool",
            description: "Created NLP-based sentiment analysis tool for social media monitoring. \
                Processed millions of tweets and reviews to extract customer insights.",
            technologies: &["Python", "NLTK", "spaCy", "MongoDB", "Flask"],
            link: "https://github.com/yourusername/sentiment-analysis",
        },
    ],
    bio_template: "Results-driven Data Scientist with {years} years of experience in machine \
        learning and data analytics. Skilled in extracting actionable insights from complex \
        datasets and building predictive models. Strong background in statistical analysis and \
        data visualization. Passionate about using data to solve real-world business problems.",
    field_of_study: "Data Science",
    certification_name: "Google Cloud Professional Data Engineer",
    certification_issuer: "Google Cloud",
};

static UI_UX_DESIGNER: ContentProfile = ContentProfile {
    profession: Profession::UiUxDesigner,
    skills: &[
        ("Figma", Tools),
        ("Adobe XD", Tools),
        ("Sketch", Tools),
        ("Photoshop", Tools),
        ("Illustrator", Tools),
        ("User Research", Technical),
        ("Wireframing", Technical),
        ("Prototyping", Technical),
        ("Design Systems", Technical),
        ("HTML/CSS", Technical),
        ("React", Technical),
        ("Accessibility", Technical),
    ],
    experience: &[
        ExperienceTemplate {
            position: "Senior UI/UX Designer",
            company: "Creative Studio",
            location: "Los Angeles, CA",
            start_date: "2020-01",
            end_date: "",
            current: true,
            description: "Lead design projects from concept to delivery. \
                Conduct user research and usability testing. \
                Create design systems and component libraries. \
                Collaborate with developers and product managers.",
        },
        ExperienceTemplate {
            position: "UI Designer",
            company: "Digital Agency",
            location: "Remote",
            start_date: "2018-06",
            end_date: "2019-12",
            current: false,
            description: "Designed user interfaces for web and mobile applications. \
                Created mockups, prototypes, and design specifications. \
                Worked closely with clients to understand requirements.",
        },
    ],
    projects: &[
        ProjectTemplate {
            name: "Mobile Banking App Redesign",
            description: "Complete redesign of mobile banking application focusing on user \
                experience and accessibility. Conducted user research and iterative testing to \
                validate design decisions.",
            technologies: &["Figma", "Principle", "User Testing", "Design System"],
            link: "https://dribbble.com/yourusername/banking-app",
        },
        ProjectTemplate {
            name: "E-Learning Platform UI",
            description: "Designed intuitive interface for online learning platform. \
                Created interactive prototypes and design system to ensure consistency across all features.",
            technologies: &["Adobe XD", "InVision", "Illustrator"],
            link: "https://behance.net/yourusername/elearning",
        },
        ProjectTemplate {
            name: "Design System Library",
            description: "Built comprehensive design system with reusable components, patterns, \
                and guidelines. Improved design-to-development workflow efficiency.",
            technologies: &["Figma", "Storybook", "React", "Styled Components"],
            link: "https://github.com/yourusername/design-system",
        },
    ],
    bio_template: "Creative UI/UX Designer with {years} years of experience designing intuitive \
        and beautiful digital experiences. Expert in user research, prototyping, and design \
        systems. Passionate about creating accessible, user-centered designs that drive business \
        results. Strong collaboration skills working with cross-functional teams.",
    field_of_study: "Design & Interaction",
    certification_name: "Google UX Design Professional Certificate",
    certification_issuer: "Google",
};

static PROFESSIONAL: ContentProfile = ContentProfile {
    profession: Profession::Professional,
    skills: &[
        ("Project Management", SoftSkills),
        ("Communication", SoftSkills),
        ("Leadership", SoftSkills),
        ("Problem Solving", SoftSkills),
        ("Team Collaboration", SoftSkills),
        ("Strategic Planning", SoftSkills),
        ("Data Analysis", Technical),
        ("Microsoft Office", Tools),
        ("Agile", Technical),
        ("Budgeting", Technical),
    ],
    experience: &[ExperienceTemplate {
        position: "Senior Professional",
        company: "Industry Leader Inc.",
        location: "Your City",
        start_date: "2019-01",
        end_date: "",
        current: true,
        description: "Lead key initiatives and manage cross-functional teams. \
            Drive strategic projects and deliver results aligned with business objectives. \
            Mentor team members and foster collaboration.",
    }],
    projects: &[ProjectTemplate {
        name: "Strategic Initiative Project",
        description: "Led strategic initiative that transformed business processes and improved \
            operational efficiency. Coordinated with multiple stakeholders and managed project \
            timeline and budget.",
        technologies: &["Project Management", "Agile", "Data Analysis"],
        link: "",
    }],
    bio_template: "Experienced professional with {years} years in the industry. Proven track \
        record of delivering high-quality results and driving business success. Strong leadership \
        and communication skills. Passionate about continuous learning and professional development.",
    field_of_study: "Business Administration",
    certification_name: "Project Management Professional (PMP)",
    certification_issuer: "Project Management Institute",
};
