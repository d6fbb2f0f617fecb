//! Fixed initial dataset, loaded once per deployment.

use tracing::info;

use crate::errors::AppError;
use crate::models::profile::ProfileInput;
use crate::store::PortfolioStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedOutcome {
    Seeded { skills: usize, projects: usize },
    AlreadySeeded,
}

#[derive(Debug, Clone)]
pub struct SeedSkill {
    pub name: String,
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct SeedProject {
    pub title: String,
    pub description: String,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    /// Linked skills, resolved by name against the seeded skills.
    pub skill_names: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct SeedData {
    pub profile: ProfileInput,
    pub skills: Vec<SeedSkill>,
    pub projects: Vec<SeedProject>,
}

const SKILLS: &[(&str, &str)] = &[
    ("Python", "Advanced"),
    ("FastAPI", "Advanced"),
    ("Flask", "Advanced"),
    ("REST APIs", "Advanced"),
    ("JavaScript", "Advanced"),
    ("HTML/CSS", "Advanced"),
    ("SQL", "Intermediate"),
    ("Git", "Advanced"),
    ("Docker", "Beginner"),
    ("AI / LLM Integration", "Beginner"),
    ("Cybersecurity", "Intermediate"),
];

struct ProjectSpec {
    title: &'static str,
    description: &'static str,
    github_url: Option<&'static str>,
    skills: &'static [&'static str],
}

const PROJECTS: &[ProjectSpec] = &[
    ProjectSpec {
        title: "Intrusion Detection System (IDS)",
        description: "Network-based Intrusion Detection System developed as a cybersecurity project. \
            Implemented packet inspection and rule-based anomaly detection to identify \
            suspicious network behavior. Focused on understanding traffic patterns, \
            false positives, and detection accuracy.",
        github_url: Some("https://github.com/Alagushruthi2618/ML_project"),
        skills: &["Python", "Cybersecurity"],
    },
    ProjectSpec {
        title: "Expense Tracker Application",
        description: "Backend-driven expense tracking application that supports recording, \
            categorizing, and querying user expenses. Designed REST APIs for CRUD \
            operations, handled data persistence with SQL, and implemented basic \
            aggregation queries for expense summaries.",
        github_url: Some("https://github.com/Alagushruthi2618/Expense-Tracker"),
        skills: &["Python", "SQL", "REST APIs"],
    },
    ProjectSpec {
        title: "Wedding Album Web Platform (Plooran)",
        description: "Frontend-focused web platform for managing and showcasing wedding albums. \
            Implemented modular UI components, authentication flows, SEO improvements, \
            and responsive design using JavaScript and Flask-based backend integration.",
        github_url: None,
        skills: &["JavaScript", "Flask", "HTML/CSS", "REST APIs"],
    },
    ProjectSpec {
        title: "Debt Collection Web Agent",
        description: "Chat-based web application for automated debt collection workflows. \
            Worked on frontend-backend integration, UI improvements, chat flow handling, \
            and user interaction logic in a startup environment.",
        github_url: Some("https://github.com/Alagushruthi2618/Debt-Collection-web-Agent"),
        skills: &["JavaScript", "FastAPI", "REST APIs"],
    },
    ProjectSpec {
        title: "AI-Powered Chat & Intent Classification System",
        description: "AI-driven intent classification system built using LLM APIs. Implemented \
            structured prompts, fallback strategies, and backend integration to route \
            user queries and generate contextual responses.",
        github_url: None,
        skills: &["Python", "AI / LLM Integration", "FastAPI"],
    },
    ProjectSpec {
        title: "Personal Portfolio & API Playground",
        description: "Backend REST API exposing personal profile, skills, and projects. \
            Includes database schema design, filtering and search endpoints, \
            health checks, and a minimal frontend client.",
        github_url: None,
        skills: &["Python", "FastAPI", "SQL", "Git"],
    },
];

impl SeedData {
    /// The dataset shipped with the service.
    pub fn fixed() -> Self {
        let profile = ProfileInput {
            name: "Alagu Shruthi".to_string(),
            email: "kralagushruthi@gmail.com".to_string(),
            education: Some("B.Tech in Computer Science and Engineering, NIT Delhi".to_string()),
            bio: Some(
                "Final-year Computer Science student at NIT Delhi with hands-on experience building \
                 production-grade backend APIs and AI-assisted systems. Interned at Plooran, where I \
                 shipped modular frontend features, integrated authentication flows, and worked in a \
                 fast-paced startup environment. Built projects spanning cybersecurity (IDS), \
                 data-driven applications (Expense Tracker), and AI-powered intent classification. \
                 Actively interested in backend engineering, retrieval-based AI systems, and reliable \
                 software design."
                    .to_string(),
            ),
            github: Some("https://github.com/Alagushruthi2618".to_string()),
            linkedin: Some(
                "https://www.linkedin.com/in/alagu-shruthi-karuppan-chetty-30b047299/".to_string(),
            ),
            portfolio: None,
        };

        let skills = SKILLS
            .iter()
            .map(|(name, level)| SeedSkill {
                name: name.to_string(),
                level: level.to_string(),
            })
            .collect();

        let projects = PROJECTS
            .iter()
            .map(|p| SeedProject {
                title: p.title.to_string(),
                description: p.description.to_string(),
                github_url: p.github_url.map(str::to_string),
                live_url: None,
                skill_names: p.skills.iter().map(|s| s.to_string()).collect(),
            })
            .collect();

        SeedData {
            profile,
            skills,
            projects,
        }
    }
}

/// Seeds the store with the fixed dataset unless a profile already exists.
/// Errors are fatal at startup; nothing is written on failure.
pub async fn seed(store: &dyn PortfolioStore) -> Result<SeedOutcome, AppError> {
    let outcome = store.seed(&SeedData::fixed()).await?;
    match &outcome {
        SeedOutcome::Seeded { skills, projects } => {
            info!("Database seeded with profile, {skills} skills and {projects} projects");
        }
        SeedOutcome::AlreadySeeded => info!("Database already seeded, skipping"),
    }
    Ok(outcome)
}
