use std::collections::HashSet;

use chrono::{DateTime, Datelike};
use serde::Serialize;
use thiserror::Error;

use crate::icon::Icon;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SectionId {
    #[default]
    Home,
    About,
    Skills,
    Projects,
    Experience,
    Contact,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        Self::Home,
        Self::About,
        Self::Skills,
        Self::Projects,
        Self::Experience,
        Self::Contact,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::About => "about",
            Self::Skills => "skills",
            Self::Projects => "projects",
            Self::Experience => "experience",
            Self::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavItem {
    pub id: SectionId,
    pub label: &'static str,
    pub icon: Icon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_url: &'static str,
    pub repo_url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectLink {
    pub label: &'static str,
    pub icon: Icon,
    pub url: &'static str,
}

impl Project {
    pub fn links(&self) -> [ProjectLink; 2] {
        [
            ProjectLink {
                label: "Live Demo",
                icon: Icon::ExternalLink,
                url: self.demo_url,
            },
            ProjectLink {
                label: "Source",
                icon: Icon::Github,
                url: self.repo_url,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExperienceItem {
    pub title: &'static str,
    pub company: &'static str,
    pub duration: &'static str,
    pub responsibilities: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EducationItem {
    pub degree: &'static str,
    pub institution: &'static str,
    pub duration: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    pub label: &'static str,
    pub icon: Icon,
    pub url: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub summary: &'static str,
    pub email: &'static str,
    pub location: &'static str,
    pub avatar: &'static str,
    pub resume: &'static str,
}

impl Profile {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }

    pub fn resume_file_name(&self) -> &'static str {
        self.resume.rsplit('/').next().unwrap_or(self.resume)
    }
}

pub const FAVICON: &str = "/favicon.svg";

pub const PROFILE: Profile = Profile {
    name: "Jordan Avery",
    headline: "Full-Stack Software Engineer",
    summary: "I build fast, accessible web applications and the services behind them. \
        Most days that means Rust and TypeScript, a healthy amount of SQL, \
        and a lot of care for the people who end up using the thing.",
    email: "hello@jordanavery.dev",
    location: "Portland, OR",
    avatar: "/images/profile.svg",
    resume: "/JordanAveryResume.pdf",
};

pub static NAV_ITEMS: [NavItem; 6] = [
    NavItem {
        id: SectionId::Home,
        label: "Home",
        icon: Icon::Home,
    },
    NavItem {
        id: SectionId::About,
        label: "About",
        icon: Icon::User,
    },
    NavItem {
        id: SectionId::Skills,
        label: "Skills",
        icon: Icon::Code,
    },
    NavItem {
        id: SectionId::Projects,
        label: "Projects",
        icon: Icon::Folder,
    },
    NavItem {
        id: SectionId::Experience,
        label: "Experience",
        icon: Icon::Briefcase,
    },
    NavItem {
        id: SectionId::Contact,
        label: "Contact",
        icon: Icon::Email,
    },
];

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Trailhead",
        description: "Offline-first hiking planner that syncs routes, weather windows and \
            permit deadlines across devices.",
        image: "/images/projects/trailhead.svg",
        technologies: &["Rust", "Leptos", "SQLite", "Tailwind"],
        demo_url: "https://trailhead.jordanavery.dev",
        repo_url: "https://github.com/jordanavery/trailhead",
    },
    Project {
        title: "Ledgerly",
        description: "Shared household budgeting with receipt scanning and monthly \
            reports that are actually readable.",
        image: "/images/projects/ledgerly.svg",
        technologies: &["TypeScript", "React", "PostgreSQL", "Node.js"],
        demo_url: "https://ledgerly.jordanavery.dev",
        repo_url: "https://github.com/jordanavery/ledgerly",
    },
    Project {
        title: "Packet Garden",
        description: "Network traffic visualizer that turns live packet captures into a \
            growing, explorable graph.",
        image: "/images/projects/packet-garden.svg",
        technologies: &["Rust", "WebAssembly", "WebGL"],
        demo_url: "https://packet-garden.jordanavery.dev",
        repo_url: "https://github.com/jordanavery/packet-garden",
    },
    Project {
        title: "Quill",
        description: "Markdown-native note taking with bidirectional links and instant \
            full-text search.",
        image: "/images/projects/quill.svg",
        technologies: &["Go", "Svelte", "Bleve"],
        demo_url: "https://quill.jordanavery.dev",
        repo_url: "https://github.com/jordanavery/quill",
    },
];

pub const EXPERIENCE: &[ExperienceItem] = &[
    ExperienceItem {
        title: "Senior Software Engineer",
        company: "Northwind Analytics",
        duration: "2021 - Present",
        responsibilities: &[
            "Lead the rewrite of the ingestion pipeline in Rust, cutting p99 latency by 70%",
            "Own the design system shared by four product teams",
            "Mentor three engineers through their first on-call rotations",
        ],
    },
    ExperienceItem {
        title: "Software Engineer",
        company: "Bluebird Health",
        duration: "2018 - 2021",
        responsibilities: &[
            "Built the patient scheduling portal used by 200+ clinics",
            "Introduced end-to-end testing and took flaky builds from weekly to rare",
            "Migrated the monolith's reporting module to a standalone service",
        ],
    },
    ExperienceItem {
        title: "Web Developer Intern",
        company: "Cascade Creative",
        duration: "2017 - 2018",
        responsibilities: &[
            "Shipped marketing sites for a dozen local businesses",
            "Automated image optimization in the agency's build process",
        ],
    },
];

pub const EDUCATION: &[EducationItem] = &[
    EducationItem {
        degree: "B.S. Computer Science",
        institution: "Oregon State University",
        duration: "2014 - 2018",
        description: "Focus on distributed systems and human-computer interaction. \
            Capstone: a real-time collaborative whiteboard.",
    },
    EducationItem {
        degree: "Full-Stack Web Certificate",
        institution: "Portland Community College",
        duration: "2013 - 2014",
        description: "Evening program covering HTTP, relational databases and \
            modern JavaScript.",
    },
];

pub const SKILLS: &[SkillGroup] = &[
    SkillGroup {
        category: "Languages",
        skills: &["Rust", "TypeScript", "Go", "Python", "SQL"],
    },
    SkillGroup {
        category: "Frontend",
        skills: &["Leptos", "React", "Svelte", "Tailwind", "WebAssembly"],
    },
    SkillGroup {
        category: "Backend",
        skills: &["Axum", "Node.js", "PostgreSQL", "Redis", "gRPC"],
    },
    SkillGroup {
        category: "Tooling",
        skills: &["Docker", "Terraform", "GitHub Actions", "Linux", "AWS"],
    },
];

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "GitHub",
        icon: Icon::Github,
        url: "https://github.com/jordanavery",
    },
    SocialLink {
        label: "LinkedIn",
        icon: Icon::Linkedin,
        url: "https://linkedin.com/in/jordanavery",
    },
    SocialLink {
        label: "Email",
        icon: Icon::Email,
        url: "mailto:hello@jordanavery.dev",
    },
];

/// schema.org `Person` record embedded in the page head.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PersonSchema<'a> {
    #[serde(rename = "@context")]
    context: &'a str,
    #[serde(rename = "@type")]
    kind: &'a str,
    name: &'a str,
    job_title: &'a str,
    email: String,
    address: &'a str,
    same_as: Vec<&'a str>,
    knows_about: Vec<&'a str>,
}

pub fn person_json_ld() -> Result<String, serde_json::Error> {
    let schema = PersonSchema {
        context: "https://schema.org",
        kind: "Person",
        name: PROFILE.name,
        job_title: PROFILE.headline,
        email: PROFILE.mailto(),
        address: PROFILE.location,
        same_as: SOCIAL_LINKS
            .iter()
            .filter(|l| l.url.starts_with("http"))
            .map(|l| l.url)
            .collect(),
        knows_about: SKILLS.iter().flat_map(|g| g.skills.iter().copied()).collect(),
    };
    serde_json::to_string(&schema)
}

pub fn build_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

/// Site-root paths of every static file the page links to.
pub fn asset_paths() -> Vec<&'static str> {
    let mut paths = vec![FAVICON, PROFILE.avatar, PROFILE.resume];
    paths.extend(PROJECTS.iter().map(|p| p.image));
    paths
}

pub fn nav_item(id: SectionId) -> Option<&'static NavItem> {
    NAV_ITEMS.iter().find(|n| n.id == id)
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PortfolioError {
    #[error("{table}: {field} is empty")]
    EmptyField {
        table: &'static str,
        field: &'static str,
    },
    #[error("{table}: {url} is not an absolute link")]
    BadUrl {
        table: &'static str,
        url: &'static str,
    },
    #[error("navigation lists section `{0}` more than once")]
    DuplicateNav(&'static str),
    #[error("navigation is missing section `{0}`")]
    MissingNav(&'static str),
    #[error("project `{0}` lists no technologies")]
    NoTechnologies(&'static str),
}

fn require(table: &'static str, field: &'static str, value: &str) -> Result<(), PortfolioError> {
    if value.trim().is_empty() {
        return Err(PortfolioError::EmptyField { table, field });
    }
    Ok(())
}

const WEB_SCHEMES: &[&str] = &["https://", "http://"];
const CONTACT_SCHEMES: &[&str] = &["https://", "http://", "mailto:"];

fn require_url(
    table: &'static str,
    url: &'static str,
    schemes: &[&str],
) -> Result<(), PortfolioError> {
    let ok = schemes
        .iter()
        .any(|scheme| url.len() > scheme.len() && url.starts_with(scheme));
    if ok {
        Ok(())
    } else {
        Err(PortfolioError::BadUrl { table, url })
    }
}

fn validate_nav(items: &[NavItem]) -> Result<(), PortfolioError> {
    let mut seen = HashSet::new();
    for item in items {
        require("nav", "label", item.label)?;
        if !seen.insert(item.id) {
            return Err(PortfolioError::DuplicateNav(item.id.id()));
        }
    }
    match SectionId::ALL.into_iter().find(|s| !seen.contains(s)) {
        Some(missing) => Err(PortfolioError::MissingNav(missing.id())),
        None => Ok(()),
    }
}

fn validate_projects(projects: &[Project]) -> Result<(), PortfolioError> {
    for p in projects {
        require("projects", "title", p.title)?;
        require("projects", "description", p.description)?;
        require("projects", "image", p.image)?;
        if p.technologies.is_empty() {
            return Err(PortfolioError::NoTechnologies(p.title));
        }
        for tech in p.technologies {
            require("projects", "technology", tech)?;
        }
        require_url("projects", p.demo_url, WEB_SCHEMES)?;
        require_url("projects", p.repo_url, WEB_SCHEMES)?;
    }
    Ok(())
}

fn validate_experience(items: &[ExperienceItem]) -> Result<(), PortfolioError> {
    for e in items {
        require("experience", "title", e.title)?;
        require("experience", "company", e.company)?;
        require("experience", "duration", e.duration)?;
        for r in e.responsibilities {
            require("experience", "responsibility", r)?;
        }
    }
    Ok(())
}

fn validate_education(items: &[EducationItem]) -> Result<(), PortfolioError> {
    for e in items {
        require("education", "degree", e.degree)?;
        require("education", "institution", e.institution)?;
        require("education", "duration", e.duration)?;
        require("education", "description", e.description)?;
    }
    Ok(())
}

pub fn validate() -> Result<(), PortfolioError> {
    require("profile", "name", PROFILE.name)?;
    require("profile", "email", PROFILE.email)?;
    require("profile", "resume", PROFILE.resume)?;
    validate_nav(&NAV_ITEMS)?;
    validate_projects(PROJECTS)?;
    validate_experience(EXPERIENCE)?;
    validate_education(EDUCATION)?;
    for group in SKILLS {
        require("skills", "category", group.category)?;
    }
    for link in SOCIAL_LINKS {
        require("social", "label", link.label)?;
        require_url("social", link.url, CONTACT_SCHEMES)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn static_tables_are_valid() {
        assert_eq!(validate(), Ok(()));
    }

    #[test]
    fn section_ids_round_trip_in_document_order() {
        let ids = SectionId::ALL.map(SectionId::id);
        assert_eq!(
            ids,
            ["home", "about", "skills", "projects", "experience", "contact"]
        );
        for s in SectionId::ALL {
            assert_eq!(SectionId::from_id(s.id()), Some(s));
        }
        assert_eq!(SectionId::from_id("blog"), None);
        assert_eq!(SectionId::Projects.href(), "#projects");
    }

    #[test]
    fn every_nav_item_targets_its_own_section() {
        for (item, section) in NAV_ITEMS.iter().zip(SectionId::ALL) {
            assert_eq!(item.id, section);
            assert_eq!(nav_item(section), Some(item));
        }
    }

    #[test]
    fn project_links_are_demo_then_repo() {
        let p = &PROJECTS[0];
        let [demo, repo] = p.links();
        assert_eq!(demo.url, p.demo_url);
        assert_eq!(repo.url, p.repo_url);
    }

    #[test]
    fn profile_links() {
        assert_eq!(PROFILE.mailto(), "mailto:hello@jordanavery.dev");
        assert_eq!(PROFILE.resume_file_name(), "JordanAveryResume.pdf");
    }

    #[test]
    fn duplicate_nav_is_rejected() {
        let mut items = NAV_ITEMS;
        items[5].id = SectionId::Home;
        assert_eq!(
            validate_nav(&items),
            Err(PortfolioError::DuplicateNav("home"))
        );
        assert_eq!(
            validate_nav(&NAV_ITEMS[..5]),
            Err(PortfolioError::MissingNav("contact"))
        );
    }

    #[test]
    fn bad_project_rows_are_rejected() {
        let mut p = PROJECTS[0];
        p.repo_url = "github.com/jordanavery/trailhead";
        assert!(matches!(
            validate_projects(&[p]),
            Err(PortfolioError::BadUrl { .. })
        ));

        let mut p = PROJECTS[0];
        p.technologies = &[];
        assert_eq!(
            validate_projects(&[p]),
            Err(PortfolioError::NoTechnologies("Trailhead"))
        );

        let mut p = PROJECTS[0];
        p.title = "  ";
        assert_eq!(
            validate_projects(&[p]),
            Err(PortfolioError::EmptyField {
                table: "projects",
                field: "title"
            })
        );
    }

    #[test]
    fn person_schema_lists_profiles_but_not_mailto() {
        let json = person_json_ld().expect("schema should serialize");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["@type"], "Person");
        assert_eq!(value["name"], PROFILE.name);
        assert_eq!(value["jobTitle"], PROFILE.headline);
        let same_as = value["sameAs"].as_array().expect("sameAs array");
        assert_eq!(same_as.len(), 2);
        assert!(same_as.iter().all(|v| v.as_str().is_some_and(|s| s.starts_with("https://"))));
    }

    #[test]
    fn build_year_comes_from_build_script() {
        let year = build_year().expect("BUILD_TIME should be RFC 3339");
        assert!(year >= 2024);
    }

    #[test]
    fn bare_scheme_is_not_a_link() {
        assert!(require_url("social", "https://", CONTACT_SCHEMES).is_err());
        assert!(require_url("social", "mailto:a@b.c", CONTACT_SCHEMES).is_ok());
    }

    #[test]
    fn project_links_must_be_web_links() {
        let mut p = PROJECTS[0];
        p.demo_url = "mailto:hello@jordanavery.dev";
        assert_eq!(
            validate_projects(&[p]),
            Err(PortfolioError::BadUrl {
                table: "projects",
                url: "mailto:hello@jordanavery.dev"
            })
        );
    }

    #[test]
    fn referenced_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        for asset in asset_paths() {
            let file = public.join(asset.trim_start_matches('/'));
            assert!(file.is_file(), "missing static asset {asset}");
        }
    }
}
