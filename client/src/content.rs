//! Static portfolio content rendered by the home page.

#[cfg(test)]
#[path = "content_test.rs"]
mod content_test;

/// Phrases cycled by the typed-text banner.
pub const BANNER_PHRASES: &[&str] = &[
    "Hi, I'm Sachin",
    "Java Backend Developer",
    "Spring Boot Enthusiast",
    "DSA Practitioner",
];

/// A page section that has a navigation entry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavEntry {
    pub id: &'static str,
    pub label: &'static str,
}

/// Sections in document order.
pub const NAV_ENTRIES: &[NavEntry] = &[
    NavEntry { id: "home", label: "Home" },
    NavEntry { id: "about", label: "About" },
    NavEntry { id: "skills", label: "Skills" },
    NavEntry { id: "projects", label: "Projects" },
    NavEntry { id: "experience", label: "Experience" },
    NavEntry { id: "education", label: "Education" },
    NavEntry { id: "contact", label: "Contact" },
];

/// Section ids in document order, as measured by the scroll tracker.
#[must_use]
pub fn section_ids() -> Vec<&'static str> {
    NAV_ENTRIES.iter().map(|entry| entry.id).collect()
}

#[derive(Clone, Copy, Debug)]
pub struct SkillCategory {
    pub title: &'static str,
    pub skills: &'static [Skill],
}

#[derive(Clone, Copy, Debug)]
pub struct Skill {
    pub name: &'static str,
    /// Percent fill of the progress bar.
    pub progress: u8,
}

pub const SKILL_CATEGORIES: &[SkillCategory] = &[
    SkillCategory {
        title: "Backend",
        skills: &[
            Skill { name: "Java", progress: 90 },
            Skill { name: "Spring Boot", progress: 85 },
            Skill { name: "REST APIs", progress: 85 },
        ],
    },
    SkillCategory {
        title: "Data",
        skills: &[Skill { name: "MySQL", progress: 80 }, Skill { name: "MongoDB", progress: 65 }],
    },
    SkillCategory {
        title: "Tooling",
        skills: &[
            Skill { name: "Git", progress: 85 },
            Skill { name: "Docker", progress: 60 },
            Skill { name: "Maven", progress: 75 },
        ],
    },
];

#[derive(Clone, Copy, Debug)]
pub struct Card {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub body: &'static str,
}

pub const PROJECTS: &[Card] = &[
    Card {
        title: "Expense Tracker API",
        subtitle: "Spring Boot · MySQL",
        body: "REST service for budgets and recurring expenses with JWT auth.",
    },
    Card {
        title: "Library Management System",
        subtitle: "Java · JDBC",
        body: "Console application for catalog, loans, and overdue notices.",
    },
    Card {
        title: "DSA Practice Log",
        subtitle: "Java",
        body: "Curated solutions to classic algorithm problems with notes.",
    },
];

pub const EXPERIENCE: &[Card] = &[Card {
    title: "Backend Developer Intern",
    subtitle: "2024",
    body: "Built internal Spring Boot services and wrote integration tests.",
}];

pub const EDUCATION: &[Card] = &[Card {
    title: "B.Tech, Computer Science",
    subtitle: "2021 – 2025",
    body: "Coursework in data structures, databases, and operating systems.",
}];
