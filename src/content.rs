//! Static site content. Everything here is fixed at build time.

use crate::sequencer::{Body, Checkpoint, CheckpointIcon, Slide, TemplateKind};

pub const OWNER: &str = "Noah Kim";
pub const TAGLINE: &str = "From management consultant to developer";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Social {
    GitHub,
    LinkedIn,
    Twitter,
}

impl Social {
    pub const ALL: [Social; 3] = [Social::GitHub, Social::LinkedIn, Social::Twitter];

    pub fn href(&self) -> &'static str {
        match self {
            Self::GitHub => "https://github.com/noahreeves-1",
            Self::LinkedIn => "https://linkedin.com/in/noahh-kim",
            Self::Twitter => "https://x.com/thenoahkim",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::GitHub => "GitHub",
            Self::LinkedIn => "LinkedIn",
            Self::Twitter => "Twitter/X",
        }
    }

    /// devicon class for the brand mark
    pub fn icon(&self) -> &'static str {
        match self {
            Self::GitHub => "devicon-github-plain",
            Self::LinkedIn => "devicon-linkedin-plain",
            Self::Twitter => "devicon-twitter-original",
        }
    }
}

const CAREER_TRANSITION: [Checkpoint; 4] = [
    Checkpoint {
        icon: CheckpointIcon::Money,
        heading: "Financially Secure",
        description: "I felt like I had enough of a nest egg to take the leap of faith",
    },
    Checkpoint {
        icon: CheckpointIcon::Travel,
        heading: "Living Abroad",
        description: "I moved to Southeast Asia and traveled to 8 countries",
    },
    Checkpoint {
        icon: CheckpointIcon::Code,
        heading: "Learning to Code",
        description: "I took a self-paced open-source online coding bootcamp to learn how to code",
    },
    Checkpoint {
        icon: CheckpointIcon::Rocket,
        heading: "Starting a Business",
        description: "I started a business to build my own products with a friend",
    },
];

pub static SLIDES: [Slide; 5] = [
    Slide {
        id: 1,
        template: TemplateKind::Title,
        title: "My Journey",
        subtitle: "Management Consultant to Software Engineer",
        tagline: "",
        body: Body::Empty,
        footnote: None,
        backdrop: "bg-white",
    },
    Slide {
        id: 2,
        template: TemplateKind::BulletList,
        title: "Management Consultant",
        subtitle: "2016-2021",
        tagline: "Highlights from 10 projects at 7 clients",
        body: Body::Lines(
            "🤖 Led an RPA proof-of-concept that automated 90% of cloud testing, significantly reducing manual effort and testing time at AT&T\n\
             🏛️ Conducted a data governance assessment by interviewing 18 stakeholders across 5 BUs, then presented findings to Salesforce VPs\n\
             📊 Built 11 Tableau dashboards for cybersecurity teams, enabling leadership to make data-driven decisions, saving 400+ FTE hrs/yr",
        ),
        footnote: Some(
            "Washington, D.C., Chicago, Seattle, Philadelphia, Dallas, Pittsburgh, Raleigh, St. Paul",
        ),
        backdrop: "bg-white",
    },
    Slide {
        id: 3,
        template: TemplateKind::TimelineMap,
        title: "Career Transition",
        subtitle: "2021-2023",
        tagline: "After 5 years of consulting, I knew I needed a change. I wanted to travel the world and build my own products.",
        body: Body::Checkpoints(&CAREER_TRANSITION),
        footnote: None,
        backdrop: "bg-gradient-to-b from-blue-50 to-white",
    },
    Slide {
        id: 4,
        template: TemplateKind::BulletList,
        title: "Software Engineer/Founder",
        subtitle: "2023-2025",
        tagline: "Learning to code and entrepreneurship",
        body: Body::Lines(
            "Completed open-source full-stack coding bootcamp\n\
             Built social media mobile app and launched in the App Store\n\
             Built a marketing tool for 2 small business owners\n\
             Building an AI to notify U.S. citizens of new relevant laws\n\
             Led a team of 3 engineers\n",
        ),
        footnote: None,
        backdrop: "bg-white",
    },
    Slide {
        id: 5,
        template: TemplateKind::CallToAction,
        title: "Let's Connect",
        subtitle: "View my projects or get in touch",
        tagline: "Ready to collaborate on exciting opportunities?",
        body: Body::Empty,
        footnote: None,
        backdrop: "bg-white",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Project {
    pub id: u32,
    pub title: &'static str,
    pub description: &'static str,
    pub image: &'static str,
    pub technologies: &'static [&'static str],
    pub github: &'static str,
    pub live_url: &'static str,
    pub long_description: &'static str,
}

pub static PROJECTS: [Project; 3] = [
    Project {
        id: 1,
        title: "Muffin: Food App",
        description: "A comprehensive food delivery and discovery platform",
        image: "/project1.jpg",
        technologies: &[
            "React Native",
            "TypeScript",
            "Expo",
            "CSS",
            "ElasticSearch",
            "PostgreSQL",
            "Redux",
            "React Query",
            "Firebase",
            "Digital Ocean",
            "Prisma",
            "NestJS",
            "Docker",
            "Redis",
        ],
        github: "https://github.com/noahreeves-1/muffin",
        live_url: "https://muffin-app.com",
        long_description: "Muffin is a comprehensive food delivery application built with React Native and Expo. It features powerful search capabilities with ElasticSearch, data management with PostgreSQL and Prisma, and state management through Redux and React Query. The backend runs on NestJS inside Docker with Redis caching, hosted on Digital Ocean with Firebase for notifications.",
    },
    Project {
        id: 2,
        title: "StoryDiscount",
        description: "QR based marketing tool for local small businesses",
        image: "/project2.jpg",
        technologies: &[
            "React",
            "TypeScript",
            "Wasp",
            "OpenSaaS",
            "Tailwind CSS",
            "Fly.io",
            "Stripe",
            "Prisma",
            "PostgreSQL",
            "Docker",
        ],
        github: "https://github.com/noahreeves-1/storydiscount",
        live_url: "https://storydiscount.com",
        long_description: "StoryDiscount is a QR-based marketing tool designed specifically for local small businesses. Built with React and Wasp on top of the OpenSaaS starter, it handles payments through Stripe, stores campaigns in PostgreSQL via Prisma and is deployed on Fly.io.",
    },
    Project {
        id: 3,
        title: "Lexcalibur",
        description: "Citizen text alert using AI to analyze new laws and regulations",
        image: "/project3.jpg",
        technologies: &[
            "Next.js",
            "TypeScript",
            "Tailwind CSS",
            "Pinecone",
            "OpenAI",
            "Apify",
            "Supabase",
            "NestJS",
            "Docker",
        ],
        github: "https://github.com/noahreeves-1/lexcalibur",
        live_url: "https://lexcalibur.app",
        long_description: "Lexcalibur is a citizen alert system that uses AI to analyze new laws and regulations and decide which ones matter to each user. Legislation is scraped with Apify, embedded into Pinecone and summarised with OpenAI, with Supabase and a NestJS service behind a Next.js front end.",
    },
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Badge {
    pub name: &'static str,
    pub icon: &'static str,
    pub color: &'static str,
}

/// Skills that don't show up in any of the projects above.
pub static OTHER_SKILLS: [Badge; 13] = [
    Badge { name: "HTML", icon: "/skills/html5.svg", color: "bg-orange-500" },
    Badge { name: "JavaScript", icon: "/skills/javascript.svg", color: "bg-yellow-400" },
    Badge { name: "SQL", icon: "/skills/sql.svg", color: "bg-blue-400" },
    Badge { name: "Node.js", icon: "/skills/nodejs.svg", color: "bg-green-600" },
    Badge { name: "Express", icon: "/skills/express.svg", color: "bg-gray-800" },
    Badge { name: "AdonisJS", icon: "/skills/adonis.svg", color: "bg-purple-700" },
    Badge { name: "MySQL", icon: "/skills/mysql.svg", color: "bg-blue-800" },
    Badge { name: "MongoDB", icon: "/skills/mongodb.svg", color: "bg-green-700" },
    Badge { name: "SQL Server", icon: "/skills/sqlserver.svg", color: "bg-red-700" },
    Badge { name: "Vercel", icon: "/skills/vercel.svg", color: "bg-slate-900" },
    Badge { name: "Railway", icon: "/skills/railway.svg", color: "bg-purple-700" },
    Badge { name: "Turbo", icon: "/skills/turbo.svg", color: "bg-red-500" },
    Badge { name: "Nx", icon: "/skills/nx.svg", color: "bg-blue-700" },
];

pub const DEFAULT_TECH_CLASS: &str = "hover:bg-slate-600 active:bg-slate-600";

/// Hover/active tint for a technology badge. Full class names only, so the
/// tailwind scanner can see them.
pub fn tech_class(name: &str) -> &'static str {
    match name {
        "React" => "hover:bg-sky-800 active:bg-sky-800",
        "React Native" => "hover:bg-sky-900 active:bg-sky-900",
        "Next.js" | "Vercel" => "hover:bg-slate-800 active:bg-slate-800",
        "TypeScript" | "Docker" => "hover:bg-blue-800 active:bg-blue-800",
        "JavaScript" => "hover:bg-amber-700 active:bg-amber-700",
        "HTML" => "hover:bg-orange-700 active:bg-orange-700",
        "CSS" | "SQL" | "Digital Ocean" | "Nx" => "hover:bg-blue-700 active:bg-blue-700",
        "Tailwind CSS" => "hover:bg-sky-700 active:bg-sky-700",
        "Expo" | "Railway" => "hover:bg-violet-800 active:bg-violet-800",
        "PostgreSQL" => "hover:bg-indigo-900 active:bg-indigo-900",
        "MongoDB" | "Supabase" => "hover:bg-emerald-800 active:bg-emerald-800",
        "Prisma" => "hover:bg-purple-900 active:bg-purple-900",
        "Redis" | "NestJS" => "hover:bg-rose-800 active:bg-rose-800",
        "MySQL" => "hover:bg-blue-900 active:bg-blue-900",
        "SQL Server" => "hover:bg-rose-900 active:bg-rose-900",
        "ElasticSearch" | "Wasp" => "hover:bg-amber-800 active:bg-amber-800",
        "Pinecone" | "Apify" => "hover:bg-teal-800 active:bg-teal-800",
        "Redux" | "AdonisJS" => "hover:bg-purple-800 active:bg-purple-800",
        "React Query" | "Turbo" => "hover:bg-rose-700 active:bg-rose-700",
        "Node.js" => "hover:bg-emerald-700 active:bg-emerald-700",
        "Express" => "hover:bg-gray-800 active:bg-gray-800",
        "OpenAI" => "hover:bg-emerald-900 active:bg-emerald-900",
        "Fly.io" | "Stripe" => "hover:bg-indigo-800 active:bg-indigo-800",
        "Firebase" => "hover:bg-orange-800 active:bg-orange-800",
        "OpenSaaS" => "hover:bg-fuchsia-800 active:bg-fuchsia-800",
        _ => DEFAULT_TECH_CLASS,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Level {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Level {
    pub fn percent(&self) -> u8 {
        match self {
            Self::Beginner => 25,
            Self::Intermediate => 50,
            Self::Advanced => 75,
            Self::Expert => 95,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Beginner => "Beginner",
            Self::Intermediate => "Intermediate",
            Self::Advanced => "Advanced",
            Self::Expert => "Expert",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            Self::Beginner => "bg-blue-400",
            Self::Intermediate => "bg-teal-400",
            Self::Advanced => "bg-green-400",
            Self::Expert => "bg-purple-400",
        }
    }
}

pub static TECHNICAL_SKILLS: [(&str, Level); 8] = [
    ("Frontend Development", Level::Expert),
    ("Backend Development", Level::Advanced),
    ("React Ecosystem", Level::Expert),
    ("UI/UX Design", Level::Intermediate),
    ("Database Design", Level::Advanced),
    ("API Development", Level::Expert),
    ("Responsive Design", Level::Expert),
    ("DevOps", Level::Intermediate),
];

pub static SOFT_SKILLS: [(&str, Level); 6] = [
    ("Project Management", Level::Expert),
    ("Client Communication", Level::Expert),
    ("Team Leadership", Level::Advanced),
    ("Problem Solving", Level::Expert),
    ("Strategic Thinking", Level::Expert),
    ("Mentoring", Level::Advanced),
];

pub static SKILL_GROUPS: [(&str, &[&str]); 4] = [
    (
        "Frontend Development",
        &["React & Next.js", "JavaScript & TypeScript", "HTML & CSS", "Tailwind CSS", "Responsive Design"],
    ),
    (
        "Backend Development",
        &["Node.js", "Express", "REST APIs", "MongoDB", "PostgreSQL"],
    ),
    (
        "Other Technical Skills",
        &["Git & GitHub", "Testing (Jest, React Testing Library)", "CI/CD", "Vercel & Netlify Deployment"],
    ),
    (
        "Business & Soft Skills",
        &["Business Analysis", "Project Management", "Client Communication", "Problem Solving", "Team Collaboration"],
    ),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Role {
    pub title: &'static str,
    pub period: &'static str,
    pub company: &'static str,
    pub highlights: &'static [&'static str],
}

pub static EXPERIENCE: [Role; 2] = [
    Role {
        title: "Software Engineer/Founder",
        period: "2023 - Present",
        company: "Independent, Remote",
        highlights: &[
            "Built and launched a social media mobile app in the App Store",
            "Built a QR marketing tool used by small business owners",
            "Building an AI service that flags new laws relevant to U.S. citizens",
            "Led a team of 3 engineers",
        ],
    },
    Role {
        title: "Management Consultant",
        period: "2016 - 2021",
        company: "Consulting, Washington, D.C.",
        highlights: &[
            "Led an RPA proof-of-concept that automated 90% of cloud testing",
            "Ran a data governance assessment across 18 stakeholders and 5 business units",
            "Built 11 Tableau dashboards for cybersecurity leadership, saving 400+ FTE hours a year",
            "Presented findings and recommendations to executive stakeholders",
        ],
    },
];

pub static CERTIFICATIONS: [&str; 2] = [
    "Full Stack Web Development (open-source bootcamp), 2022",
    "Advanced React and Redux (Online Course), 2023",
];

pub const NAV_LINKS: [(&str, &str); 4] = [
    ("About", "/about"),
    ("Projects", "/#projects"),
    ("Resume", "/resume"),
    ("Contact", "/#contact"),
];

/// Whether nav link `href` points at what is on screen. Links into a section
/// of a page also need the location's fragment to match.
pub fn is_current_link(href: &str, pathname: &str, hash: &str) -> bool {
    match href.split_once('#') {
        Some((path, section)) => path == pathname && hash.trim_start_matches('#') == section,
        None => href == pathname,
    }
}

/// One row of the editor shown in the coding journey section. `class`
/// carries the indent and colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CodeLine {
    pub class: &'static str,
    pub text: &'static str,
}

const fn code(class: &'static str, text: &'static str) -> CodeLine {
    CodeLine { class, text }
}

const BLANK: CodeLine = code("", "");

pub static JOURNEY_CODE: [CodeLine; 31] = [
    code("text-blue-400", "import React from 'react';"),
    code("text-blue-400", "import { useState, useEffect } from 'react';"),
    BLANK,
    code("text-purple-400", "interface Experience {"),
    code("ml-4 text-teal-300", "id: number;"),
    code("ml-4 text-teal-300", "role: string;"),
    code("ml-4 text-teal-300", "technologies: string[];"),
    code("ml-4 text-teal-300", "year: number;"),
    code("text-purple-400", "}"),
    BLANK,
    code("text-blue-400", "const MyJourney: React.FC = () => {"),
    code("ml-4 text-purple-400", "const [skills, setSkills] = useState<string[]>([]);"),
    code("ml-4 text-purple-400", "const [isLoading, setIsLoading] = useState<boolean>(true);"),
    BLANK,
    code("ml-4 text-purple-400", "useEffect(() => {"),
    code("ml-8 text-green-400", "// Learning new skills and technologies"),
    code("ml-8 text-teal-300", "setSkills(["),
    code("ml-12 text-yellow-300", "\"React\", \"TypeScript\", \"NextJS\","),
    code("ml-12 text-yellow-300", "\"Docker\", \"AWS\", \"Redux\""),
    code("ml-8 text-yellow-300", "]);"),
    code("ml-8 text-teal-300", "setIsLoading(false);"),
    code("ml-4 text-purple-400", "}, []);"),
    BLANK,
    code("ml-4 text-blue-400", "return ("),
    code("ml-8 text-purple-400", "<div className=\"portfolio\">"),
    code("ml-12 text-green-400", "{/* My projects showcase */}"),
    code("ml-8 text-purple-400", "</div>"),
    code("ml-4 text-yellow-300", ");"),
    code("text-blue-400", "};"),
    BLANK,
    code("text-blue-400", "export default MyJourney;"),
];

pub static JOURNEY_SHELL: [&str; 4] = [
    "$ cd ~/projects",
    "$ mkdir portfolio",
    "$ cd portfolio",
    "$ npm create next-app",
];

/// Typed out as the section scrolls by.
pub const JOURNEY_COMMAND: &str = "$ npm run dev";

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_slide_ids_are_unique() {
        let ids = SLIDES.iter().map(|s| s.id).collect::<HashSet<_>>();
        assert_eq!(ids.len(), SLIDES.len());
    }

    #[test]
    fn test_slide_bodies_match_templates() {
        for slide in &SLIDES {
            match slide.template {
                TemplateKind::BulletList => assert!(!slide.bullets().is_empty()),
                TemplateKind::TimelineMap => assert!(!slide.checkpoints().is_empty()),
                TemplateKind::Title | TemplateKind::CallToAction => {
                    assert_eq!(slide.body, Body::Empty)
                }
            }
        }
        assert_eq!(SLIDES[0].template, TemplateKind::Title);
        assert_eq!(SLIDES[2].template, TemplateKind::TimelineMap);
        assert_eq!(SLIDES[3].bullets().len(), 5);
    }

    #[test]
    fn test_tech_classes() {
        assert_eq!(tech_class("React"), "hover:bg-sky-800 active:bg-sky-800");
        assert_eq!(tech_class("COBOL"), DEFAULT_TECH_CLASS);
        let everything = PROJECTS
            .iter()
            .flat_map(|p| p.technologies.iter().copied())
            .chain(OTHER_SKILLS.iter().map(|b| b.name));
        for tech in everything {
            assert_ne!(tech_class(tech), DEFAULT_TECH_CLASS, "{tech} has no colour");
        }
    }

    #[test]
    fn test_levels_are_ordered() {
        let levels = [Level::Beginner, Level::Intermediate, Level::Advanced, Level::Expert];
        for pair in levels.windows(2) {
            assert!(pair[0] < pair[1]);
            assert!(pair[0].percent() < pair[1].percent());
        }
    }

    #[test]
    fn test_current_link() {
        assert!(is_current_link("/about", "/about", ""));
        assert!(is_current_link("/about", "/about", "#team"));
        assert!(!is_current_link("/about", "/resume", ""));
        assert!(is_current_link("/#projects", "/", "#projects"));
        assert!(!is_current_link("/#projects", "/", ""));
        assert!(!is_current_link("/#projects", "/", "#contact"));
        assert!(!is_current_link("/#projects", "/about", "#projects"));
        let highlighted = NAV_LINKS
            .iter()
            .filter(|(_, href)| is_current_link(href, "/", "#contact"))
            .count();
        assert_eq!(highlighted, 1);
    }

    #[test]
    fn test_journey_code_has_content_at_both_ends() {
        assert_ne!(JOURNEY_CODE[0], BLANK);
        assert_ne!(JOURNEY_CODE[JOURNEY_CODE.len() - 1], BLANK);
        assert!(JOURNEY_CODE.iter().all(|l| l.text.is_empty() == l.class.is_empty()));
    }
}
