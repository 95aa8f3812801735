//! Static copy rendered by the page sections.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Sparkles,
    User,
    CodeBracket,
    RocketLaunch,
    Envelope,
    CommandLine,
    Briefcase,
    Star,
    ArrowTopRightOnSquare,
    Bars3,
    XMark,
    Download,
    WhatsApp,
}

/// Tailwind colour family used to tint a card or icon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Emerald,
    Purple,
    Amber,
    Green,
}

impl Accent {
    pub fn text_class(self) -> &'static str {
        match self {
            Accent::Emerald => "text-emerald-400",
            Accent::Purple => "text-purple-400",
            Accent::Amber => "text-amber-400",
            Accent::Green => "text-green-400",
        }
    }

    pub fn bar_class(self) -> &'static str {
        match self {
            Accent::Emerald => "bg-emerald-500",
            Accent::Purple => "bg-purple-500",
            Accent::Amber => "bg-amber-500",
            Accent::Green => "bg-green-500",
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Profile {
    pub name: &'static str,
    pub short_name: &'static str,
    pub role: &'static str,
    pub tagline: &'static str,
    pub splash_line: &'static str,
    pub resume_href: &'static str,
    pub resume_file_name: &'static str,
}

pub const PROFILE: Profile = Profile {
    name: "Rahul Mohite",
    short_name: "Rahul",
    role: "Full Stack Developer",
    tagline: "Full Stack Developer passionate about creating exceptional digital experiences",
    splash_line: "Crafting digital experiences...",
    resume_href: "/resume.pdf",
    resume_file_name: "Rahul_Mohite_Resume.pdf",
};

#[derive(Debug, Clone, Copy)]
pub struct NavItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

/// Navigation order matches the top-to-bottom order of the sections.
pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem {
        id: "home",
        label: "Home",
        icon: Icon::Sparkles,
    },
    NavItem {
        id: "about",
        label: "About",
        icon: Icon::User,
    },
    NavItem {
        id: "skills",
        label: "Skills",
        icon: Icon::CodeBracket,
    },
    NavItem {
        id: "projects",
        label: "Projects",
        icon: Icon::RocketLaunch,
    },
    NavItem {
        id: "contact",
        label: "Contact",
        icon: Icon::Envelope,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct SocialLink {
    pub label: &'static str,
    pub href: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink {
        label: "Email",
        href: "mailto:mohiterahul8380@gmail.com",
        icon: Icon::Envelope,
        accent: Accent::Emerald,
    },
    SocialLink {
        label: "GitHub",
        href: "https://github.com/RahulMohiteDEV",
        icon: Icon::CommandLine,
        accent: Accent::Purple,
    },
    SocialLink {
        label: "LinkedIn",
        href: "https://www.linkedin.com/in/rahul-mohite-5039162a1/",
        icon: Icon::Briefcase,
        accent: Accent::Amber,
    },
    SocialLink {
        label: "WhatsApp",
        href: "https://wa.me/919922935750",
        icon: Icon::WhatsApp,
        accent: Accent::Green,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub emoji: &'static str,
    pub text: &'static str,
}

pub const ABOUT_HIGHLIGHTS: &[Highlight] = &[
    Highlight {
        emoji: "⚡",
        text: "Fast Learning",
    },
    Highlight {
        emoji: "🎯",
        text: "Problem Solving",
    },
    Highlight {
        emoji: "🔧",
        text: "Clean Code",
    },
    Highlight {
        emoji: "🚀",
        text: "Modern Tech",
    },
];

pub const ABOUT_STACK: &[&str] = &["React", "Node.js", "MongoDB"];

#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub skills: &'static [&'static str],
    pub icon: Icon,
    pub accent: Accent,
    pub badge: Option<&'static str>,
}

pub const SKILL_GROUPS: &[SkillGroup] = &[
    SkillGroup {
        category: "Frontend Development",
        skills: &["React", "JavaScript", "Tailwind CSS", "HTML5", "CSS3", "Bootstrap"],
        icon: Icon::CodeBracket,
        accent: Accent::Emerald,
        badge: None,
    },
    SkillGroup {
        category: "Backend Development",
        skills: &["Node.js", "Express", "MongoDB", "REST APIs"],
        icon: Icon::CommandLine,
        accent: Accent::Purple,
        badge: Some("Growing Expertise"),
    },
    SkillGroup {
        category: "Tools & Technologies",
        skills: &["Git", "GitHub", "Postman", "VS Code", "Responsive Design"],
        icon: Icon::RocketLaunch,
        accent: Accent::Amber,
        badge: None,
    },
];

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub technologies: &'static [&'static str],
    pub demo_link: &'static str,
    pub featured: bool,
    pub image: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Soil Report Generator",
        description: "A comprehensive, multilingual web application for soil analysis and reporting that helps farmers and agricultural professionals analyze soil nutrients with responsive design.",
        technologies: &["React", "HTML5", "JavaScript", "Tailwind CSS", "Recharts", "html2canvas"],
        demo_link: "https://soil-report-generator-b12a.vercel.app/",
        featured: true,
        image: "/soil.png",
    },
    Project {
        title: "Task Management System",
        description: "Organize everything in one clean platform that works offline—no setup or subscriptions needed. Perfect for small teams who want to track progress and assign tasks.",
        technologies: &["React", "HTML5", "Tailwind CSS", "JavaScript", "Local Storage"],
        demo_link: "https://employee-task-management-system-ten.vercel.app/",
        featured: false,
        image: "/ems.png",
    },
];

/// Card label such as `#01`.
pub fn project_ordinal(index: usize) -> String {
    format!("#{:02}", index + 1)
}

#[derive(Debug, Clone, Copy)]
pub struct ContactCard {
    pub title: &'static str,
    pub content: &'static str,
    pub link: &'static str,
    pub icon: Icon,
    pub accent: Accent,
}

pub const CONTACT_CARDS: &[ContactCard] = &[
    ContactCard {
        title: "Email",
        content: "mohiterahul8380@gmail.com",
        link: "mailto:mohiterahul8380@gmail.com",
        icon: Icon::Envelope,
        accent: Accent::Emerald,
    },
    ContactCard {
        title: "GitHub",
        content: "RahulMohiteDEV",
        link: "https://github.com/RahulMohiteDEV",
        icon: Icon::CommandLine,
        accent: Accent::Purple,
    },
    ContactCard {
        title: "LinkedIn",
        content: "Rahul Mohite",
        link: "https://www.linkedin.com/in/rahul-mohite-5039162a1/",
        icon: Icon::Briefcase,
        accent: Accent::Amber,
    },
    ContactCard {
        title: "WhatsApp",
        content: "+91 9922935750",
        link: "https://wa.me/919922935750",
        icon: Icon::WhatsApp,
        accent: Accent::Green,
    },
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_nav_ids_unique_and_ordered() {
        let ids = NAV_ITEMS.iter().map(|n| n.id).collect::<Vec<_>>();
        assert_eq!(ids, vec!["home", "about", "skills", "projects", "contact"]);
        assert_eq!(ids.iter().collect::<HashSet<_>>().len(), ids.len());
        assert!(ids.iter().all(|id| !id.is_empty()));
    }

    #[test]
    fn test_project_ordinal() {
        assert_eq!(project_ordinal(0), "#01");
        assert_eq!(project_ordinal(9), "#10");
    }

    #[test]
    fn test_single_featured_project() {
        assert_eq!(PROJECTS.iter().filter(|p| p.featured).count(), 1);
        assert!(PROJECTS[0].featured);
    }

    #[test]
    fn test_only_backend_group_has_badge() {
        let badged = SKILL_GROUPS
            .iter()
            .filter_map(|g| g.badge.map(|b| (g.category, b)))
            .collect::<Vec<_>>();
        assert_eq!(badged, vec![("Backend Development", "Growing Expertise")]);
    }

    #[test]
    fn test_linked_assets_are_shipped() {
        let public = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("public");
        let local = std::iter::once("/favicon.ico")
            .chain(std::iter::once(PROFILE.resume_href))
            .chain(PROJECTS.iter().map(|p| p.image));
        for href in local {
            let path = public.join(href.trim_start_matches('/'));
            assert!(path.is_file(), "missing asset {href}");
        }
    }
}
