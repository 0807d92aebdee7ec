//! Résumé fixtures.

use super::{
    Certification, ContactLink, Education, ExploreLink, InProgressCertification, Profile, Project,
    Skill,
};
use crate::nav::TabRoute;
use crate::theme;
use crate::variant::CardVariant;

pub static PROFILE: Profile = Profile {
    name: "Namish M S",
    headline: "Data Science & Analytics Enthusiast",
    bio: "Passionate about transforming raw data into actionable insights. Currently \
          pursuing BCA (Honors) in Data Science with a focus on machine learning, \
          analytics, and data visualization. Eager to solve real-world problems \
          through data-driven solutions.",
    explore: &[
        ExploreLink {
            route: TabRoute::Skills,
            title: "Skills & Education",
            subtitle: "Technical expertise & academic journey",
            icon: "code-braces",
            variant: CardVariant::Dark,
        },
        ExploreLink {
            route: TabRoute::Projects,
            title: "Projects",
            subtitle: "Featured work & case studies",
            icon: "folder-multiple",
            variant: CardVariant::Light,
        },
        ExploreLink {
            route: TabRoute::Certifications,
            title: "Certifications",
            subtitle: "Professional credentials",
            icon: "certificate",
            variant: CardVariant::Red,
        },
    ],
    contacts: &[
        ContactLink { label: "Email", icon: "email" },
        ContactLink { label: "LinkedIn", icon: "linkedin" },
        ContactLink { label: "GitHub", icon: "github" },
    ],
};

pub static SKILLS: &[Skill] = &[
    Skill { name: "Python", icon: "language-python", level: 85, color: Some("#3776AB") },
    Skill { name: "Machine Learning", icon: "brain", level: 75, color: Some("#FF6B6B") },
    Skill { name: "Power BI", icon: "chart-bar", level: 90, color: Some("#F2C811") },
    Skill { name: "SQL", icon: "database", level: 80, color: Some("#4479A1") },
    Skill { name: "Tableau", icon: "chart-areaspline", level: 70, color: Some("#E97627") },
    Skill { name: "Excel", icon: "microsoft-excel", level: 85, color: Some("#217346") },
    Skill { name: "MS Office", icon: "microsoft-office", level: 90, color: Some("#D83B01") },
];

pub static EDUCATION: Education = Education {
    degree: "BCA (Honors)",
    specialization: "Data Science",
    university: "RV University, Bangalore",
    duration: "2024 - 2028",
    status: "Currently Pursuing",
    coursework: &["Data Structures", "Statistics", "Machine Learning", "Database Systems"],
};

/// (icon, text) rows of the Skills screen's closing card
pub static FOCUS_NOTES: &[(&str, &str)] = &[
    ("target", "Focused on practical applications of AI/ML"),
    ("chart-timeline-variant-shimmer", "Building real-world data science projects"),
    ("account-group", "Active in coding communities & hackathons"),
];

pub static PROJECTS: &[Project] = &[
    Project {
        id: "1",
        title: "Movie Recommendation System",
        description: "An intelligent recommendation engine that suggests movies based on user \
                      preferences using collaborative filtering and content-based filtering \
                      algorithms. Implemented using Python and various ML libraries.",
        tech_stack: &["Python", "Machine Learning", "Pandas", "Scikit-learn", "Flask"],
        icon: "movie-open",
        variant: CardVariant::Red,
        featured: true,
    },
    Project {
        id: "2",
        title: "HR Analytics Dashboard",
        description: "Interactive Power BI dashboard analyzing employee data, attrition rates, \
                      performance metrics, and workforce demographics. Provides actionable \
                      insights for HR decision-making.",
        tech_stack: &["Power BI", "DAX", "Data Modeling", "ETL"],
        icon: "chart-box",
        variant: CardVariant::Dark,
        featured: true,
    },
    Project {
        id: "3",
        title: "Sales Analysis Dashboard",
        description: "Comprehensive sales analytics solution tracking revenue, customer segments, \
                      product performance, and regional sales trends with dynamic filtering \
                      capabilities.",
        tech_stack: &["Tableau", "SQL", "Excel"],
        icon: "shopping-outline",
        variant: CardVariant::Light,
        featured: false,
    },
];

const TECH_COLORS: &[(&str, &str)] = &[
    ("Python", "#3776AB"),
    ("Machine Learning", "#FF6B6B"),
    ("Pandas", "#150458"),
    ("Scikit-learn", "#F7931E"),
    ("Flask", "#000000"),
    ("Power BI", "#F2C811"),
    ("DAX", "#E97627"),
    ("Data Modeling", "#4479A1"),
    ("ETL", "#00A36C"),
    ("Tableau", "#E97627"),
    ("SQL", "#4479A1"),
    ("Excel", "#217346"),
];

/// Dot color for a tech tag; unknown tags use the primary color.
pub fn tech_color(tech: &str) -> &'static str {
    TECH_COLORS
        .iter()
        .find(|(name, _)| *name == tech)
        .map(|(_, color)| *color)
        .unwrap_or(theme::PRIMARY)
}

pub static CERTIFICATIONS: &[Certification] = &[
    Certification {
        id: "1",
        title: "Google Data Analytics Professional Certificate",
        issuer: "Google",
        icon: "google",
        icon_color: "#4285F4",
        date: Some("2024"),
        credential_id: Some("GDAPC-2024"),
        skills: &["Data Analysis", "SQL", "R Programming", "Data Visualization", "Spreadsheets"],
        variant: CardVariant::Red,
    },
    Certification {
        id: "2",
        title: "Python for Data Science",
        issuer: "Coursera / IBM",
        icon: "language-python",
        icon_color: "#3776AB",
        date: Some("2024"),
        credential_id: Some("PY-DS-2024"),
        skills: &["Python", "NumPy", "Pandas", "Data Manipulation"],
        variant: CardVariant::Dark,
    },
    Certification {
        id: "3",
        title: "Microsoft Power BI Data Analyst",
        issuer: "Microsoft",
        icon: "microsoft-power-bi",
        icon_color: "#F2C811",
        date: Some("2024"),
        credential_id: Some("PBI-DA-2024"),
        skills: &["Power BI", "DAX", "Data Modeling", "Report Building"],
        variant: CardVariant::Light,
    },
];

pub static IN_PROGRESS: &[InProgressCertification] = &[InProgressCertification {
    title: "AWS Cloud Practitioner",
    issuer: "Amazon Web Services",
    icon: "aws",
    icon_color: "#FF9900",
    progress: 60,
}];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tech_color_fallback() {
        assert_eq!(tech_color("Python"), "#3776AB");
        assert_eq!(tech_color("Haskell"), theme::PRIMARY);
    }

    #[test]
    fn test_every_project_tag_has_a_color() {
        for project in PROJECTS {
            for tech in project.tech_stack {
                assert_ne!(tech_color(tech), theme::PRIMARY, "{} has no color", tech);
            }
        }
    }

    #[test]
    fn test_explore_links_target_other_tabs() {
        let routes: Vec<TabRoute> = PROFILE.explore.iter().map(|link| link.route).collect();
        assert_eq!(
            routes,
            vec![TabRoute::Skills, TabRoute::Projects, TabRoute::Certifications]
        );
    }
}
