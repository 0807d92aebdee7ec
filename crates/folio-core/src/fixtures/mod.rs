//! Static display records.
//!
//! Fixtures are built into the binary and never change at runtime. Order
//! matters: every screen renders records in the order they appear here.

mod feed;
mod resume;

use serde::Serialize;

use crate::error::{FolioError, FolioResult};
use crate::nav::TabRoute;
use crate::variant::CardVariant;

pub use feed::{POSTS, STORIES};
pub use resume::{
    tech_color, CERTIFICATIONS, EDUCATION, FOCUS_NOTES, IN_PROGRESS, PROFILE, PROJECTS, SKILLS,
};

/// A technical skill with a proficiency bar
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Skill {
    pub name: &'static str,
    pub icon: &'static str,
    /// Proficiency, 0..=100
    pub level: u8,
    pub color: Option<&'static str>,
}

impl Skill {
    /// Icon tint, falling back to the primary color
    pub fn accent(&self) -> &'static str {
        self.color.unwrap_or(crate::theme::PRIMARY)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Project {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub tech_stack: &'static [&'static str],
    pub icon: &'static str,
    pub variant: CardVariant,
    pub featured: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Certification {
    pub id: &'static str,
    pub title: &'static str,
    pub issuer: &'static str,
    pub icon: &'static str,
    pub icon_color: &'static str,
    pub date: Option<&'static str>,
    pub credential_id: Option<&'static str>,
    pub skills: &'static [&'static str],
    pub variant: CardVariant,
}

impl Certification {
    /// (icon, text) rows under the title. Absent optional fields produce no row.
    pub fn detail_rows(&self) -> Vec<(&'static str, String)> {
        let mut rows = vec![("domain", self.issuer.to_string())];
        if let Some(date) = self.date {
            rows.push(("calendar-check", format!("Issued: {}", date)));
        }
        if let Some(credential_id) = self.credential_id {
            rows.push(("identifier", format!("ID: {}", credential_id)));
        }
        rows
    }
}

/// A certification that has been started but not earned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct InProgressCertification {
    pub title: &'static str,
    pub issuer: &'static str,
    pub icon: &'static str,
    pub icon_color: &'static str,
    /// Completion, 0..=100
    pub progress: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Education {
    pub degree: &'static str,
    pub specialization: &'static str,
    pub university: &'static str,
    pub duration: &'static str,
    pub status: &'static str,
    pub coursework: &'static [&'static str],
}

/// Home screen card that jumps to another tab
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ExploreLink {
    pub route: TabRoute,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub icon: &'static str,
    pub variant: CardVariant,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ContactLink {
    pub label: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Profile {
    pub name: &'static str,
    pub headline: &'static str,
    pub bio: &'static str,
    pub explore: &'static [ExploreLink],
    pub contacts: &'static [ContactLink],
}

impl Profile {
    /// Initials shown inside the profile ring
    pub fn monogram(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|word| word.chars().next())
            .flat_map(char::to_uppercase)
            .collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Story {
    pub id: &'static str,
    pub username: &'static str,
    pub image: &'static str,
    pub has_story: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Post {
    pub id: &'static str,
    pub username: &'static str,
    pub avatar: &'static str,
    pub image: &'static str,
    pub likes: u64,
    pub caption: &'static str,
    pub time_ago: &'static str,
}

/// Every fixture, for `--dump-fixtures`
#[derive(Debug, Serialize)]
pub struct FixtureSet {
    pub profile: &'static Profile,
    pub skills: &'static [Skill],
    pub education: &'static Education,
    pub projects: &'static [Project],
    pub certifications: &'static [Certification],
    pub in_progress: &'static [InProgressCertification],
    pub stories: &'static [Story],
    pub posts: &'static [Post],
}

pub fn all() -> FixtureSet {
    FixtureSet {
        profile: &PROFILE,
        skills: SKILLS,
        education: &EDUCATION,
        projects: PROJECTS,
        certifications: CERTIFICATIONS,
        in_progress: IN_PROGRESS,
        stories: STORIES,
        posts: POSTS,
    }
}

/// Serialize every fixture as pretty JSON.
pub fn to_json() -> FolioResult<String> {
    Ok(serde_json::to_string_pretty(&all())?)
}

/// Check the invariants of a single fixture set.
pub fn validate_set(set: &FixtureSet) -> FolioResult<()> {
    for skill in set.skills {
        check_level(skill.name, skill.level)?;
    }
    for course in set.in_progress {
        check_level(course.title, course.progress)?;
    }
    check_unique("project", set.projects.iter().map(|p| p.id))?;
    check_unique("certification", set.certifications.iter().map(|c| c.id))?;
    check_unique("story", set.stories.iter().map(|s| s.id))?;
    check_unique("post", set.posts.iter().map(|p| p.id))?;
    Ok(())
}

/// Check the invariants of the built-in fixtures.
pub fn validate() -> FolioResult<()> {
    validate_set(&all())
}

fn check_level(name: &str, level: u8) -> FolioResult<()> {
    if level > 100 {
        return Err(FolioError::LevelOutOfRange {
            name: name.to_string(),
            level,
        });
    }
    Ok(())
}

fn check_unique<'a>(kind: &'static str, ids: impl Iterator<Item = &'a str>) -> FolioResult<()> {
    let mut seen = Vec::new();
    for id in ids {
        if seen.contains(&id) {
            return Err(FolioError::DuplicateId {
                kind,
                id: id.to_string(),
            });
        }
        seen.push(id);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_fixtures_are_valid() {
        validate().unwrap();
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        static DUPES: [Story; 2] = [
            Story { id: "1", username: "a", image: "", has_story: true },
            Story { id: "1", username: "b", image: "", has_story: false },
        ];
        let mut set = all();
        set.stories = &DUPES;

        assert_eq!(
            validate_set(&set).unwrap_err(),
            FolioError::DuplicateId { kind: "story", id: "1".to_string() }
        );
    }

    #[test]
    fn test_level_out_of_range_rejected() {
        static OVERFLOW: [Skill; 1] = [Skill { name: "Rust", icon: "language-rust", level: 101, color: None }];
        let mut set = all();
        set.skills = &OVERFLOW;

        assert!(matches!(
            validate_set(&set),
            Err(FolioError::LevelOutOfRange { level: 101, .. })
        ));
    }

    #[test]
    fn test_missing_optional_fields_omit_rows() {
        let full = CERTIFICATIONS[0];
        assert_eq!(
            full.detail_rows(),
            vec![
                ("domain", "Google".to_string()),
                ("calendar-check", "Issued: 2024".to_string()),
                ("identifier", "ID: GDAPC-2024".to_string()),
            ]
        );

        let bare = Certification {
            date: None,
            credential_id: None,
            ..full
        };
        assert_eq!(bare.detail_rows(), vec![("domain", "Google".to_string())]);

        let undated = Certification { date: None, ..full };
        let icons: Vec<&str> = undated.detail_rows().iter().map(|(icon, _)| *icon).collect();
        assert_eq!(icons, vec!["domain", "identifier"]);
    }

    #[test]
    fn test_monogram() {
        assert_eq!(PROFILE.monogram(), "NMS");
    }

    #[test]
    fn test_json_dump_contains_fixtures() {
        let json = to_json().unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["projects"].as_array().map(Vec::len), Some(PROJECTS.len()));
        assert_eq!(value["projects"][0]["variant"], "red");
        assert_eq!(value["certifications"][0]["issuer"], "Google");
    }
}
