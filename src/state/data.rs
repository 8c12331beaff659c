/// Shared data structures for the portfolio content
///
/// These structs represent the static tables that flow from the
/// embedded JSON document into the UI layer. They are loaded once
/// at startup and never mutated afterwards.

use serde::Deserialize;
use std::fmt;

/// Target platform of a project, shown as a colored badge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Platform {
    #[serde(rename = "iOS")]
    Ios,
    Android,
    #[serde(rename = "Cross-platform")]
    CrossPlatform,
    Web,
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Platform::Ios => "iOS",
            Platform::Android => "Android",
            Platform::CrossPlatform => "Cross-platform",
            Platform::Web => "Web",
        };
        f.write_str(label)
    }
}

/// Optional external links of a project
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct ProjectLinks {
    pub github: Option<String>,
    pub app_store: Option<String>,
    pub play_store: Option<String>,
}

impl ProjectLinks {
    /// True if at least one link is present
    pub fn any(&self) -> bool {
        self.github.is_some() || self.app_store.is_some() || self.play_store.is_some()
    }

    /// Present links in display order, with their labels
    pub fn labelled(&self) -> Vec<(&'static str, &str)> {
        let mut links = Vec::new();
        if let Some(url) = &self.github {
            links.push(("GitHub", url.as_str()));
        }
        if let Some(url) = &self.app_store {
            links.push(("App Store", url.as_str()));
        }
        if let Some(url) = &self.play_store {
            links.push(("Play Store", url.as_str()));
        }
        links
    }
}

/// A single portfolio project
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    /// Cover image, relative to the asset root
    pub image: String,
    pub technologies: Vec<String>,
    pub platform: Platform,
    /// Rendered in a browser frame instead of a phone frame
    #[serde(default)]
    pub web: bool,
    /// Gallery images; `None` falls back to the default gallery
    #[serde(default)]
    pub gallery: Option<Vec<String>>,
    #[serde(default)]
    pub links: ProjectLinks,
}

/// Owner of the portfolio
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub name: String,
    pub initials: String,
    pub tagline: String,
    /// Rotating titles for the typewriter line
    pub titles: Vec<String>,
    pub photo: String,
    pub github: String,
    pub linkedin: String,
    pub email: String,
    /// About section, one entry per paragraph
    pub about: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SkillCategory {
    pub title: String,
    /// Single glyph shown next to the title
    pub icon: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ExperienceItem {
    pub period: String,
    pub title: String,
    pub company: String,
    #[serde(default)]
    pub company_url: Option<String>,
    pub description: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct EducationItem {
    pub period: String,
    pub degree: String,
    pub institution: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// The whole portfolio document
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Portfolio {
    pub profile: Profile,
    pub skills: Vec<SkillCategory>,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub projects: Vec<Project>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_platform_labels() {
        let platform: Platform = serde_json::from_str("\"Cross-platform\"").unwrap();
        assert_eq!(platform, Platform::CrossPlatform);
        assert_eq!(platform.to_string(), "Cross-platform");

        let platform: Platform = serde_json::from_str("\"iOS\"").unwrap();
        assert_eq!(platform.to_string(), "iOS");
    }

    #[test]
    fn test_links_in_display_order() {
        let links = ProjectLinks {
            github: Some("https://github.com/x".into()),
            app_store: None,
            play_store: Some("#".into()),
        };

        assert!(links.any());
        let labels: Vec<&str> = links.labelled().iter().map(|(l, _)| *l).collect();
        assert_eq!(labels, vec!["GitHub", "Play Store"]);
        assert!(!ProjectLinks::default().any());
    }

    #[test]
    fn test_project_defaults() {
        let json = r#"{
            "title": "Travel App",
            "description": "d",
            "image": "projects/travel-app.jpg",
            "technologies": ["React.js"],
            "platform": "Web"
        }"#;
        let project: Project = serde_json::from_str(json).unwrap();

        assert!(!project.web);
        assert!(project.gallery.is_none());
        assert!(!project.links.any());
    }
}
