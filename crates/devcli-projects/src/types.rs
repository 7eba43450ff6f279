//! Core types for project actions

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of project `new` can scaffold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// Placeholder React layout (`src/index.js`, `package.json`)
    React,
    /// Placeholder Express layout (`app.js`, `package.json`)
    Express,
    /// Full React app generated by Vite, with optional extras
    Vite,
}

impl ProjectType {
    /// Get all available project types
    pub fn all() -> Vec<Self> {
        vec![Self::React, Self::Express, Self::Vite]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::React => "react",
            Self::Express => "express",
            Self::Vite => "vite",
        }
    }

    /// Get description for the project type
    pub fn description(&self) -> &'static str {
        match self {
            Self::React => "Minimal React project skeleton",
            Self::Express => "Minimal Express server skeleton",
            Self::Vite => "React app via Vite (TypeScript, Tailwind, Framer Motion, React Router)",
        }
    }

    /// Whether the type is written directly rather than by an external tool
    pub fn is_minimal(&self) -> bool {
        matches!(self, Self::React | Self::Express)
    }

    /// Whether [`ProjectOptions`] toggles apply to this type
    pub fn supports_options(&self) -> bool {
        matches!(self, Self::Vite)
    }

    fn available() -> String {
        Self::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProjectType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "react" => Ok(Self::React),
            "express" => Ok(Self::Express),
            "vite" | "react-vite" => Ok(Self::Vite),
            _ => Err(Error::unknown_project_type(s, Self::available())),
        }
    }
}

/// Kind of boilerplate file `generate` can write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FileType {
    /// React function component
    Component,
    /// Service class
    Service,
}

impl FileType {
    /// Get all available file types
    pub fn all() -> Vec<Self> {
        vec![Self::Component, Self::Service]
    }

    /// Get the string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Component => "component",
            Self::Service => "service",
        }
    }

    /// Get description for the file type
    pub fn description(&self) -> &'static str {
        match self {
            Self::Component => "React function component",
            Self::Service => "Service class",
        }
    }

    fn available() -> String {
        Self::all()
            .iter()
            .map(|t| t.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FileType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "component" => Ok(Self::Component),
            "service" => Ok(Self::Service),
            _ => Err(Error::unknown_file_type(s, Self::available())),
        }
    }
}

/// Feature toggles for one scaffold invocation
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectOptions {
    pub use_typescript: bool,
    pub use_tailwind: bool,
    pub use_framer_motion: bool,
    pub use_react_router: bool,
}

impl ProjectOptions {
    /// Extra npm packages implied by the toggles, in install order
    pub fn extra_packages(&self) -> Vec<&'static str> {
        let mut packages = Vec::new();
        if self.use_tailwind {
            packages.extend(["tailwindcss@3", "postcss", "autoprefixer"]);
        }
        if self.use_framer_motion {
            packages.push("framer-motion");
        }
        if self.use_react_router {
            packages.push("react-router-dom");
        }
        packages
    }
}

/// Check that `name` is usable as a single directory or file name
pub fn validate_name(name: &str) -> Result<()> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(Error::invalid_name(name, "name cannot be empty"));
    }
    if trimmed == "." || trimmed == ".." {
        return Err(Error::invalid_name(name, "name cannot be '.' or '..'"));
    }
    if trimmed.contains(['/', '\\']) {
        return Err(Error::invalid_name(
            name,
            "name cannot contain path separators",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_type_parse() {
        assert_eq!("react".parse::<ProjectType>().unwrap(), ProjectType::React);
        assert_eq!(
            " Express ".parse::<ProjectType>().unwrap(),
            ProjectType::Express
        );
        assert_eq!("vite".parse::<ProjectType>().unwrap(), ProjectType::Vite);
    }

    #[test]
    fn test_unknown_project_type_lists_available() {
        let err = "svelte".parse::<ProjectType>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("'svelte'"));
        assert!(msg.contains("react, express, vite"));
    }

    #[test]
    fn test_project_type_roundtrips_through_display() {
        for t in ProjectType::all() {
            assert_eq!(t.to_string().parse::<ProjectType>().unwrap(), t);
        }
    }

    #[test]
    fn test_file_type_parse() {
        assert_eq!("component".parse::<FileType>().unwrap(), FileType::Component);
        assert_eq!("SERVICE".parse::<FileType>().unwrap(), FileType::Service);
        assert!(matches!(
            "model".parse::<FileType>(),
            Err(Error::UnknownFileType { .. })
        ));
    }

    #[test]
    fn test_extra_packages_order() {
        let options = ProjectOptions {
            use_typescript: true,
            use_tailwind: true,
            use_framer_motion: true,
            use_react_router: true,
        };
        assert_eq!(
            options.extra_packages(),
            vec![
                "tailwindcss@3",
                "postcss",
                "autoprefixer",
                "framer-motion",
                "react-router-dom"
            ]
        );
        assert!(ProjectOptions::default().extra_packages().is_empty());
    }

    #[test]
    fn test_options_serialize_camel_case() {
        let json = serde_json::to_string(&ProjectOptions {
            use_tailwind: true,
            ..Default::default()
        })
        .unwrap();
        assert!(json.contains("\"useTailwind\":true"));
        assert!(json.contains("\"useReactRouter\":false"));
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name("demo").is_ok());
        assert!(validate_name("my-app_2").is_ok());
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("..").is_err());
        assert!(validate_name("a/b").is_err());
        assert!(validate_name("a\\b").is_err());
    }
}
