//! Static file contents written by the scaffolder

use crate::types::ProjectType;

/// Tailwind config overwritten after `tailwindcss init`
pub const TAILWIND_CONFIG_FILE: &str = "tailwind.config.js";

/// Stylesheet overwritten to pull in the Tailwind layers
pub const TAILWIND_INDEX_CSS_FILE: &str = "src/index.css";

pub const TAILWIND_CONFIG: &str = r#"/** @type {import('tailwindcss').Config} */
export default {
  content: [
    "./index.html",
    "./src/**/*.{js,ts,jsx,tsx}",
  ],
  theme: {
    extend: {},
  },
  plugins: [],
};
"#;

pub const TAILWIND_INDEX_CSS: &str = "@tailwind base;\n@tailwind components;\n@tailwind utilities;\n";

/// Placeholder files for the minimal project types as (relative path, content)
///
/// Empty for types produced by an external tool.
pub fn minimal_project_files(project_type: ProjectType) -> Vec<(&'static str, &'static str)> {
    match project_type {
        ProjectType::React => vec![
            ("src/index.js", "// React project index.js"),
            ("package.json", "// React project package.json"),
        ],
        ProjectType::Express => vec![
            ("app.js", "// Express project app.js"),
            ("package.json", "// Express project package.json"),
        ],
        ProjectType::Vite => Vec::new(),
    }
}
