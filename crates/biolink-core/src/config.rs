use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::constants::{GITHUB_API_BASE, PRESENCE_API_BASE, PRESENCE_POLL_INTERVAL};
use crate::typewriter::TypewriterTiming;

#[derive(Debug, Clone)]
pub struct CoreConfig {
    pub data_dir: PathBuf,
}

impl CoreConfig {
    pub fn new<P: AsRef<Path>>(data_dir: P) -> Self {
        Self {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        let base = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
        Self::new(base.join("biolink"))
    }
}

/// A labelled outbound link on the profile card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub label: String,
    pub url: String,
}

impl ProfileLink {
    pub fn new(label: &str, url: &str) -> Self {
        Self {
            label: label.to_string(),
            url: url.to_string(),
        }
    }
}

/// Everything the page displays that is not fetched at runtime.
/// Missing fields fall back to the built-in profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProfileConfig {
    pub name: String,
    pub headline: String,
    pub bio: String,
    pub location: String,
    pub tech_stack: Vec<String>,
    pub links: Vec<ProfileLink>,

    /// Phrases cycled by the typewriter under the name
    pub phrases: Vec<String>,
    pub typewriter: TypewriterTiming,

    /// Discord user id watched by the presence widget
    pub discord_user_id: String,
    /// GitHub login shown by the repositories widget
    pub github_handle: String,

    pub presence_api_base: String,
    pub github_api_base: String,
    pub poll_interval_secs: u64,

    /// Title on the entry screen
    pub entry_title: String,
    /// Audio file looped while the profile is shown
    #[serde(skip_serializing_if = "Option::is_none")]
    pub music_path: Option<PathBuf>,
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            name: "wan".to_string(),
            headline: "Full Stack Developer \u{b7} Python and C++".to_string(),
            bio: "Your average dev".to_string(),
            location: "Digital Nomad".to_string(),
            tech_stack: ["Python", "C++", "TypeScript", "FastAPI", "React", "Next.js"]
                .into_iter()
                .map(String::from)
                .collect(),
            links: vec![
                ProfileLink::new("GitHub", "https://github.com/thirduserrr"),
                ProfileLink::new("ammo.lol", "https://ammo.lol/sniped"),
                ProfileLink::new("haunt.gg", "https://haunt.gg/wan"),
            ],
            phrases: vec![
                "young and wealthy".to_string(),
                "optimizing performance".to_string(),
            ],
            typewriter: TypewriterTiming {
                speed: 120,
                delete_speed: 60,
                pause: 2500,
            },
            discord_user_id: "1190143245678805106".to_string(),
            github_handle: "thirduserrr".to_string(),
            presence_api_base: PRESENCE_API_BASE.to_string(),
            github_api_base: GITHUB_API_BASE.to_string(),
            poll_interval_secs: PRESENCE_POLL_INTERVAL.as_secs(),
            entry_title: "$$$$".to_string(),
            music_path: None,
        }
    }
}

impl ProfileConfig {
    /// Load config from a JSON file
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: ProfileConfig = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config)
    }

    /// Load `path` when given, otherwise the built-in profile
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Poll period, never shorter than one second
    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }
}
