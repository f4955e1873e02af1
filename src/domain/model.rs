use serde::{Deserialize, Serialize};

/// Top-level profile document. All fields are optional in the data file;
/// missing lists collapse to empty rather than failing the parse.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub tagline: String,
    #[serde(default, rename = "githubUsername")]
    pub github_username: String,
    #[serde(default)]
    pub experience: Vec<Experience>,
    #[serde(default)]
    pub education: Vec<Education>,
    #[serde(default)]
    pub skills: Vec<SkillGroup>,
    #[serde(default)]
    pub certifications: Vec<String>,
    #[serde(default)]
    pub links: Vec<Link>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Experience {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub dates: String,
    #[serde(default)]
    pub bullets: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Education {
    #[serde(default)]
    pub school: String,
    #[serde(default)]
    pub degree: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub dates: String,
    // Older profile files call this "cgpa".
    #[serde(default, alias = "cgpa")]
    pub grade: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SkillGroup {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub items: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Link {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, rename = "liveUrl")]
    pub live_url: String,
    #[serde(default, rename = "repoUrl")]
    pub repo_url: String,
    #[serde(default)]
    pub stars: u64,
    #[serde(default, rename = "pushedAt")]
    pub pushed_at: String,
}

/// Shape of the manual projects document (`data/projects.json`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProjectsDoc {
    #[serde(default)]
    pub projects: Vec<Project>,
}

/// Extract output: everything one render pass consumes.
#[derive(Debug, Clone)]
pub struct SiteData {
    pub profile: Profile,
    pub projects: Vec<Project>,
}

/// One rendered fragment addressed to a named page container.
#[derive(Debug, Clone)]
pub struct Section {
    pub container: String,
    pub html: String,
}

impl Section {
    pub fn new(container: &str, html: String) -> Self {
        Self {
            container: container.to_string(),
            html,
        }
    }
}

/// Transform output: ordered sections, committed to the page in one step.
#[derive(Debug, Clone)]
pub struct RenderResult {
    pub sections: Vec<Section>,
}
