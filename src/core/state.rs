//! Explicit view state for the project section, replacing ambient DOM reads.
//!
//! Each user action is a [`Command`]; applying one is a pure computation of
//! the next state plus a flag saying whether the page must be re-rendered.
//! The commit (render + write) happens elsewhere, so this part is testable
//! without any I/O.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectSource {
    Manual,
    Remote,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewState {
    pub source: ProjectSource,
    pub username: String,
}

#[derive(Debug, Clone)]
pub enum Command {
    /// The source toggle: true selects the remote repository listing.
    ToggleRemote(bool),
    /// The username input; takes effect on the next reload.
    SetUsername(String),
    /// The reload trigger.
    Reload,
}

impl ViewState {
    pub fn new(use_remote: bool, username: &str) -> Self {
        Self {
            source: if use_remote {
                ProjectSource::Remote
            } else {
                ProjectSource::Manual
            },
            username: username.trim().to_string(),
        }
    }

    /// Computes the next state. The returned flag tells the caller whether a
    /// refresh of the project section is due.
    pub fn apply(&self, cmd: &Command) -> (ViewState, bool) {
        match cmd {
            Command::ToggleRemote(on) => {
                let mut next = self.clone();
                next.source = if *on {
                    ProjectSource::Remote
                } else {
                    ProjectSource::Manual
                };
                (next, true)
            }
            Command::SetUsername(name) => {
                let mut next = self.clone();
                next.username = name.trim().to_string();
                (next, false)
            }
            Command::Reload => (self.clone(), true),
        }
    }

    /// Remote is only usable with a username; otherwise fall back to manual.
    pub fn effective_source(&self) -> ProjectSource {
        if self.source == ProjectSource::Remote && !self.username.is_empty() {
            ProjectSource::Remote
        } else {
            ProjectSource::Manual
        }
    }
}
