use isl_models::{IslError, Result, TeamStats};

/// Read-only view over the season stats table.
#[derive(Debug, Clone, Default)]
pub struct TeamRepository {
    teams: Vec<TeamStats>,
}

impl TeamRepository {
    pub fn new(teams: Vec<TeamStats>) -> Self {
        Self { teams }
    }

    /// Team names in table order.
    pub fn names(&self) -> Vec<&str> {
        self.teams.iter().map(|t| t.name.as_str()).collect()
    }

    /// Exact-name lookup. The first row wins if a name appears twice.
    pub fn find(&self, name: &str) -> Option<&TeamStats> {
        self.teams.iter().find(|t| t.name == name)
    }

    pub fn get(&self, name: &str) -> Result<&TeamStats> {
        self.find(name).ok_or_else(|| IslError::TeamNotFound {
            name: name.to_string(),
        })
    }

    pub fn teams(&self) -> &[TeamStats] {
        &self.teams
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }
}
