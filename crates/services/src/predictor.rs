// Prediction service

use isl_data::{LogoStore, TeamRepository};
use isl_ml::{FeatureEngineer, PredictionModel};
use isl_models::{FormEntry, FormSummary, IslError, MatchRecord, Result, ScorePrediction, TeamStats};
use std::path::PathBuf;
use tracing::{info, warn};

use crate::comparison::ComparisonChart;
use crate::form::FormCalculator;

/// Resolves a home/away selection, rejecting identical picks before any lookup.
pub fn select_teams<'a>(
    teams: &'a TeamRepository,
    home: &str,
    away: &str,
) -> Result<(&'a TeamStats, &'a TeamStats)> {
    if home == away {
        return Err(IslError::SameTeamSelected {
            team: home.to_string(),
        });
    }
    Ok((teams.get(home)?, teams.get(away)?))
}

pub struct PredictorService<M> {
    model: M,
    engineer: FeatureEngineer,
}

impl<M: PredictionModel> PredictorService<M> {
    pub fn new(model: M) -> Self {
        Self {
            model,
            engineer: FeatureEngineer::new(),
        }
    }

    pub fn model(&self) -> &M {
        &self.model
    }

    pub fn predict(&self, home: &TeamStats, away: &TeamStats) -> Result<ScorePrediction> {
        if home.name == away.name {
            return Err(IslError::SameTeamSelected {
                team: home.name.clone(),
            });
        }

        let features = self.engineer.extract_features(home, away);
        let prediction = self.model.predict(&features)?;

        if !prediction.is_non_negative() {
            warn!(
                raw_home = prediction.raw_home,
                raw_away = prediction.raw_away,
                "Model output rounds below zero; inference does not clamp"
            );
        }
        info!(
            "🎯 {} {} - {} {} ({})",
            prediction.home_team,
            prediction.home_score,
            prediction.away_score,
            prediction.away_team,
            self.model.model_name()
        );

        Ok(prediction)
    }

    pub fn predict_fixture(
        &self,
        teams: &TeamRepository,
        home: &str,
        away: &str,
    ) -> Result<ScorePrediction> {
        let (home, away) = select_teams(teams, home, away)?;
        self.predict(home, away)
    }
}

/// Everything shown for one side of the fixture.
#[derive(Debug, Clone)]
pub struct TeamPanel {
    pub stats: TeamStats,
    pub logo: Option<PathBuf>,
    pub form: Vec<FormEntry>,
    pub summary: FormSummary,
}

#[derive(Debug, Clone)]
pub struct Matchup {
    pub home: TeamPanel,
    pub away: TeamPanel,
    pub comparison: ComparisonChart,
    pub form_window: usize,
}

/// Assembles the pre-prediction view: headers, recent form and stat comparison.
pub struct MatchupService {
    form: FormCalculator,
    logos: LogoStore,
}

impl MatchupService {
    pub fn new(form: FormCalculator, logos: LogoStore) -> Self {
        Self { form, logos }
    }

    fn panel(&self, stats: &TeamStats, matches: &[MatchRecord]) -> TeamPanel {
        let form = self.form.recent_form(&stats.name, matches);
        TeamPanel {
            stats: stats.clone(),
            logo: self.logos.logo_for(&stats.name),
            summary: FormSummary::from_entries(&form),
            form,
        }
    }

    pub fn build(&self, home: &TeamStats, away: &TeamStats, matches: &[MatchRecord]) -> Matchup {
        Matchup {
            home: self.panel(home, matches),
            away: self.panel(away, matches),
            comparison: ComparisonChart::new(home, away),
            form_window: self.form.window(),
        }
    }
}
