mod config;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use config::AppConfig;
use isl_data::{load_matches, load_team_stats, LogoStore, TeamRepository};
use isl_ml::{ScoreRegressor, SyntheticTrainer};
use isl_models::IslError;
use isl_services::{select_teams, FormCalculator, MatchupService, PredictorService, TerminalPresenter};
use std::io::{self, BufRead, IsTerminal, Write};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "isl-predictor")]
#[command(about = "ISL football score predictor", long_about = None)]
struct Cli {
    /// Extra config file layered over config/default, config/{RUN_MODE} and config/local
    #[arg(short, long, env = "ISL_CONFIG")]
    config: Option<String>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List the teams in the stats table
    Teams,
    /// Fit the score model on synthetic fixtures and save the artifact
    Train,
    /// Show a team's recent form
    Form {
        /// Team name as it appears after " FC" stripping
        team: String,
    },
    /// Show the matchup and predict the scoreline
    Predict {
        /// Home team name
        home: String,
        /// Away team name
        away: String,
    },
    /// Pick teams from a menu, then predict on request (default)
    Interactive,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose {
        "isl_predictor=debug,isl_ml=debug,isl_services=debug,isl_data=debug"
    } else {
        "isl_predictor=info,isl_ml=info,isl_services=info,isl_data=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::new(cli.config.as_deref()).context("failed to load configuration")?;
    let presenter = TerminalPresenter::new(!cli.no_color && io::stdout().is_terminal());

    match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Teams => list_teams(&config, &presenter),
        Commands::Train => train(&config),
        Commands::Form { team } => show_form(&config, &presenter, &team),
        Commands::Predict { home, away } => predict(&config, &presenter, &home, &away),
        Commands::Interactive => interactive(&config, &presenter),
    }
}

fn load_teams(config: &AppConfig) -> Result<TeamRepository> {
    let teams = load_team_stats(&config.data.team_stats_path)
        .with_context(|| format!("failed to load team stats from {}", config.data.team_stats_path))?;
    Ok(TeamRepository::new(teams))
}

fn list_teams(config: &AppConfig, presenter: &TerminalPresenter) -> Result<()> {
    let teams = load_teams(config)?;
    presenter.render_team_list(&mut io::stdout().lock(), &teams.names())?;
    Ok(())
}

fn train(config: &AppConfig) -> Result<()> {
    let teams = load_teams(config)?;
    info!("🚀 Training on {} teams", teams.len());

    let trainer = SyntheticTrainer::new(Some(config.trainer_config()));
    let outcome = trainer.train(teams.teams())?;
    outcome.model.save(&config.model.artifact_path)?;

    println!("Model saved as {}", config.model.artifact_path);
    Ok(())
}

fn show_form(config: &AppConfig, presenter: &TerminalPresenter, team: &str) -> Result<()> {
    let matches = load_matches(&config.data.matches_path)
        .with_context(|| format!("failed to load matches from {}", config.data.matches_path))?;
    let form = FormCalculator::new(config.form.window).recent_form(team, &matches);
    presenter.render_form(&mut io::stdout().lock(), team, &form)?;
    Ok(())
}

/// Renders the matchup for `home` vs `away`; predicts when `confirm` says so.
///
/// Everything is reloaded from disk on each call.
fn run_matchup<F>(
    config: &AppConfig,
    presenter: &TerminalPresenter,
    home: &str,
    away: &str,
    confirm: F,
) -> Result<()>
where
    F: FnOnce() -> Result<bool>,
{
    let teams = load_teams(config)?;
    let (home, away) = match select_teams(&teams, home, away) {
        Err(IslError::SameTeamSelected { team }) => {
            warn!(team = %team, "Identical teams selected");
            println!("⚠️  Home and Away teams must be different.");
            return Ok(());
        }
        other => other?,
    };

    let matches = load_matches(&config.data.matches_path)
        .with_context(|| format!("failed to load matches from {}", config.data.matches_path))?;
    let matchup = MatchupService::new(
        FormCalculator::new(config.form.window),
        LogoStore::new(&config.data.logos_dir),
    )
    .build(home, away, &matches);

    let mut out = io::stdout().lock();
    presenter.render_matchup(&mut out, &matchup)?;
    writeln!(out)?;
    drop(out);

    if !confirm()? {
        return Ok(());
    }

    let model = ScoreRegressor::load(&config.model.artifact_path)
        .with_context(|| format!("failed to load model from {}", config.model.artifact_path))?;
    let prediction = PredictorService::new(model).predict(home, away)?;
    presenter.render_prediction(&mut io::stdout().lock(), &prediction)?;
    Ok(())
}

fn predict(config: &AppConfig, presenter: &TerminalPresenter, home: &str, away: &str) -> Result<()> {
    run_matchup(config, presenter, home, away, || Ok(true))
}

fn prompt(stdin: &mut impl BufRead, message: &str) -> Result<String> {
    print!("{message}");
    io::stdout().flush()?;
    let mut line = String::new();
    stdin.read_line(&mut line)?;
    Ok(line.trim().to_string())
}

/// Accepts either a 1-based menu index or an exact team name.
fn resolve_choice(names: &[&str], choice: &str) -> Option<String> {
    if let Ok(idx) = choice.parse::<usize>() {
        return names.get(idx.checked_sub(1)?).map(|s| (*s).to_string());
    }
    names.iter().find(|n| **n == choice).map(|s| (*s).to_string())
}

fn interactive(config: &AppConfig, presenter: &TerminalPresenter) -> Result<()> {
    let teams = load_teams(config)?;
    let names = teams.names();
    let mut stdin = io::stdin().lock();

    println!("⚽ ISL Football Score Predictor");
    presenter.render_team_list(&mut io::stdout().lock(), &names)?;

    let home_choice = prompt(&mut stdin, "Select Home Team: ")?;
    let Some(home) = resolve_choice(&names, &home_choice) else {
        println!("Unknown team: {home_choice}");
        return Ok(());
    };
    let away_choice = prompt(&mut stdin, "Select Away Team: ")?;
    let Some(away) = resolve_choice(&names, &away_choice) else {
        println!("Unknown team: {away_choice}");
        return Ok(());
    };

    run_matchup(config, presenter, &home, &away, || {
        let answer = prompt(&mut stdin, "Predict Match Result? [y/N] ")?;
        Ok(matches!(answer.to_lowercase().as_str(), "y" | "yes"))
    })
}
