// Terminal rendering of the matchup and prediction

use crossterm::style::{Color, StyledContent, Stylize};
use isl_models::{FormEntry, FormResult, FormSummary, PredictedOutcome, ScorePrediction};
use std::fmt::Display;
use std::io::{self, Write};

use crate::comparison::ComparisonChart;
use crate::predictor::{Matchup, TeamPanel};

const BAR_WIDTH: usize = 40;

const HOME_COLOR: Color = Color::Blue;
const AWAY_COLOR: Color = Color::Red;

/// Writes the interactive views as plain text, optionally with ANSI colour.
#[derive(Debug, Clone, Copy)]
pub struct TerminalPresenter {
    color: bool,
}

impl TerminalPresenter {
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Applies the style when colour is on, otherwise writes the bare content.
    fn paint<D: Display>(&self, styled: StyledContent<D>) -> String {
        if self.color {
            styled.to_string()
        } else {
            styled.content().to_string()
        }
    }

    fn badge(&self, result: FormResult) -> String {
        let color = match result {
            FormResult::Win => Color::Green,
            FormResult::Draw => Color::Yellow,
            FormResult::Loss => Color::Red,
        };
        self.paint(result.letter().with(color).bold())
    }

    pub fn render_team_list<W: Write>(&self, out: &mut W, names: &[&str]) -> io::Result<()> {
        for (i, name) in names.iter().enumerate() {
            writeln!(out, "{:>3}. {}", i + 1, name)?;
        }
        Ok(())
    }

    pub fn render_header<W: Write>(&self, out: &mut W, panel: &TeamPanel) -> io::Result<()> {
        writeln!(out, "### {}", self.paint(panel.stats.name.as_str().bold()))?;
        if let Some(logo) = &panel.logo {
            writeln!(out, "    logo: {}", logo.display())?;
        }
        Ok(())
    }

    /// Badges, goal totals and the mini form chart for one team.
    pub fn render_form<W: Write>(&self, out: &mut W, team: &str, form: &[FormEntry]) -> io::Result<()> {
        writeln!(out, "{}", self.paint(team.bold()))?;
        if form.is_empty() {
            writeln!(out, "_No recent data available_")?;
            return Ok(());
        }

        let badges: Vec<String> = form.iter().map(|e| self.badge(e.result)).collect();
        writeln!(out, "{}", badges.join(" "))?;

        let summary = FormSummary::from_entries(form);
        writeln!(out, "GF: {} | GA: {}", summary.goals_for, summary.goals_against)?;

        self.render_form_chart(out, team, form)
    }

    /// Goals scored and conceded per match, oldest on the left; the most
    /// recent match is labelled M1.
    pub fn render_form_chart<W: Write>(&self, out: &mut W, team: &str, form: &[FormEntry]) -> io::Result<()> {
        writeln!(out, "{team} Form")?;

        let mut header = String::from("      ");
        let mut scored = String::from("GF    ");
        let mut conceded = String::from("GA    ");
        for (idx, entry) in form.iter().enumerate().rev() {
            header.push_str(&format!("{:>4}", format!("M{}", idx + 1)));
            scored.push_str(&format!("{:>4}", entry.goals_for));
            conceded.push_str(&format!("{:>4}", entry.goals_against));
        }

        writeln!(out, "{header}")?;
        writeln!(out, "{}", self.paint(scored.as_str().with(HOME_COLOR)))?;
        writeln!(out, "{}", self.paint(conceded.as_str().with(AWAY_COLOR)))?;
        Ok(())
    }

    /// Grouped horizontal bars, each annotated with its value to one decimal.
    pub fn render_comparison<W: Write>(&self, out: &mut W, chart: &ComparisonChart) -> io::Result<()> {
        writeln!(out, "Team Comparison")?;
        let scale = chart.max_value();
        let name_width = display_width(&chart.home.team).max(display_width(&chart.away.team));

        for group in chart.groups() {
            writeln!(out, "{}", group.label)?;
            for (team, value, color) in [
                (&chart.home.team, group.home, HOME_COLOR),
                (&chart.away.team, group.away, AWAY_COLOR),
            ] {
                let bar = "█".repeat(bar_length(value, scale));
                writeln!(
                    out,
                    "  {:<width$} {} {:.1}",
                    team,
                    self.paint(bar.as_str().with(color)),
                    value,
                    width = name_width
                )?;
            }
        }
        Ok(())
    }

    pub fn render_matchup<W: Write>(&self, out: &mut W, matchup: &Matchup) -> io::Result<()> {
        self.render_header(out, &matchup.home)?;
        self.render_header(out, &matchup.away)?;

        writeln!(out)?;
        writeln!(out, "📊 Recent Form (Last {} Matches)", matchup.form_window)?;
        self.render_form(out, &matchup.home.stats.name, &matchup.home.form)?;
        writeln!(out)?;
        self.render_form(out, &matchup.away.stats.name, &matchup.away.form)?;

        writeln!(out)?;
        self.render_comparison(out, &matchup.comparison)
    }

    pub fn render_prediction<W: Write>(&self, out: &mut W, prediction: &ScorePrediction) -> io::Result<()> {
        writeln!(out, "🔮 Predicted Match Result")?;
        writeln!(
            out,
            "    {}  {} - {}  {}",
            self.paint(prediction.home_team.as_str().with(HOME_COLOR).bold()),
            prediction.home_score,
            prediction.away_score,
            self.paint(prediction.away_team.as_str().with(AWAY_COLOR).bold())
        )?;
        writeln!(out, "    {}", banner(prediction))?;
        Ok(())
    }
}

// `{:<width$}` pads by chars, not bytes
fn display_width(name: &str) -> usize {
    name.chars().count()
}

fn bar_length(value: f64, scale: f64) -> usize {
    if scale <= 0.0 || value <= 0.0 {
        return 0;
    }
    ((value / scale) * BAR_WIDTH as f64).round() as usize
}

/// Winner or draw line shown under the scoreline.
pub fn banner(prediction: &ScorePrediction) -> String {
    match prediction.outcome() {
        PredictedOutcome::HomeWin => format!("🏆 {} Wins!", prediction.home_team),
        PredictedOutcome::AwayWin => format!("🏆 {} Wins!", prediction.away_team),
        PredictedOutcome::Draw => "🤝 It's a Draw!".to_string(),
    }
}
