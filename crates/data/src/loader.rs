// Team stats and match history loading

use csv::{ReaderBuilder, StringRecord, Trim};
use isl_models::{IslError, MatchRecord, Result, TeamStats, STAT_COLUMNS};
use serde::Deserialize;
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

use crate::dates::parse_match_date;

const TEAM_NAME_COLUMN: &str = "Squad";
const MATCH_COLUMNS: [&str; 4] = ["Home", "Away", "Date", "Score"];

#[derive(Debug, Deserialize)]
struct RawMatch {
    #[serde(rename = "Home")]
    home: String,
    #[serde(rename = "Away")]
    away: String,
    #[serde(rename = "Date")]
    date: Option<String>,
    #[serde(rename = "Score")]
    score: Option<String>,
}

/// Decodes file contents as UTF-8, falling back to ISO-8859-1.
///
/// Every byte is a valid Latin-1 code point, so the fallback cannot fail.
pub fn decode_text(bytes: Vec<u8>) -> String {
    match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            debug!("Input is not UTF-8, decoding as ISO-8859-1");
            err.into_bytes().into_iter().map(char::from).collect()
        }
    }
}

fn require_columns(headers: &StringRecord, columns: &[&str], file: &str) -> Result<()> {
    for column in columns {
        if !headers.iter().any(|h| h == *column) {
            return Err(IslError::MissingColumn {
                column: (*column).to_string(),
                file: file.to_string(),
            });
        }
    }
    Ok(())
}

/// Parses the season stats table. One row per team, extra columns ignored.
pub fn parse_team_stats(text: &str, source: &str) -> Result<Vec<TeamStats>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut required = vec![TEAM_NAME_COLUMN];
    required.extend(STAT_COLUMNS);
    require_columns(reader.headers()?, &required, source)?;

    let teams = reader
        .deserialize::<TeamStats>()
        .collect::<std::result::Result<Vec<_>, _>>()?;

    Ok(teams)
}

/// Parses the match history. Names are normalized and scores parsed on the way in;
/// rows with an unreadable date or score are kept with `None` in those fields.
pub fn parse_matches(text: &str, source: &str) -> Result<Vec<MatchRecord>> {
    let mut reader = ReaderBuilder::new()
        .trim(Trim::All)
        .flexible(true)
        .from_reader(text.as_bytes());

    require_columns(reader.headers()?, &MATCH_COLUMNS, source)?;

    let mut matches = Vec::new();
    for row in reader.deserialize::<RawMatch>() {
        let raw = row?;
        let date = raw.date.as_deref().and_then(parse_match_date);
        if date.is_none() {
            debug!(home = %raw.home, away = %raw.away, "Match has no usable date");
        }
        matches.push(MatchRecord::new(
            &raw.home,
            &raw.away,
            date,
            raw.score.unwrap_or_default(),
        ));
    }

    let unparsed = matches.iter().filter(|m| !m.has_result()).count();
    if unparsed > 0 {
        warn!("{} of {} matches have no parseable score", unparsed, matches.len());
    }

    Ok(matches)
}

pub fn load_team_stats(path: impl AsRef<Path>) -> Result<Vec<TeamStats>> {
    let path = path.as_ref();
    let text = decode_text(fs::read(path)?);
    let teams = parse_team_stats(&text, &path.display().to_string())?;
    info!("Loaded {} teams from {}", teams.len(), path.display());
    Ok(teams)
}

pub fn load_matches(path: impl AsRef<Path>) -> Result<Vec<MatchRecord>> {
    let path = path.as_ref();
    let text = decode_text(fs::read(path)?);
    let matches = parse_matches(&text, &path.display().to_string())?;
    info!("Loaded {} matches from {}", matches.len(), path.display());
    Ok(matches)
}
