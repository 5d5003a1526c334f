//! Converter pipeline: import the league workbook, merge player stats,
//! assemble the season documents, and update the season manifest.
//!
//! This lives in the library crate so the pipeline is testable without
//! spawning the binary; `src/bin/league_convert.rs` is a thin wrapper around
//! [`cli::run`].

pub mod cli;

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use league_model::{Manifest, PlayerRecord, SeasonCode, SeasonMetadata, SeasonStats};
use league_xlsx::LeagueImport;

/// Shared manifest tracking every season with published output.
pub const MANIFEST_FILE: &str = "metadata_manifest.json";

pub fn stats_file_name(season: &SeasonCode) -> String {
    format!("league_stats_{season}.json")
}

pub fn metadata_file_name(season: &SeasonCode) -> String {
    format!("league_metadata_{season}.json")
}

/// Merge the import into the season documents.
///
/// Every scoring-sheet player lands in the stats document; players without an
/// additional-stats entry get an all-zero block. The metadata document is
/// `None` unless the league-points sheet existed and yielded at least one
/// round.
pub fn build_documents(
    import: LeagueImport,
    season: &SeasonCode,
) -> (SeasonStats, Option<SeasonMetadata>) {
    let LeagueImport {
        players,
        additional,
        rounds,
        total_rounds,
        current_round,
        ..
    } = import;

    let records: Vec<PlayerRecord> = players
        .into_iter()
        .map(|basic| {
            let stats = additional.get(&basic.key()).copied();
            PlayerRecord::merge(basic, stats)
        })
        .collect();

    let stats = SeasonStats::new(season.label(), total_rounds, records);
    let metadata = rounds.and_then(|rounds| {
        SeasonMetadata::assemble(season.label(), current_round, total_rounds, rounds)
    });

    (stats, metadata)
}

/// Write `value` as pretty-printed JSON. `serde_json` emits UTF-8 without
/// escaping, so the Korean document keys stay human-readable.
pub fn write_json_pretty<T: serde::Serialize>(path: &Path, value: &T) -> Result<()> {
    let mut json = serde_json::to_string_pretty(value).context("serialize JSON document")?;
    json.push('\n');
    fs::write(path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(())
}

/// Read-modify-write the season manifest in `dir`. A missing file starts from
/// an empty manifest. Returns `true` when the season was newly added;
/// re-running with the same code is a no-op on the contents.
pub fn update_manifest(dir: &Path, season_code: &str) -> Result<bool> {
    let path = dir.join(MANIFEST_FILE);

    let mut manifest = match fs::read_to_string(&path) {
        Ok(text) => serde_json::from_str::<Manifest>(&text)
            .with_context(|| format!("parse {}", path.display()))?,
        Err(err) if err.kind() == ErrorKind::NotFound => Manifest::default(),
        Err(err) => return Err(err).with_context(|| format!("read {}", path.display())),
    };

    let inserted = manifest.insert(season_code);
    write_json_pretty(&path, &manifest)?;
    Ok(inserted)
}

/// Summary of one conversion run, for console reporting.
#[derive(Debug)]
pub struct ConvertReport {
    pub stats_path: PathBuf,
    pub metadata_path: Option<PathBuf>,
    pub season_label: String,
    pub total_rounds: u32,
    pub player_count: usize,
    pub warnings: Vec<String>,
}

/// The whole pipeline for one workbook. Any failure aborts the run; the
/// season code is validated by the caller before any output is touched.
pub fn run_convert(workbook: &Path, season: &SeasonCode, out_dir: &Path) -> Result<ConvertReport> {
    let import = league_xlsx::import_league_workbook(workbook)
        .with_context(|| format!("import {}", workbook.display()))?;
    let warnings: Vec<String> = import.warnings.iter().map(|w| w.message.clone()).collect();

    let (stats, metadata) = build_documents(import, season);

    fs::create_dir_all(out_dir)
        .with_context(|| format!("create output directory {}", out_dir.display()))?;

    let stats_path = out_dir.join(stats_file_name(season));
    write_json_pretty(&stats_path, &stats)?;

    let metadata_path = match &metadata {
        Some(document) => {
            let path = out_dir.join(metadata_file_name(season));
            write_json_pretty(&path, document)?;
            Some(path)
        }
        None => None,
    };

    update_manifest(out_dir, &season.to_string())?;

    Ok(ConvertReport {
        stats_path,
        metadata_path,
        season_label: stats.season,
        total_rounds: stats.total_rounds,
        player_count: stats.player_count,
        warnings,
    })
}
