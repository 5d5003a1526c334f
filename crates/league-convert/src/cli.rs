use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use league_model::SeasonCode;

/// CLI arguments for the converter binary.
///
/// This lives in the library crate so the argument surface can be exercised
/// in tests without spawning the binary.
#[derive(Parser)]
#[command(about = "Convert the GBL league spreadsheet export into the published JSON documents.")]
pub struct Args {
    /// League workbook (`.xlsx`) exported from the template.
    pub workbook: PathBuf,

    /// Season code in YYYYMM form (e.g. 202601).
    pub season_code: String,

    /// Directory the JSON documents and the manifest are written to.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,
}

pub fn run() -> Result<()> {
    run_with_args(Args::parse())
}

pub fn run_with_args(args: Args) -> Result<()> {
    // Validate the season code before anything is written.
    let season: SeasonCode = args.season_code.parse()?;

    if !args.workbook.exists() {
        eprintln!("오류: 파일을 찾을 수 없습니다 - {}", args.workbook.display());
        std::process::exit(1);
    }

    let report = crate::run_convert(&args.workbook, &season, &args.out_dir)?;

    for warning in &report.warnings {
        eprintln!("경고: {warning}");
    }

    println!("변환 완료: {}", report.stats_path.display());
    if let Some(path) = &report.metadata_path {
        println!("메타데이터: {}", path.display());
    }
    println!("시즌: {}", report.season_label);
    println!("총 라운드: {}", report.total_rounds);
    println!("총 선수 수: {}", report.player_count);

    Ok(())
}
