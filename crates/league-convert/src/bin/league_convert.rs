use anyhow::Result;

fn main() -> Result<()> {
    league_convert::cli::run()
}
