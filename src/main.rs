use anyhow::{Context, Result};

use rusty_roster::{Roster, WorksheetReport};

fn main() -> Result<()> {
    env_logger::init();

    let roster = Roster::starter();
    log::info!("loaded starter roster with {} characters", roster.len());

    let report = WorksheetReport::build(&roster);
    let json = serde_json::to_string_pretty(&report).context("serializing worksheet report")?;
    println!("{json}");

    Ok(())
}
