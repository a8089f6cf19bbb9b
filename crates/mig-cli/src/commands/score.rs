use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use mig_core::quality::frame_mig;

#[derive(Args)]
pub struct ScoreArgs {
    /// Image files to score
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: &ScoreArgs) -> Result<()> {
    let width = args
        .files
        .iter()
        .map(|p| p.display().to_string().len())
        .max()
        .unwrap_or(0)
        .max(4);

    println!("{:<width$}  {:>12}", "File", "MIG");
    println!("{}", "-".repeat(width + 14));

    for path in &args.files {
        let mig = frame_mig(path)?;
        println!("{:<width$}  {:>12.6}", path.display().to_string(), mig);
    }

    Ok(())
}
