use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use cutplan::config::CutPlanConfig;
use cutplan::io;
use cutplan::io::cli::Cli;
use cutplan::job::Job;
use cutplan::plan::plan;
use log::{info, warn};

fn main() -> Result<()> {
    let args = Cli::parse();
    io::init_logger(args.log_level)?;

    let config = match args.config_file {
        None => {
            warn!("[MAIN] No config file provided, use --config-file to provide a custom config");
            CutPlanConfig::default()
        }
        Some(config_file) => io::read_config(&config_file)?,
    };
    info!("Successfully parsed CutPlanConfig: {config:?}");

    let (job, input_stem) = match args.input_file {
        None => {
            warn!("[MAIN] No job file provided, solving the example job, use --input-file to provide one");
            (Job::default(), "example".to_string())
        }
        Some(input_file) => {
            let stem = input_file
                .file_stem()
                .and_then(|s| s.to_str())
                .context("job file has no valid file name")?
                .to_string();
            (io::read_job(&input_file)?, stem)
        }
    };
    info!("Successfully parsed Job: {job:?}");

    if !args.solution_folder.exists() {
        fs::create_dir_all(&args.solution_folder).with_context(|| {
            format!(
                "could not create solution folder: {:?}",
                args.solution_folder
            )
        })?;
    }

    let output = plan(&job, &config)?;

    let solution_path = args.solution_folder.join(format!("sol_{input_stem}.json"));
    io::write_json(&output, Path::new(&solution_path))?;

    Ok(())
}
