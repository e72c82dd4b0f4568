//! Validate command - check an existing ChemKED YAML file.

use std::fs;
use std::path::PathBuf;

use colored::Colorize;

use chemked::{ChemkedError, ExperimentRecord, Validator};

pub fn run(file: PathBuf) -> Result<(), Box<dyn std::error::Error>> {
    if !file.exists() {
        return Err(format!("File not found: {}", file.display()).into());
    }

    let contents = fs::read_to_string(&file)?;
    let record: ExperimentRecord = serde_yaml::from_str(&contents)?;

    match Validator::new().validate(&record) {
        Ok(()) => {
            println!(
                "{} {}",
                file.display().to_string().white(),
                "is a valid ChemKED record".green().bold()
            );
            Ok(())
        }
        Err(ChemkedError::Validation(errors)) => {
            eprintln!(
                "{} {} error(s):",
                file.display().to_string().white(),
                errors.len().to_string().red().bold()
            );
            for error in &errors {
                eprintln!("  {} {}", error.path.yellow(), error.message);
            }
            Err(format!("{} validation error(s)", errors.len()).into())
        }
        Err(other) => Err(other.into()),
    }
}
