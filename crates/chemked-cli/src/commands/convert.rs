//! Convert command - convert a ReSpecTh XML file to ChemKED YAML.

use std::path::PathBuf;

use colored::Colorize;

use chemked::{Converter, CrossrefClient};

pub fn run(
    input: PathBuf,
    output: Option<PathBuf>,
    file_author: Option<String>,
    file_author_orcid: Option<String>,
    offline: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    if !input.exists() {
        return Err(format!("File not found: {}", input.display()).into());
    }

    println!(
        "{} {}",
        "Converting".cyan().bold(),
        input.display().to_string().white()
    );

    let mut converter = Converter::new();
    if !offline {
        converter = converter.with_lookup(CrossrefClient::new()?);
    }

    let destination = converter.convert_file(
        &input,
        output.as_deref(),
        file_author.as_deref(),
        file_author_orcid.as_deref(),
    )?;

    println!(
        "{} {}",
        "Converted to".green().bold(),
        destination.display().to_string().white()
    );

    Ok(())
}
