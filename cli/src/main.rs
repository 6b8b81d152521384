//! undocx CLI - Word paragraph text extraction tool

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

#[derive(Parser)]
#[command(name = "undocx")]
#[command(author = "iyulab")]
#[command(version)]
#[command(about = "Write the paragraph text of a Word document to a plain-text file", long_about = None)]
struct Cli {
    /// Input DOCX file
    #[arg(value_name = "FILE", default_value = "document.docx")]
    input: PathBuf,

    /// Output text file (created or overwritten)
    #[arg(value_name = "OUTPUT", default_value = "doc_content.txt")]
    output: PathBuf,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();
    log::debug!("extracting {} -> {}", cli.input.display(), cli.output.display());

    // Both outcomes are reported on stdout; the exit status stays 0
    match undocx::extract(&cli.input, &cli.output) {
        Ok(()) => println!("{}", "Document extracted successfully".green()),
        Err(e) => {
            let message = format!("Error extracting document: {}", e);
            println!("{}", message.as_str().red());
        }
    }
}
