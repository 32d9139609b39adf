use crate::commands::read_document;
use crate::config::Config;
use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;
use mailblock_compiler_html::EmailPackage;
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PackageArgs {
    /// Document file to compile
    pub file: String,

    /// Email subject line
    #[arg(short, long)]
    pub subject: String,

    /// Recipient addresses
    #[arg(long = "to", required = true, num_args = 1..)]
    pub recipients: Vec<String>,

    /// Write the package here instead of stdout
    #[arg(short, long)]
    pub output: Option<String>,
}

pub fn package(args: PackageArgs, cwd: &str) -> Result<()> {
    let config = Config::load(cwd)?;
    let document = read_document(&PathBuf::from(cwd).join(&args.file))?;

    let package = EmailPackage::build(
        args.subject,
        &args.recipients,
        &document,
        &config.compile_options(),
    );
    let json = package.to_json().context("Cannot serialize package")?;

    match &args.output {
        Some(output) => {
            let output_file = PathBuf::from(cwd).join(output);
            if let Some(parent) = output_file.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&output_file, json)?;
            println!(
                "{} Packaged {} for {} recipient(s) → {}",
                "✓".green(),
                args.file,
                package.recipients.len(),
                output_file.display()
            );
        }
        None => println!("{}", json),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_package_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        fs::write(
            dir.path().join("promo.email.json"),
            r#"[{ "id": "b", "kind": "button", "content": "Buy", "link": "/buy" }]"#,
        )
        .unwrap();

        package(
            PackageArgs {
                file: "promo.email.json".to_string(),
                subject: "Spring sale".to_string(),
                recipients: vec![
                    "a@example.com".to_string(),
                    " a@example.com ".to_string(),
                    "b@example.com".to_string(),
                ],
                output: Some("out/promo.json".to_string()),
            },
            &cwd,
        )
        .unwrap();

        let written = fs::read_to_string(dir.path().join("out/promo.json")).unwrap();
        let package: EmailPackage = serde_json::from_str(&written).unwrap();
        assert_eq!(package.subject, "Spring sale");
        assert_eq!(package.recipients, vec!["a@example.com", "b@example.com"]);
        assert!(package.html.contains("<a href=\"/buy\" class=\"button\""));
    }
}
