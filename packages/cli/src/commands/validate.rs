use crate::commands::read_document;
use anyhow::Result;
use clap::Args;
use colored::Colorize;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Document file to check
    pub file: String,
}

pub fn validate(args: ValidateArgs, cwd: &str) -> Result<()> {
    let path = PathBuf::from(cwd).join(&args.file);
    let document = read_document(&path)?;

    println!(
        "{} {} is valid: {} top-level blocks, {} in total ({} layouts)",
        "✓".green(),
        args.file.bright_white(),
        document.len(),
        document.block_count(),
        document.layouts().count()
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(contents: &str) -> Result<()> {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("doc.email.json"), contents).unwrap();
        validate(
            ValidateArgs {
                file: "doc.email.json".to_string(),
            },
            &dir.path().display().to_string(),
        )
    }

    #[test]
    fn test_valid_document() {
        assert!(run(r#"[{ "id": "a", "kind": "spacer" }]"#).is_ok());
    }

    #[test]
    fn test_short_layout_is_rejected() {
        let err = run(r#"[{ "id": "l", "kind": "layout", "layoutType": "three-column", "columns": [[], []] }]"#)
            .unwrap_err();
        assert!(format!("{:#}", err).contains("Invalid document"));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = validate(
            ValidateArgs {
                file: "nope.email.json".to_string(),
            },
            &dir.path().display().to_string(),
        );
        assert!(result.is_err());
    }
}
