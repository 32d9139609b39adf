use crate::commands::read_document;
use crate::config::{Config, DOCUMENT_SUFFIX};
use anyhow::{anyhow, Result};
use clap::Args;
use colored::Colorize;
use mailblock_compiler_html::{compile_with, CompileOptions};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Args)]
pub struct CompileArgs {
    /// Project directory (defaults to current directory)
    #[arg(default_value = ".")]
    pub path: String,

    /// Output to stdout instead of files
    #[arg(long)]
    pub stdout: bool,

    /// Output directory (overrides config)
    #[arg(short, long)]
    pub out_dir: Option<String>,

    /// Pretty print HTML (overrides config)
    #[arg(long)]
    pub pretty: bool,

    /// Email title (overrides config)
    #[arg(long)]
    pub title: Option<String>,
}

pub fn compile(args: CompileArgs, cwd: &str) -> Result<()> {
    let project_dir = PathBuf::from(cwd).join(&args.path).display().to_string();
    let config = Config::load(&project_dir)?;
    let src_dir = config.get_src_dir(&project_dir);

    if !src_dir.exists() {
        return Err(anyhow!("Source directory does not exist: {:?}", src_dir));
    }

    let mut options = config.compile_options();
    if args.pretty {
        options.pretty = true;
    }
    if let Some(title) = &args.title {
        options.title = title.clone();
    }

    let out_dir = match &args.out_dir {
        Some(out) => PathBuf::from(&project_dir).join(out),
        None => config.get_out_dir(&project_dir),
    };

    println!("{}", "🔨 Compiling email documents...".bright_blue().bold());

    let documents = find_documents(&src_dir);

    if documents.is_empty() {
        println!("{}", format!("⚠️  No *{} files found", DOCUMENT_SUFFIX).yellow());
        return Ok(());
    }

    println!("Found {} files", documents.len());

    let mut success_count = 0;
    let mut error_count = 0;

    for file in &documents {
        let relative_path = file.strip_prefix(&src_dir).unwrap_or(file);
        match compile_file(file, &options, args.stdout, &out_dir) {
            Ok(output_path) => {
                success_count += 1;
                println!(
                    "  {} {} → {}",
                    "✓".green(),
                    relative_path.display(),
                    output_path
                );
            }
            Err(e) => {
                error_count += 1;
                eprintln!(
                    "  {} {} - {}",
                    "✗".red(),
                    relative_path.display(),
                    format!("{:#}", e).red()
                );
            }
        }
    }

    println!();
    if error_count == 0 {
        println!(
            "{} Compiled {} files successfully",
            "✅".green(),
            success_count
        );
        Ok(())
    } else {
        Err(anyhow!(
            "Compiled {} files, {} errors",
            success_count,
            error_count
        ))
    }
}

/// Every `*.email.json` under `dir`, sorted for stable output.
pub(crate) fn find_documents(dir: &Path) -> Vec<PathBuf> {
    let mut files: Vec<PathBuf> = WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|entry| entry.file_type().is_file())
        .filter(|entry| {
            entry
                .file_name()
                .to_str()
                .is_some_and(|name| name.ends_with(DOCUMENT_SUFFIX))
        })
        .map(|entry| entry.into_path())
        .collect();
    files.sort();
    files
}

/// `welcome.email.json` → `welcome`
pub(crate) fn document_stem(path: &Path) -> String {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("email");
    name.strip_suffix(DOCUMENT_SUFFIX).unwrap_or(name).to_string()
}

fn compile_file(
    file_path: &Path,
    options: &CompileOptions,
    stdout: bool,
    out_dir: &Path,
) -> Result<String> {
    let document = read_document(file_path)?;
    let html = compile_with(&document, options);
    tracing::debug!(
        "compiled {} ({} blocks)",
        file_path.display(),
        document.block_count()
    );

    if stdout {
        println!("{}", html);
        return Ok("stdout".to_string());
    }

    let output_file = out_dir.join(format!("{}.html", document_stem(file_path)));
    fs::create_dir_all(out_dir)?;
    fs::write(&output_file, html)?;

    Ok(output_file.display().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write(path: &Path, contents: &str) {
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    #[test]
    fn test_document_stem() {
        assert_eq!(document_stem(Path::new("src/welcome.email.json")), "welcome");
        assert_eq!(document_stem(Path::new("promo.email.json")), "promo");
    }

    #[test]
    fn test_find_documents_filters_by_suffix() {
        let dir = tempfile::tempdir().unwrap();
        write(&dir.path().join("b.email.json"), "[]");
        write(&dir.path().join("nested/a.email.json"), "[]");
        write(&dir.path().join("notes.json"), "{}");

        let found = find_documents(dir.path());
        let stems: Vec<String> = found.iter().map(|p| document_stem(p)).collect();
        assert_eq!(found.len(), 2);
        assert!(stems.contains(&"a".to_string()));
        assert!(stems.contains(&"b".to_string()));
    }

    #[test]
    fn test_compile_project() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        write(
            &dir.path().join("src/hello.email.json"),
            r##"[{ "id": "a", "kind": "text", "content": "Hi", "styles": { "color": "#111111" } }]"##,
        );
        write(
            &dir.path().join("mailblock.config.json"),
            r#"{ "outDir": "out", "title": "Hello" }"#,
        );

        compile(
            CompileArgs {
                path: ".".to_string(),
                stdout: false,
                out_dir: None,
                pretty: false,
                title: None,
            },
            &cwd,
        )
        .unwrap();

        let html = fs::read_to_string(dir.path().join("out/hello.html")).unwrap();
        assert!(html.contains("<title>Hello</title>"));
        assert!(html.contains("<div class=\"mobile-padding\" style=\"color: #111111;\">Hi</div>"));
    }

    #[test]
    fn test_compile_reports_invalid_documents() {
        let dir = tempfile::tempdir().unwrap();
        let cwd = dir.path().display().to_string();
        write(
            &dir.path().join("src/broken.email.json"),
            r#"[{ "id": "x", "kind": "text" }, { "id": "x", "kind": "text" }]"#,
        );

        let result = compile(
            CompileArgs {
                path: ".".to_string(),
                stdout: false,
                out_dir: None,
                pretty: false,
                title: None,
            },
            &cwd,
        );
        assert!(result.is_err());
        assert!(!dir.path().join("dist/broken.html").exists());
    }
}
