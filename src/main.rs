//! CLI for multiform: identify file types from magic bytes, optionally
//! validating against one category with per-call format exclusions.

#![cfg(feature = "cli")]

use clap::Parser;
use indexmap::IndexMap;
use multiform::{detect_format, Category, FileFormat, FormatValidator};
use sha2::{Digest, Sha256};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

fn sha256_hex(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("{:x}", hasher.finalize())
}

#[derive(Parser)]
#[command(name = "multiform")]
#[command(about = "Identify file formats from magic bytes (MP3, WAV, GIF, ICO, PNG, JPEG, PDF, text)", long_about = None)]
struct Args {
    /// Path to a file or directory to inspect (use -d/--directory for a whole directory)
    path: Option<String>,

    /// Inspect a whole directory (optionally with -r to recurse into subdirectories)
    #[arg(short = 'd', long = "directory", value_name = "DIR")]
    directory: Option<String>,

    /// When inspecting a directory, recurse into subdirectories
    #[arg(short, long)]
    recursive: bool,

    /// Validate against one category instead of just detecting: audio, image, or document
    #[arg(short, long, value_name = "CATEGORY")]
    category: Option<String>,

    /// Format tags to exclude from validation (comma-separated, e.g. "mp3" or "gif,ico")
    #[arg(short, long, value_name = "TAGS", default_value = "")]
    exclude: String,

    /// Output JSON per result (one line per file unless --pretty)
    #[arg(long)]
    json: bool,

    /// Pretty-print JSON (use with --json)
    #[arg(long)]
    pretty: bool,

    /// Quiet: only print files that are invalid or of unknown format
    #[arg(short, long)]
    quiet: bool,
}

fn parse_category(s: &str) -> Result<Category, String> {
    match s {
        "audio" => Ok(Category::Audio),
        "image" => Ok(Category::Image),
        "document" => Ok(Category::Document),
        other => Err(format!(
            "unknown category {other:?} (expected audio, image, or document)"
        )),
    }
}

fn parse_exclude(s: &str) -> Result<Vec<FileFormat>, String> {
    s.split(',')
        .map(|t| t.trim())
        .filter(|t| !t.is_empty())
        .map(|t| t.parse::<FileFormat>().map_err(|e| e.to_string()))
        .collect()
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let category = args.category.as_deref().map(parse_category).transpose()?;
    let exclude = parse_exclude(&args.exclude)?;

    let path_str = args
        .directory
        .as_ref()
        .or(args.path.as_ref())
        .ok_or("Missing path: give a file/directory as argument or use -d/--directory <DIR>")?;
    let path = Path::new(path_str.as_str());

    if !path.exists() {
        eprintln!("Not found: {}", path.display());
        std::process::exit(1);
    }

    if path.is_file() {
        if args.directory.is_some() {
            eprintln!(
                "--directory expects a directory, not a file: {}",
                path.display()
            );
            std::process::exit(1);
        }
        inspect_file(path, &args, category, &exclude)?;
        return Ok(());
    }

    if path.is_dir() {
        if !args.quiet {
            eprintln!(
                "Inspecting directory: {} {}",
                path.display(),
                if args.recursive { "(recursive)" } else { "" }
            );
        }
        inspect_dir(path, &args, category, &exclude)?;
        return Ok(());
    }

    eprintln!("Not a file or directory: {}", path.display());
    std::process::exit(1);
}

fn inspect_dir(
    dir: &Path,
    args: &Args,
    category: Option<Category>,
    exclude: &[FileFormat],
) -> Result<(), Box<dyn std::error::Error>> {
    let walker = if args.recursive {
        WalkDir::new(dir).into_iter()
    } else {
        WalkDir::new(dir).max_depth(1).into_iter()
    };

    let mut total = 0u64;
    let mut valid = 0u64;

    for entry in walker {
        let entry = entry?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        total += 1;
        if inspect_file(path, args, category, exclude)? {
            valid += 1;
        }
    }

    if !args.quiet {
        match category {
            Some(c) => eprintln!("Inspected {total} files, {valid} valid {c}"),
            None => eprintln!("Inspected {total} files, {valid} of recognized format"),
        }
    }
    Ok(())
}

/// Inspect one file. Returns whether it was valid (or, without a category,
/// whether its format was recognized).
fn inspect_file(
    path: &Path,
    args: &Args,
    category: Option<Category>,
    exclude: &[FileFormat],
) -> Result<bool, Box<dyn std::error::Error>> {
    let bytes = match fs::read(path) {
        Ok(b) => b,
        Err(err) => {
            eprintln!("Read failed: {}: {err}", path.display());
            return Ok(false);
        }
    };
    let format = detect_format(&bytes);
    let valid = category.map(|c| FormatValidator::new(c).matches_bytes(&bytes, exclude));
    let ok = valid.unwrap_or(format.is_some());

    if args.quiet && ok {
        return Ok(ok);
    }

    if args.json {
        let mut out = IndexMap::<String, serde_json::Value>::new();
        out.insert(
            "sha256".to_string(),
            serde_json::Value::String(sha256_hex(&bytes)),
        );
        out.insert(
            "path".to_string(),
            serde_json::Value::String(path.display().to_string()),
        );
        out.insert("size_bytes".to_string(), serde_json::to_value(bytes.len())?);
        out.insert("format".to_string(), serde_json::to_value(format)?);
        out.insert(
            "label".to_string(),
            serde_json::to_value(format.map(|f| f.label()))?,
        );
        if let Some(c) = category {
            out.insert("category".to_string(), serde_json::to_value(c)?);
            out.insert("valid".to_string(), serde_json::to_value(valid)?);
        }
        let json_str = if args.pretty {
            serde_json::to_string_pretty(&out)?
        } else {
            serde_json::to_string(&out)?
        };
        println!("{json_str}");
        return Ok(ok);
    }

    let label = format.map(|f| f.label()).unwrap_or("unknown");
    match valid {
        Some(true) => println!("VALID   {} ({} bytes) {label}", path.display(), bytes.len()),
        Some(false) => println!("INVALID {} ({} bytes) {label}", path.display(), bytes.len()),
        None => println!("{label}: {} ({} bytes)", path.display(), bytes.len()),
    }
    if !args.quiet {
        println!("  sha256: {}", sha256_hex(&bytes));
    }
    Ok(ok)
}
