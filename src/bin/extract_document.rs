//! Extract features from one procurement document
//!
//! Loads a plain-text rendition of a contract, repairs line breaks and prints
//! the extraction record as JSON.
//!
//! Usage:
//!   cargo run --release --bin extract_document -- award.txt
//!   cargo run --release --bin extract_document -- award.txt --strategy textrank --sections
//!   cargo run --release --bin extract_document -- contract_folder/ --layout page1.json
//!
//! When given a directory, the executed/signed text file is used if present,
//! otherwise the most recently modified one.
//!
//! Set RUST_LOG=debug for extraction logging.

use contract_oxide::discovery::{find_authoritative_version, most_recently_modified};
use contract_oxide::extractors::search_piid;
use contract_oxide::layout::{first_page_elements, InMemoryLayout, LayoutAnalyzer, PageElement};
use contract_oxide::text::remove_line_breaks;
use contract_oxide::{
    Aggregator, ExtractionConfig, KeywordStrategy, PlainTextLoader, TextLoader, TextSource,
};
use serde_json::{json, Value};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

const TEXT_EXTENSION: &str = "txt";

struct CliConfig {
    input: PathBuf,
    strategy: KeywordStrategy,
    sections: bool,
    layout: Option<PathBuf>,
}

impl CliConfig {
    fn from_args() -> Result<Self, String> {
        let args: Vec<String> = std::env::args().collect();
        let mut input = None;
        let mut strategy = KeywordStrategy::default();
        let mut sections = false;
        let mut layout = None;

        let mut i = 1;
        while i < args.len() {
            match args[i].as_str() {
                "--strategy" | "-s" => {
                    i += 1;
                    let name = args.get(i).ok_or("--strategy needs a value")?;
                    strategy = name.parse().map_err(|e| format!("{}", e))?;
                },
                "--sections" => {
                    sections = true;
                },
                "--layout" => {
                    i += 1;
                    layout = Some(PathBuf::from(args.get(i).ok_or("--layout needs a file")?));
                },
                "--help" | "-h" => {
                    return Err(usage());
                },
                other => {
                    input = Some(PathBuf::from(other));
                },
            }
            i += 1;
        }

        Ok(Self {
            input: input.ok_or_else(usage)?,
            strategy,
            sections,
            layout,
        })
    }
}

fn usage() -> String {
    "usage: extract_document <file|dir> [--strategy rake|textrank|tf-idf] [--sections] [--layout elements.json]"
        .to_string()
}

fn resolve_input(path: &Path) -> Result<PathBuf, Box<dyn std::error::Error>> {
    if !path.is_dir() {
        return Ok(path.to_path_buf());
    }
    if let Some(found) = find_authoritative_version(path, TEXT_EXTENSION)? {
        log::info!("using authoritative version {}", found.display());
        return Ok(found);
    }
    most_recently_modified(path, TEXT_EXTENSION)?
        .into_iter()
        .next()
        .ok_or_else(|| format!("no .{} files under {}", TEXT_EXTENSION, path.display()).into())
}

fn run(config: &CliConfig) -> Result<Value, Box<dyn std::error::Error>> {
    let path = resolve_input(&config.input)?;
    let loader = PlainTextLoader::new();
    let raw = loader.load(&TextSource::Path(path.clone()))?;
    let text = remove_line_breaks(&raw);

    let extraction = ExtractionConfig::new().with_keyword_strategy(config.strategy);
    let record = Aggregator::with_config(&extraction).extract_all(&text);

    let mut output = json!({
        "file": path.display().to_string(),
        "record": record,
    });

    if config.sections {
        let locator = extraction.section_locator();
        output["piid"] = serde_json::to_value(search_piid(&path, &loader)?)?;
        output["statement_of_work"] = json!(locator.sow(&text));
        output["evaluation_factors"] = json!(locator.evaluation_factors(&text));
    }

    if let Some(layout_path) = &config.layout {
        let data = std::fs::read_to_string(layout_path)?;
        let elements: Vec<PageElement> = serde_json::from_str(&data)?;
        let analyzer = LayoutAnalyzer::with_region(extraction.form_region);
        let source = InMemoryLayout::new(elements);
        let first_page: Vec<PageElement> = first_page_elements(&source).collect();
        let layout = analyzer.analyze(&first_page)?;
        output["layout"] = serde_json::to_value(layout)?;
    }

    Ok(output)
}

fn main() -> ExitCode {
    env_logger::init();

    let config = match CliConfig::from_args() {
        Ok(c) => c,
        Err(msg) => {
            eprintln!("{}", msg);
            return ExitCode::from(2);
        },
    };

    match run(&config) {
        Ok(output) => match serde_json::to_string_pretty(&output) {
            Ok(json) => {
                println!("{}", json);
                ExitCode::SUCCESS
            },
            Err(e) => {
                eprintln!("Error: {}", e);
                ExitCode::FAILURE
            },
        },
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        },
    }
}
