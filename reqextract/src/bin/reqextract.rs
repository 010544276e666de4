//! reqextract 命令行入口
//! 读取JSON记录数组或纯文本（每行一句），输出追加了抽取列的JSON记录数组
//!
//! 运行命令：
//! cargo run --features cli -- --input sentences.txt --format lines

use clap::{Parser, ValueEnum};
use env_logger::{Builder, Env, Target};
use reqextract::record::{parse_json_records, parse_lines};
use reqextract::{CustomConfigBuilder, RequirementExtractor, RuleLoader};
use std::error::Error;
use std::fs;
use std::io::{self, Read, Write};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// JSON对象数组
    Json,
    /// 纯文本，每行一句
    Lines,
}

#[derive(Parser, Debug)]
#[command(name = "reqextract", version)]
#[command(about = "Extract structured requirements from French job-requirement sentences")]
struct Args {
    /// Input file (reads stdin when omitted)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Input format
    #[arg(short, long, value_enum, default_value_t = InputFormat::Json)]
    format: InputFormat,

    /// Record field holding the sentence
    #[arg(long, default_value = reqextract::config::DEFAULT_INPUT_FIELD)]
    field: String,

    /// JSON rule catalog (built-in catalog when omitted)
    #[arg(short, long)]
    rules: Option<PathBuf>,

    /// Output file (writes stdout when omitted)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the quality report as JSON to this path
    #[arg(long)]
    report: Option<PathBuf>,

    /// Run the batch on the rayon thread pool (requires the `parallel` feature)
    #[arg(long)]
    parallel: bool,

    /// Export the active rule catalog as JSON to this path and exit
    #[arg(long)]
    dump_rules: Option<PathBuf>,

    /// Debug logging (RUST_LOG takes precedence)
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();

    // 标准输出留给结果，日志走标准错误
    let default_level = if args.verbose { "debug" } else { "info" };
    Builder::from_env(Env::default().default_filter_or(default_level))
        .target(Target::Stderr)
        .init();

    let mut builder = CustomConfigBuilder::new()
        .parallel(args.parallel)
        .input_field(args.field.as_str());
    if let Some(path) = &args.rules {
        builder = builder.local_file(path);
    }
    let config = builder.build();

    if let Some(path) = &args.dump_rules {
        let loader = RuleLoader::new();
        let catalog = loader.load(&config)?;
        loader.export(&catalog, path)?;
        return Ok(());
    }

    let extractor = RequirementExtractor::new(config)?;

    let text = match &args.input {
        Some(path) => fs::read_to_string(path)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let records = match args.format {
        InputFormat::Json => parse_json_records(&text)?,
        InputFormat::Lines => parse_lines(&text, &args.field),
    };

    let (annotated, results) = extractor.extract_records(records);
    let report = extractor.report(&results);
    report.log_summary();

    let json = serde_json::to_string_pretty(&annotated)?;
    match &args.output {
        Some(path) => fs::write(path, json)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(json.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    if let Some(path) = &args.report {
        fs::write(path, serde_json::to_string_pretty(&report)?)?;
        log::info!("Quality report written to {}", path.display());
    }

    Ok(())
}
