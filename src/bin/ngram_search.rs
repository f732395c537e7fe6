use std::fs;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use chrono::Local;
use clap::Parser;
use log::{info, debug, LevelFilter};
use ngramset::{
    NGramSet,
    NGramSetConfig,
    Result,
    config::subsystems::generator::parse_pad_char,
    matcher::SimpleMatchResult,
};

/// Fuzzy lookup of strings in a word list by n-gram similarity.
#[derive(Parser, Debug)]
#[command(name = "ngram_search", version)]
struct Args {
    /// File with one member per line
    #[arg(long)]
    items: Option<PathBuf>,

    /// Query string, may be repeated. Reads queries from stdin when absent
    #[arg(short, long)]
    query: Vec<String>,

    /// INI file with [generator] and [matcher] sections
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Minimum similarity of a match
    #[arg(long)]
    threshold: Option<f64>,

    /// Similarity warp between 1.0 and 3.0
    #[arg(long)]
    warp: Option<f64>,

    /// Characters per n-gram
    #[arg(short = 'n', long = "ngram-size")]
    ngram_size: Option<usize>,

    #[arg(long)]
    pad_len: Option<usize>,

    #[arg(long)]
    pad_char: Option<String>,

    /// Print only the best match per query
    #[arg(long)]
    best: bool,

    /// Compare two strings and print their similarity
    #[arg(long, num_args = 2, value_names = ["S1", "S2"])]
    compare: Option<Vec<String>>,

    /// Log level: none, error, warn, info, debug or trace
    #[arg(long)]
    log_level: Option<String>,
}

fn load_config(args: &Args) -> Result<NGramSetConfig> {
    let mut config = match &args.config {
        Some(path) => NGramSetConfig::from_ini(path)?,
        None => NGramSetConfig::default(),
    };
    if let Some(threshold) = args.threshold {
        config = config.with_threshold(threshold);
    }
    if let Some(warp) = args.warp {
        config = config.with_warp(warp);
    }
    if let Some(ngram_size) = args.ngram_size {
        config = config.with_ngram_size(ngram_size);
    }
    if let Some(pad_len) = args.pad_len {
        config = config.with_pad_len(pad_len);
    }
    if let Some(pad_char) = &args.pad_char {
        config = config.with_pad_char(parse_pad_char(pad_char)?);
    }
    config.validate()?;
    Ok(config)
}

fn log_level(args: &Args, config: &NGramSetConfig) -> LevelFilter {
    match args.log_level.as_deref().map(str::to_lowercase).as_deref() {
        Some("error") => LevelFilter::Error,
        Some("warn") => LevelFilter::Warn,
        Some("info") => LevelFilter::Info,
        Some("debug") => LevelFilter::Debug,
        Some("trace") => LevelFilter::Trace,
        Some("none") => LevelFilter::Off,
        Some(other) => {
            eprintln!("Invalid log level '{}', defaulting to Warn", other);
            LevelFilter::Warn
        }
        // Keep stderr quiet unless asked
        None if args.config.is_some() => config.generator.get_log_level(),
        None => LevelFilter::Warn,
    }
}

fn read_lines<R: BufRead>(reader: R) -> Result<Vec<String>> {
    let mut lines = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim_end_matches('\r');
        if !trimmed.is_empty() {
            lines.push(trimmed.to_string());
        }
    }
    Ok(lines)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let level = log_level(&args, &config);
    env_logger::Builder::new()
        .format(|buf, record| {
            writeln!(buf,
                "{} [{}] - {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.args()
            )
        })
        .filter(None, level)
        .target(env_logger::Target::Stderr)
        .init();

    debug!("{}", config.describe());

    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if let Some(pair) = &args.compare {
        let similarity = NGramSet::compare(&pair[0], &pair[1], &config)?;
        let result = SimpleMatchResult::new(pair[1].as_str(), pair[0].as_str(), similarity);
        writeln!(out, "{}", serde_json::to_string(&result)?)?;
        out.flush()?;
        return Ok(());
    }

    let items = match &args.items {
        Some(path) => read_lines(io::BufReader::new(fs::File::open(path)?))?,
        None => Vec::new(),
    };
    let set = NGramSet::from_items(items, config)?;
    let stats = set.stats();
    info!("Indexed {} members over {} distinct n-grams", stats.members, stats.distinct_ngrams);

    let queries = if args.query.is_empty() {
        read_lines(io::stdin().lock())?
    } else {
        args.query.clone()
    };

    for query in &queries {
        let results = set.search(query, None);
        let shown = if args.best { results.len().min(1) } else { results.len() };
        for &(item, similarity) in &results[..shown] {
            let result = SimpleMatchResult::new(query, item, similarity);
            writeln!(out, "{}", serde_json::to_string(&result)?)?;
        }
    }
    out.flush()?;

    let metrics = set.metrics();
    info!("Answered {} queries, {:.1} candidates scored per search",
        metrics.search_operations, metrics.candidates_per_search());
    Ok(())
}
