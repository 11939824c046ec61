use anyhow::{bail, Context};
use clap::{Parser, Subcommand};
use gesture_recognizer::augmentation::StrokeAugmenter;
use gesture_recognizer::config::{load_config_or_default, Config};
use gesture_recognizer::dispatch::{Dispatcher, LoggingSink};
use gesture_recognizer::logging::{self, LoggingConfig, MetricsCollector};
use gesture_recognizer::*;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "gesture")]
#[command(about = "Single-stroke gesture recognition against a fixed template library")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML or JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Angle comparison: raw or wrapped (overrides the config file)
    #[arg(short, long, global = true)]
    metric: Option<AngleMetric>,

    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one stroke
    Classify {
        /// Points as "x,y;x,y;..."
        #[arg(short, long, conflicts_with = "file")]
        points: Option<String>,

        /// JSON file holding [[x, y], ...]
        #[arg(short, long)]
        file: Option<PathBuf>,

        /// Print every template's score instead of only the best
        #[arg(short, long)]
        rank: bool,

        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// List the registered templates
    Templates,

    /// Classify augmented variants of every template and report accuracy
    Benchmark {
        /// Variants per template (overrides the config file)
        #[arg(short = 'n', long)]
        variants: Option<usize>,

        /// RNG seed (overrides the config file)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output file for the JSON report
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = load_config_or_default(cli.config.as_deref());
    if let Some(metric) = cli.metric {
        config.recognizer.angle_metric = metric;
    }

    let logging_config = match (cli.verbose, cli.config.is_some()) {
        (0, true) => config.logging.clone(),
        (0, false) => LoggingConfig::with_level("warn"),
        (1, _) => LoggingConfig::with_level("info"),
        (2, _) => LoggingConfig::with_level("debug"),
        _ => LoggingConfig::with_level("trace"),
    };
    let _logging_guard = logging::init_logging(&logging_config)?;

    let recognizer = Recognizer::new(TemplateRegistry::reference(), &config.recognizer)
        .context("Failed to build recognizer")?;

    match cli.command {
        Commands::Classify { points, file, rank, json } => {
            let stroke = read_stroke(points.as_deref(), file.as_deref())?;
            handle_classify(&recognizer, &stroke, rank, json)?;
        }
        Commands::Templates => handle_templates(&recognizer),
        Commands::Benchmark { variants, seed, output } => {
            if let Some(variants) = variants {
                config.augmentation.variants_per_template = variants;
            }
            if seed.is_some() {
                config.augmentation.seed = seed;
            }
            handle_benchmark(&recognizer, &config, output)?;
        }
    }

    Ok(())
}

fn read_stroke(points: Option<&str>, file: Option<&Path>) -> anyhow::Result<Stroke> {
    match (points, file) {
        (Some(points), _) => parse_points(points),
        (None, Some(path)) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read stroke file {:?}", path))?;
            serde_json::from_str(&content)
                .with_context(|| format!("Stroke file {:?} is not a list of [x, y] pairs", path))
        }
        (None, None) => bail!("Provide a stroke with --points or --file"),
    }
}

fn parse_points(input: &str) -> anyhow::Result<Stroke> {
    input
        .split(';')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(|pair| -> anyhow::Result<Point> {
            let (x, y) = pair
                .split_once(',')
                .with_context(|| format!("Expected \"x,y\", got \"{pair}\""))?;
            let x: f64 = x.trim().parse().with_context(|| format!("Bad x in \"{pair}\""))?;
            let y: f64 = y.trim().parse().with_context(|| format!("Bad y in \"{pair}\""))?;
            Ok(Point::new(x, y))
        })
        .collect()
}

fn handle_classify(
    recognizer: &Recognizer,
    stroke: &Stroke,
    rank: bool,
    json: bool,
) -> anyhow::Result<()> {
    logging::new_correlation_id();
    let dispatcher = Dispatcher::reference(LoggingSink);

    if rank {
        let scores = recognizer.rank(stroke)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&scores)?);
        } else {
            println!("{:<8} {:>10} {:>10}", "Label", "Score", "Confidence");
            for s in &scores {
                println!("{:<8} {:>10.4} {:>10.3}", s.label, s.score, s.confidence);
            }
        }
        return Ok(());
    }

    let result = recognizer.classify(stroke)?;
    let action = dispatcher.dispatch(&result.label)?;

    if json {
        let report = serde_json::json!({
            "result": result,
            "action": action,
            "message": action.message(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Gesture:    {}", result.label);
        println!("Score:      {:.4}", result.score);
        println!("Confidence: {:.3}", result.confidence);
        println!("Time:       {:.3}ms", result.execution_time_ms);
        println!("{}", action.message());
    }
    Ok(())
}

fn handle_templates(recognizer: &Recognizer) {
    println!(
        "{} templates, resampled to {} points, matcher {}",
        recognizer.registry().len(),
        recognizer.resample_count(),
        recognizer.matcher_name()
    );
    for template in recognizer.registry() {
        let points: Vec<String> = template
            .stroke
            .points()
            .iter()
            .map(|p| format!("({}, {})", p.x, p.y))
            .collect();
        println!("  {:<4} {}", template.label, points.join(" "));
    }
}

fn handle_benchmark(
    recognizer: &Recognizer,
    config: &Config,
    output: Option<PathBuf>,
) -> anyhow::Result<()> {
    let mut augmenter = StrokeAugmenter::from_config(&config.augmentation);
    let metrics = MetricsCollector::new(true);
    let count = config.augmentation.variants_per_template;

    println!(
        "Benchmarking {} variants per template ({} augmentations each)",
        count,
        augmenter.len()
    );

    let mut per_label = Vec::new();
    for template in recognizer.registry() {
        let variants = augmenter.variants(&template.label, &template.stroke, count)?;
        let strokes: Vec<Stroke> = variants.iter().map(|v| v.stroke.clone()).collect();
        let operation = format!("classify_{}", template.label);

        for result in recognizer.classify_batch(&strokes) {
            let result = result?;
            metrics.record_classification(&operation, &result, Some(template.label.as_str()), None);
            metrics.record_classification("classify", &result, Some(template.label.as_str()), None);
        }

        let accuracy = metrics.accuracy(&operation).unwrap_or(0.0);
        println!("  {:<4} accuracy {:>6.1}%", template.label, accuracy * 100.0);
        per_label.push(serde_json::json!({
            "label": template.label,
            "variants": count,
            "accuracy": accuracy,
            "timing": metrics.calculate_stats(&operation),
        }));
    }

    let overall = metrics.accuracy("classify").unwrap_or(0.0);
    let stats = metrics.calculate_stats("classify");
    println!("Overall accuracy {:.1}%", overall * 100.0);
    if let Some(ref stats) = stats {
        println!(
            "Timing: mean {:.3}ms, median {:.3}ms, p95 {:.3}ms, max {:.3}ms",
            stats.mean_ms, stats.median_ms, stats.p95_ms, stats.max_ms
        );
    }

    if let Some(output_path) = output {
        let measurements = metrics.export_measurements()?;
        let report = serde_json::json!({
            "matcher": recognizer.matcher_name(),
            "resample_count": recognizer.resample_count(),
            "augmentation": config.augmentation,
            "overall_accuracy": overall,
            "timing": stats,
            "templates": per_label,
            "measurements": measurements,
        });
        std::fs::write(&output_path, serde_json::to_string_pretty(&report)?)
            .with_context(|| format!("Failed to write report {:?}", output_path))?;
        println!("Report saved to {:?}", output_path);
    }

    Ok(())
}
