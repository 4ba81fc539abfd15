use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use strokematch::{Point, Recognizer, RecognizerConfig};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Classify a drawn gesture against the template library")]
struct Cli {
    /// Path to the JSON gesture file to classify.
    #[arg(value_name = "GESTURE")]
    gesture: PathBuf,
    /// JSON file with extra named templates to register before matching.
    #[arg(short, long, value_name = "FILE")]
    templates: Option<PathBuf>,
    /// Drop the built-in catalog and match only against --templates.
    #[arg(long)]
    no_builtins: bool,
    /// Score templates in parallel.
    #[arg(long)]
    parallel: bool,
    /// Enable tracing output for performance profiling.
    #[arg(long)]
    trace: bool,
}

/// A gesture on disk: one coordinate list per stroke, in drawing order.
#[derive(Debug, Deserialize)]
struct GestureJson {
    strokes: Vec<Vec<[f64; 2]>>,
}

impl GestureJson {
    fn to_points(&self) -> Vec<Point> {
        let mut points = Vec::new();
        for (stroke_idx, stroke) in self.strokes.iter().enumerate() {
            let stroke_id = stroke_idx as u32 + 1;
            for &[x, y] in stroke {
                points.push(Point::new(x, y, stroke_id));
            }
        }
        points
    }
}

#[derive(Debug, Deserialize)]
struct TemplateJson {
    name: String,
    #[serde(flatten)]
    gesture: GestureJson,
}

#[derive(Debug, Serialize)]
struct Output {
    name: String,
    score: f64,
    elapsed_ms: u64,
    templates: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    if cli.trace {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive("strokematch=info".parse()?),
            )
            .with_target(false)
            .init();
    }

    let mut recognizer = if cli.no_builtins {
        Recognizer::with_store(strokematch::TemplateStore::empty())
    } else {
        Recognizer::new()
    }
    .with_config(RecognizerConfig {
        parallel: cli.parallel,
    });

    if let Some(path) = &cli.templates {
        let text = fs::read_to_string(path)?;
        let templates: Vec<TemplateJson> = serde_json::from_str(&text)?;
        for tpl in &templates {
            recognizer.add_gesture(tpl.name.clone(), &tpl.gesture.to_points())?;
        }
    }

    let text = fs::read_to_string(&cli.gesture)?;
    let gesture: GestureJson = serde_json::from_str(&text)?;
    let result = recognizer.recognize(&gesture.to_points())?;

    let output = Output {
        name: result.name,
        score: result.score,
        elapsed_ms: result.elapsed_ms,
        templates: recognizer.store().len(),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}
