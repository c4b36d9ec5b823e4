use std::collections::BTreeMap;
use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use drafttable_core::storage::{read_drawing, write_drawing};
use drafttable_core::{
    export, reflect, starter_elements, translate, AssistantError, AssistantReply, Element, MirrorLine, RandomIds,
    Shape, StorageError,
};
use kurbo::{Point, Rect, Vec2};
use serde::Serialize;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("storage error: {0}")]
    Storage(#[from] StorageError),
    #[error("invalid assistant reply: {0}")]
    Assistant(#[from] AssistantError),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("mirror line {0:?} -> {1:?} is too short")]
    DegenerateMirror(Point, Point),
}

#[derive(Parser, Debug)]
#[command(name = "drafttable", about = "Inspect and transform DraftTable drawings")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Summarize a drawing.
    Info {
        input: PathBuf,
        #[arg(long)]
        json: bool,
    },
    /// Re-encode a drawing, dropping everything the importer skips.
    Convert {
        input: PathBuf,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Append mirrored copies of the drawing (or one layer of it).
    Mirror {
        input: PathBuf,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        from: Point,
        #[arg(long, value_parser = parse_point, allow_hyphen_values = true)]
        to: Point,
        #[arg(long)]
        layer: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Move the drawing (or one layer of it).
    Translate {
        input: PathBuf,
        #[arg(long, allow_hyphen_values = true)]
        dx: f64,
        #[arg(long, allow_hyphen_values = true)]
        dy: f64,
        #[arg(long)]
        layer: Option<String>,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Apply an assistant reply (JSON file, or `-` for stdin) to a drawing.
    Apply {
        input: PathBuf,
        #[arg(long)]
        reply: PathBuf,
        /// Fail on a malformed reply instead of treating it as a no-op.
        #[arg(long)]
        strict: bool,
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Write the starter drawing.
    New { output: PathBuf },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(err) = run(cli.command) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Info { input, json } => run_info(&input, json),
        Command::Convert { input, output } => {
            let elements = read_drawing(&input)?;
            emit(&elements, output.as_deref())
        }
        Command::Mirror { input, from, to, layer, output } => {
            run_mirror(&input, from, to, layer.as_deref(), output.as_deref())
        }
        Command::Translate { input, dx, dy, layer, output } => {
            let elements = select_layer(read_drawing(&input)?, layer.as_deref());
            let moved = translate(&elements, Vec2::new(dx, dy));
            emit(&moved, output.as_deref())
        }
        Command::Apply { input, reply, strict, output } => {
            run_apply(&input, &reply, strict, output.as_deref())
        }
        Command::New { output } => {
            write_drawing(&output, &starter_elements())?;
            eprintln!("wrote {}", output.display());
            Ok(())
        }
    }
}

/// Mark elements on `layer` (or all of them) selected.
fn select_layer(elements: Vec<Element>, layer: Option<&str>) -> Vec<Element> {
    elements
        .into_iter()
        .map(|el| {
            let hit = layer.is_none_or(|name| el.layer == name);
            el.with_selected(hit)
        })
        .collect()
}

fn run_mirror(
    input: &Path,
    from: Point,
    to: Point,
    layer: Option<&str>,
    output: Option<&Path>,
) -> Result<(), CliError> {
    if MirrorLine::through(from, to).is_none() {
        return Err(CliError::DegenerateMirror(from, to));
    }
    let mut elements = select_layer(read_drawing(input)?, layer);
    let copies = reflect(&elements, from, to, &mut RandomIds);
    eprintln!("mirrored {} element(s)", copies.len());
    elements.extend(copies);
    emit(&elements, output)
}

fn run_apply(input: &Path, reply_path: &Path, strict: bool, output: Option<&Path>) -> Result<(), CliError> {
    let raw = if reply_path == Path::new("-") {
        let mut buf = String::new();
        io::stdin().read_to_string(&mut buf)?;
        buf
    } else {
        fs::read_to_string(reply_path)?
    };
    let reply = if strict {
        AssistantReply::from_json(&raw)?
    } else {
        AssistantReply::from_json_or_fallback(&raw)
    };

    let mut elements = read_drawing(input)?;
    if let Some(edit) = reply.to_edit(&elements, &mut RandomIds) {
        edit.apply(&mut elements);
    }
    eprintln!("{}", reply.message);
    emit(&elements, output)
}

fn emit(elements: &[Element], output: Option<&Path>) -> Result<(), CliError> {
    match output {
        Some(path) => {
            write_drawing(path, elements)?;
            log::info!("wrote {} element(s) to {}", elements.len(), path.display());
        }
        None => println!("{}", export(elements)),
    }
    Ok(())
}

#[derive(Debug, Default, Serialize)]
struct Summary {
    elements: usize,
    lines: usize,
    circles: usize,
    rectangles: usize,
    layers: BTreeMap<String, usize>,
    bounds: Option<[f64; 4]>,
}

fn summarize(elements: &[Element]) -> Summary {
    let mut summary = Summary {
        elements: elements.len(),
        ..Summary::default()
    };
    let mut bounds: Option<Rect> = None;
    for el in elements {
        match el.shape {
            Shape::Line(_) => summary.lines += 1,
            Shape::Circle(_) => summary.circles += 1,
            Shape::Rectangle(_) => summary.rectangles += 1,
            Shape::Polyline(_) => {}
        }
        *summary.layers.entry(el.layer.clone()).or_default() += 1;
        let b = el.shape.bounds();
        bounds = Some(bounds.map_or(b, |acc| acc.union(b)));
    }
    summary.bounds = bounds.map(|r| [r.x0, r.y0, r.x1, r.y1]);
    summary
}

fn run_info(input: &Path, json: bool) -> Result<(), CliError> {
    let summary = summarize(&read_drawing(input)?);
    if json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
        return Ok(());
    }
    println!("{}: {} element(s)", input.display(), summary.elements);
    println!("  lines: {}  circles: {}  rectangles: {}", summary.lines, summary.circles, summary.rectangles);
    for (layer, count) in &summary.layers {
        println!("  layer {layer}: {count}");
    }
    if let Some([x0, y0, x1, y1]) = summary.bounds {
        println!("  bounds: ({x0}, {y0}) - ({x1}, {y1})");
    }
    Ok(())
}

fn parse_point(s: &str) -> Result<Point, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected `x,y`, got `{s}`"))?;
    let x: f64 = x.trim().parse().map_err(|e| format!("bad x in `{s}`: {e}"))?;
    let y: f64 = y.trim().parse().map_err(|e| format!("bad y in `{s}`: {e}"))?;
    Ok(Point::new(x, y))
}
