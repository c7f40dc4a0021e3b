use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};
use snapwall::{
    CaptionProvider, Phase, PhotoId, PhotoView, Point, Rect, Session, SessionOpts, Size,
    TestPattern, TimeMs,
};

#[derive(Parser, Debug)]
#[command(name = "snapwall", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Replay a scripted session against the built-in test pattern feed and
    /// report the final wall.
    Replay(ReplayArgs),
    /// Print sample captions for a locale.
    Caption(CaptionArgs),
}

#[derive(Parser, Debug)]
struct ReplayArgs {
    /// Input session script JSON.
    #[arg(long = "in")]
    in_path: PathBuf,

    /// Output report path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct CaptionArgs {
    /// Locale tag; unknown tags fall back to the default set.
    #[arg(long, default_value = snapwall::DEFAULT_LOCALE)]
    locale: String,

    /// Caption RNG seed.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// How many captions to print.
    #[arg(long, default_value_t = 1)]
    count: u32,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match cli.cmd {
        Command::Replay(args) => cmd_replay(args),
        Command::Caption(args) => cmd_caption(args),
    }
}

/// A scripted session: timestamped gesture events over a synthetic feed.
#[derive(Deserialize, Debug)]
struct Script {
    #[serde(default = "default_locale")]
    locale: String,
    #[serde(default)]
    seed: u64,
    /// Feed size for the built-in test pattern, `[width, height]`.
    #[serde(default = "default_feed")]
    feed: [u32; 2],
    /// Keep advancing the clock to this time after the last event.
    #[serde(default)]
    run_until_ms: u64,
    events: Vec<Event>,
}

fn default_locale() -> String {
    snapwall::DEFAULT_LOCALE.to_string()
}

fn default_feed() -> [u32; 2] {
    [1280, 720]
}

#[derive(Deserialize, Debug)]
struct Event {
    at: u64,
    op: Op,
}

#[derive(Deserialize, Debug)]
#[serde(tag = "kind", rename_all = "snake_case")]
enum Op {
    Capture,
    DragBegin {
        photo: u64,
        pointer: [f64; 2],
        /// Rendered bounds of the grabbed photo, `[x, y, width, height]`.
        bounds: [f64; 4],
    },
    DragMove {
        pointer: [f64; 2],
    },
    DragEnd,
}

#[derive(Serialize, Debug)]
struct Report {
    phase: Phase,
    current: Option<ReportPhoto>,
    wall: Vec<ReportPhoto>,
}

#[derive(Serialize, Debug)]
struct ReportPhoto {
    id: u64,
    position: [f64; 2],
    developing: bool,
    caption: String,
    image_bytes: usize,
}

impl ReportPhoto {
    fn of(view: &PhotoView<'_>) -> Self {
        Self {
            id: view.id.0,
            position: [view.position.x, view.position.y],
            developing: view.developing,
            caption: view.caption.to_string(),
            image_bytes: view.image.len(),
        }
    }
}

fn cmd_replay(args: ReplayArgs) -> anyhow::Result<()> {
    let text = std::fs::read_to_string(&args.in_path)
        .with_context(|| format!("read script '{}'", args.in_path.display()))?;
    let script: Script = serde_json::from_str(&text).context("parse session script")?;

    let feed = TestPattern::new(script.feed[0], script.feed[1])?;
    let opts = SessionOpts {
        locale: script.locale.clone(),
        seed: script.seed,
    };
    let mut session = Session::open(opts, &feed)?;

    let mut events = script.events;
    events.sort_by_key(|e| e.at);
    for event in &events {
        session.advance_to(TimeMs(event.at));
        apply(&mut session, &event.op)?;
    }
    let last_at = events.last().map_or(0, |e| e.at);
    session.advance_to(TimeMs(script.run_until_ms.max(last_at)));

    let snapshot = session.snapshot();
    let report = Report {
        phase: snapshot.phase,
        current: snapshot.current.as_ref().map(ReportPhoto::of),
        wall: snapshot.wall.iter().map(ReportPhoto::of).collect(),
    };
    let json = serde_json::to_string_pretty(&report).context("serialize report")?;

    match &args.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("create output dir '{}'", parent.display()))?;
            }
            std::fs::write(path, json)
                .with_context(|| format!("write report '{}'", path.display()))?;
            eprintln!("wrote {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

fn apply(session: &mut Session, op: &Op) -> anyhow::Result<()> {
    match op {
        Op::Capture => {
            session.capture()?;
        }
        Op::DragBegin {
            photo,
            pointer,
            bounds,
        } => {
            session.begin_drag(
                PhotoId(*photo),
                Point::new(pointer[0], pointer[1]),
                Rect::from_origin_size(
                    Point::new(bounds[0], bounds[1]),
                    Size::new(bounds[2], bounds[3]),
                ),
            );
        }
        Op::DragMove { pointer } => {
            session.update_drag(Point::new(pointer[0], pointer[1]));
        }
        Op::DragEnd => {
            session.end_drag()?;
        }
    }
    Ok(())
}

fn cmd_caption(args: CaptionArgs) -> anyhow::Result<()> {
    let mut provider = CaptionProvider::new(args.seed);
    for _ in 0..args.count {
        println!("{}", provider.caption(&args.locale));
    }
    Ok(())
}
