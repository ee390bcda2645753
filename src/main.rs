use anyhow::Result;
use clap::{Parser, ValueEnum};
use narrator_engine::driver::playback_tick;
use narrator_engine::render::NullRenderer;
use narrator_engine::snapshot::{load_sequence, Snapshot};
use narrator_engine::{FaceParams, Narrator};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// JSON pose-sequence file; a built-in demo sequence is used when omitted
    #[arg(value_name = "POSES")]
    poses: Option<PathBuf>,

    /// Number of frames to play
    #[arg(long, default_value_t = 600)]
    frames: u32,

    /// Simulated frames per second
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Info)]
    log_level: LogLevel,
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum, Debug)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogLevel::Error => write!(f, "error"),
            LogLevel::Warn => write!(f, "warn"),
            LogLevel::Info => write!(f, "info"),
            LogLevel::Debug => write!(f, "debug"),
            LogLevel::Trace => write!(f, "trace"),
        }
    }
}

/// Neutral → smiling → quizzical, used when no pose file is given.
fn demo_sequence() -> Vec<Snapshot> {
    let mut params = FaceParams::default();
    let neutral = Snapshot::capture(&params);

    params.smile_amount = 1.5;
    params.mouth_width = 0.4;
    let smiling = Snapshot::capture(&params);

    params = FaceParams::default();
    params.head_rotation = 0.4;
    params.eye_openness = [0.2, 0.2];
    params.brow_escalation = [0.45, 0.1];
    let quizzical = Snapshot::capture(&params);

    vec![neutral, smiling, quizzical]
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = EnvFilter::builder()
        .with_default_directive(cli.log_level.to_string().parse()?)
        .from_env_lossy();
    fmt().with_env_filter(filter).with_target(false).init();

    let poses = match &cli.poses {
        Some(path) => {
            info!(path = %path.display(), "loading pose sequence");
            load_sequence(path)?
        }
        None => demo_sequence(),
    };
    info!(
        poses = poses.len(),
        frames = cli.frames,
        fps = cli.fps,
        "starting headless playback"
    );

    let mut narrator = Narrator::new();
    narrator.set_snapshots(poses);
    if let Some(first) = narrator.snapshots().first().copied() {
        first.apply(&mut narrator.params);
    }

    let mut renderer = NullRenderer::default();
    let dt = 1.0 / cli.fps as f32;
    for _ in 0..cli.frames {
        playback_tick(&mut narrator, &mut renderer, dt)?;
    }

    info!(cursor = narrator.cursor(), "playback finished");
    Ok(())
}
