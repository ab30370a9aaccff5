//! CapSync CLI Tool
//!
//! Command-line interface for inspecting word-timed transcripts and
//! previewing caption synchronization against a simulated playback clock.

use anyhow::{Context, Result};
use capsync_core::{transcript, CaptionStyle, WordSpan, WordState};
use capsync_engine::{CaptionDriver, CaptionSurface, PlaybackError, PlaybackSource};
use clap::{Parser, Subcommand};
use std::fs::File;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser)]
#[command(name = "capsync")]
#[command(about = "CapSync - word-level caption synchronization for audio playback")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect and validate a word-timed transcript file
    Info {
        /// Input transcript JSON path
        input: PathBuf,
    },

    /// Run a simulated playback preview in the terminal
    Preview {
        /// Input transcript JSON path
        input: PathBuf,

        /// Frames per second of the simulated display
        #[arg(long, default_value = "60")]
        fps: u32,

        /// Playback speed multiplier
        #[arg(long, default_value = "1.0")]
        speed: f64,

        /// Caption style JSON file, merged over the defaults
        #[arg(long)]
        style: Option<PathBuf>,

        /// Pace the preview in real time instead of running flat out
        #[arg(long)]
        realtime: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Info { input } => show_info(input)?,

        Commands::Preview {
            input,
            fps,
            speed,
            style,
            realtime,
        } => run_preview(input, fps, speed, style, realtime)?,
    }

    Ok(())
}

fn load_spans(input: &PathBuf) -> Result<Vec<WordSpan>> {
    let file = File::open(input)
        .with_context(|| format!("failed to open transcript: {}", input.display()))?;
    transcript::read_transcript(file)
        .with_context(|| format!("failed to load transcript: {}", input.display()))
}

fn show_info(input: PathBuf) -> Result<()> {
    let spans = load_spans(&input)?;

    println!("\n=== Transcript Information ===");
    println!("File: {}", input.display());
    println!("Words: {}", spans.len());

    if spans.is_empty() {
        println!("The transcript has no word timings; captions would stay empty.");
        return Ok(());
    }

    let duration = spans.iter().map(|s| s.end).fold(0.0_f64, f64::max);
    println!("Duration: {duration:.2}s");

    println!("First words:");
    for span in spans.iter().take(5) {
        println!("  {:6.2}s - {:6.2}s  {}", span.start, span.end, span.text);
    }
    if spans.len() > 5 {
        println!("  ... and {} more", spans.len() - 5);
    }

    Ok(())
}

fn run_preview(
    input: PathBuf,
    fps: u32,
    speed: f64,
    style_path: Option<PathBuf>,
    realtime: bool,
) -> Result<()> {
    anyhow::ensure!(fps > 0, "fps must be positive");
    anyhow::ensure!(speed > 0.0, "speed must be positive");

    let spans = load_spans(&input)?;
    let style = match style_path {
        Some(path) => {
            let file = File::open(&path)
                .with_context(|| format!("failed to open style: {}", path.display()))?;
            serde_json::from_reader::<_, CaptionStyle>(file)
                .with_context(|| format!("failed to parse style: {}", path.display()))?
        }
        None => CaptionStyle::default(),
    };

    let duration = spans.iter().map(|s| s.end).fold(0.0_f64, f64::max) + 0.25;
    let words: Vec<String> = spans.iter().map(|s| s.text.clone()).collect();

    println!("Previewing {} words over {duration:.2}s", spans.len());
    println!("Display: {fps} fps, playback speed {speed}x\n");

    let surface = TerminalSurface::default();
    let mut driver = CaptionDriver::new(SimulatedPlayback::new(duration));
    driver.attach(Box::new(surface));
    driver.set_style(style)?;
    driver.load(spans)?;
    driver.start()?;

    let frame_secs = 1.0 / f64::from(fps);
    let mut wall_ms: u64 = 0;
    let mut last_active: Option<usize> = None;

    while !driver.playback().ended() {
        driver.playback_mut().advance(frame_secs * speed);
        wall_ms += (frame_secs * 1000.0) as u64;
        driver.frame(wall_ms)?;

        let active = driver.resolver().active_index();
        if active != last_active {
            let position = driver.playback().current_time();
            match active {
                Some(index) => println!("{position:6.2}s  {}", words[index]),
                None => println!("{position:6.2}s  -"),
            }
            last_active = active;
        }

        if realtime {
            std::thread::sleep(Duration::from_secs_f64(frame_secs));
        }
    }

    // One more frame so the driver observes the ended state and resets
    driver.frame(wall_ms)?;
    println!("\nPlayback finished, captions reset.");

    Ok(())
}

/// Playback source backed by a synthetic clock the preview loop advances
struct SimulatedPlayback {
    position: f64,
    duration: f64,
    playing: bool,
}

impl SimulatedPlayback {
    fn new(duration: f64) -> Self {
        Self {
            position: 0.0,
            duration,
            playing: false,
        }
    }

    fn advance(&mut self, secs: f64) {
        if self.playing {
            self.position += secs;
        }
    }
}

impl PlaybackSource for SimulatedPlayback {
    fn current_time(&self) -> f64 {
        self.position
    }

    fn paused(&self) -> bool {
        !self.playing && self.position < self.duration
    }

    fn ended(&self) -> bool {
        self.position >= self.duration
    }

    fn play(&mut self) -> Result<(), PlaybackError> {
        self.playing = true;
        Ok(())
    }
}

/// Render surface that mirrors per-word node state in memory
#[derive(Default)]
struct TerminalSurface {
    nodes: Vec<WordState>,
}

impl CaptionSurface for TerminalSurface {
    fn rebuild(&mut self, spans: &[WordSpan], _style: &CaptionStyle) {
        self.nodes = vec![WordState::rest(); spans.len()];
    }

    fn apply(&mut self, index: usize, state: &WordState) {
        if let Some(node) = self.nodes.get_mut(index) {
            *node = *state;
        }
    }
}
