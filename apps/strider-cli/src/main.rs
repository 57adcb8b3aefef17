mod scenario;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use strider_input::ScriptedInput;
use strider_motion::{InputRecording, TuningParameters};
use strider_tools::{EventTimeline, MotionInspector};
use tracing_subscriber::EnvFilter;

use scenario::Layout;

#[derive(Parser)]
#[command(name = "strider-cli", about = "Headless driver for the strider motion controller")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print version and crate info
    Info,
    /// Run the walk-and-jump scenario in a flat arena
    Simulate {
        /// Number of frames to run
        #[arg(short, long, default_value = "180")]
        ticks: usize,
        /// Timestep per frame in seconds
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Tuning file (.yaml, .yml or .json)
        #[arg(long)]
        tuning: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
        /// Print an inspector line every N frames
        #[arg(long, default_value = "30")]
        every: u64,
    },
    /// Print the default tuning parameters
    Tuning {
        #[arg(short, long, value_enum, default_value_t = Format::Yaml)]
        format: Format,
    },
    /// Record a scenario, replay it into a fresh rig and compare state hashes
    Replay {
        /// Number of frames to record
        #[arg(short, long, default_value = "120")]
        ticks: usize,
        /// Timestep per frame in seconds
        #[arg(long, default_value = "0.016666668")]
        dt: f32,
        /// Write the recording to this JSON file
        #[arg(long)]
        save: Option<PathBuf>,
        /// Replay this JSON recording instead of recording a new one
        #[arg(long, conflicts_with = "save")]
        load: Option<PathBuf>,
        #[command(flatten)]
        layout: LayoutArgs,
    },
}

#[derive(clap::Args, Clone, Copy)]
struct LayoutArgs {
    /// Ceiling height above the floor
    #[arg(long)]
    ceiling: Option<f32>,
    /// Height of the platform in front of the spawn
    #[arg(long, default_value = "0.25")]
    step_height: f32,
}

impl From<LayoutArgs> for Layout {
    fn from(args: LayoutArgs) -> Self {
        Self {
            ceiling: args.ceiling,
            step_height: args.step_height,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Yaml,
    Json,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    match cli.command {
        Commands::Info => {
            println!("strider-cli v{}", env!("CARGO_PKG_VERSION"));
            println!("motion: {}", strider_motion::crate_info());
            println!("input: {}", strider_input::crate_info());
            println!("arena: {}", strider_arena::crate_info());
            println!("tools: {}", strider_tools::crate_info());
        }
        Commands::Simulate {
            ticks,
            dt,
            tuning,
            layout,
            every,
        } => {
            let tuning = match tuning {
                Some(path) => {
                    tracing::info!(path = %path.display(), "using tuning file");
                    TuningParameters::load(&path)?
                }
                None => TuningParameters::default(),
            };
            let mut rig = scenario::rig(tuning, layout.into())?;
            let mut input = ScriptedInput::new(scenario::walk_and_jump(ticks));
            let mut timeline = EventTimeline::new();

            println!("Simulating {ticks} frames at dt={dt}");
            {
                let mut session = rig.attach(&mut input);
                for _ in 0..ticks {
                    let report = session.tick(dt);
                    timeline.record(report.tick, session.drain_motion_events());
                    if every > 0 && report.tick % every == 0 {
                        println!("{}", MotionInspector::summary(session.rig()));
                    }
                }
            }
            let p = rig.mover().position();
            println!("{}", MotionInspector::summary(&rig));
            println!("Final position: ({:.3}, {:.3}, {:.3})", p.x, p.y, p.z);
            println!("Events ({}):", timeline.len());
            print!("{timeline}");
        }
        Commands::Tuning { format } => {
            let tuning = TuningParameters::default();
            let text = match format {
                Format::Yaml => tuning.to_yaml_string()?,
                Format::Json => tuning.to_json_string()?,
            };
            println!("{text}");
        }
        Commands::Replay {
            ticks,
            dt,
            save,
            load,
            layout,
        } => {
            let layout: Layout = layout.into();

            let (recording, expected) = match load {
                Some(path) => {
                    let recording = InputRecording::load(&path)?;
                    println!("Loaded {} frames from {}", recording.len(), path.display());
                    let mut reference = scenario::rig(TuningParameters::default(), layout)?;
                    let hashes = recording.replay(&mut reference);
                    (recording, hashes)
                }
                None => {
                    let mut rig = scenario::rig(TuningParameters::default(), layout)?;
                    let mut input = ScriptedInput::new(scenario::walk_and_jump(ticks));
                    let mut recording = InputRecording::new();
                    let mut hashes = Vec::with_capacity(ticks);
                    let mut session = rig.attach(&mut input);
                    for _ in 0..ticks {
                        session.tick_recorded(dt, &mut recording);
                        hashes.push(session.rig().controller().state_hash());
                    }
                    drop(session);
                    if let Some(path) = save {
                        recording.save(&path)?;
                        println!("Saved {} frames to {}", recording.len(), path.display());
                    }
                    (recording, hashes)
                }
            };

            let mut replayed = scenario::rig(TuningParameters::default(), layout)?;
            let actual = recording.replay(&mut replayed);

            println!(
                "Frames: {} ({:.2}s simulated)",
                recording.len(),
                recording.duration()
            );
            println!(
                "Final hash: {:#x}",
                actual.last().copied().unwrap_or_default()
            );
            match expected.iter().zip(&actual).position(|(a, b)| a != b) {
                None if expected.len() == actual.len() => println!("Match: OK"),
                None => anyhow::bail!(
                    "replay length mismatch: {} vs {}",
                    expected.len(),
                    actual.len()
                ),
                Some(frame) => anyhow::bail!("replay diverged at frame {}", frame + 1),
            }
        }
    }

    Ok(())
}
