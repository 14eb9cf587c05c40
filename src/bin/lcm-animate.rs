use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use tracing::{info, level_filters::LevelFilter};
use tracing_subscriber::{EnvFilter, fmt};

use lcm_animate::{
    AnimationRequest, ChimeRequest, DeployGateway, DeviceTarget, HorizontalAlign, LcmError,
    LcmResult, Outcome, RemoteLayout, ScreenName, SshGateway, TimingSpec, VerticalAlign,
    Workspace, run_animation, run_chime,
};

#[derive(Parser, Debug)]
#[command(name = "lcm-animate", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,

    /// Directory holding animation sources.
    #[arg(long, global = true, default_value = "src/animations")]
    source_root: PathBuf,

    /// Directory holding chime sound files.
    #[arg(long, global = true, default_value = "src/chimes")]
    chimes_root: PathBuf,

    /// Build output directory.
    #[arg(long, global = true, default_value = "build")]
    output_root: PathBuf,

    /// Device host name or address.
    #[arg(long, global = true, env = "G4_DOORBELL_HOSTNAME")]
    host: Option<String>,

    /// SSH user on the device.
    #[arg(long, global = true, default_value = DeviceTarget::DEFAULT_USER)]
    user: String,

    /// Raise log verbosity (-v debug, -vv trace).
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Put an animation or image on a screen.
    Animation(AnimationArgs),
    /// Replace the ring chime.
    Chime(ChimeArgs),
}

#[derive(Parser, Debug)]
struct AnimationArgs {
    /// Screen to update, e.g. WELCOME.
    #[arg(long)]
    screen: ScreenName,

    /// Image file or frame directory, relative to the source root.
    #[arg(long)]
    image: String,

    /// Animation duration in milliseconds.
    #[arg(long, default_value_t = lcm_animate::timing::DEFAULT_DURATION_MS)]
    duration: u32,

    /// Frame count of a single tiled image.
    #[arg(long)]
    frames: Option<u32>,

    /// Frames per second; overrides --duration.
    #[arg(long)]
    framerate: Option<f64>,

    #[arg(long = "loop", action = ArgAction::Set, default_value_t = true)]
    animation_loop: bool,

    /// Treat a single still image as a tiled slideshow.
    #[arg(long, action = ArgAction::Set, default_value_t = true)]
    slideshow: bool,

    #[arg(short = 'x', long, default_value_t = 0, allow_negative_numbers = true)]
    x: i32,

    #[arg(short = 'y', long, default_value_t = 0, allow_negative_numbers = true)]
    y: i32,

    #[arg(long, value_enum, default_value_t = Horizontal::Center)]
    horizontal: Horizontal,

    #[arg(long, value_enum, default_value_t = Vertical::Middle)]
    vertical: Vertical,

    /// Write the asset and configuration without touching the device.
    #[arg(long)]
    dry_run: bool,
}

#[derive(Parser, Debug)]
struct ChimeArgs {
    /// Sound file, relative to the chimes root.
    #[arg(long)]
    filename: String,

    #[arg(long, default_value_t = 1)]
    repeat: u32,

    /// Volume in percent.
    #[arg(long, default_value_t = 100, value_parser = clap::value_parser!(u8).range(0..=100))]
    volume: u8,

    #[arg(long)]
    dry_run: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Horizontal {
    Left,
    Center,
    Right,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Vertical {
    Top,
    Middle,
    Bottom,
}

impl From<Horizontal> for HorizontalAlign {
    fn from(h: Horizontal) -> Self {
        match h {
            Horizontal::Left => Self::Left,
            Horizontal::Center => Self::Center,
            Horizontal::Right => Self::Right,
        }
    }
}

impl From<Vertical> for VerticalAlign {
    fn from(v: Vertical) -> Self {
        match v {
            Vertical::Top => Self::Top,
            Vertical::Middle => Self::Middle,
            Vertical::Bottom => Self::Bottom,
        }
    }
}

/// Stands in for the device during dry runs without a configured host.
struct NoDevice;

impl DeployGateway for NoDevice {
    fn deploy_animation(
        &self,
        _: &std::path::Path,
        _: &std::path::Path,
        _: ScreenName,
    ) -> LcmResult<()> {
        Err(no_host())
    }

    fn deploy_chime(&self, _: &std::path::Path, _: &std::path::Path) -> LcmResult<()> {
        Err(no_host())
    }
}

fn no_host() -> LcmError {
    LcmError::input("no device host given; pass --host or set G4_DOORBELL_HOSTNAME")
}

fn init_tracing(verbosity: u8) -> anyhow::Result<()> {
    let level = match verbosity {
        0 => LevelFilter::INFO,
        1 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    let filter = EnvFilter::builder()
        .with_default_directive(level.into())
        .from_env()
        .context("parse RUST_LOG")?;
    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    let workspace = Workspace {
        animations_root: cli.source_root.clone(),
        chimes_root: cli.chimes_root.clone(),
        output_root: cli.output_root.clone(),
    };

    let outcome = match &cli.cmd {
        Command::Animation(args) => cmd_animation(&cli, args, &workspace)?,
        Command::Chime(args) => cmd_chime(&cli, args, &workspace)?,
    };

    if outcome == Outcome::DryRun {
        info!("dry run complete, artifacts left in '{}'", workspace.output_root.display());
    }
    Ok(())
}

fn make_gateway(cli: &Cli, dry_run: bool) -> anyhow::Result<Box<dyn DeployGateway>> {
    match cli.host.as_deref() {
        Some(host) => {
            let target = DeviceTarget::new(host)?.with_user(cli.user.clone());
            Ok(Box::new(SshGateway::new(target, RemoteLayout::default())))
        }
        None if dry_run => Ok(Box::new(NoDevice)),
        None => Err(no_host().into()),
    }
}

fn cmd_animation(
    cli: &Cli,
    args: &AnimationArgs,
    workspace: &Workspace,
) -> anyhow::Result<Outcome> {
    let gateway = make_gateway(cli, args.dry_run)?;

    let request = AnimationRequest {
        screen: args.screen,
        image: args.image.clone(),
        timing: TimingSpec {
            duration_ms: Some(args.duration),
            framerate: args.framerate,
        },
        frames: args.frames,
        animation_loop: args.animation_loop,
        slideshow: args.slideshow,
        x: args.x,
        y: args.y,
        horizontal: args.horizontal.into(),
        vertical: args.vertical.into(),
        dry_run: args.dry_run,
    };

    let report = run_animation(
        &request,
        workspace,
        &workspace.lcm_config_source(),
        gateway.as_ref(),
    )
    .with_context(|| format!("update screen {}", args.screen))?;

    let asset = &report.asset;
    if asset.animated {
        eprintln!(
            "{}: {} ({} frames of {}, {} ms)",
            args.screen,
            asset.path.display(),
            asset.frame_count,
            asset.frame_dimensions,
            report.duration_ms
        );
    } else {
        eprintln!(
            "{}: {} (static {})",
            args.screen,
            asset.path.display(),
            asset.frame_dimensions
        );
    }
    Ok(report.outcome)
}

fn cmd_chime(cli: &Cli, args: &ChimeArgs, workspace: &Workspace) -> anyhow::Result<Outcome> {
    let gateway = make_gateway(cli, args.dry_run)?;

    let request = ChimeRequest {
        filename: args.filename.clone(),
        repeat_times: args.repeat,
        volume: args.volume,
        dry_run: args.dry_run,
    };

    let report = run_chime(
        &request,
        workspace,
        &workspace.sounds_config_source(),
        gateway.as_ref(),
    )
    .with_context(|| format!("update chime '{}'", args.filename))?;

    eprintln!("chime: {}", report.config_path.display());
    Ok(report.outcome)
}
