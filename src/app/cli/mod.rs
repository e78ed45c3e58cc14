//! CLI Adapter.

mod interactive;
mod logging;

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};

use crate::adapters::output_file::{DEFAULT_OUTPUT_FILE, write_session_output};
use crate::app::api::{self, GenerateOptions};
use crate::domain::{AppError, ExplicitParameters, ParameterKey, SessionOutput};

#[derive(Parser)]
#[command(name = "scenarist")]
#[command(version)]
#[command(
    about = "Gather video-series parameters and draft one script per video with an LLM",
    long_about = None
)]
struct Cli {
    /// Path to a scenarist.toml config file
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Show debug logs on stderr
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve parameters and generate one script per video
    #[clap(visible_alias = "g")]
    Generate {
        /// Idea for the video series
        #[arg(short, long)]
        idea: String,
        #[command(flatten)]
        params: ParameterArgs,
        /// Also save the JSON to a file
        #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
        output: Option<PathBuf>,
    },
    /// Ask for the idea and each parameter in the terminal, then generate scripts
    #[clap(visible_alias = "i")]
    Interactive {
        /// Also save the JSON to a file
        #[arg(short, long, num_args = 0..=1, default_missing_value = DEFAULT_OUTPUT_FILE)]
        output: Option<PathBuf>,
    },
    /// Resolve parameters only and print them as JSON
    #[clap(visible_alias = "c")]
    Collect {
        /// Idea for the video series
        #[arg(short, long)]
        idea: String,
        #[command(flatten)]
        params: ParameterArgs,
    },
}

/// Parameter values given on the command line. Omitted or blank ones are inferred.
#[derive(Args, Debug, Default)]
struct ParameterArgs {
    /// How many videos to make
    #[arg(long)]
    number_of_videos: Option<String>,
    /// Duration of each video, in minutes
    #[arg(long)]
    duration_minutes: Option<String>,
    /// Graphic style (realistic, animated, imaginative)
    #[arg(long)]
    graphic_type: Option<String>,
    /// Video style (animated video, motion pictures, steady pictures)
    #[arg(long)]
    video_style: Option<String>,
    /// Target audience (general, children aged 6, ...)
    #[arg(long)]
    audience: Option<String>,
}

impl ParameterArgs {
    fn into_explicit(self) -> ExplicitParameters {
        let mut explicit = ExplicitParameters::new();
        explicit.set(ParameterKey::NumberOfVideos, self.number_of_videos);
        explicit.set(ParameterKey::DurationMinutes, self.duration_minutes);
        explicit.set(ParameterKey::GraphicType, self.graphic_type);
        explicit.set(ParameterKey::VideoStyle, self.video_style);
        explicit.set(ParameterKey::Audience, self.audience);
        explicit
    }
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config.as_deref();
    let result: Result<(), AppError> = match cli.command {
        Commands::Generate { idea, params, output } => {
            run_generate(config, idea, params.into_explicit(), output.as_deref())
        }
        Commands::Interactive { output } => run_interactive(config, output.as_deref()),
        Commands::Collect { idea, params } => run_collect(config, &idea, params.into_explicit()),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_generate(
    config: Option<&Path>,
    idea: String,
    explicit: ExplicitParameters,
    output: Option<&Path>,
) -> Result<(), AppError> {
    let config = api::load_config(config)?;
    let oracle = api::oracle_from_env(&config)?;

    eprintln!("🎬 Collecting scenario details...");
    let session =
        api::generate_with(oracle, GenerateOptions { idea, explicit, include_idea: true })?;
    emit(&session, output)
}

fn run_interactive(config: Option<&Path>, output: Option<&Path>) -> Result<(), AppError> {
    let config = api::load_config(config)?;
    let oracle = api::oracle_from_env(&config)?;

    eprintln!("🎬 Welcome to the AI Video Scenario Generator!");
    let Some(idea) = interactive::prompt_idea()? else {
        return Ok(());
    };
    let Some(explicit) = interactive::prompt_parameters()? else {
        return Ok(());
    };

    let session =
        api::generate_with(oracle, GenerateOptions { idea, explicit, include_idea: false })?;
    emit(&session, output)
}

fn run_collect(
    config: Option<&Path>,
    idea: &str,
    explicit: ExplicitParameters,
) -> Result<(), AppError> {
    let config = api::load_config(config)?;
    let session = api::collect_parameters(&config, idea, &explicit)?;
    emit(&session, None)
}

fn emit(session: &SessionOutput, output: Option<&Path>) -> Result<(), AppError> {
    println!("{}", session.to_pretty_json()?);

    if let Some(path) = output {
        write_session_output(path, session)?;
        eprintln!("✅ Saved scenario to {}", path.display());
    } else if let Some(scripts) = &session.scripts {
        eprintln!("✅ Generated {} script(s)", scripts.len());
    }
    Ok(())
}
