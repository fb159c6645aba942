use crate::demo::{
    run_demo, run_hab_assess, run_hazard_list, run_hazard_show, DemoArgs, HabAssessArgs,
    HazardShowArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use marine_guardian::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Marine Ecosystem Guardian",
    about = "Serve and explore marine hazard impact models from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Inspect the static impact models for image-backed hazards
    Hazards {
        #[command(subcommand)]
        command: HazardsCommand,
    },
    /// Assess harmful algal bloom risk from environmental readings
    Hab {
        #[command(subcommand)]
        command: HabCommand,
    },
    /// Print every analysis in dashboard order
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum HazardsCommand {
    /// List the available hazard analyses
    List,
    /// Show the impact table, chart data and advisory for one hazard
    Show(HazardShowArgs),
}

#[derive(Subcommand, Debug)]
enum HabCommand {
    /// Score a set of readings against the bloom risk model
    Assess(HabAssessArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Hazards {
            command: HazardsCommand::List,
        } => run_hazard_list(),
        Command::Hazards {
            command: HazardsCommand::Show(args),
        } => run_hazard_show(args),
        Command::Hab {
            command: HabCommand::Assess(args),
        } => run_hab_assess(args),
        Command::Demo(args) => run_demo(args),
    }
}
