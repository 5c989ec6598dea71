use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use welcomedesk::{
    AppConfig, HttpRecipeBoundary, RecipeRequestController, Variant,
    config::DEFAULT_API_BASE, core::RequestStatus,
};

#[derive(Parser)]
#[command(name = "welcomedesk")]
#[command(about = "Employee onboarding dashboard and recipe generator")]
struct Cli {
    /// Root URL of the recipe service
    #[arg(long, env = "WELCOMEDESK_API_BASE", default_value = DEFAULT_API_BASE)]
    api_base: String,

    /// View shown after login
    #[arg(long, value_enum, env = "WELCOMEDESK_VARIANT", default_value_t = Variant::Dashboard)]
    variant: Variant,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Open the desktop client (default)
    Gui,
    /// Ask the recipe service for suggestions and print them
    Generate {
        /// Free-form ingredient list, e.g. "chicken, rice, garlic"
        #[arg(value_name = "INGREDIENTS")]
        ingredients: String,
    },
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default)),
        )
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    let args = Cli::parse();
    init_tracing(args.verbose);

    let config = AppConfig::new(&args.api_base, args.variant)?;
    match args.command {
        Some(Command::Generate { ingredients }) => generate(&config, ingredients),
        Some(Command::Gui) | None => run_gui(config),
    }
}

fn generate(config: &AppConfig, ingredients: String) -> anyhow::Result<()> {
    let boundary = HttpRecipeBoundary::new(&config.api_base)?;
    let runtime = tokio::runtime::Runtime::new()?;
    let mut controller = RecipeRequestController::new();
    runtime.block_on(controller.submit(&boundary, ingredients));

    match controller.status() {
        RequestStatus::Success if controller.recipes().is_empty() => {
            println!("No recipes suggested.");
        }
        RequestStatus::Success => {
            println!("=== Recipe Suggestions ===");
            for (i, recipe) in controller.recipes().iter().enumerate() {
                println!("\n{}", recipe.display_title(i + 1));
                println!("{}", recipe.instructions);
            }
        }
        _ => anyhow::bail!("{}", controller.error_message()),
    }
    Ok(())
}

#[cfg(feature = "gui")]
fn run_gui(config: AppConfig) -> anyhow::Result<()> {
    welcomedesk::gui::WelcomeDeskApp::run(config)
}

#[cfg(not(feature = "gui"))]
fn run_gui(_config: AppConfig) -> anyhow::Result<()> {
    anyhow::bail!("built without the `gui` feature; only `generate` is available")
}
