//! CLI entry point for recipe-board
//!
//! Launches the GUI by default, and offers headless commands for
//! listing, searching, showing and checking catalogue recipes.

use clap::{Parser, Subcommand};
use colored::*;
use recipe_board::catalogue::{self, Catalogue};
use recipe_board::page::PageLayout;
use recipe_board::settings::Settings;
use recipe_board::ui::{App, Controller};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "recipe-board")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to a JSON catalogue file (falls back to RECIPE_BOARD_CATALOGUE)
    #[arg(short, long, global = true)]
    catalogue: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the recipe board window
    Gui,

    /// List all recipes
    List,

    /// Filter recipes the way the search box does
    Search {
        /// Text to look for in recipe summaries
        query: String,
    },

    /// Show one recipe with its ingredients and steps
    Show {
        /// Recipe name (case-insensitive)
        name: String,
    },

    /// Check every ingredient line of a catalogue file
    Check,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = Settings::resolve(cli.catalogue);

    match cli.command.unwrap_or(Commands::Gui) {
        Commands::Gui => launch_gui(&settings)?,
        Commands::List => list_recipes(&settings.load_catalogue()?),
        Commands::Search { query } => {
            search_recipes(&settings.load_catalogue()?, &settings.layout, &query)?
        }
        Commands::Show { name } => show_recipe(&settings.load_catalogue()?, &name)?,
        Commands::Check => check_catalogue(&settings)?,
    }

    Ok(())
}

/// Open the GTK window and block until it closes
fn launch_gui(settings: &Settings) -> anyhow::Result<()> {
    let catalogue = settings.load_catalogue()?;
    App::new(catalogue, settings.layout.clone()).run()?;
    Ok(())
}

/// List every recipe with its summary
fn list_recipes(catalogue: &Catalogue) {
    println!("{}", "Recipes\n".bold());

    for recipe in catalogue.recipes() {
        println!(
            "{} {}",
            recipe.name.cyan().bold(),
            format!("({} ingredients)", recipe.ingredients.len()).dimmed()
        );
        println!("  {}", recipe.summary());
    }

    println!("\n{} Total: {} recipes", "✓".green(), catalogue.len());
}

/// Run the recipe filter against a headless page holding the catalogue's cards
fn search_recipes(catalogue: &Catalogue, layout: &PageLayout, query: &str) -> anyhow::Result<()> {
    let controller = Controller::headless(layout.clone(), &catalogue.summaries())?;
    let outcome = controller.type_query(query);

    println!("{} Searching for {}\n", "→".cyan(), format!("{:?}", query).bold());

    for summary in controller.visible_summaries() {
        println!("  {}", summary.green());
    }

    println!(
        "\n{} {} shown, {} hidden",
        "✓".green(),
        outcome.visible,
        outcome.hidden
    );

    Ok(())
}

/// Print one recipe in full
fn show_recipe(catalogue: &Catalogue, name: &str) -> anyhow::Result<()> {
    let recipe = catalogue
        .find(name)
        .ok_or_else(|| anyhow::anyhow!("No recipe named {:?}", name))?;

    println!("{}\n", recipe.name.cyan().bold());

    println!("{}", "Ingrédients".bold());
    for ingredient in &recipe.ingredients {
        println!("  • {}", ingredient);
    }

    println!("\n{}", "Préparation".bold());
    for (i, step) in recipe.steps.iter().enumerate() {
        println!("  {} {}", format!("{}.", i + 1).dimmed(), step);
    }

    Ok(())
}

/// Parse every ingredient line and report the ones that fail
fn check_catalogue(settings: &Settings) -> anyhow::Result<()> {
    let path = settings.catalogue_path().ok_or_else(|| {
        anyhow::anyhow!("check needs a catalogue file (--catalogue or RECIPE_BOARD_CATALOGUE)")
    })?;

    println!("{} Checking catalogue: {}", "→".cyan(), path.display());

    let (checked, failures) = catalogue::check_file(path)?;

    if failures.is_empty() {
        println!(
            "{} {}",
            "✓".green().bold(),
            format!("All {} ingredient lines parse", checked).bold()
        );
        return Ok(());
    }

    println!(
        "{} {} of {} ingredient line{} failed:\n",
        "✗".red().bold(),
        failures.len(),
        checked,
        if checked == 1 { "" } else { "s" }
    );

    for failure in &failures {
        println!(
            "  {} {} {}",
            failure.recipe.yellow().bold(),
            format!("line {}:", failure.line).dimmed(),
            failure.raw
        );
        println!("    {}", failure.error.to_string().red());
    }

    std::process::exit(1);
}
