use clap::{ArgAction, Args, Parser, Subcommand};
use log::debug;
use std::io::Write;
use std::path::PathBuf;
use tokio::io::BufReader;
use tokio::sync::mpsc;

use recipe_finder::app::forward_commands;
use recipe_finder::render::{render_card, render_text_card, render_text_line};
use recipe_finder::{
    AppConfig, Filter, FinderError, RecipeApp, RecipeAppBuilder, RecipeStore,
    SortOrder, View,
};

#[derive(Parser)]
#[command(
    name = "recipe-finder",
    version,
    about = "Search, filter, sort and favorite recipes"
)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Recipe catalogue as a JSON array (defaults to the built-in catalogue)
    #[arg(long, value_name = "FILE", global = true)]
    recipes: Option<PathBuf>,

    /// File the favorites are stored in
    #[arg(long, value_name = "FILE", global = true)]
    storage: Option<PathBuf>,

    /// Increase log verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Command {
    /// List the recipes matching a query
    List(ListArgs),

    /// Show one recipe with its ingredients and steps
    Show {
        id: u32,
        /// Print the HTML card instead of text
        #[arg(long)]
        html: bool,
    },

    /// Add a recipe to the favorites, or remove it if it already is one
    Favorite { id: u32 },

    /// List favorite recipes
    Favorites,

    /// Read commands from stdin (`filter quick`, `sort name`, `search rice`, `fav 3`)
    Interactive,
}

#[derive(Args)]
struct ListArgs {
    /// all, easy, medium, hard, quick or favorites
    #[arg(long, default_value = "all")]
    filter: String,

    /// none, name or time
    #[arg(long, default_value = "none")]
    sort: String,

    /// Match titles and ingredients containing this text
    #[arg(long)]
    search: Option<String>,

    /// Print the HTML markup instead of text
    #[arg(long)]
    html: bool,

    /// Write the output to a file instead of stdout
    #[arg(long, short, value_name = "FILE")]
    output: Option<PathBuf>,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();
}

fn run(cli: Cli) -> Result<(), FinderError> {
    let mut config = AppConfig::load()?;
    if let Some(recipes) = cli.recipes {
        config.recipes_path = Some(recipes);
    }
    if let Some(storage) = cli.storage {
        config.storage_path = storage;
    }
    debug!("{:?}", config);

    let builder = RecipeApp::builder().config(&config)?;

    match cli.command {
        Command::List(args) => list(builder, args),
        Command::Show { id, html } => show(builder.build(), id, html),
        Command::Favorite { id } => toggle_favorite(builder.build(), id),
        Command::Favorites => {
            let app = builder.filter(Filter::Favorites).build();
            print_text(app.store(), &app.view());
            Ok(())
        }
        Command::Interactive => {
            let runtime = tokio::runtime::Builder::new_current_thread()
                .enable_all()
                .build()?;
            runtime.block_on(interactive(builder.build()));
            Ok(())
        }
    }
}

fn list(builder: RecipeAppBuilder, args: ListArgs) -> Result<(), FinderError> {
    let mut builder = builder
        .filter(Filter::from(args.filter.as_str()))
        .sort(SortOrder::from(args.sort.as_str()));
    if let Some(search) = args.search {
        builder = builder.search(search);
    }
    let app = builder.build();
    let view = app.view();

    match (args.html, args.output) {
        (true, Some(path)) => std::fs::write(path, &view.markup)?,
        (true, None) => println!("{}", view.markup),
        (false, Some(path)) => {
            let mut file = std::fs::File::create(path)?;
            for line in text_lines(app.store(), &view) {
                writeln!(file, "{}", line)?;
            }
        }
        (false, None) => print_text(app.store(), &view),
    }
    Ok(())
}

fn show(app: RecipeApp, id: u32, html: bool) -> Result<(), FinderError> {
    let recipe = app.store().get(id).ok_or(FinderError::RecipeNotFound(id))?;
    let favorite = app.state().is_favorite(id);

    if html {
        println!("{}", render_card(recipe, favorite));
    } else {
        print!("{}", render_text_card(recipe, favorite));
    }
    Ok(())
}

fn toggle_favorite(mut app: RecipeApp, id: u32) -> Result<(), FinderError> {
    let title = app
        .store()
        .get(id)
        .map(|r| r.title.clone())
        .ok_or(FinderError::RecipeNotFound(id))?;

    let view = app.toggle_favorite(id);
    if view.is_favorite(id) {
        println!("★ Added '{}' to favorites", title);
    } else {
        println!("Removed '{}' from favorites", title);
    }
    Ok(())
}

fn text_lines(store: &RecipeStore, view: &View) -> Vec<String> {
    let mut lines: Vec<String> = view
        .ids
        .iter()
        .filter_map(|id| store.get(*id))
        .map(|recipe| render_text_line(recipe, view.is_favorite(recipe.id)))
        .collect();
    lines.push(view.summary());
    lines
}

fn print_text(store: &RecipeStore, view: &View) {
    for line in text_lines(store, view) {
        println!("{}", line);
    }
}

async fn interactive(mut app: RecipeApp) {
    let (tx, rx) = mpsc::channel(32);

    tokio::spawn(forward_commands(BufReader::new(tokio::io::stdin()), tx));

    let store = app.store().clone();
    let mut target = |view: &View| {
        println!();
        print_text(&store, view);
    };
    app.run(rx, &mut target).await;
}
