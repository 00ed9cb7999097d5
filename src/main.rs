use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use log::debug;

use cooklang_shopping::{
    CookError, Document, OutputFormat, RecipeLoader, Renderer, Settings, ShoppingList,
};

#[derive(Parser, Debug)]
#[command(name = "cook", version, about = "A command-line tool to manage Cooklang recipes")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Manage recipes and recipe files
    #[command(subcommand)]
    Recipe(RecipeCommand),
    /// Create a shopping list
    ShoppingList(ShoppingListArgs),
}

#[derive(Subcommand, Debug)]
enum RecipeCommand {
    /// Parse and print a Cooklang recipe file
    Read(ReadArgs),
}

#[derive(Args, Debug)]
struct OutputArgs {
    /// Set the output format (default text, or implied by --output)
    #[arg(long, value_enum)]
    output_format: Option<OutputFormat>,

    /// Write to this file instead of standard output
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Print only the ingredients section of the output
    #[arg(long)]
    only_ingredients: bool,
}

#[derive(Args, Debug)]
struct ReadArgs {
    /// A .cook file
    file: PathBuf,

    #[command(flatten)]
    output: OutputArgs,
}

#[derive(Args, Debug)]
struct ShoppingListArgs {
    /// File or directory with .cook files
    #[arg(required = true)]
    files_or_directory: Vec<PathBuf>,

    /// Aisle config to group ingredients with
    #[arg(long)]
    aisle: Option<PathBuf>,

    /// Inflection config to rename ingredients with
    #[arg(long)]
    inflection: Option<PathBuf>,

    #[command(flatten)]
    output: OutputArgs,
}

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    if let Err(e) = run(cli.command).await {
        eprintln!("error: {}", e);
        std::process::exit(e.exit_code());
    }
}

impl OutputArgs {
    /// The explicit flag wins, then the output file extension, then settings
    fn format(&self, settings: &Settings) -> OutputFormat {
        self.output_format
            .or_else(|| self.output.as_deref().and_then(OutputFormat::from_path))
            .unwrap_or(settings.output_format)
    }

    fn writer(&self) -> Result<Box<dyn Write>, CookError> {
        match &self.output {
            Some(path) => Ok(Box::new(create(path)?)),
            None => Ok(Box::new(std::io::stdout().lock())),
        }
    }
}

fn create(path: &Path) -> Result<File, CookError> {
    debug!("writing output to {}", path.display());
    Ok(File::create(path)?)
}

async fn run(command: Command) -> Result<(), CookError> {
    let settings = Settings::load()?;
    debug!("{:?}", settings);

    match command {
        Command::Recipe(RecipeCommand::Read(args)) => {
            let recipe = RecipeLoader::default().load(&args.file)?;
            let renderer = Renderer::new(args.output.format(&settings))
                .only_ingredients(args.output.only_ingredients)
                .wrap_width(settings.wrap_width);
            renderer.write(&Document::from_recipe(&recipe), &mut args.output.writer()?)
        }
        Command::ShoppingList(args) => {
            let mut builder = ShoppingList::builder()
                .files(args.files_or_directory)
                .format(args.output.format(&settings))
                .only_ingredients(args.output.only_ingredients)
                .wrap_width(settings.wrap_width)
                .recipe_extension(settings.recipe_extension);
            if let Some(aisle) = args.aisle.or(settings.aisle) {
                builder = builder.aisle(aisle);
            }
            if let Some(inflection) = args.inflection.or(settings.inflection) {
                builder = builder.inflection(inflection);
            }
            let (renderer, document) = builder.prepare().await?;
            renderer.write(&document, &mut args.output.writer()?)
        }
    }
}
