use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use ituncli::{cli, config, error, query};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Look up an album by catalog ID, UPC, or Apple Music URL
    Lookup(LookupOptions),

    /// List the known storefronts
    Storefronts(StorefrontsOptions),

    /// Manage the response cache
    Cache(CacheOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct LookupOptions {
    /// Catalog ID, UPC, or a pasted Apple Music album URL
    pub query: String,

    /// Storefront code(s) to query; can be repeated (default: US, JP, FR)
    #[clap(long, short = 's', action = clap::ArgAction::Append, num_args = 1)]
    pub storefront: Vec<String>,

    /// Identifier kind(s) to look up: id, upc, or both
    #[clap(
        long,
        default_value = "both",
        value_parser = query::parse_lookup_kinds,
        num_args = 1
    )]
    pub kind: query::LookupKinds,

    /// Skip the response cache and fetch fresh results
    #[clap(long)]
    pub force: bool,

    /// Open the first found album's store page in the browser
    #[clap(long)]
    pub open: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct StorefrontsOptions {
    /// Filter storefronts by code or name
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct CacheOptions {
    #[command(subcommand)]
    pub command: CacheSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CacheSubcommand {
    /// Remove all cached responses
    Clear,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Lookup(opt) => {
            cli::lookup(opt.query, opt.storefront, opt.kind, opt.force, opt.open).await
        }
        Command::Storefronts(opt) => cli::list_storefronts(opt.search),
        Command::Cache(opt) => match opt.command {
            CacheSubcommand::Clear => cli::clear_cache().await,
        },
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
