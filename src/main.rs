use std::fs::File;
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;

mod query;
mod repl;

use query::{CountArgs, SuggestArgs, TreeArgs};
use repl::ReplArgs;

#[derive(Parser, Debug)]
#[command(
    version,
    about = "A prefix-tree word completion tool for your terminal."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every stored word beginning with a prefix.
    Suggest(SuggestArgs),
    /// Print how many insertions the loaded words amounted to.
    Count(CountArgs),
    /// Dump the trie as a JSON hierarchy.
    Tree(TreeArgs),
    /// Interactive session over stdin.
    Repl(ReplArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let file = File::create("log.txt")?;
    tracing_subscriber::fmt().with_writer(Arc::new(file)).init();

    let cli = Cli::parse();
    info!("Running command: {:?}", cli.command);

    match cli.command {
        Command::Suggest(args) => query::execute_suggest(args).await,
        Command::Count(args) => query::execute_count(args).await,
        Command::Tree(args) => query::execute_tree(args).await,
        Command::Repl(args) => repl::execute_repl(args).await,
    }
}
