use std::io::IsTerminal;

use clap::Args;
use tokio::io::AsyncReadExt;
use tokio::time::Instant;
use tracing::{debug, info};

use lexitrie::{FileWordSource, Trie, WordSource};

#[derive(Args, Debug)]
pub struct SuggestArgs {
    /// Line-delimited dictionary file to populate the trie from.
    #[arg(short, long)]
    dictionary: Option<String>,
    #[arg(name = "PREFIX")]
    prefix: Option<String>,
}

#[derive(Args, Debug)]
pub struct CountArgs {
    #[arg(short, long)]
    dictionary: Option<String>,
}

#[derive(Args, Debug)]
pub struct TreeArgs {
    #[arg(short, long)]
    dictionary: Option<String>,
    /// Render only the subtree reachable from this prefix.
    #[arg(name = "PREFIX")]
    prefix: Option<String>,
}

pub async fn execute_suggest(args: SuggestArgs) -> anyhow::Result<()> {
    let trie = build_trie(args.dictionary.as_deref()).await?;
    let prefix = args.prefix.unwrap_or_default();

    let suggestions = {
        let start = Instant::now();
        let res = trie.suggest(&prefix);
        debug!("Suggest took {} ms", start.elapsed().as_millis());
        res
    };

    info!(
        "{} suggestions for prefix {:?} over {} inserted words",
        suggestions.len(),
        prefix,
        trie.count()
    );

    for word in suggestions {
        println!("{}", word);
    }

    Ok(())
}

pub async fn execute_count(args: CountArgs) -> anyhow::Result<()> {
    let trie = build_trie(args.dictionary.as_deref()).await?;
    println!("{}", trie.count());
    Ok(())
}

pub async fn execute_tree(args: TreeArgs) -> anyhow::Result<()> {
    let trie = build_trie(args.dictionary.as_deref()).await?;

    let hierarchy = match args.prefix.as_deref() {
        None | Some("") => trie.to_hierarchy(),
        Some(prefix) => {
            let mut node = trie.root();
            for c in prefix.chars() {
                node = match node.children().get(&c) {
                    Some(child) => child,
                    None => anyhow::bail!("no words start with {:?}", prefix),
                };
            }
            node.to_hierarchy()
        }
    };

    println!("{}", serde_json::to_string_pretty(&hierarchy)?);

    Ok(())
}

/// Populates a fresh trie from the dictionary file, when one was given, and
/// from words piped on stdin, when stdin is not a terminal.
pub async fn build_trie(dictionary: Option<&str>) -> anyhow::Result<Trie> {
    let mut trie = Trie::new();

    if let Some(path) = dictionary {
        let words = FileWordSource::new(path).load().await?;
        let start = Instant::now();
        trie.populate(&words);
        debug!(
            "Populated {} words in {} ms",
            words.len(),
            start.elapsed().as_millis()
        );
    }

    if !std::io::stdin().is_terminal() {
        let mut buf = Vec::with_capacity(256);
        tokio::io::stdin().read_to_end(&mut buf).await?;
        let piped = String::from_utf8_lossy(&buf).to_string();
        trie.populate(piped.lines().filter(|line| !line.trim().is_empty()));
    }

    Ok(trie)
}
