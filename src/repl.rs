use std::io::Write;
use std::str::FromStr;

use clap::Args;
use thiserror::Error;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::info;

use lexitrie::{FileWordSource, Trie, WordSource};

#[derive(Args, Debug)]
pub struct ReplArgs {
    /// Line-delimited dictionary file to preload the trie from.
    #[arg(short, long)]
    dictionary: Option<String>,
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ReplError {
    #[error("unknown command {:?}, try 'help'", .0)]
    UnknownCommand(String),

    #[error("'{}' needs a word argument", .0)]
    MissingArgument(&'static str),
}

/// One line of input to the interactive session.
#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Insert(String),
    Suggest(String),
    Delete(String),
    Count,
    Tree,
    Help,
    Quit,
    /// A blank line; ignored.
    Nothing,
}

impl FromStr for ReplCommand {
    type Err = ReplError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (command, rest) = match line.split_once(char::is_whitespace) {
            Some((command, rest)) => (command, rest.trim()),
            None => (line, ""),
        };

        match command.to_lowercase().as_str() {
            "" => Ok(ReplCommand::Nothing),
            "insert" | "add" => {
                if rest.is_empty() {
                    Err(ReplError::MissingArgument("insert"))
                } else {
                    Ok(ReplCommand::Insert(rest.to_string()))
                }
            }
            "suggest" => Ok(ReplCommand::Suggest(rest.to_string())),
            "delete" | "del" => {
                if rest.is_empty() {
                    Err(ReplError::MissingArgument("delete"))
                } else {
                    Ok(ReplCommand::Delete(rest.to_string()))
                }
            }
            "count" => Ok(ReplCommand::Count),
            "tree" => Ok(ReplCommand::Tree),
            "help" => Ok(ReplCommand::Help),
            "quit" | "exit" => Ok(ReplCommand::Quit),
            other => Err(ReplError::UnknownCommand(other.to_string())),
        }
    }
}

const HELP: &str = "\
insert <word>     store a word
suggest [prefix]  list stored words starting with prefix (all words if omitted)
delete <word>     remove a word, pruning branches nothing else spells
count             number of insertions made
tree              dump the trie as JSON
quit              leave";

/// Applies one parsed command to the trie. Returns the text to show the
/// user, or `None` when the session should end.
fn respond(trie: &mut Trie, command: ReplCommand) -> Option<String> {
    match command {
        ReplCommand::Insert(word) => {
            trie.insert(&word);
            Some(format!("inserted ({} total)", trie.count()))
        }
        ReplCommand::Suggest(prefix) => {
            let suggestions = trie.suggest(&prefix);
            if suggestions.is_empty() {
                Some("(no matches)".to_string())
            } else {
                Some(suggestions.join("\n"))
            }
        }
        ReplCommand::Delete(word) => match trie.delete(&word) {
            Ok(()) => Some("deleted".to_string()),
            Err(e) => Some(e.to_string()),
        },
        ReplCommand::Count => Some(trie.count().to_string()),
        ReplCommand::Tree => match serde_json::to_string_pretty(&trie.to_hierarchy()) {
            Ok(json) => Some(json),
            Err(e) => Some(format!("could not render tree: {}", e)),
        },
        ReplCommand::Help => Some(HELP.to_string()),
        ReplCommand::Nothing => Some(String::new()),
        ReplCommand::Quit => None,
    }
}

pub async fn execute_repl(args: ReplArgs) -> anyhow::Result<()> {
    let mut trie = Trie::new();

    if let Some(path) = &args.dictionary {
        let words = FileWordSource::new(path).load().await?;
        trie.populate(&words);
        info!("Preloaded {} words from {}", words.len(), path);
        println!("loaded {} words from {}", words.len(), path);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        match line.parse::<ReplCommand>() {
            Ok(command) => match respond(&mut trie, command) {
                Some(output) if output.is_empty() => {}
                Some(output) => println!("{}", output),
                None => break,
            },
            Err(e) => println!("{}", e),
        }
    }

    println!("bye");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_commands() {
        assert_eq!(
            "insert pizza".parse(),
            Ok(ReplCommand::Insert("pizza".to_string()))
        );
        assert_eq!(
            "  suggest piz  ".parse(),
            Ok(ReplCommand::Suggest("piz".to_string()))
        );
        assert_eq!("suggest".parse(), Ok(ReplCommand::Suggest(String::new())));
        assert_eq!(
            "DEL pizza".parse(),
            Ok(ReplCommand::Delete("pizza".to_string()))
        );
        assert_eq!("count".parse(), Ok(ReplCommand::Count));
        assert_eq!("quit".parse(), Ok(ReplCommand::Quit));
        assert_eq!("".parse(), Ok(ReplCommand::Nothing));
    }

    #[test]
    fn insert_keeps_internal_whitespace() {
        assert_eq!(
            "insert amazon prime".parse(),
            Ok(ReplCommand::Insert("amazon prime".to_string()))
        );
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(
            "frobnicate".parse::<ReplCommand>(),
            Err(ReplError::UnknownCommand("frobnicate".to_string()))
        );
        assert_eq!(
            "insert".parse::<ReplCommand>(),
            Err(ReplError::MissingArgument("insert"))
        );
        assert_eq!(
            "delete   ".parse::<ReplCommand>(),
            Err(ReplError::MissingArgument("delete"))
        );
    }

    #[test]
    fn respond_runs_a_session() {
        let mut trie = Trie::new();

        assert_eq!(
            respond(&mut trie, ReplCommand::Insert("pizza".to_string())),
            Some("inserted (1 total)".to_string())
        );
        assert_eq!(
            respond(&mut trie, ReplCommand::Suggest("piz".to_string())),
            Some("pizza".to_string())
        );
        assert_eq!(
            respond(&mut trie, ReplCommand::Suggest("q".to_string())),
            Some("(no matches)".to_string())
        );
        assert_eq!(
            respond(&mut trie, ReplCommand::Delete("nope".to_string())),
            Some("nope is not a word, nothing deleted".to_string())
        );
        assert_eq!(
            respond(&mut trie, ReplCommand::Count),
            Some("1".to_string())
        );
        assert_eq!(respond(&mut trie, ReplCommand::Quit), None);
    }
}
