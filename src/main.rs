// main.rs - word list maintenance tool
use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use word_link::config::{WordListConfig, BOARD_SIZE, MIN_WORD_LEN, WORD_LIST_ENV};
use word_link::dictionary::word_list::{filter_words, filtered_path, read_word_list, write_word_list};
use word_link::logging::setup_logging;
use word_link::Dictionary;

#[derive(Parser, Debug)]
#[command(name = "word_link", version, about = "Word list tools for the Word Link game")]
struct Config {
    /// Write logs to rotating files in this directory instead of stderr
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Keep only playable words and write them next to the input
    Filter {
        input: PathBuf,

        /// Output file (defaults to <name>_filtered.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,

        #[arg(long, default_value_t = MIN_WORD_LEN)]
        min_len: usize,

        #[arg(long, default_value_t = BOARD_SIZE)]
        max_len: usize,
    },
    /// Build the dictionary and print its size
    Stats {
        #[arg(env = WORD_LIST_ENV)]
        word_list: PathBuf,
    },
    /// Look words up in the dictionary
    Check {
        #[arg(short, long, env = WORD_LIST_ENV)]
        word_list: PathBuf,

        #[arg(required = true)]
        words: Vec<String>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let config = Config::parse();
    let _logger = setup_logging("info", config.log_dir.as_deref())?;

    match config.command {
        Command::Filter {
            input,
            output,
            min_len,
            max_len,
        } => {
            let settings = WordListConfig { min_len, max_len };
            let words = read_word_list(&input)?;
            let kept = filter_words(words.iter().map(String::as_str), &settings);
            let output = output.unwrap_or_else(|| filtered_path(&input));

            write_word_list(&output, &kept)?;
            log::info!(
                "Kept {} of {} words, written to {}",
                kept.len(),
                words.len(),
                output.display()
            );
        }
        Command::Stats { word_list } => {
            let dictionary = Dictionary::from_words(read_word_list(&word_list)?);
            let trie = dictionary.trie();
            println!("words: {}", trie.word_count());
            println!("nodes: {}", trie.node_count());
        }
        Command::Check { word_list, words } => {
            let dictionary = Dictionary::from_words(read_word_list(&word_list)?);
            let result = dictionary.validate_words(&words);

            for word in &result.valid {
                println!("{word}: valid");
            }
            for word in &result.invalid {
                println!("{word}: not in dictionary");
            }
            if !result.all_valid {
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_length_defaults_follow_word_list_config() {
        let config = Config::try_parse_from(["word_link", "filter", "words.txt"]).unwrap();
        let Command::Filter { min_len, max_len, .. } = config.command else {
            panic!("expected the filter subcommand");
        };
        let defaults = WordListConfig::default();

        assert_eq!(min_len, defaults.min_len);
        assert_eq!(max_len, defaults.max_len);
    }

    #[test]
    fn test_filter_length_overrides() {
        let config = Config::try_parse_from([
            "word_link", "filter", "words.txt", "--min-len", "3", "--max-len", "8",
        ])
        .unwrap();

        assert!(matches!(config.command, Command::Filter { min_len: 3, max_len: 8, .. }));
    }
}
