use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "blogsift", bin_name = "blogsift", version)]
#[command(
    about = "Search, filter and page through a blog's posts index",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Posts data to load (file path or http(s) URL). Overrides the config.
    #[arg(short, long, global = true, help_heading = "Options")]
    pub source: Option<String>,

    /// Disable colored output
    #[arg(long, global = true, help_heading = "Options")]
    pub no_color: bool,

    /// Verbose logging on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true, help_heading = "Options")]
    pub verbose: u8,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search posts by term and category
    #[command(alias = "s", display_order = 1)]
    Search {
        /// Search words (joined with spaces)
        term: Vec<String>,

        /// Only show posts in this category
        #[arg(short, long)]
        category: Option<String>,

        /// Page to show (1-based)
        #[arg(short, long)]
        page: Option<usize>,

        /// Restore state from a query string, e.g. "search=ai&page=2"
        #[arg(short, long)]
        query: Option<String>,
    },

    /// List the category buttons with post counts
    #[command(alias = "cats", display_order = 2)]
    Categories {
        /// Maximum number of categories to show
        #[arg(short, long)]
        limit: Option<usize>,

        /// Category to mark as selected
        #[arg(short, long)]
        category: Option<String>,
    },

    /// Print the shareable URL for a search
    #[command(display_order = 3)]
    Link {
        /// Search words (joined with spaces)
        term: Vec<String>,

        #[arg(short, long)]
        category: Option<String>,

        #[arg(short, long)]
        page: Option<usize>,

        #[arg(short, long)]
        query: Option<String>,
    },

    /// Interactive search: type to filter, `:help` for commands
    #[command(alias = "b", display_order = 4)]
    Browse {
        /// Initial query string to restore
        #[arg(short, long)]
        query: Option<String>,
    },

    /// Get or set configuration
    #[command(display_order = 5)]
    Config {
        /// Configuration key (e.g., page_size)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}

/// Joins trailing words into a single term. No words means no term override.
pub fn join_term(words: &[String]) -> Option<String> {
    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("blogsift").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn search_collects_words_and_flags() {
        let cli = parse(&["search", "docker", "compose", "-c", "Docker", "-p", "2"]);
        match cli.command {
            Some(Commands::Search {
                term,
                category,
                page,
                query,
            }) => {
                assert_eq!(join_term(&term).as_deref(), Some("docker compose"));
                assert_eq!(category.as_deref(), Some("Docker"));
                assert_eq!(page, Some(2));
                assert!(query.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn global_flags_work_after_subcommand() {
        let cli = parse(&["s", "ai", "--source", "posts.json", "--no-color", "-vv"]);
        assert_eq!(cli.source.as_deref(), Some("posts.json"));
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn no_subcommand_is_allowed() {
        assert!(parse(&[]).command.is_none());
    }

    #[test]
    fn config_key_and_value() {
        match parse(&["config", "page_size", "6"]).command {
            Some(Commands::Config { key, value }) => {
                assert_eq!(key.as_deref(), Some("page_size"));
                assert_eq!(value.as_deref(), Some("6"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn page_must_be_numeric() {
        assert!(Cli::try_parse_from(["blogsift", "search", "-p", "two"]).is_err());
    }
}
