use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "bsdbook", bin_name = "bsdbook", version)]
#[command(about = "Plain-directory notebooks for the command line", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Create the books directory
    Install,

    /// List all books
    Books,

    /// Create a book or a note
    Create {
        #[command(subcommand)]
        target: Target,
    },

    /// Delete a book (with all its notes) or a single note
    Delete {
        #[command(subcommand)]
        target: Target,
    },

    /// Show the notes of a book, or `todos` / `links` across every book
    Show { target: String },

    /// Open a note in $EDITOR
    Edit { book: String, note: String },

    /// Serve the books read-only over HTTP
    Serve {
        /// Port to listen on (overrides config)
        #[arg(short, long)]
        port: Option<u16>,

        /// Address to bind (overrides config)
        #[arg(long)]
        host: Option<String>,
    },

    /// Get or set configuration
    Config {
        /// Config key (note-ext, host, port, buffer-size)
        key: Option<String>,
        /// Value to set
        value: Option<String>,
    },
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Target {
    /// A book
    Book { name: String },
    /// A note inside a book
    Note { book: String, name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bsdbook").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn no_args_has_no_command() {
        let cli = parse(&[]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
    }

    #[test]
    fn create_and_delete_targets() {
        assert_eq!(
            parse(&["create", "book", "work"]).command,
            Some(Commands::Create {
                target: Target::Book {
                    name: "work".into()
                }
            })
        );
        assert_eq!(
            parse(&["delete", "note", "work", "todo"]).command,
            Some(Commands::Delete {
                target: Target::Note {
                    book: "work".into(),
                    name: "todo".into()
                }
            })
        );
    }

    #[test]
    fn serve_overrides_and_global_verbose() {
        let cli = parse(&["serve", "--port", "9000", "-v"]);
        assert!(cli.verbose);
        assert_eq!(
            cli.command,
            Some(Commands::Serve {
                port: Some(9000),
                host: None
            })
        );
    }

    #[test]
    fn rejects_incomplete_commands() {
        for args in [
            &["create", "note", "work"][..],
            &["edit", "work"],
            &["show"],
            &["serve", "--port", "http"],
        ] {
            let argv = std::iter::once("bsdbook").chain(args.iter().copied());
            assert!(Cli::try_parse_from(argv).is_err(), "{:?}", args);
        }
    }
}
