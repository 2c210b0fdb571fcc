use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for
/// non-release builds.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "casepack", version = get_version())]
#[command(
    about = "Assemble competitive-programming test cases and pack them into a zip",
    long_about = None
)]
pub struct Cli {
    /// Problem identifier used for exported file names (e.g. 1942G)
    #[arg(short, long)]
    pub problem_id: Option<String>,

    /// Seed the session by parsing a saved judge transcript
    #[arg(short, long, value_name = "FILE")]
    pub transcript: Option<PathBuf>,

    /// Directory exported archives are written into (default: current dir)
    #[arg(long, value_name = "DIR")]
    pub out_dir: Option<PathBuf>,
}

/// Parser for one line of session input, busybox-style: the first word is
/// the command.
#[derive(Parser, Debug)]
#[command(multicall = true)]
pub struct SessionCli {
    #[command(subcommand)]
    pub command: SessionCommand,
}

#[derive(Subcommand, Debug)]
pub enum SessionCommand {
    /// Add one test case (prompts for input and output text)
    #[command(alias = "a")]
    Add,

    /// Parse a pasted judge transcript into test cases
    #[command(alias = "p")]
    Paste,

    /// List the collected test cases
    #[command(alias = "ls")]
    List,

    /// Print a test case in full
    Show {
        /// Case number as shown by `list`
        number: usize,
    },

    /// Re-enter a test case's input and output
    #[command(alias = "e")]
    Edit {
        /// Case number as shown by `list`
        number: usize,
    },

    /// Delete a test case
    #[command(alias = "rm")]
    Delete {
        /// Case number as shown by `list`
        number: usize,
    },

    /// Pack all test cases into a zip archive
    Export {
        /// Problem id for file names (falls back to --problem-id)
        problem_id: Option<String>,
    },

    /// Leave the session
    #[command(aliases = ["q", "exit"])]
    Quit,
}
