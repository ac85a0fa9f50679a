use clap::{Parser, ValueEnum};

/// Store trace record kinds that can be decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "kebab-case")]
pub enum RecordKind {
    Auth,
    Bank,
    Delegation,
    IbcChannel,
    IbcClientState,
    IbcConnection,
    IbcDenomTrace,
}

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to .env file (e.g., .env.cosmoshub)
    #[arg(short, long, default_value = ".env")]
    pub env_file: String,

    /// Record kind of the batch being decoded
    #[arg(short, long, value_enum)]
    pub kind: RecordKind,

    /// JSON batch file, or `-` to read from stdin
    #[arg(short, long, default_value = "-")]
    pub input: String,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
