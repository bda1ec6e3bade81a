use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::message::MessageKind;

use super::model::ModelFormat;

#[derive(Parser, Debug)]
#[command(version)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    #[clap(long, default_value = "warn")]
    pub log_level: super::logging::Level,

    #[clap(long)]
    pub log_file: Option<PathBuf>,

    #[clap(long)]
    pub log_json: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Read message text and write its structured model.
    Parse(ParseCommand),
    /// Read a structured model and write message text.
    Format(FormatCommand),
    /// Report whether message text is valid.
    Check(CheckCommand),
}

#[derive(Parser, Debug)]
pub struct ParseCommand {
    #[clap(long, default_value = "-")]
    pub input: PathBuf,

    #[clap(long, default_value = "auto")]
    pub kind: KindArg,

    #[clap(long, default_value = "-")]
    pub output: PathBuf,

    #[clap(long, default_value = "json")]
    pub format: ModelFormat,
}

#[derive(Parser, Debug)]
pub struct FormatCommand {
    #[clap(long, default_value = "-")]
    pub input: PathBuf,

    #[clap(long, default_value = "json")]
    pub format: ModelFormat,

    #[clap(long, default_value = "-")]
    pub output: PathBuf,
}

#[derive(Parser, Debug)]
pub struct CheckCommand {
    #[clap(long, default_value = "-")]
    pub input: PathBuf,

    #[clap(long, default_value = "auto")]
    pub kind: KindArg,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum KindArg {
    Auto,
    Request,
    Response,
}

impl KindArg {
    pub fn resolve(&self, text: &str) -> MessageKind {
        match self {
            Self::Auto => crate::parse::detect_kind(text),
            Self::Request => MessageKind::Request,
            Self::Response => MessageKind::Response,
        }
    }
}
