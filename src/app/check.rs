use std::process::ExitCode;

use super::{arg::CheckCommand, io::ProgramInput};

pub fn check(args: &CheckCommand) -> anyhow::Result<ExitCode> {
    let span = tracing::info_span!("check", input = ?args.input);
    let _guard = span.enter();

    let text = ProgramInput::open(&args.input)?.read_text()?;
    let kind = args.kind.resolve(&text);

    match crate::parse::parse(&text, kind) {
        Ok(message) => {
            println!("{}: ok", message.kind());
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            tracing::warn!(%kind, %error, "invalid message");
            println!("{}: {}", kind, error);
            Ok(ExitCode::FAILURE)
        }
    }
}
