use std::io::Write;

use super::{
    arg::ParseCommand,
    io::{ProgramInput, ProgramOutput},
    model::{MessageModel, write_model},
};

pub fn parse(args: &ParseCommand) -> anyhow::Result<()> {
    let span = tracing::info_span!("parse", input = ?args.input);
    let _guard = span.enter();

    let text = ProgramInput::open(&args.input)?.read_text()?;
    let kind = args.kind.resolve(&text);

    tracing::debug!(%kind, len = text.len(), "read message text");

    let message = crate::parse::parse(&text, kind)?;
    let model = MessageModel::from(&message);

    let mut output = ProgramOutput::open(&args.output)?;
    write_model(&model, args.format, &mut output)?;
    output.flush()?;

    tracing::info!(%kind, headers = message.headers().len(), "parsed message");

    Ok(())
}
