use std::io::Write;

use crate::message::Message;

use super::{
    arg::FormatCommand,
    io::{ProgramInput, ProgramOutput},
    model::read_model,
};

pub fn format(args: &FormatCommand) -> anyhow::Result<()> {
    let span = tracing::info_span!("format", input = ?args.input);
    let _guard = span.enter();

    let input = ProgramInput::open(&args.input)?;
    let model = read_model(input, args.format)?;
    let message = Message::try_from(model)?;

    let mut output = ProgramOutput::open(&args.output)?;
    message.serialize(&mut output)?;
    output.flush()?;

    tracing::info!(kind = %message.kind(), "formatted message");

    Ok(())
}
