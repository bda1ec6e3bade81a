use std::process::ExitCode;

fn main() -> ExitCode {
    httptext::app::run()
}
