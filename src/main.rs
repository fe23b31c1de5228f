use std::process::ExitCode;

fn main() -> ExitCode {
    tdsc::app::run()
}
