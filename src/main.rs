mod commands;
mod controllers;
mod errors;

use commands::args;
use controllers::cli_handler::{self, LoopExit};
use errors::Error;
use std::env;
use std::process::ExitCode;

/// Process status for a finished command loop. Errors are printed here.
fn exit_status(result: Result<LoopExit, Error>) -> u8 {
    match result {
        Ok(LoopExit::ExitCommand) | Ok(LoopExit::EndOfInput) => 0,
        Err(err) => {
            eprintln!("{}", err);
            1
        }
    }
}

fn main() -> ExitCode {
    let status = match args::parse_args(env::args_os()) {
        Ok(config) => exit_status(cli_handler::handle_cli(config)),
        Err(err) => exit_status(Err(err)),
    };

    ExitCode::from(status)
}

#[cfg(test)]
mod tests {
    use super::exit_status;
    use crate::commands::args::EofPolicy;
    use crate::controllers::cli_handler::{Dispatcher, LineReader, LoopExit};
    use crate::errors::Error;
    use std::io::{self, Cursor};

    fn session_status(input: &[u8], eof_policy: EofPolicy) -> u8 {
        let mut output = Vec::new();
        let result = Dispatcher::new(LineReader::new(Cursor::new(input)), &mut output, eof_policy).run();

        exit_status(result)
    }

    #[test]
    fn test_exit_status_success() {
        assert_eq!(exit_status(Ok(LoopExit::ExitCommand)), 0);
        assert_eq!(exit_status(Ok(LoopExit::EndOfInput)), 0);

        assert_eq!(session_status(b"insert\n.exit\n", EofPolicy::Fault), 0);
        assert_eq!(session_status(b"select\n", EofPolicy::Shutdown), 0);
    }

    #[test]
    fn test_exit_status_failure() {
        assert_eq!(exit_status(Err(Error::EndOfInput)), 1);
        assert_eq!(
            exit_status(Err(io::Error::new(io::ErrorKind::Other, "stream closed").into())),
            1
        );
        assert_eq!(exit_status(Err(Error::Argument("--port".to_string()))), 1);

        assert_eq!(session_status(b"select\n", EofPolicy::Fault), 1);
    }
}
