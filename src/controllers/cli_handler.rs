use crate::{
    commands::{
        args::{Config, EofPolicy},
        execute::{execute_statement, ExecutionResult},
        meta::{self, MetaCommandOutcome},
        prepare,
    },
    errors::Error,
};
use log::{debug, info, Metadata, Record};
use std::io::{stderr, stdin, stdout, BufRead, Write};

const PROMPT: &str = "homemadeDB > ";

struct CliLogger;

impl log::Log for CliLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args())
        }
    }

    fn flush(&self) {
        let _ = stderr().flush();
    }
}

static LOGGER: CliLogger = CliLogger;

/// Supplies one line per call. `Ok(None)` means the stream has ended.
pub trait InputSource {
    fn read_line(&mut self) -> Result<Option<String>, Error>;
}

/// Line source over any buffered reader. Strips the `\n` or `\r\n` terminator
/// and nothing else. Invalid UTF-8 is decoded with replacement characters.
pub struct LineReader<R> {
    reader: R,
    buffer: Vec<u8>,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            reader,
            buffer: Vec::new(),
        }
    }
}

impl<R: BufRead> InputSource for LineReader<R> {
    fn read_line(&mut self) -> Result<Option<String>, Error> {
        self.buffer.clear();

        if self.reader.read_until(b'\n', &mut self.buffer)? == 0 {
            return Ok(None);
        }

        let line = self.buffer.strip_suffix(b"\n").unwrap_or(self.buffer.as_slice());
        let line = line.strip_suffix(b"\r").unwrap_or(line);

        Ok(Some(String::from_utf8_lossy(line).into_owned()))
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum LineOutcome {
    Continue,
    Exit,
}

/// Why [`Dispatcher::run`] returned.
#[derive(Debug, PartialEq, Eq)]
pub enum LoopExit {
    ExitCommand,
    EndOfInput,
}

pub struct Dispatcher<I, W> {
    input: I,
    output: W,
    eof_policy: EofPolicy,
}

impl<I: InputSource, W: Write> Dispatcher<I, W> {
    pub fn new(input: I, output: W, eof_policy: EofPolicy) -> Self {
        Self {
            input,
            output,
            eof_policy,
        }
    }

    pub fn run(&mut self) -> Result<LoopExit, Error> {
        loop {
            write!(self.output, "{}", PROMPT)?;
            self.output.flush()?;

            let line = match self.input.read_line()? {
                Some(line) => line,
                None => return self.end_of_input(),
            };

            if self.handle_line(&line)? == LineOutcome::Exit {
                return Ok(LoopExit::ExitCommand);
            }
        }
    }

    pub fn handle_line(&mut self, line: &str) -> Result<LineOutcome, Error> {
        if line.is_empty() {
            return Ok(LineOutcome::Continue);
        }

        if line.starts_with('.') {
            match meta::run_meta_command(line) {
                MetaCommandOutcome::Success => {}
                MetaCommandOutcome::UnrecognizedCommand => {
                    writeln!(self.output, "Unrecognized command: '{}'", line)?;
                }
                MetaCommandOutcome::Exit => {
                    writeln!(self.output, "Exiting - Good bye.")?;
                    return Ok(LineOutcome::Exit);
                }
            }
            return Ok(LineOutcome::Continue);
        }

        match run_request(line) {
            Ok(result) => self.report(result)?,
            Err(Error::Prepare(err)) => {
                writeln!(self.output, "{}", err)?;
            }
            Err(err) => return Err(err),
        }

        Ok(LineOutcome::Continue)
    }

    fn report(&mut self, result: ExecutionResult) -> Result<(), Error> {
        match result {
            ExecutionResult::Success => {
                writeln!(self.output, "Executed.")?;
            }
            ExecutionResult::NotPersisted(_) => {
                if let Some(note) = result.acknowledgement() {
                    writeln!(self.output, "{}", note)?;
                }
                writeln!(self.output, "Executed.")?;
            }
            ExecutionResult::Failure(reason) => {
                writeln!(self.output, "Execution failed: {}", reason)?;
            }
        }

        Ok(())
    }

    fn end_of_input(&mut self) -> Result<LoopExit, Error> {
        // terminate the dangling prompt
        writeln!(self.output)?;

        match self.eof_policy {
            EofPolicy::Shutdown => {
                info!("End of input, shutting down.");
                Ok(LoopExit::EndOfInput)
            }
            EofPolicy::Fault => Err(Error::EndOfInput),
        }
    }
}

fn run_request(value: &str) -> Result<ExecutionResult, Error> {
    let statement = prepare::prepare_statement(value)?;

    debug!("prepared {} statement", statement.kind());

    Ok(execute_statement(statement))
}

pub fn handle_cli(config: Config) -> Result<LoopExit, Error> {
    log::set_logger(&LOGGER)
        .map(|()| log::set_max_level(config.log_level))
        .map_err(|_| Error::Logger("Failed to set logger."))?;

    let mut dispatcher = Dispatcher::new(
        LineReader::new(stdin().lock()),
        stdout().lock(),
        config.eof_policy,
    );

    dispatcher.run()
}
