use log::debug;

/// Directives understood by the front-end. Add a variant and its literal to
/// support a new command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetaCommand {
    Exit,
}

impl MetaCommand {
    pub const ALL: [MetaCommand; 1] = [MetaCommand::Exit];

    pub fn literal(&self) -> &'static str {
        match self {
            Self::Exit => ".exit",
        }
    }

    pub fn parse(input: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|cmd| cmd.literal() == input)
    }
}

#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommandOutcome {
    Success,
    UnrecognizedCommand,
    Exit,
}

pub fn run_meta_command(input: &str) -> MetaCommandOutcome {
    let Some(command) = MetaCommand::parse(input) else {
        return MetaCommandOutcome::UnrecognizedCommand;
    };

    debug!("meta command {:?}", command);

    match command {
        MetaCommand::Exit => MetaCommandOutcome::Exit,
    }
}
