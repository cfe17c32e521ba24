use std::ffi::OsString;

use log::LevelFilter;

use crate::errors::Error;

/// What the command loop does when its input stream ends without `.exit`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EofPolicy {
    Shutdown,
    Fault,
}

#[derive(Debug, PartialEq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub eof_policy: EofPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: LevelFilter::Warn,
            eof_policy: EofPolicy::Shutdown,
        }
    }
}

/// Parses process arguments. The first item is the program name and is skipped.
pub fn parse_args<I>(args: I) -> Result<Config, Error>
where
    I: IntoIterator<Item = OsString>,
{
    let mut config = Config::default();

    for arg in args.into_iter().skip(1) {
        match arg.to_str() {
            Some("-v") | Some("--verbose") => {
                config.log_level = LevelFilter::Debug;
            }
            Some("-q") | Some("--quiet") => {
                config.log_level = LevelFilter::Error;
            }
            Some("--strict-eof") => {
                config.eof_policy = EofPolicy::Fault;
            }
            _ => return Err(Error::Argument(arg.to_string_lossy().into_owned())),
        }
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::{parse_args, Config, EofPolicy};
    use crate::errors::Error;
    use log::LevelFilter;
    use std::ffi::OsString;

    fn args(values: &[&str]) -> Vec<OsString> {
        values.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_defaults() {
        let config = parse_args(args(&["homemade_db"])).unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.eof_policy, EofPolicy::Shutdown);
    }

    #[test]
    fn test_flags() {
        let config = parse_args(args(&["homemade_db", "--verbose", "--strict-eof"])).unwrap();

        assert_eq!(config.log_level, LevelFilter::Debug);
        assert_eq!(config.eof_policy, EofPolicy::Fault);

        let config = parse_args(args(&["homemade_db", "-v", "-q"])).unwrap();
        assert_eq!(config.log_level, LevelFilter::Error);
    }

    #[test]
    fn test_unknown_argument() {
        let err = parse_args(args(&["homemade_db", "--port"])).unwrap_err();

        assert!(matches!(err, Error::Argument(ref arg) if arg == "--port"));
    }
}
