//! # Stderr Logging

use stderrlog::{LogLevelNum, Timestamp};

/// Logging arg group shared by all subcommands.
///
/// Each command passes its own default level to [`LogArgs::setup_logging`];
/// `-v` flags raise the level from there, `--quiet` silences everything.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
    /// Silence all log output.
    #[arg(short, long)]
    quiet: bool,

    /// Raise the log level (-v, -vv, ...).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Timestamp log lines.
    #[arg(long)]
    ts: bool,
}

impl LogArgs {
    /// Initialize stderr logging.
    pub fn setup_logging(
        &self,
        default: u8,
    ) -> Result<(), log::SetLoggerError> {
        stderrlog::new()
            .quiet(self.quiet)
            .verbosity(level_for(default.saturating_add(self.verbose)))
            .timestamp(if self.ts {
                Timestamp::Second
            } else {
                Timestamp::Off
            })
            .init()
    }
}

fn level_for(level: u8) -> LogLevelNum {
    match level {
        0 => LogLevelNum::Off,
        1 => LogLevelNum::Error,
        2 => LogLevelNum::Warn,
        3 => LogLevelNum::Info,
        4 => LogLevelNum::Debug,
        _ => LogLevelNum::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_mapping() {
        assert!(matches!(level_for(0), LogLevelNum::Off));
        assert!(matches!(level_for(2), LogLevelNum::Warn));
        assert!(matches!(level_for(3), LogLevelNum::Info));
        assert!(matches!(level_for(200), LogLevelNum::Trace));
    }
}
