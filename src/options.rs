//! Command line options.

use std::path::PathBuf;
use std::time::Duration;

use clap::{value_parser, Arg, ArgAction, Command};

fn make_options_parser() -> Command {
    Command::new("maze-solver")
        .about("Walks a maze with depth-first backtracking, drawing every step")
        .arg(
            Arg::new("maze")
                .value_name("MAZE")
                .help("Maze file made of o/w/r/c rows, or - for stdin")
                .required(true)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("delay")
                .short('d')
                .long("delay")
                .value_name("MS")
                .help("Pause between frames in milliseconds")
                .default_value("50")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("quiet")
                .short('q')
                .long("quiet")
                .help("Do not animate, only print the final maze")
                .action(ArgAction::SetTrue),
        )
        .arg(
            Arg::new("max-steps")
                .long("max-steps")
                .value_name("N")
                .help("Give up after N agent placements")
                .value_parser(value_parser!(usize)),
        )
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Options {
    /// `None` reads standard input.
    pub maze: Option<PathBuf>,
    pub delay: Duration,
    pub quiet: bool,
    pub max_steps: Option<usize>,
}

impl Options {
    pub fn parse() -> Self {
        Self::from_matches(&make_options_parser().get_matches())
    }

    #[cfg(test)]
    fn try_parse_from<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        Ok(Self::from_matches(
            &make_options_parser().try_get_matches_from(args)?,
        ))
    }

    fn from_matches(matches: &clap::ArgMatches) -> Self {
        let maze = matches
            .get_one::<PathBuf>("maze")
            .filter(|path| path.as_os_str() != "-")
            .cloned();
        let delay = matches.get_one::<u64>("delay").copied().unwrap_or(50);
        Options {
            maze,
            delay: Duration::from_millis(delay),
            quiet: matches.get_flag("quiet"),
            max_steps: matches.get_one::<usize>("max-steps").copied(),
        }
    }
}
