pub mod info;
pub mod square;

use clap::{ArgAction, Parser, Subcommand};
use square_common::policy::OverflowPolicy;

#[derive(Parser)]
#[command(name = "square")]
#[command(about = "Square integers, with an explicit overflow policy.")]
#[command(version)]
pub struct CommandLine {
    #[command(subcommand)]
    pub command: Commands,

    /// Reduce output (-q drops decoration, -qq prints bare results)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub quiet: u8,

    /// Do not print the banner
    #[arg(long, global = true)]
    pub no_banner: bool,

    /// What to do when a square does not fit in 64 bits: checked, wrapping or saturating
    #[arg(short, long, global = true, default_value_t = OverflowPolicy::Checked)]
    pub overflow: OverflowPolicy,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show version and overflow limits
    #[command(alias = "i")]
    Info,
    /// Square one or more integers
    #[command(alias = "s")]
    Square {
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> CommandLine {
        CommandLine::try_parse_from(args).unwrap()
    }

    #[test]
    fn command_definition_is_valid() {
        CommandLine::command().debug_assert();
    }

    #[test]
    fn square_accepts_negative_values() {
        let cli = parse(&["square", "square", "4", "-4", "0"]);
        match cli.command {
            Commands::Square { values } => assert_eq!(values, vec![4, -4, 0]),
            _ => panic!("expected square subcommand"),
        }
    }

    #[test]
    fn square_requires_a_value() {
        assert!(CommandLine::try_parse_from(["square", "square"]).is_err());
    }

    #[test]
    fn square_rejects_non_integers() {
        assert!(CommandLine::try_parse_from(["square", "s", "four"]).is_err());
    }

    #[test]
    fn overflow_defaults_to_checked() {
        let cli = parse(&["square", "s", "4"]);
        assert_eq!(cli.overflow, OverflowPolicy::Checked);
    }

    #[test]
    fn global_flags_after_subcommand() {
        let cli = parse(&["square", "s", "4", "-qq", "--overflow", "wrap", "--no-banner"]);
        assert_eq!(cli.quiet, 2);
        assert_eq!(cli.overflow, OverflowPolicy::Wrapping);
        assert!(cli.no_banner);
    }

    #[test]
    fn unknown_policy_is_rejected() {
        assert!(CommandLine::try_parse_from(["square", "-o", "panic", "s", "4"]).is_err());
    }

    #[test]
    fn info_alias() {
        assert!(matches!(parse(&["square", "i"]).command, Commands::Info));
    }
}
