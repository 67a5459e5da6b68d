use clap::Parser;

/// The workload takes no options; clap still supplies `--help` and
/// `--version`.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Cli {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_accepted() {
        assert!(Cli::try_parse_from(["petri-bench"]).is_ok());
    }

    #[test]
    fn test_flags_rejected() {
        assert!(Cli::try_parse_from(["petri-bench", "--variant", "nested"]).is_err());
        assert!(Cli::try_parse_from(["petri-bench", "--format", "json"]).is_err());
    }

    #[test]
    fn test_positional_arguments_rejected() {
        assert!(Cli::try_parse_from(["petri-bench", "extra"]).is_err());
    }
}
