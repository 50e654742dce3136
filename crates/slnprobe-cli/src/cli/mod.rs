//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, help
//! text, and defaults. No probing logic lives here.

use std::path::PathBuf;

use clap::Parser;

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point. The tool does exactly one thing, so there are no
/// subcommands: the solution is the positional argument.
#[derive(Debug, Parser)]
#[command(
    name    = "slnprobe",
    bin_name = "slnprobe",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Probe a solution for project build metadata",
    long_about = "slnprobe discovers the projects referenced by a solution \
                  (or a directory of project files), evaluates each one \
                  through the build engine, and emits a JSON snapshot of \
                  output paths, project references, and markup files.",
    after_help = "EXAMPLES:\n\
        \x20 slnprobe ./MyApp.sln\n\
        \x20 slnprobe ./src --jobs 4\n\
        \x20 slnprobe ./MyApp.sln --sdk-version 8.0 --include-prerelease"
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Solution file (.sln) or project directory to probe.
    #[arg(value_name = "SOLUTION", help = "Solution file (.sln) or project directory")]
    pub solution: PathBuf,

    /// Toolchain version selector (prefix match). Absent means "latest".
    #[arg(
        short = 's',
        long = "sdk-version",
        value_name = "PREFIX",
        help = "Select a toolchain SDK by version prefix (e.g. 8.0)"
    )]
    pub sdk_version: Option<String>,

    /// Permit prerelease toolchain versions.
    #[arg(
        long = "include-prerelease",
        help = "Consider prerelease SDKs during toolchain selection"
    )]
    pub include_prerelease: bool,

    /// Bound for the evaluation worker pool.
    #[arg(
        short = 'j',
        long = "jobs",
        value_name = "N",
        help = "Maximum concurrent project evaluations (default: available parallelism)"
    )]
    pub jobs: Option<usize>,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_minimal_invocation() {
        let cli = Cli::parse_from(["slnprobe", "./MyApp.sln"]);
        assert_eq!(cli.solution, PathBuf::from("./MyApp.sln"));
        assert!(cli.sdk_version.is_none());
        assert!(!cli.include_prerelease);
    }

    #[test]
    fn parse_toolchain_options() {
        let cli = Cli::parse_from([
            "slnprobe",
            "./MyApp.sln",
            "--sdk-version",
            "8.0",
            "--include-prerelease",
            "-j",
            "4",
        ]);
        assert_eq!(cli.sdk_version.as_deref(), Some("8.0"));
        assert!(cli.include_prerelease);
        assert_eq!(cli.jobs, Some(4));
    }

    #[test]
    fn solution_argument_is_required() {
        assert!(Cli::try_parse_from(["slnprobe"]).is_err());
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        // clap should reject --quiet --verbose together
        let result = Cli::try_parse_from(["slnprobe", "--quiet", "--verbose", "./MyApp.sln"]);
        assert!(result.is_err());
    }
}
