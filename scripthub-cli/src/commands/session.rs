//! Session mode: many catalog commands against one storage instance
//!
//! Each stdin line is split shell-style and parsed like a top-level catalog
//! command, so creates and view/download counts persist across lines:
//!
//! ```text
//! $ printf 'scripts show 7\nscripts show 7 --no-track\n' | scripthub session
//! ```

use anyhow::{bail, Result};
use clap::Parser;
use scripthub_core::Storage;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{debug, warn};

use super::{run_catalog, CatalogCommand};
use crate::output::Output;

#[derive(Parser, Debug)]
pub struct SessionArgs {
    /// Stop at the first failing line
    #[arg(long)]
    fail_fast: bool,
}

#[derive(Parser, Debug)]
#[command(name = "scripthub", no_binary_name = true)]
struct SessionLine {
    #[command(subcommand)]
    command: CatalogCommand,
}

/// What a raw input line asks for
#[derive(Debug)]
enum Parsed {
    Skip,
    Command(CatalogCommand),
    Invalid(String),
}

fn parse_line(line: &str) -> Parsed {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Parsed::Skip;
    }

    let Some(tokens) = shlex::split(trimmed) else {
        return Parsed::Invalid("unbalanced quotes".to_string());
    };

    match SessionLine::try_parse_from(tokens) {
        Ok(parsed) => Parsed::Command(parsed.command),
        Err(err) => Parsed::Invalid(err.to_string().trim_end().to_string()),
    }
}

pub async fn run_session(args: SessionArgs, storage: &dyn Storage, output: &Output) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut line_no = 0usize;
    let mut executed = 0usize;
    let mut failed = 0usize;

    while let Some(line) = lines.next_line().await? {
        line_no += 1;

        let result = match parse_line(&line) {
            Parsed::Skip => continue,
            Parsed::Invalid(reason) => Err(anyhow::anyhow!(reason)),
            Parsed::Command(command) => run_catalog(command, storage, output).await,
        };
        executed += 1;

        if let Err(err) = result {
            failed += 1;
            warn!(line = line_no, "Session command failed");
            eprintln!("line {}: {:#}", line_no, err);
            if args.fail_fast {
                bail!("Session stopped at line {}", line_no);
            }
        }
    }

    debug!(executed, failed, "Session finished");
    if failed > 0 {
        bail!("{} of {} session commands failed", failed, executed);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::scripts::ScriptCommands;

    #[test]
    fn blank_and_comment_lines_skipped() {
        assert!(matches!(parse_line(""), Parsed::Skip));
        assert!(matches!(parse_line("   "), Parsed::Skip));
        assert!(matches!(parse_line("# seed more data"), Parsed::Skip));
    }

    #[test]
    fn quoted_arguments_survive_splitting() {
        let parsed = parse_line(r#"scripts list --search "script hub""#);
        match parsed {
            Parsed::Command(CatalogCommand::Scripts(args)) => {
                assert!(matches!(args.command, ScriptCommands::List(_)));
            }
            other => panic!("unexpected parse: {:?}", other),
        }
    }

    #[test]
    fn unknown_command_is_invalid() {
        assert!(matches!(parse_line("scripts explode 1"), Parsed::Invalid(_)));
        assert!(matches!(parse_line("session"), Parsed::Invalid(_)));
    }

    #[test]
    fn unbalanced_quotes_are_invalid() {
        match parse_line(r#"scripts list --search "oops"#) {
            Parsed::Invalid(reason) => assert_eq!(reason, "unbalanced quotes"),
            other => panic!("unexpected parse: {:?}", other),
        }
    }
}
