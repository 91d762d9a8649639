//! Shell completions command

use clap::CommandFactory;

use crate::cli::CompletionsArgs;
use crate::error::{InstallError, Result};

fn parse_shell(name: &str) -> Result<clap_complete::Shell> {
    match name.to_lowercase().as_str() {
        "bash" => Ok(clap_complete::Shell::Bash),
        "elvish" => Ok(clap_complete::Shell::Elvish),
        "fish" => Ok(clap_complete::Shell::Fish),
        "powershell" | "pwsh" => Ok(clap_complete::Shell::PowerShell),
        "zsh" => Ok(clap_complete::Shell::Zsh),
        _ => Err(InstallError::UnknownShell {
            shell: name.to_string(),
        }),
    }
}

/// Generate shell completions
pub fn run(args: &CompletionsArgs) -> Result<()> {
    let shell = parse_shell(&args.shell)?;

    let mut cmd = <crate::cli::Cli as CommandFactory>::command();
    clap_complete::generate(
        shell,
        &mut cmd,
        "archon-install",
        &mut std::io::stdout().lock(),
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_shells() {
        for name in ["bash", "elvish", "fish", "powershell", "pwsh", "zsh"] {
            assert!(parse_shell(name).is_ok(), "{name} should be supported");
        }
    }

    #[test]
    fn test_parse_shell_mixed_case() {
        assert_eq!(parse_shell("Zsh").unwrap(), clap_complete::Shell::Zsh);
        assert_eq!(parse_shell("BASH").unwrap(), clap_complete::Shell::Bash);
    }

    #[test]
    fn test_parse_unknown_shell() {
        let err = parse_shell("tcsh").unwrap_err();
        assert!(matches!(err, InstallError::UnknownShell { .. }));
    }

    #[test]
    fn test_completions_bash() {
        let args = CompletionsArgs {
            shell: "bash".to_string(),
        };
        assert!(run(&args).is_ok());
    }
}
