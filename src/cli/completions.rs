use clap::Parser;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    archon-install completions bash > ~/.bash_completion.d/archon-install\n\n\
                  Generate zsh completions:\n    archon-install completions zsh > ~/.zfunc/_archon-install\n\n\
                  Generate fish completions:\n    archon-install completions fish > ~/.config/fish/completions/archon-install.fish")]
pub struct CompletionsArgs {
    /// Shell type (bash, elvish, fish, powershell, zsh)
    pub shell: String,
}
