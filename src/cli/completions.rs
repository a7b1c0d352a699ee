use clap::Parser;
use clap_complete::Shell;

/// Arguments for completions command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Generate bash completions:\n    skillpack completions bash > ~/.bash_completion.d/skillpack\n\n\
                  Generate zsh completions:\n    skillpack completions zsh > ~/.zfunc/_skillpack\n\n\
                  Generate fish completions:\n    skillpack completions fish > ~/.config/fish/completions/skillpack.fish")]
pub struct CompletionsArgs {
    /// Shell type
    #[arg(value_enum, ignore_case = true)]
    pub shell: Shell,
}
