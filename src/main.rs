use std::path::Path;

use clap::{Parser, Subcommand};

use promptf::banner;
use promptf::classify;
use promptf::config;
use promptf::init;
use promptf::prompt;
use promptf::timer::{self, TimerState};

#[derive(Parser)]
#[command(
    name = "promptf",
    about = "Prompt fragments — command timing, exit status, and context for your shell"
)]
struct Cli {
    /// Show config resolution and classification details
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the shell integration snippet
    Init {
        #[arg(value_enum)]
        shell: init::Shell,
    },
    /// Classify a submitted command and advance the timer state
    Preexec {
        /// Timer state from the shell variable (JSON; empty means idle)
        #[arg(long, default_value = "")]
        state: String,
        /// The command line about to execute
        #[arg(trailing_var_arg = true)]
        command_line: Vec<String>,
    },
    /// Render the decorated prompt fragment line
    Prompt {
        /// Timer state from the shell variable (JSON; empty means idle)
        #[arg(long, default_value = "")]
        state: String,
        /// Exit status of the previous foreground command
        #[arg(long, default_value_t = 0)]
        status: i32,
    },
    /// Run the configured system-info banner command once
    Banner,
    /// Validate a config TOML file
    Check {
        /// Path to the config file
        config_path: String,
    },
}

fn cmd_preexec(state: &str, command_line: &[String], verbose: bool) -> i32 {
    let cfg = config::load_or_default(verbose);
    let line = command_line.join(" ");

    let class = classify::classify(&line, &cfg);
    if verbose {
        eprintln!("[promptf] classified {line:?} as {class:?}");
    }

    let next = TimerState::from_shell(state).on_command(class, timer::now_ms());
    println!("{}", next.to_shell());
    0
}

fn cmd_prompt(state: &str, status: i32, verbose: bool) -> i32 {
    let cfg = config::load_or_default(verbose);

    let Ok(cwd) = std::env::current_dir() else {
        // No working directory (deleted under us): render nothing.
        println!();
        return 0;
    };

    let (context, _consumed) = prompt::build(
        &cfg,
        status,
        TimerState::from_shell(state),
        timer::now_ms(),
        &cwd,
    );
    println!("{}", context.render());
    0
}

fn cmd_banner(verbose: bool) -> i32 {
    let cfg = config::load_or_default(verbose);
    banner::print(&cfg, verbose);
    0
}

fn cmd_check(config_path: &Path) -> i32 {
    match config::try_load(config_path) {
        Ok(Some(cfg)) => {
            eprintln!(
                "[promptf] {} is valid (threshold: {}s, {} interactive, {} wrappers)",
                config_path.display(),
                cfg.threshold_seconds,
                cfg.interactive_commands.len(),
                cfg.wrapper_commands.len()
            );
            0
        }
        Ok(None) => {
            eprintln!("[promptf] file not found: {}", config_path.display());
            1
        }
        Err(e) => {
            eprintln!("[promptf] error: {e:#}");
            1
        }
    }
}

fn cmd_init(shell: init::Shell) -> i32 {
    match init::snippet(shell) {
        Ok(text) => {
            println!("{text}");
            0
        }
        Err(e) => {
            eprintln!("[promptf] error: {e:#}");
            1
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let exit_code = match &cli.command {
        Commands::Init { shell } => cmd_init(*shell),
        Commands::Preexec {
            state,
            command_line,
        } => cmd_preexec(state, command_line, cli.verbose),
        Commands::Prompt { state, status } => cmd_prompt(state, *status, cli.verbose),
        Commands::Banner => cmd_banner(cli.verbose),
        Commands::Check { config_path } => cmd_check(Path::new(config_path)),
    };
    std::process::exit(exit_code);
}
