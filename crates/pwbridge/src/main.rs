mod exit;
mod logging;

use clap::Parser;

use pwbridge::{Adapter, PasswordTool};

use crate::logging::{init_logging, LogFormat, LogLevel};

/// Default credential tool binary, found via `$PATH`.
const DEFAULT_TOOL: &str = "pwsafe";

#[derive(Parser, Debug)]
#[command(
    name = "pwbridge",
    version,
    about = "Native-messaging bridge for a command-line password safe"
)]
struct Cli {
    /// Credential tool binary to invoke.
    #[arg(long, value_name = "PATH", default_value = DEFAULT_TOOL)]
    tool: String,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn")]
    log_level: LogLevel,

    /// Extra arguments forwarded to every tool invocation.
    ///
    /// Browsers launch native-messaging hosts with their own fixed arguments
    /// (a manifest path and an extension id); those are detected and not
    /// forwarded.
    #[arg(value_name = "ARGS", trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

/// Separate operator-supplied tool arguments from browser-supplied launch
/// arguments.
///
/// Firefox invokes native-messaging hosts as
/// `<bridge> <manifest-path> <extension-id>`; the manifest path ends in
/// `.json` and neither argument is meant for the tool.
fn resolve_tool_args(args: Vec<String>) -> Vec<String> {
    match args.first() {
        Some(first) if first.ends_with(".json") => Vec::new(),
        _ => args,
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.log_level);

    let tool = PasswordTool::new(cli.tool, resolve_tool_args(cli.args));

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut adapter = Adapter::new(stdin.lock(), stdout.lock(), tool);

    match adapter.run() {
        Ok(()) => std::process::exit(exit::SUCCESS),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(exit::error_code(&err));
        }
    }
}
