//! Umbra CLI - command line driver for the Umbra front end.
//! Umbra CLI - Umbra 前端的命令行驱动。

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use umbra_diagnostic::RenderConfig;

pub use error::CliError;

/// Main CLI structure.
/// 主 CLI 结构体。
#[derive(Parser)]
#[command(name = "umbra")]
#[command(author, version, about = "Umbra - lexer, parser and syntax tree printer", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose output and debug logging. / 启用详细输出与调试日志。
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output. / 禁用彩色输出。
    #[arg(long, global = true)]
    no_color: bool,
}

/// Available CLI commands.
/// 可用的 CLI 命令。
#[derive(Subcommand)]
enum Commands {
    /// Print the token stream of a file. / 打印文件的 token 流。
    Tokens {
        /// The file to scan. / 要扫描的文件。
        file: String,
    },

    /// Parse a file and print its syntax tree. / 解析文件并打印语法树。
    Parse {
        /// The file to parse. / 要解析的文件。
        file: String,
        /// Spaces per indentation level. / 每级缩进的空格数。
        #[arg(long, default_value_t = 2)]
        indent: usize,
        /// Indent with tabs instead of spaces. / 使用制表符代替空格缩进。
        #[arg(long)]
        tabs: bool,
    },

    /// Check a file for lexical and syntax errors. / 检查文件的词法与语法错误。
    Check {
        /// The file to check. / 要检查的文件。
        file: String,
    },

    /// Start an interactive REPL. / 启动交互式 REPL。
    Repl,
}

/// Settings shared by every command.
/// 所有命令共享的设置。
pub struct Context {
    pub verbose: bool,
    pub render: RenderConfig,
}

impl Context {
    pub fn color(&self) -> bool {
        self.render.color
    }
}

/// Install the tracing subscriber. `RUST_LOG` takes precedence over the
/// `--verbose` default.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default)),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let ctx = Context {
        verbose: cli.verbose,
        render: RenderConfig::new().color(!cli.no_color),
    };

    let result = match cli.command {
        Commands::Tokens { file } => commands::tokens::run(&file, &ctx),
        Commands::Parse { file, indent, tabs } => commands::parse::run(&file, indent, tabs, &ctx),
        Commands::Check { file } => commands::check::run(&file, &ctx),
        Commands::Repl => commands::repl::run(&ctx),
    };

    if let Err(e) = result {
        output::error(&e.to_string(), ctx.color());
        std::process::exit(1);
    }
}
