use crate::prelude::*;
use clap::Parser;

mod convert;
mod error;
mod mcp;
mod prelude;

#[derive(Debug, clap::Parser)]
#[command(
    author,
    version,
    about,
    long_about = "Convert text between camelCase, dot.case, kebab-case, snake_case and PascalCase"
)]
pub struct App {
    #[command(subcommand)]
    pub command: SubCommands,

    #[clap(flatten)]
    global: Global,
}

#[derive(Debug, Clone, clap::Args)]
pub struct Global {
    /// Whether to display additional information.
    #[clap(long, env = "CASEKIT_VERBOSE", global = true, default_value = "false")]
    verbose: bool,
}

#[derive(Debug, clap::Parser)]
pub enum SubCommands {
    /// Convert text to a single case style
    Convert(crate::convert::ConvertOptions),

    /// Show text converted to every supported case style
    Table(crate::convert::TableOptions),

    /// Show the words extracted from text
    Tokens(crate::convert::TokensOptions),

    /// Model Context Protocol server
    MCP(crate::mcp::App),
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    color_eyre::install()?;

    let app = App::parse();
    log::debug!("parsed command line: {:?}", app);

    match app.command {
        SubCommands::Convert(options) => crate::convert::run(options, app.global),
        SubCommands::Table(options) => crate::convert::table(options, app.global),
        SubCommands::Tokens(options) => crate::convert::tokens(options, app.global),
        SubCommands::MCP(sub_app) => crate::mcp::run(sub_app, app.global).await,
    }
    .map_err(|err: color_eyre::eyre::Report| eyre!(err))
}
