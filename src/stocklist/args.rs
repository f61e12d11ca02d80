use clap::Parser;

#[derive(Parser, Debug)]
#[command(name = "stocklist")]
#[command(about = "Console inventory manager with a functional core", long_about = None)]
pub struct Cli {
    /// Start with an empty inventory instead of the demo products
    #[arg(long)]
    pub empty: bool,

    /// Render products and results as JSON
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,
}
