use crate::config::Overrides;
use clap::{Parser, Subcommand};

#[derive(Debug, Clone, Parser)]
#[command(name = "routine-picker")]
#[command(about = "Pick beauty products and ask an AI assistant for a routine")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Chat endpoint URL
    #[arg(long, global = true)]
    pub api_endpoint: Option<String>,

    /// Product catalog JSON file
    #[arg(long, global = true)]
    pub products: Option<String>,

    /// Directory holding the saved selection and conversation
    #[arg(long, global = true)]
    pub state_dir: Option<String>,

    /// Do not ask the assistant to search the web
    #[arg(long, global = true)]
    pub no_web_search: bool,

    /// Request timeout in seconds
    #[arg(long, global = true)]
    pub timeout_secs: Option<u64>,

    #[arg(short, long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, global = true, help = "Emit logs as JSON")]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Convert chat markup to HTML (reads FILE or stdin)
    Format { file: Option<String> },

    /// List products, optionally filtered
    Products {
        #[arg(long)]
        category: Option<String>,
        #[arg(long, default_value = "")]
        search: String,
    },

    /// List the catalog categories
    Categories,

    /// Select a product, or deselect it if already selected
    Toggle { ids: Vec<u32> },

    /// Remove products from the selection
    Remove { ids: Vec<u32> },

    /// Show the current selection
    Selected,

    /// Clear the selection
    Clear,

    /// Generate a routine for the selected products
    Routine {
        #[arg(long)]
        html: bool,
    },

    /// Ask a follow-up question
    Chat {
        #[arg(required = true, num_args = 1..)]
        message: Vec<String>,
        #[arg(long)]
        html: bool,
    },
}

impl CliConfig {
    pub fn overrides(&self) -> Overrides {
        Overrides {
            api_endpoint: self.api_endpoint.clone(),
            products_path: self.products.clone(),
            state_dir: self.state_dir.clone(),
            disable_web_search: self.no_web_search,
            timeout_seconds: self.timeout_secs,
        }
    }
}
