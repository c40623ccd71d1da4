use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "call-a-vet")]
#[command(about = "Call-a-Vet équidos: ROI de clientes y economía unitaria del operador", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON config file (defaults to <config dir>/call-a-vet/config.json)
    #[arg(long, global = true, env = "CALL_A_VET_CONFIG")]
    pub config: Option<PathBuf>,

    /// Emit logs as JSON on stderr
    #[arg(long = "log-json", global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Client ROI: does the membership pay for itself?
    ClientRoi {
        #[command(flatten)]
        calc: CalcArgs,

        /// Take membershipCost from a catalogue plan (e.g. plus, cuadra15)
        #[arg(long)]
        plan: Option<String>,
    },

    /// Operator unit economics: GMV, contribution, break-even
    Operator {
        #[command(flatten)]
        calc: CalcArgs,
    },

    /// List reference scenarios for both calculators
    Scenarios {
        #[arg(long)]
        locale: Option<String>,

        #[arg(long)]
        json: bool,
    },

    /// Show the pricing catalogue
    Pricing {
        /// Filter by tier (pay_per_use, individual, stable, pro_and_ranch)
        #[arg(long)]
        tier: Option<String>,

        /// Show a single plan
        #[arg(long)]
        plan: Option<String>,

        #[arg(long)]
        locale: Option<String>,

        #[arg(long)]
        json: bool,
    },
}

#[derive(Args, Debug, Clone, Default)]
pub struct CalcArgs {
    /// JSON file with input fields (camelCase or snake_case keys)
    #[arg(long)]
    pub params: Option<PathBuf>,

    /// Override a single input, e.g. --set horses=8 --set takeRate=0,3
    #[arg(short, long = "set", value_name = "KEY=VALUE")]
    pub set: Vec<String>,

    /// Start from a reference scenario instead of the configured defaults
    #[arg(long)]
    pub scenario: Option<String>,

    /// Label language (es-MX, en)
    #[arg(long)]
    pub locale: Option<String>,

    /// Write the CSV export; without a value uses the configured export dir
    #[arg(long, value_name = "DIR", num_args = 0..=1)]
    pub export: Option<Option<PathBuf>>,

    /// Print the full report as JSON instead of the summary
    #[arg(long)]
    pub json: bool,
}
