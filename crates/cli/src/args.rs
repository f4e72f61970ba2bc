use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use pentaledger_gambling::GamblingLogInput;

#[derive(Debug, Parser)]
#[command(name = "pentaledger")]
#[command(about = "PentaLedger - A modern ledger system")]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Show version information
    #[arg(long)]
    pub version: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage companies
    #[command(subcommand)]
    Company(CompanyCommand),

    /// Manage gambling logs
    #[command(subcommand)]
    Gambling(GamblingCommand),

    /// Tax calculators
    #[command(subcommand)]
    Tax(TaxCommand),

    /// IRS standard mileage rates
    #[command(subcommand)]
    Mileage(MileageCommand),

    /// Fuel economy calculators
    #[command(subcommand)]
    Fuel(FuelCommand),
}

#[derive(Debug, Subcommand)]
pub enum CompanyCommand {
    /// List all companies
    List,

    /// Create a new company
    Create {
        /// Company name
        #[arg(short, long)]
        name: String,

        /// Tax identification number
        #[arg(short, long)]
        tax_id: String,

        /// Parent company ID (optional)
        #[arg(short, long)]
        parent_id: Option<String>,
    },
}

#[derive(Debug, Subcommand)]
pub enum GamblingCommand {
    /// List all gambling log entries
    List,

    /// Create a new gambling log entry
    Create(GamblingCreateArgs),

    /// Show summary of gambling wins and losses
    Summary,

    /// Create one entry per row of a CSV file
    Import {
        /// CSV file whose header names match the `create` flags
        file: PathBuf,

        /// Field delimiter
        #[arg(long, default_value_t = ',')]
        delimiter: char,
    },
}

#[derive(Debug, Args)]
pub struct GamblingCreateArgs {
    /// Date (YYYY-MM-DD)
    #[arg(short, long)]
    pub date: String,

    /// Establishment name
    #[arg(short, long)]
    pub establishment: String,

    /// Establishment address
    #[arg(short, long)]
    pub address: String,

    /// Time of day (HH:MM:SS)
    #[arg(short, long)]
    pub time: String,

    /// Wagering type
    #[arg(short = 'y', long = "type")]
    pub wagering_type: String,

    /// Location ID
    #[arg(short, long)]
    pub location: String,

    /// W2 winnings
    #[arg(short, long)]
    pub w2: String,

    /// Total winnings
    #[arg(short = 'g', long)]
    pub winnings: String,

    /// Total losses
    #[arg(short = 's', long)]
    pub losses: String,

    /// Additional notes
    #[arg(short, long)]
    pub notes: Option<String>,
}

impl From<GamblingCreateArgs> for GamblingLogInput {
    fn from(args: GamblingCreateArgs) -> Self {
        GamblingLogInput {
            date: args.date,
            establishment: args.establishment,
            address: args.address,
            time: args.time,
            wagering_type: args.wagering_type,
            location: args.location,
            w2: args.w2,
            winnings: args.winnings,
            losses: args.losses,
            notes: args.notes,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum TaxCommand {
    /// Net investment income tax
    Niit {
        /// Modified adjusted gross income
        #[arg(long)]
        magi: f64,

        /// Net investment income
        #[arg(long)]
        investment_income: f64,

        /// single, mfj, mfs or hoh
        #[arg(long)]
        filing_status: Option<String>,
    },

    /// Retirement contribution limits
    Limits {
        #[arg(long)]
        year: i32,

        /// ira, roth-ira, simple-ira, sep-ira, 401k, overall-deferral
        #[arg(long)]
        account: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum MileageCommand {
    /// Rate in effect on a date
    Rate {
        /// Date (YYYY-MM-DD)
        #[arg(long)]
        date: String,

        /// business, medical or personal
        #[arg(long, default_value = "business")]
        category: String,

        /// Miles driven, to compute the deduction
        #[arg(long)]
        miles: Option<f64>,
    },
}

#[derive(Debug, Subcommand)]
pub enum FuelCommand {
    /// Distance per unit of fuel
    Efficiency {
        #[arg(long)]
        distance: f64,

        #[arg(long)]
        fuel: f64,
    },

    /// Fuel needed for a distance
    Required {
        #[arg(long)]
        distance: f64,

        #[arg(long)]
        efficiency: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_gambling_create_short_flags() {
        let cli = Cli::try_parse_from([
            "pentaledger", "gambling", "create", "-d", "2024-01-02", "-e", "Casino", "-a",
            "1 Main St", "-t", "20:00", "-y", "Slots", "-l", "A1", "-w", "0", "-g", "100",
            "-s", "40", "-n", "fun night",
        ])
        .unwrap();

        let Some(Command::Gambling(GamblingCommand::Create(args))) = cli.command else {
            panic!("expected gambling create");
        };
        let input = GamblingLogInput::from(args);
        assert_eq!(input.wagering_type, "Slots");
        assert_eq!(input.losses, "40");
        assert_eq!(input.notes.as_deref(), Some("fun night"));
    }

    #[test]
    fn company_create_requires_name_and_tax_id() {
        assert!(Cli::try_parse_from(["pentaledger", "company", "create", "-n", "Acme"]).is_err());
        let cli = Cli::try_parse_from([
            "pentaledger", "company", "create", "--name", "Acme", "--tax-id", "1", "-p", "x",
        ])
        .unwrap();
        assert!(matches!(
            cli.command,
            Some(Command::Company(CompanyCommand::Create { parent_id: Some(_), .. }))
        ));
    }

    #[test]
    fn version_flag_and_no_command() {
        let cli = Cli::try_parse_from(["pentaledger", "--version"]).unwrap();
        assert!(cli.version);
        let cli = Cli::try_parse_from(["pentaledger"]).unwrap();
        assert!(cli.command.is_none());
    }
}
