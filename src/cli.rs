use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "donorscore",
    version,
    about = "Donor-centered fundraising self-assessment CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Project directory holding donorscore.toml and the local store
    #[arg(long, global = true, default_value = ".")]
    pub root: PathBuf,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the assessment questions and their option values
    Questions(QuestionsCommand),
    /// Record an answer for one question in the local store
    Answer(AnswerCommand),
    /// Score the saved (or given) answers and show the result
    Results(ResultsCommand),
    /// Print a shareable assessment link
    Share(ShareCommand),
    /// Manage the analytics admin session
    Admin(AdminCommand),
    /// Show aggregate statistics over completed assessments
    Analytics(AnalyticsCommand),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
}

#[derive(Args)]
pub struct QuestionsCommand {
    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct AnswerCommand {
    /// 0-based question position
    #[arg(required_unless_present = "reset", conflicts_with = "reset")]
    pub index: Option<usize>,

    /// Option value, e.g. ask_interests
    #[arg(required_unless_present = "reset", conflicts_with = "reset")]
    pub value: Option<String>,

    /// Clear all saved answers
    #[arg(long)]
    pub reset: bool,
}

#[derive(Args)]
pub struct ResultsCommand {
    /// JSON answer file such as {"0": "ask_interests"}; defaults to the saved answers
    #[arg(long)]
    pub answers: Option<PathBuf>,

    /// Shareable link the assessment was opened from
    #[arg(long, conflicts_with = "shared_by")]
    pub link: Option<String>,

    #[arg(long)]
    pub shared_by: Option<String>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}

#[derive(Args)]
pub struct ShareCommand {
    /// Overrides share.base_url from the config
    #[arg(long)]
    pub base_url: Option<String>,
    #[arg(long)]
    pub title: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    #[arg(long)]
    pub shared_by: Option<String>,
}

#[derive(Args)]
pub struct AdminCommand {
    #[command(subcommand)]
    pub action: AdminAction,
}

#[derive(Subcommand)]
pub enum AdminAction {
    Login {
        #[arg(long)]
        password: String,
    },
    Logout,
    Status,
}

#[derive(Args)]
pub struct AnalyticsCommand {
    /// Include the demonstration results
    #[arg(long)]
    pub seed: bool,

    /// Answer files to record as completions before summarizing
    #[arg(long = "record")]
    pub records: Vec<PathBuf>,

    /// Attribution applied to every --record file
    #[arg(long, requires = "records")]
    pub shared_by: Option<String>,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,
}
