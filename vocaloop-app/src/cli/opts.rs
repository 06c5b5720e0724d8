use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Clone, ValueEnum)]
pub enum BackendKind {
    Http,
    Memory,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum QuizKind {
    PostLearning,
    StagedDaily,
}

#[derive(Debug, Parser, Clone)]
#[command(name = "vocaloop", version, about = "Vocaloop study/quiz CLI")]
pub struct Cli {
    /// Backend: the remote HTTP service, or in-memory (offline, seeded from --file)
    #[arg(long, value_enum, default_value_t = BackendKind::Http)]
    pub backend: BackendKind,

    /// Base URL of the remote word/review service
    #[arg(long, default_value = "http://localhost:3000")]
    pub base_url: String,

    /// Auth token (falls back to VOCALOOP_TOKEN, then the saved login)
    #[arg(long)]
    pub token: Option<String>,

    /// Local word file (.csv or .json) seeding the memory backend
    #[arg(long)]
    pub file: Option<PathBuf>,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Save the auth token for later runs
    Login { token: String },
    /// Word catalog operations
    #[command(subcommand)]
    Words(WordsCmd),
    /// Run today's study pass
    Study(StudyCmd),
    /// Run a review quiz
    Quiz(QuizCmd),
}

#[derive(Debug, Subcommand, Clone)]
pub enum WordsCmd {
    List,
}

#[derive(Debug, Args, Clone)]
pub struct StudyCmd {
    /// How many words to study today
    #[arg(long, default_value_t = 10)]
    pub goal: usize,

    /// Fill FIFO from high-priority words, pad randomly from the rest
    #[arg(long)]
    pub backfill: bool,

    /// Priority threshold for --backfill
    #[arg(long, default_value_t = 0)]
    pub threshold: i32,

    /// RNG seed for reproducible selections
    #[arg(long)]
    pub seed: Option<u64>,

    /// Run the post-learning quiz right after studying
    #[arg(long)]
    pub quiz: bool,
}

#[derive(Debug, Args, Clone)]
pub struct QuizCmd {
    /// Which review pool to quiz over
    #[arg(long, value_enum, default_value_t = QuizKind::PostLearning)]
    pub kind: QuizKind,

    /// RNG seed for reproducible option shuffles
    #[arg(long)]
    pub seed: Option<u64>,
}
