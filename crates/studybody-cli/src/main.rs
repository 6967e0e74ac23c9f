use clap::{CommandFactory, Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "studybody-cli", version, about = "Study&Body CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Energy index, curve, and focus slots
    Energy {
        #[command(subcommand)]
        action: commands::energy::EnergyAction,
    },
    /// Study planner
    Plan {
        #[command(subcommand)]
        action: commands::plan::PlanAction,
    },
    /// Rhythm inputs (chronotype, wake time, sleep, water, caffeine, guide)
    Rhythm {
        #[command(subcommand)]
        action: commands::rhythm::RhythmAction,
    },
    /// Career recommendations for an MBTI type
    Career {
        /// MBTI type, e.g. INTJ
        mbti: String,
    },
    /// Study tips and flashcards for a subject
    Tips {
        /// Subject (chemistry/biology/pharmacy/math/english/other)
        subject: String,
        /// Number of flashcards to draw
        #[arg(long, default_value_t = 5)]
        cards: usize,
        /// Seed for a reproducible draw
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Pomodoro phase preview
    Timer {
        #[command(subcommand)]
        action: commands::timer::TimerAction,
    },
    /// Daily report
    Report {
        /// Date (YYYY-MM-DD, default today)
        #[arg(long)]
        date: Option<String>,
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
    /// Generate shell completions
    Completions {
        /// Target shell
        shell: clap_complete::Shell,
    },
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Energy { action } => commands::energy::run(action),
        Commands::Plan { action } => commands::plan::run(action),
        Commands::Rhythm { action } => commands::rhythm::run(action),
        Commands::Career { mbti } => commands::career::run(&mbti),
        Commands::Tips {
            subject,
            cards,
            seed,
        } => commands::tips::run(&subject, cards, seed),
        Commands::Timer { action } => commands::timer::run(action),
        Commands::Report { date, json } => commands::report::run(date, json),
        Commands::Config { action } => commands::config::run(action),
        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "studybody-cli", &mut std::io::stdout());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
