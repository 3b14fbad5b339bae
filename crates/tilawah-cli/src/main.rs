//! tilawah CLI - the examiner-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use uuid::Uuid;

mod commands;

#[derive(Parser)]
#[command(name = "tilawah", version, about = "Al-Fatihah recitation assessment")]
struct Cli {
    /// Config file path
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Evaluation store directory (overrides config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create starter config and example evaluation sheet
    Init,

    /// Show the error catalogue
    Catalogue {
        /// Only this verse (e.g. "ayat_3", "7b")
        #[arg(long)]
        verse: Option<String>,
    },

    /// Validate evaluation sheet TOML files
    Validate {
        /// Path to a sheet file or directory of sheets
        #[arg(long)]
        sheet: PathBuf,
    },

    /// Record a new evaluation from a sheet
    Create {
        /// Path to the sheet file
        #[arg(long)]
        sheet: PathBuf,
    },

    /// Replace an evaluation's details and errors from a sheet
    Edit {
        /// Evaluation id
        #[arg(long)]
        id: Uuid,

        /// Path to the sheet file
        #[arg(long)]
        sheet: PathBuf,
    },

    /// List evaluations, newest first
    List {
        /// Subject name contains
        #[arg(long)]
        name: Option<String>,

        /// Examiner name
        #[arg(long)]
        examiner: Option<String>,

        /// Activity label
        #[arg(long)]
        activity: Option<String>,

        /// Unique code contains
        #[arg(long)]
        code: Option<String>,
    },

    /// Show one evaluation with its scores
    Show {
        /// Evaluation id
        #[arg(long)]
        id: Uuid,
    },

    /// Look up an evaluation by unique code (prefix, any case)
    Lookup {
        /// Code as typed by the reciter
        #[arg(long)]
        code: String,
    },

    /// Bind a reciter name to an unnamed evaluation
    Bind {
        /// Evaluation id
        #[arg(long)]
        id: Uuid,

        /// Reciter name
        #[arg(long)]
        name: String,
    },

    /// Write a results report
    Report {
        /// Evaluation id
        #[arg(long)]
        id: Uuid,

        /// Output format: json, html, text
        #[arg(long, default_value = "html")]
        format: String,

        /// Output file (default: report_dir/Assessment-<name>-<date>.<ext>)
        #[arg(long)]
        output: Option<PathBuf>,
    },

    /// Run the HTTP service
    Serve {
        /// Listen address (overrides config)
        #[arg(long)]
        bind: Option<String>,
    },
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("tilawah=info".parse().unwrap()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let ctx = commands::Context {
        config_path: cli.config,
        store_dir: cli.store,
    };

    let result = match cli.command {
        Commands::Init => commands::init::execute(),
        Commands::Catalogue { verse } => commands::catalogue::execute(verse),
        Commands::Validate { sheet } => commands::validate::execute(sheet),
        Commands::Create { sheet } => commands::create::execute(&ctx, sheet).await,
        Commands::Edit { id, sheet } => commands::edit::execute(&ctx, id, sheet).await,
        Commands::List {
            name,
            examiner,
            activity,
            code,
        } => {
            let filter = tilawah_core::ListFilter {
                name,
                examiner,
                activity,
                code,
            };
            commands::list::execute(&ctx, filter).await
        }
        Commands::Show { id } => commands::show::execute(&ctx, id).await,
        Commands::Lookup { code } => commands::lookup::execute(&ctx, code).await,
        Commands::Bind { id, name } => commands::bind::execute(&ctx, id, name).await,
        Commands::Report { id, format, output } => {
            commands::report::execute(&ctx, id, format, output).await
        }
        Commands::Serve { bind } => commands::serve::execute(&ctx, bind).await,
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
