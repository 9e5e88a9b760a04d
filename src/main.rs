use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use formica_core::{init_logging, Settings};
use formica_io::SaveStore;
use formica_lib::report::{render_table, settings_rows, status_rows};
use formica_lib::{RunSummary, Simulation};
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(author, version, about = "Ant colony life-cycle simulation", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run a colony until it dies out
    Run {
        /// TOML file with colony parameters; defaults apply to missing keys
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Override the seed of the random stream
        #[arg(short, long)]
        seed: Option<u64>,

        /// Stop after this many days even if the colony survives
        #[arg(short, long)]
        max_days: Option<u64>,

        /// Print the colony every day, pausing `simulation_speed` seconds
        #[arg(long)]
        realtime: bool,

        /// Store settings and final colony in the save directory
        #[arg(long)]
        save: bool,

        #[arg(long, default_value = formica_io::DEFAULT_SAVE_DIRECTORY)]
        save_dir: PathBuf,
    },
    /// List stored simulations
    List {
        #[arg(long, default_value = formica_io::DEFAULT_SAVE_DIRECTORY)]
        save_dir: PathBuf,
    },
    /// Run again from the settings of a stored simulation
    Replay {
        /// Save id as shown by `list`
        id: String,

        #[arg(short, long)]
        max_days: Option<u64>,

        #[arg(long, default_value = formica_io::DEFAULT_SAVE_DIRECTORY)]
        save_dir: PathBuf,
    },
    /// Print the validated parameter table
    Config {
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

fn load_settings(path: Option<&Path>) -> Result<Settings> {
    match path {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("reading {}", path.display()))?;
            Settings::from_toml(&content).with_context(|| format!("invalid config {}", path.display()))
        }
        None => Ok(Settings::default()),
    }
}

fn simulate(settings: Settings, max_days: Option<u64>, realtime: bool) -> (Simulation, RunSummary) {
    let mut sim = Simulation::new(settings).realtime(realtime);
    if let Some(days) = max_days {
        sim = sim.with_max_days(days);
    }
    let summary = sim.run_with(|colony, _| {
        if realtime {
            println!("{}\n", render_table(&status_rows(&colony.snapshot())));
        }
    });
    (sim, summary)
}

fn print_summary(summary: &RunSummary) {
    println!("{}", render_table(&status_rows(&summary.snapshot)));
    println!();
    if summary.extinct {
        println!("Colony died out after {} days.", summary.snapshot.day);
    } else {
        println!("Stopped after {} days with the colony alive.", summary.snapshot.day);
    }
    println!(
        "Peak population {}, {} hatched, {} starved, {} queen successions ({:.2?}).",
        summary.peak_population,
        summary.total_hatched,
        summary.total_starved,
        summary.successions,
        summary.elapsed
    );
}

fn main() -> Result<()> {
    init_logging();
    let args = Args::parse();

    match args.command {
        Command::Run {
            config,
            seed,
            max_days,
            realtime,
            save,
            save_dir,
        } => {
            let mut settings = load_settings(config.as_deref())?;
            if seed.is_some() {
                settings = settings.with_seed(seed);
            }
            let (sim, summary) = simulate(settings, max_days, realtime);
            print_summary(&summary);

            if save {
                let colony = sim.into_colony();
                let id = SaveStore::new(save_dir)
                    .save(colony.settings(), colony.to_record())
                    .context("saving simulation")?;
                println!("Simulation saved as {id}");
            }
        }
        Command::List { save_dir } => {
            let saves = SaveStore::new(&save_dir)
                .list()
                .with_context(|| format!("listing {}", save_dir.display()))?;
            if saves.is_empty() {
                println!("No saved simulations in {}.", save_dir.display());
            }
            for (index, id) in saves {
                println!("{index:>3}  {id}");
            }
        }
        Command::Replay {
            id,
            max_days,
            save_dir,
        } => {
            let settings = SaveStore::new(save_dir)
                .load_settings(&id)
                .with_context(|| format!("loading save {id}"))?;
            let (_, summary) = simulate(settings, max_days, false);
            print_summary(&summary);
        }
        Command::Config { config } => {
            let settings = load_settings(config.as_deref())?;
            println!("{}", render_table(&settings_rows(&settings)));
            println!("\nFingerprint: {}", settings.fingerprint());
        }
    }

    Ok(())
}
