use camroll::gallery::Gallery;
use camroll::imaging::RustBackend;
use camroll::store::RecordStore;
use camroll::{config, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "camroll")]
#[command(about = "Local photo roll: add, list, and remove normalized photos")]
#[command(long_about = "\
Local photo roll: add, list, and remove normalized photos

Added images are resized to fit the configured bounding box (aspect ratio
preserved, never cropped), re-encoded as JPEG, and persisted to a single
JSON store file. The roll lists newest-first; records are addressed by
their UUID or by display position (0 = newest).

Configuration is read from camroll.toml if present:

  store_path = \"camroll.json\"
  quality = 100

  [bounds]
  width = 414
  height = 896")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "camroll.toml", global = true)]
    config: PathBuf,

    /// Store file (overrides store_path from the config)
    #[arg(long, global = true)]
    store: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Normalize an image file and add it to the roll
    Add {
        /// Image file to add (JPEG or PNG)
        image: PathBuf,
    },
    /// List the roll, newest first
    List,
    /// Remove a photo by UUID or display position (0 = newest)
    Remove {
        /// UUID or 0-based position
        target: String,
    },
    /// Write a stored photo's JPEG bytes to a file
    Export {
        /// UUID of the record
        id: Uuid,
        /// Destination file
        out: PathBuf,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let config = match config::RollConfig::load(&cli.config) {
        Ok(c) => c,
        Err(e) => {
            log::error!("failed to load {}: {}", cli.config.display(), e);
            return;
        }
    };

    let store_path = cli.store.unwrap_or_else(|| config.store_path.clone());
    let store = RecordStore::new(store_path);

    let mut gallery = match Gallery::open(store, RustBackend::new(), config.quality()) {
        Ok(g) => g,
        Err(e) => {
            log::error!("failed to open photo roll: {}", e);
            return;
        }
    };

    // Failed actions log a diagnostic and do nothing else: the roll stays
    // consistent, nothing retries, nothing is fatal.
    match cli.command {
        Command::Add { image } => {
            let raw = match std::fs::read(&image) {
                Ok(bytes) => bytes,
                Err(e) => {
                    log::error!("cannot read {}: {}", image.display(), e);
                    return;
                }
            };
            match gallery.add_photo(&raw, config.bounds()) {
                Ok(record) => output::print_added(record),
                Err(e) => log::error!("add failed for {}: {}", image.display(), e),
            }
        }
        Command::List => output::print_roll(gallery.records()),
        Command::Remove { target } => {
            let result = if let Ok(id) = Uuid::parse_str(&target) {
                gallery.remove(id)
            } else if let Ok(position) = target.parse::<usize>() {
                gallery.remove_at(position)
            } else {
                log::error!("'{}' is neither a UUID nor a position", target);
                return;
            };
            match result {
                Ok(record) => output::print_removed(&record),
                Err(e) => log::error!("remove failed for {}: {}", target, e),
            }
        }
        Command::Export { id, out } => match gallery.get(id) {
            Some(record) => {
                if let Err(e) = std::fs::write(&out, &record.image_data) {
                    log::error!("cannot write {}: {}", out.display(), e);
                } else {
                    println!("Exported {} → {}", id, out.display());
                }
            }
            None => log::error!("no record with id {}", id),
        },
    }
}
