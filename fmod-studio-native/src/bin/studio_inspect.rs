//! studio-inspect: bring up a studio system from a configuration file and
//! print what it loaded.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Parser;
use env_logger::Env;
use log::info;

use fmod_studio_core::storage::config_file::read_configuration;
use fmod_studio_core::storage::snapshot::write_snapshot;
use fmod_studio_core::{StudioError, StudioSession, SystemSnapshot};
use fmod_studio_native::NativeStudio;

#[derive(Parser, Debug)]
#[command(name = "studio-inspect", version, about = "Inspect the banks a studio configuration loads")]
struct Cli {
    /// Studio configuration (JSON)
    config: PathBuf,

    /// Write the snapshot to this file as JSON
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the snapshot as JSON instead of a listing
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), StudioError> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let config = read_configuration(&cli.config)?;
    info!("starting studio with {} configured bank(s)", config.banks.len());

    let session = StudioSession::start(Arc::new(NativeStudio::new()), config)?;
    let outcome = inspect(&session, &cli);
    session.shutdown_after(outcome)
}

fn inspect(session: &StudioSession, cli: &Cli) -> Result<(), StudioError> {
    // Nonblocking loads finish during update.
    session.update()?;
    let snapshot = session.snapshot()?;

    if cli.json {
        let json = serde_json::to_string_pretty(&snapshot)
            .map_err(|e| StudioError::Storage(format!("failed to serialize snapshot: {}", e)))?;
        println!("{}", json);
    } else {
        print_listing(&snapshot);
    }

    if let Some(path) = &cli.output {
        write_snapshot(&snapshot, path)?;
        info!("snapshot written to {}", path.display());
    }
    Ok(())
}

fn print_listing(snapshot: &SystemSnapshot) {
    println!("captured {}", snapshot.captured_at);
    println!(
        "cpu: dsp {:.1}% stream {:.1}% geometry {:.1}% update {:.1}% studio {:.1}%",
        snapshot.cpu_usage.dsp_usage,
        snapshot.cpu_usage.stream_usage,
        snapshot.cpu_usage.geometry_usage,
        snapshot.cpu_usage.update_usage,
        snapshot.cpu_usage.studio_usage,
    );

    for bank in &snapshot.banks {
        println!();
        println!("{} {} [{:?}, samples {:?}]", bank.path, bank.id, bank.loading_state, bank.sample_loading_state);
        for event in &bank.events {
            let mut traits = Vec::new();
            if event.is_oneshot {
                traits.push("oneshot");
            }
            if event.is_stream {
                traits.push("stream");
            }
            if event.is_3d {
                traits.push("3d");
            }
            println!("  {} {} ms [{}]", event.path, event.length_ms, traits.join(" "));
            for parameter in &event.parameters {
                println!(
                    "    {} {:?} {}..{}",
                    parameter.name, parameter.kind, parameter.minimum, parameter.maximum
                );
            }
        }
        for strip in &bank.mixer_strips {
            println!(
                "  {} fader {:.2}{}",
                strip.path,
                strip.fader_level,
                if strip.paused { " (paused)" } else { "" }
            );
        }
    }
    println!();
    println!("{} bank(s), {} event(s)", snapshot.banks.len(), snapshot.event_count());
}
