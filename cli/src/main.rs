mod table;

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use fittrack_core::{load_packets, summarize, summarize_batch, SensorPacket, Summary};

#[derive(Parser)]
#[command(name = "fittrack")]
#[command(about = "Workout statistics from sensor packets", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Run the built-in demo packets
    Demo,
    /// Compute a single packet (usage: compute RUN 15000 1 75)
    Compute {
        /// Workout code: RUN, WLK or SWM
        code: String,
        /// Positional sensor values for that workout
        #[arg(required = true)]
        values: Vec<f64>,
    },
    /// Summarize packets from a JSON file
    Report {
        /// Path to a JSON array of {"code", "data"} packets
        path: PathBuf,
        /// Render as a table instead of one line per workout
        #[arg(long)]
        table: bool,
    },
}

fn demo_packets() -> Vec<SensorPacket> {
    vec![
        SensorPacket::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorPacket::new("RUN", vec![15000.0, 1.0, 75.0]),
        SensorPacket::new("WLK", vec![9000.0, 1.0, 75.0, 180.0]),
    ]
}

fn report_packets(packets: &[SensorPacket], as_table: bool) {
    let mut summaries: Vec<Summary> = Vec::new();
    for (index, result) in summarize_batch(packets).into_iter().enumerate() {
        match result {
            Ok(summary) => summaries.push(summary),
            Err(e) => println!("Warning: skipping packet #{}: {}", index + 1, e),
        }
    }

    if as_table {
        table::show_table(&summaries);
    } else {
        for summary in &summaries {
            println!("{}", summary);
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Compute { code, values }) => {
            let packet = SensorPacket::new(&code, values);
            let summary = summarize(&packet)?;
            println!("{}", summary);
        }
        Some(Commands::Report { path, table }) => {
            let packets = load_packets(&path)?;
            report_packets(&packets, table);
        }
        Some(Commands::Demo) | None => {
            // Default behavior: run the demo packets
            report_packets(&demo_packets(), false);
        }
    }
    Ok(())
}
