//! Command-line front end for the Sallen-Key design calculator.
//!
//! Prints the synthesized component values for the requested cutoff
//! frequency and Q, and can emit the frequency response as CSV
//! (`freq_hz,magnitude_db,phase_deg`) for an external plotting tool
//! (log-x magnitude and phase axes are the plotter's business).

use clap::Parser;
use log::{info, warn};

use sallen_key::{
    synthesize, FilterSpec, LogSweep, ResponseSweep, TransferFunction,
};

/// Command line arguments
#[derive(Parser, Debug)]
#[command(name = "sallen-key")]
#[command(about = "Sallen-Key low-pass filter design calculator", long_about = None)]
struct Args {
    /// Target cutoff frequency in Hz
    #[arg(long, value_name = "HZ", default_value = "10.0")]
    cutoff: f64,

    /// Quality factor (default is Butterworth, 1/sqrt(2))
    #[arg(long, value_name = "Q", default_value = "0.7071067811865476")]
    q: f64,

    /// Seed capacitance C1 in Farads
    #[arg(long, value_name = "FARADS", default_value = "330e-9")]
    cap: f64,

    /// Resistor ratio R1/R2
    #[arg(long, value_name = "M", default_value = "1.0")]
    ratio: f64,

    /// Also print the frequency response sweep as CSV on stdout
    #[arg(long)]
    response: bool,

    /// Sweep start frequency in Hz
    #[arg(long, value_name = "HZ", default_value = "1e-2")]
    start: f64,

    /// Sweep stop frequency in Hz
    #[arg(long, value_name = "HZ", default_value = "1e3")]
    stop: f64,

    /// Number of sweep points
    #[arg(long, value_name = "N", default_value = "1000")]
    points: usize,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    let args = Args::parse();

    let spec = FilterSpec::new(args.cutoff, args.q, args.cap).with_ratio(args.ratio);
    let components = match synthesize(&spec) {
        Ok(components) => components,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    info!(
        "designing Sallen-Key low-pass: fc = {} Hz, Q = {}, m = {}",
        spec.fc, spec.q, spec.m
    );
    println!("{components}");

    if args.response {
        let tf = TransferFunction::new(&components);
        let response = ResponseSweep::new(tf, LogSweep::new(args.start, args.stop, args.points));

        println!("freq_hz,magnitude_db,phase_deg");
        for point in response.iter() {
            match (point.magnitude_db(), point.phase_degrees()) {
                (Ok(db), Ok(deg)) => {
                    println!("{:.6e},{:.6},{:.6}", point.frequency, db, deg);
                }
                (Err(e), _) | (_, Err(e)) => {
                    // Skip the sample; the rest of the sweep stays valid.
                    warn!("{e}");
                }
            }
        }
    }
}
