//! Ohmflow - Ohm's law flow visualizer engine
//!
//! Evaluates the circuit for a given voltage and resistance and prints the
//! meter readings and particle schedule a renderer would draw.
//!
//! # Usage
//!
//! ```bash
//! ohmflow -U 20 -R 150
//! printf 'U=25\nR=1k\n20 150\n' | ohmflow --events
//! ```

use std::io::{self, Write};

use clap::Parser;
use ohmflow_core::{
    circuit::parse_value,
    error::{OhmError, Result},
    events::EventReader,
    readout::Readout,
    AnimationConfig, EngineConfig, InputLimits, Session, DEFAULT_RESISTANCE, DEFAULT_VOLTAGE,
};
use tracing::{info, Level};

/// Ohm's law flow visualizer engine
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Source voltage (accepts SI suffixes, e.g. 1.5k)
    #[arg(short = 'U', long, value_parser = parse_arg, default_value_t = DEFAULT_VOLTAGE)]
    voltage: f64,

    /// Load resistance in ohms (accepts SI suffixes, e.g. 1.5k)
    #[arg(short = 'R', long, value_parser = parse_arg, default_value_t = DEFAULT_RESISTANCE)]
    resistance: f64,

    /// Read interaction events from stdin, one per line, and evaluate each
    #[arg(long)]
    events: bool,

    /// Use the wider input ranges (U up to 600 V, R up to 600 Ω)
    #[arg(long)]
    extended_range: bool,

    /// Particle cap
    #[arg(long, default_value_t = ohmflow_core::animation::MAX_PARTICLES)]
    max_particles: f64,

    /// Speed cap
    #[arg(long, default_value_t = ohmflow_core::animation::MAX_SPEED)]
    max_speed: f64,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_arg(text: &str) -> std::result::Result<f64, String> {
    parse_value(text).ok_or_else(|| OhmError::invalid_value(text).to_string())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

fn write_report(out: &mut impl Write, readout: &Readout) -> Result<()> {
    writeln!(out, "{readout}").map_err(|e| OhmError::OutputWriteError {
        message: e.to_string(),
    })
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let defaults = AnimationConfig::default();
    let animation = AnimationConfig::new()
        .with_speed(defaults.speed_gain, args.max_speed)
        .with_particles(defaults.particle_gain, args.max_particles);
    let limits = if args.extended_range {
        InputLimits::extended()
    } else {
        InputLimits::default()
    };
    let config = EngineConfig::new()
        .with_animation(animation)
        .with_limits(limits);

    let mut session = Session::with_config(config)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Baseline cycle for the command-line values
    session.set_voltage(args.voltage);
    session.set_resistance(args.resistance);
    let eval = session.evaluate();
    write_report(&mut out, &Readout::from_evaluation(&eval))?;

    if args.events {
        let stdin = io::stdin();
        let mut reader = EventReader::new(stdin.lock());
        let mut cycles = 0usize;
        let mut pulses = 0usize;

        while let Some(event) = reader.next_event()? {
            let eval = session.handle(&event);
            cycles += 1;
            if eval.transition.changed {
                pulses += 1;
            }
            write_report(&mut out, &Readout::from_evaluation(&eval))?;
        }

        info!(cycles, pulses, "event stream finished");
    }

    out.flush().map_err(|e| OhmError::OutputWriteError {
        message: e.to_string(),
    })
}
