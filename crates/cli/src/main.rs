//! MIPS pipeline simulator CLI.
//!
//! This binary runs a program image to completion and reports its pipeline
//! statistics. It performs:
//! 1. **Loading:** Program image (binary or hex text) and an optional data image.
//! 2. **Configuration:** Built-in defaults or a JSON config file, plus tracing overrides.
//! 3. **Reporting:** Text report by section or JSON; on a fatal error, the error,
//!    a register dump and the statistics gathered so far.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use mipsim_core::config::Config;
use mipsim_core::sim::Simulator;
use mipsim_core::sim::loader::ImageFormat;
use mipsim_core::soc::console::StdConsole;
use mipsim_core::stats::SECTIONS;

#[derive(Parser, Debug)]
#[command(
    name = "mipsim",
    author,
    version,
    about = "MIPS-subset simulator with pipeline hazard accounting",
    long_about = "Run a MIPS program image and report cycles, stalls, flushes and CPI for an 8-stage pipeline.\n\nExamples:\n  mipsim run prog.hex\n  mipsim run prog.bin --data data.bin --trace\n  mipsim run prog.hex --config fwd.json --json"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run a program image until the stop trap.
    Run {
        /// Program image, loaded at the text base.
        image: PathBuf,

        /// Data image, loaded at the data base.
        #[arg(long)]
        data: Option<PathBuf>,

        /// Image format (default: from the file extension; .hex/.txt are hex).
        #[arg(long, value_enum)]
        format: Option<Format>,

        /// JSON configuration file.
        #[arg(long)]
        config: Option<PathBuf>,

        /// Log a disassembly line per instruction.
        #[arg(long)]
        trace: bool,

        /// Print the register file when the run ends.
        #[arg(long)]
        dump_regs: bool,

        /// Log the pipeline slot diagram per instruction.
        #[arg(long)]
        pipe: bool,

        /// Print statistics as JSON.
        #[arg(long)]
        json: bool,

        /// Report sections to print (summary, hazards, mix).
        #[arg(long, value_delimiter = ',')]
        sections: Vec<String>,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Bin,
    Hex,
}

impl From<Format> for ImageFormat {
    fn from(f: Format) -> Self {
        match f {
            Format::Bin => Self::Binary,
            Format::Hex => Self::Hex,
        }
    }
}

/// Options for one `run` invocation.
struct RunArgs {
    image: PathBuf,
    data: Option<PathBuf>,
    format: Option<ImageFormat>,
    config: Option<PathBuf>,
    trace: bool,
    dump_regs: bool,
    pipe: bool,
    json: bool,
    sections: Vec<String>,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            image,
            data,
            format,
            config,
            trace,
            dump_regs,
            pipe,
            json,
            sections,
        } => cmd_run(RunArgs {
            image,
            data,
            format: format.map(Into::into),
            config,
            trace,
            dump_regs,
            pipe,
            json,
            sections,
        }),
    }
}

/// Installs the log subscriber; `RUST_LOG` wins over the CLI default.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}

/// Loads the images, runs to completion and prints the report.
///
/// Exits with status 1 on any load, configuration or fatal run error.
fn cmd_run(args: RunArgs) {
    init_tracing(args.trace || args.pipe);

    if let Some(bad) = args.sections.iter().find(|s| !SECTIONS.contains(&s.as_str())) {
        eprintln!("Error: unknown section '{bad}' (expected one of {SECTIONS:?})");
        process::exit(1);
    }

    let mut config = match args.config.as_deref().map(Config::from_file) {
        Some(Ok(c)) => c,
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        None => Config::default(),
    };
    config.general.trace_instructions |= args.trace;
    config.general.trace_pipeline |= args.pipe;

    let mut sim = match Simulator::new(&config, StdConsole::new()) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };

    if let Err(e) = sim.load_program(&args.image, args.format) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
    if let Some(data) = &args.data {
        if let Err(e) = sim.load_data(data, args.format) {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }

    let result = sim.run();
    println!();

    if let Err(e) = &result {
        eprintln!("[!] FATAL: {e}");
        sim.cpu.dump_registers();
    } else if args.dump_regs {
        sim.cpu.dump_registers();
    }

    let stats = sim.stats();
    if args.json {
        match serde_json::to_string_pretty(&stats.to_json()) {
            Ok(text) => println!("{text}"),
            Err(e) => eprintln!("Error: {e}"),
        }
    } else {
        stats.print_sections(&args.sections);
    }

    if result.is_err() {
        process::exit(1);
    }
}
