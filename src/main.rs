//! # escpos CLI
//!
//! Command-line interface for ESC/POS IR files.
//!
//! ## Usage
//!
//! ```bash
//! # Print an IR file on a network printer (port defaults to 9100)
//! escpos print 192.168.1.50 --file job.ir
//!
//! # Same, reading IR from stdin
//! cat job.ir | escpos print 192.168.1.50:9100 --file -
//!
//! # Convert IR to raw bytes without a printer
//! escpos encode --file job.ir --output job.bin
//!
//! # Turn an image into ASCII-art IR
//! escpos convert cat.png --y-scale 2 > cat.ir
//!
//! # Write a sample job
//! escpos demo receipt > receipt.ir
//! ```
//!
//! Logs go to stderr; set `RUST_LOG` or pass `-v` for per-token tracing.

use clap::{Parser, Subcommand};
use std::fs::File;
use std::io::{self, BufRead, BufReader, BufWriter, Write};
use std::path::PathBuf;

use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use escpos_ir::{
    Builder, Converter, EscposError, NetworkTransport, PrinterConfig, Verbosity,
    preview::{self, AsciiArt},
    receipt,
};

/// escpos - ESC/POS printer utility
#[derive(Parser, Debug)]
#[command(name = "escpos")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Log every resolved IR token
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Printer profile (JSON); defaults to Epson TM-T88V
    #[arg(long, global = true, value_name = "FILE")]
    profile: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print an IR file to a network printer
    Print {
        /// Printer address, HOST or HOST:PORT (tip: look for it with `arp -a`)
        host: String,

        /// IR file path, or - for stdin
        #[arg(short, long)]
        file: String,
    },

    /// Convert an IR file to raw ESC/POS bytes
    Encode {
        /// IR file path, or - for stdin
        #[arg(short, long)]
        file: String,

        /// Output file (defaults to stdout)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },

    /// Convert an image to ASCII-art IR on stdout
    Convert {
        /// Image file (PNG, JPEG, ...)
        image: PathBuf,

        /// Invert the image
        #[arg(long)]
        invert: bool,

        /// Additional scale for the Y axis (multiplied with the X scale)
        #[arg(long, default_value = "1.0")]
        y_scale: f32,

        /// Characters per row (defaults to the profile's Font B width)
        #[arg(long)]
        columns: Option<u32>,
    },

    /// Write a sample IR job to stdout (omit NAME to list them)
    Demo {
        name: Option<String>,
    },
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default = if verbose {
        "escpos=debug,escpos_ir=debug"
    } else {
        "escpos=info,escpos_ir=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), EscposError> {
    let config = match &cli.profile {
        Some(path) => PrinterConfig::from_json_file(path)?,
        None => PrinterConfig::default(),
    };
    let verbosity = if cli.verbose {
        Verbosity::Trace
    } else {
        Verbosity::Quiet
    };
    let converter = Converter::new(verbosity);

    match cli.command {
        Commands::Print { host, file } => {
            let input = open_input(&file)?;
            let transport = NetworkTransport::connect(&host, &config)?;
            let peer = transport.peer_addr();

            let stats = converter.convert(input, BufWriter::new(transport))?;
            info!(
                %peer,
                lines = stats.lines,
                bytes = stats.bytes,
                "sent job to printer"
            );
        }

        Commands::Encode { file, output } => {
            let input = open_input(&file)?;
            let stats = match output {
                Some(path) => {
                    let out = File::create(&path).map_err(|e| {
                        EscposError::Io(io::Error::new(
                            e.kind(),
                            format!("Failed to create {}: {}", path.display(), e),
                        ))
                    })?;
                    converter.convert(input, BufWriter::new(out))?
                }
                None => converter.convert(input, io::stdout().lock())?,
            };
            info!(lines = stats.lines, bytes = stats.bytes, "encoded");
        }

        Commands::Convert {
            image,
            invert,
            y_scale,
            columns,
        } => {
            let img = preview::load(&image)?;
            let art = AsciiArt {
                columns: columns.unwrap_or(config.columns_font_b as u32),
                y_scale,
                invert,
            };

            let mut builder = Builder::new(BufWriter::new(io::stdout().lock()));
            builder.comment(format_args!("ASCII art: {}", image.display()))?;
            art.write_ir(&img, &mut builder)?;
            builder.into_inner().flush()?;
        }

        Commands::Demo { name } => {
            let Some(name) = name else {
                println!("Available sample jobs:");
                for name in receipt::list_receipts() {
                    println!("  {}", name);
                }
                return Ok(());
            };

            let mut builder = Builder::new(BufWriter::new(io::stdout().lock()));
            if !receipt::by_name(&name, &mut builder)? {
                return Err(EscposError::Config(format!(
                    "Unknown sample job '{}'. Run without a name to see available options.",
                    name
                )));
            }
            builder.into_inner().flush()?;
        }
    }

    Ok(())
}

/// Open an IR source: a file path, or `-` for stdin.
fn open_input(file: &str) -> Result<Box<dyn BufRead>, EscposError> {
    if file == "-" {
        return Ok(Box::new(io::stdin().lock()));
    }
    let f = File::open(file).map_err(|e| {
        EscposError::Io(io::Error::new(
            e.kind(),
            format!("Failed to open {}: {}", file, e),
        ))
    })?;
    Ok(Box::new(BufReader::new(f)))
}
