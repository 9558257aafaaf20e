//! WaveTikZ - WaveDrom to TikZ compiler
//!
//! Compiles WaveDrom timing diagrams into TikZ drawing macros.
//!
//! # Usage
//!
//! ```bash
//! wavetikz preamble > wavetikz.tex
//! wavetikz render timing.json -o timing-body.tex
//! wavetikz signal 'p.....' --name clk --standalone | pdflatex
//! ```
//!
//! Logging goes to stderr and is controlled by `RUST_LOG` (default `warn`).

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use wavetikz::{
    compiler::CompilerConfig,
    error::Result,
    output::write_output,
    render::tikz,
    Diagram, DiagramConfig, SignalSpec, DEFAULT_PERIOD, DEFAULT_PHASE, DEFAULT_ROW_SPACING,
};

/// WaveDrom timing diagram to TikZ compiler
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,

    /// Slant width of a full low-to-high edge, in brick widths
    #[arg(long, global = true, default_value_t = wavetikz::compiler::DEFAULT_TRANSITION_WIDTH)]
    transition_width: f64,

    /// Width of slow (curved) edges, in brick widths
    #[arg(long, global = true, default_value_t = wavetikz::compiler::DEFAULT_SLOW_TRANSITION_WIDTH)]
    slow_transition_width: f64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the TikZ macro library
    Preamble,

    /// Compile a single wave string
    Signal {
        /// Wave string, one code per timeslot
        #[arg(value_name = "WAVE")]
        wave: String,

        /// Signal name
        #[arg(short, long, default_value = "")]
        name: String,

        /// Phase offset, in timeslots
        #[arg(long, default_value_t = DEFAULT_PHASE, allow_hyphen_values = true)]
        phase: f64,

        /// Period multiplier
        #[arg(long, default_value_t = DEFAULT_PERIOD, allow_hyphen_values = true)]
        period: f64,

        /// Node string, one character per timeslot
        #[arg(long, default_value = "")]
        node: String,

        /// Bus data labels, in order
        #[arg(short, long, num_args = 1..)]
        data: Vec<String>,

        /// Emit a complete LaTeX document
        #[arg(long)]
        standalone: bool,
    },

    /// Compile a WaveDrom JSON (or YAML) document
    Render {
        /// Path to the diagram document
        #[arg(value_name = "INPUT")]
        input: PathBuf,

        /// Output file (stdout if omitted)
        #[arg(short, long, value_name = "OUTPUT")]
        output: Option<PathBuf>,

        /// Emit a complete LaTeX document
        #[arg(long)]
        standalone: bool,

        /// Vertical distance between rows
        #[arg(long, default_value_t = DEFAULT_ROW_SPACING)]
        row_spacing: f64,

        /// Omit the timeslot gridlines
        #[arg(long)]
        no_grid: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let compiler = CompilerConfig::new()
        .with_transition_width(args.transition_width)
        .with_slow_transition_width(args.slow_transition_width);

    match args.command {
        Command::Preamble => write_output(None, tikz::PREAMBLE),

        Command::Signal {
            wave,
            name,
            phase,
            period,
            node,
            data,
            standalone,
        } => {
            let spec = SignalSpec::new(wave)
                .with_name(name)
                .with_phase(phase)
                .with_period(period)
                .with_node(node)
                .with_data(data);

            let config = DiagramConfig::new()
                .with_gridlines(false)
                .with_compiler(compiler);
            let text = Diagram::from(spec).to_tikz(&config, standalone)?;
            write_output(None, &text)
        }

        Command::Render {
            input,
            output,
            standalone,
            row_spacing,
            no_grid,
        } => {
            let diagram = Diagram::load(&input)?;
            info!(
                input = %input.display(),
                rows = diagram.signals().len(),
                "loaded diagram"
            );

            let config = DiagramConfig::new()
                .with_row_spacing(row_spacing)
                .with_gridlines(!no_grid)
                .with_compiler(compiler);
            let text = diagram.to_tikz(&config, standalone)?;
            write_output(output.as_deref(), &text)
        }
    }
}
