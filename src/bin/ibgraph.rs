//! ibgraph CLI — turn an ibnetdiscover dump into dot/gexf graphs.
//!
//! Usage:
//!   ibgraph -f infiniband.topo [-e] [-o] [-d] [-c] [-r] [-p prefix]

use clap::{Parser, ValueEnum};
use ibgraph::{convert, ConvertRequest, ExportOptions, Palette};
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(
    name = "ibgraph",
    version,
    about = "Convert an InfiniBand topology dump into dot and gexf graphs"
)]
struct Cli {
    /// Topology file to load the data from (ibnetdiscover output)
    #[arg(short = 'f', long = "topology-file", value_name = "TOPOLOGY")]
    topology_file: PathBuf,

    /// Also export a gexf file, for Gephi
    #[arg(short = 'e', long)]
    export_gexf: bool,

    /// Optimize colors for plotting on a black background
    #[arg(short = 'o', long = "optimized-for-black-bg")]
    black_bg: bool,

    /// Draw individual ports on each node using record shapes (dot only)
    #[arg(short = 'd', long)]
    detailed_topo: bool,

    /// Group hosts connected to the same switch into clusters (dot only)
    #[arg(short = 'c', long)]
    use_clusters: bool,

    /// Render the dot file with neato and save it as PDF
    #[arg(short = 'r', long)]
    render_file: bool,

    /// Output path without extension (default: input file name in the current directory)
    #[arg(short = 'p', long, value_name = "PREFIX")]
    output_prefix: Option<PathBuf>,

    /// YAML file overriding palette colours
    #[arg(long, value_name = "PATH")]
    palette: Option<PathBuf>,

    /// Log level
    #[arg(short = 'l', long, value_enum, default_value_t = LogLevel::Info)]
    loglevel: LogLevel,

    /// Disable logging in the console
    #[arg(short = 'q', long)]
    quiet: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => Level::ERROR,
            LogLevel::Warn => Level::WARN,
            LogLevel::Info => Level::INFO,
            LogLevel::Debug => Level::DEBUG,
            LogLevel::Trace => Level::TRACE,
        }
    }
}

fn init_logging(cli: &Cli) {
    if cli.quiet {
        return;
    }
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::from(cli.loglevel))
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Warning: logging disabled: {}", e);
    }
}

fn build_request(cli: &Cli) -> Result<ConvertRequest, String> {
    let mut palette = Palette::for_background(cli.black_bg);
    if let Some(path) = &cli.palette {
        palette = palette.load_overrides(path).map_err(|e| e.to_string())?;
    }

    let source_name = cli
        .topology_file
        .canonicalize()
        .unwrap_or_else(|_| cli.topology_file.clone());
    let options = ExportOptions::new()
        .with_black_background(cli.black_bg)
        .with_detailed(cli.detailed_topo)
        .with_clusters(cli.use_clusters)
        .with_palette(palette)
        .with_source_name(source_name.to_string_lossy())
        .with_date(chrono::Local::now().date_naive());

    let mut request = ConvertRequest::new(&cli.topology_file)
        .with_gexf(cli.export_gexf)
        .with_render(cli.render_file)
        .with_options(options);
    if let Some(prefix) = &cli.output_prefix {
        request = request.with_output_prefix(prefix);
    }
    Ok(request)
}

fn gephi_hint(gexf: &std::path::Path) {
    info!(
        "If you want to generate a beautiful graph with Gephi:\n\
         \x20 1. Load the file '{}' in Gephi.\n\
         \x20 2. In the 'Overview' tab choose a placement layout ('ForceAtlas 2' works well).\n\
         \x20 3. Tune as needed and run the layout until the placement settles, then stop it.\n\
         \x20 4. In the 'Preview' tab press 'Refresh'.\n\
         \x20 5. Under 'Edges', untick 'Curved' and set the edge 'Color' from 'mixed' to 'original'.\n\
         \x20 6. Choose a black background if you used --optimized-for-black-bg (-o), and refresh again.\n\
         \x20 7. Export with 'SVG/PDF/PNG' once you are satisfied.",
        gexf.display()
    );
}

fn main() {
    let cli = Cli::parse();
    init_logging(&cli);
    info!("ibgraph v{} is running", ibgraph::VERSION);

    let request = match build_request(&cli) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    match convert(&request) {
        Ok(report) => {
            report.log_summary();
            if let Some(gexf) = &report.gexf_path {
                gephi_hint(gexf);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
