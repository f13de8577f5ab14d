use std::{
    error::Error,
    fs,
    io::{self, BufWriter, Write},
    path::PathBuf,
};

use adjgraph::{AnyGraph, Graph, Representation, builder::GraphBuilder};
use clap::{Parser, Subcommand};
use log::info;

#[derive(Parser)]
#[command(version, about = "Inspect graphs read from edge-list files")]
struct Cli {
    /// Storage layout: 'set' or 'matrix'
    #[arg(short, long, default_value_t = Representation::AdjacencySet)]
    representation: Representation,

    /// Treat edges as one-way
    #[arg(short, long)]
    directed: bool,

    /// Number of vertices. Defaults to the largest id in <IN_FILE> plus one.
    #[arg(short = 'n', long)]
    vertices: Option<usize>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Clone)]
enum Commands {
    /// Print every edge as 'from --> to'
    Display { in_file: PathBuf },

    /// Print the adjacent vertices of every vertex
    Adjacent { in_file: PathBuf },

    /// Print the in-degree of every vertex
    Indegree { in_file: PathBuf },

    /// Print the weight of the edge <V1> -> <V2>, 0 if there is none
    Weight {
        in_file: PathBuf,
        v1: usize,
        v2: usize,
    },
}

impl Commands {
    fn in_file(&self) -> &PathBuf {
        match self {
            Self::Display { in_file }
            | Self::Adjacent { in_file }
            | Self::Indegree { in_file }
            | Self::Weight { in_file, .. } => in_file,
        }
    }
}

fn load(cli: &Cli) -> Result<AnyGraph, Box<dyn Error>> {
    let in_file = cli.command.in_file();
    info!("Reading edges from {:?}", in_file);
    let text = fs::read_to_string(in_file)?;

    let mut builder = GraphBuilder::new()
        .directed(cli.directed)
        .representation(cli.representation)
        .string(&text)?;
    if let Some(vertices) = cli.vertices {
        builder = builder.vertex_count(vertices);
    }
    let graph = builder.build()?;
    info!(
        "Loaded {} graph: {} vertices, {} edges",
        graph.representation(),
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(graph)
}

fn write_adjacent<G: Graph, W: Write>(graph: &G, writer: &mut W) -> Result<(), Box<dyn Error>> {
    for v in 0..graph.vertex_count() {
        let adjacent = graph
            .adjacent_vertices(v)?
            .iter()
            .map(usize::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        writeln!(writer, "{}: {}", v, adjacent)?;
    }
    Ok(())
}

fn write_indegrees<G: Graph, W: Write>(graph: &G, writer: &mut W) -> Result<(), Box<dyn Error>> {
    for v in 0..graph.vertex_count() {
        writeln!(writer, "{}: {}", v, graph.indegree(v)?)?;
    }
    Ok(())
}

fn run<W: Write>(cli: &Cli, writer: &mut W) -> Result<(), Box<dyn Error>> {
    let graph = load(cli)?;

    match &cli.command {
        Commands::Display { .. } => graph.write_edges(writer)?,
        Commands::Adjacent { .. } => write_adjacent(&graph, writer)?,
        Commands::Indegree { .. } => write_indegrees(&graph, writer)?,
        Commands::Weight { v1, v2, .. } => {
            writeln!(writer, "{}", graph.edge_weight(*v1, *v2)?)?;
        }
    }
    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let stdout = io::stdout();
    let mut writer = BufWriter::new(stdout.lock());
    run(&cli, &mut writer)?;
    writer.flush()?;
    Ok(())
}
