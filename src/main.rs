use std::path::PathBuf;

use structopt::StructOpt;
use tracing::{info, Level};

use bridge_components::algorithm::{self, recursive, Bridge, Component};
use bridge_components::graph::parse_gfa;
use bridge_components::{GraphError, NamedGraph};

#[derive(StructOpt, Debug)]
#[structopt(
    name = "bridge-components",
    about = "Finds the connected components and bridges of the graph in a GFA file"
)]
struct Opt {
    /// GFA file; links are treated as undirected edges between segments
    #[structopt(parse(from_os_str))]
    input: PathBuf,

    /// Use the recursive traversal instead of the explicit stack
    #[structopt(long)]
    recursive: bool,

    /// Only report bridges
    #[structopt(long)]
    bridges_only: bool,

    /// Only report connected components
    #[structopt(long)]
    components_only: bool,

    /// Log verbosity, repeat for more
    #[structopt(short, long, parse(from_occurrences))]
    verbose: u8,
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
        .with_writer(std::io::stderr)
        .init();
}

fn print_names(named: &NamedGraph, vertices: &[usize]) {
    for &v in vertices {
        if let Some(name) = named.name(v) {
            print!(" {}", name);
        }
    }
}

fn main() -> Result<(), GraphError> {
    let opt = Opt::from_args();
    init_logging(opt.verbose);

    let gfa = parse_gfa(&opt.input)?;

    info!(input = %opt.input.display(), "parsed GFA");

    let named = NamedGraph::from_gfa(&gfa);
    let graph = &named.graph;

    println!("# segments: {}", gfa.segments.len());
    println!("# links: {}", gfa.links.len());
    println!("# nodes: {}", graph.vertex_count());
    println!("# edges: {}", graph.edge_count());

    if !opt.bridges_only {
        let comps: Vec<Component> = if opt.recursive {
            recursive::connected_components(graph)
        } else {
            algorithm::connected_components(graph)
        };

        println!("# of components: {}", comps.len());
        println!("connected: {}", graph.is_connected());

        for comp in comps.iter() {
            print!("component:");
            print_names(&named, comp);
            println!();
        }
    }

    if !opt.components_only {
        let bridges: Vec<Bridge> = if opt.recursive {
            recursive::bridges(graph)
        } else {
            algorithm::bridges(graph)
        };

        println!("# of bridges: {}", bridges.len());

        for (u, v) in bridges {
            print!("bridge:");
            print_names(&named, &[u, v]);
            println!();
        }
    }

    Ok(())
}
