use clap::{Parser, Subcommand};
use henkan::prelude::*;
use std::fs;

/// File-based front end for the conversion engine. All real work happens in
/// the library; this binary only shuttles JSON between files and stdout.
#[derive(Parser)]
#[command(name = "henkan-cli", version, about = "Convert between flow-builder graphs and ASL definitions")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Serialize a graph JSON file into an ASL definition
    Export {
        /// Path to a JSON file with `nodes` and `edges` arrays
        graph: String,
        /// Write the definition here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
    /// Lay out an ASL definition file as a graph JSON document
    Import {
        /// Path to an ASL definition JSON file
        definition: String,
        /// Write the graph here instead of stdout
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Export { graph, output } => {
            let text = fs::read_to_string(&graph)?;
            let graph: FlowGraph = serde_json::from_str(&text)?;
            let definition = graph_to_definition(&graph.nodes, &graph.edges)?;
            write_output(output, definition.to_json_pretty())?;
        }
        Command::Import { definition, output } => {
            let text = fs::read_to_string(&definition)?;
            let definition = parse_definition(&text)?;
            let mut ids = IdGenerator::new();
            let graph = definition_to_graph(&definition, &mut ids)?;
            write_output(output, serde_json::to_string_pretty(&graph)?)?;
        }
    }

    Ok(())
}

fn write_output(path: Option<String>, contents: String) -> std::io::Result<()> {
    match path {
        Some(path) => fs::write(path, contents),
        None => {
            println!("{}", contents);
            Ok(())
        }
    }
}
