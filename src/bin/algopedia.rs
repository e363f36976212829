use anyhow::Context;
use clap::Parser;

/// Generate the step sequence for an algorithm walkthrough as JSON.
#[derive(Parser)]
#[command(version, about)]
struct Args {
    /// Operation id, e.g. bubble-sort, binary-search, dijkstra.
    operation: String,
    /// Comma-separated input values.
    #[arg(default_value = "")]
    input: String,
    /// Pretty-print the JSON output.
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let steps = algopedia::generate(&args.operation, &args.input);
    let json = if args.pretty {
        serde_json::to_string_pretty(&steps)
    } else {
        serde_json::to_string(&steps)
    }
    .context("serializing steps")?;
    println!("{json}");
    Ok(())
}
