//! Cascade - print cascaded attribute values for a document

mod args;
mod report;

use anyhow::Context;
use cascade_dom::{AttrTree, LoadOptions};
use cascade_markup::Format;
use cascade_resolve::{Resolver, ResolverConfig};
use clap::Parser;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = args::Cli::parse();

    let format = if cli.html {
        Format::Html
    } else {
        Format::from_path(&cli.file)
    };
    let root = cascade_markup::load_file_as(&cli.file, format)
        .with_context(|| format!("failed to load {}", cli.file.display()))?;

    let mut options = LoadOptions::new();
    for (tag, key) in cli.child_class_keys {
        options = options.with_child_class_key(tag, key);
    }
    let tree = AttrTree::load_with_options(&root, options);
    tracing::info!("Loaded {} nodes from {}", tree.len(), cli.file.display());

    let config = ResolverConfig {
        max_depth: cli.max_depth,
    };
    let resolver = Resolver::with_config(&tree, &config);

    let attrs = if cli.attrs.is_empty() {
        report::default_attrs(&tree)
    } else {
        cli.attrs
    };
    let reports = report::build(&resolver, &attrs, cli.class.as_deref());

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
    } else {
        print!("{}", report::render_text(&reports));
    }
    Ok(())
}
