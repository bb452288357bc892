use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "cascade")]
#[command(about = "Print cascaded attribute values for every node of a document", long_about = None)]
pub struct Cli {
    /// Document to load (.xml, or .html/.htm)
    pub file: PathBuf,

    /// Attribute to resolve (repeatable); defaults to every attribute in the document
    #[arg(short, long = "attr", value_name = "NAME")]
    pub attrs: Vec<String>,

    /// Also report membership of this class
    #[arg(short, long, value_name = "NAME")]
    pub class: Option<String>,

    /// Parse as HTML regardless of extension
    #[arg(long)]
    pub html: bool,

    /// Recursion bound for a single lookup
    #[arg(long, default_value_t = cascade_resolve::MAX_DEPTH)]
    pub max_depth: usize,

    /// Child class key for a tag, e.g. menu=item (repeatable)
    #[arg(long = "child-class-key", value_name = "TAG=KEY", value_parser = parse_key_value)]
    pub child_class_keys: Vec<(String, String)>,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

fn parse_key_value(s: &str) -> Result<(String, String), String> {
    let (tag, key) = s
        .split_once('=')
        .ok_or_else(|| format!("expected TAG=KEY, got '{s}'"))?;
    if tag.is_empty() {
        return Err(format!("empty tag in '{s}'"));
    }
    Ok((tag.to_string(), key.to_string()))
}
