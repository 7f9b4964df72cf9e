use std::env;
use std::fs;

use log::{debug, error, info, warn};

use nary_huffman::build;

const DEFAULT_ARITY: usize = 12;

fn sample_dataset() -> Vec<(String, u64)> {
    [("a", 5), ("b", 9), ("c", 12), ("d", 13), ("e", 16), ("f", 45)]
        .into_iter()
        .map(|(s, w)| (s.to_string(), w))
        .collect()
}

/// Reads `symbol weight` pairs, one per line. Blank lines and `#` comments are skipped.
fn read_dataset(filepath: &str) -> std::io::Result<Vec<(String, u64)>> {
    info!("Reading weights from: {}", filepath);
    let content = fs::read_to_string(filepath)?;

    let mut dataset = Vec::new();
    for (lineno, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let mut fields = line.split_whitespace();
        let (Some(symbol), Some(weight), None) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("line {}: expected `symbol weight`", lineno + 1),
            ));
        };
        let weight = weight.parse::<u64>().map_err(|e| {
            std::io::Error::new(
                std::io::ErrorKind::InvalidData,
                format!("line {}: bad weight {:?}: {}", lineno + 1, weight, e),
            )
        })?;
        dataset.push((symbol.to_string(), weight));
    }

    debug!("Read {} weight entries", dataset.len());
    Ok(dataset)
}

fn main() {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let mut arity = DEFAULT_ARITY;
    let mut input_filepath = None;

    for arg in &args[1..] {
        if let Some(value) = arg.strip_prefix("--arity=") {
            match value.parse::<usize>() {
                Ok(n) => arity = n,
                Err(_) => {
                    error!("Usage: {} [input_file] [--arity=N]", args[0]);
                    std::process::exit(1);
                }
            }
        } else if input_filepath.is_none() {
            input_filepath = Some(arg.as_str());
        } else {
            warn!("Ignoring extra argument: {}", arg);
        }
    }

    let dataset = match input_filepath {
        Some(path) => match read_dataset(path) {
            Ok(dataset) => dataset,
            Err(e) => {
                error!("Failed to read weights: {}", e);
                std::process::exit(1);
            }
        },
        None => sample_dataset(),
    };

    info!("Building {}-ary code for {} entries", arity, dataset.len());
    let tree = match build(dataset, arity) {
        Ok(tree) => tree,
        Err(e) => {
            error!("Could not build Huffman tree: {}", e);
            std::process::exit(1);
        }
    };

    debug!("Tree of arity {} holds total weight {}", tree.arity(), tree.weight());
    for (symbol, code) in tree.codewords() {
        println!("{}: {}", symbol, code);
    }
}
