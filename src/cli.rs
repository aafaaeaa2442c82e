// src/cli.rs
use std::{env, fs, path::PathBuf};

use color_eyre::eyre::{bail, eyre, Result};

use crate::config::options::{Mode, RunOptions};
use crate::core::net::HttpFetcher;
use crate::csv::{self, Delim};
use crate::reconcile::ExpectedStatuses;
use crate::report::DataSet;
use crate::{scrape, store};

pub fn run() -> Result<()> {
    let mut opts = RunOptions::new();
    parse_cli(&mut opts)?;

    logf!("scraper started: {:?}", opts.mode);

    if opts.clear_cache {
        store::clear_pages()?;
        logf!("page cache cleared");
    }

    let fetch = HttpFetcher::new();
    let ds = match opts.mode {
        Mode::Pep => scrape::pep_report(&fetch, &ExpectedStatuses::default())?,
        Mode::LatestVersions => scrape::latest_versions(&fetch)?,
        Mode::WhatsNew => scrape::whats_new(&fetch)?,
    };

    match &opts.out {
        Some(path) => {
            if let Some(parent) = path.parent() {
                if !parent.as_os_str().is_empty() {
                    fs::create_dir_all(parent)?;
                }
            }
            fs::write(path, csv::dataset_to_string(&ds, opts.format))?;
            println!("Results written to {}", path.display());
        }
        None => print_table(&ds),
    }

    logf!("scraper finished");
    Ok(())
}

fn parse_cli(opts: &mut RunOptions) -> Result<()> {
    let mut args = env::args().skip(1);
    while let Some(a) = args.next() {
        match a.as_str() {
            "pep" => opts.mode = Mode::Pep,
            "latest-versions" => opts.mode = Mode::LatestVersions,
            "whats-new" => opts.mode = Mode::WhatsNew,
            "-c" | "--clear-cache" => opts.clear_cache = true,
            "-o" | "--out" => {
                opts.out = Some(PathBuf::from(
                    args.next().ok_or_else(|| eyre!("Missing output path"))?,
                ));
            }
            "--format" => {
                let v = args.next().ok_or_else(|| eyre!("Missing value for --format"))?;
                opts.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => bail!("Unknown format: {}", other),
                };
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => bail!("Unknown arg: {}", a),
        }
    }
    Ok(())
}

/// Aligned columns on stdout; header row first when present.
fn print_table(ds: &DataSet) {
    let mut widths: Vec<usize> = Vec::new();
    for row in ds.headers.iter().chain(ds.rows.iter()) {
        for (i, cell) in row.iter().enumerate() {
            let w = cell.chars().count();
            if widths.len() <= i {
                widths.push(w);
            } else if widths[i] < w {
                widths[i] = w;
            }
        }
    }

    for row in ds.headers.iter().chain(ds.rows.iter()) {
        let mut line = s!();
        for (i, cell) in row.iter().enumerate() {
            if i > 0 {
                line.push_str("  ");
            }
            line.push_str(cell);
            if i + 1 < row.len() {
                for _ in cell.chars().count()..widths[i] {
                    line.push(' ');
                }
            }
        }
        println!("{line}");
    }
}
