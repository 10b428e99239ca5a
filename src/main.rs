//! Matrix Hub command-line front end.
//!
//! Usage:
//!   matrixhub list [query]    - print the filtered/sorted listing
//!   matrixhub detail <id>     - print one record with its download commands
//!   matrixhub manifest        - print the catalog manifest as JSON
//!
//! The optional query argument is a raw query string using the listing keys,
//! e.g. "type=DFT&minSize=500&sortCriteria=size&sortOrder=desc".

use anyhow::{anyhow, bail, Result};

use matrixhub::catalog::{Catalog, DetailView, MatrixRecord};
use matrixhub::config::Config;
use matrixhub::data::{analyze_catalog, load_catalog};
use matrixhub::download;
use matrixhub::logging;
use matrixhub::sync::ListingSession;

fn main() -> Result<()> {
    let cfg = Config::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    match args.first().map(String::as_str) {
        Some("list") => cmd_list(&cfg, args.get(1).map(String::as_str).unwrap_or("")),
        Some("detail") => {
            let id = args
                .get(1)
                .ok_or_else(|| anyhow!("usage: matrixhub detail <id>"))?;
            cmd_detail(&cfg, id)
        }
        Some("manifest") => cmd_manifest(&cfg),
        Some(other) => bail!("unknown command: {}", other),
        None => bail!("usage: matrixhub <list|detail|manifest> ..."),
    }
}

fn open_catalog(cfg: &Config) -> Result<Catalog> {
    let catalog = load_catalog(&cfg.catalog_path).map_err(|e| anyhow!(e))?;
    let hash = matrixhub::data::file_sha256(&cfg.catalog_path).map_err(|e| anyhow!(e))?;
    logging::log_catalog_loaded(&cfg.catalog_path.display().to_string(), catalog.len(), &hash);
    Ok(catalog)
}

fn cmd_list(cfg: &Config, query: &str) -> Result<()> {
    let catalog = open_catalog(cfg)?;
    let session = ListingSession::new("cli", query);
    let view = session.view(&catalog);

    println!(
        "{}",
        matrixhub::query::listing_url(&cfg.listing_path, session.criteria())
    );
    println!(
        "{:<24} {:<14} {:<12} {:<14} {:>10} {:<10} {:<12} {:>6}",
        "NAME", "TYPE", "SOFTWARE", "DATA TYPE", "N", "SYSTEM", "SYMMETRY", "NEV"
    );
    for m in &view {
        println!(
            "{:<24} {:<14} {:<12} {:<14} {:>10} {:<10} {:<12} {:>6}",
            m.name, m.matrix_type, m.software, m.data_type, m.n, m.system, m.symmetry_type, m.nev
        );
    }
    if view.is_empty() {
        println!("No matrices found matching your criteria.");
    }
    Ok(())
}

fn cmd_detail(cfg: &Config, id: &str) -> Result<()> {
    let catalog = open_catalog(cfg)?;
    match catalog.detail(id) {
        DetailView::Found(record) => print_record(record),
        DetailView::NotFound { id } => {
            // A presentation state, not a failure.
            println!("Matrix Not Found");
            println!("The requested matrix '{}' could not be found.", id);
        }
    }
    Ok(())
}

fn print_record(record: &MatrixRecord) {
    println!("{}", record.name);
    println!("{}", record.description);
    println!();
    println!("  Size:          {}", record.size);
    println!("  Type:          {}", record.matrix_type);
    println!("  System:        {}", record.system);
    println!("  Symmetry Type: {}", record.symmetry_type);
    println!("  Software:      {}", record.software);
    println!("  Data Type:     {}", record.data_type);
    println!("  Format:        {}", record.format);
    println!("  nev:           {}", record.nev);
    if let Some(nex) = record.nex {
        println!("  Nex:           {}", nex);
    }
    if let Some(count) = record.num_correlated_systems {
        println!("  Correlated systems: {}", count);
    }
    if !record.properties.is_empty() {
        println!("  Properties:    {}", record.properties.join(", "));
    }
    println!();
    println!("Download instructions (requires wget):");
    let commands = download::instructions(record);
    println!("  {}", commands.binary);
    if let Some(metadata) = commands.metadata {
        println!("  {}", metadata);
    }
    if let Some(sequence) = commands.sequence {
        println!("  {}", sequence);
    }
}

fn cmd_manifest(cfg: &Config) -> Result<()> {
    let (manifest, report) = analyze_catalog(&cfg.catalog_path).map_err(|e| anyhow!(e))?;
    for warning in &report.warnings {
        logging::log(
            logging::Level::Warn,
            logging::Domain::Catalog,
            "catalog_warning",
            logging::obj(&[("msg", logging::v_str(warning))]),
        );
    }
    println!("{}", serde_json::to_string_pretty(&manifest)?);
    Ok(())
}
