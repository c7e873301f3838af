//! Azure Resource Naming CLI
//!
//! Derives constraint-compliant resource names for the hub-and-spoke
//! resource set from naming components, a config file, or both.

use anyhow::{bail, Context, Result};
use azname::config_file::{find_config, load_config, FileConfig};
use azname::{report, NameCatalog, Namer, NamingComponents, NamingSpec};
use clap::Parser;
use std::collections::BTreeMap;
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "azname")]
#[command(author = "Fellow <engineering@fellow.app>")]
#[command(version)]
#[command(about = "Derive constraint-compliant Azure resource names", long_about = None)]
struct Args {
	/// Organization or workload prefix (e.g. neko)
	#[arg(short, long)]
	prefix: Option<String>,

	/// Instance suffix (e.g. 01)
	#[arg(short, long)]
	suffix: Option<String>,

	/// Environment token (e.g. prod)
	#[arg(short, long)]
	environment: Option<String>,

	/// Region token (e.g. weu)
	#[arg(short, long)]
	region: Option<String>,

	/// Comma-separated resource-type overrides (key=token)
	#[arg(long, value_name = "KEY=TOKEN,...")]
	types: Option<String>,

	/// Comma-separated list of variant suffixes
	#[arg(long, value_name = "SUFFIX,...")]
	name_suffixes: Option<String>,

	/// Only emit the entry for one resource-type key
	#[arg(short = 't', long = "type", value_name = "KEY")]
	type_key: Option<String>,

	/// Path to a config file (skips discovery)
	#[arg(short, long)]
	config: Option<PathBuf>,

	/// Ignore config files entirely
	#[arg(long)]
	no_config: bool,

	/// Disambiguate truncated or colliding names with a hash fragment
	#[arg(long)]
	hash_suffix: bool,

	/// Output format
	#[arg(short, long, default_value = "text", value_parser = ["text", "json"])]
	output: String,

	/// Write the report to a file instead of stdout
	#[arg(long, value_name = "FILE")]
	out: Option<PathBuf>,

	/// Print debug detail to stderr
	#[arg(short, long)]
	verbose: bool,
}

fn main() -> Result<()> {
	let args = Args::parse();

	let default_filter = if args.verbose { "azname=debug" } else { "azname=warn" };
	let subscriber = tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
		)
		.with_writer(std::io::stderr)
		.finish();
	tracing::subscriber::set_global_default(subscriber)?;

	// Find a config file unless told not to
	let file_config = if args.no_config {
		FileConfig::default()
	} else if let Some(ref path) = args.config {
		tracing::debug!(path = %path.display(), "loading config");
		load_config(path)?
	} else {
		let cwd = env::current_dir()?;
		match find_config(&cwd) {
			Some(path) => {
				tracing::debug!(path = %path.display(), "discovered config");
				load_config(&path)?
			}
			None => FileConfig::default(),
		}
	};

	// CLI flags take precedence over config fields
	let components = NamingComponents {
		prefix: args.prefix.or(file_config.prefix),
		suffix: args.suffix.or(file_config.suffix),
		environment: args.environment.or(file_config.environment),
		region: args.region.or(file_config.region),
	};

	let custom_types = match args.types.as_deref() {
		Some(pairs) => parse_type_overrides(pairs)?,
		None => file_config.custom_types,
	};

	let name_suffixes = match args.name_suffixes.as_deref() {
		Some(list) => list
			.split(',')
			.map(|s| s.trim().to_string())
			.filter(|s| !s.is_empty())
			.collect(),
		None => file_config.name_suffixes,
	};

	let spec = NamingSpec {
		components,
		custom_types,
		name_suffixes,
		hash_suffix: args.hash_suffix,
	};

	let namer = Namer::new(spec)?;

	// A single-key request still renders through the catalog shape
	let catalog = match args.type_key.as_deref() {
		Some(key) => {
			let entry = namer.name_for(key)?;
			let mut catalog = NameCatalog::default();
			catalog.entries.insert(key.to_string(), entry);
			catalog
		}
		None => namer.generate(),
	};

	let rendered = match args.output.as_str() {
		"json" => {
			let mut json = report::render_json(&catalog).context("Failed to render JSON report")?;
			json.push('\n');
			json
		}
		_ => report::render_text(&catalog),
	};

	match args.out {
		Some(ref path) => {
			report::write_report(path, &rendered)
				.with_context(|| format!("Failed to write {}", path.display()))?;
		}
		None => print!("{}", rendered),
	}

	Ok(())
}

/// Parse comma-separated `key=token` overrides.
fn parse_type_overrides(pairs: &str) -> Result<BTreeMap<String, String>> {
	let mut overrides = BTreeMap::new();

	for pair in pairs.split(',').map(str::trim).filter(|s| !s.is_empty()) {
		let Some((key, token)) = pair.split_once('=') else {
			bail!(
				"Invalid type override '{}'.\n\
				 Expected key=token, e.g. --types custom_vm=xvm,fortinet_firewall=fgfw",
				pair
			);
		};
		overrides.insert(key.trim().to_string(), token.trim().to_string());
	}

	Ok(overrides)
}
