mod cli;

use motorsort::{
    config,
    library::{DestinationResolver, PlaceMode},
    processor::{BatchOptions, Processor},
    scanner::{self, Eligibility},
};
use motorsort_art::ImageMagick;
use motorsort_parser::{parse_override, Parser as FilenameParser, SprintWeekends};

use anyhow::{Context, Result};
use chrono::Datelike;
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "motorsort=trace,motorsort_parser=debug,motorsort_art=debug".to_string()
        } else {
            "motorsort=debug,motorsort_parser=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Run {
            dry_run,
            source,
            destination,
        } => run_batch(cli.config.as_deref(), dry_run, source, destination),
        Commands::Parse {
            filenames,
            json,
            sprint,
        } => parse_filenames(cli.config.as_deref(), &filenames, json, &sprint),
        Commands::CheckTools => check_tools(cli.config.as_deref()),
        Commands::Validate {
            config: config_path,
        } => {
            let path = config_path.or(cli.config);
            validate_config(path.as_deref())
        }
        Commands::Version => {
            println!("motorsort {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
    }
}

fn current_year() -> i32 {
    chrono::Local::now().year()
}

fn run_batch(
    config_path: Option<&Path>,
    dry_run: bool,
    source: Option<PathBuf>,
    destination: Option<PathBuf>,
) -> Result<()> {
    let mut config = config::load_config_or_default(config_path)?;
    if let Some(source) = source {
        config.library.source_path = source;
    }
    if let Some(destination) = destination {
        config.library.destination_path = destination;
    }

    let library = &config.library;
    tracing::info!(
        "Sorting {:?} into {:?}",
        library.source_path,
        library.destination_path
    );

    let eligibility = Eligibility::new(&library.file_prefixes, &library.file_types);
    let files = scanner::scan_source(&library.source_path, &eligibility)?;

    // sprint weekends must be known before the first order is resolved
    let overrides = config::sprint_overrides(&config)?;
    let sprints = SprintWeekends::detect(&files, &overrides, current_year());
    tracing::info!("Found {} sprint weekends", sprints.len());

    let options = BatchOptions {
        mode: PlaceMode::from_copy_flag(library.copy_files),
        dry_run,
    };
    let mut processor = Processor::new(
        FilenameParser::new(config.vocabulary.clone()),
        DestinationResolver::new(&library.destination_path),
        options,
    );

    if config.art.enabled && !dry_run {
        let generator = ImageMagick::from_config(&config.art.tool, config::art_assets(&config))
            .context("Artwork is enabled but ImageMagick is not available")?;
        processor = processor.with_art(Box::new(generator));
    }

    let summary = processor.run(&files, &sprints);

    let prefix = if dry_run { "[DRY RUN] " } else { "" };
    println!(
        "{}Placed: {}, existing: {}, skipped: {}, failed: {}",
        prefix, summary.placed, summary.existing, summary.skipped, summary.failed
    );
    if summary.art_created > 0 || summary.art_failed > 0 {
        println!(
            "Artwork created: {}, failed: {}",
            summary.art_created, summary.art_failed
        );
    }
    for error in &summary.errors {
        println!("  {}", error);
    }

    Ok(())
}

fn parse_filenames(
    config_path: Option<&Path>,
    filenames: &[String],
    json: bool,
    extra_sprints: &[String],
) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    let mut overrides = config::sprint_overrides(&config)?;
    for raw in extra_sprints {
        overrides.push(parse_override(raw)?);
    }
    let sprints = SprintWeekends::detect(filenames, &overrides, current_year());
    let parser = FilenameParser::new(config.vocabulary);

    let mut failed = 0;
    let mut records = Vec::new();

    for filename in filenames {
        let parsed = parser
            .parse(filename, &sprints)
            .and_then(|record| record.final_file_name().map(|name| (record, name)));

        match parsed {
            Ok((record, file_name)) => {
                if json {
                    records.push(serde_json::json!({
                        "record": record,
                        "folder": Path::new(&record.series).join(record.folder_name()),
                        "file_name": file_name,
                    }));
                } else {
                    println!("{}", filename);
                    println!("  Series:  {}", record.series);
                    println!("  Season:  {}", record.season);
                    println!("  Round:   {}", record.round);
                    println!("  Race:    {}", record.display_name());
                    println!("  Session: {} ({})", record.session, record.episode_code());
                    if !record.info.is_empty() {
                        println!("  Info:    {}", record.info);
                    }
                    println!(
                        "  Target:  {}/{}/{}",
                        record.series,
                        record.folder_name(),
                        file_name
                    );
                }
            }
            Err(e) => {
                failed += 1;
                eprintln!("✗ {}", e);
            }
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
    }

    if failed > 0 {
        anyhow::bail!("{} of {} filenames could not be parsed", failed, filenames.len());
    }

    Ok(())
}

fn check_tools(config_path: Option<&Path>) -> Result<()> {
    let config = config::load_config_or_default(config_path)?;

    println!("Checking external tools...\n");

    let tool = motorsort_art::check_tool(&config.art.tool);
    let status = if tool.available { "✓" } else { "✗" };

    print!("{} {}", status, tool.name);
    if let Some(ref version) = tool.version {
        print!(" ({})", version);
    }
    if let Some(ref path) = tool.path {
        print!(" - {}", path.display());
    }
    println!();

    println!();
    if tool.available {
        println!("All required tools are available!");
    } else if config.art.enabled {
        println!("ImageMagick is missing. Install it or disable [art] in the config.");
    } else {
        println!("ImageMagick is missing, but artwork is disabled.");
    }

    Ok(())
}

fn validate_config(path: Option<&Path>) -> Result<()> {
    let config = match path {
        Some(p) => {
            println!("Validating config: {:?}", p);
            let config = config::load_config(p)?;
            println!("✓ Configuration is valid");
            config
        }
        None => {
            println!("No config file specified, using defaults");
            config::Config::default()
        }
    };

    println!("  Source: {:?}", config.library.source_path);
    println!("  Destination: {:?}", config.library.destination_path);
    println!("  Prefixes: {}", config.library.file_prefixes.join(", "));
    println!("  File types: {}", config.library.file_types.join(", "));
    println!("  Copy files: {}", config.library.copy_files);
    println!("  Sprint rounds: {}", config.sprint.rounds.len());
    println!("  Artwork enabled: {}", config.art.enabled);
    println!("  Series: {}", config.vocabulary.series.len());
    println!("  Session keywords: {}", config.vocabulary.sessions.len());

    Ok(())
}
