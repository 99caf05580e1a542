use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::Parser;
use xml_assert::inspect::render_tree;
use xml_assert::profile::load_profile;
use xml_assert::report::{render_differences, render_summary, render_verdict};
use xml_assert_core::{
    compare, detect, filter_differences, format_json, normalize, parse_file, CompareConfig,
};

mod cli;

use cli::{AssertArgs, Cli, Command, DiffArgs, InspectArgs, OutputFormat};

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Assert(args) => run_assert(args),
        Command::Diff(args) => run_diff(args),
        Command::Inspect(args) => run_inspect(args),
    }
}

fn run_assert(args: AssertArgs) -> Result<()> {
    let config = resolve_config(
        args.profile.as_deref(),
        args.no_ignore_empty_nodes,
        args.no_ignore_prefixes,
        args.no_ignore_order,
    )?;

    let expected = fs::read_to_string(&args.expected)
        .with_context(|| format!("failed to read {}", args.expected.display()))?;
    let actual = fs::read_to_string(&args.actual)
        .with_context(|| format!("failed to read {}", args.actual.display()))?;

    let result = compare(&expected, &actual, &config)?;

    match args.format {
        OutputFormat::Text => {
            if args.quiet {
                println!("{}", render_summary(&result.differences));
            } else if !result.differences.is_empty() {
                println!("{}", render_differences(&result.differences));
                println!("{}", render_summary(&result.differences));
            }
            println!("{}", render_verdict(result.passed));
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
    }

    if !result.passed {
        bail!(
            "assertion failed: {} difference(s)",
            result.differences.len()
        );
    }
    Ok(())
}

fn run_diff(args: DiffArgs) -> Result<()> {
    let config = resolve_config(
        args.profile.as_deref(),
        args.no_ignore_empty_nodes,
        args.no_ignore_prefixes,
        args.no_ignore_order,
    )?;

    let expected = parse_file(&args.expected)
        .with_context(|| format!("failed to parse {}", args.expected.display()))?;
    let actual = parse_file(&args.actual)
        .with_context(|| format!("failed to parse {}", args.actual.display()))?;

    let expected = normalize(expected, &config);
    let actual = normalize(actual, &config);
    let differences = filter_differences(detect(&expected, &actual), &config);

    if args.summary {
        println!("{}", render_summary(&differences));
        return Ok(());
    }

    match args.format {
        OutputFormat::Text => {
            if differences.is_empty() {
                println!("documents are semantically equal");
            } else {
                println!("{}", render_differences(&differences));
            }
        }
        OutputFormat::Json => println!("{}", format_json(&differences)),
    }

    Ok(())
}

fn run_inspect(args: InspectArgs) -> Result<()> {
    let node = parse_file(&args.file)
        .with_context(|| format!("failed to parse {}", args.file.display()))?;

    let node = if args.prune_empty {
        normalize(
            node,
            &CompareConfig {
                ignore_empty_nodes: true,
                ..CompareConfig::strict()
            },
        )
    } else {
        node
    };

    print!("{}", render_tree(&node, args.depth));
    Ok(())
}

fn resolve_config(
    profile: Option<&Path>,
    no_ignore_empty_nodes: bool,
    no_ignore_prefixes: bool,
    no_ignore_order: bool,
) -> Result<CompareConfig> {
    let mut config: CompareConfig = match profile {
        Some(path) => load_profile(path)
            .with_context(|| format!("failed to load profile {}", path.display()))?
            .into(),
        None => CompareConfig::default(),
    };

    if no_ignore_empty_nodes {
        config.ignore_empty_nodes = false;
    }
    if no_ignore_prefixes {
        config.ignore_namespace_prefixes = false;
    }
    if no_ignore_order {
        config.ignore_child_order = false;
    }

    Ok(config)
}
