mod cli;

use std::io::Write;

use clap::Parser;
use eyre::WrapErr;
use serde::Serialize;

use golabel_core::{Label, LabelResolver, ResolverConfig, StructuredResolver};

/// One line of `--json` output.
#[derive(Serialize)]
struct ResolvedImport<'a> {
    import_path: &'a str,
    label: String,
    #[serde(flatten)]
    resolved: &'a Label,
}

fn main() -> eyre::Result<()> {
    let args = cli::Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .init();

    let config = ResolverConfig::new(args.root_prefix, args.path_root);
    config.validate().wrap_err("invalid resolver configuration")?;

    let resolver: Box<dyn LabelResolver> = Box::new(StructuredResolver::from_config(&config));
    tracing::info!(
        root_prefix = %config.root_prefix,
        path_root = %config.path_root,
        dir = %args.dir,
        "resolving {} import(s)",
        args.imports.len()
    );

    let mut stdout = std::io::stdout().lock();
    for import_path in &args.imports {
        let label = resolver
            .resolve(import_path, &args.dir)
            .wrap_err_with(|| format!("resolve import `{import_path}` from `{}`", args.dir))?;

        if args.json {
            let line = serde_json::to_string(&ResolvedImport {
                import_path,
                label: label.to_string(),
                resolved: &label,
            })
            .context("serialize resolved import")?;
            writeln!(stdout, "{line}")?;
        } else {
            writeln!(stdout, "{import_path}\t{label}")?;
        }
    }

    Ok(())
}
