use crate::cli::{Args, Command, InputArgs};
use anyhow::{Context, bail};
use clap::Parser;
use oxowlfn::{DeclarationKind, FunctionalSyntaxParser, ParsedOntology};
use std::fs::File;
use std::io::{self, Write, stdin, stdout};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    match args.command {
        Command::Parse { input } => {
            let parsed = parse(&input)?;
            write_summary(stdout().lock(), &parsed)?;
            Ok(())
        }
        Command::Declarations {
            input,
            kind,
            explicit_only,
        } => {
            let parsed = parse(&input)?;
            let kind = DeclarationKind::from(kind);
            let mut output = stdout().lock();
            for declaration in parsed.store.declarations(kind) {
                if explicit_only && !parsed.store.is_explicitly_declared(kind, declaration.iri()) {
                    continue;
                }
                writeln!(output, "{}", declaration.iri().as_str())?;
            }
            output.flush()?;
            Ok(())
        }
    }
}

/// Logs to stderr. `RUST_LOG` is used unless `--verbose` is set.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("oxowlfn=trace")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn parse(input: &InputArgs) -> anyhow::Result<ParsedOntology> {
    let mut parser = FunctionalSyntaxParser::new();
    if input.implicit_declarations {
        parser = parser.with_implicit_declarations();
    }
    if input.strict {
        parser = parser.strict();
    }
    if input.token_log {
        parser = parser.with_token_log();
    }
    for binding in &input.prefix {
        let Some((name, iri)) = binding.split_once('=') else {
            bail!("invalid prefix binding {binding}, expected NAME=IRI");
        };
        parser = parser
            .with_prefix(name, iri)
            .with_context(|| format!("invalid IRI for prefix {name}"))?;
    }

    let source_name = if input.file.as_os_str() == "-" {
        "stdin".to_owned()
    } else {
        input.file.display().to_string()
    };
    let result = if input.file.as_os_str() == "-" {
        parser.parse_read(stdin().lock(), source_name.as_str())
    } else {
        let file = File::open(&input.file)
            .with_context(|| format!("failed to open {source_name}"))?;
        parser.parse_read(file, source_name.as_str())
    };
    match result {
        Ok(parsed) => {
            info!("{}", parsed.ontology.summary(&parsed.store));
            Ok(parsed)
        }
        Err(error) => {
            let partial = error.partial();
            warn!(
                "{} declarations and {} axioms had been read before the error",
                DeclarationKind::ALL
                    .into_iter()
                    .map(|kind| partial.store.declaration_count(kind))
                    .sum::<usize>(),
                partial.store.axioms().len()
            );
            Err(error.into_error()).with_context(|| format!("failed to parse {source_name}"))
        }
    }
}

fn write_summary(mut output: impl Write, parsed: &ParsedOntology) -> io::Result<()> {
    writeln!(output, "ontology {}", parsed.ontology.iri())?;
    if let Some(version_iri) = parsed.ontology.version_iri() {
        writeln!(output, "version {version_iri}")?;
    }
    for (name, namespace) in parsed.ontology.prefixes().iter() {
        writeln!(output, "prefix {name}: <{namespace}>")?;
    }
    for kind in DeclarationKind::ALL {
        write!(output, "{kind} {}", parsed.store.declaration_count(kind))?;
        let implicit = parsed.store.implicit_declaration_count(kind);
        if implicit > 0 {
            write!(output, " ({implicit} implicit)")?;
        }
        writeln!(output)?;
    }
    writeln!(output, "axioms {}", parsed.store.axioms().len())?;
    output.flush()
}
