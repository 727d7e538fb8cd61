use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use oxowlfn::DeclarationKind;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "oxowlfn")]
/// Checks and inspects OWL 2 Functional-Style Syntax documents
pub struct Args {
    /// Logs what the parser does, down to every resolved name
    #[arg(short, long, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Parse a document and print a summary of its content
    ///
    /// The exit code is non zero if the document is invalid.
    Parse {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Parse a document and print the IRIs of the entities of a kind, one per line
    Declarations {
        #[command(flatten)]
        input: InputArgs,
        /// The kind of entities to list
        #[arg(short, long, value_enum)]
        kind: EntityKind,
        /// Only lists the entities introduced by a `Declaration(...)` statement
        #[arg(long)]
        explicit_only: bool,
    },
}

#[derive(clap::Args)]
pub struct InputArgs {
    /// File to parse
    ///
    /// Use "-" to read from stdin.
    #[arg(value_hint = ValueHint::FilePath)]
    pub file: PathBuf,
    /// Declare entities on their first use instead of failing
    #[arg(long)]
    pub implicit_declarations: bool,
    /// Validate IRIs and language tags
    #[arg(long)]
    pub strict: bool,
    /// Log every token read, at the trace level
    #[arg(long)]
    pub token_log: bool,
    /// Bind a prefix before parsing, as NAME=IRI
    ///
    /// A `Prefix(...)` statement of the document may bind it again.
    #[arg(long, value_name = "NAME=IRI")]
    pub prefix: Vec<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum EntityKind {
    AnnotationProperty,
    Class,
    DataProperty,
    Datatype,
    NamedIndividual,
    ObjectProperty,
}

impl From<EntityKind> for DeclarationKind {
    fn from(kind: EntityKind) -> Self {
        match kind {
            EntityKind::AnnotationProperty => Self::AnnotationProperty,
            EntityKind::Class => Self::Class,
            EntityKind::DataProperty => Self::DataProperty,
            EntityKind::Datatype => Self::Datatype,
            EntityKind::NamedIndividual => Self::NamedIndividual,
            EntityKind::ObjectProperty => Self::ObjectProperty,
        }
    }
}
