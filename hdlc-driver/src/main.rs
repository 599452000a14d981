//! HDL Convertor Driver
//! 
//! Command-line entry point for working with interchange trees: decode a
//! JSON file of statements or a function, validate it against the AST
//! invariants and write it back out in canonical form.

use clap::{Parser, Subcommand, ValueEnum};
use hdlc_ast::{AssignmentTag, SerializerConfig, TreeDecoder, TreeSerializer};
use hdlc_common::{ErrorReporter, HdlError};
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "hdlc")]
#[command(about = "HDL Convertor interchange tree tool")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode an interchange tree and write it back in canonical form
    Normalize {
        /// Input JSON file
        input: PathBuf,

        /// Output file (stdout when omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// What the top-level value holds
        #[arg(long, value_enum, default_value_t = Root::Statements)]
        root: Root,

        /// Spelling of the assignment discriminator
        #[arg(long, value_enum, default_value_t = TagSpelling::Legacy)]
        assignment_tag: TagSpelling,

        /// Emit compact JSON instead of pretty-printed
        #[arg(long)]
        compact: bool,
    },

    /// Decode an interchange tree and report every invalid node
    Check {
        /// Input JSON file
        input: PathBuf,

        /// What the top-level value holds
        #[arg(long, value_enum, default_value_t = Root::Statements)]
        root: Root,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Root {
    /// A statement or an array of statements
    Statements,
    /// A single function definition
    Function,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum TagSpelling {
    /// "ASSIGMENT", as existing consumers expect
    Legacy,
    /// "ASSIGNMENT"
    Corrected,
}

impl From<TagSpelling> for AssignmentTag {
    fn from(spelling: TagSpelling) -> Self {
        match spelling {
            TagSpelling::Legacy => AssignmentTag::Legacy,
            TagSpelling::Corrected => AssignmentTag::Corrected,
        }
    }
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Normalize { input, output, root, assignment_tag, compact } => {
            let config = SerializerConfig::new().with_assignment_tag(assignment_tag.into());
            if let Err(e) = normalize(&input, output.as_deref(), root, config, compact) {
                eprintln!("Error normalizing {}: {}", input.display(), e);
                std::process::exit(1);
            }
        }
        Commands::Check { input, root } => match check(&input, root) {
            Ok(reporter) => {
                reporter.print_diagnostics();
                eprintln!("{}: {}", input.display(), reporter.summary());
                if reporter.has_errors() {
                    std::process::exit(1);
                }
            }
            Err(e) => {
                eprintln!("Error checking {}: {}", input.display(), e);
                std::process::exit(1);
            }
        },
    }
}

/// Parse the input file. Deeply nested statement trees are legal, so the
/// JSON parser's nesting limit is lifted here.
fn read_tree(path: &Path) -> Result<Value, HdlError> {
    let text = fs::read_to_string(path)?;
    let mut de = serde_json::Deserializer::from_str(&text);
    de.disable_recursion_limit();
    Value::deserialize(&mut de)
        .and_then(|value| de.end().map(|()| value))
        .map_err(|e| HdlError::decode_error(e.to_string(), "/".to_string()))
}

fn normalize(
    input_path: &Path,
    output_path: Option<&Path>,
    root: Root,
    config: SerializerConfig,
    compact: bool,
) -> Result<(), HdlError> {
    let tree = read_tree(input_path)?;
    let serializer = TreeSerializer::new(config);

    let normalized = match root {
        Root::Statements if tree.is_array() => {
            let stmts = TreeDecoder::statements(&tree)?;
            info!("Decoded {} top-level statements", stmts.len());
            serializer.statements(&stmts)?
        }
        Root::Statements => serializer.statement(&TreeDecoder::statement(&tree)?)?,
        Root::Function => {
            let func = TreeDecoder::function(&tree)?;
            info!("Decoded function {} with {} statements", func.name, func.body.len());
            serializer.function(&func)?
        }
    };

    let text = if compact {
        serde_json::to_string(&normalized)
    } else {
        serde_json::to_string_pretty(&normalized)
    };
    let text = text.map_err(|e| HdlError::serialization_error(e.to_string()))?;

    match output_path {
        Some(path) => {
            fs::write(path, format!("{}\n", text))?;
            info!("Interchange tree written to {}", path.display());
        }
        None => println!("{}", text),
    }

    Ok(())
}

fn check(input_path: &Path, root: Root) -> Result<ErrorReporter, HdlError> {
    let tree = read_tree(input_path)?;
    let mut reporter = ErrorReporter::new();

    let (errors, unknown) = match root {
        Root::Statements => {
            let results = TreeDecoder::each_statement(&tree);
            debug!("Checked {} top-level statements", results.len());
            let errors = results.into_iter().filter_map(Result::err).collect::<Vec<_>>();
            (errors, TreeDecoder::unknown_fields(&tree))
        }
        Root::Function => {
            let errors = TreeDecoder::function(&tree).err().into_iter().collect::<Vec<_>>();
            (errors, TreeDecoder::unknown_function_fields(&tree))
        }
    };

    for err in errors {
        let err: HdlError = err.into();
        reporter.report(&err, "/");
    }
    for field in unknown {
        reporter.warning(format!("unknown field `{}` ignored", field.field), field.path);
    }

    Ok(reporter)
}
