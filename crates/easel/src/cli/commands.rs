//! Command definitions.

use clap::{Parser, Subcommand};
use easel_core::UseCase;
use serde_json::{Map, Value, json};
use std::path::PathBuf;

/// Structured slide-outline and diagram generation.
#[derive(Parser, Debug)]
#[command(name = "easel")]
#[command(about = "Structured slide-outline and diagram generation over an LLM API")]
#[command(version)]
pub struct Cli {
    /// Path to a TOML configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Write logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serve the HTTP API until Ctrl+C
    Serve {
        /// Port to listen on, overriding configuration
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Run one generation and print the result as JSON
    Generate {
        /// Extra attempts when the model cannot be reached
        #[arg(long, default_value_t = 0, global = true)]
        retries: usize,

        #[command(subcommand)]
        target: GenerateTarget,
    },

    /// Validate configuration and print it with secrets redacted
    CheckConfig,
}

/// What to generate.
#[derive(Subcommand, Debug)]
pub enum GenerateTarget {
    /// A slide outline
    Outline {
        /// What the presentation should cover
        #[arg(short, long)]
        requirements: String,

        /// Number of slides (4, 6 or 8)
        #[arg(long)]
        slide_count: Option<u64>,

        /// persuasive, professional or casual
        #[arg(long)]
        tone: Option<String>,

        /// "general public", executives or students
        #[arg(long)]
        audience: Option<String>,
    },

    /// A Mermaid diagram
    Diagram {
        /// What the diagram should show
        #[arg(short, long)]
        requirements: String,
    },
}

impl GenerateTarget {
    /// The use case this target runs.
    pub fn use_case(&self) -> UseCase {
        match self {
            Self::Outline { .. } => UseCase::Outline,
            Self::Diagram { .. } => UseCase::Diagram,
        }
    }

    /// The request body the HTTP endpoint would receive for these arguments.
    ///
    /// Flags that were not given are left out, so the pipeline applies the
    /// same defaults and checks as it does for HTTP callers.
    pub fn request_body(&self) -> Value {
        match self {
            Self::Outline {
                requirements,
                slide_count,
                tone,
                audience,
            } => {
                let mut body = Map::new();
                body.insert("requirements".into(), json!(requirements));
                if let Some(count) = slide_count {
                    body.insert("slideCount".into(), json!(count));
                }
                if let Some(tone) = tone {
                    body.insert("tone".into(), json!(tone));
                }
                if let Some(audience) = audience {
                    body.insert("audience".into(), json!(audience));
                }
                Value::Object(body)
            }
            Self::Diagram { requirements } => json!({ "requirements": requirements }),
        }
    }
}
