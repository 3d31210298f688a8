use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Dendrite chat API normalizer
#[derive(Debug, Parser)]
#[command(name = "dendrite", about = "Normalize OpenAI-compatible chat traffic for a distributed inference engine")]
pub struct Args {
    /// Path to configuration file; built-in defaults apply when omitted
    #[arg(short, long, env = "DENDRITE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Override the configured log filter
    #[arg(long, env = "DENDRITE_LOG")]
    pub log_filter: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Normalize a chat completion request body and print the inference parameters
    Normalize {
        /// Request body file, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,
    },
    /// Extract tool calls from raw model output and print the completion
    ExtractToolCalls {
        /// Model output file, or "-" for stdin
        #[arg(default_value = "-")]
        input: PathBuf,

        /// Print streamed chunks, one JSON object per line
        #[arg(long)]
        stream: bool,
    },
    /// Print the list of served models
    Models,
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    use super::*;

    #[test]
    fn cli_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn input_defaults_to_stdin() {
        let args = Args::try_parse_from(["dendrite", "normalize"]).unwrap();
        match args.command {
            Command::Normalize { input } => assert_eq!(input, PathBuf::from("-")),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn extract_flags() {
        let args =
            Args::try_parse_from(["dendrite", "--config", "d.toml", "extract-tool-calls", "out.txt", "--stream"]).unwrap();
        assert_eq!(args.config, Some(PathBuf::from("d.toml")));
        match args.command {
            Command::ExtractToolCalls { input, stream } => {
                assert_eq!(input, PathBuf::from("out.txt"));
                assert!(stream);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}
