#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

mod args;

use std::io::{Read, Write};
use std::path::Path;
use std::process::ExitCode;

use args::{Args, Command};
use clap::Parser;
use dendrite_api::{
    ChatCompletion, ChatCompletionChunk, Choice, ChunkChoice, Delta, FinishReason, Message, Model, ModelList, Role,
    SamplingDefaults, ToolCall, ToolCallDelta, Usage,
};
use dendrite_config::Config;
use serde::Serialize;

fn main() -> anyhow::Result<ExitCode> {
    let args = Args::parse();

    let config = match args.config.as_deref() {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    dendrite_telemetry::init(&config.logging, args.log_filter.as_deref())?;

    tracing::debug!(
        config_path = ?args.config,
        model = %config.model.name,
        "starting dendrite"
    );

    match args.command {
        Command::Normalize { input } => normalize(&config, &input),
        Command::ExtractToolCalls { input, stream } => extract_tool_calls(&config, &input, stream),
        Command::Models => {
            let model = Model::new(&config.model.name).owned_by(&config.model.owned_by);
            print_json(&ModelList::from(model))?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn normalize(config: &Config, input: &Path) -> anyhow::Result<ExitCode> {
    let body = read_input(input)?;

    let defaults = SamplingDefaults {
        temperature: config.sampling.temperature,
        top_p: config.sampling.top_p,
        seed: config.sampling.seed(),
    };

    match dendrite_api::parse_inference_params_str(&body, &defaults) {
        Ok(params) => {
            print_json(&params)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            tracing::warn!(status = %e.status_code(), error = %e, "rejected chat completion request");
            print_json(&e.to_response())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

fn extract_tool_calls(config: &Config, input: &Path, stream: bool) -> anyhow::Result<ExitCode> {
    let output = read_input(input)?;
    let tool_calls = dendrite_api::extract_tool_calls_from_text(&output);

    tracing::debug!(
        tool_calls = tool_calls.as_ref().map_or(0, Vec::len),
        "interpreted model output"
    );

    let model = &config.model.name;

    if stream {
        for chunk in chunks(model, &output, tool_calls) {
            print_json(&chunk)?;
        }
        return Ok(ExitCode::SUCCESS);
    }

    let choice = match tool_calls {
        Some(calls) => Choice::new(0, Message::assistant_tool_calls(calls), FinishReason::ToolCalls),
        None => Choice::new(0, Message::assistant(output.trim()), FinishReason::Stop),
    };

    print_json(&ChatCompletion::new(model, vec![choice], Usage::default()))?;
    Ok(ExitCode::SUCCESS)
}

/// Chunk sequence for one response: a content or tool-call delta, then the finish marker
fn chunks(model: &str, output: &str, tool_calls: Option<Vec<ToolCall>>) -> Vec<ChatCompletionChunk> {
    let (delta, finish_reason) = match tool_calls {
        Some(calls) => (
            Delta::tool_calls(calls.into_iter().map(ToolCallDelta::from).collect()),
            FinishReason::ToolCalls,
        ),
        None => (Delta::text(Role::Assistant, output.trim()), FinishReason::Stop),
    };

    vec![
        ChatCompletionChunk::new(model, ChunkChoice::delta(0, delta)),
        ChatCompletionChunk::new(model, ChunkChoice::finished(0, finish_reason)),
    ]
}

fn read_input(input: &Path) -> anyhow::Result<String> {
    if input == Path::new("-") {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .map_err(|e| anyhow::anyhow!("failed to read stdin: {e}"))?;
        return Ok(buf);
    }

    std::fs::read_to_string(input).map_err(|e| anyhow::anyhow!("failed to read {}: {e}", input.display()))
}

fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    let mut stdout = std::io::stdout().lock();
    serde_json::to_writer(&mut stdout, value).map_err(|e| anyhow::anyhow!("failed to serialize output: {e}"))?;
    writeln!(stdout)?;
    Ok(())
}
