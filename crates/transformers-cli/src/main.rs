//! transformers - command-line interface for Hugging Face Inference API models
//!
//! Usage:
//!     transformers [OPTIONS] <COMMAND>
//!
//! Environment Variables:
//!     HUGGINGFACE_API_TOKEN, HF_TOKEN, HUGGINGFACE_TOKEN: API token (first non-empty wins)
//!     HF_MODEL: Model name or alias used when --model is not given
//!     HF_INFERENCE_ENDPOINT: API base URL (default: https://api-inference.huggingface.co)
//!     RUST_LOG: Log filter (default: warn)

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use hf_transformers::{
    get_model_config, list_model_aliases, resolve_model_name, CallContext, Config,
    GenerationOptions, HfModel, Model, Task, DEFAULT_CLASSIFICATION_MODEL,
    DEFAULT_GENERATION_MODEL,
};
use std::time::Duration;
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Transformer models via the Hugging Face Inference API
#[derive(Parser, Debug)]
#[command(name = "transformers")]
#[command(about = "Run transformer models via the Hugging Face Inference API")]
#[command(after_help = r#"Examples:
    # Classify sentiment with the default model
    transformers classify "I love this library"

    # Use a registry alias and JSON output
    transformers classify "Terrible service" --model sentiment --json

    # Generate text with custom sampling
    transformers generate "The future of AI is" --max-length 100 --temperature 0.9

    # List model aliases
    transformers models
"#)]
struct Cli {
    /// Model name or registry alias
    #[arg(long, global = true, env = "HF_MODEL")]
    model: Option<String>,

    /// Hugging Face API token (overrides the environment)
    #[arg(long, global = true)]
    token: Option<String>,

    /// Output results in JSON format
    #[arg(long, global = true)]
    json: bool,

    /// API base URL (overrides HF_INFERENCE_ENDPOINT)
    #[arg(long, global = true, value_name = "URL")]
    endpoint: Option<String>,

    /// Request timeout (e.g. 500ms, 30s, 2m)
    #[arg(long, global = true, default_value = "30s", value_parser = parse_duration)]
    timeout: Duration,

    /// Enable debug logging
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Classify text using a transformer model
    Classify {
        /// Text to classify
        text: String,
    },

    /// Generate text using a transformer model
    Generate {
        /// Prompt to continue
        prompt: String,

        /// Maximum length of generated text
        #[arg(long, default_value_t = 50)]
        max_length: u32,

        /// Temperature for text generation (0 disables sampling)
        #[arg(long, default_value_t = 0.7)]
        temperature: f64,
    },

    /// List model aliases and exit
    Models,

    /// Show model metadata without contacting the API
    Info {
        /// Task to report (e.g. text-classification, text-generation)
        #[arg(long)]
        task: Option<Task>,
    },
}

/// Parse a duration such as `500ms`, `30s`, `2m`, `1h` or bare seconds
fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    let split = s
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(s.len());
    let (number, unit) = s.split_at(split);

    let value: f64 = number
        .parse()
        .map_err(|_| format!("Invalid duration: {}", s))?;
    let seconds = match unit.trim() {
        "ms" => value / 1000.0,
        "" | "s" => value,
        "m" => value * 60.0,
        "h" => value * 3600.0,
        other => return Err(format!("Invalid duration unit '{}' in {}", other, s)),
    };

    if !seconds.is_finite() || seconds <= 0.0 {
        return Err(format!("Duration must be positive: {}", s));
    }
    Ok(Duration::from_secs_f64(seconds))
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Build a client for `--model` (resolving aliases) or `default_model`
fn build_model(args: &Cli, default_model: &str, task: Task) -> Result<Box<dyn Model>> {
    let model_name = args
        .model
        .as_deref()
        .map(resolve_model_name)
        .unwrap_or(default_model);

    let mut config = Config::from_env().with_timeout(args.timeout);
    if let Some(token) = &args.token {
        config = config.with_token(token);
    }
    if let Some(endpoint) = &args.endpoint {
        config = config.with_base_url(endpoint);
    }

    debug!(model = model_name, base_url = %config.base_url, "building model client");
    let model = HfModel::from_config(model_name, &config)
        .with_context(|| format!("failed to create client for model {}", model_name))?
        .with_task(task);
    Ok(Box::new(model))
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let output = serde_json::to_string_pretty(value).context("failed to marshal JSON")?;
    println!("{}", output);
    Ok(())
}

async fn run_classify(args: &Cli, text: &str) -> Result<()> {
    let model = build_model(args, DEFAULT_CLASSIFICATION_MODEL, Task::TextClassification)?;
    let ctx = CallContext::with_timeout(args.timeout);

    let result = model
        .classify(&ctx, text)
        .await
        .context("classification failed")?;

    if args.json {
        print_json(&result)?;
    } else {
        println!("Label: {}", result.label);
        println!("Score: {:.4}", result.score);
    }
    Ok(())
}

async fn run_generate(args: &Cli, prompt: &str, max_length: u32, temperature: f64) -> Result<()> {
    let model = build_model(args, DEFAULT_GENERATION_MODEL, Task::TextGeneration)?;
    let ctx = CallContext::with_timeout(args.timeout);

    let options = GenerationOptions::new()
        .with_max_length(max_length)
        .with_temperature(temperature)
        .with_do_sample(temperature > 0.0);

    let result = model
        .generate(&ctx, prompt, Some(&options))
        .await
        .context("generation failed")?;

    if args.json {
        print_json(&result)?;
    } else {
        println!("{}", result.generated_text);
    }
    Ok(())
}

fn print_models(json: bool) -> Result<()> {
    let aliases = list_model_aliases();

    if json {
        let entries: Vec<_> = aliases
            .iter()
            .filter_map(|alias| get_model_config(alias).map(|config| (alias, config)))
            .map(|(alias, config)| {
                serde_json::json!({
                    "alias": alias,
                    "name": config.name,
                    "provider": config.provider,
                })
            })
            .collect();
        return print_json(&entries);
    }

    println!("Model aliases:");
    for alias in aliases {
        if let Some(config) = get_model_config(alias) {
            println!("  - {:<12} {} ({})", alias, config.name, config.provider);
        }
    }
    Ok(())
}

fn print_info(args: &Cli, task: Option<Task>) -> Result<()> {
    let task = task.unwrap_or(Task::TextClassification);
    let default_model = match task {
        Task::TextGeneration => DEFAULT_GENERATION_MODEL,
        _ => DEFAULT_CLASSIFICATION_MODEL,
    };
    let info = build_model(args, default_model, task)?.describe();

    if args.json {
        print_json(&info)
    } else {
        println!("Name:     {}", info.name);
        println!("Task:     {}", info.task);
        println!("Provider: {}", info.provider);
        Ok(())
    }
}

async fn run(args: Cli) -> Result<()> {
    match &args.command {
        Commands::Classify { text } => run_classify(&args, text).await,
        Commands::Generate {
            prompt,
            max_length,
            temperature,
        } => run_generate(&args, prompt, *max_length, *temperature).await,
        Commands::Models => print_models(args.json),
        Commands::Info { task } => print_info(&args, *task),
    }
}

#[tokio::main]
async fn main() {
    let args = Cli::parse();
    init_tracing(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("{}", error_message(&e));
        std::process::exit(1);
    }
}

/// Render a failure for stderr, including its cause chain
fn error_message(err: &anyhow::Error) -> String {
    format!("Error: {:#}", err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_duration_units() {
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("2m").unwrap(), Duration::from_secs(120));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("15").unwrap(), Duration::from_secs(15));
        assert_eq!(parse_duration("1.5s").unwrap(), Duration::from_millis(1500));
    }

    #[test]
    fn test_parse_duration_rejects_garbage() {
        assert!(parse_duration("soon").is_err());
        assert!(parse_duration("10d").is_err());
        assert!(parse_duration("0s").is_err());
        assert!(parse_duration("").is_err());
    }

    #[test]
    fn test_generate_defaults() {
        let cli = Cli::try_parse_from(["transformers", "generate", "Hello"]).unwrap();
        match cli.command {
            Commands::Generate {
                prompt,
                max_length,
                temperature,
            } => {
                assert_eq!(prompt, "Hello");
                assert_eq!(max_length, 50);
                assert_eq!(temperature, 0.7);
            }
            other => panic!("unexpected command: {:?}", other),
        }
        assert_eq!(cli.timeout, Duration::from_secs(30));
        assert!(!cli.json);
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "transformers",
            "classify",
            "great",
            "--model",
            "sentiment",
            "--token",
            "hf-x",
            "--json",
            "--timeout",
            "5s",
        ])
        .unwrap();
        assert_eq!(cli.model.as_deref(), Some("sentiment"));
        assert_eq!(cli.token.as_deref(), Some("hf-x"));
        assert!(cli.json);
        assert_eq!(cli.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_info_task_parsing() {
        let cli = Cli::try_parse_from(["transformers", "info", "--task", "text-generation"]).unwrap();
        assert!(matches!(
            cli.command,
            Commands::Info {
                task: Some(Task::TextGeneration)
            }
        ));
    }

    #[tokio::test]
    async fn test_run_reports_unreachable_endpoint() {
        let cli = Cli::try_parse_from([
            "transformers",
            "classify",
            "great",
            "--endpoint",
            "http://127.0.0.1:1",
            "--token",
            "hf-x",
            "--timeout",
            "5s",
        ])
        .unwrap();

        let err = run(cli).await.unwrap_err();
        let message = error_message(&err);
        assert!(message.starts_with("Error: classification failed: "));
        assert!(message.contains("classification request failed"));
    }

    #[test]
    fn test_build_model_resolves_alias_and_token() {
        let cli = Cli::try_parse_from([
            "transformers",
            "info",
            "--model",
            "sentiment",
            "--token",
            "hf-explicit",
        ])
        .unwrap();
        let model = build_model(&cli, DEFAULT_GENERATION_MODEL, Task::TextClassification).unwrap();
        let info = model.describe();
        assert_eq!(info.name, "distilbert-base-uncased-finetuned-sst-2-english");
        assert_eq!(info.task, Task::TextClassification);
    }
}
