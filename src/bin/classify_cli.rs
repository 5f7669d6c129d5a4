//! classify-cli: classify a line of text against a chosen schema.
//!
//! Usage:
//!   classify-cli <text> [--schema <name>] [--model <id>] [--temperature <t>]
//!   classify-cli --list-schemas
//!
//! Environment:
//!   OLLAMA_BASE_URL          Backend base URL (default http://localhost:11434)
//!   MODEL_ID                 Default model identifier (default llama3.2:3b)
//!   TEMPERATURE              Default sampling temperature (default 0.1)
//!   CLASSIFIER_TIMEOUT_MS    Per-call deadline in milliseconds (default 30000)

use intent_classifier::{ClassifierBuilder, ClassifyOptions};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args[0] == "--help" || args[0] == "-h" {
        print_usage();
        std::process::exit(if args.is_empty() { 1 } else { 0 });
    }

    let classifier = ClassifierBuilder::from_env().build()?;

    if args[0] == "--list-schemas" {
        println!(
            "{}",
            serde_json::to_string_pretty(&classifier.list_schemas())?
        );
        return Ok(());
    }

    let mut text: Option<&str> = None;
    let mut options = ClassifyOptions::default();
    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--schema" => {
                let value = iter.next().ok_or_else(|| missing_value("--schema"))?;
                options = options.schema(value.as_str());
            }
            "--model" => {
                let value = iter.next().ok_or_else(|| missing_value("--model"))?;
                options = options.model(value.as_str());
            }
            "--temperature" => {
                let value = iter.next().ok_or_else(|| missing_value("--temperature"))?;
                options = options.temperature(value.parse()?);
            }
            other if other.starts_with("--") => {
                eprintln!("Unknown option: {other}");
                print_usage();
                std::process::exit(1);
            }
            other => text = Some(other),
        }
    }

    let Some(text) = text else {
        print_usage();
        std::process::exit(1);
    };

    let result = classifier.classify(text, options).await;
    println!("{}", serde_json::to_string_pretty(&result)?);
    std::process::exit(if result.success { 0 } else { 2 });
}

fn missing_value(flag: &str) -> anyhow::Error {
    anyhow::anyhow!("{flag} requires a value")
}

fn print_usage() {
    println!(
        r#"classify-cli: prompt/workflow intent classification

USAGE:
    classify-cli <text> [--schema <name>] [--model <id>] [--temperature <t>]
    classify-cli --list-schemas

ENVIRONMENT:
    OLLAMA_BASE_URL          Backend base URL (default http://localhost:11434)
    MODEL_ID                 Default model identifier (default llama3.2:3b)
    TEMPERATURE              Default sampling temperature (default 0.1)
    CLASSIFIER_TIMEOUT_MS    Per-call deadline in milliseconds (default 30000)"#
    );
}
