use anyhow::Context;
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use topic_analyzer::utils::logger::{self, LogFormat};
use topic_analyzer::utils::validation::Validate;
use topic_analyzer::{
    AnalyzerError, CliConfig, ConfigProvider, FormController, HttpAnalysisClient, SubmitOutcome,
    TerminalView, TomlConfig,
};

fn exit_with_config_error(e: &AnalyzerError) -> ! {
    tracing::error!("❌ Configuration validation failed: {}", e);
    tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = CliConfig::parse();

    let toml_config = match &args.config {
        Some(path) => match TomlConfig::from_file(path) {
            Ok(config) => Some(config),
            Err(e) => {
                eprintln!("❌ Failed to load config file '{}': {}", path, e);
                eprintln!("💡 Make sure the file exists and is valid TOML format");
                std::process::exit(1);
            }
        },
        None => None,
    };

    let level = toml_config.as_ref().map(|c| c.log_level()).unwrap_or("info");
    let format = if toml_config.as_ref().is_some_and(|c| c.json_logging()) {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(level, args.verbose, format);

    tracing::info!("🚀 Starting topic-analyzer");
    if args.verbose {
        tracing::debug!("CLI config: {:?}", args);
    }

    match toml_config {
        Some(mut config) => {
            if let Some(endpoint) = &args.endpoint {
                config.service.endpoint = endpoint.clone();
                tracing::info!("🔧 Endpoint overridden to: {}", endpoint);
            }
            if let Some(timeout) = args.timeout_seconds {
                config.service.timeout_seconds = Some(timeout);
            }
            if let Some(path) = &args.html_output {
                config.set_html_path(path.clone());
            }
            run(&config, &args).await
        }
        None => run(&args, &args).await,
    }
}

async fn run<C: ConfigProvider + Validate>(config: &C, args: &CliConfig) -> anyhow::Result<()> {
    if let Err(e) = config.validate() {
        exit_with_config_error(&e);
    }

    let client = match HttpAnalysisClient::from_config(config) {
        Ok(client) => client,
        Err(e) => exit_with_config_error(&e),
    };
    tracing::info!("📡 Analysis endpoint: {}", client.endpoint());

    let controller = FormController::new(client, TerminalView::new(!args.no_color));
    let mut failures = 0usize;

    if args.topics.is_empty() {
        eprintln!("Enter a topic per line (Ctrl-D to finish):");
        let mut lines = BufReader::new(tokio::io::stdin()).lines();
        while let Some(line) = lines.next_line().await.context("Failed to read stdin")? {
            if let SubmitOutcome::Failed { .. } = controller.handle_submit(&line).await {
                failures += 1;
            }
        }
    } else {
        for topic in &args.topics {
            if let SubmitOutcome::Failed { .. } = controller.handle_submit(topic).await {
                failures += 1;
            }
        }
    }

    if let Some(path) = config.html_output_path() {
        controller
            .view()
            .document()
            .write_html(path)
            .await
            .with_context(|| format!("Failed to write HTML page to {}", path))?;
        tracing::info!("📁 Page saved to: {}", path);
        println!("📁 Page saved to: {}", path);
    }

    if failures > 0 {
        tracing::error!("{} submission(s) failed", failures);
        std::process::exit(2);
    }

    Ok(())
}
