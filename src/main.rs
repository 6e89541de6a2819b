use futures::future::join_all;
use std::process::ExitCode;
use symptom_triage::config::{config_path, load_or_default};
use symptom_triage::service::AnalysisService;
use tokio::io::AsyncReadExt;
use tracing::{error, info, warn};
use tracing_subscriber;

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Set panic hook to log details about any panic
    std::panic::set_hook(Box::new(|panic_info| {
        eprintln!("😱 Panic occurred: {:?}", panic_info);
    }));

    let path = config_path();
    let config = match load_or_default(&path) {
        Ok(cfg) => cfg,
        Err(e) => {
            error!("Config load error ({}): {}", path, e);
            return ExitCode::FAILURE;
        }
    };

    let service = match AnalysisService::from_config(&config) {
        Ok(s) => s,
        Err(e) => {
            error!("Failed to initialize analysis service: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        let mut buffer = String::new();
        if let Err(e) = tokio::io::stdin().read_to_string(&mut buffer).await {
            error!("Failed to read symptoms from stdin: {}", e);
            return ExitCode::FAILURE;
        }
        inputs.push(buffer);
    }

    info!("Analyzing {} symptom description(s)...", inputs.len());
    let tasks: Vec<_> = inputs.iter().map(|text| service.analyze(text)).collect();
    let reports = join_all(tasks).await;

    for (text, report) in inputs.iter().zip(reports) {
        match report {
            Ok(report) => match report.to_json_pretty() {
                Ok(json) => {
                    info!("Report for {:?} from {} analysis", text.trim(), report.source);
                    println!("{}", json);
                }
                Err(e) => error!("Failed to serialize report: {}", e),
            },
            Err(e) => warn!("Skipping input {:?}: {}", text, e),
        }
    }

    ExitCode::SUCCESS
}
