//! PhishGuard CLI - Front-End Entry Point
//!
//! Thin rendering layer over the decision pipeline: collects a URL, runs one
//! check, and prints the verdict with the severity mapping
//! (Phishing → error, Legitimate → success, else → warning).

use std::path::PathBuf;
use std::process::ExitCode;

use phishguard_core::constants;
use phishguard_core::logic::probe::{HttpProber, Prober};
use phishguard_core::logic::trainer::{
    FeatureTableStrategy, TrainOutcome, Trainer, TrainingStrategy, UrlTextStrategy,
};
use phishguard_core::logic::verdict::{DecisionEngine, Verdict};
use phishguard_core::logic::features;

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    log::info!(
        "Starting {} v{}...",
        constants::APP_NAME,
        constants::APP_VERSION
    );

    let args: Vec<String> = std::env::args().collect();

    match args.get(1).map(String::as_str) {
        Some("check") => match args.get(2) {
            Some(url) => cmd_check(url, args.iter().any(|a| a == "--features")),
            None => usage(),
        },
        Some("probe") => match args.get(2) {
            Some(url) => cmd_probe(url),
            None => usage(),
        },
        Some("train") => {
            let text = args.iter().any(|a| a == "--text");
            let dataset = args
                .iter()
                .skip(2)
                .find(|a| !a.starts_with("--"))
                .map(PathBuf::from);
            cmd_train(dataset, text)
        }
        _ => usage(),
    }
}

fn usage() -> ExitCode {
    eprintln!("{} v{}", constants::APP_NAME, constants::APP_VERSION);
    eprintln!("Usage:");
    eprintln!("  phishguard check <url> [--features]   Classify a URL");
    eprintln!("  phishguard probe <url>                Send one HEAD probe, print the outcome");
    eprintln!("  phishguard train [dataset.csv] [--text]");
    eprintln!("                                        Train-or-skip the model artifact");
    ExitCode::from(2)
}

fn cmd_check(url: &str, show_features: bool) -> ExitCode {
    let engine = DecisionEngine::with_defaults();
    let decision = engine.check(url);

    match decision.verdict {
        Verdict::Phishing => println!("🚨 {}", decision),
        Verdict::Legitimate => println!("✅ {}", decision),
        _ => println!("⚠️ {}", decision),
    }

    if show_features {
        let features = features::extract(url);
        match serde_json::to_string_pretty(&features) {
            Ok(json) => println!("{}", json),
            Err(e) => log::warn!("Failed to render features: {}", e),
        }
    }

    ExitCode::SUCCESS
}

fn cmd_probe(url: &str) -> ExitCode {
    let prober = HttpProber::new();
    let outcome = prober.probe(url);

    match serde_json::to_string_pretty(&outcome) {
        Ok(json) => {
            println!("{}", json);
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Failed to render probe outcome: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn cmd_train(dataset: Option<PathBuf>, text: bool) -> ExitCode {
    let trainer = Trainer::from_defaults(dataset);
    println!("📂 Checking dataset: {} ...", trainer.dataset_path.display());

    let strategy: &dyn TrainingStrategy = if text {
        &UrlTextStrategy
    } else {
        &FeatureTableStrategy
    };

    match trainer.run(strategy) {
        Ok(TrainOutcome::Skipped { .. }) => {
            println!("✅ Dataset unchanged. Skipping retraining. Using cached model.");
            ExitCode::SUCCESS
        }
        Ok(TrainOutcome::Trained {
            accuracy, examples, ..
        }) => {
            println!(
                "✅ Model trained with accuracy: {:.2} ({} examples)",
                accuracy, examples
            );
            println!("💾 Model saved to {}", trainer.model_path.display());
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("Training failed: {}", e);
            eprintln!("❌ {}", e);
            ExitCode::FAILURE
        }
    }
}
