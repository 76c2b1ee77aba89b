//! Cardio advisor entrypoint: loads the classifier once at startup, then
//! serves form submissions: an interactive prompt loop on a terminal, or a
//! single JSON submission from a file argument or piped stdin.

use cardio_advisor::{
    config::AdvisorConfig,
    encode,
    intake::{FormReader, RawInput},
    logging::StructuredLogger,
    model::{Classifier, OnnxClassifier},
    report::{self, AssessmentRecord},
    risk::{PredictionResult, RiskAdvisor},
    AdvisorError,
};
use std::io::{self, BufRead, IsTerminal, Read, Write};
use std::path::{Path, PathBuf};
use tracing::{error, info};

/// Encode then assess: the whole pipeline for one submitted form.
fn run_submission<C: Classifier>(
    advisor: &RiskAdvisor<C>,
    raw: &RawInput,
) -> Result<PredictionResult, AdvisorError> {
    let features = encode(raw)?;
    let result = advisor.assess(&features)?;
    Ok(result)
}

fn run_one_shot<C: Classifier>(
    advisor: &RiskAdvisor<C>,
    raw: &RawInput,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    match run_submission(advisor, raw) {
        Ok(result) => {
            let record = AssessmentRecord::new(&result);
            info!(
                id = %record.id,
                risk_label = result.risk_label.as_str(),
                confidence = result.confidence,
                "assessment complete"
            );
            StructuredLogger::emit_json(&record, &mut io::stdout());
            Ok(())
        }
        Err(AdvisorError::Validation(e)) => {
            eprintln!("Please correct the submission: {}", e);
            std::process::exit(2);
        }
        Err(AdvisorError::Classifier(e)) => {
            error!(error = %e, "classifier returned a malformed result");
            eprintln!("Prediction unavailable. Please try again later.");
            std::process::exit(3);
        }
        Err(e) => Err(e.into()),
    }
}

fn run_interactive<C: Classifier>(
    advisor: &RiskAdvisor<C>,
    config: &AdvisorConfig,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();

    writeln!(out, "Cardiovascular risk screening")?;
    writeln!(
        out,
        "Fill in the form to estimate your risk and receive advice."
    )?;
    writeln!(out, "Commands: screen, info, quit")?;

    loop {
        write!(out, "\n> ")?;
        out.flush()?;
        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            break;
        }
        match line.trim() {
            "" | "screen" | "s" => {
                let form = FormReader::new(&config.form);
                let Some(raw) = form.read_submission(&mut input, &mut out)? else {
                    break;
                };
                match run_submission(advisor, &raw) {
                    Ok(result) => {
                        let record = AssessmentRecord::new(&result);
                        info!(
                            id = %record.id,
                            risk_label = result.risk_label.as_str(),
                            confidence = result.confidence,
                            "assessment complete"
                        );
                        report::render_result(&mut out, &result)?;
                    }
                    Err(AdvisorError::Validation(e)) => {
                        writeln!(out, "Please correct the form: {}", e)?;
                    }
                    Err(AdvisorError::Classifier(e)) => {
                        error!(error = %e, "classifier returned a malformed result");
                        writeln!(out, "Prediction unavailable. Please try again later.")?;
                    }
                    Err(e) => return Err(e.into()),
                }
            }
            "info" | "i" => report::render_info(&mut out)?,
            "quit" | "q" | "exit" => break,
            other => writeln!(out, "unknown command {:?} (try screen, info, quit)", other)?,
        }
    }

    info!("cardio advisor stopping");
    Ok(())
}

fn read_json_submission(path: Option<&Path>) -> Result<RawInput, AdvisorError> {
    let data = match path {
        Some(p) => std::fs::read_to_string(p)?,
        None => {
            let mut buf = String::new();
            io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    Ok(serde_json::from_str(&data)?)
}

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.first().map(String::as_str) == Some("info") {
        report::render_info(&mut io::stdout())?;
        return Ok(());
    }

    let config_path = std::env::var("CARDIO_CONFIG_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("config.json"));
    let config = AdvisorConfig::load(&config_path);

    StructuredLogger::init(config.log.json, &config.log.level);

    info!(model_path = ?config.model_path, "cardio advisor starting");

    // Startup-fatal: without the artifact there is nothing to serve.
    let classifier = OnnxClassifier::load(&config.model_path)?;
    let advisor = RiskAdvisor::new(classifier);

    if let Some(path) = args.first() {
        let raw = match read_json_submission(Some(Path::new(path))) {
            Ok(raw) => raw,
            Err(AdvisorError::Serialization(e)) => {
                eprintln!("Please correct the submission: {}", e);
                std::process::exit(2);
            }
            Err(e) => return Err(e.into()),
        };
        return run_one_shot(&advisor, &raw);
    }

    if !io::stdin().is_terminal() {
        let raw = match read_json_submission(None) {
            Ok(raw) => raw,
            Err(AdvisorError::Serialization(e)) => {
                eprintln!("Please correct the submission: {}", e);
                std::process::exit(2);
            }
            Err(e) => return Err(e.into()),
        };
        return run_one_shot(&advisor, &raw);
    }

    run_interactive(&advisor, &config)
}
