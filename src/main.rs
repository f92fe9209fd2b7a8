use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use case_cycle::case::{segment, CaseVariant};
use case_cycle::cli::{CliArgs, OutputMode, RunConfig};
use case_cycle::model::AppModel;
use case_cycle::runtime::{BufferHost, Runtime};

/// One invocation's outcome, as printed
#[derive(Debug, Serialize)]
struct StepReport {
    step: usize,
    variant: CaseVariant,
    texts: Vec<String>,
}

fn main() -> Result<()> {
    let run = CliArgs::parse().into_config().map_err(anyhow::Error::msg)?;

    case_cycle::tracing::init();

    match run.output {
        OutputMode::Segments => print_segments(&run.texts),
        OutputMode::Text | OutputMode::Json => {
            let steps = run_steps(&run);
            if run.output == OutputMode::Json {
                println!("{}", serde_json::to_string_pretty(&steps)?);
            } else {
                for report in &steps {
                    println!(
                        "{:>3}  {:<8}  {}",
                        report.step,
                        report.variant,
                        report.texts.join(" | ")
                    );
                }
            }
        }
    }

    Ok(())
}

fn run_steps(run: &RunConfig) -> Vec<StepReport> {
    let model = AppModel::new(run.load_cycle_config());
    tracing::debug!(order = ?model.order.as_slice(), "Starting run");

    let mut runtime = Runtime::new(model, BufferHost::from_selected_texts(&run.texts));
    (1..=run.steps)
        .map(|step| {
            runtime.cycle(run.direction);
            StepReport {
                step,
                variant: runtime.model.current_variant(),
                texts: runtime.host.selected_texts(),
            }
        })
        .collect()
}

fn print_segments(texts: &[String]) {
    for text in texts {
        let parts: Vec<String> = segment(text)
            .iter()
            .map(|part| {
                if part.is_word {
                    format!("[{}]", part.text)
                } else {
                    format!("{:?}", part.text)
                }
            })
            .collect();
        println!("{}", parts.join(" "));
    }
}
