//! One-shot translation — `numeral translate <N>...`.

use anyhow::{Result, bail};
use serde::Serialize;
use std::path::Path;

use numeral::config::{Config, Overrides};
use numeral::session::{Answer, answer};

/// One line of `--json` output.
#[derive(Debug, Serialize)]
struct JsonAnswer<'a> {
    input: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    phrase: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

impl<'a> JsonAnswer<'a> {
    fn new(input: &'a str, answer: &'a Answer) -> Self {
        match answer {
            Answer::Translated { value, phrase } => Self {
                input,
                value: Some(*value),
                phrase: Some(phrase.as_str()),
                error: None,
            },
            Answer::Invalid(error) => Self {
                input,
                value: None,
                phrase: None,
                error: Some(error.to_string()),
            },
            Answer::Rejected { value, error } => Self {
                input,
                value: Some(*value),
                phrase: None,
                error: Some(error.to_string()),
            },
        }
    }
}

pub fn cmd_translate(
    working_dir: &Path,
    overrides: &Overrides,
    numbers: &[String],
    json: bool,
) -> Result<()> {
    let config = Config::new(working_dir, overrides)?;
    let tables = config.load_tables()?;
    let decomposer = tables.decomposer();

    let mut failed = 0;
    for raw in numbers {
        let answer = answer(&decomposer, raw, config.capitalize);
        if !answer.is_translated() {
            failed += 1;
        }

        if json {
            println!("{}", serde_json::to_string(&JsonAnswer::new(raw, &answer))?);
        } else if answer.is_translated() {
            println!("{}", answer.render(raw));
        } else {
            eprintln!("{}", numeral::ui::error_line(&answer.render(raw)));
        }
    }

    if failed > 0 {
        bail!("{} of {} number(s) could not be translated", failed, numbers.len());
    }
    Ok(())
}
