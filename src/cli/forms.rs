//! Read-validate-retry collection of rent terms, driven by declarative field
//! specs. Produces a [`RentRequest`] that the engine then validates again.

use std::collections::BTreeMap;
use std::io::BufRead;

use chrono::NaiveDate;
use dialoguer::{theme::ColorfulTheme, Input};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::cli::output;
use crate::errors::CliError;
use crate::schedule::validation::{parse_date, validate_amount};
use crate::schedule::{PaymentMethod, RentChangeDetails, RentDetails, RentRequest};

static AMOUNT_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+(\.[0-9]{1,2})?$").expect("static amount pattern"));

const FREQUENCY_CHOICES: &[&str] = &["weekly", "fortnightly", "monthly"];
const METHOD_CHOICES: &[&str] = &["instant", "credit_card", "bank_transfer"];

type Answers = BTreeMap<&'static str, String>;

/// Supplies raw answers to prompts.
pub trait LineSource {
    /// Returns `None` once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError>;

    fn report_error(&mut self, message: &str) {
        output::error(message);
    }
}

/// Interactive terminal prompts.
pub struct TerminalSource {
    theme: ColorfulTheme,
}

impl TerminalSource {
    pub fn new() -> Self {
        Self {
            theme: ColorfulTheme::default(),
        }
    }
}

impl Default for TerminalSource {
    fn default() -> Self {
        Self::new()
    }
}

impl LineSource for TerminalSource {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        let value = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()?;
        Ok(Some(value))
    }
}

/// Line-oriented answers from a reader, used for scripted sessions.
pub struct ScriptSource<R> {
    reader: R,
}

impl<R: BufRead> ScriptSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ScriptSource<R> {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>, CliError> {
        output::prompt(prompt);
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    Amount,
    Menu(&'static [&'static str]),
    OptionalMenu(&'static [&'static str]),
    Date,
    DateAfter(&'static str),
}

impl Rule {
    fn accept(&self, input: &str, answers: &Answers) -> Option<String> {
        match self {
            Rule::Amount => {
                let amount: f64 = input.parse().ok()?;
                (AMOUNT_PATTERN.is_match(input) && validate_amount(amount).is_ok())
                    .then(|| input.to_string())
            }
            Rule::Menu(choices) => pick(choices, input),
            Rule::OptionalMenu(choices) => {
                if input.is_empty() {
                    Some(String::new())
                } else {
                    pick(choices, input)
                }
            }
            Rule::Date => parse_date(input, "date").ok().map(|_| input.to_string()),
            Rule::DateAfter(earlier_key) => {
                let date = parse_date(input, "date").ok()?;
                let earlier = answers
                    .get(earlier_key)
                    .and_then(|raw| NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok())?;
                (date > earlier).then(|| input.to_string())
            }
        }
    }
}

fn pick(choices: &[&str], input: &str) -> Option<String> {
    if let Ok(index) = input.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|i| choices.get(i))
            .map(|choice| choice.to_string());
    }
    choices
        .iter()
        .find(|choice| choice.eq_ignore_ascii_case(input))
        .map(|choice| choice.to_string())
}

struct FieldSpec {
    key: &'static str,
    prompt: &'static str,
    error: &'static str,
    rule: Rule,
}

const RENT_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "rent_amount",
        prompt: "Enter Rent Amount (e.g., 15000.00)",
        error: "Invalid amount. Please enter a valid number (e.g., 15000.00).",
        rule: Rule::Amount,
    },
    FieldSpec {
        key: "rent_frequency",
        prompt: "Select Rent Frequency:\n  1. Weekly\n  2. Fortnightly\n  3. Monthly\nEnter your choice (1, 2, or 3)",
        error: "Invalid choice. Please enter 1, 2, or 3.",
        rule: Rule::Menu(FREQUENCY_CHOICES),
    },
    FieldSpec {
        key: "rent_start_date",
        prompt: "Enter Rent Start Date (YYYY-MM-DD)",
        error: "Invalid date format. Please use YYYY-MM-DD.",
        rule: Rule::Date,
    },
    FieldSpec {
        key: "rent_end_date",
        prompt: "Enter Rent End Date (YYYY-MM-DD)",
        error: "Invalid date format or end date must be after start date. Please use YYYY-MM-DD.",
        rule: Rule::DateAfter("rent_start_date"),
    },
    FieldSpec {
        key: "payment_method",
        prompt: "Select Payment Method:\n  1. Instant\n  2. Credit card (2 days)\n  3. Bank transfer (3 days)\nEnter your choice (1, 2, or 3; blank for default)",
        error: "Invalid choice. Please enter 1, 2, or 3.",
        rule: Rule::OptionalMenu(METHOD_CHOICES),
    },
];

const CHANGE_FIELDS: &[FieldSpec] = &[
    FieldSpec {
        key: "rent_amount",
        prompt: "Enter New Rent Amount (e.g., 16000.00)",
        error: "Invalid amount. Please enter a valid number (e.g., 16000.00).",
        rule: Rule::Amount,
    },
    FieldSpec {
        key: "effective_date",
        prompt: "Enter Effective Date (YYYY-MM-DD)",
        error: "Invalid date format. Please use YYYY-MM-DD.",
        rule: Rule::Date,
    },
];

const ADD_CHANGE_PROMPT: &str = "Add a rent change? (y/N)";

fn collect_fields(
    source: &mut dyn LineSource,
    specs: &[FieldSpec],
) -> Result<Answers, CliError> {
    let mut answers = Answers::new();
    for spec in specs {
        loop {
            let line = source.read_line(spec.prompt)?.ok_or_else(|| {
                CliError::Prompt(format!("input ended before `{}` was provided", spec.key))
            })?;
            if let Some(value) = spec.rule.accept(line.trim(), &answers) {
                answers.insert(spec.key, value);
                break;
            }
            source.report_error(spec.error);
        }
    }
    Ok(answers)
}

fn answer<'a>(answers: &'a Answers, key: &str) -> Result<&'a str, CliError> {
    answers
        .get(key)
        .map(String::as_str)
        .ok_or_else(|| CliError::Prompt(format!("missing answer for `{}`", key)))
}

fn amount_answer(answers: &Answers) -> Result<f64, CliError> {
    let raw = answer(answers, "rent_amount")?;
    raw.parse()
        .map_err(|_| CliError::Prompt(format!("unreadable amount `{}`", raw)))
}

fn wants_another_change(source: &mut dyn LineSource) -> Result<bool, CliError> {
    let reply = source.read_line(ADD_CHANGE_PROMPT)?.unwrap_or_default();
    Ok(matches!(
        reply.trim().to_ascii_lowercase().as_str(),
        "y" | "yes"
    ))
}

/// Collects the rent terms followed by any number of rent changes.
///
/// A blank payment method falls back to `default_method`, and then to the
/// engine's own default.
pub fn collect_request(
    source: &mut dyn LineSource,
    default_method: Option<PaymentMethod>,
) -> Result<RentRequest, CliError> {
    let answers = collect_fields(source, RENT_FIELDS)?;
    let payment_method = match answer(&answers, "payment_method")? {
        "" => default_method.map(|method| method.to_string()),
        chosen => Some(chosen.to_string()),
    };
    let details = RentDetails {
        rent_amount: amount_answer(&answers)?,
        rent_frequency: answer(&answers, "rent_frequency")?.to_string(),
        rent_start_date: answer(&answers, "rent_start_date")?.to_string(),
        rent_end_date: answer(&answers, "rent_end_date")?.to_string(),
        payment_method,
    };

    let mut rent_changes = Vec::new();
    while wants_another_change(source)? {
        let change = collect_fields(source, CHANGE_FIELDS)?;
        rent_changes.push(RentChangeDetails::new(
            amount_answer(&change)?,
            answer(&change, "effective_date")?,
        ));
    }

    Ok(RentRequest {
        details,
        rent_changes,
    })
}
