use std::{
    env, fs,
    io::{self, IsTerminal},
    path::Path,
};

use tracing::{info, warn};

use crate::cli::forms::{self, LineSource, ScriptSource, TerminalSource};
use crate::cli::output::{self, OutputPreferences};
use crate::cli::render;
use crate::config::{Config, ConfigError, ConfigManager};
use crate::errors::CliError;
use crate::schedule::{RentAgreement, RentRequest, ScheduleSummary};
use crate::utils::build_info;

const SCRIPT_ENV: &str = "RENT_SCHEDULE_CLI_SCRIPT";

const USAGE: &str = "Usage: rent_schedule_cli [command]\n\
Commands:\n  \
prompt                           Collect rent terms interactively (default)\n  \
schedule <request.json> [--json] Compute the schedule for a request file\n  \
config show                      Show preferences\n  \
config set <key> <value>         Update a preference\n  \
version                          Show build metadata\n  \
help                             Show this message";

/// Entry point used by the binary: runs the command named on the command line.
pub fn run_cli() -> Result<(), CliError> {
    run_with_args(env::args().skip(1).collect())
}

pub fn run_with_args(args: Vec<String>) -> Result<(), CliError> {
    let manager = ConfigManager::new();
    apply_preferences(&Config::default());

    let mut args = args.into_iter();
    match args.next().as_deref() {
        None | Some("prompt") => cmd_prompt(&load_config(&manager)?),
        Some("schedule") => {
            let path = args.next().ok_or_else(usage_error)?;
            let as_json = match args.next().as_deref() {
                None => false,
                Some("--json") => true,
                Some(_) => return Err(usage_error()),
            };
            cmd_schedule(Path::new(&path), as_json, &load_config(&manager)?)
        }
        Some("config") => cmd_config(&manager, args.collect()),
        Some("version") => cmd_version(),
        Some("help" | "--help" | "-h") => {
            println!("{USAGE}");
            Ok(())
        }
        Some(other) => Err(CliError::Usage(format!(
            "Unknown command `{other}`\n{USAGE}"
        ))),
    }
}

fn apply_preferences(config: &Config) {
    output::set_preferences(OutputPreferences {
        color_enabled: config.ui_color_enabled && env::var_os("NO_COLOR").is_none(),
    });
}

fn load_config(manager: &ConfigManager) -> Result<Config, CliError> {
    let config = manager.load()?;
    apply_preferences(&config);
    Ok(config)
}

fn usage_error() -> CliError {
    CliError::Usage(USAGE.to_string())
}

fn cmd_prompt(config: &Config) -> Result<(), CliError> {
    output::section("Rent Payment Scheduler");
    let scripted = env::var_os(SCRIPT_ENV).is_some() || !io::stdin().is_terminal();
    let request = if scripted {
        let stdin = io::stdin();
        let mut source = ScriptSource::new(stdin.lock());
        collect(&mut source, config)?
    } else {
        collect(&mut TerminalSource::new(), config)?
    };
    let agreement = RentAgreement::from_request(&request)?;
    print_table(&agreement, config);
    Ok(())
}

fn collect(source: &mut dyn LineSource, config: &Config) -> Result<RentRequest, CliError> {
    forms::collect_request(source, config.default_payment_method)
}

fn cmd_schedule(path: &Path, as_json: bool, config: &Config) -> Result<(), CliError> {
    let data = fs::read_to_string(path)?;
    let mut request: RentRequest = serde_json::from_str(&data)?;
    if request.details.payment_method.is_none() {
        request.details.payment_method = config.default_payment_method.map(|m| m.to_string());
    }
    let agreement = RentAgreement::from_request(&request)?;
    info!(path = %path.display(), "computing schedule from request file");

    if as_json {
        println!("{}", serde_json::to_string_pretty(&agreement.generate())?);
    } else {
        print_table(&agreement, config);
    }
    Ok(())
}

fn print_table(agreement: &RentAgreement, config: &Config) {
    let records = agreement.generate();
    output::section("Calculated Payment Dates");
    output::info(format!(
        "{} rent from {} to {}, paid by {}",
        agreement.frequency().label(),
        agreement.start_date(),
        agreement.end_date(),
        agreement.payment_method().label().to_lowercase()
    ));
    println!("{}", render::schedule_table(&records, config));
    let summary = ScheduleSummary::from_records(&records);
    output::info(render::summary_line(&summary, config));
}

fn cmd_config(manager: &ConfigManager, args: Vec<String>) -> Result<(), CliError> {
    match args.iter().map(String::as_str).collect::<Vec<_>>().as_slice() {
        [] | ["show"] => {
            let config = load_config(manager)?;
            output::section("Configuration");
            for key in Config::KEYS {
                println!("{key:<24}{}", config.get(key)?);
            }
            println!("{:<24}{}", "path", manager.path().display());
            Ok(())
        }
        ["set", key, value] => {
            // Unparseable files are overwritten with defaults plus this key.
            let mut config = match manager.load() {
                Ok(config) => config,
                Err(ConfigError::Serde(reason)) => {
                    warn!(
                        path = %manager.path().display(),
                        %reason,
                        "config unreadable, starting from defaults"
                    );
                    output::warning(format!(
                        "Existing configuration at {} is unreadable; starting from defaults",
                        manager.path().display()
                    ));
                    Config::default()
                }
                Err(err) => return Err(err.into()),
            };
            config.set(key, value)?;
            manager.save(&config)?;
            apply_preferences(&config);
            output::success(format!("{key} set to {}", config.get(key)?));
            Ok(())
        }
        _ => Err(usage_error()),
    }
}

fn cmd_version() -> Result<(), CliError> {
    let meta = build_info::current();
    output::section(format!("Rent Schedule {}", meta.version));
    for (label, value) in meta.rows() {
        println!("{label:<12}{value}");
    }
    Ok(())
}
