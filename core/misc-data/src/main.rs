mod adapter;
mod cli;
mod domain;
mod ports;
mod usecase;
mod wiring;


use std::process;
use cli::{config_to_command, parse_args, print_completion, Config, ParseOutcome, BIN_NAME};
use common::error::Error;
use common::ports::outbound::{LogLevel, LogRecord};
use domain::Command;
use ports::inbound::UseCaseRunner;
use wiring::{wire_misc_data, App};

/// Command をディスパッチする Runner（match は main レイヤーに集約）
struct Runner {
    app: App,
}

impl Runner {
    fn dispatch(&self, config: &Config) -> Result<i32, Error> {
        match config_to_command(config) {
            Command::Help => {
                print_help();
                Ok(0)
            }
            Command::Write => {
                let target = self.app.target_resolver.resolve(&config.target_input())?;
                self.log(
                    LogRecord::new(LogLevel::Debug, "cli", "config", "resolved target")
                        .with_field("path", target.display().to_string()),
                );
                self.app.write_status_use_case.write(&target)?;
                Ok(0)
            }
            Command::Print => {
                let target = self.app.target_resolver.resolve(&config.target_input())?;
                self.log(
                    LogRecord::new(LogLevel::Debug, "cli", "config", "resolved target (dry run)")
                        .with_field("path", target.display().to_string()),
                );
                let (_, json) = self.app.write_status_use_case.render()?;
                println!("{}", json);
                Ok(0)
            }
        }
    }

    fn log(&self, record: LogRecord) {
        let _ = self.app.logger.log(&record);
    }
}

impl UseCaseRunner for Runner {
    fn run(&self, config: Config) -> Result<i32, Error> {
        let result = self.dispatch(&config);
        if let Err(ref e) = result {
            self.log(
                LogRecord::new(LogLevel::Error, "cli", "error", e.to_string())
                    .with_field("exit_code", e.exit_code()),
            );
        }
        result
    }
}

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            if e.is_usage() {
                print_usage();
            }
            eprintln!("{}: {}", BIN_NAME, e);
            e.exit_code()
        }
    };
    process::exit(exit_code);
}

fn print_usage() {
    eprintln!("Usage: {} [-h] [-v] [-n] [-o|--output file] [-r|--root directory]", BIN_NAME);
}

fn print_help() {
    println!("Usage: {} [-h] [-v] [-n] [-o|--output file] [-r|--root directory]", BIN_NAME);
    println!("Write the current local time as {{\"updated\": \"YYYY-MM-DD HH:MM:SS\"}} to data/auto.json.");
    println!();
    println!("  -h, --help            Display this help message.");
    println!("  -v, --verbose         Print diagnostics to stderr.");
    println!("  -n, --dry-run         Print the JSON to stdout instead of writing the file.");
    println!("  -o, --output <file>   Write to this file.");
    println!("  -r, --root <dir>      Write to <dir>/data/auto.json.");
    println!("  --generate <shell>    Generate shell completion script (bash, zsh, fish, elvish, powershell).");
    println!();
    println!("Environment:");
    println!("  MISC_DATA_ROOT       Root directory containing data/. Default: .. (one level above the current directory).");
    println!("  MISC_DATA_LOG_FILE   Append JSONL logs to this file.");
    println!();
    println!("The data/ directory must already exist; it is never created.");
}

pub fn run() -> Result<i32, Error> {
    let config = match parse_args()? {
        ParseOutcome::Config(c) => c,
        ParseOutcome::GenerateCompletion(shell) => {
            print_completion(shell);
            return Ok(0);
        }
    };
    let app = wire_misc_data(config.verbose);
    let runner = Runner { app };
    runner.run(config)
}
