// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;
use std::str::FromStr;

use clap::Parser;
use log::{debug, info, warn, LevelFilter};
use simple_logger::SimpleLogger;

use mysqldump_oracle::config::{Config, Loaded};
use mysqldump_oracle::{Converter, WriteSink};

#[derive(Parser)]
#[command(name = "convert-sql", version)]
#[command(about = "convert MySQL SQL lines into Oracle SQL")]
#[command(
    long_about = "convert MySQL SQL dump (from TablePlus) into Oracle SQL (SQLdeveloper-compliant)
and print it to standard output.
Beware your primary keys are ignored, so you have to make it manually."
)]
struct Cli {
    /// MySQL dump to convert
    filename: PathBuf,

    /// config file (default is $HOME/.ConvertSql.yaml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Accepted for compatibility, has no effect
    #[arg(short, long)]
    toggle: bool,

    /// Log verbosity: error, warn, info, debug, trace
    #[arg(long, env = "CONVERTSQL_LOG_LEVEL")]
    log_level: Option<String>,
}

fn init_logging(level: &str) {
    let filter = LevelFilter::from_str(level).unwrap_or(LevelFilter::Warn);
    if let Err(e) = SimpleLogger::new().with_level(filter).env().init() {
        eprintln!("cannot initialize logging: {}", e);
    }
    if filter.as_str() != level.to_uppercase() {
        warn!("unknown log level {:?}, using warn", level);
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            let _ = e.print();
            return if e.use_stderr() {
                ExitCode::from(1)
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    let loaded = Config::discover(cli.config.as_deref());
    let config = loaded.config();
    let level = cli
        .log_level
        .clone()
        .or(config.log_level)
        .unwrap_or_else(|| "warn".to_string());
    init_logging(&level);

    match &loaded {
        Loaded::File(path, _) => info!("Using config file: {}", path.display()),
        Loaded::Failed(e) => warn!("{}, using defaults", e),
        Loaded::Defaults => debug!("no config file"),
    }
    if cli.toggle {
        debug!("--toggle has no effect");
    }

    let stdout = io::stdout();
    let mut sink = WriteSink::new(BufWriter::new(stdout.lock()));
    let result = Converter::convert_file(&cli.filename, &mut sink).and_then(|_| sink.flush());

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let _ = sink.flush();
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}
