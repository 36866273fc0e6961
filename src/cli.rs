// src/cli.rs
use std::{env, path::PathBuf};

use crate::csv::Delim;
use crate::params::{Params, Source};
use crate::progress::Progress;
use crate::runner;

/// Prints runner status straight to stdout.
struct ConsoleProgress {
    total: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn log(&mut self, msg: &str) {
        println!("{msg}");
    }
    fn page_done(&mut self, index: usize, rows: usize) {
        println!("[{}/{}] {} rows", index + 1, self.total, rows);
    }
}

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut params = Params::new();
    parse_cli(&mut params)?;

    let mut progress = ConsoleProgress { total: 0 };
    runner::run(&params, Some(&mut progress)).map(|_| ())
}

fn parse_cli(params: &mut Params) -> Result<(), Box<dyn std::error::Error>> {
    let mut args = env::args().skip(1);
    if env::args().len() == 1 {
        eprintln!(include_str!("cli_help.txt"));
        std::process::exit(2);
    }

    while let Some(a) = args.next() {
        match a.as_str() {
            "-u" | "--url" => {
                let v = args.next().ok_or("Missing value for --url")?;
                params.sources.push(Source::Url(v));
            }
            "-f" | "--file" => {
                let v = args.next().ok_or("Missing value for --file")?;
                params.sources.push(Source::File(PathBuf::from(v)));
            }
            "-p" | "--pick" => {
                params.pick = Some(args.next().ok_or("Missing value for --pick")?);
            }
            "--locator" => {
                params.locator = Some(args.next().ok_or("Missing value for --locator")?);
            }
            "-c" | "--crawl" => params.crawl = true,
            "--schema" => {
                params.schema_path =
                    PathBuf::from(args.next().ok_or("Missing value for --schema")?);
            }
            "-o" | "--out" => {
                params.out = Some(PathBuf::from(args.next().ok_or("Missing output path")?));
            }
            "--format" => {
                let v = args.next().ok_or("Missing value for --format")?;
                params.format = match v.to_ascii_lowercase().as_str() {
                    "csv" => Delim::Csv,
                    "tsv" => Delim::Tsv,
                    other => return Err(format!("Unknown format: {}", other).into()),
                };
            }
            "--no-headers" => params.include_headers = false,
            "--delay-ms" => {
                params.delay_ms = args.next().ok_or("Missing value for --delay-ms")?.parse()?;
            }
            "-h" | "--help" => {
                eprintln!(include_str!("cli_help.txt"));
                std::process::exit(0);
            }
            _ => return Err(format!("Unknown arg: {}", a).into()),
        }
    }

    if params.pick.is_some() && params.crawl {
        return Err("--pick and --crawl are separate steps; run them one at a time".into());
    }

    Ok(())
}
