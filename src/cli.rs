// src/cli.rs
use std::{env, path::PathBuf};

use crate::{
    config::{consts::INSTRUCTIONS, options::AppOptions},
    error::AppError,
    fetch::ChromeRenderer,
    file, log,
    pipeline::{self, Job},
    progress::{Progress, Stage},
};

#[derive(Debug)]
pub enum Command {
    Help,
    Instructions,
    Run { job: Job, options: AppOptions },
}

/// Prints stages to stderr so stdout stays clean.
pub struct CliProgress {
    done: usize,
    total: usize,
}

impl CliProgress {
    pub fn new() -> Self {
        Self { done: 0, total: 0 }
    }
}

impl Default for CliProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
    }
    fn stage(&mut self, stage: Stage) {
        self.done += 1;
        eprintln!("[{}/{}] {}...", self.done, self.total, stage);
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
}

pub fn run() -> Result<(), AppError> {
    match parse_args(env::args().skip(1))? {
        Command::Help => {
            eprintln!("{}", include_str!("cli_help.txt"));
        }
        Command::Instructions => {
            println!("{INSTRUCTIONS}");
        }
        Command::Run { job, options } => {
            let renderer = ChromeRenderer::new(options.fetch.clone());
            let mut prog = CliProgress::new();
            let summary = pipeline::run(&job, &options, &renderer, Some(&mut prog))?;
            eprintln!(
                "Data cleaned and saved to '{}' ({} rows)",
                summary.output.display(),
                summary.rows()
            );
        }
    }
    Ok(())
}

pub fn parse_args<I>(args: I) -> Result<Command, AppError>
where
    I: IntoIterator<Item = String>,
{
    let mut options = AppOptions::default();
    let mut job = Job::default();
    let mut out: Option<String> = None;

    let mut args = args.into_iter();
    while let Some(a) = args.next() {
        match a.as_str() {
            "-i" | "--input" => job.input = Some(PathBuf::from(value(&mut args, &a)?)),
            "-u" | "--url" => job.url = Some(value(&mut args, &a)?),
            "-o" | "--out" => out = Some(value(&mut args, &a)?),
            "--headful" => options.fetch.headless = false,
            "--chrome" => options.fetch.chrome_path = Some(PathBuf::from(value(&mut args, &a)?)),
            "--settle-ms" => {
                let v = value(&mut args, &a)?;
                options.fetch.settle_ms = v
                    .parse()
                    .map_err(|_| AppError::Usage(format!("Invalid --settle-ms: {v}")))?;
            }
            "--log" => log::set_log_path(value(&mut args, &a)?),
            "--instructions" => return Ok(Command::Instructions),
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(AppError::Usage(format!("Unknown arg: {a} (try --help)"))),
        }
    }

    if let Some(o) = out {
        options.export.set_path(file::resolve_out_path(&o).to_string_lossy().as_ref());
    }
    job.output = Some(options.export.out_path().to_path_buf());

    Ok(Command::Run { job, options })
}

fn value<I: Iterator<Item = String>>(args: &mut I, flag: &str) -> Result<String, AppError> {
    args.next()
        .ok_or_else(|| AppError::Usage(format!("Missing value for {flag}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(v: &[&str]) -> Result<Command, AppError> {
        parse_args(v.iter().map(|s| s.to_string()))
    }

    #[test]
    fn input_and_output_flags() {
        let Command::Run { job, options } = parse(&["-i", "page.html", "-o", "eq.txt"]).unwrap() else {
            panic!("expected run");
        };
        assert_eq!(job.input, Some(PathBuf::from("page.html")));
        assert!(job.output.unwrap().ends_with("eq.txt"));
        assert!(options.fetch.headless);
    }

    #[test]
    fn fetch_flags() {
        let Command::Run { job, options } =
            parse(&["--url", "https://x/y", "--headful", "--settle-ms", "500"]).unwrap()
        else {
            panic!("expected run");
        };
        assert_eq!(job.url.as_deref(), Some("https://x/y"));
        assert!(!options.fetch.headless);
        assert_eq!(options.fetch.settle_ms, 500);
    }

    #[test]
    fn bad_args_are_usage_errors() {
        assert!(matches!(parse(&["--bogus"]), Err(AppError::Usage(_))));
        assert!(matches!(parse(&["-i"]), Err(AppError::Usage(_))));
        assert!(matches!(parse(&["--settle-ms", "soon"]), Err(AppError::Usage(_))));
    }

    #[test]
    fn help_short_circuits() {
        assert!(matches!(parse(&["-i", "x", "--help"]), Ok(Command::Help)));
    }
}
