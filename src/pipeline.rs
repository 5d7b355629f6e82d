// src/pipeline.rs
//
// One invocation: input (file or URL) → text → table → output file.
// Callers pass everything in a `Job`; no UI state is read from here.

use std::path::{Path, PathBuf};

use crate::{
    config::options::AppOptions,
    error::AppError,
    extract::NormalizedTable,
    fetch::{self, Renderer},
    file,
    progress::{NullProgress, Progress, Stage},
};

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Url(String),
}

/// What the user asked for. Blank fields count as missing.
#[derive(Clone, Debug, Default)]
pub struct Job {
    pub input: Option<PathBuf>,
    pub url: Option<String>,
    pub output: Option<PathBuf>,
}

impl Job {
    /// URL wins when both are set.
    pub fn source(&self) -> Option<Source> {
        if let Some(u) = self.url.as_deref().map(str::trim).filter(|u| !u.is_empty()) {
            return Some(Source::Url(s!(u)));
        }
        self.input
            .as_ref()
            .filter(|p| !p.as_os_str().is_empty())
            .map(|p| Source::File(p.clone()))
    }

    pub fn output(&self) -> Option<&Path> {
        self.output.as_deref().filter(|p| !p.as_os_str().is_empty())
    }
}

/// Summary of what was produced.
#[derive(Debug)]
pub struct RunSummary {
    pub output: PathBuf,
    pub table: NormalizedTable,
    /// Temp file the fetched page was parked in (already removed).
    pub fetched: Option<PathBuf>,
}

impl RunSummary {
    pub fn rows(&self) -> usize {
        self.table.row_count()
    }
}

/// Top-level runner. `progress` can be None (no UI updates).
pub fn run(
    job: &Job,
    options: &AppOptions,
    renderer: &dyn Renderer,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary, AppError> {
    let mut null = NullProgress;
    let progress: &mut dyn Progress = match progress {
        Some(p) => p,
        None => &mut null,
    };

    progress.begin(stage_count(job));
    let res = run_inner(job, options, renderer, &mut *progress);
    match &res {
        Ok(s) => logf!("Run: OK rows={} out={}", s.rows(), s.output.display()),
        Err(e) => loge!("Run: Error: {}", e),
    }
    progress.finish(res.is_ok());
    res
}

fn run_inner(
    job: &Job,
    options: &AppOptions,
    renderer: &dyn Renderer,
    progress: &mut dyn Progress,
) -> Result<RunSummary, AppError> {
    // Validate everything before touching disk or network
    let source = job
        .source()
        .ok_or(AppError::MissingInput("Please select an input file or enter a URL."))?;
    let output = job
        .output()
        .ok_or(AppError::MissingInput("Please select an output file."))?
        .to_path_buf();

    // Temp file lives until this function returns, on every path.
    let (temp, input_path) = match source {
        Source::File(p) => {
            logf!("Run: Begin file={} out={}", p.display(), output.display());
            (None, p)
        }
        Source::Url(u) => {
            logf!("Run: Begin url={} out={}", u, output.display());
            enter(progress, Stage::Fetch);
            let tmp = fetch::fetch_to_tempfile(renderer, &u, options.fetch.temp_dir.as_deref())?;
            let path = tmp.path().to_path_buf();
            logd!("Run: fetched page parked at {}", path.display());
            (Some(tmp), path)
        }
    };
    let fetched = temp.as_ref().map(|t| t.path().to_path_buf());

    enter(progress, Stage::Read);
    let doc = file::read_document(&input_path)?;
    if doc.is_empty() {
        logw!("Run: {} is empty", input_path.display());
    }
    progress.log(&format!("Read {} bytes", doc.len()));

    enter(progress, Stage::Extract);
    let table = options.extract.extract(doc.as_str())?;
    progress.log(&format!("Extracted {} row(s)", table.row_count()));

    enter(progress, Stage::Write);
    file::write_table(&output, &table)?;

    drop(temp);
    Ok(RunSummary { output, table, fetched })
}

fn enter(progress: &mut dyn Progress, stage: Stage) {
    logd!("Run: stage {:?}", stage);
    progress.stage(stage);
}

/// Number of stages a job will report, for progress totals.
pub fn stage_count(job: &Job) -> usize {
    match job.source() {
        Some(Source::Url(_)) => 4,
        _ => 3,
    }
}
