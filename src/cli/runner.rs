use super::Args;
use super::Command;
use crate::corpus;
use crate::corpus::Item;
use crate::corpus::Stats;
use crate::corpus::Validated;
use crate::game::Outcome;
use crate::pipeline;
use crate::pipeline::Evaluation;
use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use std::path::Path;
use std::path::PathBuf;

/// Command-line entry point over category files and single games.
pub struct CLI;

impl CLI {
    pub fn run() -> anyhow::Result<()> {
        let args = Args::parse();
        Self::pool(args.threads)?;
        match args.command {
            Command::Validate { files } => Self::rewrite(&files, corpus::validate),
            Command::Solve { files } => Self::rewrite(&files, corpus::solve),
            Command::Feedback { pass, files } => {
                Self::tally(&files, |items| corpus::feedback(items, pass))
            }
            Command::Run { pass, files } => Self::tally(&files, |items| corpus::run(items, pass)),
            Command::Collect { output, files } => Self::collect(&files, output),
            Command::Inspect { game, outcome } => Self::inspect(&game, outcome.as_deref()),
        }
    }

    fn pool(threads: Option<usize>) -> anyhow::Result<()> {
        let n = threads.unwrap_or_else(num_cpus::get);
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .context("building thread pool")?;
        log::info!("running on {} threads", n);
        Ok(())
    }

    /// categories that fail to load are logged and skipped
    fn categories(files: &[PathBuf]) -> impl Iterator<Item = (&Path, Vec<Item>)> {
        files.iter().filter_map(|path| match corpus::load(path) {
            Ok(items) => Some((path.as_path(), items)),
            Err(e) => {
                log::error!("skipping {}: {:#}", path.display(), e);
                None
            }
        })
    }

    fn rewrite<F>(files: &[PathBuf], stage: F) -> anyhow::Result<()>
    where
        F: Fn(&[Item]) -> Vec<Item>,
    {
        for (path, items) in Self::categories(files) {
            corpus::save(path, &stage(&items))?;
        }
        Ok(())
    }

    fn tally<F>(files: &[PathBuf], stage: F) -> anyhow::Result<()>
    where
        F: Fn(&[Item]) -> (Vec<Item>, Stats),
    {
        let mut total = Stats::default();
        for (path, items) in Self::categories(files) {
            let (items, stats) = stage(&items);
            corpus::save(path, &items)?;
            println!("{}", path.display().to_string().bold().cyan());
            print!("{}", stats);
            total += stats;
        }
        if files.len() > 1 {
            println!("{}", "all categories".bold().cyan());
            print!("{}", total);
        }
        Ok(())
    }

    fn collect(files: &[PathBuf], output: Option<PathBuf>) -> anyhow::Result<()> {
        let mut combined = Vec::<Validated>::new();
        for (path, items) in Self::categories(files) {
            let validated = corpus::collect(&items);
            println!("{} {}", path.display(), format!("{} validated", validated.len()).green());
            match output {
                Some(_) => combined.extend(validated),
                None => corpus::save(&Self::sibling(path), &validated)?,
            }
        }
        match output {
            Some(ref path) => corpus::save(path, &combined),
            None => Ok(()),
        }
    }

    /// `<dir>/<stem>-validated.json` beside the category
    fn sibling(path: &Path) -> PathBuf {
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        path.with_file_name(format!("{}-validated.json", stem))
    }

    fn inspect(game: &Path, outcome: Option<&str>) -> anyhow::Result<()> {
        let text = std::fs::read_to_string(game)
            .with_context(|| format!("reading game {}", game.display()))?;
        let document = serde_json::from_str::<serde_json::Value>(&text)
            .with_context(|| format!("parsing game {}", game.display()))?;
        let outcome = outcome
            .map(serde_json::from_str::<Outcome>)
            .transpose()
            .context("parsing outcome")?;
        let evaluation = pipeline::evaluate(&document, outcome.as_ref());
        Self::display(&evaluation)
    }

    fn display(evaluation: &Evaluation) -> anyhow::Result<()> {
        let report = evaluation.report();
        match report.valid() {
            true => println!("{} {}", "valid".green().bold(), report.message()),
            false => println!("{} {}", "invalid".red().bold(), report.message()),
        }
        if let Some(equilibria) = evaluation.equilibria() {
            println!("{}", corpus::render(equilibria)?);
        }
        if let Some(classification) = evaluation.classification() {
            println!("{} {}", "verdict".bold(), classification.verdict());
        }
        match evaluation.validated() {
            Some(true) => println!("{} {}", "outcome".bold(), "in equilibrium".green()),
            Some(false) => println!("{} {}", "outcome".bold(), "not in equilibrium".red()),
            None => {}
        }
        println!("{} {}", "feedback".bold(), evaluation.feedback());
        Ok(())
    }
}
