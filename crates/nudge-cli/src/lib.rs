//! Driver behind the `nudge` binary.
//!
//! Reads a pgsolver game, optionally mutates it, optionally shrinks it to a
//! bottom SCC, applies the requested priority transforms and writes the
//! result back in pgsolver format.

pub mod logging;

use std::fs::File;
use std::io::{self, BufReader, BufWriter, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;
use nudge_core::errors::{ErrorInfo, NudgeError};
use nudge_core::Sampler;
use nudge_game::{bottom_scc, parse_pgsolver, write_pgsolver, Game};
use nudge_mutate::{mutate_with_config, MutationConfig, Profile, RunSummary};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

/// Command line arguments of `nudge`.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "nudge", about = "Mutate and normalise pgsolver parity games")]
pub struct Args {
    /// Input game; reads stdin when omitted.
    pub input: Option<PathBuf>,
    /// Output file; writes stdout when omitted.
    pub output: Option<PathBuf>,
    /// Mutate the game using profile 0 (remove only), 1 (remove or add) or anything else (all actions).
    #[arg(short = 'm', long = "modify", value_name = "PROFILE", allow_negative_numbers = true)]
    pub modify: Option<i64>,
    /// Number of successful mutations.
    #[arg(short = 'n', long = "count", value_name = "N")]
    pub count: Option<usize>,
    /// YAML mutation configuration; implies mutation.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Master seed for every random choice.
    #[arg(long)]
    pub seed: Option<u64>,
    /// Keep only a bottom SCC reached from a random node.
    #[arg(short = 'b', long = "bottom-scc")]
    pub bottom_scc: bool,
    /// Give every node a unique priority.
    #[arg(short = 'i', long)]
    pub inflate: bool,
    /// Merge neighbouring priorities of equal parity.
    #[arg(short = 'c', long)]
    pub compress: bool,
    /// Renumber priorities without gaps.
    #[arg(short = 'r', long)]
    pub renumber: bool,
    /// Order nodes by priority in the output.
    #[arg(short = 'o', long)]
    pub order: bool,
    /// Swap players: priorities shift by one and owners flip.
    #[arg(long)]
    pub evenodd: bool,
    /// Convert between min and max parity conditions.
    #[arg(long)]
    pub minmax: bool,
    /// Write the mutation run summary as JSON.
    #[arg(long, value_name = "PATH")]
    pub summary: Option<PathBuf>,
}

impl Args {
    fn mutates(&self) -> bool {
        self.modify.is_some() || self.config.is_some()
    }

    /// Mutation configuration after command line overrides.
    pub fn mutation_config(&self) -> Result<MutationConfig, NudgeError> {
        let mut config = match &self.config {
            Some(path) => MutationConfig::load(path)?,
            None => MutationConfig::default(),
        };
        if let Some(code) = self.modify {
            config.profile = Profile::from_code(code);
        }
        if let Some(count) = self.count {
            config.successes = count;
        }
        if let Some(seed) = self.seed {
            config.seed_policy.master_seed = Some(seed);
        }
        Ok(config)
    }
}

/// Runs the pipeline from `reader` to `writer`.
///
/// Returns the mutation summary when a mutation run took place.
pub fn run<R: Read, W: Write>(
    args: &Args,
    reader: R,
    writer: W,
) -> Result<Option<RunSummary>, NudgeError> {
    let config = args.mutation_config()?;
    let mut game = parse_pgsolver(reader)?;
    info!(nodes = game.node_count(), edges = game.edge_count(), "read game");

    let summary = if args.mutates() {
        let mut rng = config.seed_policy.mutation_rng();
        Some(mutate_with_config(&mut game, &config, &mut rng)?)
    } else {
        if let Some(count) = args.count {
            warn!(count, "--count has no effect without --modify or --config");
        }
        None
    };

    if args.bottom_scc {
        game = restrict_to_bottom_scc(game, &config)?;
    }

    let mapping = game.reindex_with_mapping()?;
    if args.evenodd {
        game.evenodd()?;
    }
    if args.minmax {
        game.minmax()?;
    }
    if args.inflate {
        game.inflate();
    }
    if args.compress {
        game.compress();
    }
    if args.renumber {
        game.renumber();
    }
    if args.order {
        game.reindex()?;
    } else {
        game.permute(&mapping)?;
    }

    write_pgsolver(&game, writer)?;
    Ok(summary)
}

fn restrict_to_bottom_scc(game: Game, config: &MutationConfig) -> Result<Game, NudgeError> {
    if game.is_empty() {
        warn!("empty game has no bottom SCC");
        return Ok(game);
    }
    let mut rng = config.seed_policy.selection_rng();
    let start = rng.uniform(0, game.node_count() - 1);
    let members = bottom_scc(&game, start, true)?;
    debug!(start, size = members.len(), "selected bottom SCC");
    game.extract_subgame(&members)
}

/// Opens the files named in `args`, runs the pipeline and writes the summary.
///
/// The input is consumed and the whole pipeline finishes before the output
/// is touched, so a failed run leaves an existing output file intact and
/// the input may also be named as the output.
pub fn execute(args: &Args) -> Result<(), NudgeError> {
    let reader: Box<dyn Read> = match &args.input {
        Some(path) => Box::new(BufReader::new(open(path)?)),
        None => Box::new(io::stdin().lock()),
    };
    let mut rendered = Vec::new();
    let summary = run(args, reader, &mut rendered)?;

    match &args.output {
        Some(path) => replace_file(path, &rendered)?,
        None => {
            let mut stdout = io::stdout().lock();
            stdout
                .write_all(&rendered)
                .and_then(|()| stdout.flush())
                .map_err(|err| NudgeError::io("write-output", err))?;
        }
    }

    match (&args.summary, summary) {
        (Some(path), Some(summary)) => write_summary(path, &summary),
        (Some(path), None) => {
            warn!(path = %path.display(), "no mutation ran; summary not written");
            Ok(())
        }
        (None, _) => Ok(()),
    }
}

/// Writes `contents` next to `path` and renames it into place.
fn replace_file(path: &Path, contents: &[u8]) -> Result<(), NudgeError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    let mut staged = NamedTempFile::new_in(dir)
        .map_err(|err| with_path(NudgeError::io("create-output", err), path))?;
    staged
        .write_all(contents)
        .and_then(|()| staged.flush())
        .map_err(|err| with_path(NudgeError::io("write-output", err), path))?;
    staged
        .persist(path)
        .map_err(|err| with_path(NudgeError::io("persist-output", err.error), path))?;
    Ok(())
}

/// Writes `summary` to `path` as pretty JSON.
pub fn write_summary(path: &Path, summary: &RunSummary) -> Result<(), NudgeError> {
    let mut writer = BufWriter::new(create(path)?);
    serde_json::to_writer_pretty(&mut writer, summary).map_err(|err| {
        NudgeError::Io(
            ErrorInfo::new("summary-write", err.to_string()).with_context("path", path.display()),
        )
    })?;
    writer
        .write_all(b"\n")
        .and_then(|()| writer.flush())
        .map_err(|err| NudgeError::io("write-summary", err))
}

fn open(path: &Path) -> Result<File, NudgeError> {
    File::open(path).map_err(|err| with_path(NudgeError::io("open-input", err), path))
}

fn create(path: &Path) -> Result<File, NudgeError> {
    File::create(path).map_err(|err| with_path(NudgeError::io("create-output", err), path))
}

fn with_path(err: NudgeError, path: &Path) -> NudgeError {
    match err {
        NudgeError::Io(info) => NudgeError::Io(info.with_context("path", path.display())),
        other => other,
    }
}
