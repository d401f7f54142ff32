use clap::{Parser, ValueEnum};
use std::process::ExitCode;

use crossgrid::errors::InputError;
use crossgrid::placement::{self, Layout};
use crossgrid::word_list::WordList;

/// How the finished grid is written to stdout.
#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    /// One line per row, '.' for blank cells
    Text,
    /// Letters annotated with clue numbers ("0,3:c"), tab-separated
    Annotated,
    /// JSON array of rows of {letter, clue} cells
    Json,
}

/// Build a crossword grid from an ordered list of words
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Words to place, in clue order (placed after any words from --word-list)
    words: Vec<String>,

    /// Path to a word list file (one "word" or "word;tip" per line)
    #[arg(short, long)]
    word_list: Option<String>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Also print the numbered clue list (with tips, if the word list has them)
    #[arg(short, long)]
    clues: bool,
}

/// Entry point of the crossgrid CLI.
///
/// Delegates to [`try_main`], catching any errors and printing them
/// in a user-friendly way before exiting with code 1.
fn main() -> ExitCode {
    crossgrid::log::init_logger(crossgrid::log::debug_requested());

    if let Err(e) = try_main() {
        if let Some(input_err) = e.downcast_ref::<InputError>() {
            eprintln!("Error: {}", input_err.display_detailed());
        } else {
            eprintln!("Error: {e}");
        }
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Core application logic for the crossgrid CLI.
///
/// Steps:
/// 1. Parse CLI arguments with Clap.
/// 2. Gather words: the word list file first (if any), then positional words.
/// 3. Lay out the grid.
/// 4. Print the grid (and optionally the clue list) on stdout.
/// 5. Print a short placement summary on stderr.
fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let words = gather_words(&cli)?;
    log::debug!("placing {} words", words.len());

    let layout = layout_words(&words)?;
    println!("{}", render(&cli, &words, &layout)?);

    let bbox = layout.bounds();
    eprintln!(
        "Placed {} words in a {}x{} grid ({} on overflow rows).",
        layout.placed().len(),
        bbox.map_or(0, |b| b.height()),
        bbox.map_or(0, |b| b.width()),
        layout.overflow_count()
    );

    Ok(())
}

/// Words from `--word-list` (if given) followed by the positional words, in clue order.
fn gather_words(cli: &Cli) -> Result<WordList, InputError> {
    let mut words = match &cli.word_list {
        Some(path) => WordList::load_from_path(path)?,
        None => WordList::default(),
    };
    words.extend(WordList::from_words(cli.words.iter().cloned()));
    Ok(words)
}

fn layout_words(words: &WordList) -> Result<Layout, InputError> {
    placement::layout(&words.words()).ok_or(InputError::EmptyWordList)
}

/// Everything written to stdout: the grid in the requested format, then (with `--clues`)
/// a blank line and one `N. (direction) tip` line per word.
fn render(cli: &Cli, words: &WordList, layout: &Layout) -> Result<String, InputError> {
    let matrix = layout.to_matrix();
    let mut out = match cli.format {
        OutputFormat::Text => matrix.to_string(),
        OutputFormat::Annotated => matrix.render_with_clues(),
        OutputFormat::Json => serde_json::to_string(&matrix)?,
    };

    if cli.clues {
        out.push('\n');
        for (clue, entry) in words.entries.iter().enumerate() {
            // every input word has exactly one placement record
            let Some(placed) = layout.word_for_clue(clue) else {
                continue;
            };
            let hint = entry.tip.as_deref().unwrap_or(&entry.word);
            out.push_str(&format!("\n{clue}. ({}) {hint}", placed.direction));
        }
    }

    Ok(out)
}
