//! `bench_local.rs` — quick local timing runner (no Criterion)
//!
//! PURPOSE
//! -------
//! - Fast, ad-hoc timing of grid generation for word lists of increasing size.
//! - Each case takes the first N words of the list, generates the grid several times,
//!   and reports the median.
//!
//! HOW TO RUN
//! ----------
//! - Optimized build:                `cargo run --bin bench_local --release -- -w words.txt`
//! - Multiple repeats:               `cargo run --bin bench_local --release -- -w words.txt -r 5`
//! - Print the last grid per case:   `cargo run --bin bench_local --release -- -w words.txt -p`
//!
//! NOTES
//! -----
//! - Not statistically rigorous; use the same machine and `--release` for comparisons.
//! - Without `-w`, a small built-in list (repeated to reach the case sizes) is used.
//! - I/O (printing) is kept outside the timed section.

use clap::Parser;
use std::hint::black_box;
use std::time::Instant;

use crossgrid::placement;
use crossgrid::word_list::WordList;

/// Local benchmark runner: time `generate` over growing prefixes of a word list.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the word list file (one "word" or "word;tip" per line)
    #[arg(short, long)]
    word_list: Option<String>,

    /// Number of repeats per case (median is reported)
    #[arg(short = 'r', long = "repeats", default_value_t = 3)]
    num_repeats: usize,

    /// Print the grid from the last run of each case
    #[arg(short = 'p', long = "print")]
    print_grid: bool,
}

/// Prefix sizes timed, in words.
const CASE_SIZES: [usize; 5] = [10, 50, 100, 500, 1000];

const BUILTIN_WORDS: &str = "react\njavascript\nalgorithm\ncrossword\nnode\nexpress\nrust\ncompiler\ngrid\nclue";

/// Small helper: robust central tendency for small samples.
fn median(mut xs: Vec<f64>) -> f64 {
    if xs.is_empty() {
        return 0.0;
    }
    // safe: f64 durations are never NaN in this context
    xs.sort_by(|a, b| a.partial_cmp(b).expect("f64 durations should not be NaN"));
    let n = xs.len();
    if n % 2 == 1 {
        xs[n / 2]
    } else {
        0.5 * (xs[n / 2 - 1] + xs[n / 2])
    }
}

/// First `n` words of `words`, cycling through them again if the list is shorter.
fn take_cycled<'a>(words: &[&'a str], n: usize) -> Vec<&'a str> {
    words.iter().copied().cycle().take(n).collect()
}

fn main() -> std::io::Result<()> {
    let cli = Cli::parse();

    let list = match &cli.word_list {
        Some(path) => {
            eprintln!("Loading word list from: {path}");
            WordList::load_from_path(path)?
        }
        None => WordList::parse_from_str(BUILTIN_WORDS),
    };
    let all_words = list.words();
    if all_words.is_empty() {
        eprintln!("Word list is empty; nothing to time");
        return Ok(());
    }
    eprintln!("Loaded {} words", all_words.len());

    eprintln!("\n{:>6} | {:>10} | {:>10} | {:>8}", "words", "median (s)", "grid", "overflow");
    eprintln!("{:-<6}-+-{:-<10}-+-{:-<10}-+-{:-<8}", "", "", "", "");

    for &size in &CASE_SIZES {
        let words = take_cycled(&all_words, size);

        let mut times = Vec::with_capacity(cli.num_repeats);
        let mut last = None;
        for _ in 0..cli.num_repeats.max(1) {
            let t = Instant::now();
            let layout = placement::layout(black_box(&words));
            times.push(t.elapsed().as_secs_f64());
            last = layout;
        }

        let Some(layout) = last else {
            continue;
        };
        let matrix = layout.to_matrix();
        let dims = format!("{}x{}", matrix.height(), matrix.width());
        eprintln!(
            "{size:>6} | {:>10.4} | {dims:>10} | {:>8}",
            median(times),
            layout.overflow_count()
        );

        if cli.print_grid {
            println!("{matrix}\n");
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_median() {
        assert_eq!(median(vec![]), 0.0);
        assert_eq!(median(vec![3.0, 1.0, 2.0]), 2.0);
        assert_eq!(median(vec![4.0, 1.0, 2.0, 3.0]), 2.5);
    }

    #[test]
    fn test_take_cycled() {
        assert_eq!(take_cycled(&["a", "b"], 5), vec!["a", "b", "a", "b", "a"]);
        assert_eq!(take_cycled(&["a", "b", "c"], 2), vec!["a", "b"]);
    }
}
