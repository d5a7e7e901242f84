use std::cell::Cell;

use anyhow::Result;
use clap::{Subcommand, ValueEnum};
use option::O;
use serde::{Deserialize, Serialize};

/// Integer transforms selectable from the command line. Arithmetic wraps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Transform {
    Double,
    Square,
    Negate,
    Inc,
    Dec,
}

impl Transform {
    pub fn apply(self, x: i64) -> i64 {
        match self {
            Transform::Double => x.wrapping_mul(2),
            Transform::Square => x.wrapping_mul(x),
            Transform::Negate => x.wrapping_neg(),
            Transform::Inc => x.wrapping_add(1),
            Transform::Dec => x.wrapping_sub(1),
        }
    }
}

/// The operation that ends the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Subcommand)]
pub enum Terminal {
    /// Report whether a value is present
    Check,
    /// Extract the value, failing when absent
    Unwrap,
    /// Extract the value or fall back to DEFAULT
    UnwrapOr {
        #[arg(allow_hyphen_values = true)]
        default: i64,
    },
    /// Extract the value or compute DEFAULT lazily
    UnwrapOrElse {
        #[arg(allow_hyphen_values = true)]
        default: i64,
    },
    /// Apply FN to the value or return DEFAULT
    MapOr {
        #[arg(allow_hyphen_values = true)]
        default: i64,
        #[arg(value_enum, value_name = "FN")]
        f: Transform,
    },
    /// Apply FN to the value or compute DEFAULT lazily
    MapOrElse {
        #[arg(allow_hyphen_values = true)]
        default: i64,
        #[arg(value_enum, value_name = "FN")]
        f: Transform,
    },
}

impl Terminal {
    pub fn name(&self) -> &'static str {
        match self {
            Terminal::Check => "check",
            Terminal::Unwrap => "unwrap",
            Terminal::UnwrapOr { .. } => "unwrap_or",
            Terminal::UnwrapOrElse { .. } => "unwrap_or_else",
            Terminal::MapOr { .. } => "map_or",
            Terminal::MapOrElse { .. } => "map_or_else",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Outcome {
    Flag(bool),
    Value(i64),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    pub input: String,
    pub mapped: String,
    pub operation: String,
    pub result: Outcome,
    /// Calls made to the `--map` transforms.
    pub map_calls: usize,
    /// Calls made to the lazy default of `unwrap-or-else`/`map-or-else`.
    pub fallback_calls: usize,
    /// Calls made to the terminal transform of `map-or`/`map-or-else`.
    pub fn_calls: usize,
}

fn bump(counter: &Cell<usize>) {
    counter.set(counter.get() + 1);
}

/// Run `input` through every transform in `maps`, then through `terminal`.
///
/// Fails only for `Terminal::Unwrap` on an absent value; the error chain then
/// carries an [`option::AbsentError`].
pub fn evaluate(input: O<i64>, maps: &[Transform], terminal: &Terminal) -> Result<Report> {
    let map_calls = Cell::new(0);
    let fallback_calls = Cell::new(0);
    let fn_calls = Cell::new(0);

    let mapped = maps.iter().fold(input, |acc, t| {
        log::debug!("map {:?} over {:?}", t, acc);
        acc.map(|x| {
            bump(&map_calls);
            t.apply(x)
        })
    });
    log::debug!("after {} transform(s): {:?}", maps.len(), mapped);

    let result = match *terminal {
        Terminal::Check => Outcome::Flag(mapped.is_present()),
        Terminal::Unwrap => Outcome::Value(mapped.try_unwrap()?),
        Terminal::UnwrapOr { default } => Outcome::Value(mapped.unwrap_or(default)),
        Terminal::UnwrapOrElse { default } => Outcome::Value(mapped.unwrap_or_else(|| {
            bump(&fallback_calls);
            default
        })),
        Terminal::MapOr { default, f } => Outcome::Value(mapped.map_or(default, |x| {
            bump(&fn_calls);
            f.apply(x)
        })),
        Terminal::MapOrElse { default, f } => Outcome::Value(mapped.map_or_else(
            || {
                bump(&fallback_calls);
                default
            },
            |x| {
                bump(&fn_calls);
                f.apply(x)
            },
        )),
    };
    log::debug!("{} -> {:?}", terminal.name(), result);

    Ok(Report {
        input: format!("{:?}", input),
        mapped: format!("{:?}", mapped),
        operation: terminal.name().to_string(),
        result,
        map_calls: map_calls.get(),
        fallback_calls: fallback_calls.get(),
        fn_calls: fn_calls.get(),
    })
}
