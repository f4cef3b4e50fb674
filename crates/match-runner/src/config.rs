//! Configuration management for match runner.
//!
//! This module handles command-line argument parsing and opening loading
//! for matches between the built-in personalities.

use clap::{Parser, ValueEnum};
use rand::rngs::StdRng;
use rand::seq::IteratorRandom;
use rand::SeedableRng;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use othello6_core::game_state::GameState;
use othello6_core::personality::{DRAGON, EAGLE, GORILLA, Personality};
use othello6_core::square::Square;
use othello6_core::types::Depth;

use crate::error::{MatchRunnerError, Result};

/// Built-in personality selectable from the command line.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum PersonalityArg {
    Gorilla,
    Eagle,
    Dragon,
}

impl PersonalityArg {
    pub fn personality(self) -> Personality {
        match self {
            PersonalityArg::Gorilla => GORILLA,
            PersonalityArg::Eagle => EAGLE,
            PersonalityArg::Dragon => DRAGON,
        }
    }
}

/// Configuration for running automated matches between two personalities.
///
/// Every opening is played twice with the engines swapping sides.
#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Tool for running matches between 6x6 Othello personalities"
)]
pub struct Config {
    /// First engine
    #[arg(short = '1', long, value_enum)]
    pub engine1: PersonalityArg,

    /// Second engine
    #[arg(short = '2', long, value_enum)]
    pub engine2: PersonalityArg,

    /// Override the search depth of both engines
    #[arg(short, long)]
    pub depth: Option<Depth>,

    /// Number of random openings (each is played twice)
    #[arg(short = 'n', long, default_value_t = 10)]
    pub games: usize,

    /// Random plies played before the engines take over
    #[arg(long, default_value_t = 4)]
    pub random_plies: usize,

    /// Seed for the random openings
    #[arg(long, default_value_t = 0)]
    pub seed: u64,

    /// Opening file, one move sequence per line (e.g. "d2c2b1"); replaces the
    /// random openings
    #[arg(short, long)]
    pub opening_file: Option<PathBuf>,

    /// Search root moves in parallel
    #[arg(long)]
    pub parallel: bool,

    /// Enable debug logging and print the board after every move
    #[arg(short, long)]
    pub verbose: bool,
}

impl Config {
    /// Parse command-line arguments into a Config instance.
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Returns both engines' personalities with the depth override applied.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the depth override is zero.
    pub fn personalities(&self) -> Result<(Personality, Personality)> {
        Ok((
            self.with_depth(self.engine1.personality())?,
            self.with_depth(self.engine2.personality())?,
        ))
    }

    fn with_depth(&self, mut personality: Personality) -> Result<Personality> {
        if let Some(depth) = self.depth {
            personality.config = personality.config.with_depth(depth)?;
        }
        Ok(personality)
    }

    /// Loads the opening sequences to play.
    ///
    /// # Errors
    ///
    /// Returns an error if the opening file cannot be read or contains an
    /// illegal move.
    pub fn load_openings(&self) -> Result<Vec<Vec<Square>>> {
        match &self.opening_file {
            Some(path) => read_opening_file(path),
            None => Ok(random_openings(self.games, self.random_plies, self.seed)),
        }
    }
}

/// Generates `count` openings of up to `plies` random legal moves.
///
/// An opening stops early if the game ends.
pub fn random_openings(count: usize, plies: usize, seed: u64) -> Vec<Vec<Square>> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..count)
        .map(|_| {
            let mut game = GameState::new();
            let mut moves = Vec::with_capacity(plies);
            for _ in 0..plies {
                let legal = game.board().generate_moves(game.side_to_move());
                let Some(sq) = legal.iter().choose(&mut rng) else {
                    break;
                };
                if game.make_move(sq).is_err() {
                    break;
                }
                moves.push(sq);
            }
            moves
        })
        .collect()
}

/// Read opening sequences from a file.
///
/// Lines starting with '#' are treated as comments and ignored. Empty lines
/// are also ignored.
fn read_opening_file(path: &Path) -> Result<Vec<Vec<Square>>> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let mut openings = Vec::new();

    for line in reader.lines() {
        let line = line?;
        let line = line.trim();
        if !line.is_empty() && !line.starts_with('#') {
            openings.push(parse_opening(line)?);
        }
    }

    Ok(openings)
}

/// Parses a move sequence such as `"d2c2b1"` and checks it can be played
/// from the initial position.
pub fn parse_opening(line: &str) -> Result<Vec<Square>> {
    let chars: Vec<char> = line.chars().collect();
    if chars.len() % 2 != 0 {
        return Err(MatchRunnerError::Config(format!(
            "Opening has an odd number of characters: {line}"
        )));
    }

    let mut game = GameState::new();
    let mut moves = Vec::with_capacity(chars.len() / 2);
    for pair in chars.chunks(2) {
        let mv: String = pair.iter().collect();
        let sq = mv
            .parse::<Square>()
            .map_err(|_| MatchRunnerError::Config(format!("Invalid move in opening: {mv}")))?;
        game.make_move(sq)?;
        moves.push(sq);
    }

    Ok(moves)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_cli() {
        let config = Config::try_parse_from([
            "match-runner",
            "--engine1",
            "gorilla",
            "-2",
            "dragon",
            "-n",
            "3",
            "--parallel",
        ])
        .unwrap();
        assert_eq!(config.engine1, PersonalityArg::Gorilla);
        assert_eq!(config.engine2, PersonalityArg::Dragon);
        assert_eq!(config.games, 3);
        assert_eq!(config.random_plies, 4);
        assert!(config.parallel);
        assert!(!config.verbose);

        let (p1, p2) = config.personalities().unwrap();
        assert_eq!(p1, GORILLA);
        assert_eq!(p2, DRAGON);
    }

    #[test]
    fn test_unknown_personality_is_rejected() {
        assert!(Config::try_parse_from(["match-runner", "-1", "tiger", "-2", "eagle"]).is_err());
    }

    #[test]
    fn test_depth_override() {
        let config =
            Config::try_parse_from(["match-runner", "-1", "eagle", "-2", "dragon", "-d", "2"])
                .unwrap();
        let (p1, p2) = config.personalities().unwrap();
        assert_eq!(p1.config.depth(), 2);
        assert_eq!(p2.config.depth(), 2);
        assert_eq!(p1.name, "EagleAI");

        let config =
            Config::try_parse_from(["match-runner", "-1", "eagle", "-2", "dragon", "-d", "0"])
                .unwrap();
        assert!(matches!(
            config.personalities(),
            Err(MatchRunnerError::Config(_))
        ));
    }

    #[test]
    fn test_random_openings_are_legal_and_reproducible() {
        let openings = random_openings(5, 6, 42);
        assert_eq!(openings.len(), 5);
        assert_eq!(openings, random_openings(5, 6, 42));

        for opening in &openings {
            assert_eq!(opening.len(), 6);
            let mut game = GameState::new();
            for &sq in opening {
                game.make_move(sq).unwrap();
            }
        }
    }

    #[test]
    fn test_parse_opening() {
        assert_eq!(
            parse_opening("d2c2").unwrap(),
            vec![Square::D2, Square::C2]
        );
        assert!(parse_opening("").unwrap().is_empty());
        assert!(matches!(
            parse_opening("a1"),
            Err(MatchRunnerError::Game(_))
        ));
        assert!(matches!(
            parse_opening("d2c"),
            Err(MatchRunnerError::Config(_))
        ));
        assert!(matches!(
            parse_opening("z9"),
            Err(MatchRunnerError::Config(_))
        ));
    }
}
