use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use klondike_engine::{CardPosition, DealConfig, Game, Move};

#[derive(Debug, Parser)]
#[command(name = "klondike_engine", about = "Deal a draw-three Klondike game and play it greedily")]
struct Args {
    /// Shuffle seed; overrides the seed from --config
    #[arg(long)]
    seed: Option<u64>,

    /// Deal config JSON path, e.g. { "seed": 42 }
    #[arg(long)]
    config: Option<PathBuf>,

    /// Play up to this many greedy moves before printing the game
    #[arg(long, default_value_t = 0)]
    moves: usize,

    /// Print the final game as JSON on stdout
    #[arg(long)]
    json: bool,
}

impl Args {
    fn deal_config(&self) -> Result<DealConfig> {
        let mut config = match &self.config {
            Some(path) => DealConfig::load(path)?,
            None => DealConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        Ok(config)
    }
}

/// Foundation moves first, then anything that turns over a hidden tableau
/// card or plays from the waste, then a draw. Shuffling runs between piles
/// without exposing anything is never chosen.
fn pick_move(game: &Game) -> Option<Move> {
    let moves = game.legal_moves();
    let exposes = |mv: &Move| match (mv.from, mv.to) {
        (CardPosition::Tableau((tableau_idx, card_idx)), _) if card_idx > 0 => game
            .tableau(tableau_idx as usize)
            .map_or(false, |tableau| !tableau[card_idx as usize - 1].is_face_up()),
        (CardPosition::Waste, _) => true,
        _ => false,
    };
    moves
        .iter()
        .find(|mv| mv.is_to_foundation())
        .or_else(|| moves.iter().find(|mv| exposes(mv)))
        .or_else(|| moves.iter().find(|mv| mv.is_draw()))
        .copied()
}

fn main() -> Result<()> {
    let args = Args::parse();
    let mut game = Game::with_config(&args.deal_config()?);

    for turn in 0..args.moves {
        let Some(mv) = pick_move(&game) else {
            // stdout carries only the game itself.
            eprintln!("No more moves after {} turn(s)", turn);
            break;
        };
        if !args.json {
            println!("{}", mv.pretty_string(&game));
        }
        game.handle_move(&mv)?;
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&game)?);
    } else {
        println!("Game: {}", game);
    }
    Ok(())
}
