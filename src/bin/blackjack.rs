//! Interactive blackjack with the split rule.

use std::io;
use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use blackjack_split::{Console, Game, GameOptions};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "blackjack")]
#[command(about = "Play blackjack with a one-split rule against the dealer")]
struct Args {
    /// Number of packs in the deck
    #[arg(long, default_value_t = 4)]
    decks: u8,

    /// Build packs from ranks 6 through Ace only
    #[arg(long)]
    short_deck: bool,

    /// Starting balance
    #[arg(long, default_value_t = 10_000)]
    balance: usize,

    /// Value at which the dealer stops drawing
    #[arg(long, default_value_t = 17)]
    dealer_stands_at: u8,

    /// Make the dealer hit a soft hand on the stand value
    #[arg(long)]
    hit_soft_17: bool,

    /// Deck seed (defaults to the current time)
    #[arg(long)]
    seed: Option<u64>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if args.verbose { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let seed = args.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });

    let options = GameOptions::default()
        .with_decks(args.decks)
        .with_short_deck(args.short_deck)
        .with_starting_balance(args.balance)
        .with_dealer_stands_at(args.dealer_stands_at)
        .with_stand_on_soft_17(!args.hit_soft_17);
    info!(?options, seed, "starting game");

    let mut game = Game::new(options, seed);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    match console.run(&mut game) {
        Ok(summary) => {
            info!(
                rounds = summary.rounds,
                balance = summary.balance,
                reason = ?summary.reason,
                "session finished"
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
