//! Terminal hangman: drives the full service stack locally.
//!
//! Words come from the built-in fallback list, or from the live card
//! catalogue when run with `--live`. Each line you type is fed through
//! the same chat pipeline a room message would take.

use std::sync::atomic::{AtomicU64, Ordering};

use pendu::{
    CardWordSource, ChatTransport, FallbackWords, GameService, MessageId,
    PlayerId, RoomId, TransportError, WordSource,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::EnvFilter;

const ROOM: RoomId = RoomId(1);
const PLAYER: PlayerId = PlayerId(1);

/// Prints every board and notice to stdout. Edits reprint the board,
/// since a terminal has no message to mutate in place.
#[derive(Default)]
struct PrintTransport {
    next_id: AtomicU64,
}

impl ChatTransport for PrintTransport {
    async fn send(
        &self,
        _room: RoomId,
        content: &str,
    ) -> Result<MessageId, TransportError> {
        println!("{content}\n");
        Ok(MessageId(self.next_id.fetch_add(1, Ordering::Relaxed) + 1))
    }

    async fn edit(
        &self,
        _room: RoomId,
        _message: MessageId,
        content: &str,
    ) -> Result<(), TransportError> {
        println!("{content}\n");
        Ok(())
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let live = std::env::args().any(|a| a == "--live");
    if live {
        let words = CardWordSource::new(reqwest::Client::new());
        run(GameService::new(words, PrintTransport::default())).await;
    } else {
        run(GameService::new(FallbackWords, PrintTransport::default())).await;
    }
}

async fn run<S, T>(service: GameService<S, T>)
where
    S: WordSource + 'static,
    T: ChatTransport + 'static,
{
    tokio::spawn(service.clone().run_sweeper());

    println!("Guess with single letters. `start` begins a new game, `quit` leaves.\n");
    service.start_game(ROOM, PLAYER).await;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Ok(Some(line)) = lines.next_line().await {
        match line.trim() {
            "quit" => break,
            "start" => {
                service.start_game(ROOM, PLAYER).await;
            }
            input => {
                service.handle_chat_message(ROOM, PLAYER, input).await;
                if service.session_count().await == 0 {
                    println!("Type `start` for another round, or `quit`.\n");
                }
            }
        }
    }
}
