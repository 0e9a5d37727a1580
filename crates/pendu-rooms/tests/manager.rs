//! Integration tests for the session manager.

use std::time::{Duration, Instant};

use pendu_core::{PlayerId, RoomId};
use pendu_game::{GameStatus, GuessOutcome};
use pendu_rooms::{
    GameMode, GuessReply, SessionConfig, SessionManager, StartError,
};
use pendu_words::{FALLBACK_WORDS, WordEntry};

fn room(id: u64) -> RoomId {
    RoomId(id)
}

fn player(id: u64) -> PlayerId {
    PlayerId(id)
}

fn kuriboh() -> WordEntry {
    WordEntry::new("Kuriboh", Some("Monstre / TÉNÈBRES".to_string()))
}

fn manager() -> SessionManager {
    SessionManager::new(SessionConfig::default())
}

/// Starts a solo game on room 1 owned by player 1.
fn started(now: Instant) -> SessionManager {
    let mut mgr = manager();
    mgr.start(room(1), player(1), GameMode::Solo, kuriboh(), now)
        .expect("fresh room");
    mgr
}

// ---------------------------------------------------------------------------
// start
// ---------------------------------------------------------------------------

#[test]
fn test_start_second_game_in_same_room_is_rejected() {
    let now = Instant::now();
    let mut mgr = started(now);

    let err = mgr
        .start(
            room(1),
            player(2),
            GameMode::Solo,
            WordEntry::new("Magicien Sombre", None),
            now,
        )
        .unwrap_err();

    assert_eq!(err, StartError::AlreadyInProgress(room(1)));
    // The original session is untouched: same word, same owner.
    let session = mgr.get(room(1)).expect("still there");
    assert_eq!(session.game.display_word(), "Kuriboh");
    assert_eq!(session.owner, player(1));
}

#[test]
fn test_start_different_rooms_are_independent() {
    let now = Instant::now();
    let mut mgr = started(now);
    mgr.start(room(2), player(2), GameMode::Solo, kuriboh(), now)
        .expect("other room is free");
    assert_eq!(mgr.len(), 2);
}

#[test]
fn test_start_too_short_word_is_replaced_from_fallback() {
    let now = Instant::now();
    let mut mgr = manager();
    mgr.start(
        room(1),
        player(1),
        GameMode::Solo,
        WordEntry::new("Ou", None),
        now,
    )
    .expect("starts anyway");

    let word = mgr.get(room(1)).unwrap().game.display_word().to_string();
    assert!(
        FALLBACK_WORDS.iter().any(|(w, _)| *w == word),
        "{word} should come from the fallback list"
    );
}

// ---------------------------------------------------------------------------
// submit_guess
// ---------------------------------------------------------------------------

#[test]
fn test_submit_guess_without_session_is_ignored() {
    let mut mgr = manager();
    let reply = mgr.submit_guess(room(1), player(1), "k", Instant::now());
    assert!(matches!(reply, GuessReply::Ignored));
}

#[test]
fn test_submit_guess_non_owner_in_solo_mode_is_silently_ignored() {
    let now = Instant::now();
    let mut mgr = started(now);

    let reply = mgr.submit_guess(room(1), player(2), "k", now);

    assert!(matches!(reply, GuessReply::Ignored));
    // Nothing was recorded against the session.
    assert!(mgr.get(room(1)).unwrap().game.attempted_letters().is_empty());
}

#[test]
fn test_submit_guess_multi_mode_admits_any_player() {
    let now = Instant::now();
    let mut mgr = manager();
    mgr.start(room(1), player(1), GameMode::Multi, kuriboh(), now)
        .expect("fresh room");

    let reply = mgr.submit_guess(room(1), player(2), "k", now);
    assert!(matches!(
        reply,
        GuessReply::Accepted {
            outcome: GuessOutcome::Hit,
            ..
        }
    ));
}

#[test]
fn test_submit_guess_chatter_is_ignored() {
    let now = Instant::now();
    let mut mgr = started(now);
    for input in ["", "gg", "12", "k!", "well played"] {
        let reply = mgr.submit_guess(room(1), player(1), input, now);
        assert!(matches!(reply, GuessReply::Ignored), "input: {input:?}");
    }
}

#[test]
fn test_submit_guess_duplicate_letter_is_surfaced_not_counted() {
    let now = Instant::now();
    let mut mgr = started(now);
    mgr.submit_guess(room(1), player(1), "z", now);

    let reply = mgr.submit_guess(room(1), player(1), "z", now);

    assert!(matches!(reply, GuessReply::AlreadyGuessed('z')));
    assert_eq!(mgr.get(room(1)).unwrap().game.mistakes(), 1);
}

#[test]
fn test_submit_guess_full_word_wins_and_removes_session() {
    let now = Instant::now();
    let mut mgr = started(now);

    let mut last = None;
    for c in ["k", "u", "r", "i", "b", "o", "h"] {
        last = Some(mgr.submit_guess(room(1), player(1), c, now));
    }

    match last.expect("guessed at least once") {
        GuessReply::Accepted {
            outcome, finished, ..
        } => {
            assert_eq!(outcome, GuessOutcome::Won);
            let finished = finished.expect("game over");
            assert_eq!(finished.status, GameStatus::Won);
            assert_eq!(finished.display_word, "Kuriboh");
        }
        other => panic!("expected accepted win, got {other:?}"),
    }
    assert!(!mgr.contains(room(1)));
}

#[test]
fn test_submit_guess_seven_wrong_letters_loses_and_removes_session() {
    let now = Instant::now();
    let mut mgr = started(now);

    let mut last = None;
    for c in ["z", "x", "q", "w", "y", "v", "t"] {
        last = Some(mgr.submit_guess(room(1), player(1), c, now));
    }

    match last.expect("guessed at least once") {
        GuessReply::Accepted {
            outcome, finished, ..
        } => {
            assert_eq!(outcome, GuessOutcome::Lost);
            assert_eq!(finished.expect("game over").status, GameStatus::Lost);
        }
        other => panic!("expected accepted loss, got {other:?}"),
    }
    assert!(!mgr.contains(room(1)));
    // The room is free again.
    mgr.start(room(1), player(1), GameMode::Solo, kuriboh(), now)
        .expect("previous session is gone");
}

#[test]
fn test_submit_guess_reports_board_message_for_edits() {
    let now = Instant::now();
    let mut mgr = started(now);
    mgr.set_board_message(room(1), pendu_core::MessageId(77));

    match mgr.submit_guess(room(1), player(1), "k", now) {
        GuessReply::Accepted { board_message, .. } => {
            assert_eq!(board_message, Some(pendu_core::MessageId(77)));
        }
        other => panic!("expected accepted guess, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// sweep_inactive
// ---------------------------------------------------------------------------

#[test]
fn test_sweep_retains_session_inside_timeout() {
    let start = Instant::now();
    let mut mgr = started(start);

    let expired = mgr.sweep_inactive(start + Duration::from_secs(179));

    assert!(expired.is_empty());
    assert!(mgr.contains(room(1)));
}

#[test]
fn test_sweep_removes_session_past_timeout() {
    let start = Instant::now();
    let mut mgr = started(start);

    let expired = mgr.sweep_inactive(start + Duration::from_secs(181));

    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].room, room(1));
    assert_eq!(expired[0].display_word, "Kuriboh");
    assert!(mgr.is_empty());
}

#[test]
fn test_sweep_at_exact_timeout_retains_session() {
    let start = Instant::now();
    let mut mgr = started(start);
    // Strictly greater-than: 180 s on the dot is not yet expired.
    assert!(mgr.sweep_inactive(start + Duration::from_secs(180)).is_empty());
}

#[test]
fn test_accepted_guess_refreshes_activity() {
    let start = Instant::now();
    let mut mgr = started(start);
    mgr.submit_guess(
        room(1),
        player(1),
        "k",
        start + Duration::from_secs(100),
    );

    // 181 s after start, but only 81 s after the accepted guess.
    assert!(mgr.sweep_inactive(start + Duration::from_secs(181)).is_empty());
}

#[test]
fn test_duplicate_guess_does_not_refresh_activity() {
    let start = Instant::now();
    let mut mgr = started(start);
    mgr.submit_guess(room(1), player(1), "k", start);
    // Duplicate at +100 s is rejected and must not count as activity.
    let reply = mgr.submit_guess(
        room(1),
        player(1),
        "k",
        start + Duration::from_secs(100),
    );
    assert!(matches!(reply, GuessReply::AlreadyGuessed('k')));

    let expired = mgr.sweep_inactive(start + Duration::from_secs(181));
    assert_eq!(expired.len(), 1);
}

#[test]
fn test_sweep_only_removes_stale_rooms() {
    let start = Instant::now();
    let mut mgr = started(start);
    mgr.start(
        room(2),
        player(2),
        GameMode::Solo,
        kuriboh(),
        start + Duration::from_secs(120),
    )
    .expect("fresh room");

    let expired = mgr.sweep_inactive(start + Duration::from_secs(181));

    assert_eq!(expired.len(), 1);
    assert_eq!(expired[0].room, room(1));
    assert!(mgr.contains(room(2)));
}
