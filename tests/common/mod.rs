//! Shared helpers for integration tests.

#![allow(dead_code)]

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

use flea_devil::{build_deck, Card, CardId, Market, SessionState};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a test subscriber once.
///
/// Level comes from `TEST_LOG`, then `RUST_LOG`, then `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Canonical card with the given id.
pub fn deck_card(id: u8) -> Card {
    build_deck()[id as usize]
}

/// Market made of the canonical cards with the given ids, in order.
pub fn market_of(ids: &[u8]) -> Market {
    Market::from_cards(ids.iter().map(|&id| deck_card(id)))
}

/// Session over a hand-built Market.
pub fn session_of(ids: &[u8]) -> SessionState {
    SessionState::from_market(market_of(ids), 1)
}

/// Id of the card at `position`.
pub fn at(state: &SessionState, position: usize) -> CardId {
    state.market().ids()[position]
}
