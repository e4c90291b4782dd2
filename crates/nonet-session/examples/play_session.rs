//! Example demonstrating a session driven the way a presentation host would.
//!
//! This example shows how to:
//! - Create a `Session` over the starter board
//! - Receive redraw notifications through a `BoardObserver`
//! - Handle rejected placements without redrawing
//!
//! # Usage
//!
//! ```sh
//! cargo run --example play_session
//! ```
//!
//! Set `RUST_LOG=debug` to see the session's per-move logging.

use nonet_core::Position;
use nonet_session::{BoardObserver, BoardSnapshot, Session};

/// Prints the grid to stdout after every accepted mutation, the way a GUI
/// scene would repaint itself.
struct TextRenderer;

impl BoardObserver for TextRenderer {
    fn board_changed(&mut self, snapshot: &BoardSnapshot) {
        let (pos, value) = snapshot.delta();
        match value {
            Some(digit) => println!("-> placed {digit} at {pos}"),
            None => println!("-> cleared {pos}"),
        }
        for row in snapshot.rows() {
            let line: String = row
                .iter()
                .map(|cell| cell.map_or('.', |digit| char::from(b'0' + digit.value())))
                .collect();
            println!("   {line}");
        }
        println!();
    }
}

fn main() {
    env_logger::init();

    let mut session = Session::starter().observe(TextRenderer);
    println!("Starter board:\n   {}\n", session.board());

    // A few legal moves.
    for (row, col, value) in [(0, 1, 3), (1, 0, 6), (4, 3, 1)] {
        session
            .request_placement(row, col, value)
            .expect("legal move");
    }

    // Rejected requests come back as plain values; nothing is redrawn.
    for (row, col, value) in [(0, 2, 3), (0, 1, 9), (0, 0, 1), (9, 9, 1)] {
        if let Err(reason) = session.request_placement(row, col, value) {
            println!("({row}, {col}) <- {value} rejected: {reason}");
        }
    }

    // Entries can be taken back; clues cannot.
    session.request_clear(0, 1).expect("entry cell");
    if let Err(reason) = session.request_clear(0, 0) {
        println!("clear (0, 0) rejected: {reason}");
    }

    let candidates = session.board().candidates_at(Position::new(0, 1));
    println!("candidates at (0, 1): {candidates:?}");
}
