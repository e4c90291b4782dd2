//! Session layer between a presentation host and the board model.
//!
//! A [`Session`] exclusively owns a [`Board`] for the lifetime of one game.
//! The presentation layer (a GUI scene, a TUI, a test harness) never mutates
//! the board directly: it funnels every mutation through
//! [`Session::request_placement`] and [`Session::request_clear`], and redraws
//! from the [`BoardSnapshot`] delivered to its [`BoardObserver`] after each
//! accepted mutation.
//!
//! The session is single-threaded and synchronous; hosts that drive it from
//! multiple threads serialize access themselves.
//!
//! # Examples
//!
//! ```
//! use nonet_session::{BoardObserver, BoardSnapshot, Session};
//!
//! #[derive(Default)]
//! struct RedrawCounter(usize);
//!
//! impl BoardObserver for RedrawCounter {
//!     fn board_changed(&mut self, _snapshot: &BoardSnapshot) {
//!         self.0 += 1;
//!     }
//! }
//!
//! let mut session = Session::with_observer(RedrawCounter::default());
//! session.request_placement(0, 0, 5).unwrap();
//! session.request_placement(0, 1, 5).unwrap_err(); // rejected: no redraw
//! assert_eq!(session.observer().0, 1);
//! ```

pub mod observer;
pub mod session;

pub use self::{
    observer::{BoardObserver, BoardSnapshot},
    session::Session,
};
