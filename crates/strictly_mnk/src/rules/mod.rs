//! Game rules for m,n,k-games.
//!
//! Pure functions over a [`Board`](crate::Board) and its
//! [`GameConfig`](crate::GameConfig). Rules never mutate state and know
//! nothing about turns or history.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{check_winner, has_line};
