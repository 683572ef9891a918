//! Identifier types for the board domain.

use crate::ids::uuid_identifier;

uuid_identifier! {
    /// Unique identifier for a board.
    BoardId, "board"
}
