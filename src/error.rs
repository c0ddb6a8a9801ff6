/// Errors raised while decoding a request or selecting a move.
///
/// None of them leave [`crate::agents::Agent::step`], which falls back to a
/// random legal column instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("board has {actual} cells, expected {rows}x{columns}")]
    BoardSize {
        rows: usize,
        columns: usize,
        actual: usize,
    },

    #[error("invalid cell value {0}")]
    InvalidCell(u8),

    #[error("invalid mark {0}")]
    InvalidMark(u8),

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("no legal moves")]
    NoLegalMoves,
}

pub type Result<T> = std::result::Result<T, Error>;
