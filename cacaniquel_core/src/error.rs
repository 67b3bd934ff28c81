#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GameError {
    #[error("insufficient funds: balance ${balance:.2}, requested ${requested:.2}")]
    InsufficientFunds { balance: f64, requested: f64 },
    #[error("invalid amount: {0}")]
    InvalidAmount(f64),
    #[error("no player is logged in")]
    NotAuthenticated,
    #[error("incorrect user name or password")]
    AuthenticationFailed,
    #[error("player not found: {0}")]
    PlayerNotFound(String),
    #[error("player already exists: {0}")]
    DuplicatePlayer(String),
    #[error("player name must not be empty")]
    EmptyName,
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

pub type GameResult<T> = Result<T, GameError>;
