use log::{debug, info};

use super::board::{Board, Cell, Position, WinningLine, CELLS, COLUMNS, ROWS};
use super::player::Player;
use crate::error::MoveError;

/// Where the game stands after the last accepted move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum GameStatus {
    InProgress,
    Won { player: Player, line: WinningLine },
    Draw,
}

/// Terminal result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// What an accepted move did to the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveOutcome {
    /// No terminal event; play continues
    Continue,
    Win { player: Player, line: WinningLine },
    Draw,
}

/// Everything a presentation layer needs after an accepted move: where the
/// coin landed, whether it ended the game, and who moves next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct MoveResult {
    pub player: Player,
    pub position: Position,
    pub cell: Cell,
    pub outcome: MoveOutcome,
    /// `None` once the game is over
    pub next_player: Option<Player>,
}

impl MoveResult {
    pub fn row(&self) -> usize {
        self.position.row
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.outcome, MoveOutcome::Continue)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    starting_player: Player,
    filled: usize,
    status: GameStatus,
    moves: Vec<usize>,
}

impl GameState {
    /// Create initial game state with the default starting player
    pub fn initial() -> Self {
        Self::with_starting_player(Player::STARTING)
    }

    /// Create initial game state where `starting_player` moves first. The
    /// same player starts again after every [`reset`](Self::reset).
    pub fn with_starting_player(starting_player: Player) -> Self {
        GameState {
            board: Board::new(),
            current_player: starting_player,
            starting_player,
            filled: 0,
            status: GameStatus::InProgress,
            moves: Vec::with_capacity(CELLS),
        }
    }

    /// Get current player. After a terminal move this is still the player
    /// who made it.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn starting_player(&self) -> Player {
        self.starting_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Cell at (column, row) for rendering; `None` when off the board
    pub fn cell_at(&self, column: usize, row: usize) -> Option<Cell> {
        self.board.cell(Position::new(column, row))
    }

    pub fn status(&self) -> &GameStatus {
        &self.status
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won { player, .. } => Some(GameOutcome::Winner(player)),
            GameStatus::Draw => Some(GameOutcome::Draw),
        }
    }

    /// The four cells that won the game, if it has been won
    pub fn winning_line(&self) -> Option<&WinningLine> {
        match &self.status {
            GameStatus::Won { line, .. } => Some(line),
            _ => None,
        }
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.status != GameStatus::InProgress
    }

    /// Number of coins on the board
    pub fn filled_count(&self) -> usize {
        self.filled
    }

    /// Columns played so far, in order
    pub fn moves(&self) -> &[usize] {
        &self.moves
    }

    /// Get list of legal columns (not full)
    pub fn legal_columns(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }

        (0..COLUMNS)
            .filter(|&column| !self.board.is_column_full(column))
            .collect()
    }

    /// Row a coin dropped into `column` would land in, if the move is legal
    pub fn landing_row(&self, column: usize) -> Option<usize> {
        if self.is_terminal() {
            return None;
        }
        self.board.landing_row(column)
    }

    /// Drop the current player's coin into `column`.
    ///
    /// Validation happens before anything is written, so an `Err` leaves the
    /// state untouched. On success the whole board is rescanned for a win by
    /// the mover, then checked for a draw; only if neither happened does the
    /// turn pass to the other player.
    pub fn drop_coin(&mut self, column: usize) -> Result<MoveResult, MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        let player = self.current_player;
        let row = self.board.drop_piece(column, player)?;
        self.filled += 1;
        self.moves.push(column);

        let position = Position::new(column, row);
        debug!("{player} dropped into column {column}, landed at row {row}");

        let outcome = if let Some(line) = self.board.find_line(player) {
            info!("{player} wins with {:?} line {:?}", line.direction(), line.cells());
            self.status = GameStatus::Won { player, line };
            MoveOutcome::Win { player, line }
        } else if self.filled == CELLS {
            info!("board full after {} moves, game drawn", self.filled);
            self.status = GameStatus::Draw;
            MoveOutcome::Draw
        } else {
            self.current_player = player.other();
            MoveOutcome::Continue
        };

        Ok(MoveResult {
            player,
            position,
            cell: player.to_cell(),
            outcome,
            next_player: (!self.is_terminal()).then_some(self.current_player),
        })
    }

    /// Play `columns` in order, stopping at the first rejected move
    pub fn play_all<I>(&mut self, columns: I) -> Result<Vec<MoveResult>, MoveError>
    where
        I: IntoIterator<Item = usize>,
    {
        columns
            .into_iter()
            .map(|column| self.drop_coin(column))
            .collect()
    }

    /// Start a new game: empty board, starting player to move
    pub fn reset(&mut self) {
        info!("game reset after {} moves", self.moves.len());
        *self = Self::with_starting_player(self.starting_player);
    }

    /// Turn label in the wording the board UI shows
    pub fn status_message(&self) -> String {
        match self.status {
            GameStatus::InProgress => format!("{} Player's Turn", self.current_player),
            GameStatus::Won { player, .. } => format!("{player} Player Wins"),
            GameStatus::Draw => "It's a draw".to_string(),
        }
    }

    /// True when no column has a coin resting above an empty cell
    pub fn is_settled(&self) -> bool {
        (0..COLUMNS).all(|column| {
            (1..ROWS).all(|row| {
                self.board.get(column, row - 1).is_empty() || !self.board.get(column, row).is_empty()
            })
        })
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}
