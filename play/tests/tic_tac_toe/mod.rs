use engine::{GameAdapter, PlayerId, PlayerScores};

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

const EMPTY: u8 = 0;

/// Player 0 plays X, player 1 plays O. A win scores 1, a loss 0 and a draw 0.5 for both.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TicTacToe {
    board: [u8; 9],
}

impl TicTacToe {
    /// Builds a position from three rows of `X`, `O` and `.`, e.g. `["XX.", "OO.", "..."]`.
    pub fn from_rows(rows: [&str; 3]) -> Self {
        let mut board = [EMPTY; 9];
        for (square, c) in rows.iter().flat_map(|row| row.chars()).enumerate() {
            board[square] = match c {
                'X' => Self::mark(0),
                'O' => Self::mark(1),
                _ => EMPTY,
            };
        }

        Self { board }
    }

    pub fn winner(&self) -> Option<PlayerId> {
        LINES.iter().find_map(|[a, b, c]| {
            let mark = self.board[*a];
            (mark != EMPTY && mark == self.board[*b] && mark == self.board[*c])
                .then(|| (mark - 1) as PlayerId)
        })
    }

    fn mark(player: PlayerId) -> u8 {
        player as u8 + 1
    }

    fn is_full(&self) -> bool {
        self.board.iter().all(|square| *square != EMPTY)
    }

    fn empty_squares(&self) -> impl Iterator<Item = usize> + '_ {
        (0..9).filter(|square| self.board[*square] == EMPTY)
    }

    fn wins_with(&self, square: usize, player: PlayerId) -> bool {
        let mut next = *self;
        next.board[square] = Self::mark(player);
        next.winner() == Some(player)
    }
}

impl GameAdapter for TicTacToe {
    type Action = usize;
    type Snapshot = [u8; 9];
    type Fingerprint = [u8; 9];
    type Scores = PlayerScores;

    fn current_player(&self) -> PlayerId {
        let marked = self.board.iter().filter(|square| **square != EMPTY).count();
        marked % 2
    }

    fn legal_actions(&self, restrict_to_heuristic: bool) -> Vec<Self::Action> {
        if self.is_game_over() {
            return Vec::new();
        }

        let player = self.current_player();
        self.empty_squares()
            .filter(|square| !restrict_to_heuristic || self.wins_with(*square, player))
            .collect()
    }

    fn apply_action(&mut self, action: &Self::Action, player: PlayerId) {
        self.board[*action] = Self::mark(player);
    }

    fn is_game_over(&self) -> bool {
        self.winner().is_some() || self.is_full()
    }

    fn scores(&self) -> Self::Scores {
        match self.winner() {
            Some(winner) => (0..2)
                .map(|player| (player, if player == winner { 1.0 } else { 0.0 }))
                .collect(),
            None => (0..2).map(|player| (player, 0.5)).collect(),
        }
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.board
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        self.board = *snapshot;
    }

    fn canonical_fingerprint(&self) -> Self::Fingerprint {
        self.board
    }

    fn render(&self) -> Option<String> {
        let rows = self
            .board
            .chunks(3)
            .map(|row| {
                row.iter()
                    .map(|square| match square {
                        1 => 'X',
                        2 => 'O',
                        _ => '.',
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>();

        Some(rows.join("\n"))
    }
}
