use engine::{GameAdapter, PlayerId, PlayerScores};

/// Two players alternately add one or two to a shared count. Whoever brings the count to
/// `target` or beyond scores 1, the other 0. Different move orders reach the same count, which
/// makes for plenty of transpositions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CountingGame {
    pub count: usize,
    pub target: usize,
    pub to_move: PlayerId,
    pub winner: Option<PlayerId>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CountingAction {
    Add1,
    Add2,
}

impl CountingAction {
    fn amount(&self) -> usize {
        match self {
            CountingAction::Add1 => 1,
            CountingAction::Add2 => 2,
        }
    }
}

impl CountingGame {
    pub fn new(target: usize) -> Self {
        Self {
            count: 0,
            target,
            to_move: 0,
            winner: None,
        }
    }

    pub fn at(count: usize, target: usize, to_move: PlayerId) -> Self {
        Self {
            count,
            target,
            to_move,
            winner: None,
        }
    }
}

impl GameAdapter for CountingGame {
    type Action = CountingAction;
    type Snapshot = CountingGame;
    type Fingerprint = (usize, PlayerId);
    type Scores = PlayerScores;

    fn current_player(&self) -> PlayerId {
        self.to_move
    }

    fn legal_actions(&self, restrict_to_heuristic: bool) -> Vec<Self::Action> {
        if self.is_game_over() {
            return Vec::new();
        }

        let actions = vec![CountingAction::Add1, CountingAction::Add2];
        if !restrict_to_heuristic {
            return actions;
        }

        actions
            .into_iter()
            .filter(|a| self.count + a.amount() >= self.target)
            .collect()
    }

    fn apply_action(&mut self, action: &Self::Action, player: PlayerId) {
        self.count += action.amount();
        if self.count >= self.target {
            self.winner = Some(player);
        }
        self.to_move = 1 - player;
    }

    fn is_game_over(&self) -> bool {
        self.winner.is_some()
    }

    fn scores(&self) -> Self::Scores {
        (0..2)
            .map(|player| (player, if self.winner == Some(player) { 1.0 } else { 0.0 }))
            .collect()
    }

    fn snapshot(&self) -> Self::Snapshot {
        *self
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        *self = *snapshot;
    }

    fn canonical_fingerprint(&self) -> Self::Fingerprint {
        (self.count, self.to_move)
    }
}

/// One legal move which immediately ends the game with player 0 scoring 1.
#[derive(Clone, Copy, Debug, Default)]
pub struct SingleChoiceGame {
    pub done: bool,
}

impl GameAdapter for SingleChoiceGame {
    type Action = ();
    type Snapshot = bool;
    type Fingerprint = bool;
    type Scores = PlayerScores;

    fn current_player(&self) -> PlayerId {
        0
    }

    fn legal_actions(&self, _: bool) -> Vec<Self::Action> {
        if self.done {
            vec![]
        } else {
            vec![()]
        }
    }

    fn apply_action(&mut self, _: &Self::Action, _: PlayerId) {
        self.done = true;
    }

    fn is_game_over(&self) -> bool {
        self.done
    }

    fn scores(&self) -> Self::Scores {
        PlayerScores::new().with_score(0, 1.0)
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.done
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        self.done = *snapshot;
    }

    fn canonical_fingerprint(&self) -> Self::Fingerprint {
        self.done
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Arm {
    Good,
    Bad,
}

/// Player 0 picks an arm. The good arm always scores 1, the bad arm -1.
#[derive(Clone, Copy, Debug, Default)]
pub struct TwoArmGame {
    pub pulled: Option<Arm>,
}

impl GameAdapter for TwoArmGame {
    type Action = Arm;
    type Snapshot = Option<Arm>;
    type Fingerprint = Option<Arm>;
    type Scores = [f32; 1];

    fn current_player(&self) -> PlayerId {
        0
    }

    fn legal_actions(&self, _: bool) -> Vec<Self::Action> {
        match self.pulled {
            Some(_) => vec![],
            None => vec![Arm::Good, Arm::Bad],
        }
    }

    fn apply_action(&mut self, action: &Self::Action, _: PlayerId) {
        self.pulled = Some(*action);
    }

    fn is_game_over(&self) -> bool {
        self.pulled.is_some()
    }

    fn scores(&self) -> Self::Scores {
        match self.pulled {
            Some(Arm::Good) => [1.0],
            _ => [-1.0],
        }
    }

    fn snapshot(&self) -> Self::Snapshot {
        self.pulled
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        self.pulled = *snapshot;
    }

    fn canonical_fingerprint(&self) -> Self::Fingerprint {
        self.pulled
    }
}

/// Never over, yet offers no moves.
#[derive(Clone, Copy, Debug, Default)]
pub struct StuckGame;

impl GameAdapter for StuckGame {
    type Action = u8;
    type Snapshot = ();
    type Fingerprint = ();
    type Scores = PlayerScores;

    fn current_player(&self) -> PlayerId {
        0
    }

    fn legal_actions(&self, _: bool) -> Vec<Self::Action> {
        vec![]
    }

    fn apply_action(&mut self, _: &Self::Action, _: PlayerId) {}

    fn is_game_over(&self) -> bool {
        false
    }

    fn scores(&self) -> Self::Scores {
        PlayerScores::new()
    }

    fn snapshot(&self) -> Self::Snapshot {}

    fn restore(&mut self, _: &Self::Snapshot) {}

    fn canonical_fingerprint(&self) -> Self::Fingerprint {}
}

/// A counting game whose restore forgets to undo anything.
#[derive(Clone, Copy, Debug)]
pub struct LeakyGame(pub CountingGame);

impl GameAdapter for LeakyGame {
    type Action = CountingAction;
    type Snapshot = ();
    type Fingerprint = (usize, PlayerId);
    type Scores = PlayerScores;

    fn current_player(&self) -> PlayerId {
        self.0.current_player()
    }

    fn legal_actions(&self, restrict_to_heuristic: bool) -> Vec<Self::Action> {
        self.0.legal_actions(restrict_to_heuristic)
    }

    fn apply_action(&mut self, action: &Self::Action, player: PlayerId) {
        self.0.apply_action(action, player)
    }

    fn is_game_over(&self) -> bool {
        self.0.is_game_over()
    }

    fn scores(&self) -> Self::Scores {
        self.0.scores()
    }

    fn snapshot(&self) -> Self::Snapshot {}

    fn restore(&mut self, _: &Self::Snapshot) {}

    fn canonical_fingerprint(&self) -> Self::Fingerprint {
        self.0.canonical_fingerprint()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ToggleAction {
    Toggle,
    End,
}

/// A light switch. Toggling returns to states seen before; the game can only be ended with the
/// light off, which always scores 1. Only ending is a heuristic move.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ToggleGame {
    pub on: bool,
    pub done: bool,
}

impl GameAdapter for ToggleGame {
    type Action = ToggleAction;
    type Snapshot = ToggleGame;
    type Fingerprint = (bool, bool);
    type Scores = [f32; 1];

    fn current_player(&self) -> PlayerId {
        0
    }

    fn legal_actions(&self, restrict_to_heuristic: bool) -> Vec<Self::Action> {
        match (self.done, self.on, restrict_to_heuristic) {
            (true, _, _) => vec![],
            (false, true, true) => vec![],
            (false, true, false) => vec![ToggleAction::Toggle],
            (false, false, true) => vec![ToggleAction::End],
            (false, false, false) => vec![ToggleAction::Toggle, ToggleAction::End],
        }
    }

    fn apply_action(&mut self, action: &Self::Action, _: PlayerId) {
        match action {
            ToggleAction::Toggle => self.on = !self.on,
            ToggleAction::End => self.done = true,
        }
    }

    fn is_game_over(&self) -> bool {
        self.done
    }

    fn scores(&self) -> Self::Scores {
        [1.0]
    }

    fn snapshot(&self) -> Self::Snapshot {
        *self
    }

    fn restore(&mut self, snapshot: &Self::Snapshot) {
        *self = *snapshot;
    }

    fn canonical_fingerprint(&self) -> Self::Fingerprint {
        (self.on, self.done)
    }
}
