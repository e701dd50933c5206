use std::collections::BTreeMap;

use super::PlayerId;

pub trait Value: Clone {
    fn get_value_for_player(&self, player: PlayerId) -> f32;
}

/// Independent per player scores. Players without an entry score zero.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PlayerScores(BTreeMap<PlayerId, f32>);

impl PlayerScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_score(mut self, player: PlayerId, score: f32) -> Self {
        self.set(player, score);
        self
    }

    pub fn set(&mut self, player: PlayerId, score: f32) {
        self.0.insert(player, score);
    }

    pub fn iter(&self) -> impl Iterator<Item = (PlayerId, f32)> + '_ {
        self.0.iter().map(|(player, score)| (*player, *score))
    }
}

impl Value for PlayerScores {
    fn get_value_for_player(&self, player: PlayerId) -> f32 {
        self.0.get(&player).copied().unwrap_or(0.0)
    }
}

impl FromIterator<(PlayerId, f32)> for PlayerScores {
    fn from_iter<I: IntoIterator<Item = (PlayerId, f32)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<const N: usize> Value for [f32; N] {
    fn get_value_for_player(&self, player: PlayerId) -> f32 {
        self.get(player).copied().unwrap_or(0.0)
    }
}
