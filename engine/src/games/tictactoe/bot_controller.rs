use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::minimax::best_move;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BotPolicy {
    Optimal,
    Random,
    FixedSeededRandom(u64),
}

pub struct BotController {
    policy: BotPolicy,
    rng: SessionRng,
}

impl BotController {
    pub fn new(policy: BotPolicy) -> Self {
        let rng = match policy {
            BotPolicy::FixedSeededRandom(seed) => SessionRng::new(seed),
            BotPolicy::Optimal | BotPolicy::Random => SessionRng::from_random(),
        };
        Self { policy, rng }
    }

    pub fn policy(&self) -> BotPolicy {
        self.policy
    }

    /// Seed of the RNG behind the random policies. Unused by `Optimal`.
    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn choose_move(&mut self, board: &Board) -> Option<usize> {
        let chosen = match self.policy {
            BotPolicy::Optimal => best_move(board),
            BotPolicy::Random | BotPolicy::FixedSeededRandom(_) => {
                calculate_random_move(board, &mut self.rng)
            }
        };
        if let Some(index) = chosen {
            log!("Bot ({:?}) picked cell {}", self.policy, index);
        }
        chosen
    }
}

pub fn calculate_random_move(board: &Board, rng: &mut SessionRng) -> Option<usize> {
    let available_moves = board.available_moves();
    rng.choose(&available_moves).copied()
}
