use std::collections::VecDeque;

use crate::turn::Turn;

/// Pending turns, appended by the solver and applied one per tick from the front.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MoveQueue {
    turns: VecDeque<Turn>,
}
impl MoveQueue {
    pub fn new() -> Self {
        Self::default()
    }
    pub fn extend(&mut self, turns: &[Turn]) {
        self.turns.extend(turns.iter().copied());
    }
    pub fn pop(&mut self) -> Option<Turn> {
        self.turns.pop_front()
    }
    pub fn clear(&mut self) {
        self.turns.clear();
    }
    pub fn len(&self) -> usize {
        self.turns.len()
    }
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = Turn> + '_ {
        self.turns.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_in_first_out() {
        let mut queue = MoveQueue::new();
        queue.extend(&[Turn::R, Turn::U]);
        queue.extend(&[Turn::DPrime]);
        assert_eq!(queue.len(), 3);
        assert_eq!(queue.pop(), Some(Turn::R));
        assert_eq!(queue.iter().collect::<Vec<_>>(), vec![Turn::U, Turn::DPrime]);
        queue.clear();
        assert!(queue.is_empty());
        assert_eq!(queue.pop(), None);
    }
}
