use super::types::Mark;

/// Wins per side. Outlives individual boards; cleared only on request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    x: u32,
    o: u32,
}

impl ScoreTally {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x,
            Mark::O => self.o,
            Mark::Empty => 0,
        }
    }

    pub fn record_win(&mut self, mark: Mark) {
        match mark {
            Mark::X => self.x = self.x.saturating_add(1),
            Mark::O => self.o = self.o.saturating_add(1),
            Mark::Empty => {}
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_reset() {
        let mut tally = ScoreTally::new();
        tally.record_win(Mark::O);
        tally.record_win(Mark::O);
        tally.record_win(Mark::Empty);
        assert_eq!(tally.get(Mark::O), 2);
        assert_eq!(tally.get(Mark::X), 0);

        tally.reset();
        assert_eq!(tally, ScoreTally::default());
    }
}
