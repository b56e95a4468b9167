/// Consecutive wins. Gates puzzle difficulty and scales payouts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StreakState {
    pub count: u32,
    /// Streak held right before the last loss, for end-of-round reporting.
    pub previous: u32,
}

impl StreakState {
    /// Records a win and returns the new streak.
    pub fn win(&mut self) -> u32 {
        self.count = self.count.saturating_add(1);
        self.count
    }

    /// Records a loss and returns the streak that was lost.
    pub fn lose(&mut self) -> u32 {
        self.previous = self.count;
        self.count = 0;
        self.previous
    }
}
