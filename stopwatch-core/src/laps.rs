/// One recorded lap.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct Lap {
    /// 1-based, in recording order
    pub number: usize,
    /// Elapsed time at the moment the lap was taken
    pub split_ms: u64,
    /// Time since the previous lap, or since zero for the first one
    pub lap_ms: u64,
}

/// Ordered elapsed-time snapshots. Splits never decrease.
#[derive(Clone, Debug, Default)]
pub struct LapRecorder {
    splits: Vec<u64>,
}

impl LapRecorder {
    pub fn new() -> Self {
        Self { splits: Vec::new() }
    }

    /// Append a split and return the lap it closes.
    pub fn record(&mut self, split_ms: u64) -> Lap {
        let previous = self.last_split().unwrap_or(0);
        let split_ms = split_ms.max(previous);
        self.splits.push(split_ms);
        Lap {
            number: self.splits.len(),
            split_ms,
            lap_ms: split_ms - previous,
        }
    }

    pub fn len(&self) -> usize {
        self.splits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.splits.is_empty()
    }

    pub fn last_split(&self) -> Option<u64> {
        self.splits.last().copied()
    }

    pub fn clear(&mut self) {
        self.splits.clear();
    }

    /// Laps in chronological order.
    pub fn laps(&self) -> impl DoubleEndedIterator<Item = Lap> + ExactSizeIterator + '_ {
        self.splits.iter().enumerate().map(move |(idx, &split_ms)| {
            let previous = if idx == 0 { 0 } else { self.splits[idx - 1] };
            Lap {
                number: idx + 1,
                split_ms,
                lap_ms: split_ms - previous,
            }
        })
    }

    /// At least two laps, and not all of the same length.
    fn has_spread(&self) -> bool {
        let mut lap_ms = self.laps().map(|lap| lap.lap_ms);
        let first = match lap_ms.next() {
            Some(first) => first,
            None => return false,
        };
        lap_ms.any(|ms| ms != first)
    }

    /// Number of the shortest lap (earliest on ties). None unless lap lengths differ.
    pub fn fastest(&self) -> Option<usize> {
        if !self.has_spread() {
            return None;
        }
        self.laps().min_by_key(|lap| lap.lap_ms).map(|lap| lap.number)
    }

    /// Number of the longest lap (earliest on ties). None unless lap lengths differ.
    pub fn slowest(&self) -> Option<usize> {
        if !self.has_spread() {
            return None;
        }
        self.laps()
            .max_by(|a, b| a.lap_ms.cmp(&b.lap_ms).then(b.number.cmp(&a.number)))
            .map(|lap| lap.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_deltas() {
        let mut laps = LapRecorder::new();
        let first = laps.record(5000);
        assert_eq!(first, Lap { number: 1, split_ms: 5000, lap_ms: 5000 });

        let second = laps.record(8000);
        assert_eq!(second, Lap { number: 2, split_ms: 8000, lap_ms: 3000 });

        assert_eq!(laps.len(), 2);
        assert_eq!(laps.last_split(), Some(8000));
    }

    #[test]
    fn test_splits_never_decrease() {
        let mut laps = LapRecorder::new();
        laps.record(4000);
        let lap = laps.record(3000);
        assert_eq!(lap.split_ms, 4000);
        assert_eq!(lap.lap_ms, 0);
    }

    #[test]
    fn test_deltas_sum_to_last_split() {
        let mut laps = LapRecorder::new();
        for split in [1200, 1200, 4750, 9001, 15_000] {
            laps.record(split);
        }
        let total: u64 = laps.laps().map(|lap| lap.lap_ms).sum();
        assert_eq!(Some(total), laps.last_split());
    }

    #[test]
    fn test_fastest_slowest() {
        let mut laps = LapRecorder::new();
        laps.record(3000);
        assert_eq!(laps.fastest(), None);
        assert_eq!(laps.slowest(), None);

        laps.record(4000); // 1000
        laps.record(9000); // 5000
        laps.record(10_000); // 1000
        assert_eq!(laps.fastest(), Some(2));
        assert_eq!(laps.slowest(), Some(3));
    }

    #[test]
    fn test_equal_laps_have_no_fastest_or_slowest() {
        let mut laps = LapRecorder::new();
        laps.record(1000);
        laps.record(2000);
        laps.record(3000);
        assert_eq!(laps.fastest(), None);
        assert_eq!(laps.slowest(), None);

        laps.record(3500);
        assert_eq!(laps.fastest(), Some(4));
        assert_eq!(laps.slowest(), Some(1));
    }

    #[test]
    fn test_clear() {
        let mut laps = LapRecorder::new();
        laps.record(10);
        laps.clear();
        assert!(laps.is_empty());
        assert_eq!(laps.record(20).number, 1);
    }
}
