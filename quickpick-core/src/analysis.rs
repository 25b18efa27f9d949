use crate::models::{FrequencyEntry, Pick, POOL_SIZE};

/// Occurrence count of every number drawn at least once, most frequent first.
///
/// Each position of each pick counts, so `[1, 1, 2]` contributes two `1`s.
/// Numbers never drawn are left out. Equal counts are ordered by ascending
/// number.
pub fn compute_frequency(history: &[Pick]) -> Vec<FrequencyEntry> {
    let mut counts = vec![0u32; POOL_SIZE as usize];

    for pick in history {
        for &n in pick.numbers() {
            debug_assert!(n < POOL_SIZE, "numéro hors limites : {}", n);
            counts[n as usize] += 1;
        }
    }

    let mut entries: Vec<FrequencyEntry> = (0..POOL_SIZE)
        .filter(|&n| counts[n as usize] > 0)
        .map(|n| FrequencyEntry {
            number: n,
            count: counts[n as usize],
        })
        .collect();

    entries.sort_by(|a, b| b.count.cmp(&a.count).then(a.number.cmp(&b.number)));

    log::trace!(
        "frequency over {} picks: {} distinct numbers",
        history.len(),
        entries.len()
    );

    entries
}

/// Up to `limit` numbers taken from the head of the frequency table.
pub fn most_frequent(history: &[Pick], limit: usize) -> Vec<u8> {
    compute_frequency(history)
        .into_iter()
        .take(limit)
        .map(|e| e.number)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn picks(raw: &[[u8; 3]]) -> Vec<Pick> {
        raw.iter().copied().map(Pick::new).collect()
    }

    #[test]
    fn test_frequency_single_pick() {
        let freq = compute_frequency(&picks(&[[1, 1, 2]]));
        assert_eq!(
            freq,
            vec![
                FrequencyEntry { number: 1, count: 2 },
                FrequencyEntry { number: 2, count: 1 },
            ]
        );
    }

    #[test]
    fn test_frequency_empty_history() {
        assert!(compute_frequency(&[]).is_empty());
    }

    #[test]
    fn test_frequency_descending() {
        let freq = compute_frequency(&picks(&[[0, 0, 1], [0, 2, 2]]));
        let pairs: Vec<(u8, u32)> = freq.iter().map(|e| (e.number, e.count)).collect();
        assert_eq!(pairs, vec![(0, 3), (2, 2), (1, 1)]);
    }

    #[test]
    fn test_frequency_ties_by_ascending_number() {
        let freq = compute_frequency(&picks(&[[9, 4, 7], [4, 9, 7]]));
        let numbers: Vec<u8> = freq.iter().map(|e| e.number).collect();
        assert_eq!(numbers, vec![4, 7, 9]);
        assert!(freq.iter().all(|e| e.count == 2));
    }

    #[test]
    fn test_frequency_counts_sum_to_positions() {
        let history = picks(&[[5, 5, 5], [1, 2, 3], [0, 9, 5]]);
        let total: u32 = compute_frequency(&history).iter().map(|e| e.count).sum();
        assert_eq!(total as usize, history.len() * 3);
    }

    #[test]
    fn test_frequency_idempotent() {
        let history = picks(&[[3, 1, 4], [1, 5, 9], [2, 6, 5]]);
        assert_eq!(compute_frequency(&history), compute_frequency(&history));
    }

    #[test]
    fn test_most_frequent_limit() {
        let history = picks(&[[0, 0, 1], [0, 2, 2]]);
        assert_eq!(most_frequent(&history, 3), vec![0, 2, 1]);
        assert_eq!(most_frequent(&history, 2), vec![0, 2]);

        let few = picks(&[[8, 8, 8]]);
        assert_eq!(most_frequent(&few, 3), vec![8]);
    }
}
