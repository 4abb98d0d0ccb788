use rand::seq::SliceRandom;
use rand::Rng;

pub const DEFAULT_SUGGESTION_COUNT: usize = 2;

/// Factual questions offered in place of the declined one.
pub const SUGGESTION_BANK: [&str; 8] = [
    "What is the expense ratio of HDFC Midcap Fund?",
    "How do I download my capital gains statement?",
    "What is the lock-in period for ELSS funds?",
    "What is the minimum SIP amount for HDFC Flexi Cap Fund?",
    "What is the exit load for HDFC Small Cap Fund?",
    "What is the riskometer rating of HDFC Large Cap Fund?",
    "What is the benchmark for HDFC Multi Cap Fund?",
    "How to download my account statement?",
];

/// Draws `count` distinct questions (capped at the bank size) in random order.
pub fn sample_suggestions<R: Rng + ?Sized>(rng: &mut R, count: usize) -> Vec<String> {
    let amount = count.min(SUGGESTION_BANK.len());
    SUGGESTION_BANK
        .choose_multiple(rng, amount)
        .map(|question| question.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn sample_is_clamped_and_unique() {
        let mut rng = StdRng::seed_from_u64(7);
        for count in 0..=12 {
            let picked = sample_suggestions(&mut rng, count);
            assert_eq!(picked.len(), count.min(SUGGESTION_BANK.len()));
            let unique: HashSet<&String> = picked.iter().collect();
            assert_eq!(unique.len(), picked.len());
            assert!(picked
                .iter()
                .all(|question| SUGGESTION_BANK.contains(&question.as_str())));
        }
    }

    #[test]
    fn same_seed_gives_same_sample() {
        let first = sample_suggestions(&mut StdRng::seed_from_u64(42), 3);
        let second = sample_suggestions(&mut StdRng::seed_from_u64(42), 3);
        assert_eq!(first, second);
    }
}
