use ahash::HashMap;
use std::collections::BTreeMap;

const DELIMITER: char = '|';

/// Per-position genre frequencies for a record subset. A record's genre
/// string splits on `|` into positional slots; the slot count is the largest
/// arity observed in the subset, and records with fewer tokens leave the
/// remaining slots absent. Absent genre fields contribute nothing.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GenreTable {
    pub slots: Vec<BTreeMap<String, u32>>,
}

pub fn tabulate<'a, I>(genres: I) -> GenreTable
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    let tokenized: Vec<Vec<&str>> = genres
        .into_iter()
        .flatten()
        .map(|s| s.split(DELIMITER).filter(|t| !t.is_empty()).collect())
        .collect();
    let arity = tokenized.iter().map(Vec::len).max().unwrap_or(0);

    let mut slots: Vec<BTreeMap<String, u32>> = vec![BTreeMap::new(); arity];
    for tokens in &tokenized {
        for (slot, token) in tokens.iter().enumerate() {
            *slots[slot].entry(token.to_string()).or_insert(0) += 1;
        }
    }
    GenreTable { slots }
}

impl GenreTable {
    /// Total frequency per genre, summed over all positional slots, sorted
    /// descending by frequency with ties broken by genre name ascending.
    pub fn ranking(&self) -> Vec<(String, u32)> {
        let mut totals: HashMap<&str, u32> = HashMap::default();
        for slot in &self.slots {
            for (genre, count) in slot {
                *totals.entry(genre).or_insert(0) += count;
            }
        }
        let mut ranking: Vec<(String, u32)> = totals
            .into_iter()
            .map(|(genre, count)| (genre.to_string(), count))
            .collect();
        ranking.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        ranking
    }
}
