use std::collections::HashMap;

use crate::PostRecord;

/// Ids that show up more than once, with how many times, in order of first
/// appearance.
pub fn duplicate_ids(posts: &[PostRecord]) -> Vec<(i64, usize)> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    let mut first_seen = Vec::new();

    for post in posts {
        let count = counts.entry(post.id).or_insert(0);
        if *count == 0 {
            first_seen.push(post.id);
        }
        *count += 1;
    }

    first_seen
        .into_iter()
        .filter_map(|id| match counts[&id] {
            1 => None,
            count => Some((id, count)),
        })
        .collect()
}
