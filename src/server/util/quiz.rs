use rand::Rng;
use std::collections::HashSet;

/// Picks one question the player has not seen yet.
///
/// Candidates whose id appears in `previous` are discarded and one of the rest is chosen
/// uniformly at random.
///
/// # Arguments
/// - `candidates` - Questions eligible for the quiz
/// - `previous` - Ids of questions already asked
/// - `rng` - Random source
///
/// # Returns
/// - `Some(T)` - A question not contained in `previous`
/// - `None` - Every candidate has already been asked
pub fn select_question<T, R>(
    candidates: Vec<T>,
    previous: &HashSet<i32>,
    id_of: impl Fn(&T) -> i32,
    rng: &mut R,
) -> Option<T>
where
    R: Rng + ?Sized,
{
    let mut remaining: Vec<T> = candidates
        .into_iter()
        .filter(|candidate| !previous.contains(&id_of(candidate)))
        .collect();

    if remaining.is_empty() {
        return None;
    }

    let index = rng.random_range(0..remaining.len());

    Some(remaining.swap_remove(index))
}
