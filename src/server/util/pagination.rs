/// Number of questions returned per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Normalizes a requested page number; absent or below 1 selects the first page.
pub fn page_number(page: Option<i64>) -> usize {
    match page {
        Some(page) if page > 1 => usize::try_from(page).unwrap_or(usize::MAX),
        _ => 1,
    }
}

/// Returns the items on the given 1-based page.
///
/// A page starting past the end yields an empty vector rather than an error, the
/// caller still reports the full item count alongside it.
///
/// # Arguments
/// - `page` - Requested page number, see [`page_number`]
/// - `items` - Full ordered item sequence
///
/// # Returns
/// - `Vec<T>` - At most `QUESTIONS_PER_PAGE` items
pub fn paginate<T>(page: Option<i64>, items: Vec<T>) -> Vec<T> {
    let start = (page_number(page) - 1).saturating_mul(QUESTIONS_PER_PAGE);

    items
        .into_iter()
        .skip(start)
        .take(QUESTIONS_PER_PAGE)
        .collect()
}
