//! Page-window selection over ordered sequences.

/// Default number of questions per page.
pub const QUESTIONS_PER_PAGE: usize = 10;

/// Offset of the first item on `page` (1-based).
///
/// Returns `None` when the window is undefined: `page < 1`, `per_page == 0`,
/// or an offset that does not fit in `usize`.
pub fn page_start(page: i64, per_page: usize) -> Option<usize> {
    if page < 1 || per_page == 0 {
        return None;
    }
    usize::try_from(page - 1).ok()?.checked_mul(per_page)
}

/// Return the items on `page`, `per_page` at a time.
///
/// Out-of-range pages and invalid arguments give an empty slice instead of
/// an error.
pub fn paginate<T>(items: &[T], page: i64, per_page: usize) -> &[T] {
    match page_start(page, per_page) {
        Some(start) if start < items.len() => {
            let end = start.saturating_add(per_page).min(items.len());
            &items[start..end]
        }
        _ => &[],
    }
}
