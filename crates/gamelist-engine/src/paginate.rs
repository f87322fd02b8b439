/// Number of pages needed for `len` items; zero when there are no items.
pub fn page_count(len: usize, page_size: usize) -> usize {
    if page_size == 0 {
        return 0;
    }
    len.div_ceil(page_size)
}

/// The `[start, end)` window of a 1-based page. Pages past the end are empty.
pub fn page_slice<T>(items: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    if start >= items.len() {
        return &[];
    }
    let end = start.saturating_add(page_size).min(items.len());
    &items[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_count_rounds_up() {
        assert_eq!(page_count(7, 6), 2);
        assert_eq!(page_count(6, 6), 1);
        assert_eq!(page_count(1, 10), 1);
    }

    #[test]
    fn test_page_count_zero_items() {
        assert_eq!(page_count(0, 6), 0);
    }

    #[test]
    fn test_page_slice_windows() {
        let items: Vec<u32> = (1..=7).collect();
        assert_eq!(page_slice(&items, 1, 6), &[1, 2, 3, 4, 5, 6]);
        assert_eq!(page_slice(&items, 2, 6), &[7]);
    }

    #[test]
    fn test_page_slice_out_of_range_is_empty() {
        let items: Vec<u32> = (1..=7).collect();
        assert!(page_slice(&items, 3, 6).is_empty());
        assert!(page_slice(&items, usize::MAX, 6).is_empty());
    }
}
