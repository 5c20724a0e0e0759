/// Split `items` into ordered chunks of at most `chunk_size` elements.
///
/// Every chunk holds exactly `chunk_size` elements except possibly the last one.
/// An empty input yields no chunks, and a `chunk_size` of zero yields a single
/// chunk holding the whole input.
///
/// ```rust
/// use dynamodb_batch::common::chunk;
///
/// let items = [1, 2, 3, 4, 5];
/// assert_eq!(chunk::chunk(&items, 2), vec![&[1, 2][..], &[3, 4][..], &[5][..]]);
/// assert_eq!(chunk::chunk(&items, 0), vec![&items[..]]);
/// assert!(chunk::chunk::<i32>(&[], 2).is_empty());
/// ```
pub fn chunk<T>(items: &[T], chunk_size: usize) -> Vec<&[T]> {
    if items.is_empty() {
        return Vec::new();
    }
    if chunk_size == 0 {
        return vec![items];
    }
    items.chunks(chunk_size).collect()
}
