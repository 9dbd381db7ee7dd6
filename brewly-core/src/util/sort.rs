use crate::feed::FeedItem;

/// Newest first. Items with equal or unknown creation time
/// keep their relative order.
pub fn newest_first<T: FeedItem>(items: &mut [T]) {
    items.sort_by(|a, b| b.created_at().cmp(&a.created_at()));
}
