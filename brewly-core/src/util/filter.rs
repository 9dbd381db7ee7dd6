use crate::feed::FeedItem;

/// Case-insensitive substring match on the café name.
///
/// A blank search term matches everything.
pub fn by_cafe_name<'a, T>(term: &str) -> impl Fn(&&'a T) -> bool
where
    T: FeedItem + 'a,
{
    let term = term.trim().to_lowercase();
    move |item| term.is_empty() || item.cafe_name().to_lowercase().contains(&term)
}
