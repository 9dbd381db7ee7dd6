//! Plain text rendering of reviews and saved cafés.

use brewly_core::{
    entities::*, feed::FeedStatus, gateways::maps::MapsGateway,
    util::validate::Invalidations,
};
use std::fmt::Write as _;

pub const NO_REVIEWS: &str = "No reviews yet. Be the first to share a café!";
pub const NO_MATCHES: &str = "No cafés match your search.";
pub const NO_SAVED_CAFES: &str = "You have not saved any cafés yet.";
pub const FETCH_FAILED: &str = "Could not load the list. Please try again.";
pub const OPERATION_FAILED: &str = "Something went wrong. Please try again.";
pub const REVIEW_NOT_FOUND: &str = "There is no review with this id.";
pub const CAFE_NOT_FOUND: &str = "There is no café with this id.";

/// The message to show instead of the list, if any.
pub fn empty_state(status: FeedStatus, no_items: &'static str) -> Option<&'static str> {
    match status {
        FeedStatus::Failed => Some(FETCH_FAILED),
        FeedStatus::NoItems => Some(no_items),
        FeedStatus::NoMatches => Some(NO_MATCHES),
        FeedStatus::Idle | FeedStatus::Loading | FeedStatus::Items(_) => None,
    }
}

/// Summary of the own reviews after a submitted review was reconciled.
pub fn written_reviews(status: FeedStatus) -> Option<String> {
    match status {
        FeedStatus::Failed => Some(FETCH_FAILED.to_owned()),
        FeedStatus::Items(count) => Some(format!("You have written {count} review(s).")),
        FeedStatus::Idle | FeedStatus::Loading | FeedStatus::NoItems | FeedStatus::NoMatches => {
            None
        }
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn stars(rating: RatingValue) -> String {
    let filled = usize::from(rating.stars());
    let empty = usize::from(RatingValue::max().stars()) - filled;
    format!("{}{}", "★".repeat(filled), "☆".repeat(empty))
}

pub fn review_card(review: &Review, saved: bool) -> String {
    let mut card = format!(
        "[{}] {} {}\n    {}\n    noise: {}, wifi: {}, outlets: {}, ambience: {}",
        review.id,
        review.cafe_name,
        stars(review.overall),
        review.address,
        review.noise,
        yes_no(review.wifi),
        yes_no(review.outlets),
        review.ambience,
    );
    let notes = review
        .notes_preview()
        .unwrap_or_else(|| review.notes.clone());
    if !notes.is_empty() {
        let _ = write!(card, "\n    {notes}");
    }
    if saved {
        card.push_str("\n    ♥ saved");
    }
    card
}

pub fn review_details<M>(review: &Review, maps: &M) -> String
where
    M: MapsGateway,
{
    let mut details = format!(
        "{} ({})\n{}\n{}\n",
        review.cafe_name,
        review.overall,
        review.address,
        maps.search_url(&review.address),
    );
    let _ = writeln!(details, "Noise level     : {}", review.noise);
    let _ = writeln!(details, "Wi-Fi           : {}", yes_no(review.wifi));
    let _ = writeln!(details, "Outlets         : {}", yes_no(review.outlets));
    let _ = writeln!(details, "Laptop friendly : {}", yes_no(review.laptop_friendly));
    let _ = writeln!(details, "Rush hours      : {}", review.rush_hours);
    let _ = writeln!(details, "Ambience        : {}", review.ambience);
    let _ = writeln!(details, "Reviewed at     : {}", review.created_at);
    if let Some(image_url) = &review.image_url {
        let _ = writeln!(details, "Photo           : {image_url}");
    }
    let _ = write!(details, "\n{}", review.notes);
    details
}

pub fn saved_cafe_line(cafe: &SavedCafe) -> String {
    let mut line = format!(
        "[{}] {} ({})\n    {}",
        cafe.id, cafe.cafe_name, cafe.overall, cafe.address
    );
    if !cafe.notes.is_empty() {
        let _ = write!(line, "\n    {}", cafe.notes);
    }
    line
}

pub fn invalidations(inv: &Invalidations) -> String {
    inv.iter()
        .map(|i| format!("  {}: {}", i.field, i.message))
        .collect::<Vec<_>>()
        .join("\n")
}
