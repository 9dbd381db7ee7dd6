use super::*;
use brewly_entities as e;
use e::{
    cafe::ADDRESS_NOT_PROVIDED,
    rating::RatingValue,
    review::{RushHours, UNKNOWN_CAFE_NAME},
    time::Timestamp,
};

pub fn outlets_text(outlets: bool) -> &'static str {
    if outlets {
        OUTLETS_YES
    } else {
        OUTLETS_NO
    }
}

fn non_blank(s: Option<String>) -> Option<String> {
    s.map(|s| s.trim().to_owned()).filter(|s| !s.is_empty())
}

impl From<ReviewRow> for e::review::Review {
    fn from(from: ReviewRow) -> Self {
        let ReviewRow {
            id,
            cafe_id,
            user_id: _,
            noise_level,
            wifi,
            outlets,
            laptop_friendly,
            rush_hours,
            ambience,
            overall_rating,
            notes,
            image_url,
            created_at,
            cafe,
        } = from;
        let (cafe_name, address) = match cafe {
            Some(CafeRef { name, address }) => (non_blank(name), non_blank(address)),
            None => (None, None),
        };
        Self {
            id: id.into(),
            cafe_id: non_blank(cafe_id).map(Into::into),
            cafe_name: cafe_name.unwrap_or_else(|| UNKNOWN_CAFE_NAME.to_owned()),
            address: address.unwrap_or_else(|| ADDRESS_NOT_PROVIDED.to_owned()),
            noise: noise_level
                .and_then(|n| n.trim().parse().ok())
                .unwrap_or_default(),
            wifi: wifi.unwrap_or(false),
            outlets: outlets
                .map(|o| o.trim().eq_ignore_ascii_case(OUTLETS_YES))
                .unwrap_or(false),
            laptop_friendly: laptop_friendly.unwrap_or(true),
            rush_hours: rush_hours
                .as_deref()
                .map(RushHours::from_label)
                .unwrap_or_default(),
            ambience: ambience
                .and_then(|a| a.trim().parse().ok())
                .unwrap_or_default(),
            overall: RatingValue::clamped(overall_rating),
            notes: notes.unwrap_or_default(),
            image_url: non_blank(image_url),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl From<CafeRow> for e::cafe::Cafe {
    fn from(from: CafeRow) -> Self {
        let CafeRow {
            id,
            name,
            address,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            address: non_blank(address),
            created_at: Timestamp::from_millis(created_at),
        }
    }
}

impl From<e::cafe::Cafe> for CafeRow {
    fn from(from: e::cafe::Cafe) -> Self {
        let e::cafe::Cafe {
            id,
            name,
            address,
            created_at,
        } = from;
        Self {
            id: id.into(),
            name,
            address,
            created_at: created_at.as_millis(),
        }
    }
}

impl From<SavedCafeRecord> for e::saved::SavedCafe {
    fn from(from: SavedCafeRecord) -> Self {
        let SavedCafeRecord {
            id,
            cafe_name,
            address,
            overall,
            notes,
        } = from;
        let address = if address.trim().is_empty() {
            ADDRESS_NOT_PROVIDED.to_owned()
        } else {
            address
        };
        Self {
            id: id.into(),
            cafe_name,
            address,
            overall: e::rating::AvgRatingValue::from(overall).clamp(),
            notes,
        }
    }
}

impl From<e::saved::SavedCafe> for SavedCafeRecord {
    fn from(from: e::saved::SavedCafe) -> Self {
        let e::saved::SavedCafe {
            id,
            cafe_name,
            address,
            overall,
            notes,
        } = from;
        Self {
            id: id.into(),
            cafe_name,
            address,
            overall: overall.into(),
            notes,
        }
    }
}
