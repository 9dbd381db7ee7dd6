///////////////////////////////////////////////////////////////////////
// Cafés
///////////////////////////////////////////////////////////////////////

table! {
    cafes (id) {
        id -> Text,
        name -> Text,
        address -> Nullable<Text>,
        created_at -> BigInt,
    }
}

///////////////////////////////////////////////////////////////////////
// Reviews
///////////////////////////////////////////////////////////////////////

table! {
    reviews (id) {
        id -> Text,
        cafe_id -> Nullable<Text>,
        user_id -> Text,
        reviewer_name -> Text,
        reviewer_email -> Text,
        noise_level -> Nullable<Text>,
        wifi -> Nullable<Bool>,
        outlets -> Nullable<Text>,
        laptop_friendly -> Nullable<Bool>,
        rush_hours -> Nullable<Text>,
        ambience -> Nullable<Text>,
        overall_rating -> BigInt,
        notes -> Nullable<Text>,
        image_url -> Nullable<Text>,
        created_at -> BigInt,
    }
}

joinable!(reviews -> cafes (cafe_id));

///////////////////////////////////////////////////////////////////////
// Saved cafés
///////////////////////////////////////////////////////////////////////

table! {
    saved_cafes (user_id, cafe_id) {
        user_id -> Text,
        cafe_id -> Text,
        created_at -> BigInt,
    }
}

joinable!(saved_cafes -> cafes (cafe_id));

allow_tables_to_appear_in_same_query!(cafes, reviews, saved_cafes);
