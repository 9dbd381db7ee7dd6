#![allow(clippy::extra_unused_lifetimes)]

// NOTE:
// All timestamps with the `_at` postfix are stored
// as unix timestamp in **milli**seconds.

use super::schema::*;

#[derive(Queryable)]
pub struct Cafe {
    pub id: String,
    pub name: String,
    pub address: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = cafes)]
pub struct NewCafe<'a> {
    pub id: &'a str,
    pub name: &'a str,
    pub address: Option<&'a str>,
    pub created_at: i64,
}

#[derive(Queryable)]
pub struct Review {
    pub id: String,
    pub cafe_id: Option<String>,
    pub user_id: String,
    pub reviewer_name: String,
    pub reviewer_email: String,
    pub noise_level: Option<String>,
    pub wifi: Option<bool>,
    pub outlets: Option<String>,
    pub laptop_friendly: Option<bool>,
    pub rush_hours: Option<String>,
    pub ambience: Option<String>,
    pub overall_rating: i64,
    pub notes: Option<String>,
    pub image_url: Option<String>,
    pub created_at: i64,
}

#[derive(Insertable)]
#[diesel(table_name = reviews)]
pub struct NewReview<'a> {
    pub id: &'a str,
    pub cafe_id: &'a str,
    pub user_id: &'a str,
    pub reviewer_name: &'a str,
    pub reviewer_email: &'a str,
    pub noise_level: &'a str,
    pub wifi: bool,
    pub outlets: &'a str,
    pub laptop_friendly: bool,
    pub rush_hours: &'a str,
    pub ambience: &'a str,
    pub overall_rating: i64,
    pub notes: &'a str,
    pub image_url: Option<&'a str>,
    pub created_at: i64,
}

#[derive(AsChangeset)]
#[diesel(table_name = reviews)]
pub struct ReviewChangeset<'a> {
    pub noise_level: Option<&'a str>,
    pub wifi: Option<bool>,
    pub outlets: Option<&'a str>,
    pub rush_hours: Option<&'a str>,
    pub ambience: Option<&'a str>,
    pub overall_rating: Option<i64>,
    pub notes: Option<&'a str>,
}

#[derive(Insertable)]
#[diesel(table_name = saved_cafes)]
pub struct NewSavedCafe<'a> {
    pub user_id: &'a str,
    pub cafe_id: &'a str,
    pub created_at: i64,
}
