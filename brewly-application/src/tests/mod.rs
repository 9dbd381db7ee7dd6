pub mod prelude {
    pub use brewly_core::{entities::*, usecases};

    pub use crate::{
        error::{AppError, Operation},
        prelude as flows,
    };

    pub mod sqlite {
        pub use super::super::super::sqlite::*;
    }

    pub const OWNER: &str = "owner-1";

    pub fn new_review(cafe_name: &str, overall: i64) -> usecases::NewReview {
        usecases::NewReview {
            reviewer_name: "Jo".into(),
            reviewer_email: "jo@example.com".into(),
            cafe_name: cafe_name.into(),
            address: None,
            noise: Some("quiet".into()),
            wifi: Some(true),
            outlets: Some(true),
            laptop_friendly: None,
            rush_hours: None,
            ambience: Some("cozy".into()),
            overall: Some(overall),
            notes: format!("{overall} stars for {cafe_name}"),
            image_url: None,
        }
    }

    pub struct BackendFixture {
        pub db_connections: sqlite::Connections,
    }

    impl BackendFixture {
        pub fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let db_connections = sqlite::Connections::init(":memory:", 1).unwrap();
            brewly_db_sqlite::run_embedded_database_migrations(
                db_connections.exclusive().unwrap(),
            )
            .unwrap();
            Self { db_connections }
        }

        pub fn submit_review(&self, owner: &str, new_review: usecases::NewReview) -> Review {
            flows::submit_review(&self.db_connections, Some(owner), new_review).unwrap()
        }
    }
}
