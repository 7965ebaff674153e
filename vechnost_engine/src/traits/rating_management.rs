use thiserror::Error;

use crate::db_types::{NewRating, Rating};

#[allow(async_fn_in_trait)]
pub trait RatingManagement {
    async fn insert_rating(&self, rating: NewRating) -> Result<Rating, RatingError>;

    async fn fetch_ratings_for_product(&self, product_id: i64) -> Result<Vec<Rating>, RatingError>;
}

#[derive(Debug, Clone, Error)]
pub enum RatingError {
    #[error("Could not connect to the database: {0}")]
    DatabaseError(String),
    #[error("Product {0} does not exist")]
    ProductNotFound(i64),
    #[error("Rating must be between 1 and 5 stars, not {0}")]
    InvalidStars(i64),
}

impl From<sqlx::Error> for RatingError {
    fn from(e: sqlx::Error) -> Self {
        RatingError::DatabaseError(e.to_string())
    }
}
