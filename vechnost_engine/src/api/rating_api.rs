use std::fmt::Debug;

use log::*;

use crate::{
    db_types::{NewRating, Rating},
    traits::{CatalogManagement, RatingError, RatingManagement},
};

/// `RatingApi` records product reviews and serves them per product.
pub struct RatingApi<B> {
    db: B,
}

impl<B> Debug for RatingApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RatingApi")
    }
}

impl<B> RatingApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> RatingApi<B>
where B: RatingManagement + CatalogManagement
{
    /// Records a rating against an existing product. Ratings carry one to five stars; anything
    /// else is rejected.
    pub async fn create_rating(&self, rating: NewRating) -> Result<Rating, RatingError> {
        if !(1..=5).contains(&rating.stars) {
            return Err(RatingError::InvalidStars(rating.stars));
        }
        let product = self
            .db
            .fetch_product(rating.product_id)
            .await
            .map_err(|e| RatingError::DatabaseError(e.to_string()))?;
        if product.is_none() {
            return Err(RatingError::ProductNotFound(rating.product_id));
        }
        let rating = self.db.insert_rating(rating).await?;
        debug!("⭐️ Rating {} recorded: {} stars for product {}", rating.id, rating.stars, rating.product_id);
        Ok(rating)
    }
}

impl<B> RatingApi<B>
where B: RatingManagement
{
    pub async fn ratings_for_product(&self, product_id: i64) -> Result<Vec<Rating>, RatingError> {
        self.db.fetch_ratings_for_product(product_id).await
    }
}
