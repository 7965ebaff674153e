use sqlx::SqliteConnection;

use crate::{
    db_types::{NewRating, Rating},
    traits::RatingError,
};

pub(crate) async fn insert_rating(rating: NewRating, conn: &mut SqliteConnection) -> Result<Rating, RatingError> {
    let rating = sqlx::query_as::<_, Rating>(
        r#"INSERT INTO ratings (user_id, product_id, stars, comment) VALUES ($1, $2, $3, $4) RETURNING *"#,
    )
    .bind(rating.user_id)
    .bind(rating.product_id)
    .bind(rating.stars)
    .bind(rating.comment)
    .fetch_one(conn)
    .await?;
    Ok(rating)
}

pub(crate) async fn fetch_ratings_for_product(
    product_id: i64,
    conn: &mut SqliteConnection,
) -> Result<Vec<Rating>, RatingError> {
    let ratings = sqlx::query_as::<_, Rating>(r#"SELECT * FROM ratings WHERE product_id = $1 ORDER BY id"#)
        .bind(product_id)
        .fetch_all(conn)
        .await?;
    Ok(ratings)
}
