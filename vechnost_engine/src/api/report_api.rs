use std::fmt::Debug;

use log::*;

use crate::{
    api::objects::{AdminOverview, RankingEntry},
    traits::{CatalogManagement, ReportError, Reporting},
};

/// `ReportApi` serves the aggregate views: best sellers, the admin dashboard and the storage
/// health probe.
pub struct ReportApi<B> {
    db: B,
}

impl<B> Debug for ReportApi<B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "ReportApi")
    }
}

impl<B> ReportApi<B> {
    pub fn new(db: B) -> Self {
        Self { db }
    }
}

impl<B> ReportApi<B>
where B: Reporting + CatalogManagement
{
    /// Returns the best-selling products, ordered by order count.
    ///
    /// Titles are resolved at read time, so products deleted since their last sale still rank but
    /// carry no title.
    pub async fn top_ranking(&self, limit: i64) -> Result<Vec<RankingEntry>, ReportError> {
        let sales = self.db.product_sales(limit).await?;
        let mut entries = Vec::with_capacity(sales.len());
        for row in sales {
            let product_title = self.db.fetch_product(row.product_id).await?.map(|p| p.title);
            entries.push(RankingEntry {
                product_id: row.product_id,
                product_title,
                orders: row.orders,
                revenue: row.revenue,
            });
        }
        debug!("📊️ Ranking query resolved {} products", entries.len());
        Ok(entries)
    }
}

impl<B> ReportApi<B>
where B: Reporting
{
    pub async fn overview(&self) -> Result<AdminOverview, ReportError> {
        self.db.overview().await
    }

    pub async fn storage_tables(&self) -> Result<Vec<String>, ReportError> {
        self.db.list_tables().await
    }
}
