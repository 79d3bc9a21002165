use async_trait::async_trait;
use sqlx::PgPool;

use crate::core::Result;
use crate::modules::reports::models::{DateRange, SalesTotals, TopProduct};

/// Read-only access to recorded sales for report aggregation.
///
/// Both reads filter on the calendar date of the transaction timestamp,
/// inclusive on both ends. They are independent: no snapshot is shared
/// between them.
#[async_trait]
pub trait ReportRepository: Send + Sync {
    /// Sum of transaction totals and number of transactions in range
    async fn sales_totals(&self, range: &DateRange) -> Result<SalesTotals>;

    /// Product with the highest summed quantity in range.
    ///
    /// Ties go to the lexicographically smallest product name, then the
    /// smallest product id. `None` when no line items fall in range.
    async fn best_seller(&self, range: &DateRange) -> Result<Option<TopProduct>>;
}

#[derive(Debug, sqlx::FromRow)]
struct SalesTotalsRow {
    total_revenue: i64,
    transaction_count: i64,
}

#[derive(Debug, sqlx::FromRow)]
struct BestSellerRow {
    name: String,
    quantity_sold: i64,
}

pub struct PgReportRepository {
    pool: PgPool,
}

impl PgReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ReportRepository for PgReportRepository {
    async fn sales_totals(&self, range: &DateRange) -> Result<SalesTotals> {
        // Bounds are bound as text and cast by Postgres, so malformed dates
        // surface as a storage error.
        let row = sqlx::query_as::<_, SalesTotalsRow>(
            r#"
            SELECT
                COALESCE(SUM(total_amount), 0)::BIGINT AS total_revenue,
                COUNT(*)::BIGINT AS transaction_count
            FROM transactions
            WHERE DATE(created_at) BETWEEN $1::date AND $2::date
            "#,
        )
        .bind(&range.start_date)
        .bind(&range.end_date)
        .fetch_one(&self.pool)
        .await?;

        Ok(SalesTotals {
            total_revenue: row.total_revenue,
            transaction_count: row.transaction_count,
        })
    }

    async fn best_seller(&self, range: &DateRange) -> Result<Option<TopProduct>> {
        let row = sqlx::query_as::<_, BestSellerRow>(
            r#"
            SELECT
                p.name AS name,
                SUM(td.quantity)::BIGINT AS quantity_sold
            FROM transaction_details td
            JOIN product p ON td.product_id = p.id
            JOIN transactions t ON td.transaction_id = t.id
            WHERE DATE(t.created_at) BETWEEN $1::date AND $2::date
            GROUP BY p.id, p.name
            ORDER BY SUM(td.quantity) DESC, p.name ASC, p.id ASC
            LIMIT 1
            "#,
        )
        .bind(&range.start_date)
        .bind(&range.end_date)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(|r| TopProduct::new(r.name, r.quantity_sold)))
    }
}
