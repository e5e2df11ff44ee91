// src/db/dashboard_repo.rs

use sqlx::PgPool;

use crate::common::error::AppError;

// O repositório do painel administrativo: só agregações (SUM/COUNT),
// nunca as linhas em si. Cada consulta é independente e roda direto na
// pool, sem transação: leitura pura, snapshot de melhor esforço.
#[derive(Clone)]
pub struct DashboardRepository {
    pool: PgPool,
}

impl DashboardRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Total pago + número de pedidos, em uma única passada.
    // SUM(BIGINT) sai como NUMERIC no Postgres; o cast devolve centavos
    // inteiros. Sem pedidos o SUM é NULL, normalizado na derivação.
    pub async fn order_totals(&self) -> Result<(Option<i64>, i64), AppError> {
        let totals = sqlx::query_as::<_, (Option<i64>, i64)>(
            r#"
            SELECT SUM(price_paid_in_cents)::BIGINT, COUNT(*)
            FROM orders
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(totals)
    }

    // 2. Só o total pago, para compor com a contagem de usuários.
    pub async fn sum_paid_in_cents(&self) -> Result<Option<i64>, AppError> {
        let total = sqlx::query_scalar::<_, Option<i64>>(
            "SELECT SUM(price_paid_in_cents)::BIGINT FROM orders",
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(total)
    }

    // 3. Contagem de usuários cadastrados.
    pub async fn count_users(&self) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }

    // 4. Contagem de produtos por flag de disponibilidade.
    pub async fn count_products_by_availability(
        &self,
        available: bool,
    ) -> Result<i64, AppError> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM products WHERE is_available_for_purchase = $1",
        )
        .bind(available)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }
}
