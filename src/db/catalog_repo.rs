// src/db/catalog_repo.rs

use sqlx::PgPool;

use crate::{common::error::AppError, models::catalog::Product};

// O repositório do catálogo, responsável pelas leituras da vitrine.
// Nenhuma escrita acontece aqui: o ciclo de vida dos produtos pertence
// ao subsistema de compras/administração.
#[derive(Clone)]
pub struct CatalogRepository {
    pool: PgPool,
}

impl CatalogRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // Busca todos os produtos compráveis, em ordem alfabética de nome.
    // Conjunto vazio é resultado válido, não erro.
    pub async fn find_available_products(&self) -> Result<Vec<Product>, AppError> {
        let products = sqlx::query_as::<_, Product>(
            r#"
            SELECT *
            FROM products
            WHERE is_available_for_purchase = TRUE
            ORDER BY name ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(products)
    }
}
