// src/models/catalog.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use uuid::Uuid;

// --- 1. Produto (Catálogo) ---
// Linha da tabela 'products'. O eBook em si fica em 'file_path';
// esse caminho nunca é exposto na vitrine, só o subsistema de entrega usa.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,

    #[schema(example = "Dom Casmurro")]
    pub name: String,

    pub description: Option<String>,

    // Preço em centavos. A conversão para reais/dólares acontece
    // apenas na formatação, nunca aqui.
    #[schema(example = 1990)]
    pub price_in_cents: i64,

    pub file_path: String,
    pub image_path: Option<String>,

    pub is_available_for_purchase: bool,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// --- 2. Card de Produto (Vitrine) ---
// O que a vitrine de fato renderiza: strings já formatadas.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductCard {
    pub id: Uuid,

    #[schema(example = "Dom Casmurro")]
    pub name: String,

    pub description: Option<String>,
    pub image_path: Option<String>,

    #[schema(example = "$19.90")]
    pub price_label: String,
}

// --- 3. Grade de Produtos ---
// Ou uma lista de cards, ou uma única mensagem de vitrine vazia.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductGrid {
    pub cards: Vec<ProductCard>,

    #[serde(skip_serializing_if = "Option::is_none")]
    #[schema(example = "No products available.")]
    pub empty_message: Option<String>,
}

// --- 4. Página da Vitrine ---
// As duas regiões independentes da página: manchete e grade.
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct StorefrontPage {
    #[schema(example = "2 products found")]
    pub headline: String,

    pub grid: ProductGrid,
}
