// src/services/catalog_service.rs

use crate::{
    common::format::format_currency,
    db::CatalogRepository,
    middleware::i18n::Locale,
    models::catalog::{Product, ProductCard, ProductGrid},
};
use rust_decimal::Decimal;

const EMPTY_GRID_MESSAGE: &str = "No products available.";

#[derive(Clone)]
pub struct CatalogService {
    repo: CatalogRepository,
}

impl CatalogService {
    pub fn new(repo: CatalogRepository) -> Self {
        Self { repo }
    }

    /// Lista os produtos compráveis da vitrine.
    ///
    /// Esta é a fronteira "fail-soft" da loja: qualquer falha de acesso a
    /// dados é logada e degradada para lista vazia, em vez de derrubar a
    /// página pública. O painel administrativo segue a política oposta.
    pub async fn available_products(&self) -> Vec<Product> {
        match self.repo.find_available_products().await {
            Ok(products) => {
                tracing::debug!(?products, "Produtos disponíveis carregados");
                products
            }
            Err(err) => {
                tracing::error!("Falha ao buscar produtos da vitrine: {err}");
                Vec::new()
            }
        }
    }

    /// Manchete da vitrine. Refaz a mesma consulta da grade: as duas
    /// regiões são independentes e cada uma carrega seu próprio dado.
    pub async fn headline(&self) -> String {
        let products = self.available_products().await;
        headline_for(products.len())
    }

    /// Monta a grade: um card por produto na ordem da consulta, ou uma
    /// única mensagem de vitrine vazia.
    pub fn build_grid(products: Vec<Product>, locale: &Locale) -> ProductGrid {
        if products.is_empty() {
            return ProductGrid {
                cards: Vec::new(),
                empty_message: Some(EMPTY_GRID_MESSAGE.to_string()),
            };
        }

        let cards = products
            .into_iter()
            .map(|product| ProductCard {
                id: product.id,
                name: product.name,
                description: product.description,
                image_path: product.image_path,
                price_label: format_currency(Decimal::new(product.price_in_cents, 2), locale),
            })
            .collect();

        ProductGrid {
            cards,
            empty_message: None,
        }
    }
}

pub fn headline_for(count: usize) -> String {
    format!("{count} products found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use uuid::Uuid;

    fn sample_product(name: &str, price_in_cents: i64) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: Some(format!("Resumo de {name}")),
            price_in_cents,
            file_path: format!("ebooks/{name}.pdf"),
            image_path: None,
            is_available_for_purchase: true,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn headline_states_the_literal_count() {
        assert_eq!(headline_for(2), "2 products found");
        assert_eq!(headline_for(0), "0 products found");
    }

    #[test]
    fn empty_grid_renders_one_message_and_zero_cards() {
        let grid = CatalogService::build_grid(Vec::new(), &Locale::En);

        assert!(grid.cards.is_empty());
        assert_eq!(grid.empty_message.as_deref(), Some("No products available."));
    }

    #[test]
    fn grid_preserves_query_order_and_formats_prices() {
        let products = vec![
            sample_product("A Moreninha", 990),
            sample_product("Dom Casmurro", 1990),
        ];

        let grid = CatalogService::build_grid(products, &Locale::En);

        assert!(grid.empty_message.is_none());
        assert_eq!(grid.cards.len(), 2);
        assert_eq!(grid.cards[0].name, "A Moreninha");
        assert_eq!(grid.cards[1].name, "Dom Casmurro");
        assert_eq!(grid.cards[0].price_label, "$9.90");
        assert_eq!(grid.cards[1].price_label, "$19.90");
    }

    #[test]
    fn grid_cards_follow_the_negotiated_locale() {
        let grid = CatalogService::build_grid(
            vec![sample_product("Dom Casmurro", 1990)],
            &Locale::Pt,
        );

        assert_eq!(grid.cards[0].price_label, "R$ 19,90");
    }
}
