// src/handlers/storefront.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    config::AppState,
    middleware::i18n::Locale,
    models::catalog::StorefrontPage,
    services::CatalogService,
};

// GET /api/store/products
#[utoipa::path(
    get,
    path = "/api/store/products",
    tag = "Storefront",
    responses(
        (status = 200, description = "Página da vitrine: manchete + grade de produtos compráveis", body = StorefrontPage)
    ),
    params(
        ("Accept-Language" = Option<String>, Header, description = "Idioma preferido para formatação (en, pt)")
    )
)]
pub async fn list_products(
    State(app_state): State<AppState>,
    locale: Locale,
) -> impl IntoResponse {
    // As duas regiões da página são independentes: cada uma dispara sua
    // própria consulta e nenhuma espera a outra para começar. A manchete
    // reconta pela mesma consulta da grade, dentro da mesma requisição.
    let headline_region = app_state.catalog_service.headline();
    let grid_region = async {
        let products = app_state.catalog_service.available_products().await;
        CatalogService::build_grid(products, &locale)
    };

    let (headline, grid) = tokio::join!(headline_region, grid_region);

    // Nunca retorna erro: a fronteira fail-soft do CatalogService já
    // degradou qualquer falha para vitrine vazia.
    (StatusCode::OK, Json(StorefrontPage { headline, grid }))
}
