// src/handlers/dashboard.rs

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::i18n::Locale,
    models::dashboard::{DashboardPage, ProductData, SalesData, UserData},
    services::DashboardService,
};

// GET /api/admin/dashboard
#[utoipa::path(
    get,
    path = "/api/admin/dashboard",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Os três cards do painel: vendas, clientes e produtos", body = DashboardPage),
        (status = 500, description = "Alguma agregação falhou; a página inteira falha junto")
    ),
    params(
        ("Accept-Language" = Option<String>, Header, description = "Idioma preferido para formatação (en, pt)")
    )
)]
pub async fn get_dashboard(
    State(app_state): State<AppState>,
    locale: Locale,
) -> Result<impl IntoResponse, AppError> {
    let service = &app_state.dashboard_service;

    // Os três grupos de métricas são disparados juntos e a página só é
    // montada quando todos resolverem. Uma falha derruba tudo: aqui não
    // existe a degradação fail-soft da vitrine.
    let (sales, users, products) = tokio::try_join!(
        service.sales_data(),
        service.user_data(),
        service.product_data(),
    )?;

    let cards = DashboardService::build_cards(&sales, &users, &products, &locale);

    Ok((StatusCode::OK, Json(DashboardPage { cards })))
}

// GET /api/admin/dashboard/sales
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/sales",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Total vendido e número de pedidos", body = SalesData)
    )
)]
pub async fn get_sales_data(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let sales = app_state.dashboard_service.sales_data().await?;

    Ok((StatusCode::OK, Json(sales)))
}

// GET /api/admin/dashboard/customers
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/customers",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Contagem de usuários e valor médio por usuário", body = UserData)
    )
)]
pub async fn get_user_data(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let users = app_state.dashboard_service.user_data().await?;

    Ok((StatusCode::OK, Json(users)))
}

// GET /api/admin/dashboard/products
#[utoipa::path(
    get,
    path = "/api/admin/dashboard/products",
    tag = "Dashboard",
    responses(
        (status = 200, description = "Produtos ativos x inativos no catálogo", body = ProductData)
    )
)]
pub async fn get_product_data(
    State(app_state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let products = app_state.dashboard_service.product_data().await?;

    Ok((StatusCode::OK, Json(products)))
}
