// src/docs.rs

use utoipa::OpenApi;

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Storefront ---
        handlers::storefront::list_products,

        // --- Dashboard ---
        handlers::dashboard::get_dashboard,
        handlers::dashboard::get_sales_data,
        handlers::dashboard::get_user_data,
        handlers::dashboard::get_product_data,
    ),
    components(
        schemas(
            // --- Storefront ---
            models::catalog::Product,
            models::catalog::ProductCard,
            models::catalog::ProductGrid,
            models::catalog::StorefrontPage,

            // --- Dashboard ---
            models::dashboard::SalesData,
            models::dashboard::UserData,
            models::dashboard::ProductData,
            models::dashboard::DashboardCard,
            models::dashboard::DashboardPage,
        )
    ),
    tags(
        (name = "Storefront", description = "Vitrine pública de eBooks"),
        (name = "Dashboard", description = "Painel administrativo de métricas")
    )
)]
pub struct ApiDoc;
