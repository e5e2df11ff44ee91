// src/services/dashboard_service.rs

use crate::{
    common::{
        error::AppError,
        format::{format_currency, format_number},
    },
    db::DashboardRepository,
    middleware::i18n::Locale,
    models::dashboard::{DashboardCard, ProductData, SalesData, UserData},
};

#[derive(Clone)]
pub struct DashboardService {
    repo: DashboardRepository,
}

// Ao contrário da vitrine, o painel é "fail-hard": qualquer consulta que
// falhar sobe como AppError e derruba a página inteira.
impl DashboardService {
    pub fn new(repo: DashboardRepository) -> Self {
        Self { repo }
    }

    /// Total vendido e número de pedidos, em uma passada de agregação.
    pub async fn sales_data(&self) -> Result<SalesData, AppError> {
        let (total_paid_in_cents, number_of_sales) = self.repo.order_totals().await?;

        Ok(SalesData::from_totals(total_paid_in_cents, number_of_sales))
    }

    /// Contagem de usuários + valor médio por usuário.
    /// As duas consultas não dependem uma da outra e rodam em paralelo.
    pub async fn user_data(&self) -> Result<UserData, AppError> {
        let (user_count, total_paid_in_cents) =
            tokio::try_join!(self.repo.count_users(), self.repo.sum_paid_in_cents())?;

        Ok(UserData::derive(user_count, total_paid_in_cents))
    }

    /// Produtos ativos x inativos, duas contagens paralelas sobre a
    /// mesma flag. A soma das duas é o catálogo inteiro no instante da
    /// consulta (melhor esforço, sem transação).
    pub async fn product_data(&self) -> Result<ProductData, AppError> {
        let (active_count, inactive_count) = tokio::try_join!(
            self.repo.count_products_by_availability(true),
            self.repo.count_products_by_availability(false),
        )?;

        Ok(ProductData {
            active_count,
            inactive_count,
        })
    }

    /// Monta os três cards do painel a partir dos grupos de métricas,
    /// com título, subtítulo e corpo já formatados.
    pub fn build_cards(
        sales: &SalesData,
        users: &UserData,
        products: &ProductData,
        locale: &Locale,
    ) -> Vec<DashboardCard> {
        vec![
            DashboardCard {
                title: "Sales".to_string(),
                subtitle: format!("{} Orders", format_number(sales.number_of_sales, locale)),
                body: format_currency(sales.amount, locale),
            },
            DashboardCard {
                title: "Customers".to_string(),
                subtitle: format!(
                    "{} Average Value",
                    format_currency(users.average_value_per_user, locale)
                ),
                body: format_number(users.user_count, locale),
            },
            DashboardCard {
                title: "Active Products".to_string(),
                subtitle: format!("{} Inactive", format_number(products.inactive_count, locale)),
                body: format_number(products.active_count, locale),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cards_render_the_three_metric_groups_in_order() {
        // Pedidos de 500 e 1500 centavos, dois usuários.
        let sales = SalesData::from_totals(Some(2000), 2);
        let users = UserData::derive(2, Some(2000));
        let products = ProductData {
            active_count: 7,
            inactive_count: 3,
        };

        let cards = DashboardService::build_cards(&sales, &users, &products, &Locale::En);

        assert_eq!(cards.len(), 3);

        assert_eq!(cards[0].title, "Sales");
        assert_eq!(cards[0].subtitle, "2 Orders");
        assert_eq!(cards[0].body, "$20.00");

        assert_eq!(cards[1].title, "Customers");
        assert_eq!(cards[1].subtitle, "$10.00 Average Value");
        assert_eq!(cards[1].body, "2");

        assert_eq!(cards[2].title, "Active Products");
        assert_eq!(cards[2].subtitle, "3 Inactive");
        assert_eq!(cards[2].body, "7");
    }

    #[test]
    fn cards_with_no_data_render_zeros_not_errors() {
        let sales = SalesData::from_totals(None, 0);
        let users = UserData::derive(0, None);
        let products = ProductData {
            active_count: 0,
            inactive_count: 0,
        };

        let cards = DashboardService::build_cards(&sales, &users, &products, &Locale::En);

        assert_eq!(cards[0].subtitle, "0 Orders");
        assert_eq!(cards[0].body, "$0.00");
        assert_eq!(cards[1].subtitle, "$0.00 Average Value");
        assert_eq!(cards[1].body, "0");
        assert_eq!(cards[2].body, "0");
    }

    #[test]
    fn cards_follow_the_negotiated_locale() {
        let sales = SalesData::from_totals(Some(123_456), 4);
        let users = UserData::derive(4, Some(123_456));
        let products = ProductData {
            active_count: 1_234,
            inactive_count: 0,
        };

        let cards = DashboardService::build_cards(&sales, &users, &products, &Locale::Pt);

        assert_eq!(cards[0].body, "R$ 1.234,56");
        assert_eq!(cards[2].body, "1.234");
    }
}
