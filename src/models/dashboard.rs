// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;

// --- 1. Vendas (Total geral) ---
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalesData {
    // Valor total pago, já em unidades maiores (reais/dólares)
    #[schema(example = 20.0)]
    pub amount: Decimal,

    #[schema(example = 2)]
    pub number_of_sales: i64,
}

impl SalesData {
    // SUM() sobre zero linhas vem como NULL do banco; aqui vira 0.
    pub fn from_totals(total_paid_in_cents: Option<i64>, number_of_sales: i64) -> Self {
        Self {
            amount: Decimal::new(total_paid_in_cents.unwrap_or(0), 2),
            number_of_sales,
        }
    }
}

// --- 2. Clientes (Contagem + valor médio) ---
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UserData {
    #[schema(example = 2)]
    pub user_count: i64,

    #[schema(example = 10.0)]
    pub average_value_per_user: Decimal,
}

impl UserData {
    // Valor médio = (total pago / 100) / nº de usuários.
    // Sem usuários o valor médio é 0, nunca NaN/Infinity.
    pub fn derive(user_count: i64, total_paid_in_cents: Option<i64>) -> Self {
        let average_value_per_user = if user_count == 0 {
            Decimal::ZERO
        } else {
            Decimal::new(total_paid_in_cents.unwrap_or(0), 2) / Decimal::from(user_count)
        };

        Self {
            user_count,
            average_value_per_user,
        }
    }
}

// --- 3. Produtos (Ativos x Inativos) ---
#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ProductData {
    #[schema(example = 7)]
    pub active_count: i64,

    #[schema(example = 3)]
    pub inactive_count: i64,
}

// --- 4. Card do Painel ---
// Molde único dos cards do painel: (título, subtítulo, corpo),
// os três já formatados para exibição direta.
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardCard {
    #[schema(example = "Sales")]
    pub title: String,

    #[schema(example = "2 Orders")]
    pub subtitle: String,

    #[schema(example = "$20.00")]
    pub body: String,
}

// --- 5. Página do Painel ---
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardPage {
    pub cards: Vec<DashboardCard>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sales_with_zero_orders_normalize_to_zero() {
        let data = SalesData::from_totals(None, 0);
        assert_eq!(data.amount, Decimal::ZERO);
        assert_eq!(data.number_of_sales, 0);
    }

    #[test]
    fn sales_amount_converts_cents_to_major_units() {
        let data = SalesData::from_totals(Some(2000), 2);
        assert_eq!(data.amount, Decimal::new(2000, 2));
        assert_eq!(data.number_of_sales, 2);
    }

    #[test]
    fn average_value_divides_total_by_user_count() {
        let data = UserData::derive(2, Some(2000));
        assert_eq!(data.user_count, 2);
        assert_eq!(data.average_value_per_user, Decimal::new(1000, 2));
    }

    #[test]
    fn average_value_is_zero_without_users() {
        // Mesmo com pedidos somados, zero usuários não pode dividir.
        let data = UserData::derive(0, Some(5000));
        assert_eq!(data.average_value_per_user, Decimal::ZERO);

        let data = UserData::derive(0, None);
        assert_eq!(data.user_count, 0);
        assert_eq!(data.average_value_per_user, Decimal::ZERO);
    }

    #[test]
    fn average_value_treats_missing_sum_as_zero() {
        let data = UserData::derive(3, None);
        assert_eq!(data.average_value_per_user, Decimal::ZERO);
    }
}
