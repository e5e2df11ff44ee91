// src/common/error.rs

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

// Nosso tipo de erro, com `thiserror` para melhor ergonomia.
// O núcleo é só leitura, então tudo que pode falhar é acesso a dados.
#[derive(Debug, Error)]
pub enum AppError {
    // Variante para erros de banco de dados (sqlx)
    #[error("Erro de banco de dados")]
    DatabaseError(#[from] sqlx::Error),

    // Variante genérica para qualquer outro erro inesperado
    // `anyhow::Error` é ótimo para capturar o contexto do erro.
    #[error("Erro interno do servidor")]
    InternalServerError(#[from] anyhow::Error),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // No painel administrativo qualquer falha de agregação derruba a
        // página inteira: o cliente recebe um 500 genérico e o detalhe
        // fica apenas no log.
        tracing::error!("Erro Interno do Servidor: {}", self);

        let body = Json(json!({ "error": "Ocorreu um erro inesperado." }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
