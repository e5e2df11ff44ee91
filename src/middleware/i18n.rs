// src/middleware/i18n.rs

use axum::extract::FromRequestParts;
use axum::http::{header, request::Parts};

// Nosso extrator de idioma. O locale negociado decide só a formatação
// de moeda e número; os textos dos cards permanecem os mesmos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Locale {
    #[default]
    En,
    Pt,
}

impl Locale {
    // "pt-BR" -> split vira ["pt", "BR"] -> next() pega "pt"
    // "en"    -> split vira ["en"]       -> next() pega "en"
    fn from_tag(tag: &str) -> Self {
        match tag.split('-').next().unwrap_or(tag) {
            lang if lang.eq_ignore_ascii_case("pt") => Locale::Pt,
            _ => Locale::En,
        }
    }

    /// Escolhe o idioma preferido do header Accept-Language.
    pub fn negotiate(header_value: &str) -> Self {
        accept_language::parse(header_value)
            .first()
            .map(|tag| Locale::from_tag(tag))
            .unwrap_or_default()
    }
}

impl<S> FromRequestParts<S> for Locale
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        let locale = parts
            .headers
            .get(header::ACCEPT_LANGUAGE)
            .and_then(|header_value| header_value.to_str().ok())
            .map(Locale::negotiate)
            .unwrap_or_default();

        Ok(locale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negotiates_primary_language_subtag() {
        assert_eq!(Locale::negotiate("pt-BR,pt;q=0.9,en;q=0.8"), Locale::Pt);
        assert_eq!(Locale::negotiate("en-US,en;q=0.5"), Locale::En);
    }

    #[test]
    fn unknown_or_empty_headers_fall_back_to_english() {
        assert_eq!(Locale::negotiate("fr-FR"), Locale::En);
        assert_eq!(Locale::negotiate(""), Locale::En);
    }
}
