use serde::{Deserialize, Serialize};

use crate::domain::a002_locale::Locale;

/// Канал продаж с активными локалями и валютами
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Channel {
    pub code: String,

    #[serde(default)]
    pub locales: Vec<Locale>,

    #[serde(default)]
    pub currencies: Vec<String>,
}

impl Channel {
    pub fn new(code: impl Into<String>, locales: Vec<Locale>) -> Self {
        Self {
            code: code.into(),
            locales,
            currencies: Vec::new(),
        }
    }

    pub fn with_currencies<I, S>(mut self, currencies: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.currencies = currencies.into_iter().map(Into::into).collect();
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn locales(&self) -> &[Locale] {
        &self.locales
    }

    pub fn currencies(&self) -> &[String] {
        &self.currencies
    }
}

impl std::fmt::Display for Channel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_locales_and_currencies_keep_order() {
        let channel = Channel::new(
            "print",
            vec![Locale::new("en_US"), Locale::new("de_DE")],
        )
        .with_currencies(["EUR", "USD"]);

        assert_eq!(
            channel.locales(),
            [Locale::new("en_US"), Locale::new("de_DE")]
        );
        assert_eq!(channel.currencies(), ["EUR".to_string(), "USD".to_string()]);
    }
}
