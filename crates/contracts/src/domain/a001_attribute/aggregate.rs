use serde::{Deserialize, Serialize};

use crate::enums::AttributeType;

/// Атрибут каталога (описание поля товара)
///
/// Неизменяемые справочные данные. Модификаторы независимы:
/// - `scopable`: значение зависит от канала
/// - `localizable`: значение зависит от локали
/// - `available_locales`: если список не пуст, атрибут действует только в
///   этих локалях (локале-специфичный атрибут)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub code: String,

    #[serde(rename = "type")]
    pub attribute_type: AttributeType,

    #[serde(default)]
    pub scopable: bool,

    #[serde(default)]
    pub localizable: bool,

    #[serde(rename = "availableLocales", default)]
    pub available_locales: Vec<String>,
}

impl Attribute {
    pub fn new(code: impl Into<String>, attribute_type: AttributeType) -> Self {
        Self {
            code: code.into(),
            attribute_type,
            scopable: false,
            localizable: false,
            available_locales: Vec::new(),
        }
    }

    pub fn with_scopable(mut self, scopable: bool) -> Self {
        self.scopable = scopable;
        self
    }

    pub fn with_localizable(mut self, localizable: bool) -> Self {
        self.localizable = localizable;
        self
    }

    /// Ограничить атрибут списком локалей
    pub fn with_available_locales<I, S>(mut self, locales: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.available_locales = locales.into_iter().map(Into::into).collect();
        self
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn is_scopable(&self) -> bool {
        self.scopable
    }

    pub fn is_localizable(&self) -> bool {
        self.localizable
    }

    pub fn is_locale_specific(&self) -> bool {
        !self.available_locales.is_empty()
    }

    /// Входит ли локаль в список доступных локалей атрибута
    pub fn has_locale_specific(&self, locale_code: &str) -> bool {
        self.available_locales.iter().any(|code| code == locale_code)
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.code.trim().is_empty() {
            return Err("Attribute code cannot be empty".into());
        }
        if self.available_locales.iter().any(|l| l.trim().is_empty()) {
            return Err(format!(
                "Attribute '{}' has an empty available locale code",
                self.code
            ));
        }
        Ok(())
    }
}
