use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::value::{Value, ValueKey};

/// Коллекция значений в порядке добавления, уникальная по ключу сопоставления
///
/// Используется и для значений товара, и для пустых слотов обязательных
/// атрибутов
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<Value>")]
pub struct ValueCollection {
    values: Vec<Value>,
    index: HashMap<ValueKey, usize>,
}

impl ValueCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить значение, если ключ еще не занят
    ///
    /// Возвращает `false`, если ключ уже есть; сохраненное значение не меняется
    pub fn add(&mut self, value: Value) -> bool {
        let key = value.key();
        if self.index.contains_key(&key) {
            return false;
        }
        self.index.insert(key, self.values.len());
        self.values.push(value);
        true
    }

    pub fn get(&self, key: &ValueKey) -> Option<&Value> {
        self.index.get(key).map(|&i| &self.values[i])
    }

    pub fn get_by_codes(
        &self,
        attribute_code: &str,
        scope: Option<&str>,
        locale: Option<&str>,
    ) -> Option<&Value> {
        self.get(&ValueKey::new(attribute_code, scope, locale))
    }

    pub fn contains_key(&self, key: &ValueKey) -> bool {
        self.index.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn keys(&self) -> impl Iterator<Item = ValueKey> + '_ {
        self.values.iter().map(Value::key)
    }
}

impl From<Vec<Value>> for ValueCollection {
    fn from(values: Vec<Value>) -> Self {
        values.into_iter().collect()
    }
}

impl From<ValueCollection> for Vec<Value> {
    fn from(collection: ValueCollection) -> Self {
        collection.values
    }
}

impl FromIterator<Value> for ValueCollection {
    fn from_iter<T: IntoIterator<Item = Value>>(iter: T) -> Self {
        let mut collection = ValueCollection::new();
        for value in iter {
            collection.add(value);
        }
        collection
    }
}

impl<'a> IntoIterator for &'a ValueCollection {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}
