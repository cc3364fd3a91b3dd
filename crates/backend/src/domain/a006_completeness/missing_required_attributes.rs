use contracts::domain::a001_attribute::Attribute;

/// Missing required attributes of one channel/locale pair.
///
/// Attributes are kept in the order they were first added; adding an
/// attribute whose code is already present is a no-op.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct MissingRequiredAttributes {
    attributes: Vec<Attribute>,
}

impl MissingRequiredAttributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, attribute: &Attribute) {
        if !self.contains(attribute.code()) {
            self.attributes.push(attribute.clone());
        }
    }

    pub fn contains(&self, attribute_code: &str) -> bool {
        self.attributes.iter().any(|a| a.code() == attribute_code)
    }

    pub fn attributes(&self) -> &[Attribute] {
        &self.attributes
    }

    pub fn attribute_codes(&self) -> Vec<&str> {
        self.attributes.iter().map(Attribute::code).collect()
    }

    pub fn into_attributes(self) -> Vec<Attribute> {
        self.attributes
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}
