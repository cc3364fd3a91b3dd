use crate::domain::a001_attribute::Attribute;
use crate::domain::a003_channel::Channel;
use crate::domain::common::{AggregateId, AggregateRoot, BaseAggregate};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// ID Type
// ============================================================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FamilyId(pub Uuid);

impl FamilyId {
    pub fn new(value: Uuid) -> Self {
        Self(value)
    }

    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn value(&self) -> Uuid {
        self.0
    }
}

impl AggregateId for FamilyId {
    fn as_string(&self) -> String {
        self.0.to_string()
    }

    fn from_string(s: &str) -> Result<Self, String> {
        Uuid::parse_str(s)
            .map(FamilyId::new)
            .map_err(|e| format!("Invalid UUID: {}", e))
    }
}

// ============================================================================
// Attribute requirement
// ============================================================================

/// "Атрибут X обязателен (или нет) в канале Y"
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeRequirement {
    pub attribute: Attribute,
    pub channel: Channel,
    #[serde(default = "default_required")]
    pub required: bool,
}

fn default_required() -> bool {
    true
}

impl AttributeRequirement {
    pub fn new(attribute: Attribute, channel: Channel, required: bool) -> Self {
        Self {
            attribute,
            channel,
            required,
        }
    }

    pub fn attribute(&self) -> &Attribute {
        &self.attribute
    }

    pub fn channel(&self) -> &Channel {
        &self.channel
    }

    pub fn channel_code(&self) -> &str {
        &self.channel.code
    }

    pub fn is_required(&self) -> bool {
        self.required
    }
}

// ============================================================================
// Aggregate Root
// ============================================================================

/// Семейство товаров: какие атрибуты обязательны в каких каналах
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Family {
    #[serde(flatten)]
    pub base: BaseAggregate<FamilyId>,

    #[serde(rename = "attributeRequirements", default)]
    pub attribute_requirements: Vec<AttributeRequirement>,
}

impl Family {
    pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            base: BaseAggregate::new(FamilyId::new_v4(), code.into(), description.into()),
            attribute_requirements: Vec::new(),
        }
    }

    pub fn with_requirement(mut self, requirement: AttributeRequirement) -> Self {
        self.add_attribute_requirement(requirement);
        self
    }

    pub fn add_attribute_requirement(&mut self, requirement: AttributeRequirement) {
        self.attribute_requirements.push(requirement);
    }

    pub fn attribute_requirements(&self) -> &[AttributeRequirement] {
        &self.attribute_requirements
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.base.code.trim().is_empty() {
            return Err("Family code cannot be empty".into());
        }
        for requirement in &self.attribute_requirements {
            requirement.attribute.validate()?;
            if requirement.channel.code.trim().is_empty() {
                return Err(format!(
                    "Requirement for attribute '{}' has an empty channel code",
                    requirement.attribute.code
                ));
            }
        }
        Ok(())
    }
}

impl AggregateRoot for Family {
    type Id = FamilyId;

    fn id(&self) -> Self::Id {
        self.base.id
    }

    fn code(&self) -> &str {
        &self.base.code
    }

    fn description(&self) -> &str {
        &self.base.description
    }

    fn aggregate_index() -> &'static str {
        "a004"
    }

    fn collection_name() -> &'static str {
        "family"
    }
}
