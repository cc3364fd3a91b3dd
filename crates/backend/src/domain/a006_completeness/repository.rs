use contracts::domain::a002_locale::Locale;
use contracts::domain::a003_channel::Channel;
use std::collections::HashMap;

/// Resolves channel codes to full channel records
pub trait ChannelRepository: Send + Sync {
    fn find_one_by_identifier(&self, code: &str) -> Option<Channel>;
}

/// Resolves locale codes to full locale records
pub trait LocaleRepository: Send + Sync {
    fn find_one_by_identifier(&self, code: &str) -> Option<Locale>;
}

/// Channel lookup over records already loaded in memory
#[derive(Debug, Default, Clone)]
pub struct InMemoryChannelRepository {
    channels: HashMap<String, Channel>,
}

impl InMemoryChannelRepository {
    pub fn new(channels: impl IntoIterator<Item = Channel>) -> Self {
        Self {
            channels: channels
                .into_iter()
                .map(|c| (c.code.clone(), c))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.channels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.channels.is_empty()
    }
}

impl ChannelRepository for InMemoryChannelRepository {
    fn find_one_by_identifier(&self, code: &str) -> Option<Channel> {
        self.channels.get(code).cloned()
    }
}

/// Locale lookup over records already loaded in memory
#[derive(Debug, Default, Clone)]
pub struct InMemoryLocaleRepository {
    locales: HashMap<String, Locale>,
}

impl InMemoryLocaleRepository {
    pub fn new(locales: impl IntoIterator<Item = Locale>) -> Self {
        Self {
            locales: locales
                .into_iter()
                .map(|l| (l.code.clone(), l))
                .collect(),
        }
    }

    /// Every locale activated on at least one of the channels
    pub fn from_channels<'a>(channels: impl IntoIterator<Item = &'a Channel>) -> Self {
        Self::new(
            channels
                .into_iter()
                .flat_map(|c| c.locales().iter().cloned()),
        )
    }

    pub fn len(&self) -> usize {
        self.locales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locales.is_empty()
    }
}

impl LocaleRepository for InMemoryLocaleRepository {
    fn find_one_by_identifier(&self, code: &str) -> Option<Locale> {
        self.locales.get(code).cloned()
    }
}
