//! Insertion-ordered channel → locale → bucket map
//!
//! The completeness records are emitted in the order channels and locales
//! were first met while walking the family requirements, so both levels keep
//! insertion order. Channel and locale counts are small; buckets are found
//! by linear scan.

#[derive(Debug, Clone, PartialEq)]
pub struct ChannelLocaleMatrix<T> {
    channels: Vec<(String, Vec<(String, T)>)>,
}

impl<T> Default for ChannelLocaleMatrix<T> {
    fn default() -> Self {
        Self {
            channels: Vec::new(),
        }
    }
}

impl<T> ChannelLocaleMatrix<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, channel_code: &str, locale_code: &str) -> Option<&T> {
        self.channels
            .iter()
            .find(|(channel, _)| channel == channel_code)
            .and_then(|(_, locales)| {
                locales
                    .iter()
                    .find(|(locale, _)| locale == locale_code)
                    .map(|(_, bucket)| bucket)
            })
    }

    /// Bucket for the pair, created with `init` on first access
    pub fn get_or_insert_with(
        &mut self,
        channel_code: &str,
        locale_code: &str,
        init: impl FnOnce() -> T,
    ) -> &mut T {
        let channel_pos = match self
            .channels
            .iter()
            .position(|(channel, _)| channel == channel_code)
        {
            Some(pos) => pos,
            None => {
                self.channels.push((channel_code.to_string(), Vec::new()));
                self.channels.len() - 1
            }
        };

        let locales = &mut self.channels[channel_pos].1;
        let locale_pos = match locales.iter().position(|(locale, _)| locale == locale_code) {
            Some(pos) => pos,
            None => {
                locales.push((locale_code.to_string(), init()));
                locales.len() - 1
            }
        };

        &mut locales[locale_pos].1
    }

    /// Buckets as (channel code, locale code, bucket), channels first
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str, &T)> + '_ {
        self.channels.iter().flat_map(|(channel, locales)| {
            locales
                .iter()
                .map(move |(locale, bucket)| (channel.as_str(), locale.as_str(), bucket))
        })
    }

    /// Consumes the matrix, yielding buckets in the same order as `iter`
    pub fn into_buckets(self) -> impl Iterator<Item = T> {
        self.channels
            .into_iter()
            .flat_map(|(_, locales)| locales.into_iter().map(|(_, bucket)| bucket))
    }

    /// Number of channel/locale buckets
    pub fn len(&self) -> usize {
        self.channels.iter().map(|(_, locales)| locales.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut matrix: ChannelLocaleMatrix<Vec<u32>> = ChannelLocaleMatrix::new();
        matrix.get_or_insert_with("print", "fr_FR", Vec::new).push(1);
        matrix.get_or_insert_with("mobile", "en_US", Vec::new).push(2);
        matrix.get_or_insert_with("print", "de_DE", Vec::new).push(3);
        matrix.get_or_insert_with("print", "fr_FR", Vec::new).push(4);

        let pairs: Vec<_> = matrix.iter().map(|(c, l, b)| (c, l, b.clone())).collect();
        assert_eq!(
            pairs,
            vec![
                ("print", "fr_FR", vec![1, 4]),
                ("print", "de_DE", vec![3]),
                ("mobile", "en_US", vec![2]),
            ]
        );
        assert_eq!(matrix.len(), 3);
        assert_eq!(matrix.into_buckets().collect::<Vec<_>>(), vec![vec![1, 4], vec![3], vec![2]]);
    }

    #[test]
    fn test_get_missing_bucket() {
        let mut matrix: ChannelLocaleMatrix<u32> = ChannelLocaleMatrix::new();
        assert!(matrix.is_empty());
        *matrix.get_or_insert_with("mobile", "en_US", || 0) += 5;

        assert_eq!(matrix.get("mobile", "en_US"), Some(&5));
        assert_eq!(matrix.get("mobile", "fr_FR"), None);
        assert_eq!(matrix.get("print", "en_US"), None);
    }
}
