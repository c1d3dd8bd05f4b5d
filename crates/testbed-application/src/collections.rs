//! Collection Builders
//!
//! Ordered, keyed collections composed at start-up. A builder is assembled
//! (append / insert / remove), registered in the container, and turned into
//! an immutable [`Collection`] the first time the collection is resolved.

use crate::plugins::PluginManager;
use std::sync::Arc;
use testbed_domain::ports::UrlSegmentProvider;
use testbed_domain::value_objects::{MapperDescriptor, PluginKind, PropertyEditorDescriptor};

/// Item that can be identified inside a collection
pub trait CollectionItem {
    /// Key used for removal and duplicate detection
    fn item_key(&self) -> String;
}

/// Ordered collection builder
#[derive(Clone)]
pub struct CollectionBuilder<T> {
    items: Vec<T>,
}

impl<T> Default for CollectionBuilder<T> {
    fn default() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T: CollectionItem + Clone> CollectionBuilder<T> {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item; an item with the same key moves to the end
    pub fn append(mut self, item: T) -> Self {
        let key = item.item_key();
        self.items.retain(|existing| existing.item_key() != key);
        self.items.push(item);
        self
    }

    /// Append every item in order
    pub fn append_all<I: IntoIterator<Item = T>>(self, items: I) -> Self {
        items.into_iter().fold(self, Self::append)
    }

    /// Insert an item before the item keyed `before`, or at the end if absent
    pub fn insert_before(mut self, before: &str, item: T) -> Self {
        let key = item.item_key();
        self.items.retain(|existing| existing.item_key() != key);
        match self.items.iter().position(|existing| existing.item_key() == before) {
            Some(index) => self.items.insert(index, item),
            None => self.items.push(item),
        }
        self
    }

    /// Remove the item keyed `key`
    pub fn remove(mut self, key: &str) -> Self {
        self.items.retain(|existing| existing.item_key() != key);
        self
    }

    /// Remove every item
    pub fn clear(mut self) -> Self {
        self.items.clear();
        self
    }

    /// Whether an item keyed `key` is present
    pub fn contains(&self, key: &str) -> bool {
        self.items.iter().any(|existing| existing.item_key() == key)
    }

    /// Keys in order
    pub fn keys(&self) -> Vec<String> {
        self.items.iter().map(CollectionItem::item_key).collect()
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the builder is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Build the immutable collection
    pub fn build(&self) -> Collection<T> {
        Collection {
            items: self.items.clone(),
        }
    }
}

/// Immutable ordered collection
#[derive(Clone)]
pub struct Collection<T> {
    items: Vec<T>,
}

impl<T: CollectionItem> Collection<T> {
    /// Items in order
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Item keyed `key`
    pub fn get(&self, key: &str) -> Option<&T> {
        self.items.iter().find(|item| item.item_key() == key)
    }

    /// Number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the collection is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

// ============================================================================
// Concrete collections
// ============================================================================

impl CollectionItem for Arc<dyn UrlSegmentProvider> {
    fn item_key(&self) -> String {
        self.provider_name().to_string()
    }
}

impl CollectionItem for PropertyEditorDescriptor {
    fn item_key(&self) -> String {
        self.alias.clone()
    }
}

impl CollectionItem for MapperDescriptor {
    fn item_key(&self) -> String {
        self.entity.clone()
    }
}

/// Builder for URL segment providers
pub type UrlSegmentProviderCollectionBuilder = CollectionBuilder<Arc<dyn UrlSegmentProvider>>;
/// URL segment providers, queried in order
pub type UrlSegmentProviderCollection = Collection<Arc<dyn UrlSegmentProvider>>;
/// Builder for property editors
pub type PropertyEditorCollectionBuilder = CollectionBuilder<PropertyEditorDescriptor>;
/// Property editors
pub type PropertyEditorCollection = Collection<PropertyEditorDescriptor>;
/// Builder for persistence mappers
pub type MapperCollectionBuilder = CollectionBuilder<MapperDescriptor>;
/// Persistence mappers
pub type MapperCollection = Collection<MapperDescriptor>;

impl Collection<Arc<dyn UrlSegmentProvider>> {
    /// First segment any provider produces for `name`
    pub fn url_segment(&self, name: &str) -> Option<String> {
        self.items
            .iter()
            .find_map(|provider| provider.url_segment(name))
    }
}

/// Property editor builder populated from discovered property editor types
pub fn property_editors_from(plugins: &PluginManager) -> PropertyEditorCollectionBuilder {
    plugins
        .types_of_kind(PluginKind::PropertyEditor)
        .into_iter()
        .fold(PropertyEditorCollectionBuilder::new(), |builder, entry| {
            builder.append(PropertyEditorDescriptor {
                alias: entry.name.to_string(),
                name: entry.description.to_string(),
                legacy_id: entry.legacy_id,
            })
        })
}
