//! Grouping color entries into style rules.

use crate::resolver::ColorResolver;
use std::collections::HashMap;
use thenmap_types::{ColorEntry, ColorGroup, ResolvedColor};
use tracing::debug;

/// Groups (entity, color) pairs into per-color selector buckets.
///
/// One rule per distinct resolved color instead of one per entity keeps
/// generated style size proportional to the palette, not the map.
#[derive(Debug, Clone, Default)]
pub struct StyleAggregator {
    resolver: ColorResolver,
}

impl StyleAggregator {
    /// Creates an aggregator with the default resolver.
    #[must_use]
    pub fn new() -> Self {
        Self::with_resolver(ColorResolver::new())
    }

    /// Creates an aggregator with a custom resolver.
    #[must_use]
    pub fn with_resolver(resolver: ColorResolver) -> Self {
        Self { resolver }
    }

    /// Returns the resolver in use.
    #[must_use]
    pub fn resolver(&self) -> &ColorResolver {
        &self.resolver
    }

    /// Aggregates entries into color groups.
    ///
    /// Single forward scan. Entries without a color (or with an empty one)
    /// are skipped. Duplicate ids resolve last-seen-wins, keeping the
    /// position of the first occurrence. Groups come out in the order
    /// their resolved color was first encountered. Selectors are scoped to
    /// `path` shapes so colorization never touches incidental document
    /// elements.
    #[must_use]
    pub fn aggregate(&self, entries: &[ColorEntry]) -> Vec<ColorGroup> {
        let mut order: Vec<(&str, ResolvedColor)> = Vec::new();
        let mut slots: HashMap<&str, usize> = HashMap::new();

        for entry in entries {
            let Some(color) = entry.color.as_deref().filter(|c| !c.is_empty()) else {
                continue;
            };
            let resolved = self.resolver.resolve(color);
            match slots.get(entry.id.as_str()) {
                Some(&i) => order[i].1 = resolved,
                None => {
                    slots.insert(entry.id.as_str(), order.len());
                    order.push((entry.id.as_str(), resolved));
                }
            }
        }

        let mut groups: Vec<ColorGroup> = Vec::new();
        let mut by_color: HashMap<ResolvedColor, usize> = HashMap::new();
        for (id, color) in order {
            let selector = format!("path.{id}");
            match by_color.get(&color) {
                Some(&i) => groups[i].selectors.push(selector),
                None => {
                    by_color.insert(color.clone(), groups.len());
                    let mut group = ColorGroup::new(color);
                    group.selectors.push(selector);
                    groups.push(group);
                }
            }
        }

        debug!(
            "aggregated {} entries into {} color groups",
            entries.len(),
            groups.len()
        );
        groups
    }
}

/// Serializes groups into style rules, one per non-empty group:
/// `<sel>, <sel>{fill:<color>}` plus a line terminator.
#[must_use]
pub fn render_rules(groups: &[ColorGroup]) -> String {
    let mut css = String::new();
    for group in groups {
        if group.is_empty() {
            continue;
        }
        css.push_str(&group.selectors.join(", "));
        css.push_str("{fill:");
        css.push_str(group.color.as_str());
        css.push_str("}\n");
    }
    css
}
