use tracing::debug;

use super::document::Document;

/// One way of locating a field in the page.
pub struct Strategy {
    pub name: &'static str,
    pub probe: fn(&Document) -> Option<String>,
}

/// Ordered strategies for a single field, most specific first.
pub struct FieldCascade {
    pub field: &'static str,
    pub strategies: &'static [Strategy],
    pub default: &'static str,
}

impl FieldCascade {
    /// First non-empty strategy result, or the field default.
    pub fn resolve(&self, doc: &Document) -> String {
        for strategy in self.strategies {
            if let Some(value) = (strategy.probe)(doc).filter(|v| !v.is_empty()) {
                debug!(field = self.field, strategy = strategy.name, "field resolved");
                return value;
            }
        }

        debug!(field = self.field, "no strategy matched, using default");
        self.default.to_string()
    }
}
