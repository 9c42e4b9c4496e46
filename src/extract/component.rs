//! Component tokens from the file's component map.

use std::collections::BTreeMap;

use crate::types::{ComponentMeta, ComponentValue, DesignToken, TokenValue};

/// Emit one token per published component, named exactly after it.
pub fn extract_components(components: &BTreeMap<String, ComponentMeta>) -> Vec<DesignToken> {
    components
        .iter()
        .map(|(id, component)| {
            let token = DesignToken::new(
                component.name.clone(),
                TokenValue::Component(ComponentValue {
                    id: id.clone(),
                    kind: component.kind.clone(),
                    description: component.description.clone(),
                }),
            )
            .with_tags(["component", component.kind.as_str()]);

            if component.description.is_empty() {
                token
            } else {
                token.with_description(component.description.clone())
            }
        })
        .collect()
}
