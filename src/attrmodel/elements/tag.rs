use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;

use super::{Deprecation, ElementType, Filter, Source};
use crate::error::Result;
use crate::model::Model;
use crate::models::{TAG, TAG_CRITERIA};
use crate::registry::ModelClass;
use crate::value::Value;

static NAME_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\bname\b").expect("name pattern compiles"));

pub const NAME_PARAM_DEPRECATION: Deprecation = Deprecation {
    key: "tag_name_param",
    message: "Tags' 'name' param has been deprecated. Use 'title' instead.",
};

pub const ORDER_BY_NAME_DEPRECATION: Deprecation = Deprecation {
    key: "tag_orderby_name",
    message: "Ordering tags by 'name' has been deprecated. Order by 'title' instead.",
};

/// Tags, grouped into tag groups.
#[derive(Debug, Clone, Copy, Default)]
pub struct Tag;

impl ElementType for Tag {
    fn name(&self) -> &'static str {
        "Tags"
    }

    fn has_content(&self) -> bool {
        true
    }

    fn has_titles(&self) -> bool {
        true
    }

    fn is_localized(&self) -> bool {
        true
    }

    fn element_class(&self) -> &'static ModelClass {
        &TAG
    }

    fn criteria_class(&self) -> &'static ModelClass {
        &TAG_CRITERIA
    }

    fn table_attributes(&self, _source: Option<&str>) -> Vec<(&'static str, &'static str)> {
        vec![("title", "Title")]
    }

    /// One source per tag group, keyed `taggroup:<id>`.
    fn sources(&self, groups: &[Model]) -> IndexMap<String, Source> {
        groups
            .iter()
            .map(|group| {
                let id = group.get_attribute("id", false).unwrap_or_default();
                let key = format!("taggroup:{}", id);
                let source = Source {
                    key: key.clone(),
                    label: group
                        .attribute("name")
                        .map(ToString::to_string)
                        .unwrap_or_default(),
                    criteria: IndexMap::from([("groupId".to_string(), id)]),
                };
                (key, source)
            })
            .collect()
    }

    fn normalize_criteria(&self, criteria: &mut Model) -> Result<Vec<Deprecation>> {
        let mut deprecations = Vec::new();

        if criteria.attribute("name").is_some_and(Value::is_truthy) {
            deprecations.push(NAME_PARAM_DEPRECATION);
        }

        let rewritten = criteria
            .attribute("order")
            .and_then(Value::as_str)
            .filter(|order| NAME_WORD.is_match(order))
            .map(|order| NAME_WORD.replace_all(order, "title").into_owned());

        if let Some(order) = rewritten {
            criteria.set_attribute("order", order)?;
            deprecations.push(ORDER_BY_NAME_DEPRECATION);
        }

        for deprecation in &deprecations {
            tracing::warn!(key = deprecation.key, "{}", deprecation.message);
        }

        Ok(deprecations)
    }

    fn criteria_filters(&self, criteria: &Model) -> Vec<Filter> {
        [
            ("groupId", "tags.groupId"),
            ("group", "taggroups.handle"),
            ("name", "content.title"),
        ]
        .into_iter()
        .filter_map(|(param, column)| {
            criteria
                .attribute(param)
                .filter(|value| value.is_truthy())
                .map(|value| Filter::new(column, value.clone()))
        })
        .collect()
    }
}
