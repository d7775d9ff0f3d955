use crate::attributes::Schema;
use crate::commands::{AttributeSummary, ClassSummary, CmdResult};
use crate::error::Result;
use crate::registry::{self, ModelClass};

pub fn run() -> Result<CmdResult> {
    let classes = registry::MODELS
        .iter()
        .map(|class| summarize(class))
        .collect();
    Ok(CmdResult::default().with_classes(classes))
}

fn summarize(class: &ModelClass) -> ClassSummary {
    let schema = Schema::from_specs(class.attributes);
    ClassSummary {
        handle: class.handle,
        strict: class.strict,
        attributes: schema
            .iter()
            .map(|config| AttributeSummary {
                name: config.name,
                kind: config.kind.name(),
                label: config.label.clone(),
                required: config.required,
                default: config.default.clone(),
                model: config.model.map(|nested| nested.handle),
            })
            .collect(),
    }
}
