use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::model::Options;
use crate::registry;
use crate::value::Value;

use super::helpers::Rows;

/// Populate one `handle` model per row, then apply `assignments` to each through the
/// chain-setter.
pub fn run(
    handle: &str,
    input: Rows,
    assignments: &[(String, Value)],
    options: Options,
) -> Result<CmdResult> {
    let class = registry::resolve(handle)?;

    let mut models = class.populate_models_with(options, input.rows)?;
    for (name, value) in assignments {
        models = models
            .iter()
            .map(|model| model.with(name, value.clone()))
            .collect::<Result<_>>()?;
    }

    tracing::debug!(model = class.handle, count = models.len(), "populated models");

    let mut result = CmdResult::default().with_models(models, input.single);
    if result.models.is_empty() {
        result.add_message(CmdMessage::info("No rows in input."));
    }
    Ok(result)
}
