use crate::errors::ExportResult;
use crate::render_model::RenderModel;

pub fn render(model: &RenderModel, pretty: bool) -> ExportResult<String> {
    let res = if pretty {
        serde_json::to_string_pretty(model)?
    } else {
        serde_json::to_string(model)?
    };
    Ok(res)
}
