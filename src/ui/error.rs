use bindigo::BindigoError;

use crate::ui::blocks::error::ErrorBlock;
use crate::ui::context::UiContext;

pub fn format_error(err: &anyhow::Error, supports_color: bool, supports_unicode: bool) -> String {
    let block = match err.downcast_ref::<BindigoError>() {
        Some(bindigo) => {
            let block = ErrorBlock::new(bindigo.to_string());
            match bindigo.suggestion() {
                Some(hint) => block.with_suggestion(hint),
                None => block,
            }
        }
        None => ErrorBlock::new(BindigoError::pipeline(format!("{:#}", err)).to_string()),
    };

    format!("\n{}", block.render(supports_color, supports_unicode))
}

fn error_event(err: &anyhow::Error) -> serde_json::Value {
    let bindigo = err.downcast_ref::<BindigoError>();
    serde_json::json!({
        "event": "error",
        "kind": bindigo.map(BindigoError::kind).unwrap_or("pipeline_error"),
        "message": err.to_string(),
        "suggestion": bindigo.and_then(BindigoError::suggestion),
    })
}

/// The box goes to stderr, colored only when stderr color is enabled.
pub fn print_error(err: &anyhow::Error, ui: &UiContext) {
    if ui.json {
        let _ = crate::ui::json::emit(error_event(err));
        return;
    }

    eprint!("{}", format_error(err, ui.err_color, ui.unicode));
}
