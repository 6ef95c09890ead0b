use anyhow::Result;

use bindigo::presentation::InfoArgs;
use bindigo::version::{DESCRIPTION, HOMEPAGE, VERSION};

use crate::ui::context::UiContext;
use crate::ui::views::info::{
    render_citation, render_models, render_package_info, ACKNOWLEDGEMENTS, CITATION, MODELS,
};

pub fn cmd_info(args: InfoArgs, ui: &UiContext) -> Result<()> {
    let sections = args.sections();

    if ui.json {
        let mut event = serde_json::json!({ "event": "info", "command": "info" });
        if sections.show_version {
            event["version"] = serde_json::json!(VERSION);
            event["description"] = serde_json::json!(DESCRIPTION);
            event["homepage"] = serde_json::json!(HOMEPAGE);
        }
        if sections.show_models {
            event["models"] = serde_json::to_value(MODELS)?;
        }
        if sections.show_citation {
            event["citation"] = serde_json::json!({
                "title": CITATION,
                "url": HOMEPAGE,
                "tools": ACKNOWLEDGEMENTS
                    .iter()
                    .map(|(tool, reference)| serde_json::json!({ "name": tool, "reference": reference }))
                    .collect::<Vec<_>>(),
            });
        }
        crate::ui::json::emit(event)?;
        return Ok(());
    }

    let mut blocks = Vec::new();
    if sections.show_version {
        blocks.push(render_package_info(ui.color, ui.unicode));
    }
    if sections.show_models {
        blocks.push(render_models(ui.color, ui.unicode));
    }
    if sections.show_citation {
        blocks.push(render_citation(ui.color, ui.unicode));
    }
    println!("{}", blocks.join("\n"));

    Ok(())
}
