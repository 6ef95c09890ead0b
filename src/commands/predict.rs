use anyhow::Result;

use bindigo::application::Pipeline;
use bindigo::config::Config;
use bindigo::infrastructure::write_prediction_report;
use bindigo::presentation::PredictArgs;

use crate::ui::context::UiContext;
use crate::ui::views::predict::{render_predict_header, render_prediction_result};

pub fn cmd_predict(args: &PredictArgs, config: &Config, ui: &UiContext) -> Result<()> {
    let request = args.to_request(config)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "start",
            "command": "predict",
            "protein": request.protein,
            "ligand": request.ligand,
            "output": request.output,
        }))?;
    } else {
        println!("{}", render_predict_header(&request, ui.color, ui.unicode));
    }

    let pipeline = Pipeline::placeholder(config.clone());
    let result = pipeline.run(&request)?;
    write_prediction_report(&result)?;

    if ui.json {
        crate::ui::json::emit(serde_json::json!({
            "event": "complete",
            "command": "predict",
            "result": result,
        }))?;
    } else {
        print!("{}", render_prediction_result(&result, ui.color, ui.unicode));
    }

    Ok(())
}
