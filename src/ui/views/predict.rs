use bindigo::application::{PredictionRequest, PredictionResult};
use bindigo::version::VERSION;

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::widgets::r#box::{Box, BoxStyle};

const SUBTITLE: &str = "Protein-Ligand Binding Affinity Prediction";

pub fn render_predict_header(
    request: &PredictionRequest,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    if !request.verbose {
        return CommandHeader::new(Icon::Predict, format!("Bindigo v{}", VERSION))
            .with_subtitle(SUBTITLE)
            .render(supports_color, supports_unicode);
    }

    let mut header = CommandHeader::new(
        Icon::Predict,
        format!("Bindigo v{} (Verbose Mode)", VERSION),
    );
    header.add("Protein", request.protein.as_str());
    header.add("Ligand", request.ligand.as_str());
    header.add("Output", request.output.as_str());
    header.add("Box size", format!("{} Å", request.box_size));
    header.add("Save pose", if request.save_pose { "yes" } else { "no" });
    header.render(supports_color, supports_unicode)
}

pub fn render_prediction_result(
    result: &PredictionResult,
    supports_color: bool,
    supports_unicode: bool,
) -> String {
    let title = format!(
        "{} {}",
        Icon::Success.colored(supports_color, supports_unicode),
        ColoredText::success("Prediction Result").bold().render(supports_color)
    );
    let mut b = Box::with_title(title).style(BoxStyle::Success);
    b.add_empty();

    let site = match &result.center {
        Some(center) => format!("center ({})", center),
        None => "auto-detect (largest pocket)".to_string(),
    };
    let affinity = match result.affinity {
        Some(pkd) => format!("{:.2} pKd", pkd),
        None => "not computed".to_string(),
    };

    let rows = [
        ("Protein", format!("{} ({})", result.protein, result.protein_type)),
        ("Ligand", format!("{} ({})", result.ligand, result.ligand_type)),
        ("Binding site", site),
        ("Box size", format!("{} Å", result.box_size)),
        ("Affinity", affinity),
        ("Status", result.status.clone()),
    ];
    for (label, value) in rows {
        b.add_line(format!("{:<14} {}", format!("{}:", label), value));
    }

    let mut out = b.render(supports_color, supports_unicode);

    if result.is_placeholder() {
        out.push_str(&format!(
            "{} {}\n",
            Icon::Warning.colored(supports_color, supports_unicode),
            ColoredText::warning("Docking and scoring are not available yet; no affinity was computed.")
                .render(supports_color)
        ));
    }

    out.push_str(&success_line(
        &format!("Results saved to: {}", result.output.display()),
        supports_color,
        supports_unicode,
    ));
    if let Some(pose) = &result.pose_file {
        out.push_str(&success_line(
            &format!("Docking pose saved to: {}", pose.display()),
            supports_color,
            supports_unicode,
        ));
    }

    out.push('\n');
    out.push_str(&success_line(
        &format!("Prediction completed in {:.0}s", result.execution_time),
        supports_color,
        supports_unicode,
    ));
    out
}

fn success_line(message: &str, supports_color: bool, supports_unicode: bool) -> String {
    format!(
        "{}\n",
        ColoredText::success(format!("{} {}", Icon::Success.render(supports_unicode), message))
            .render(supports_color)
    )
}
