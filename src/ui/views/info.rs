use serde::Serialize;

use bindigo::version::{DESCRIPTION, HOMEPAGE, VERSION};

use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;
use crate::ui::theme;
use crate::ui::widgets::r#box::{Box, BoxStyle};

/// A trained scoring model shipped with the package.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ModelInfo {
    pub name: &'static str,
    pub algorithm: &'static str,
    pub training_set: &'static str,
    pub n_features: u32,
}

pub const MODELS: &[ModelInfo] = &[ModelInfo {
    name: "default",
    algorithm: "Random Forest",
    training_set: "PDBbind v2020",
    n_features: 8,
}];

pub const CITATION: &str = "Bindigo: protein-ligand binding affinity prediction";

/// Third-party tools the pipeline builds on, with their references.
pub const ACKNOWLEDGEMENTS: &[(&str, &str)] = &[
    ("AutoDock Vina", "Eberhardt et al., J. Chem. Inf. Model. 2021"),
    ("RDKit", "https://www.rdkit.org"),
    ("BioPython", "Cock et al., Bioinformatics 2009"),
    ("scikit-learn", "Pedregosa et al., JMLR 2011"),
];

fn titled(title: &str, supports_color: bool, supports_unicode: bool) -> Box {
    let title = format!(
        "{} {}",
        Icon::Package.colored(supports_color, supports_unicode),
        ColoredText::info(title).bold().render(supports_color)
    );
    Box::with_title(title)
        .style(BoxStyle::Info)
        .width(theme::CONTENT_WIDTH)
}

pub fn render_package_info(supports_color: bool, supports_unicode: bool) -> String {
    let mut b = titled("Bindigo Package Information", supports_color, supports_unicode);
    b.add_empty();
    b.add_line(format!("Version:     {}", VERSION));
    b.add_line(format!("Homepage:    {}", HOMEPAGE));
    b.add_empty();
    b.add_wrapped(DESCRIPTION, 0);
    b.render(supports_color, supports_unicode)
}

pub fn render_models(supports_color: bool, supports_unicode: bool) -> String {
    let bullet = Icon::Bullet.render(supports_unicode);
    let mut b = titled("Available ML Models", supports_color, supports_unicode);
    for model in MODELS {
        b.add_empty();
        b.add_line(format!(
            "{} {} ({}, {}, {} features)",
            bullet, model.name, model.algorithm, model.training_set, model.n_features
        ));
    }
    b.render(supports_color, supports_unicode)
}

pub fn render_citation(supports_color: bool, supports_unicode: bool) -> String {
    let bullet = Icon::Bullet.render(supports_unicode);
    let mut b = titled("Citation Information", supports_color, supports_unicode);
    b.add_empty();
    b.add_line("If you use Bindigo in your research, please cite:");
    b.add_empty();
    b.add_line(format!("  {}", CITATION));
    b.add_line(format!("  {}", HOMEPAGE));
    b.add_empty();
    b.add_line("Bindigo uses the following tools:");
    for (tool, reference) in ACKNOWLEDGEMENTS {
        b.add_line(format!("  {} {}: {}", bullet, tool, reference));
    }
    b.render(supports_color, supports_unicode)
}
