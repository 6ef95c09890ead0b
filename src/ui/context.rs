use bindigo::config::{ColorMode, Config};
use bindigo::presentation::ColorWhen;

use crate::ui::terminal::{detect_capabilities, TerminalCapabilities};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiContext {
    pub json: bool,
    pub verbose: bool,
    /// Color on stdout
    pub color: bool,
    /// Color on stderr (error box, warnings, console logs)
    pub err_color: bool,
    pub unicode: bool,
}

impl UiContext {
    pub fn new(json: bool, verbose: bool, cli_color: Option<ColorWhen>, config: &Config) -> Self {
        let caps = detect_capabilities();
        Self::from_caps(json, verbose, cli_color, config, caps)
    }

    pub(crate) fn from_caps(
        json: bool,
        verbose: bool,
        cli_color: Option<ColorWhen>,
        config: &Config,
        caps: TerminalCapabilities,
    ) -> Self {
        let unicode = config.output.unicode && caps.supports_unicode;

        let resolve = |stream_supports_color: bool| match cli_color {
            Some(ColorWhen::Never) => false,
            Some(ColorWhen::Always) => true,
            Some(ColorWhen::Auto) | None => match config.output.color {
                ColorMode::Never => false,
                ColorMode::Always => true,
                ColorMode::Auto => stream_supports_color && !caps.is_ci,
            },
        };

        Self {
            json,
            verbose: verbose || config.output.verbose,
            color: resolve(caps.supports_color) && !json,
            err_color: resolve(caps.stderr_supports_color),
            unicode,
        }
    }
}
