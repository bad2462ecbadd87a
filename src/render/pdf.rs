//! PDF capture parameters.

use chromiumoxide::cdp::browser_protocol::page::PrintToPdfParams;

use crate::config::RenderOptions;
use crate::error::ExportResult;

/// Assemble the CDP print command from the configuration: orientation,
/// scale, paper size from the format token, the margin token applied
/// uniformly on all four sides.
pub(crate) fn print_params(options: &RenderOptions) -> ExportResult<PrintToPdfParams> {
    let (paper_width, paper_height) = options.format.paper_size();
    let margin = options.margin_inches()?;

    Ok(PrintToPdfParams {
        landscape: Some(options.landscape),
        scale: Some(options.scale),
        paper_width: Some(paper_width),
        paper_height: Some(paper_height),
        margin_top: Some(margin),
        margin_bottom: Some(margin),
        margin_left: Some(margin),
        margin_right: Some(margin),
        print_background: Some(true),
        ..Default::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PageFormat;

    #[test]
    fn params_reflect_configuration() {
        let options = RenderOptions {
            landscape: true,
            format: PageFormat::A4,
            scale: 1.5,
            margin: "1in".to_string(),
            ..RenderOptions::default()
        };
        let params = print_params(&options).unwrap();
        assert_eq!(params.landscape, Some(true));
        assert_eq!(params.scale, Some(1.5));
        assert_eq!(params.paper_width, Some(8.27));
        assert_eq!(params.paper_height, Some(11.7));
        assert_eq!(params.margin_top, Some(1.0));
        assert_eq!(params.margin_bottom, Some(1.0));
        assert_eq!(params.margin_left, Some(1.0));
        assert_eq!(params.margin_right, Some(1.0));
    }

    #[test]
    fn defaults_use_letter_and_eighth_inch_margin() {
        let params = print_params(&RenderOptions::default()).unwrap();
        assert_eq!(params.landscape, Some(false));
        assert_eq!(params.paper_width, Some(8.5));
        assert_eq!(params.paper_height, Some(11.0));
        assert_eq!(params.margin_top, Some(0.125));
    }
}
