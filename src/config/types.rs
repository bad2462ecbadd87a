//! Request types for one export.

use serde::{Deserialize, Serialize};

use crate::error::{ExportError, ExportResult};

/// Hard cap on URLs per export request, enforced at validation time and
/// re-checked defensively by the orchestrator.
pub const MAX_URLS: usize = 15;

/// Scale domain accepted by the renderer.
const MIN_SCALE: f64 = 0.1;
const MAX_SCALE: f64 = 2.0;

/// One user-submitted export: an ordered batch of article URLs plus the
/// rendering configuration. Created at request entry, consumed once, never
/// mutated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    #[serde(default)]
    pub urls: Vec<String>,
    #[serde(default)]
    pub configuration: RenderOptions,
}

impl ExportRequest {
    /// Reject malformed input before the pipeline runs.
    ///
    /// Checks the URL cap, URL well-formedness, the scale domain and the
    /// margin token. Field presence is already guaranteed by serde defaults.
    pub fn validate(&self) -> ExportResult<()> {
        if self.urls.len() > MAX_URLS {
            return Err(ExportError::Validation(format!(
                "too many URLs: {} (maximum {MAX_URLS})",
                self.urls.len()
            )));
        }
        for url in &self.urls {
            url::Url::parse(url)
                .map_err(|e| ExportError::Validation(format!("invalid URL {url:?}: {e}")))?;
        }
        self.configuration.validate()
    }
}

/// Rendering and content flags for one export. An explicit struct rather
/// than an open map: the field set is fixed and fully enumerable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderOptions {
    /// Landscape page orientation.
    pub landscape: bool,
    /// Keep article images (thumbnail containers).
    pub images: bool,
    /// Keep the table of contents.
    pub contents: bool,
    /// Keep the "See also" section.
    pub related: bool,
    /// Keep the footnotes section.
    pub footnotes: bool,
    /// Keep the references section.
    pub references: bool,
    /// Paper size for PDF capture.
    pub format: PageFormat,
    /// Render scale, valid in [0.1, 2.0].
    pub scale: f64,
    /// Uniform page margin as a CSS-style length token, e.g. ".125in".
    pub margin: String,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            landscape: false,
            images: true,
            contents: true,
            related: false,
            footnotes: false,
            references: false,
            format: PageFormat::Letter,
            scale: 1.0,
            margin: ".125in".to_string(),
        }
    }
}

impl RenderOptions {
    pub fn validate(&self) -> ExportResult<()> {
        if !(MIN_SCALE..=MAX_SCALE).contains(&self.scale) {
            return Err(ExportError::Validation(format!(
                "scale {} out of range [{MIN_SCALE}, {MAX_SCALE}]",
                self.scale
            )));
        }
        parse_margin(&self.margin)?;
        Ok(())
    }

    /// Uniform margin in inches, as understood by the PDF capture command.
    ///
    /// Infallible after [`validate`](Self::validate) has passed.
    pub fn margin_inches(&self) -> ExportResult<f64> {
        parse_margin(&self.margin)
    }
}

/// Paper size tokens accepted on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageFormat {
    Letter,
    Legal,
    Tabloid,
    Ledger,
    A0,
    A1,
    A2,
    A3,
    A4,
    A5,
    A6,
}

impl PageFormat {
    /// Paper dimensions as (width, height) in inches, matching the sizes
    /// Chrome's print command expects.
    pub fn paper_size(self) -> (f64, f64) {
        match self {
            Self::Letter => (8.5, 11.0),
            Self::Legal => (8.5, 14.0),
            Self::Tabloid => (11.0, 17.0),
            Self::Ledger => (17.0, 11.0),
            Self::A0 => (33.1, 46.8),
            Self::A1 => (23.4, 33.1),
            Self::A2 => (16.54, 23.39),
            Self::A3 => (11.7, 16.54),
            Self::A4 => (8.27, 11.7),
            Self::A5 => (5.83, 8.27),
            Self::A6 => (4.13, 5.83),
        }
    }
}

/// Parse a CSS-style length token into inches.
///
/// Supported units: `in`, `cm`, `mm`, `px`. A bare number is treated as
/// pixels at 96 dpi, the same convention the renderer uses.
fn parse_margin(token: &str) -> ExportResult<f64> {
    let token = token.trim();
    let (number, per_inch) = if let Some(v) = token.strip_suffix("in") {
        (v, 1.0)
    } else if let Some(v) = token.strip_suffix("cm") {
        (v, 2.54)
    } else if let Some(v) = token.strip_suffix("mm") {
        (v, 25.4)
    } else if let Some(v) = token.strip_suffix("px") {
        (v, 96.0)
    } else {
        (token, 96.0)
    };

    let value: f64 = number
        .trim()
        .parse()
        .map_err(|_| ExportError::Validation(format!("invalid margin token {token:?}")))?;
    if !value.is_finite() || value < 0.0 {
        return Err(ExportError::Validation(format!(
            "invalid margin token {token:?}"
        )));
    }
    Ok(value / per_inch)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn margin_tokens_convert_to_inches() {
        let inches = |m: &str| parse_margin(m).unwrap();
        assert!((inches(".125in") - 0.125).abs() < 1e-9);
        assert!((inches("2.54cm") - 1.0).abs() < 1e-9);
        assert!((inches("25.4mm") - 1.0).abs() < 1e-9);
        assert!((inches("96px") - 1.0).abs() < 1e-9);
        assert!((inches("48") - 0.5).abs() < 1e-9);
    }

    #[test]
    fn bad_margin_tokens_are_rejected() {
        assert!(parse_margin("wide").is_err());
        assert!(parse_margin("-1in").is_err());
        assert!(parse_margin("").is_err());
    }

    #[test]
    fn ledger_is_tabloid_rotated() {
        let (tw, th) = PageFormat::Tabloid.paper_size();
        let (lw, lh) = PageFormat::Ledger.paper_size();
        assert_eq!((tw, th), (lh, lw));
    }
}
