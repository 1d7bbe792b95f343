use crate::LayoutError;
use crate::sections::{SECTION_MARGIN, issuer, items};
use danfe_symbols::ErrorCorrection;
use danfe_types::DrawCursor;
use serde::{Deserialize, Serialize};

pub const DEFAULT_VERIFICATION_URL: &str =
    "https://www.nfe.fazenda.gov.br/portal/consultaRecaptcha.aspx";

/// Physical page and pagination settings of a DANFE.
///
/// Every field has a default, so a partial JSON object is a valid
/// configuration. Call [`LayoutConfig::validate`] before laying out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Page width in points. Defaults to A4 (`595`).
    pub page_width: f32,
    /// Page height in points. Defaults to A4 (`842`).
    pub page_height: f32,
    /// Blank border on every side of the page.
    pub margin: f32,
    /// Line items drawn per page before the table continues on the next one.
    ///
    /// Must be at least 1, and the table must fit below the issuer block of a
    /// continuation page.
    pub max_rows_per_page: usize,
    /// Base of the verification link encoded in the QR code.
    pub verification_base_url: String,
    pub qr_error_correction: ErrorCorrection,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: 595.0,
            page_height: 842.0,
            margin: 10.0,
            max_rows_per_page: 20,
            verification_base_url: DEFAULT_VERIFICATION_URL.to_string(),
            qr_error_correction: ErrorCorrection::M,
        }
    }
}

impl LayoutConfig {
    pub fn content_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// The lowest y a section may reach.
    pub fn usable_bottom(&self) -> f32 {
        self.page_height - self.margin
    }

    /// Cursor at the top-left corner of the content area of the first page.
    pub fn origin(&self) -> DrawCursor {
        DrawCursor::new(self.margin, self.margin, self.content_width())
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        let invalid = |msg: String| Err(LayoutError::InvalidConfig(msg));

        if !(self.page_width.is_finite() && self.page_width > 0.0)
            || !(self.page_height.is_finite() && self.page_height > 0.0)
        {
            return invalid(format!(
                "page size must be positive, got {}x{}",
                self.page_width, self.page_height
            ));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return invalid(format!("margin must be non-negative, got {}", self.margin));
        }
        if self.content_width() < items::MIN_TABLE_WIDTH {
            return invalid(format!(
                "content width {:.1} is narrower than the {:.1} points the item table needs",
                self.content_width(),
                items::MIN_TABLE_WIDTH
            ));
        }
        if self.max_rows_per_page == 0 {
            return invalid("maxRowsPerPage must be at least 1".to_string());
        }
        let continuation = self.margin
            + issuer::HEIGHT
            + SECTION_MARGIN
            + items::table_height(self.max_rows_per_page);
        if continuation > self.usable_bottom() {
            return invalid(format!(
                "{} rows per page need {continuation:.1} points but the page ends at {:.1}",
                self.max_rows_per_page,
                self.usable_bottom()
            ));
        }
        if self.verification_base_url.trim().is_empty() {
            return invalid("verificationBaseUrl must not be empty".to_string());
        }
        Ok(())
    }
}
