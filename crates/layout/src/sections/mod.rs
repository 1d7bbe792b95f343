//! One renderer per box of the DANFE.
//!
//! Every renderer is a pure function of the render context and an entry
//! cursor. It draws its bounding rectangle first, then its content, and
//! returns the cursor `height + SECTION_MARGIN` below the entry. Heights are
//! fixed; only the line-item table grows with its rows.

use crate::config::LayoutConfig;
use danfe_invoice::InvoiceRecord;
use danfe_types::{DrawCommand, DrawCursor};
use std::fmt;

pub mod additional;
pub mod duplicates;
pub(crate) mod frame;
pub mod issuer;
pub mod items;
pub mod nature;
pub mod receipt;
pub mod recipient;
pub mod registrations;
pub mod taxes;
pub mod transporter;

/// Vertical gap left below every section.
pub const SECTION_MARGIN: f32 = 5.0;

/// Inputs shared by every renderer of one document.
#[derive(Debug, Clone, Copy)]
pub struct RenderContext<'a> {
    pub record: &'a InvoiceRecord,
    pub config: &'a LayoutConfig,
}

impl<'a> RenderContext<'a> {
    pub fn new(record: &'a InvoiceRecord, config: &'a LayoutConfig) -> Self {
        Self { record, config }
    }
}

/// Commands drawn by a renderer and the cursor for the next section.
#[derive(Debug, Clone, PartialEq)]
pub struct SectionOutput {
    pub commands: Vec<DrawCommand>,
    pub cursor: DrawCursor,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Receipt,
    Issuer,
    NatureProtocol,
    Registrations,
    Recipient,
    Duplicates,
    Taxes,
    Transporter,
    LineItems,
    AdditionalInfo,
}

impl SectionKind {
    /// Document order.
    pub const ORDER: [SectionKind; 10] = [
        SectionKind::Receipt,
        SectionKind::Issuer,
        SectionKind::NatureProtocol,
        SectionKind::Registrations,
        SectionKind::Recipient,
        SectionKind::Duplicates,
        SectionKind::Taxes,
        SectionKind::Transporter,
        SectionKind::LineItems,
        SectionKind::AdditionalInfo,
    ];

    /// The box height, `None` for the line-item table.
    pub fn fixed_height(self) -> Option<f32> {
        match self {
            SectionKind::Receipt => Some(receipt::HEIGHT),
            SectionKind::Issuer => Some(issuer::HEIGHT),
            SectionKind::NatureProtocol => Some(nature::HEIGHT),
            SectionKind::Registrations => Some(registrations::HEIGHT),
            SectionKind::Recipient => Some(recipient::HEIGHT),
            SectionKind::Duplicates => Some(duplicates::HEIGHT),
            SectionKind::Taxes => Some(taxes::HEIGHT),
            SectionKind::Transporter => Some(transporter::HEIGHT),
            SectionKind::LineItems => None,
            SectionKind::AdditionalInfo => Some(additional::HEIGHT),
        }
    }

    /// Renders this section at `cursor`. The line-item table draws every
    /// item of the record; the assembler slices them per page instead.
    pub fn render(self, ctx: &RenderContext<'_>, cursor: DrawCursor) -> SectionOutput {
        match self {
            SectionKind::Receipt => receipt::render(ctx, cursor),
            SectionKind::Issuer => issuer::render(ctx, cursor),
            SectionKind::NatureProtocol => nature::render(ctx, cursor),
            SectionKind::Registrations => registrations::render(ctx, cursor),
            SectionKind::Recipient => recipient::render(ctx, cursor),
            SectionKind::Duplicates => duplicates::render(ctx, cursor),
            SectionKind::Taxes => taxes::render(ctx, cursor),
            SectionKind::Transporter => transporter::render(ctx, cursor),
            SectionKind::LineItems => items::render(ctx, cursor, &ctx.record.produtos),
            SectionKind::AdditionalInfo => additional::render(ctx, cursor),
        }
    }
}

impl fmt::Display for SectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SectionKind::Receipt => "receipt header",
            SectionKind::Issuer => "issuer block",
            SectionKind::NatureProtocol => "operation nature",
            SectionKind::Registrations => "issuer registrations",
            SectionKind::Recipient => "recipient",
            SectionKind::Duplicates => "duplicates",
            SectionKind::Taxes => "tax calculation",
            SectionKind::Transporter => "transporter",
            SectionKind::LineItems => "line items",
            SectionKind::AdditionalInfo => "additional information",
        };
        f.write_str(name)
    }
}


#[cfg(test)]
mod tests {
    use super::test_support::*;
    use super::*;
    use danfe_types::Rect;

    #[test]
    fn every_fixed_section_obeys_the_contract() {
        let config = LayoutConfig::default();
        let record = record();
        let ctx = RenderContext::new(&record, &config);
        for kind in SectionKind::ORDER {
            let Some(height) = kind.fixed_height() else {
                continue;
            };
            let output = kind.render(&ctx, cursor());
            check_contract(&output, cursor(), height);
        }
    }

    #[test]
    fn sections_stay_inside_their_box() {
        let config = LayoutConfig::default();
        let record = record();
        let ctx = RenderContext::new(&record, &config);
        for kind in SectionKind::ORDER {
            let output = kind.render(&ctx, cursor());
            let Some(bounds) = output.commands[0].area() else {
                panic!("{kind} has no bounds");
            };
            for command in &output.commands {
                if let Some(area) = command.area() {
                    assert!(bounds.contains(&area), "{kind}: {area:?} outside {bounds:?}");
                }
                if let DrawCommand::Text { x, y, .. } = command {
                    let origin = Rect::new(*x, *y, 0.0, 0.0);
                    assert!(bounds.contains(&origin), "{kind}: text at ({x}, {y})");
                }
            }
        }
    }

    #[test]
    fn empty_record_renders_every_section() {
        let config = LayoutConfig::default();
        let record = InvoiceRecord::default();
        let ctx = RenderContext::new(&record, &config);
        for kind in SectionKind::ORDER {
            let output = kind.render(&ctx, cursor());
            assert!(!output.commands.is_empty(), "{kind}");
        }
    }
}
