//! Places the sections on pages.
//!
//! The assembler is a two-state machine. While `Building` it renders the
//! sections in document order, breaking to a new page whenever the next
//! section would cross the usable bottom of the page; every continuation
//! page starts with the issuer block. After the last section it moves to
//! `Finalizing`, closes the current page and resolves the page-count
//! placeholders of the `FOLHA n/total` captions.

use crate::algorithms::pagination::{EPSILON, check_fit, chunk_ranges};
use crate::config::LayoutConfig;
use crate::sections::{RenderContext, SectionKind, SectionOutput, issuer, items};
use danfe_invoice::InvoiceRecord;
use danfe_types::{DrawCommand, DrawCursor, Page};
use log::{debug, warn};

/// Stands for the total page count until the document is finalized.
pub const PAGE_TOTAL_TOKEN: &str = "{{FOLHAS}}";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssemblyState {
    Building,
    Finalizing,
}

pub struct DocumentAssembler<'a> {
    ctx: RenderContext<'a>,
    state: AssemblyState,
    pages: Vec<Page>,
    current: Vec<DrawCommand>,
    cursor: DrawCursor,
    /// Where content starts on the current page, below its mandatory header.
    page_top: f32,
}

impl<'a> DocumentAssembler<'a> {
    /// `config` is expected to be validated.
    pub fn new(record: &'a InvoiceRecord, config: &'a LayoutConfig) -> Self {
        let cursor = config.origin();
        Self {
            ctx: RenderContext::new(record, config),
            state: AssemblyState::Building,
            pages: Vec::new(),
            current: Vec::new(),
            cursor,
            page_top: cursor.y,
        }
    }

    pub fn state(&self) -> AssemblyState {
        self.state
    }

    /// Lays out the whole document.
    pub fn run(mut self) -> Vec<Page> {
        for gap in self.ctx.record.data_gaps() {
            warn!("{gap}; printing a placeholder");
        }
        for kind in SectionKind::ORDER {
            match kind {
                SectionKind::LineItems => self.place_line_items(),
                _ => self.place(kind),
            }
        }
        self.finalize()
    }

    fn place(&mut self, kind: SectionKind) {
        let height = kind.fixed_height().unwrap_or_default();
        self.ensure_room(kind, height);
        let output = kind.render(&self.ctx, self.cursor);
        self.accept(kind, output);
    }

    /// Line items go in chunks of `max_rows_per_page`, one chunk per page.
    fn place_line_items(&mut self) {
        let record = self.ctx.record;
        let ranges = chunk_ranges(record.produtos.len(), self.ctx.config.max_rows_per_page);
        for (i, (start, end)) in ranges.into_iter().enumerate() {
            if i > 0 {
                self.break_page();
            }
            let slice = &record.produtos[start..end];
            self.ensure_room(SectionKind::LineItems, items::table_height(slice.len()));
            let output = items::render(&self.ctx, self.cursor, slice);
            debug!("Line items {start}..{end} on page {}", self.cursor.page_index + 1);
            self.accept(SectionKind::LineItems, output);
        }
    }

    /// Breaks the page when `height` does not fit below the cursor. A section
    /// that cannot fit even on a fresh page is placed anyway.
    fn ensure_room(&mut self, kind: SectionKind, height: f32) {
        let bottom = self.ctx.config.usable_bottom();
        if !check_fit(&self.cursor, height, bottom).should_break {
            return;
        }
        if self.cursor.y > self.page_top + EPSILON {
            self.break_page();
        }
        let analysis = check_fit(&self.cursor, height, bottom);
        if analysis.should_break {
            warn!(
                "The {kind} ({height:.1}pt) exceeds the {:.1}pt left on a fresh page; placing it anyway",
                analysis.remaining_height
            );
        }
    }

    /// Closes the current page and opens the next one with the issuer block.
    fn break_page(&mut self) {
        self.close_page();
        self.cursor = self.cursor.on_next_page(self.ctx.config.margin);
        debug!("Page break, starting page {}", self.cursor.page_index + 1);
        let header = issuer::render(&self.ctx, self.cursor);
        self.accept(SectionKind::Issuer, header);
        self.page_top = self.cursor.y;
    }

    fn accept(&mut self, kind: SectionKind, output: SectionOutput) {
        debug!(
            "Placed {kind} at y={:.1} on page {}",
            self.cursor.y,
            self.cursor.page_index + 1
        );
        self.current.extend(output.commands);
        self.cursor = output.cursor;
    }

    fn close_page(&mut self) {
        let config = self.ctx.config;
        let commands = std::mem::take(&mut self.current);
        self.pages.push(Page::new(config.page_width, config.page_height, commands));
    }

    fn finalize(mut self) -> Vec<Page> {
        self.state = AssemblyState::Finalizing;
        self.close_page();
        let total = self.pages.len().to_string();
        for page in &mut self.pages {
            for command in &mut page.commands {
                if let DrawCommand::Text { text, .. } = command {
                    if text.contains(PAGE_TOTAL_TOKEN) {
                        *text = text.replace(PAGE_TOTAL_TOKEN, &total);
                    }
                }
            }
        }
        debug!("Document finalized with {total} page(s)");
        self.pages
    }
}

/// Lays out `record` into pages of draw commands.
pub fn layout_document(record: &InvoiceRecord, config: &LayoutConfig) -> Vec<Page> {
    DocumentAssembler::new(record, config).run()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sections::test_support::record;
    use danfe_invoice::LineItem;
    use rust_decimal::Decimal;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn items(n: usize) -> Vec<LineItem> {
        (0..n)
            .map(|i| LineItem {
                codigo: Some(format!("ITEM-{i:04}")),
                quantidade: Some(Decimal::ONE),
                valor_unitario: Some(Decimal::new(i as i64 + 1, 0)),
                ..Default::default()
            })
            .collect()
    }

    fn item_codes(page: &Page) -> Vec<String> {
        page.texts()
            .filter(|t| t.starts_with("ITEM-"))
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn starts_building() {
        let config = LayoutConfig::default();
        let record = record();
        assert_eq!(DocumentAssembler::new(&record, &config).state(), AssemblyState::Building);
    }

    #[test]
    fn short_invoice_fits_one_page() {
        let config = LayoutConfig::default();
        let pages = layout_document(&record(), &config);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains_text("FOLHA 1/1"));
        assert!(!pages[0].contains_text(PAGE_TOTAL_TOKEN));
    }

    #[test]
    fn items_split_across_pages() {
        init_logger();
        let config = LayoutConfig {
            max_rows_per_page: 20,
            ..Default::default()
        };
        let mut record = record();
        record.produtos = items(45);
        let pages = layout_document(&record, &config);

        let per_page: Vec<usize> = pages.iter().map(|p| item_codes(p).len()).collect();
        assert_eq!(per_page, vec![20, 20, 5]);
        let all: Vec<String> = pages.iter().flat_map(item_codes).collect();
        let expected: Vec<String> = (0..45).map(|i| format!("ITEM-{i:04}")).collect();
        assert_eq!(all, expected);
    }

    #[test]
    fn continuation_pages_open_with_issuer_block() {
        let config = LayoutConfig {
            max_rows_per_page: 3,
            ..Default::default()
        };
        let mut record = record();
        record.produtos = items(7);
        let pages = layout_document(&record, &config);
        assert_eq!(pages.len(), 3);
        for (i, page) in pages.iter().enumerate() {
            assert!(page.contains_text(&format!("FOLHA {}/3", i + 1)));
            if i > 0 {
                let first = page.commands.first().and_then(DrawCommand::area).unwrap();
                assert_eq!((first.y, first.height), (config.margin, issuer::HEIGHT));
            }
        }
    }

    #[test]
    fn no_command_crosses_the_usable_bottom() {
        let config = LayoutConfig::default();
        let mut record = record();
        record.produtos = items(95);
        for page in layout_document(&record, &config) {
            for command in &page.commands {
                if let Some(area) = command.area() {
                    assert!(area.bottom() <= config.usable_bottom() + EPSILON, "{area:?}");
                }
            }
        }
    }

    #[test]
    fn short_page_breaks_before_sections() {
        init_logger();
        // room for the first page header but not for the whole form
        let config = LayoutConfig {
            page_height: 420.0,
            max_rows_per_page: 5,
            ..Default::default()
        };
        config.validate().unwrap();
        let pages = layout_document(&record(), &config);
        assert_eq!(pages.len(), 2);
        assert!(pages[0].contains_text("CÁLCULO DO IMPOSTO"));
        assert!(!pages[0].contains_text("TRANSPORTADOR / VOLUMES TRANSPORTADOS"));
        assert!(pages[1].contains_text("TRANSPORTADOR / VOLUMES TRANSPORTADOS"));
        assert!(pages[1].contains_text("FOLHA 2/2"));
    }

    #[test]
    fn layout_is_deterministic() {
        let config = LayoutConfig::default();
        let mut record = record();
        record.produtos = items(30);
        assert_eq!(layout_document(&record, &config), layout_document(&record, &config));
    }

    #[test]
    fn zero_items_draw_header_only_table() {
        let config = LayoutConfig::default();
        let mut record = record();
        record.produtos.clear();
        let pages = layout_document(&record, &config);
        assert_eq!(pages.len(), 1);
        assert!(pages[0].contains_text("DADOS DOS PRODUTOS / SERVIÇOS"));
    }
}
