//! Common test utilities shared across integration tests.

#![allow(dead_code)]

use page_diff::{Image, PageContent, Rect, Table, TextBlock};

pub fn rect(x0: f64, y0: f64, x1: f64, y1: f64) -> Rect {
    Rect::new(x0, y0, x1, y1)
}

pub fn block(text: &str, bbox: Rect) -> TextBlock {
    TextBlock {
        text: text.to_string(),
        bbox,
        lines: text.lines().map(|l| l.to_string()).collect(),
    }
}

/// Stack blocks vertically at a fixed left margin, 20 points apart.
pub fn blocks(texts: &[&str]) -> Vec<TextBlock> {
    texts
        .iter()
        .enumerate()
        .map(|(i, text)| {
            let top = 10.0 + i as f64 * 20.0;
            block(text, rect(10.0, top, 200.0, top + 15.0))
        })
        .collect()
}

pub fn table(bbox: Rect, cells: &[&[&str]]) -> Table {
    let cells = cells
        .iter()
        .map(|row| row.iter().map(|c| c.to_string()).collect())
        .collect();
    Table::from_cells(bbox, cells)
}

pub fn image(hash: &str, bbox: Rect) -> Image {
    Image {
        bbox,
        hash: hash.to_string(),
        width: 120,
        height: 80,
        format: "png".to_string(),
    }
}

pub fn text_page(texts: &[&str]) -> PageContent {
    PageContent {
        text_blocks: blocks(texts),
        ..PageContent::default()
    }
}
