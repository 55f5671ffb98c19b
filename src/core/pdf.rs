// src/core/pdf.rs
//! Positioned text from a PDF page, cut to a rectangle and grouped into rows.
//!
//! `pdf_oxide` does the text work: font resources, `/Encoding` and
//! `/ToUnicode` maps, and span boxes in user space. Page geometry comes from
//! `lopdf`, following `/Parent` for an inherited `MediaBox`, so spans can be
//! flipped to top-left coordinates and compared with a table area.

use lopdf::{Document, Object, ObjectId};
use pdf_oxide::PdfDocument;

use crate::core::sanitize::normalize_ws;
use crate::error::{Error, Result};

/// Runs whose vertical centres are this close (in points) share a row.
pub const ROW_TOLERANCE: f32 = 3.0;

/// Used when no `MediaBox` is found on the page or its ancestors (A4).
const DEFAULT_PAGE_HEIGHT: f32 = 842.0;

/// Page tree depth beyond which `/Parent` links are not followed.
const MAX_TREE_DEPTH: usize = 32;

/// One text span, in points from the page's top-left corner.
#[derive(Clone, Debug, PartialEq)]
pub struct TextRun {
    pub x: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
    pub text: String,
}

impl TextRun {
    fn centre(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// (top, left, bottom, right), points from the top-left corner.
pub type Area = (f32, f32, f32, f32);

fn pdf_err(e: impl std::fmt::Display) -> Error {
    Error::Pdf(e.to_string())
}

/// Load `pdf`, read page `page` (1-based), keep spans centred inside
/// `area`, and return them as rows of cells, top to bottom, left to right.
pub fn extract_table(pdf: &[u8], page: u32, area: Area) -> Result<Vec<Vec<String>>> {
    let height = {
        let doc = Document::load_mem(pdf).map_err(pdf_err)?;
        let page_id = *doc
            .get_pages()
            .get(&page)
            .ok_or_else(|| Error::Pdf(format!("page {page} not found")))?;
        page_height(&doc, page_id)
    };

    let runs = page_runs(pdf, page, height)?;
    tracing::debug!(page, height, runs = runs.len(), "page text collected");

    let inside = runs_in_area(runs, area);
    Ok(group_rows(inside, ROW_TOLERANCE))
}

fn page_runs(pdf: &[u8], page: u32, height: f32) -> Result<Vec<TextRun>> {
    let mut doc = PdfDocument::from_bytes(pdf.to_vec()).map_err(pdf_err)?;
    let index = page.checked_sub(1).ok_or_else(|| Error::Pdf(s!("page numbers start at 1")))?;
    let spans = doc.extract_spans(index as usize).map_err(pdf_err)?;

    Ok(spans
        .into_iter()
        .filter_map(|span| {
            let text = normalize_ws(&span.text);
            if text.is_empty() {
                return None;
            }
            let b = span.bbox;
            Some(TextRun {
                x: b.x,
                top: height - (b.y + b.height),
                width: b.width,
                height: b.height,
                text,
            })
        })
        .collect())
}

/// Runs whose centre lies inside `area`, edges included.
pub fn runs_in_area(runs: Vec<TextRun>, (top, left, bottom, right): Area) -> Vec<TextRun> {
    runs.into_iter()
        .filter(|r| {
            let (cx, cy) = r.centre();
            cy >= top && cy <= bottom && cx >= left && cx <= right
        })
        .collect()
}

/// Cluster runs into rows by vertical centre, then order each row by x.
pub fn group_rows(mut runs: Vec<TextRun>, tolerance: f32) -> Vec<Vec<String>> {
    runs.sort_by(|a, b| a.centre().1.total_cmp(&b.centre().1).then(a.x.total_cmp(&b.x)));

    let mut rows: Vec<(f32, Vec<TextRun>)> = Vec::new();
    for run in runs {
        let mid = run.centre().1;
        match rows.last_mut() {
            Some((anchor, row)) if (mid - *anchor).abs() <= tolerance => row.push(run),
            _ => rows.push((mid, vec![run])),
        }
    }

    rows.into_iter()
        .map(|(_, mut row)| {
            row.sort_by(|a, b| a.x.total_cmp(&b.x));
            row.into_iter().map(|r| r.text).collect()
        })
        .collect()
}

/// Height of the page's `MediaBox`, inherited through `/Parent` when the
/// page itself has none.
fn page_height(doc: &Document, page_id: ObjectId) -> f32 {
    let mut node = Some(page_id);
    for _ in 0..MAX_TREE_DEPTH {
        let Some(id) = node else { break };
        let Ok(dict) = doc.get_dictionary(id) else { break };

        if let Some(h) = dict.get(b"MediaBox").ok().and_then(|o| box_height(doc, o)) {
            return h;
        }
        node = dict.get(b"Parent").and_then(Object::as_reference).ok();
    }
    tracing::warn!(?page_id, "no MediaBox; assuming A4");
    DEFAULT_PAGE_HEIGHT
}

fn box_height(doc: &Document, obj: &Object) -> Option<f32> {
    let obj = match obj {
        Object::Reference(id) => doc.get_object(*id).ok()?,
        other => other,
    };
    match obj.as_array().ok()?.as_slice() {
        [_, y0, _, y1] => Some((number(y1)? - number(y0)?).abs()),
        _ => None,
    }
}

fn number(o: &Object) -> Option<f32> {
    match o {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r as f32),
        _ => None,
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    fn run(x: f32, top: f32, text: &str) -> TextRun {
        TextRun { x, top, width: 0.0, height: 0.0, text: s!(text) }
    }

    fn first_page_height(pdf: &[u8]) -> f32 {
        let doc = Document::load_mem(pdf).unwrap();
        let id = doc.get_pages()[&1];
        page_height(&doc, id)
    }

    #[test]
    fn area_filter_is_inclusive_and_drops_outside() {
        let runs = vec![
            run(50.0, 342.0, "edge"),
            run(40.0, 400.0, "left of area"),
            run(100.0, 800.0, "below"),
            run(300.0, 500.0, "inside"),
        ];
        let kept = runs_in_area(runs, (342.0, 46.0, 760.0, 567.0));
        let texts: Vec<_> = kept.iter().map(|r| r.text.as_str()).collect();
        assert_eq!(texts, vec!["edge", "inside"]);
    }

    #[test]
    fn area_filter_uses_the_run_centre() {
        let wide = TextRun { x: 30.0, top: 400.0, width: 40.0, height: 10.0, text: s!("straddles") };
        assert_eq!(runs_in_area(vec![wide], (342.0, 46.0, 760.0, 567.0)).len(), 1);
    }

    #[test]
    fn rows_group_by_centre_and_sort_by_x() {
        let runs = vec![
            run(200.0, 401.5, "57"),
            run(60.0, 400.0, "1"),
            run(100.0, 400.0, "Anantapur"),
            run(60.0, 420.0, "2"),
            run(100.0, 420.2, "Chittoor"),
            run(200.0, 419.0, "3"),
        ];
        let rows = group_rows(runs, ROW_TOLERANCE);
        assert_eq!(rows, vec![
            vec!["1", "Anantapur", "57"],
            vec!["2", "Chittoor", "3"],
        ]);
    }

    #[test]
    fn media_box_is_inherited_from_the_page_tree() {
        let inherited = fixture::one_page(&[(60.0, 400.0, "x")], None);
        assert_eq!(first_page_height(&inherited), 842.0);

        let own = fixture::one_page(&[(60.0, 400.0, "x")], Some((612, 792)));
        assert_eq!(first_page_height(&own), 792.0);
    }

    #[test]
    fn extracts_only_the_text_inside_the_area() {
        let pdf = fixture::one_page(
            &[
                (60.0, 100.0, "Media Bulletin 999"),
                (60.0, 400.0, "1"),
                (100.0, 400.0, "Anantapur"),
                (300.0, 400.0, "57"),
                (60.0, 420.0, "2"),
                (100.0, 420.0, "Chittoor"),
                (300.0, 420.0, "3"),
                (10.0, 600.0, "8"),
                (60.0, 800.0, "Total 60"),
            ],
            None,
        );
        let rows = extract_table(&pdf, 1, (342.0, 46.0, 760.0, 567.0)).unwrap();
        let lines: Vec<String> = rows.iter().map(|r| r.join(" ")).collect();
        assert_eq!(lines, vec!["1 Anantapur 57", "2 Chittoor 3"]);
    }

    #[test]
    fn missing_page_is_a_pdf_error() {
        let pdf = fixture::one_page(&[(60.0, 400.0, "x")], None);
        assert!(matches!(extract_table(&pdf, 2, (0.0, 0.0, 842.0, 595.0)), Err(Error::Pdf(_))));
    }
}
