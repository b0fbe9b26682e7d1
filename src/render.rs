//! Fixed-layout page rendering.
//!
//! Every page is US Letter with an assignment title line and a student
//! identification line. The template carries a long blank underline where a
//! student would write their name; a student page carries the name itself,
//! underlined to the exact rendered text width.

use std::path::Path;

use oxidize_pdf::{measure_text, Document, Font, Page};
use tracing::debug;

use crate::error::Result;

const FONT_SIZE: f64 = 12.0;
const TITLE_POS: (f64, f64) = (100.0, 700.0);
const LABEL_POS: (f64, f64) = (100.0, 650.0);
const NAME_X: f64 = 150.0;
const UNDERLINE_Y: f64 = 645.0;
const TEMPLATE_UNDERLINE_END: f64 = 400.0;

/// Writes the one-page template PDF to `path`.
pub fn render_template(assignment: &str, path: &Path) -> Result<()> {
    let mut page = base_page(assignment)?;
    page.graphics()
        .move_to(NAME_X, UNDERLINE_Y)
        .line_to(TEMPLATE_UNDERLINE_END, UNDERLINE_Y)
        .stroke();
    save_page(page, path)?;
    debug!(path = %path.display(), "rendered template page");
    Ok(())
}

/// Writes a one-page student PDF to `path`, with `name` underlined to its
/// measured width.
pub fn render_student(assignment: &str, name: &str, path: &Path) -> Result<()> {
    let mut page = base_page(assignment)?;
    page.text()
        .set_font(Font::Helvetica, FONT_SIZE)
        .at(NAME_X, LABEL_POS.1)
        .write(name)?;

    let width = measure_text(name, Font::Helvetica, FONT_SIZE);
    page.graphics()
        .move_to(NAME_X, UNDERLINE_Y)
        .line_to(NAME_X + width, UNDERLINE_Y)
        .stroke();
    save_page(page, path)?;
    debug!(student = %name, path = %path.display(), "rendered student page");
    Ok(())
}

fn base_page(assignment: &str) -> Result<Page> {
    let mut page = Page::letter();
    page.text()
        .set_font(Font::Helvetica, FONT_SIZE)
        .at(TITLE_POS.0, TITLE_POS.1)
        .write(&format!("Assignment: {assignment}"))?
        .at(LABEL_POS.0, LABEL_POS.1)
        .write("Student:")?;
    Ok(page)
}

fn save_page(page: Page, path: &Path) -> Result<()> {
    let mut doc = Document::new();
    doc.add_page(page);
    doc.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use oxidize_pdf::parser::PdfReader;

    #[test]
    fn template_is_a_single_page_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("template.pdf");
        render_template("Problem Set 1", &path).unwrap();

        let mut reader = PdfReader::open(&path).unwrap();
        assert_eq!(reader.page_count().unwrap(), 1);
    }

    #[test]
    fn student_page_is_a_single_page_pdf() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("student.pdf");
        render_student("Problem Set 1", "Ada Lovelace", &path).unwrap();

        let mut reader = PdfReader::open(&path).unwrap();
        assert_eq!(reader.page_count().unwrap(), 1);
    }

    #[test]
    fn underline_width_tracks_the_name() {
        let short = measure_text("Ada", Font::Helvetica, FONT_SIZE);
        let long = measure_text("Ada Lovelace", Font::Helvetica, FONT_SIZE);
        assert!(short > 0.0);
        assert!(long > short);
    }
}
