//! Combined-document assembly.
//!
//! Renders one page per student into a scratch directory, then merges the
//! template page and every student page, in roster order, into a single
//! `submissions.pdf`. The scratch directory lives inside the output directory
//! and is removed when its guard drops, so a failed render or merge cannot
//! leave per-student files behind.

use std::path::{Path, PathBuf};

use oxidize_pdf::operations::{merge_pdfs, MergeInput, MergeOptions};
use tracing::info;

use crate::error::Result;
use crate::render;

/// File name of the template PDF inside the output directory.
pub const TEMPLATE_FILE: &str = "template.pdf";

/// File name of the combined PDF inside the output directory.
pub const SUBMISSIONS_FILE: &str = "submissions.pdf";

/// Builds `submissions.pdf` in `output_dir` from the template at `template`
/// plus one rendered page per roster entry, overwriting any previous file.
///
/// The output page order is the template first, then the roster order. Page
/// count is therefore `roster.len() + 1`.
pub fn assemble(
    assignment: &str,
    roster: &[String],
    template: &Path,
    output_dir: &Path,
) -> Result<PathBuf> {
    let scratch = tempfile::Builder::new()
        .prefix("submission-pages-")
        .tempdir_in(output_dir)?;

    let mut inputs = vec![MergeInput::new(template)];
    for (idx, name) in roster.iter().enumerate() {
        let page_path = scratch
            .path()
            .join(format!("{}_{idx}_submission.pdf", sanitize(name)));
        render::render_student(assignment, name, &page_path)?;
        inputs.push(MergeInput::new(page_path));
    }

    let output = output_dir.join(SUBMISSIONS_FILE);
    merge_pdfs(inputs, &output, MergeOptions::default())?;
    info!(pages = roster.len() + 1, path = %output.display(), "wrote combined document");

    // scratch drops here, deleting every per-student page
    Ok(output)
}

fn sanitize(name: &str) -> String {
    name.replace([' ', '/'], "_")
}
