//! # submission-gen
//!
//! Generates a roster of fake student submission PDFs plus a template PDF for
//! testing assignment-grading workflows: read a CSV roster, render one
//! single-page PDF per student, and merge everything into a combined
//! `submissions.pdf`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use submission_gen::{assemble, load_roster, render, Result, RosterFormat, TEMPLATE_FILE};
//!
//! # fn main() -> Result<()> {
//! let roster = load_roster(Path::new("roster.csv"), RosterFormat::Standard)?;
//!
//! let out = Path::new("out");
//! let template = out.join(TEMPLATE_FILE);
//! render::render_template("Problem Set 1", &template)?;
//! assemble("Problem Set 1", &roster, &template, out)?;
//! # Ok(())
//! # }
//! ```

pub mod assemble;
pub mod error;
pub mod render;
pub mod roster;

pub use assemble::{assemble, SUBMISSIONS_FILE, TEMPLATE_FILE};
pub use error::{GenerateError, Result};
pub use roster::{load_roster, RosterFormat};
