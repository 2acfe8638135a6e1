//! PDF parsing module.

mod backend;

pub use backend::{LopdfBackend, PdfBackend};
