//! Passage assembly: the conversion entry point.

use super::diagnostics::{ConversionStats, Diagnostic};
use super::options::ConvertOptions;
use super::page::{build_page, PageBuild};
use crate::error::{Error, Result};
use crate::model::Passage;
use crate::ofd::Ofd;
use rayon::prelude::*;

/// A converted passage with everything that was skipped on the way.
#[derive(Debug, Clone)]
pub struct Conversion {
    /// The editable passage
    pub passage: Passage,

    /// Layers and objects that could not be converted, in document order
    pub diagnostics: Vec<Diagnostic>,

    /// Conversion counters
    pub stats: ConversionStats,
}

impl Conversion {
    /// Check whether every layer and object converted.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }
}

/// Convert the first document of `ofd` into a passage.
pub fn build_passage(ofd: &Ofd, options: &ConvertOptions) -> Result<Conversion> {
    let body = ofd.first_body().ok_or(Error::MissingDocBody)?;
    let document = body.document.as_ref().ok_or(Error::MissingDocument)?;

    if ofd.doc_bodies.len() > 1 {
        log::debug!(
            "{} document bodies present, converting the first",
            ofd.doc_bodies.len()
        );
    }

    let mut passage = Passage::new(&ofd.version, &ofd.doc_type, body.doc_info.clone());
    let common_area = document.default_area();

    let builds: Vec<Result<PageBuild>> = if options.parallel {
        document
            .pages
            .par_iter()
            .enumerate()
            .map(|(index, page)| build_page(page, index, options, common_area))
            .collect()
    } else {
        document
            .pages
            .iter()
            .enumerate()
            .map(|(index, page)| build_page(page, index, options, common_area))
            .collect()
    };

    let mut diagnostics = Vec::new();
    let mut stats = ConversionStats::new();
    for build in builds {
        let PageBuild {
            mut page,
            diagnostics: page_diagnostics,
            stats: page_stats,
        } = build?;

        page.show();
        passage.add_page(page);
        diagnostics.extend(page_diagnostics);
        stats.merge(&page_stats);
    }

    log::debug!(
        "converted {} pages, {} blocks, {} diagnostics",
        passage.page_count(),
        passage.block_count(),
        diagnostics.len()
    );

    Ok(Conversion {
        passage,
        diagnostics,
        stats,
    })
}
