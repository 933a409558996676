//! High-level table extraction API.
//!
//! Provides the main public entry points over whole documents:
//! - `extract_table()` - Records from a sequence of pages, one page at a time
//! - `extract_table_par()` - Same, with pages fanned out over a thread pool
//!
//! Pages are independent. A page that fails is reported with its page id and
//! the remaining pages are still processed.

use std::borrow::Borrow;

use rayon::ThreadPoolBuilder;
use rayon::prelude::*;

use crate::error::{LayoutError, Result};
use crate::layout::elements::LTPage;
use crate::layout::params::TableParams;
use crate::layout::table::{PageFailure, PageTable, TableExtraction, extract_page_table};

pub(crate) fn default_thread_count() -> usize {
    std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1)
}

/// Extracts one table spanning `pages`, in page order.
///
/// `pages` is consumed once; pass a collection to extract again. Only an
/// invalid `params` fails the whole call.
pub fn extract_table<I, P>(pages: I, params: &TableParams) -> Result<TableExtraction>
where
    I: IntoIterator<Item = P>,
    P: Borrow<LTPage>,
{
    params.validate()?;
    let results = pages.into_iter().map(|page| {
        let page = page.borrow();
        (page.pageid, extract_page_table(page, params))
    });
    Ok(assemble(results))
}

/// Like [`extract_table`], but pages are processed in parallel on `jobs`
/// threads (all cores when None). Output order matches input order.
pub fn extract_table_par<P>(
    pages: &[P],
    params: &TableParams,
    jobs: Option<usize>,
) -> Result<TableExtraction>
where
    P: Borrow<LTPage> + Sync,
{
    params.validate()?;
    let thread_count = jobs.unwrap_or_else(default_thread_count).max(1);
    let pool = ThreadPoolBuilder::new()
        .num_threads(thread_count)
        .build()
        .map_err(|e| LayoutError::ThreadPool(e.to_string()))?;

    let mut results: Vec<(usize, i32, Result<Option<PageTable>>)> = pool.install(|| {
        pages
            .par_iter()
            .enumerate()
            .map(|(idx, page)| {
                let page = page.borrow();
                (idx, page.pageid, extract_page_table(page, params))
            })
            .collect()
    });

    results.sort_by_key(|(idx, _, _)| *idx);
    Ok(assemble(
        results
            .into_iter()
            .map(|(_, pageid, result)| (pageid, result)),
    ))
}

/// Concatenates page tables. Every page must share the field names of the
/// first page that has a table.
fn assemble<I>(results: I) -> TableExtraction
where
    I: IntoIterator<Item = (i32, Result<Option<PageTable>>)>,
{
    let mut out = TableExtraction::default();
    for (pageid, result) in results {
        match result {
            Ok(None) => {
                tracing::debug!(page = pageid, "no table on page");
            }
            Ok(Some(found)) => {
                if out.pages.is_empty() {
                    out.fields = found.table.fields;
                } else if found.table.fields != out.fields {
                    let error = LayoutError::FieldMismatch {
                        page: pageid,
                        expected: out.fields.clone(),
                        got: found.table.fields,
                    };
                    tracing::warn!(page = pageid, %error, "page skipped");
                    out.failures.push(PageFailure { pageid, error });
                    continue;
                }
                tracing::debug!(page = pageid, records = found.records.len(), "page table");
                out.pages.push(pageid);
                out.records.extend(found.records);
            }
            Err(error) => {
                let error = error.on_page(pageid);
                tracing::warn!(page = pageid, %error, "page failed");
                out.failures.push(PageFailure { pageid, error });
            }
        }
    }
    out
}
