//! Paginated reads following continuation keys until the store runs out of pages.

use crate::{
    common::{self, summary::Summary},
    error::{Error, Result},
    read::common::{ReadInput, ReadKind, ReadOptions, ReadPage},
    store::DocumentStore,
};

/// Fetch every page of a query or scan and return all their items.
///
/// Pages are fetched one at a time. Each call gets a fresh copy of `input`
/// whose `exclusive_start_key` is the key returned by the previous page (the
/// first call uses the key of `input` itself). The read stops as soon as a page
/// carries no `last_evaluated_key`.
///
/// After every page `progress` is called with the raw page and the running
/// summary. A failing callback aborts the read.
///
/// Items are returned in page order, without reordering or deduplication.
pub async fn run<S, F>(
    store: &S,
    kind: ReadKind,
    input: &ReadInput,
    options: &ReadOptions,
    mut progress: F,
) -> Result<Vec<common::Item>, S::Error>
where
    S: DocumentStore + ?Sized,
    F: FnMut(&ReadPage, &Summary) -> std::result::Result<(), common::BoxError>,
{
    let mut summary = Summary::new(input.table_name.clone(), 0);
    let mut items = Vec::new();
    let mut exclusive_start_key = input.exclusive_start_key.clone();
    loop {
        if let Some(max_pages) = options.max_pages {
            if summary.api_call_count >= max_pages {
                return Err(Error::PageLimitExceeded {
                    table_name: summary.table_name,
                    max_pages,
                });
            }
        }
        let page_input = ReadInput {
            exclusive_start_key,
            ..input.clone()
        };
        let page = match kind {
            ReadKind::Query => store.query(page_input).await,
            ReadKind::Scan => store.scan(page_input).await,
        }
        .map_err(Error::Store)?;
        summary.record_call(
            common::capacity_units(page.consumed_capacity.as_ref()),
            page.items.len(),
        );
        #[cfg(feature = "tracing")]
        tracing::debug!(
            table_name = %summary.table_name,
            %kind,
            api_call_count = summary.api_call_count,
            page_item_count = page.items.len(),
            has_more = page.last_evaluated_key.is_some(),
            "read page"
        );
        progress(&page, &summary).map_err(Error::Progress)?;
        let ReadPage {
            items: page_items,
            last_evaluated_key,
            ..
        } = page;
        items.extend(page_items);
        match last_evaluated_key.filter(|key| !key.is_empty()) {
            Some(key) => exclusive_start_key = Some(key),
            None => return Ok(items),
        }
    }
}
