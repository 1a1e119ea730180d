use std::{collections::HashSet, time::Duration};

use indicatif::{ProgressBar, ProgressStyle};
use tabled::Table;

use crate::{
    error, info,
    interpret::{self, LookupOutcome},
    itunes,
    management::ResponseCacheManager,
    query::{self, LookupKinds, LookupQuery},
    storefronts::{self, Storefront},
    types::{AlbumTableRow, AlbumView},
    utils, warning,
};

/// Result of one (storefront, identifier kind) panel.
///
/// The outer `Result` is the transport domain: `Err` means the fetch itself
/// failed (network error, non-JSON body). Payload-level errors and empty
/// results live inside [`LookupOutcome`] and are not errors here.
struct PanelResult {
    storefront: &'static Storefront,
    query: LookupQuery,
    from_cache: bool,
    outcome: Result<LookupOutcome, String>,
}

pub async fn lookup(
    raw_query: String,
    storefront_codes: Vec<String>,
    kinds: LookupKinds,
    force: bool,
    open: bool,
) {
    let selected = resolve_storefronts(storefront_codes);

    let queries = match query::resolve(&raw_query, &kinds) {
        Some(queries) => queries,
        None => {
            warning!("Nothing to look up: the query is empty.");
            return;
        }
    };

    // One panel per storefront × kind, in stable render order.
    let panels: Vec<(&'static Storefront, LookupQuery)> = selected
        .iter()
        .flat_map(|storefront| queries.iter().map(|q| (*storefront, q.clone())))
        .collect();

    let pb = ProgressBar::new_spinner();
    pb.set_message(format!("Looking up {} panels...", panels.len()));
    pb.enable_steady_tick(Duration::from_millis(100));
    pb.set_style(
        ProgressStyle::with_template("{spinner:.blue} {msg}")
            .unwrap()
            .tick_chars("⠋⠙⠹⠸⠼⠴⠦⠧⠇⠏"),
    );

    let mut handles = Vec::new();
    for (storefront, panel_query) in panels {
        handles.push(tokio::spawn(run_panel(storefront, panel_query, force)));
    }

    let mut results: Vec<PanelResult> = Vec::new();
    for handle in handles {
        match handle.await {
            Ok(result) => results.push(result),
            Err(e) => warning!("Lookup task failed: {}", e),
        }
    }

    pb.finish_and_clear();

    for result in &results {
        render_panel(result);
    }

    if open {
        open_first_album(&results);
    }
}

/// Runs one independent lookup panel.
///
/// Serves repeated identical request strings from the cache unless `force`
/// is set; fresh responses overwrite the cache entry (last write wins).
async fn run_panel(
    storefront: &'static Storefront,
    panel_query: LookupQuery,
    force: bool,
) -> PanelResult {
    let url = query::request_url(storefront.code, &panel_query);

    if !force {
        if let Ok(manager) = ResponseCacheManager::new(url.clone(), None)
            .load_from_cache()
            .await
        {
            if let Some(response) = manager.get_response() {
                return PanelResult {
                    storefront,
                    query: panel_query,
                    from_cache: true,
                    outcome: Ok(interpret::interpret(&response)),
                };
            }
        }
    }

    match itunes::lookup::lookup(&url).await {
        Ok(response) => {
            if let Err(e) = ResponseCacheManager::new(url, Some(response.clone()))
                .save_to_cache()
                .await
            {
                warning!("Cannot cache response. Err: {:?}", e);
            }

            PanelResult {
                storefront,
                query: panel_query,
                from_cache: false,
                outcome: Ok(interpret::interpret(&response)),
            }
        }
        Err(e) => PanelResult {
            storefront,
            query: panel_query,
            from_cache: false,
            outcome: Err(e.to_string()),
        },
    }
}

fn render_panel(result: &PanelResult) {
    println!();
    println!(
        "{flag} {name} [{kind}={value}]{cached}",
        flag = result.storefront.flag,
        name = result.storefront.name,
        kind = result.query.kind,
        value = result.query.value,
        cached = if result.from_cache { " (cached)" } else { "" }
    );

    match &result.outcome {
        Err(e) => warning!("Failed to load: {}", e),
        Ok(LookupOutcome::Failed(message)) => warning!("{}", message),
        Ok(LookupOutcome::NotFound) => info!("Not found"),
        Ok(LookupOutcome::Populated { result_count, views }) => {
            info!(
                "{count} results ({albums} albums)",
                count = result_count,
                albums = views.len()
            );

            if !views.is_empty() {
                let rows: Vec<AlbumTableRow> = views.iter().map(album_table_row).collect();
                let table = Table::new(rows);
                println!("{}", table);
            }
        }
    }
}

fn album_table_row(view: &AlbumView) -> AlbumTableRow {
    let album = &view.album;
    AlbumTableRow {
        album: utils::album_title(album),
        artist: album.artist_name.clone().unwrap_or_default(),
        released: utils::format_release_date(album.release_date.as_deref()),
        genre: album.primary_genre_name.clone().unwrap_or_default(),
        tracks: album
            .track_count
            .map(|c| c.to_string())
            .unwrap_or_default(),
        streaming: utils::streaming_label(view.is_streamable),
        price: utils::format_price(album.collection_price, album.currency.as_deref()),
    }
}

/// Maps requested codes to storefront table entries, defaulting to the
/// US/JP/FR trio. Unknown codes are fatal since no panel could render.
fn resolve_storefronts(codes: Vec<String>) -> Vec<&'static Storefront> {
    let codes: Vec<String> = if codes.is_empty() {
        storefronts::DEFAULT_STOREFRONTS
            .iter()
            .map(|c| c.to_string())
            .collect()
    } else {
        codes
    };

    let mut seen: HashSet<String> = HashSet::new();
    let mut selected = Vec::new();
    for code in codes {
        match storefronts::find(&code) {
            Some(storefront) => {
                if seen.insert(storefront.code.to_string()) {
                    selected.push(storefront);
                }
            }
            None => {
                error!(
                    "Unknown storefront code '{}'. Run ituncli storefronts to list known codes.",
                    code
                );
            }
        }
    }

    selected
}

fn open_first_album(results: &[PanelResult]) {
    let first_url = results.iter().find_map(|r| match &r.outcome {
        Ok(LookupOutcome::Populated { views, .. }) => views
            .iter()
            .find_map(|v| v.album.collection_view_url.clone()),
        _ => None,
    });

    match first_url {
        Some(url) => {
            if let Err(e) = webbrowser::open(&url) {
                warning!("Cannot open browser: {}", e);
            }
        }
        None => warning!("No album store page to open."),
    }
}
