use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, RwLockWriteGuard};

use pokegrid_card::{Card, Page, render_card};
use pokegrid_protocol::{EntityRecord, ListEntry};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::{PokedexConfig, Selection};
use crate::error::FetchError;
use crate::fetch::{fetch_entities, fetch_list};
use crate::sample::random_subset;
use crate::transport::{HttpTransport, Transport};

/// How a load cycle ended, when it did not fail
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    /// This many cards were rendered and the status line updated
    Rendered(usize),
    /// A newer cycle started meanwhile; the page was left to it
    Superseded,
}

impl CycleOutcome {
    pub fn rendered(&self) -> Option<usize> {
        match self {
            CycleOutcome::Rendered(count) => Some(*count),
            CycleOutcome::Superseded => None,
        }
    }
}

/// Records fetched by one cycle, not yet rendered
struct Fetched {
    records: Vec<EntityRecord>,
    replace: bool,
}

/// Loads Pokemon from the API and renders them into a shared [`Page`].
///
/// Each [`load`](Self::load) or [`shuffle`](Self::shuffle) call is one load
/// cycle. Cycles may overlap when driven from several tasks; the most recently
/// started one owns the page and older ones finish as
/// [`CycleOutcome::Superseded`] without touching it.
pub struct Pokedex<T = HttpTransport> {
    transport: T,
    config: PokedexConfig,
    page: Arc<RwLock<Page>>,
    pool: RwLock<Option<Arc<[ListEntry]>>>,
    rng: Mutex<StdRng>,
    generation: AtomicU64,
}

impl Pokedex<HttpTransport> {
    /// Pokedex talking to the configured API over HTTP
    pub fn new(config: PokedexConfig) -> Self {
        Self::with_transport(HttpTransport::new(), config)
    }
}

impl<T: Transport> Pokedex<T> {
    pub fn with_transport(transport: T, config: PokedexConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let page = Page::new(config.locale, config.selection.is_random());

        Self {
            transport,
            config,
            page: Arc::new(RwLock::new(page)),
            pool: RwLock::new(None),
            rng: Mutex::new(rng),
            generation: AtomicU64::new(0),
        }
    }

    pub fn config(&self) -> &PokedexConfig {
        &self.config
    }

    /// Shared handle to the page cards are rendered into
    pub fn page(&self) -> Arc<RwLock<Page>> {
        Arc::clone(&self.page)
    }

    /// Copy of the page as it is right now
    pub fn snapshot(&self) -> Page {
        self.page
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn to_html(&self) -> String {
        self.page
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .to_html()
    }

    /// List retained by the last successful list fetch
    pub fn retained(&self) -> Option<Arc<[ListEntry]>> {
        self.pool
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Fetch the list, retain it, then fetch and render the configured selection.
    ///
    /// On failure the status line shows the failure message, no card of this
    /// cycle is rendered and the error is returned.
    pub async fn load(&self) -> Result<CycleOutcome, FetchError> {
        let generation = self.begin();
        let result = self.fetch_cycle(self.config.selection).await;
        self.finish(generation, result)
    }

    /// Render a fresh random subset of the retained list, replacing the grid.
    ///
    /// Fetches the list first if none has been retained yet.
    pub async fn shuffle(&self) -> Result<CycleOutcome, FetchError> {
        let generation = self.begin();
        let selection = Selection::Random(self.config.sample_size());

        let result = match self.retained() {
            Some(pool) => self.fetch_selected(&pool, selection).await,
            None => self.fetch_cycle(selection).await,
        };
        self.finish(generation, result)
    }

    fn page_mut(&self) -> RwLockWriteGuard<'_, Page> {
        self.page.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn begin(&self) -> u64 {
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.page_mut().set_status(self.config.locale.loading());
        tracing::debug!(generation, "Load cycle started");
        generation
    }

    async fn fetch_cycle(&self, selection: Selection) -> Result<Fetched, FetchError> {
        let list = fetch_list(
            &self.transport,
            &self.config.api_base,
            self.config.limit,
            self.config.offset,
        )
        .await?;

        let pool: Arc<[ListEntry]> = list.results.into();
        *self.pool.write().unwrap_or_else(PoisonError::into_inner) = Some(Arc::clone(&pool));

        self.fetch_selected(&pool, selection).await
    }

    async fn fetch_selected(
        &self,
        pool: &[ListEntry],
        selection: Selection,
    ) -> Result<Fetched, FetchError> {
        let selected = match selection {
            Selection::All => pool.to_vec(),
            Selection::Random(amount) => {
                let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
                random_subset(pool, amount, &mut *rng)
            }
        };

        tracing::info!(
            selected = selected.len(),
            available = pool.len(),
            random = selection.is_random(),
            "Fetching details"
        );

        let records = fetch_entities(&self.transport, &selected).await?;
        Ok(Fetched {
            records,
            replace: selection.is_random(),
        })
    }

    fn finish(
        &self,
        generation: u64,
        result: Result<Fetched, FetchError>,
    ) -> Result<CycleOutcome, FetchError> {
        let options = self.config.render_options();
        let result = result.map(|fetched| {
            let cards: Vec<Card> = fetched
                .records
                .iter()
                .map(|record| render_card(record, &options))
                .collect();
            (cards, fetched.replace)
        });

        let mut page = self.page_mut();

        // Compared under the page lock so no newer cycle can commit in between
        let current = self.generation.load(Ordering::SeqCst);
        if generation != current {
            match &result {
                Ok(_) => tracing::debug!(generation, current, "Load cycle superseded"),
                Err(e) => {
                    tracing::warn!(generation, current, error = %e, "Superseded load cycle failed")
                }
            }
            return Ok(CycleOutcome::Superseded);
        }

        match result {
            Ok((cards, replace)) => {
                let count = cards.len();
                if replace {
                    page.grid_mut().clear();
                }
                for card in cards {
                    page.grid_mut().append(card);
                }
                page.set_status(self.config.locale.loaded(count));

                tracing::info!(generation, count, "Load cycle rendered");
                Ok(CycleOutcome::Rendered(count))
            }
            Err(e) => {
                tracing::error!(generation, url = e.url(), error = %e, "Load cycle failed");
                page.set_status(self.config.locale.failed());
                Err(e)
            }
        }
    }
}
