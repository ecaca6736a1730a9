use crate::config::Config;
use crate::controller::{DEFAULT_NARROW_VIEWPORT_WIDTH, SelectionController, StaleResponses};
use crate::events::{AppEvent, InputBindings, InputEvent};
use crate::runtime::Runtime;
use crate::surface::DisplaySurface;
use crate::{Error, Result};
use plenilunio_engine::present_error;
use plenilunio_providers::{CatalogLoader, ClimateFetcher, HttpClimateSource};
use plenilunio_types::SeasonId;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, error, info};

/// Length of the cosmetic intro shown before the calendar appears.
pub const DEFAULT_INTRO_DELAY: Duration = Duration::from_secs(2);

/// Season selected automatically once startup completes.
pub const DEFAULT_SEASON: &str = "1";

/// Startup state machine.
///
/// `NotStarted -> AcquiringHandles -> LoadingCatalog -> WiringInputs ->
/// IntroDelay -> Ready`, with `Errored` reachable from any non-terminal phase.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BootPhase {
    NotStarted,
    AcquiringHandles,
    LoadingCatalog,
    WiringInputs,
    IntroDelay,
    Ready,
    Errored(String),
}

pub struct Bootstrapper {
    loader: CatalogLoader,
    fetcher: ClimateFetcher,
    intro_delay: Duration,
    default_season: SeasonId,
    stale_responses: StaleResponses,
    narrow_viewport_width: u16,
    phase: BootPhase,
}

impl Bootstrapper {
    pub fn new(loader: CatalogLoader, fetcher: ClimateFetcher) -> Self {
        Self {
            loader,
            fetcher,
            intro_delay: DEFAULT_INTRO_DELAY,
            default_season: SeasonId::from(DEFAULT_SEASON),
            stale_responses: StaleResponses::default(),
            narrow_viewport_width: DEFAULT_NARROW_VIEWPORT_WIDTH,
            phase: BootPhase::NotStarted,
        }
    }

    /// Build the catalog loader and HTTP climate source described by `config`.
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpClimateSource::new(config.api_base_url.clone())?;
        let fetcher = ClimateFetcher::new(Arc::new(source)).with_timeout(config.climate_timeout());
        Ok(Self::new(CatalogLoader::new(config.catalog_source()), fetcher).with_config(config))
    }

    /// Apply the tunables from `config`, keeping the loader and fetcher.
    pub fn with_config(mut self, config: &Config) -> Self {
        self.intro_delay = config.intro_delay();
        self.default_season = SeasonId::from(config.default_season.as_str());
        self.stale_responses = config.stale_responses;
        self.narrow_viewport_width = config.narrow_viewport_width;
        self
    }

    pub fn with_intro_delay(mut self, delay: Duration) -> Self {
        self.intro_delay = delay;
        self
    }

    pub fn phase(&self) -> &BootPhase {
        &self.phase
    }

    fn enter(&mut self, phase: BootPhase) {
        debug!(from = ?self.phase, to = ?phase, "startup phase");
        self.phase = phase;
    }

    /// Run startup once. Input arriving before `Ready` reaches the
    /// controller while its gate is still closed and is dropped.
    ///
    /// On success the returned runtime has already dispatched the default
    /// selection; drive it with [`Runtime::run`].
    pub async fn start<S: DisplaySurface>(
        &mut self,
        mut surface: S,
        inputs: &mut Receiver<InputEvent>,
    ) -> Result<Runtime<S>> {
        if self.phase != BootPhase::NotStarted {
            return Err(Error::Config(format!(
                "startup already ran (phase {:?})",
                self.phase
            )));
        }

        self.enter(BootPhase::AcquiringHandles);
        let controls = surface.controls();
        debug!(controls = controls.len(), "display handles acquired");

        self.enter(BootPhase::LoadingCatalog);
        let catalog = match self.loader.load().await {
            Ok(catalog) => catalog,
            Err(err) => {
                let detail = err.to_string();
                error!(source = %self.loader.source(), error = %detail, "calendar failed to start");
                surface.show_error(&present_error(detail.clone()));
                self.enter(BootPhase::Errored(detail));
                return Err(Error::CatalogLoad(err));
            }
        };

        self.enter(BootPhase::WiringInputs);
        let bindings = InputBindings::wire(&controls);
        let controller = SelectionController::new(catalog, controls)
            .with_stale_responses(self.stale_responses)
            .with_narrow_viewport_width(self.narrow_viewport_width);
        let mut runtime = Runtime::new(controller, bindings, self.fetcher.clone(), surface);

        self.enter(BootPhase::IntroDelay);
        if !self.intro_delay.is_zero() {
            let intro = tokio::time::sleep(self.intro_delay);
            tokio::pin!(intro);
            let mut input_open = true;
            loop {
                tokio::select! {
                    _ = &mut intro => break,
                    input = inputs.recv(), if input_open => match input {
                        Some(input) => runtime.handle_input(input),
                        None => input_open = false,
                    },
                }
            }
            if !input_open {
                runtime.handle_input(InputEvent::Quit);
            }
        }

        self.enter(BootPhase::Ready);
        runtime.surface_mut().reveal();
        runtime.controller_mut().finish_loading();
        info!(season = %self.default_season, "startup complete");
        runtime.dispatch(AppEvent::SeasonActivated {
            id: self.default_season.clone(),
        });

        Ok(runtime)
    }
}
