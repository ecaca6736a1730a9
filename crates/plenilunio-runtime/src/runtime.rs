use crate::controller::{PendingFetch, Resolution, SelectionController};
use crate::events::{AppEvent, InputBindings, InputEvent};
use crate::state::UiState;
use crate::surface::DisplaySurface;
use futures::future::BoxFuture;
use futures::stream::FuturesUnordered;
use futures::{FutureExt, StreamExt};
use plenilunio_providers::ClimateFetcher;
use plenilunio_types::LiveClimateReading;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info};

type ClimateTask = BoxFuture<'static, (PendingFetch, Option<LiveClimateReading>)>;

/// Single-task event loop wiring input, the selection controller, climate
/// lookups and the display surface together.
///
/// Lookups are never cancelled against each other: every selection adds one
/// to the in-flight set and each resolution is handed to the controller in
/// completion order.
pub struct Runtime<S: DisplaySurface> {
    controller: SelectionController,
    bindings: InputBindings,
    fetcher: ClimateFetcher,
    surface: S,
    in_flight: FuturesUnordered<ClimateTask>,
    accepting_input: bool,
}

impl<S: DisplaySurface> Runtime<S> {
    pub fn new(
        controller: SelectionController,
        bindings: InputBindings,
        fetcher: ClimateFetcher,
        surface: S,
    ) -> Self {
        Self {
            controller,
            bindings,
            fetcher,
            surface,
            in_flight: FuturesUnordered::new(),
            accepting_input: true,
        }
    }

    pub fn state(&self) -> &UiState {
        self.controller.state()
    }

    pub fn controller(&self) -> &SelectionController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut SelectionController {
        &mut self.controller
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn in_flight(&self) -> usize {
        self.in_flight.len()
    }

    pub fn into_surface(self) -> S {
        self.surface
    }

    /// Translate raw input and dispatch it. `Quit` stops input intake.
    pub fn handle_input(&mut self, input: InputEvent) {
        if input == InputEvent::Quit {
            debug!("input closed");
            self.accepting_input = false;
            return;
        }

        if let Some(activation) = self.bindings.translate(&input) {
            if activation.prevent_default {
                let AppEvent::SeasonActivated { id } = &activation.event;
                self.surface.suppress_default_action(id);
            }
            self.dispatch(activation.event);
        }
    }

    pub fn dispatch(&mut self, event: AppEvent) {
        match event {
            AppEvent::SeasonActivated { id } => {
                if let Some(fetch) = self.controller.on_select(&id, &mut self.surface) {
                    let task = self.climate_task(fetch);
                    self.in_flight.push(task);
                }
            }
        }
    }

    fn climate_task(&self, fetch: PendingFetch) -> ClimateTask {
        let fetcher = self.fetcher.clone();
        async move {
            let reading = fetcher.fetch_climate(&fetch.season_id).await;
            (fetch, reading)
        }
        .boxed()
    }

    fn resolve(&mut self, fetch: PendingFetch, reading: Option<LiveClimateReading>) -> Resolution {
        self.controller
            .on_climate_resolved(fetch, reading, &mut self.surface)
    }

    /// Wait for every in-flight lookup and render its result.
    pub async fn settle(&mut self) {
        while let Some((fetch, reading)) = self.in_flight.next().await {
            self.resolve(fetch, reading);
        }
    }

    /// Run until input ends (channel closed or `Quit`) and every in-flight
    /// lookup has resolved. Returns the surface.
    pub async fn run(mut self, inputs: &mut Receiver<InputEvent>) -> S {
        info!("calendar ready");

        loop {
            tokio::select! {
                input = inputs.recv(), if self.accepting_input => match input {
                    Some(input) => self.handle_input(input),
                    None => self.handle_input(InputEvent::Quit),
                },
                Some((fetch, reading)) = self.in_flight.next(), if !self.in_flight.is_empty() => {
                    self.resolve(fetch, reading);
                }
                else => break,
            }
        }

        debug!("event loop finished");
        self.surface
    }
}
