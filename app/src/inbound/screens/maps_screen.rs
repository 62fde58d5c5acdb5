//! Map screen: waits for the device position, then shows the composition.

use tracing::debug;

use crate::domain::{DeviceLocation, LocationError, MapComposition, MapsParams, RouteName};

/// Text shown while the device position is pending.
pub const LOADING_TEXT: &str = "Carregando localização...";

/// What the map screen currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum MapsView {
    /// Spinner with [`LOADING_TEXT`].
    Loading,
    /// Centred error text.
    Error(&'static str),
    /// The composed map.
    Ready(MapComposition),
}

/// One map screen instance, bound to the payload it was opened with.
#[derive(Debug)]
pub struct MapsScreen {
    params: MapsParams,
    view: MapsView,
    fetched: bool,
}

impl MapsScreen {
    /// Screen for `params`, initially loading.
    pub fn new(params: MapsParams) -> Self {
        Self {
            params,
            view: MapsView::Loading,
            fetched: false,
        }
    }

    /// Header title.
    pub fn title(&self) -> &'static str {
        RouteName::Maps.title()
    }

    /// Payload the screen was opened with.
    pub fn params(&self) -> &MapsParams {
        &self.params
    }

    /// Current view.
    pub fn view(&self) -> &MapsView {
        &self.view
    }

    /// Resolve the device position. Only the first call reaches `location`.
    pub async fn load(&mut self, location: &DeviceLocation) -> &MapsView {
        if self.fetched {
            debug!("map screen already resolved its position");
            return &self.view;
        }
        self.fetched = true;
        self.view = match location.fetch().await {
            Ok(position) => MapsView::Ready(MapComposition::compose(&self.params.usuarios, position)),
            Err(error) => MapsView::Error(location_error_text(&error)),
        };
        &self.view
    }
}

fn location_error_text(error: &LocationError) -> &'static str {
    match error {
        LocationError::PermissionDenied => "Permissão para acessar a localização foi negada",
        LocationError::Unavailable(_) => "Não foi possível obter a localização atual",
    }
}
