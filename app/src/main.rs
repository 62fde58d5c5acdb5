//! Terminal entry-point: wires the adapters and runs the shell on stdio.

use std::io;
use std::sync::Arc;

use color_eyre::eyre::{Context, Result, eyre};
use ortho_config::OrthoConfig;
use tokio::io::BufReader;
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use usermap::config::AppSettings;
use usermap::domain::{DeviceLocation, PermissionGate, RegistrationFlow};
use usermap::inbound::screens::MainScreen;
use usermap::inbound::terminal::Shell;
use usermap::outbound::device::ConfiguredLocationSource;
use usermap::outbound::nominatim::NominatimGeocoder;

fn main() -> Result<()> {
    color_eyre::install()?;
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings =
        AppSettings::load().map_err(|error| eyre!("failed to load settings: {error}"))?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    runtime.block_on(run(settings))
}

async fn run(settings: AppSettings) -> Result<()> {
    let endpoint = settings.geocoder_endpoint()?;
    info!(%endpoint, deny_location = settings.deny_location, "starting usermap");
    let geocoder = NominatimGeocoder::with_identity(
        endpoint,
        settings.geocoder_timeout(),
        settings.geocoder_identity(),
    )
    .context("failed to build geocoder client")?;
    let source = ConfiguredLocationSource::new(settings.deny_location, settings.device_position());

    let gate = Arc::new(PermissionGate::new(Arc::new(source)));
    let flow = Arc::new(RegistrationFlow::new(Arc::clone(&gate), Arc::new(geocoder)));
    let mut shell = Shell::new(
        MainScreen::new(flow),
        DeviceLocation::new(gate),
        io::stdout(),
    );
    shell
        .run(BufReader::new(tokio::io::stdin()))
        .await
        .context("terminal session failed")
}
