//! Line-oriented driver for the screens.
//!
//! The shell owns the navigator and the live screen instances. Each input
//! line is parsed into a [`Command`], applied to the screen on top of the
//! stack, and followed by a render of whatever is on top afterwards. A map
//! screen instance lives as long as its stack entry key stays the same.

use std::io::{self, Write};

use thiserror::Error;
use tokio::io::{AsyncBufRead, AsyncBufReadExt};
use tracing::{debug, info};

use super::command::{Command, CommandError};
use super::render;
use crate::domain::{DeviceLocation, NavigationError, Navigator, RouteName, RouteParams};
use crate::inbound::screens::{MainScreen, MapsScreen, PlaceholderScreen};

const PROMPT: &str = "> ";

/// Failures that end the shell.
#[derive(Debug, Error)]
pub enum ShellError {
    /// Reading input or writing output failed.
    #[error("terminal i/o failed: {0}")]
    Io(#[from] io::Error),
    /// The navigator refused a transition.
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line.
    Continue,
    /// Stop.
    Quit,
}

/// Interactive session over one input and one output.
pub struct Shell<W> {
    main: MainScreen,
    location: DeviceLocation,
    navigator: Navigator,
    maps: Option<(u64, MapsScreen)>,
    out: W,
}

impl<W: Write> Shell<W> {
    /// Session starting on the registration screen.
    pub fn new(main: MainScreen, location: DeviceLocation, out: W) -> Self {
        Self {
            main,
            location,
            navigator: Navigator::new(),
            maps: None,
            out,
        }
    }

    /// Navigation stack.
    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    /// Registration screen.
    pub fn main_screen(&self) -> &MainScreen {
        &self.main
    }

    /// Live map screen, when one is on top.
    pub fn maps_screen(&self) -> Option<&MapsScreen> {
        self.maps.as_ref().map(|(_, screen)| screen)
    }

    /// Output written so far.
    pub fn output(&self) -> &W {
        &self.out
    }

    /// Give back the output sink.
    pub fn into_output(self) -> W {
        self.out
    }

    /// Mount the first screen, then process lines until `sair` or end of input.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] on terminal i/o failure.
    pub async fn run<R>(&mut self, input: R) -> Result<(), ShellError>
    where
        R: AsyncBufRead + Unpin,
    {
        self.start().await?;
        let mut lines = input.lines();
        loop {
            write!(self.out, "{PROMPT}")?;
            self.out.flush()?;
            let Some(line) = lines.next_line().await? else {
                debug!("input closed");
                break;
            };
            let flow = match Command::parse(&line) {
                Ok(command) => self.execute(command).await?,
                Err(CommandError::Empty) => Flow::Continue,
                Err(error) => {
                    render::notice(&mut self.out, &format!("{error}; digite 'ajuda'"))?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }
        info!(routes = ?self.navigator.routes(), "shell finished");
        Ok(())
    }

    /// Mount the registration screen and render it.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] on output failure.
    pub async fn start(&mut self) -> Result<(), ShellError> {
        if let Some(alert) = self.main.mount().await {
            render::alert(&mut self.out, &alert)?;
        }
        self.show_current().await
    }

    /// Apply one command and render the resulting screen.
    ///
    /// # Errors
    ///
    /// Returns [`ShellError`] on output failure or a refused navigation.
    pub async fn execute(&mut self, command: Command) -> Result<Flow, ShellError> {
        debug!(?command, route = %self.navigator.current().name, "executing command");
        match command {
            Command::Help => {
                render::help(&mut self.out)?;
                return Ok(Flow::Continue);
            }
            Command::Quit => return Ok(Flow::Quit),
            Command::Back => {
                if !self.navigator.back() {
                    render::notice(&mut self.out, "já está na tela inicial")?;
                }
            }
            Command::Graficos => {
                self.navigator.navigate(RouteName::Graficos, RouteParams::None)?;
            }
            Command::Camera => {
                self.navigator.navigate(RouteName::Camera, RouteParams::None)?;
            }
            Command::Set(..) | Command::Submit | Command::Permission | Command::Map
                if self.navigator.current().name != RouteName::Main =>
            {
                render::notice(&mut self.out, "disponível apenas na tela de cadastro")?;
            }
            Command::Set(field, value) => self.main.set_field(field, value),
            Command::Submit => match self.main.submit().await {
                Some(alert) => render::alert(&mut self.out, &alert)?,
                None => self.disabled(|view| view.submit.label)?,
            },
            Command::Permission => match self.main.retry_permission().await {
                Some(alert) => render::alert(&mut self.out, &alert)?,
                None => render::notice(&mut self.out, "permissão já concedida")?,
            },
            Command::Map => {
                if !self.main.open_map(&mut self.navigator)? {
                    self.disabled(|view| view.map_button.label)?;
                }
            }
        }
        self.show_current().await?;
        Ok(Flow::Continue)
    }

    fn disabled(
        &mut self,
        label: impl FnOnce(crate::inbound::screens::MainView) -> String,
    ) -> io::Result<()> {
        let label = label(self.main.view());
        render::notice(&mut self.out, &format!("botão desativado: {label}"))
    }

    async fn show_current(&mut self) -> Result<(), ShellError> {
        let entry = self.navigator.current().clone();
        render::header(&mut self.out, entry.name.title(), self.navigator.can_go_back())?;

        if entry.name != RouteName::Maps {
            self.maps = None;
        }
        match entry.name {
            RouteName::Main => render::main_screen(&mut self.out, &self.main.view())?,
            RouteName::Maps => {
                let mounted = matches!(&self.maps, Some((key, _)) if *key == entry.key);
                if !mounted {
                    let mut screen = MapsScreen::new(entry.maps_params());
                    render::maps_screen(&mut self.out, screen.view())?;
                    self.out.flush()?;
                    let view = screen.load(&self.location).await;
                    render::maps_screen(&mut self.out, view)?;
                    self.maps = Some((entry.key, screen));
                } else if let Some((_, screen)) = &self.maps {
                    render::maps_screen(&mut self.out, screen.view())?;
                }
            }
            RouteName::Graficos | RouteName::Camera => {
                if let Some(screen) = PlaceholderScreen::for_route(entry.name) {
                    render::placeholder(&mut self.out, &screen)?;
                }
            }
        }
        Ok(())
    }
}
