//! Plain-text rendering of screen views.

use std::io::{self, Write};

use crate::domain::{MapComposition, MarkerAppearance};
use crate::inbound::screens::{
    Alert, Button, LOADING_TEXT, MainView, MapsView, PlaceholderScreen,
};

const HELP: &str = "\
Comandos:
  nome|rua|numero|cidade|estado <valor>  preenche um campo
  cadastrar                              cadastra o usuário
  permissao                              solicita a permissão de localização
  mapa                                   abre o mapa com os usuários
  graficos | camera                      abre as telas reservadas
  voltar                                 volta à tela anterior
  ajuda                                  mostra esta lista
  sair                                   encerra";

/// Screen title bar, with a back hint when the stack can pop.
pub fn header(out: &mut impl Write, title: &str, can_go_back: bool) -> io::Result<()> {
    writeln!(out)?;
    if can_go_back {
        writeln!(out, "== {title} ==  (voltar)")
    } else {
        writeln!(out, "== {title} ==")
    }
}

fn button(out: &mut impl Write, button: &Button, command: &str) -> io::Result<()> {
    if button.enabled {
        writeln!(out, "  [{}] ({command})", button.label)
    } else {
        writeln!(out, "  [{}] (desativado)", button.label)
    }
}

/// Registration screen.
pub fn main_screen(out: &mut impl Write, view: &MainView) -> io::Result<()> {
    if let Some(banner) = view.banner {
        writeln!(out, "[!] {}  [{}] (permissao)", banner.text, banner.action)?;
    }
    for field in &view.fields {
        if field.value.is_empty() {
            writeln!(out, "  {}: _", field.placeholder)?;
        } else {
            writeln!(out, "  {}: {}", field.placeholder, field.value)?;
        }
    }
    if view.busy {
        writeln!(out, "  ...")?;
    } else {
        button(out, &view.submit, "cadastrar")?;
    }
    writeln!(out, "{}", view.info)?;
    if let Some(hint) = view.hint {
        writeln!(out, "{hint}")?;
    }
    button(out, &view.map_button, "mapa")
}

/// Map screen in any of its states.
pub fn maps_screen(out: &mut impl Write, view: &MapsView) -> io::Result<()> {
    match view {
        MapsView::Loading => writeln!(out, "{LOADING_TEXT}"),
        MapsView::Error(message) => writeln!(out, "{message}"),
        MapsView::Ready(map) => composition(out, map),
    }
}

fn composition(out: &mut impl Write, map: &MapComposition) -> io::Result<()> {
    writeln!(out, "{}", map.header)?;
    writeln!(
        out,
        "Região: {:.5}, {:.5} (delta {} x {})",
        map.region.center.latitude,
        map.region.center.longitude,
        map.region.latitude_delta,
        map.region.longitude_delta
    )?;
    for marker in &map.markers {
        let badge = match &marker.appearance {
            MarkerAppearance::Pin { color } => format!("pino {color}"),
            MarkerAppearance::Badge { label, color } => format!("[{label}] {color}"),
        };
        writeln!(
            out,
            "  {badge} @ {:.5}, {:.5}  {} - {}",
            marker.coordinate.latitude,
            marker.coordinate.longitude,
            marker.title,
            marker.description
        )?;
    }
    if let Some(legend) = &map.legend {
        writeln!(out, "{}", legend.title)?;
        for row in &legend.rows {
            writeln!(
                out,
                "  {}. {} {} - {}",
                row.position, row.color, row.name, row.address
            )?;
        }
    }
    Ok(())
}

/// Placeholder screen.
pub fn placeholder(out: &mut impl Write, screen: &PlaceholderScreen) -> io::Result<()> {
    writeln!(out, "{}", screen.heading)?;
    writeln!(out, "{}", screen.subheading)
}

/// Modal alert.
pub fn alert(out: &mut impl Write, alert: &Alert) -> io::Result<()> {
    writeln!(out, "*** {} ***", alert.title)?;
    writeln!(out, "{}", alert.message)
}

/// Short notice that is not an alert.
pub fn notice(out: &mut impl Write, text: &str) -> io::Result<()> {
    writeln!(out, "({text})")
}

/// Command list.
pub fn help(out: &mut impl Write) -> io::Result<()> {
    writeln!(out, "{HELP}")
}
