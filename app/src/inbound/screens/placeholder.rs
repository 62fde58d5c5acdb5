//! Static screens reserved for later features.

use crate::domain::RouteName;

/// Centred title and subtitle of a placeholder screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaceholderScreen {
    /// Route this placeholder stands in for.
    pub route: RouteName,
    /// Bold line.
    pub heading: &'static str,
    /// Grey line below.
    pub subheading: &'static str,
}

impl PlaceholderScreen {
    /// Placeholder for `route`, or `None` for routes with real content.
    pub fn for_route(route: RouteName) -> Option<Self> {
        let (heading, subheading) = match route {
            RouteName::Graficos => ("Tela de Gráficos", "Gráficos serão exibidos aqui"),
            RouteName::Camera => (
                "Tela da Câmera",
                "Funcionalidade de câmera será implementada aqui",
            ),
            RouteName::Main | RouteName::Maps => return None,
        };
        Some(Self {
            route,
            heading,
            subheading,
        })
    }
}
