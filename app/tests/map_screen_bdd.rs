//! Behaviour tests for the map screen.
//!
//! Users are registered through the real registration flow, then the map is
//! opened with the registry snapshot exactly as the navigator hands it over.

use std::cell::RefCell;

use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};
use tokio::runtime::Runtime;
use usermap::domain::ports::PermissionStatus;
use usermap::domain::{
    Coordinates, FormField, MapComposition, MapsParams, MarkerAppearance, MarkerKey, Navigator,
    RouteName, RouteParams,
};
use usermap::inbound::screens::{MapsScreen, MapsView};

mod support;

use support::{App, parse_coordinates, runtime};

struct MapWorld {
    runtime: Runtime,
    app: RefCell<App>,
    view: RefCell<Option<MapsView>>,
}

impl MapWorld {
    fn new() -> Self {
        Self {
            runtime: runtime(),
            app: RefCell::new(App::new(&[PermissionStatus::Granted])),
            view: RefCell::new(None),
        }
    }

    fn register(&self, name: &str, index: usize) {
        let app = self.app.borrow();
        let offset = f64::from(u32::try_from(index).expect("small index")) * 0.001;
        app.geocoder
            .answer_with(Ok(vec![Coordinates::new(-23.5 - offset, -46.6 + offset)]));
        for (field, value) in [
            (FormField::Name, name.to_owned()),
            (FormField::Street, format!("Rua {index}")),
            (FormField::Number, (index + 1).to_string()),
            (FormField::City, "São Paulo".to_owned()),
            (FormField::State, "SP".to_owned()),
        ] {
            app.flow.set_field(field, value);
        }
        self.runtime
            .block_on(app.flow.submit())
            .expect("registration should succeed");
    }

    fn with_map<T>(&self, f: impl FnOnce(&MapComposition) -> T) -> T {
        let view = self.view.borrow();
        match view.as_ref().expect("map screen should be opened") {
            MapsView::Ready(map) => f(map),
            other => panic!("map is not ready: {other:?}"),
        }
    }
}

#[fixture]
fn world() -> MapWorld {
    MapWorld::new()
}

#[given("the device is at {position}")]
fn the_device_is_at(world: &MapWorld, position: String) {
    world
        .app
        .borrow()
        .source
        .place_device_at(parse_coordinates(&position));
}

#[given("the location permission is refused")]
fn the_location_permission_is_refused(world: &MapWorld) {
    *world.app.borrow_mut() = App::new(&[PermissionStatus::Denied]);
}

#[given("the device has no position fix")]
fn the_device_has_no_position_fix(world: &MapWorld) {
    *world.app.borrow_mut() = App::new(&[PermissionStatus::Granted]);
}

#[given("the users {names} are registered")]
fn the_users_are_registered(world: &MapWorld, names: String) {
    world.runtime.block_on(world.app.borrow().flow.mount()).expect("permission");
    for (index, name) in names.split(',').map(str::trim).enumerate() {
        world.register(name, index);
    }
}

#[given("{count} numbered users are registered")]
fn numbered_users_are_registered(world: &MapWorld, count: usize) {
    world.runtime.block_on(world.app.borrow().flow.mount()).expect("permission");
    for index in 0..count {
        world.register(&format!("Usuario{index} Teste"), index);
    }
}

#[when("the map screen is opened")]
fn the_map_screen_is_opened(world: &MapWorld) {
    let app = world.app.borrow();
    let mut navigator = Navigator::new();
    let params = MapsParams {
        usuarios: app.flow.snapshot(),
    };
    let entry = navigator
        .navigate(RouteName::Maps, RouteParams::Maps(params))
        .expect("maps accepts a payload");

    let mut screen = MapsScreen::new(entry.maps_params());
    assert_eq!(screen.view(), &MapsView::Loading);
    let view = world
        .runtime
        .block_on(screen.load(&app.device_location()))
        .clone();
    *world.view.borrow_mut() = Some(view);
}

#[then("the header reads {header}")]
fn the_header_reads(world: &MapWorld, header: String) {
    world.with_map(|map| assert_eq!(map.header, header));
}

#[then("the first marker is the device marker")]
fn the_first_marker_is_the_device_marker(world: &MapWorld) {
    world.with_map(|map| {
        let device = &map.markers[0];
        assert_eq!(device.key, MarkerKey::Device);
        assert_eq!(device.title, "Sua Localização");
        assert_eq!(device.description, "Você está aqui");
    });
}

#[then("the user badges read {labels}")]
fn the_user_badges_read(world: &MapWorld, labels: String) {
    let expected: Vec<&str> = labels.split(',').map(str::trim).collect();
    world.with_map(|map| {
        let actual: Vec<&str> = map
            .user_markers()
            .map(|marker| match &marker.appearance {
                MarkerAppearance::Badge { label, .. } => label.as_str(),
                MarkerAppearance::Pin { .. } => panic!("user markers are badges"),
            })
            .collect();
        assert_eq!(actual, expected);
    });
}

#[then("the legend colours are {colours}")]
fn the_legend_colours_are(world: &MapWorld, colours: String) {
    let expected: Vec<&str> = colours.split(',').map(str::trim).collect();
    world.with_map(|map| {
        let legend = map.legend.as_ref().expect("legend should be shown");
        let actual: Vec<&str> = legend.rows.iter().map(|row| row.color.as_str()).collect();
        assert_eq!(actual, expected);
    });
}

#[then("the region is centred on {position}")]
fn the_region_is_centred_on(world: &MapWorld, position: String) {
    world.with_map(|map| assert_eq!(map.region.center, parse_coordinates(&position)));
}

#[then("{count} marker is shown")]
fn one_marker_is_shown(world: &MapWorld, count: usize) {
    world.with_map(|map| assert_eq!(map.markers.len(), count));
}

#[then("{count} markers are shown")]
fn markers_are_shown(world: &MapWorld, count: usize) {
    world.with_map(|map| assert_eq!(map.markers.len(), count));
}

#[then("there is no legend")]
fn there_is_no_legend(world: &MapWorld) {
    world.with_map(|map| assert!(map.legend.is_none()));
}

#[then("legend row {row} has the colour of legend row {other}")]
fn legend_row_has_the_colour_of(world: &MapWorld, row: usize, other: usize) {
    world.with_map(|map| {
        let legend = map.legend.as_ref().expect("legend should be shown");
        assert_eq!(legend.rows[row - 1].position, row);
        assert_eq!(legend.rows[row - 1].color, legend.rows[other - 1].color);
    });
}

#[then("the map shows the error {message}")]
fn the_map_shows_the_error(world: &MapWorld, message: String) {
    let view = world.view.borrow();
    match view.as_ref().expect("map screen should be opened") {
        MapsView::Error(text) => assert_eq!(*text, message),
        other => panic!("expected an error view, got {other:?}"),
    }
}

#[scenario(
    path = "tests/features/map_screen.feature",
    name = "Registered users appear with distinct colours"
)]
fn registered_users_appear(world: MapWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/map_screen.feature",
    name = "An empty registry shows only the device"
)]
fn an_empty_registry_shows_only_the_device(world: MapWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/map_screen.feature",
    name = "Colours wrap after the palette is exhausted"
)]
fn colours_wrap(world: MapWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/map_screen.feature",
    name = "A refused location shows the denial message"
)]
fn a_refused_location_shows_the_denial_message(world: MapWorld) {
    drop(world);
}

#[scenario(
    path = "tests/features/map_screen.feature",
    name = "A device without a position fix shows the lookup failure"
)]
fn a_device_without_a_fix(world: MapWorld) {
    drop(world);
}
