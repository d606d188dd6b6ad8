//! Carpool-Planer (Kommandozeile).
//!
//! Lädt einen Haltestellen-Katalog (JSON), führt optional eine Suche aus und
//! gibt die erste Tabellenseite aus.
//!
//! Aufruf: `carpool-planner [haltestellen.json] [suchbegriff] [filter,...]`

use anyhow::Context;
use carpool_planner::{AppController, AppIntent, AppState, PlannerOptions, StopPlace, TransportMode};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    log::info!("Carpool-Planer v{} startet...", env!("CARGO_PKG_VERSION"));

    let options = PlannerOptions::load_from_file(&PlannerOptions::config_path());
    let mut state = AppState::with_options(options);
    let mut controller = AppController::new();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let stops = match args.first() {
        Some(path) => load_stop_places(path)?,
        None => demo_stop_places(),
    };
    state.stop_places.load(stops, None);

    if let Some(filters) = args.get(2) {
        for key in filters.split(',').filter(|k| !k.is_empty()) {
            controller.handle_intent(
                &mut state,
                AppIntent::FilterToggled {
                    key: key.to_string(),
                },
            )?;
        }
    }

    if let Some(query) = args.get(1).filter(|q| !q.trim().is_empty()) {
        controller.handle_intent(
            &mut state,
            AppIntent::SearchQueryChanged {
                query: query.clone(),
            },
        )?;
        controller.handle_intent(&mut state, AppIntent::SearchSubmitted)?;
        if !controller.await_search(&mut state).await {
            log::warn!("Keine Suchergebnisse übernommen");
        }
    }

    print_table(&state);
    Ok(())
}

fn load_stop_places(path: &str) -> anyhow::Result<Vec<StopPlace>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("{} nicht lesbar", path))?;
    let stops: Vec<StopPlace> = serde_json::from_str(&content)
        .with_context(|| format!("{} ist kein gültiger Haltestellen-Katalog", path))?;
    log::info!("Katalog geladen: {}", path);
    Ok(stops)
}

fn demo_stop_places() -> Vec<StopPlace> {
    vec![
        StopPlace::new("NSR:StopPlace:337", "Oslo S", TransportMode::Train).at(10.7522, 59.9111),
        StopPlace::new("NSR:StopPlace:58366", "Jernbanetorget", TransportMode::Metro)
            .at(10.7502, 59.9119),
        StopPlace::new("NSR:StopPlace:6505", "Nationaltheatret", TransportMode::Train)
            .at(10.7345, 59.9147),
        StopPlace::new("NSR:StopPlace:4000", "Aker brygge", TransportMode::Water)
            .at(10.7264, 59.9105),
        StopPlace::new("NSR:StopPlace:6488", "Stortinget", TransportMode::Metro)
            .at(10.7414, 59.9131),
        StopPlace::new("NSR:StopPlace:4227", "Galleri Oslo", TransportMode::Coach),
        StopPlace::new("NSR:StopPlace:58382", "Sentrum Bussterminal", TransportMode::Bus),
    ]
}

fn print_table(state: &AppState) {
    let stop_places = &state.stop_places;
    let slice = stop_places.visible();
    let table = &stop_places.table;

    println!(
        "{} Treffer, Seite {}/{}",
        slice.current_total_for_table,
        table.page + 1,
        table.page_count(slice.current_total_for_table)
    );
    for stop in &slice.data_for_table {
        println!(
            "  {:<24} {:<32} {}",
            stop.id,
            stop.name,
            stop.transport_mode.label()
        );
    }
}
