//! TravelHub - hotel search and booking demo
//!
//! Runs the search -> results -> detail flow as an interactive terminal
//! session. Display settings and flow state live for the session and die with
//! it, like the browser session they stand in for.

use std::io::{self, BufRead, Write};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use travelhub::{
    catalog::Catalog,
    config::AppConfig,
    flow::{FlowController, Screen},
    models::{Currency, Language, SearchParams},
    screens,
    services::DisplaySettings,
};

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Load configuration
    let config = AppConfig::load()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("travelhub={}", config.logging.level).into());

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting TravelHub v{}", env!("CARGO_PKG_VERSION"));

    let settings = DisplaySettings::new(config.display.language, config.display.currency);
    let flow = FlowController::new(Catalog::new());

    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(flow, settings, &mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}

/// Drive the flow from line-based input until EOF or `salir`.
fn run_session<R: BufRead, W: Write>(
    mut flow: FlowController,
    mut settings: DisplaySettings,
    input: &mut R,
    out: &mut W,
) -> io::Result<()> {
    loop {
        render_current(&flow, &settings, out)?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }
        let line = line.trim();

        // Header controls, available on every screen.
        if let Some(tag) = line.strip_prefix("idioma ") {
            match tag.trim().parse() {
                Ok(language) => settings = settings.with_language(language),
                Err(err) => tracing::debug!(%err, "language selection ignored"),
            }
            continue;
        }
        if let Some(tag) = line.strip_prefix("moneda ") {
            match tag.trim().parse() {
                Ok(currency) => settings = settings.with_currency(currency),
                Err(err) => tracing::debug!(%err, "currency selection ignored"),
            }
            continue;
        }
        if line == "salir" {
            return Ok(());
        }

        match flow.current() {
            Screen::Search => {
                flow.submit_search(parse_search_line(line));
            }
            Screen::Results { .. } => {
                if line == "volver" {
                    flow.back();
                } else if let Ok(id) = line.parse::<i64>() {
                    flow.select_hotel(id);
                }
            }
            Screen::Detail { .. } => {
                if line == "volver" {
                    flow.back();
                } else if line == "confirmar" && flow.confirm() {
                    writeln!(out, "{}", screens::detail::CONFIRMED_MESSAGE)?;
                }
            }
        }
    }
}

fn render_current<W: Write>(
    flow: &FlowController,
    settings: &DisplaySettings,
    out: &mut W,
) -> io::Result<()> {
    match flow.current() {
        Screen::Search => {
            write!(out, "{}", screens::search::render(settings))?;
            writeln!(out, "\nbuscar: destino; entrada; salida[; personas]")?;
        }
        Screen::Results { params } => {
            write!(
                out,
                "{}",
                screens::results::render(params, flow.catalog().list_all(), settings)
            )?;
            writeln!(out, "elige un número de hotel, o 'volver'")?;
        }
        Screen::Detail {
            params,
            hotel_id,
            confirmation,
        } => {
            // The id was resolved on the way in; a miss never reaches here.
            if let Some(hotel) = flow.catalog().find_by_id(*hotel_id) {
                write!(
                    out,
                    "{}",
                    screens::detail::render(hotel, params, confirmation, settings)
                )?;
            }
            writeln!(out, "'confirmar' para reservar, o 'volver'")?;
        }
    }
    let languages = Language::ALL.map(|l| l.to_string()).join("|");
    let currencies = Currency::ALL.map(|c| c.to_string()).join("|");
    writeln!(out, "(idioma {}, moneda {}, salir)", languages, currencies)?;
    write!(out, "> ")?;
    out.flush()
}

/// Split a `destino; entrada; salida[; personas]` line into search
/// parameters. Missing parts stay empty and fail the submission guard;
/// an omitted guest count keeps the default of 2.
fn parse_search_line(line: &str) -> SearchParams {
    let mut parts = line.splitn(4, ';').map(str::trim);
    let destination = parts.next().unwrap_or_default();
    let check_in = parts.next().unwrap_or_default();
    let check_out = parts.next().unwrap_or_default();
    let mut params = SearchParams {
        destination: destination.to_string(),
        check_in: check_in.to_string(),
        check_out: check_out.to_string(),
        ..SearchParams::default()
    };
    if let Some(guests) = parts.next() {
        if !guests.is_empty() {
            params.guests = guests.to_string();
        }
    }
    params
}
