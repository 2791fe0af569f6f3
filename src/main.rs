use chrono::{Duration, Local, NaiveDate};
use log::info;
use sanchari_flows::flows::{ProfileSubmit, TripPlanSubmit};
use sanchari_flows::stubs::{FixedGeolocation, InMemoryAuthService, InMemoryBookings};
use sanchari_flows::{load_timeline, AppContext, BookingsView, GeolocationProvider, Theme, TimelineEntry,
                     WizardFactory, WizardType};
use std::error::Error;
use std::io::{self, Write};
use std::sync::Arc;
use travel_domain::{BookingKind, BookingRecord, BookingStatus, InMemoryTripPlanRepository, TripPlanRepository};
use uuid::Uuid;
use wizard::{fields, Completion, FieldValue, Navigation, StepOutcome, SubmitAction, Wizard, WizardConfig};

/// Menú interactivo de Sanchari sobre los colaboradores en memoria.
///
/// Opciones soportadas:
/// 1) Crear cuenta (wizard de perfil)
/// 2) Planificar un viaje (wizard planificador)
/// 3) Ver reservas (línea de tiempo con filtro)
/// 4) Ver mi ubicación
/// 5) Cambiar tema claro/oscuro
/// 6) Cerrar sesión
/// 7) Salir
#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let config = WizardConfig::from_env()?;
    info!("configuración cargada: contraseña mínima {} caracteres, viaje máximo {} días",
          config.min_password_len,
          config.max_trip_days);

    let ctx = AppContext::new();
    let writer = ctx.writer().ok_or("el escritor del contexto ya fue entregado")?;
    let auth = Arc::new(InMemoryAuthService::new());
    let plans = Arc::new(InMemoryTripPlanRepository::new());
    let bookings = InMemoryBookings::new(demo_bookings(Local::now().date_naive()));
    let location = FixedGeolocation::at(12.9716, 77.5946);

    let profile_action = ProfileSubmit::new(auth.clone()).with_writer(writer);
    let trip_action = TripPlanSubmit::new(plans.clone(), config.clone());

    loop {
        match ctx.session() {
            Some(s) => println!("\n== Sanchari ({}) ==", s.display_name),
            None => println!("\n== Sanchari (invitado) =="),
        }
        println!("1) Crear cuenta");
        println!("2) Planificar un viaje");
        println!("3) Ver reservas");
        println!("4) Ver mi ubicación");
        println!("5) Cambiar tema (actual: {})", theme_label(ctx.theme()));
        println!("6) Cerrar sesión");
        println!("7) Salir");
        let choice = prompt("Elige una opción: ")?;
        match choice.trim() {
            "1" => {
                let mut w = WizardFactory::create(WizardType::ProfileSetup, config.clone())?;
                run_wizard(&mut w, &profile_action).await?;
            }
            "2" => {
                let mut w = WizardFactory::create(WizardType::TripPlanner, config.clone())?;
                if run_wizard(&mut w, &trip_action).await? {
                    for plan in plans.list_plans()? {
                        println!("Plan {}: {} ({} noches, {} viajeros)",
                                 plan.id(),
                                 plan.destination(),
                                 plan.nights(),
                                 plan.travelers());
                    }
                }
            }
            "3" => {
                let key = prompt("Filtro (all, flight, hotel, package): ")?;
                let view = load_timeline(&bookings, Some(key.trim()), Local::now().date_naive()).await;
                print_bookings(&view);
            }
            "4" => {
                let result = location.request_location().await;
                match (result.coordinates, result.error) {
                    (Some(c), _) => println!("Ubicación: {:.4}, {:.4}", c.latitude, c.longitude),
                    (None, Some(e)) => eprintln!("Error de ubicación: {}", e),
                    (None, None) => println!("Ubicación no disponible"),
                }
            }
            "5" => {
                if let Some(w) = profile_action.writer() {
                    println!("Tema cambiado a {}", theme_label(w.toggle_theme()));
                }
            }
            "6" => {
                match (ctx.is_authenticated(), profile_action.writer()) {
                    (true, Some(w)) => {
                        w.sign_out();
                        println!("Sesión cerrada");
                    }
                    _ => println!("No hay sesión activa"),
                }
            }
            "7" => {
                println!("Saliendo...");
                break;
            }
            other => {
                println!("Opción inválida: {}", other);
            }
        }
    }

    Ok(())
}

/// Recorre el wizard paso a paso. Devuelve `true` si terminó con éxito.
async fn run_wizard<S>(w: &mut Wizard, action: &S) -> Result<bool, Box<dyn Error>>
    where S: SubmitAction + ?Sized
{
    loop {
        let step = w.current_step().clone();
        let progress = w.progress();
        println!("\n-- Paso {} de {} ({}%) : {} --",
                 progress.position,
                 progress.total,
                 progress.percent,
                 step.title);
        if let Some(sub) = &step.subtitle {
            println!("{}", sub);
        }
        if let Some(err) = w.submission_error() {
            eprintln!("Error en el envío: {}", err);
        }

        for name in step.kind.field_names() {
            let current = w.value(name).map(describe).unwrap_or_default();
            if let Some(err) = w.error(name) {
                eprintln!("  ! {}", err);
            }
            let input = prompt(&format!("  {} [{}]: ", name, current))?;
            if !input.trim().is_empty() {
                w.set_field(name, parse_input(name, input.trim()));
            }
        }

        let derived = w.derived();
        if derived.trip_duration_days > 0 || derived.total_travelers > 0 {
            println!("  duración: {} días, viajeros: {}, costo estimado: {}",
                     derived.trip_duration_days,
                     derived.total_travelers,
                     derived.estimated_cost.map(|c| c.to_string()).unwrap_or_else(|| "-".into()));
        }

        let cmd = prompt("[s]iguiente, [a]trás, [i]r a paso N, [c]ancelar: ")?;
        let cmd = cmd.trim();
        match cmd {
            "s" | "" => match w.advance_and_submit(action).await? {
                StepOutcome::Navigated(Navigation::Blocked(errors)) => {
                    for (field, msg) in errors.iter() {
                        eprintln!("  {}: {}", field, msg);
                    }
                }
                StepOutcome::Navigated(Navigation::Finished) => return Ok(true),
                StepOutcome::Navigated(_) => {}
                StepOutcome::Submitted(Completion::Completed) => {
                    println!("¡Listo!");
                    return Ok(true);
                }
                StepOutcome::Submitted(Completion::Failed { message, resumed_at }) => {
                    eprintln!("No se pudo completar: {} (vuelves al paso {})", message, resumed_at + 1);
                }
            },
            "a" => match w.retreat() {
                Navigation::Busy => eprintln!("Hay un envío en curso"),
                Navigation::Finished => return Ok(true),
                _ => {}
            },
            "c" => return Ok(false),
            other if other.starts_with('i') => {
                let target: usize = match other[1..].trim().parse() {
                    Ok(n) if n >= 1 => n,
                    _ => {
                        eprintln!("Número de paso inválido");
                        continue;
                    }
                };
                match w.jump_to(target - 1) {
                    Ok(Navigation::Rejected) => eprintln!("Sólo puedes avanzar un paso a la vez"),
                    Ok(Navigation::Blocked(_)) => eprintln!("Corrige el paso actual antes de avanzar"),
                    Ok(_) => {}
                    Err(e) => eprintln!("{}", e),
                }
            }
            other => println!("Comando inválido: {}", other),
        }
    }
}

fn prompt(label: &str) -> io::Result<String> {
    print!("{}", label);
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line)
}

fn theme_label(theme: Theme) -> &'static str {
    match theme {
        Theme::Light => "claro",
        Theme::Dark => "oscuro",
    }
}

fn parse_input(name: &str, input: &str) -> FieldValue {
    match name {
        fields::INTERESTS => FieldValue::list(input.split(',').map(|s| s.trim().to_string())),
        fields::START_DATE | fields::END_DATE | fields::DATE_OF_BIRTH => {
            match NaiveDate::parse_from_str(input, "%Y-%m-%d") {
                Ok(d) => FieldValue::Date(d),
                Err(_) => FieldValue::text(input),
            }
        }
        fields::ADULTS | fields::CHILDREN | fields::INFANTS => match input.parse::<i64>() {
            Ok(n) => FieldValue::Integer(n),
            Err(_) => FieldValue::text(input),
        },
        fields::GENDER | fields::DESTINATION | fields::BUDGET | fields::TRAVEL_STYLE => FieldValue::choice(input),
        _ => FieldValue::text(input),
    }
}

fn describe(value: &FieldValue) -> String {
    match value {
        FieldValue::Integer(n) => n.to_string(),
        FieldValue::Date(d) => d.to_string(),
        FieldValue::List(items) => items.join(", "),
        FieldValue::Record(map) => format!("{} campos", map.len()),
        other => other.as_str().unwrap_or_default().to_string(),
    }
}

fn print_bookings(view: &BookingsView) {
    match view {
        BookingsView::Loading => println!("Cargando reservas..."),
        BookingsView::Failed(e) => eprintln!("Error cargando reservas: {}", e),
        BookingsView::Empty => println!("No tienes reservas"),
        BookingsView::Timeline(t) => {
            for (label, entries) in [("Próximas", &t.upcoming), ("En curso", &t.ongoing), ("Pasadas", &t.past)] {
                if entries.is_empty() {
                    continue;
                }
                println!("\n{}:", label);
                for e in entries {
                    print_entry(e);
                }
            }
        }
    }
}

fn print_entry(e: &TimelineEntry) {
    println!("  {} | {} | {} -> {} | {} noches | {}",
             e.kind.filter_key(),
             e.title,
             e.start_date,
             e.end_date,
             e.nights,
             e.status_label);
}

fn demo_bookings(today: NaiveDate) -> Vec<BookingRecord> {
    let record = |kind: BookingKind,
                  title: &str,
                  location: &str,
                  offset: i64,
                  nights: i64,
                  status: BookingStatus,
                  amount: u64| {
        let start = today + Duration::days(offset);
        BookingRecord { id: Uuid::new_v4(),
                        kind,
                        title: title.to_string(),
                        location: location.to_string(),
                        start_date: start,
                        end_date: start + Duration::days(nights),
                        status,
                        amount }
    };
    vec![record(BookingKind::Flight, "BLR-GOI", "Goa", 12, 0, BookingStatus::Confirmed, 6_400),
         record(BookingKind::Hotel, "Beach resort", "Goa", 12, 4, BookingStatus::Pending, 48_000),
         record(BookingKind::Package, "Backwaters houseboat", "Alleppey", -1, 3, BookingStatus::Confirmed, 32_000),
         record(BookingKind::Hotel, "Heritage haveli", "Jaipur", -60, 2, BookingStatus::Confirmed, 18_500),
         record(BookingKind::Flight, "BLR-DEL", "Delhi", 30, 0, BookingStatus::Cancelled, 7_900),]
}
