use std::sync::Arc;

use anyhow::{Context, Result};
use payroll_api::{
    app::build_router,
    application::{
        booking_service::BookingService, employee_service::EmployeeService,
        order_service::OrderService,
    },
    bootstrap,
    config::AppConfig,
    domain::{booking::Booking, employee::Employee, order::Order},
    infrastructure::{DynRepository, in_memory::InMemoryRepository},
    state::AppState,
};
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env().context("failed to load configuration")?;

    let employees: DynRepository<Employee> = Arc::new(InMemoryRepository::new());
    let orders: DynRepository<Order> = Arc::new(InMemoryRepository::new());
    let bookings: DynRepository<Booking> = Arc::new(InMemoryRepository::new());

    if config.seed {
        bootstrap::seed(&employees, &orders, &bookings)
            .await
            .context("failed to preload sample data")?;
    }

    let state = AppState::new(
        Arc::new(EmployeeService::new(employees)),
        Arc::new(OrderService::new(orders)),
        Arc::new(BookingService::new(bookings)),
    );

    let app = build_router(state);
    let listener = tokio::net::TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;

    info!(bind_addr = %config.bind_addr, seed = config.seed, "payroll API started");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("payroll_api=debug,tower_http=info")),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = tokio::signal::ctrl_c().await {
            error!(error = %err, "unable to install ctrl+c handler");
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{SignalKind, signal};

        match signal(SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(err) => {
                error!(error = %err, "unable to install sigterm handler");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
