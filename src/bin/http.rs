#[cfg(feature = "http_api")]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    use std::net::SocketAddr;

    use timetable_builder::{EditorConfig, ScheduleStore, http_api, init_logging};

    let config = EditorConfig::from_env();
    init_logging(&config.log_level)?;

    let addr: SocketAddr = config.http_addr.parse()?;

    let mut store = ScheduleStore::new();
    store.set_dimensions(config.default_grade, "", config.default_periods.get() as i64);

    log::info!("timetable HTTP API listening on http://{addr}");
    println!("timetable HTTP API listening on http://{addr}");
    http_api::serve(addr, store).await?;
    Ok(())
}

#[cfg(not(feature = "http_api"))]
fn main() {
    eprintln!("Rebuild with the `http_api` feature to enable the HTTP server.");
}
