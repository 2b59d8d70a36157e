use client::view_state::{ScopeMode, UserListScreen};
use client::DanusApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let log_dir = std::path::Path::new("target").join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_dir.join("danusku.log"))?;

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .init();

    let config = client::config::load_config()?;
    let api = DanusApi::from_config(&config.api)?;

    let mut args = std::env::args().skip(1);
    let mode = match args.next().as_deref() {
        Some("pending") => ScopeMode::PendingSetor,
        Some("watch") => {
            let admin_id: i64 = args
                .next()
                .ok_or_else(|| anyhow::anyhow!("pemakaian: danusku watch <admin_id>"))?
                .parse()?;
            return watch_pending(api, admin_id, config.poll.interval_secs).await;
        }
        _ => ScopeMode::HariIni,
    };
    tracing::info!(?mode, base_url = %config.api.base_url, "memuat daftar user");

    let mut screen = UserListScreen::new();
    screen.refresh(&api, mode).await;
    if let Some(message) = screen.last_error() {
        anyhow::bail!("{}", message);
    }

    let vm = screen.view();
    println!(
        "Sudah setor: {}  Belum setor: {}  Belum ambil: {}",
        vm.counts.sudah_setor, vm.counts.belum_setor, vm.counts.belum_ambil
    );
    println!(
        "Halaman {}/{} ({} user)",
        vm.page,
        vm.total_pages.max(1),
        vm.total_count
    );
    for u in &vm.visible {
        println!(
            "{:<24} {:<12} ambil {:>3}  setor {:>3}  kurang Rp{}",
            u.user.nama_lengkap,
            u.status.label(),
            u.total_ambil,
            u.total_setor,
            u.total_harus_setor
        );
    }

    Ok(())
}

/// Follow the pending-request indicator for one admin until interrupted.
async fn watch_pending(api: DanusApi, admin_id: i64, interval_secs: u64) -> anyhow::Result<()> {
    use client::poll::PendingPoller;
    use std::sync::Arc;
    use std::time::Duration;

    let poller = PendingPoller::start_for_admin(
        Arc::new(api),
        admin_id,
        Duration::from_secs(interval_secs),
    );
    let mut rx = poller.subscribe();
    loop {
        rx.changed().await?;
        println!("Request setor pending: {}", *rx.borrow());
    }
}
