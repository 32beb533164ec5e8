/// Resolves once the process is asked to stop and logs which signal did it.
pub async fn shutdown_signal() {
    let signal = wait_for_signal().await;

    info!(signal, "shutting down");
}

#[cfg(unix)]
async fn wait_for_signal() -> &'static str {
    use futures::future::select_all;
    use smallvec::SmallVec;
    use tokio::signal::unix::{signal, SignalKind};

    let kinds = [
        (SignalKind::interrupt(), "SIGINT"),
        (SignalKind::terminate(), "SIGTERM"),
        (SignalKind::quit(), "SIGQUIT"),
    ];

    let listeners: SmallVec<[_; 3]> = kinds
        .into_iter()
        .filter_map(|(kind, name)| match signal(kind) {
            Ok(listener) => Some((listener, name)),
            Err(error) => {
                error!(signal = name, %error, "failed to listen for signal");
                None
            }
        })
        .collect();

    if listeners.is_empty() {
        return std::future::pending().await;
    }

    let waits = listeners.into_iter().map(|(mut listener, name)| {
        Box::pin(async move {
            listener.recv().await;
            name
        })
    });

    select_all(waits).await.0
}

#[cfg(not(unix))]
async fn wait_for_signal() -> &'static str {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(%error, "failed to listen for ctrl-c");
        std::future::pending::<()>().await;
    }

    "ctrl-c"
}
