use engine_logging::{engine_debug, engine_info};

use crate::{BackendConfig, Prober};

/// Local addresses tried after the primary, in probe order.
pub fn fallback_candidates(config: &BackendConfig) -> Vec<String> {
    (0..config.fallback_count)
        .filter_map(|offset| config.fallback_base_port.checked_add(offset))
        .map(|port| format!("http://{}:{}", config.fallback_host, port))
        .collect()
}

/// Probes candidates one at a time and returns the first that answers.
///
/// Each probe completes before the next starts; nothing after the winner is probed.
pub async fn find_first_reachable(prober: &dyn Prober, candidates: &[String]) -> Option<String> {
    for candidate in candidates {
        match prober.probe(candidate).await {
            Ok(()) => return Some(candidate.clone()),
            Err(failure) => {
                engine_debug!("Probe of {} failed: {}", candidate, failure);
            }
        }
    }
    None
}

/// Picks the backend for the session: the primary if it answers, else the
/// first reachable fallback. `None` means keep the configured default.
pub async fn resolve_backend(prober: &dyn Prober, config: &BackendConfig) -> Option<String> {
    if let Some(primary) =
        find_first_reachable(prober, std::slice::from_ref(&config.primary_url)).await
    {
        engine_info!("Using primary backend {}", primary);
        return Some(primary);
    }

    engine_info!(
        "Primary backend {} unavailable, probing local fallbacks",
        config.primary_url
    );
    let fallbacks = fallback_candidates(config);
    let found = find_first_reachable(prober, &fallbacks).await;
    match &found {
        Some(address) => engine_info!("Using fallback backend {}", address),
        None => engine_info!(
            "No backend answered; keeping default {}",
            config.primary_url
        ),
    }
    found
}
