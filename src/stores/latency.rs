use std::time::Duration;

/// Artificial response delay applied by every store operation.
///
/// The stores stand in for a remote API, so each call pauses for a
/// per-operation base duration before touching its collection.
/// Construct stores with `Latency::None` in tests to skip the delays.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Latency {
    #[default]
    Simulated,
    None,
}

impl Latency {
    pub(crate) async fn pause(self, base: Duration) {
        if self == Latency::Simulated {
            tokio::time::sleep(base).await;
        }
    }
}
