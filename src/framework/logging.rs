use tracing_subscriber::{
    prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

use tracing::{instrument, trace};

const fn default_filter(debug: bool) -> &'static str {
    if debug {
        "wombot=debug"
    } else {
        "wombot=info"
    }
}

/// `RUST_LOG` wins over the `debug` switch when it's set.
#[instrument(skip_all)]
pub fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(default_filter(debug)).expect("hard-coded env filter should be valid")
    });

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(filter)
        .init();

    trace!("finished");
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;

    use super::default_filter;

    #[test]
    fn default_filters_parse() {
        for debug in [false, true] {
            assert!(EnvFilter::try_new(default_filter(debug)).is_ok());
        }
    }

    #[test]
    fn debug_switch_raises_level() {
        assert!(default_filter(true).ends_with("=debug"));
        assert!(default_filter(false).ends_with("=info"));
    }
}
