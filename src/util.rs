use std::{env, sync::Once};

/// Setup function that will only run once, even if called multiple times.
pub fn setup_logger() {
    Once::new().call_once(|| {
        env::set_var("RUST_LOG", "info");
        env_logger::Builder::from_env(
            env_logger::Env::default()
                .default_filter_or("swapd_client=info")
                .default_write_style_or("always"),
        )
        .init();
    });
}
