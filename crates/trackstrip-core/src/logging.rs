pub fn init() {
    tracing_subscriber::fmt()
        .with_env_filter("info,trackstrip_ui=debug")
        .init();
}
