pub fn setup_tracing() {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        // disable printing the name of the module in every log line.
        .with_target(false)
        .with_ansi(false)
        // the simulation has its own day counter, wall-clock time only adds noise.
        .without_time()
        .json()
        .init();
}
