fn main() {
    // Export the ESP-IDF build environment for cross builds.
    // Host builds (tests, fuzzing) have no IDF environment — skip.
    if std::env::var_os("CARGO_FEATURE_ESPIDF").is_some() {
        embuild::espidf::sysenv::output();
    }
}
