fn main() {
    #[cfg(feature = "cli")]
    anydiff::cli::run();

    #[cfg(not(feature = "cli"))]
    {
        eprintln!("anydiff: CLI not enabled. Rebuild with `--features cli`.");
        std::process::exit(2);
    }
}
