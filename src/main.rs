fn main() -> anyhow::Result<()> {
    roadmap::cli::run_cli()
}
