fn main() -> anyhow::Result<()> {
    escape_time_explorer::run_cli()
}
