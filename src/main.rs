fn main() -> anyhow::Result<()> {
    roshambo::log()?;
    roshambo::cli::run()
}
