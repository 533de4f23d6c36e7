fn main() -> anyhow::Result<()> {
    xclude::init();

    xclude::cli::run()
}
