fn main() -> anyhow::Result<()> {
    nlf_scaffold::cli::main()
}
