use anyhow::Result;

fn main() -> Result<()> {
    uncomment_cli::main_entry()
}
