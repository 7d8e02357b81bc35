//! Word table display — `numeral tables`.

use anyhow::Result;
use std::path::Path;

use numeral::ScaleProvider;
use numeral::config::{Config, Overrides};

pub fn cmd_tables(working_dir: &Path, overrides: &Overrides) -> Result<()> {
    use numeral::ui::heading;

    let config = Config::new(working_dir, overrides)?;
    let tables = config.load_tables()?;
    let scales = tables.scales();

    println!();
    println!("{}", heading("Word Tables"));
    println!();
    println!("Source: {}", config.table_source);
    println!();

    println!("[lexicon]");
    for (value, word) in tables.lexicon().iter() {
        println!("  {:>2} = {}", value, word);
    }
    println!();

    println!("[scales]");
    for tier in scales.tiers() {
        println!(
            "  10^{:<2} = {:<12} from {}",
            tier.exponent(),
            tier.word(),
            tier.lower_bound()
        );
    }
    println!();

    println!("Boundary policy: {}", scales.policy());
    println!("Largest supported number: {}", scales.ceiling() - 1);
    println!();

    Ok(())
}
