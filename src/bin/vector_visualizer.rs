use anyhow::Result;

use seal_benchmark_plots::{datasets::Dataset, plots, records};

fn main() -> Result<()> {
    let dataset = Dataset::Vector;

    let records = records::read_records(dataset.input_path())?;
    let chart = plots::benchmark_chart(dataset, &records);
    plots::save_chart(&chart, dataset)?;

    println!(
        "{} benchmark plot written to {}",
        dataset,
        dataset.plot_path().display()
    );

    Ok(())
}
