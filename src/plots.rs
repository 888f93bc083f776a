use std::collections::BTreeSet;

use anyhow::{Context, Result};
use charming::{
    component::{Axis, Legend, Title},
    datatype::CompositeValue,
    element::{AxisLabel, AxisType, NameLocation, TextStyle},
    series::Bar,
    Chart, HtmlRenderer, ImageFormat, ImageRenderer,
};

use crate::{datasets::Dataset, records::BenchmarkRecord};

static TITLE_FONT_SIZE: u8 = 25;
static LABEL_FONT_SIZE: u8 = 15;

// 12 x 6 inch figure rendered at 300 dpi
static CHART_WIDTH: u32 = 3600;
static CHART_HEIGHT: u32 = 1800;

/// Mean execution time per (operation type, polynomial modulus degree) cell.
///
/// Degrees are sorted ascending, operation types keep the order in which
/// they first appear in the log. A cell without any measurement stays empty
/// and renders no bar.
pub struct GroupedTimings {
    degrees: Vec<u64>,
    op_types: Vec<String>,
    mean_ms: Vec<Vec<Option<f64>>>,
}

impl GroupedTimings {
    pub fn from_records(dataset: Dataset, records: &[BenchmarkRecord]) -> Self {
        let degrees: Vec<u64> = records
            .iter()
            .map(|record| record.poly_modulus_degree)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut op_types: Vec<String> = Vec::new();
        let mut sums: Vec<Vec<f64>> = Vec::new();
        let mut counts: Vec<Vec<usize>> = Vec::new();

        for record in records {
            let op_type = dataset.op_type(&record.operation);

            let op_index = match op_types.iter().position(|existing| *existing == op_type) {
                Some(index) => index,
                None => {
                    op_types.push(op_type);
                    sums.push(vec![0.0; degrees.len()]);
                    counts.push(vec![0; degrees.len()]);
                    op_types.len() - 1
                }
            };

            let degree_index = degrees
                .binary_search(&record.poly_modulus_degree)
                .expect("degrees were collected from these records");

            sums[op_index][degree_index] += record.time_ms;
            counts[op_index][degree_index] += 1;
        }

        let mean_ms = sums
            .into_iter()
            .zip(counts)
            .map(|(op_sums, op_counts)| {
                op_sums
                    .into_iter()
                    .zip(op_counts)
                    .map(|(sum, count)| (count != 0).then(|| sum / count as f64))
                    .collect()
            })
            .collect();

        Self {
            degrees,
            op_types,
            mean_ms,
        }
    }

    pub fn degrees(&self) -> &[u64] {
        &self.degrees
    }

    pub fn op_types(&self) -> &[String] {
        &self.op_types
    }

    pub fn mean_ms(&self, op_index: usize) -> &[Option<f64>] {
        &self.mean_ms[op_index]
    }
}

pub fn benchmark_chart(dataset: Dataset, records: &[BenchmarkRecord]) -> Chart {
    let grouped = GroupedTimings::from_records(dataset, records);

    let degree_names: Vec<String> = grouped
        .degrees()
        .iter()
        .map(|degree| degree.to_string())
        .collect();

    let mut chart = Chart::new()
        .title(
            Title::new()
                .text(dataset.title())
                .left("center")
                .text_style(TextStyle::new().font_size(TITLE_FONT_SIZE).color("black")),
        )
        .legend(
            Legend::new()
                .right("10%")
                .text_style(TextStyle::new().font_size(LABEL_FONT_SIZE).color("black")),
        )
        .background_color("white")
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .data(degree_names)
                .name("Polynomial Modulus Degree")
                .name_location(NameLocation::Middle)
                .name_gap(45)
                .name_text_style(TextStyle::new().font_size(LABEL_FONT_SIZE).color("black"))
                .axis_label(AxisLabel::new().rotate(45).color("black")),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Log)
                .name("Execution Time (ms, log scale)")
                .name_text_style(TextStyle::new().font_size(LABEL_FONT_SIZE).color("black"))
                .axis_label(AxisLabel::new().color("black")),
        );

    for (op_index, op_type) in grouped.op_types().iter().enumerate() {
        // echarts skips bars for the "-" placeholder, which is exactly
        // what an empty cell should look like
        let heights: Vec<CompositeValue> = grouped
            .mean_ms(op_index)
            .iter()
            .map(|mean| match mean {
                Some(value) => CompositeValue::from(*value),
                None => CompositeValue::from("-"),
            })
            .collect();

        chart = chart.series(Bar::new().name(op_type).data(heights));
    }

    chart
}

pub fn save_chart(chart: &Chart, dataset: Dataset) -> Result<()> {
    let mut renderer = ImageRenderer::new(CHART_WIDTH, CHART_HEIGHT);
    renderer
        .save_format(ImageFormat::Png, chart, dataset.plot_path())
        .with_context(|| format!("failed to save plot to {}", dataset.plot_path().display()))?;

    // the html file stands in for an interactive plot window
    let mut preview_renderer = HtmlRenderer::new(dataset.title(), 1200, 600);
    preview_renderer
        .save(chart, dataset.preview_path())
        .with_context(|| {
            format!(
                "failed to save plot preview to {}",
                dataset.preview_path().display()
            )
        })?;

    Ok(())
}
