use std::io::Write;

use crate::pipeline::ClassifiedSample;

const HEADERS: [&str; 5] = ["Fault Location", "CH4%", "C2H4%", "C2H2%", "Zone"];

fn row_cells(sample: &ClassifiedSample) -> [String; 5] {
    [
        sample.record.fault_location.clone(),
        format!("{:.2}", sample.ratios.ch4_pct),
        format!("{:.2}", sample.ratios.c2h4_pct),
        format!("{:.2}", sample.ratios.c2h2_pct),
        sample.classification.to_string(),
    ]
}

/// Render classified samples as a left-aligned text table.
///
/// Percentages are rounded to two decimals.
pub fn render_table(samples: &[ClassifiedSample]) -> String {
    let rows: Vec<[String; 5]> = samples.iter().map(row_cells).collect();

    let mut widths = HEADERS.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row.iter()) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut output = String::new();
    let mut push_line = |cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .zip(widths.iter())
            .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
            .collect();
        output.push_str(line.join("  ").trim_end());
        output.push('\n');
    };

    push_line(&HEADERS.map(String::from));
    push_line(&widths.map(|w| "-".repeat(w)));
    for row in &rows {
        push_line(row);
    }

    output
}

/// Write classified samples as CSV with the pass-through columns first
pub fn write_csv<W: Write>(samples: &[ClassifiedSample], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record([
        "Fault location",
        "CH4_ppm",
        "C2H4_ppm",
        "C2H2_ppm",
        "Color",
        "CH4%",
        "C2H4%",
        "C2H2%",
        "Zone",
    ])?;

    for sample in samples {
        let gas = &sample.record.sample;
        csv_writer.write_record([
            sample.record.fault_location.clone(),
            gas.ch4.to_string(),
            gas.c2h4.to_string(),
            gas.c2h2.to_string(),
            sample.record.color.clone(),
            sample.ratios.ch4_pct.to_string(),
            sample.ratios.c2h4_pct.to_string(),
            sample.ratios.c2h2_pct.to_string(),
            sample.classification.to_string(),
        ])?;
    }

    csv_writer.flush()?;
    Ok(())
}
