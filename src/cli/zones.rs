use anyhow::Result;
use serde_json::json;

use duval::geometry::ZONE_POLYGONS;
use duval::report::{zone_traces, TernaryLayout};

use super::ChartFormat;

/// Print the reference zone outlines
pub fn run(format: ChartFormat) -> Result<()> {
    match format {
        ChartFormat::Json => {
            let document = json!({
                "ternary": TernaryLayout::default(),
                "zones": zone_traces(),
            });
            println!("{}", serde_json::to_string_pretty(&document)?);
        }
        ChartFormat::Table => {
            println!("Duval Triangle 1 Zones (a = CH4%, b = C2H2%, c = C2H4%)");
            println!("========================================================");
            for polygon in &ZONE_POLYGONS {
                println!("{:<3} {}", polygon.zone.as_str(), polygon.zone.description());
                let vertices: Vec<String> = polygon
                    .vertices
                    .iter()
                    .map(|p| format!("({}, {}, {})", p.a, p.b, p.c))
                    .collect();
                println!("    {}", vertices.join(" "));
            }
        }
    }

    Ok(())
}
