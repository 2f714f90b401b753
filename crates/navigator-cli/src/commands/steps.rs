use serde::Serialize;

use navigator_core::StepId;

#[derive(Serialize)]
struct StepRow {
    index: usize,
    id: StepId,
    title: &'static str,
}

pub fn run(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let rows: Vec<StepRow> = StepId::ALL
        .iter()
        .map(|&id| StepRow {
            index: id.index(),
            id,
            title: id.title(),
        })
        .collect();

    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for row in &rows {
            println!("{}  {:<14} {}", row.index, row.id.as_str(), row.title);
        }
    }
    Ok(())
}
