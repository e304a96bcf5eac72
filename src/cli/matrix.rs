use crate::ciphers::playfair::{create_matrix, SIZE};
use crate::error::Result;

/// Render the Playfair key square for a keyword, as a table or as JSON
pub fn show_matrix(key: &str, json: bool) -> Result<String> {
    let matrix = create_matrix(key)?;

    if json {
        let mut out = serde_json::to_string(&matrix)?;
        out.push('\n');
        return Ok(out);
    }

    let mut output = String::new();
    output.push_str("Playfair Key Square\n");
    output.push_str("===================\n\n");
    output.push_str(&format!("Key: {}\n\n", key));

    let border = format!("+{}+\n", "-".repeat(SIZE * 2 + 1));
    output.push_str(&border);
    for row in matrix.rows() {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        output.push_str(&format!("| {} |\n", cells.join(" ")));
    }
    output.push_str(&border);
    output.push_str("\nI and J share a cell.\n");

    Ok(output)
}
