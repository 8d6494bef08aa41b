use comfy_table::{ContentArrangement, Table};

use sg_targeting::ShapeKind;

pub fn run() -> Result<(), String> {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Id", "Name", "Parameters", "Defaults", "Description"]);

    for kind in ShapeKind::all() {
        let def = kind.definition();
        table.add_row(vec![
            def.id().to_string(),
            def.name.to_string(),
            def.parameter_type.fields().join(", "),
            def.defaults.to_string(),
            def.description.to_string(),
        ]);
    }

    println!("{table}");
    Ok(())
}
