//! CLI handlers for listing the loaded catalogs.

use anyhow::Result;

use crate::cli::output::{output_json_list, print_table, OutputMode};
use crate::init::AppContext;

pub fn handle_catalog(ctx: &AppContext, mode: OutputMode) -> Result<()> {
    if mode == OutputMode::Json {
        output_json_list(&ctx.catalog.categories);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = ctx
        .catalog
        .categories
        .iter()
        .map(|cat| {
            vec![
                cat.id.clone(),
                cat.label.clone(),
                format!("{:.2}", cat.weight),
                format!("{:.2}", cat.threshold),
                format!("{}", cat.triggers.len()),
            ]
        })
        .collect();
    print_table(&["ID", "Label", "Weight", "Threshold", "Triggers"], rows);
    Ok(())
}

pub fn handle_templates(ctx: &AppContext, mode: OutputMode) -> Result<()> {
    if mode == OutputMode::Json {
        output_json_list(&ctx.corpus.templates);
        return Ok(());
    }

    let rows: Vec<Vec<String>> = ctx
        .corpus
        .templates
        .iter()
        .map(|tpl| {
            vec![
                tpl.id.clone(),
                tpl.title.clone(),
                tpl.category.label().to_string(),
                format!("{}", tpl.variants.len()),
                tpl.key_points.join("; "),
            ]
        })
        .collect();
    print_table(&["ID", "Title", "Category", "Variants", "Key Points"], rows);
    Ok(())
}
