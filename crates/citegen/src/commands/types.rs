//! `citegen types`

use anyhow::Result;
use citegen_core::list_source_types;

pub fn execute() -> Result<()> {
    print!("{}", render());
    Ok(())
}

fn render() -> String {
    let types = list_source_types();
    let width = types.iter().map(|(tag, _)| tag.len()).max().unwrap_or(0);
    types
        .iter()
        .map(|(tag, name)| format!("{tag:<width$}  {name}\n"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_lists_every_type_in_order() {
        let text = render();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 14);
        assert_eq!(lines[0], "journal     Journal Article");
        assert_eq!(lines[13], "other       Other Source");
    }
}
