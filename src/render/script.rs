//! Trailing script block wiring the fragment to the host's message channel.

use crate::options::{GradientField, SortOrder, ViewMode};

/// Renders the `<script>` block with the command callbacks and a sync step
/// that forces the dropdowns to the effective session values. The sync
/// matters after a refresh: the webview may restore stale form state.
pub(super) fn command_script(sort: SortOrder, view: ViewMode, field: GradientField) -> String {
    format!(
        r#"<script>
function onMemoryMosaicTileClick(cid) {{ pycmd("memorymosaic_open_card:" + cid); }}
function onMemoryMosaicSortChange(key) {{ pycmd("memorymosaic_sort_change:" + key); }}
function onMemoryMosaicViewModeChange(key) {{ pycmd("memorymosaic_view_mode_change:" + key); }}
function onMemoryMosaicGradientFieldChange(key) {{ pycmd("memorymosaic_gradient_field_change:" + key); }}
function onMemoryMosaicLoadMore() {{ pycmd("memorymosaic_load_more"); }}
function onMemoryMosaicLoadAll() {{ pycmd("memorymosaic_load_all"); }}
(function () {{
    var sync = [["mosaic-sort-select", "{sort}"], ["mosaic-view-select", "{view}"], ["mosaic-field-select", "{field}"]];
    for (var i = 0; i < sync.length; i++) {{
        var el = document.getElementById(sync[i][0]);
        if (el) {{ el.value = sync[i][1]; }}
    }}
}})();
</script>"#,
        sort = sort.key(),
        view = view.key(),
        field = field.key(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_script_injects_effective_keys() {
        let script = command_script(SortOrder::DueAsc, ViewMode::Gradient, GradientField::Factor);
        assert!(script.contains(r#"["mosaic-sort-select", "due_asc"]"#));
        assert!(script.contains(r#"["mosaic-view-select", "gradient"]"#));
        assert!(script.contains(r#"["mosaic-field-select", "factor"]"#));
        assert!(script.contains(r#"pycmd("memorymosaic_open_card:" + cid)"#));
    }
}
