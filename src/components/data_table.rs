use dioxus::prelude::*;

use crate::theme::ThemeConfig;

/// Plain table honouring the data-table defaults from [`ThemeConfig`].
#[component]
pub fn DataTable(headers: Vec<String>, rows: Vec<Vec<String>>) -> Element {
    let theme = use_context::<ThemeConfig>();
    let defaults = theme.defaults.data_table;

    let head_class = if defaults.fixed_header { "sticky top-0" } else { "" };
    let colspan = headers.len().max(1);

    rsx! {
        table {
            class: "w-full",

            thead {
                class: head_class,
                tr {
                    for header in headers.iter() {
                        th { "{header}" }
                    }
                }
            }
            tbody {
                if rows.is_empty() {
                    tr {
                        td {
                            colspan: "{colspan}",
                            class: "text-center p-4",
                            "{defaults.no_data_text}"
                        }
                    }
                }
                for row in rows.iter() {
                    tr {
                        for cell in row.iter() {
                            td { "{cell}" }
                        }
                    }
                }
            }
        }
    }
}
