use dioxus::prelude::*;

use crate::components::data_table::DataTable;

#[component]
pub fn VmPage() -> Element {
    let headers = ["Name", "Disk (GB)", "RAM (GB)", "CPU", "IP"].map(String::from).to_vec();

    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Virtual machines" }
            DataTable { headers, rows: Vec::new() }
        }
    }
}
