use dioxus::prelude::*;

use crate::components::data_table::DataTable;

#[component]
pub fn K8sPage() -> Element {
    let headers = ["Name", "Master disk (GB)", "Workers", "IP"].map(String::from).to_vec();

    rsx! {
        div {
            class: "p-10 grid gap-5",
            h1 { "Kubernetes clusters" }
            DataTable { headers, rows: Vec::new() }
        }
    }
}
