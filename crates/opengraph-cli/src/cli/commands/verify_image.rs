//! `opengraph verify-image <url>` – exit 0 if reachable, 2 otherwise.

use opengraph_core::OpenGraph;

pub fn run_verify_image(og: &OpenGraph, url: &str) -> i32 {
    if og.verify_image_url(url) {
        println!("ok");
        0
    } else {
        println!("unreachable");
        2
    }
}
