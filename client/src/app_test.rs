#![cfg(feature = "ssr")]

use super::*;
use crate::consts::{THEME_ATTRIBUTE, THEME_STORAGE_KEY};

fn render_bootstrap() -> String {
    Owner::new().with(|| view! { <ThemeBootstrap/> }.to_html())
}

#[test]
fn bootstrap_renders_an_inline_script() {
    let html = render_bootstrap();
    let open = html.find("<script>");
    let close = html.find("</script>");
    assert!(open.is_some() && close.is_some() && open < close, "{html}");
}

#[test]
fn bootstrap_script_is_not_html_escaped() {
    let html = render_bootstrap();
    assert!(html.contains(&format!("getItem(\"{THEME_STORAGE_KEY}\")")), "{html}");
    assert!(html.contains(&format!("setAttribute(\"{THEME_ATTRIBUTE}\",t)")), "{html}");
    assert!(!html.contains("&quot;"), "{html}");
}
