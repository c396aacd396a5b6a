use html5ever::driver;
use html5ever::tendril::TendrilSink;
use markup5ever_rcdom::{Handle, NodeData, RcDom};

/// Strips all markup from user-submitted text, keeping only the character
/// data. `script` and `style` subtrees are dropped wholesale, so input that
/// is nothing but active content sanitizes to an empty string.
///
/// Deterministic and infallible: html5ever recovers from any malformed
/// input, so there is no error path.
pub fn sanitize(raw: &str) -> String {
    let dom = driver::parse_document(RcDom::default(), Default::default()).one(raw);

    let mut out = String::new();
    collect_text(&dom.document, &mut out);
    out
}

fn collect_text(node: &Handle, out: &mut String) {
    for child in node.children.borrow().iter() {
        match &child.data {
            NodeData::Element { name, .. } => {
                let tag = name.local.as_ref();
                if tag.eq_ignore_ascii_case("script") || tag.eq_ignore_ascii_case("style") {
                    continue;
                }
                collect_text(child, out);
            }
            NodeData::Text { contents } => {
                out.push_str(&contents.borrow());
            }
            // Comments, doctypes, processing instructions carry no user text
            _ => collect_text(child, out),
        }
    }
}
